//! Customer partitioning and winner selection.

use serde::Serialize;
use tracing::{debug, trace};

use crate::types::{Agent, AgentId, AgentLoad, Customer};

/// Outcome of routing a customer pool across agents.
///
/// Every input customer appears exactly once, either in one agent's load or
/// in the unassigned list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    loads: Vec<AgentLoad>,
    unassigned: Vec<Customer>,
}

impl Allocation {
    /// Per-agent loads, in the order the agents were partitioned
    pub fn loads(&self) -> &[AgentLoad] {
        &self.loads
    }

    /// Customers whose score exceeds every partitioned agent's score
    pub fn unassigned(&self) -> &[Customer] {
        &self.unassigned
    }

    /// Customers routed to `agent_id`, or `None` if that agent took no part
    pub fn customers_of(&self, agent_id: AgentId) -> Option<&[Customer]> {
        self.loads
            .iter()
            .find(|load| load.agent.id == agent_id)
            .map(|load| load.customers.as_slice())
    }

    /// `(agent id, customer count)` pairs in partition order
    pub fn counts(&self) -> Vec<(AgentId, usize)> {
        self.loads
            .iter()
            .map(|load| (load.agent.id, load.count()))
            .collect()
    }

    /// The agent serving strictly more customers than every other agent.
    ///
    /// `None` when there are no agents or when two or more agents share the
    /// highest count, zero included.
    pub fn winner(&self) -> Option<AgentId> {
        let max = self.loads.iter().map(AgentLoad::count).max()?;

        let mut leaders = self.loads.iter().filter(|load| load.count() == max);
        let leader = leaders.next()?;
        if leaders.next().is_some() {
            debug!(max, "Several agents share the highest customer count");
            return None;
        }

        Some(leader.agent.id)
    }
}

/// Routes each customer to the weakest agent able to serve it.
///
/// `agents` must already be sorted by ascending score. Each agent takes
/// every still-unassigned customer with a score `<=` its own, so a customer
/// is claimed by the first capable agent and never seen again. The pool
/// shrinks monotonically, keeping the work at one pass per agent over what
/// is left.
pub fn partition(agents: &[Agent], customers: &[Customer]) -> Allocation {
    let mut remaining: Vec<Customer> = customers.to_vec();
    let mut loads = Vec::with_capacity(agents.len());

    for agent in agents {
        let mut served = Vec::new();
        if !remaining.is_empty() {
            remaining.retain(|customer| {
                if agent.can_serve(customer) {
                    served.push(*customer);
                    false
                } else {
                    true
                }
            });
        }

        trace!(
            agent = %agent.id,
            score = %agent.score,
            served = served.len(),
            remaining = remaining.len(),
            "Agent claimed customers"
        );

        loads.push(AgentLoad {
            agent: *agent,
            customers: served,
        });
    }

    Allocation {
        loads,
        unassigned: remaining,
    }
}
