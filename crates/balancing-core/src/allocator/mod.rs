//! # Allocator
//!
//! Assigns a pool of customers to customer-success agents by score and reports
//! the agent that ends up serving the most customers.
//!
//! ## Algorithm
//!
//! 1. Drop agents whose id is in the unavailable set.
//! 2. Sort the remaining agents by ascending score (stable).
//! 3. Walk the agents in that order; each one claims every customer still in
//!    the pool whose score is `<=` its own.
//! 4. The agent with strictly the most customers wins. No agents, or a tie
//!    for the highest count, means there is no winner.
//!
//! ```text
//!  agents ──► filter unavailable ──► sort by score ──┐
//!                                                    ▼
//!  customers ───────────────────────────────► partition ──► winner
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cs_balancing_core::{Agent, AgentId, Customer, CustomerSuccessBalancer};
//!
//! let agents = vec![Agent::new(1, 60), Agent::new(2, 20), Agent::new(3, 95), Agent::new(4, 75)];
//! let customers = vec![
//!     Customer::new(1, 90), Customer::new(2, 20), Customer::new(3, 70),
//!     Customer::new(4, 40), Customer::new(5, 60), Customer::new(6, 10),
//! ];
//!
//! let balancer = CustomerSuccessBalancer::new(agents, customers, [AgentId(2), AgentId(4)]);
//! assert_eq!(balancer.execute(), 1);
//! ```
//!
//! The allocator borrows its inputs and never fails. Checks on ids and sizes
//! belong to [`crate::validation`] and run before this point.

pub mod partition;

pub use partition::{partition, Allocation};

use std::collections::HashSet;
use tracing::{debug, info, instrument};

use crate::types::{Agent, AgentId, Customer};

/// Agents whose id is not listed as unavailable, in input order.
///
/// Unavailable ids that match no agent are ignored.
pub fn available_agents(agents: &[Agent], unavailable: &HashSet<AgentId>) -> Vec<Agent> {
    agents
        .iter()
        .filter(|agent| !unavailable.contains(&agent.id))
        .copied()
        .collect()
}

/// Sorts agents by ascending score. Agents with equal scores keep their order.
pub fn sort_by_score(mut agents: Vec<Agent>) -> Vec<Agent> {
    agents.sort_by_key(|agent| agent.score);
    agents
}

/// Runs the full allocation and returns every agent's load.
#[instrument(
    name = "allocate",
    skip_all,
    fields(agents = agents.len(), customers = customers.len(), unavailable = unavailable.len())
)]
pub fn allocate(
    agents: &[Agent],
    customers: &[Customer],
    unavailable: &HashSet<AgentId>,
) -> Allocation {
    let available = available_agents(agents, unavailable);
    debug!(
        available = available.len(),
        excluded = agents.len() - available.len(),
        "Filtered unavailable agents"
    );

    let sorted = sort_by_score(available);
    let allocation = partition(&sorted, customers);
    debug!(
        unassigned = allocation.unassigned().len(),
        "Partitioned customers across agents"
    );

    allocation
}

/// Id of the agent serving the most customers, or `0` if there is no unique one.
pub fn execute(agents: &[Agent], customers: &[Customer], unavailable: &HashSet<AgentId>) -> i64 {
    let winner = allocate(agents, customers, unavailable).winner();
    match winner {
        Some(id) => info!(agent = %id, "Selected agent with the most customers"),
        None => info!("No single agent serves the most customers"),
    }
    winner.unwrap_or(AgentId::NO_WINNER).0
}

/// A single balancing run over owned inputs.
#[derive(Debug, Clone)]
pub struct CustomerSuccessBalancer {
    agents: Vec<Agent>,
    customers: Vec<Customer>,
    unavailable: HashSet<AgentId>,
}

impl CustomerSuccessBalancer {
    pub fn new(
        agents: Vec<Agent>,
        customers: Vec<Customer>,
        unavailable: impl IntoIterator<Item = AgentId>,
    ) -> Self {
        Self {
            agents,
            customers,
            unavailable: unavailable.into_iter().collect(),
        }
    }

    /// Full allocation, including per-agent loads and unassigned customers
    pub fn allocate(&self) -> Allocation {
        allocate(&self.agents, &self.customers, &self.unavailable)
    }

    /// Winning agent, `None` when no agent uniquely serves the most customers
    pub fn winner(&self) -> Option<AgentId> {
        self.allocate().winner()
    }

    /// Winning agent id, or `0` when there is no unique winner
    pub fn execute(&self) -> i64 {
        execute(&self.agents, &self.customers, &self.unavailable)
    }
}
