//! Input validation for runs loaded from outside the process

use std::collections::HashSet;
use tracing::debug;

use crate::config::{BalancingInput, ValidationConfig};
use crate::error::{BalancingError, Result};
use crate::types::{Agent, AgentId, Customer};

/// Validate a run description against the configured rules
pub fn validate_input(input: &BalancingInput, config: &ValidationConfig) -> Result<()> {
    validate_limits(&input.agents, &input.customers, config)?;

    if config.enforce_unique_ids {
        validate_unique_agent_ids(&input.agents)?;
        validate_unique_customer_ids(&input.customers)?;
    }

    if !config.allow_reserved_agent_id {
        validate_no_reserved_agent_id(&input.agents)?;
    }

    let unknown = unknown_unavailable_ids(&input.agents, &input.unavailable);
    if !unknown.is_empty() {
        debug!(?unknown, "Ignoring unavailable ids that match no agent");
    }

    Ok(())
}

fn validate_limits(agents: &[Agent], customers: &[Customer], config: &ValidationConfig) -> Result<()> {
    if let Some(limit) = config.max_agents {
        if agents.len() > limit {
            return Err(BalancingError::TooManyAgents {
                count: agents.len(),
                limit,
            });
        }
    }

    if let Some(limit) = config.max_customers {
        if customers.len() > limit {
            return Err(BalancingError::TooManyCustomers {
                count: customers.len(),
                limit,
            });
        }
    }

    Ok(())
}

/// Reject agent lists where an id appears twice
pub fn validate_unique_agent_ids(agents: &[Agent]) -> Result<()> {
    let mut seen = HashSet::with_capacity(agents.len());
    for agent in agents {
        if !seen.insert(agent.id) {
            return Err(BalancingError::DuplicateAgentId { id: agent.id });
        }
    }
    Ok(())
}

/// Reject customer lists where an id appears twice
pub fn validate_unique_customer_ids(customers: &[Customer]) -> Result<()> {
    let mut seen = HashSet::with_capacity(customers.len());
    for customer in customers {
        if !seen.insert(customer.id) {
            return Err(BalancingError::DuplicateCustomerId { id: customer.id });
        }
    }
    Ok(())
}

/// Reject an agent whose id would be indistinguishable from "no winner"
pub fn validate_no_reserved_agent_id(agents: &[Agent]) -> Result<()> {
    match agents.iter().find(|agent| agent.id == AgentId::NO_WINNER) {
        Some(agent) => Err(BalancingError::ReservedAgentId { id: agent.id }),
        None => Ok(()),
    }
}

/// Unavailable ids that do not belong to any agent, sorted and deduplicated
pub fn unknown_unavailable_ids(agents: &[Agent], unavailable: &[AgentId]) -> Vec<AgentId> {
    let known: HashSet<AgentId> = agents.iter().map(|agent| agent.id).collect();
    let mut unknown: Vec<AgentId> = unavailable
        .iter()
        .copied()
        .filter(|id| !known.contains(id))
        .collect();
    unknown.sort();
    unknown.dedup();
    unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{agents_from_scores, customers_from_scores};

    fn input(agents: Vec<Agent>, customers: Vec<Customer>, unavailable: &[i64]) -> BalancingInput {
        BalancingInput {
            agents,
            customers,
            unavailable: unavailable.iter().map(|&id| AgentId(id)).collect(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let run = input(agents_from_scores(&[10, 20]), customers_from_scores(&[5]), &[7]);
        assert!(validate_input(&run, &ValidationConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_agent_id() {
        let run = input(vec![Agent::new(1, 10), Agent::new(1, 20)], vec![], &[]);
        let err = validate_input(&run, &ValidationConfig::default()).unwrap_err();
        assert!(matches!(err, BalancingError::DuplicateAgentId { id: AgentId(1) }));
    }

    #[test]
    fn test_duplicate_customer_id() {
        let run = input(vec![], vec![Customer::new(4, 1), Customer::new(4, 2)], &[]);
        let err = validate_input(&run, &ValidationConfig::default()).unwrap_err();
        assert!(matches!(err, BalancingError::DuplicateCustomerId { .. }));

        let relaxed = ValidationConfig {
            enforce_unique_ids: false,
            ..Default::default()
        };
        assert!(validate_input(&run, &relaxed).is_ok());
    }

    #[test]
    fn test_reserved_agent_id() {
        let run = input(vec![Agent::new(0, 10)], vec![], &[]);
        assert!(matches!(
            validate_input(&run, &ValidationConfig::default()),
            Err(BalancingError::ReservedAgentId { .. })
        ));

        let allowed = ValidationConfig {
            allow_reserved_agent_id: true,
            ..Default::default()
        };
        assert!(validate_input(&run, &allowed).is_ok());
    }

    #[test]
    fn test_limits() {
        let run = input(agents_from_scores(&[1, 2, 3]), customers_from_scores(&[1, 1]), &[]);
        let config = ValidationConfig {
            max_agents: Some(2),
            ..Default::default()
        };
        assert!(matches!(
            validate_input(&run, &config),
            Err(BalancingError::TooManyAgents { count: 3, limit: 2 })
        ));

        let config = ValidationConfig {
            max_customers: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            validate_input(&run, &config),
            Err(BalancingError::TooManyCustomers { count: 2, limit: 1 })
        ));
    }

    #[test]
    fn test_unknown_unavailable_ids() {
        let agents = agents_from_scores(&[1, 2]);
        let unknown = unknown_unavailable_ids(&agents, &[AgentId(9), AgentId(2), AgentId(9), AgentId(5)]);
        assert_eq!(unknown, vec![AgentId(5), AgentId(9)]);
    }
}
