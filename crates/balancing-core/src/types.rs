//! Core records shared by the allocator, validation and loaders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a customer-success agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub i64);

impl AgentId {
    /// Value reported when no single agent serves the most customers.
    ///
    /// Nothing prevents a caller from giving a real agent this id, in which
    /// case a win by that agent is indistinguishable from a tie.
    pub const NO_WINNER: AgentId = AgentId(0);
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Level of an agent or customer.
///
/// For an agent this is the highest customer score it can serve; for a
/// customer it is the level of support required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(pub i64);

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer-success agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Agent {
    pub id: AgentId,
    pub score: Score,
}

impl Agent {
    pub fn new(id: i64, score: i64) -> Self {
        Self {
            id: AgentId(id),
            score: Score(score),
        }
    }

    /// Whether this agent is able to serve `customer`
    pub fn can_serve(&self, customer: &Customer) -> bool {
        customer.score <= self.score
    }
}

/// A customer waiting to be assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Customer {
    pub id: CustomerId,
    pub score: Score,
}

impl Customer {
    pub fn new(id: i64, score: i64) -> Self {
        Self {
            id: CustomerId(id),
            score: Score(score),
        }
    }
}

/// Customers routed to a single agent during one allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentLoad {
    pub agent: Agent,
    /// Kept in the order the customers were supplied
    pub customers: Vec<Customer>,
}

impl AgentLoad {
    pub fn count(&self) -> usize {
        self.customers.len()
    }
}

/// Builds agents from a list of scores, numbering ids from 1.
pub fn agents_from_scores(scores: &[i64]) -> Vec<Agent> {
    scores
        .iter()
        .enumerate()
        .map(|(index, &score)| Agent::new(index as i64 + 1, score))
        .collect()
}

/// Builds customers from a list of scores, numbering ids from 1.
pub fn customers_from_scores(scores: &[i64]) -> Vec<Customer> {
    scores
        .iter()
        .enumerate()
        .map(|(index, &score)| Customer::new(index as i64 + 1, score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_serve_is_inclusive() {
        let agent = Agent::new(1, 50);
        assert!(agent.can_serve(&Customer::new(1, 50)));
        assert!(agent.can_serve(&Customer::new(2, -3)));
        assert!(!agent.can_serve(&Customer::new(3, 51)));
    }

    #[test]
    fn test_from_scores_numbers_from_one() {
        let agents = agents_from_scores(&[11, 21, 31]);
        assert_eq!(agents[0], Agent::new(1, 11));
        assert_eq!(agents[2], Agent::new(3, 31));
        assert!(customers_from_scores(&[]).is_empty());
    }

    #[test]
    fn test_agent_deserialize_rejects_missing_and_unknown_fields() {
        let agent: Agent = serde_json::from_str(r#"{"id": 4, "score": 75}"#).unwrap();
        assert_eq!(agent, Agent::new(4, 75));

        assert!(serde_json::from_str::<Agent>(r#"{"id": 4}"#).is_err());
        assert!(serde_json::from_str::<Agent>(r#"{"id": 4, "score": 1, "name": "x"}"#).is_err());
        assert!(serde_json::from_str::<Customer>(r#"{"id": "a", "score": 1}"#).is_err());
    }
}
