//! Configuration and run descriptions.
//!
//! [`BalancingConfig`] is read from TOML and controls validation and logging.
//! [`BalancingInput`] is read from JSON and describes a single run:
//!
//! ```json
//! {
//!   "agents": [{ "id": 1, "score": 60 }, { "id": 2, "score": 20 }],
//!   "customers": [{ "id": 1, "score": 15 }],
//!   "unavailable": [2]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::allocator::CustomerSuccessBalancer;
use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::types::{Agent, AgentId, Customer};

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BalancingConfig {
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

/// Boundary checks applied to a run before it is allocated
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Reject runs where agent or customer ids repeat
    pub enforce_unique_ids: bool,
    /// Accept an agent with id `0` even though it collides with the no-winner result
    pub allow_reserved_agent_id: bool,
    pub max_agents: Option<usize>,
    pub max_customers: Option<usize>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enforce_unique_ids: true,
            allow_reserved_agent_id: false,
            max_agents: None,
            max_customers: None,
        }
    }
}

impl BalancingConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// A single run: agents, customers and the ids of agents who are away
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BalancingInput {
    pub agents: Vec<Agent>,
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub unavailable: Vec<AgentId>,
}

impl BalancingInput {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn into_balancer(self) -> CustomerSuccessBalancer {
        CustomerSuccessBalancer::new(self.agents, self.customers, self.unavailable)
    }
}
