//! # CS Balancing Core
//!
//! Routes customers to customer-success agents by score and picks the agent
//! who ends up serving the most customers.
//!
//! Each agent can serve any customer whose score is at most its own. Agents
//! listed as unavailable are left out, the rest are taken from the lowest
//! score upward, and each claims the customers it can serve that no weaker
//! agent already took. The agent with strictly the most customers wins;
//! anything else reports the `0` sentinel.
//!
//! ## Usage
//!
//! ```rust
//! use cs_balancing_core::{agents_from_scores, customers_from_scores, CustomerSuccessBalancer};
//!
//! let agents = agents_from_scores(&[100, 99, 88, 3, 4, 5]);
//! let customers = customers_from_scores(&[10, 10, 10, 20, 20, 30, 30, 30, 20, 60]);
//!
//! let balancer = CustomerSuccessBalancer::new(agents, customers, [4, 5, 6].map(cs_balancing_core::AgentId));
//! assert_eq!(balancer.execute(), 3);
//! ```
//!
//! Runs loaded from files go through [`validation::validate_input`] first;
//! the allocator itself accepts any input.

pub mod allocator;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod validation;

pub use allocator::{allocate, execute, Allocation, CustomerSuccessBalancer};
pub use config::{BalancingConfig, BalancingInput, ValidationConfig};
pub use error::{BalancingError, ErrorCategory, Result};
pub use logging::{setup_logging, LoggingConfig};
pub use types::{
    agents_from_scores, customers_from_scores, Agent, AgentId, AgentLoad, Customer, CustomerId,
    Score,
};
