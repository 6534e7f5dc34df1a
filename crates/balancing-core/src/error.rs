//! Error handling for the balancing library
//!
//! The allocation itself is total and never fails. Errors only come from the
//! boundary: loading run descriptions and configuration, and validating them
//! before they reach the allocator.

#![allow(missing_docs)]

use std::fmt;
use thiserror::Error;

use crate::types::{AgentId, CustomerId};

/// Result type alias for balancing operations
pub type Result<T> = std::result::Result<T, BalancingError>;

/// Error type for loading and validating balancing runs
#[derive(Error, Debug)]
pub enum BalancingError {
    /// Two agents share the same identifier
    #[error("Duplicate agent id: {id}")]
    DuplicateAgentId { id: AgentId },

    /// Two customers share the same identifier
    #[error("Duplicate customer id: {id}")]
    DuplicateCustomerId { id: CustomerId },

    /// An agent uses the id reserved for the "no unique winner" result
    #[error("Agent id {id} is reserved for the no-winner result")]
    ReservedAgentId { id: AgentId },

    /// More agents than the configured limit
    #[error("Too many agents: {count} (limit: {limit})")]
    TooManyAgents { count: usize, limit: usize },

    /// More customers than the configured limit
    #[error("Too many customers: {count} (limit: {limit})")]
    TooManyCustomers { count: usize, limit: usize },

    /// Run description could not be parsed
    #[error("Invalid input: {details}")]
    InvalidInput { details: String },

    /// Configuration could not be parsed or is inconsistent
    #[error("Invalid configuration: {details}")]
    InvalidConfig { details: String },

    /// I/O operation failed
    #[error("I/O operation failed: {reason}")]
    IoError { reason: String },
}

impl BalancingError {
    /// Create a new invalid configuration error
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            details: details.into(),
        }
    }

    /// Check if retrying with the same input could succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateAgentId { .. }
            | Self::DuplicateCustomerId { .. }
            | Self::ReservedAgentId { .. }
            | Self::TooManyAgents { .. }
            | Self::TooManyCustomers { .. }
            | Self::InvalidInput { .. } => ErrorCategory::Input,

            Self::InvalidConfig { .. } => ErrorCategory::Configuration,

            Self::IoError { .. } => ErrorCategory::Io,
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed or rejected run description
    Input,
    /// Configuration errors
    Configuration,
    /// I/O related errors
    Io,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Configuration => write!(f, "Configuration"),
            Self::Io => write!(f, "I/O"),
        }
    }
}

impl From<std::io::Error> for BalancingError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError {
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for BalancingError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidInput {
            details: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for BalancingError {
    fn from(error: toml::de::Error) -> Self {
        Self::InvalidConfig {
            details: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            BalancingError::DuplicateAgentId { id: AgentId(3) }.category(),
            ErrorCategory::Input
        );
        assert_eq!(
            BalancingError::invalid_config("bad").category(),
            ErrorCategory::Configuration
        );
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BalancingError = io_err.into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = BalancingError::TooManyAgents { count: 12, limit: 10 };
        let display = err.to_string();
        assert!(display.contains("12"));
        assert!(display.contains("limit: 10"));

        let err = BalancingError::ReservedAgentId { id: AgentId::NO_WINNER };
        assert!(err.to_string().contains("reserved"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: BalancingError = json_err.into();
        assert!(matches!(err, BalancingError::InvalidInput { .. }));
    }
}
