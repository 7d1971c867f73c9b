//! Error types for the contracts crate.

use thiserror::Error;

/// Errors raised through the capability contracts
#[derive(Error, Debug)]
pub enum ContractError {
    /// The backend does not provide this capability
    #[error("{capability} is not implemented by this backend")]
    Unimplemented { capability: String },

    /// A command finished with a status the caller did not expect
    #[error("Command '{command}' exited with status {status}, expected {expected}")]
    UnexpectedStatus {
        command: String,
        status: i32,
        expected: String,
    },

    /// A value did not serialize to a key-value mapping
    #[error("Expected a mapping but serialized to {kind}")]
    NotAMapping { kind: &'static str },

    /// JSON conversion failed
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error from a backend
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContractError {
    /// Shorthand for an [`ContractError::Unimplemented`] error.
    pub fn unimplemented(capability: impl Into<String>) -> Self {
        ContractError::Unimplemented {
            capability: capability.into(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ContractError>;
