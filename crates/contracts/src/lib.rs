//! # Contracts Crate
//!
//! Capability contracts shared by backends and the code that drives them.
//!
//! ## Main Components
//!
//! - **credential**: username/password shape (`BasicCredential`)
//! - **serializable**: conversion to and from key-value mappings
//! - **system_context**: command execution and file transfer on a target
//!   system (`SystemContext`)
//! - **error**: Error types shared by all contracts

pub mod credential;
pub mod error;
pub mod serializable;
pub mod system_context;

// Re-export commonly used types for convenience
pub use credential::{BasicCredential, PlainCredential};
pub use error::{ContractError, Result};
pub use serializable::{Mapping, Serializable};
pub use system_context::{
    CommandAspects, CommandOutput, DirectoryEntry, EntryKind, ExpectedStatus, SystemContext,
};
