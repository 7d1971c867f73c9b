//! Error types for the filters crate.
//!
//! Plain `filter` calls cannot fail. Errors only come from fallible
//! predicates (`TryIncludeFilter` / `TryExcludeFilter`) and from building
//! concrete filters out of user-supplied criteria.

use thiserror::Error;

/// Boxed error raised by a fallible predicate.
pub type PredicateError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while building or running a filter
#[derive(Error, Debug)]
pub enum FilterError {
    /// A fallible predicate failed; the whole pass was aborted.
    ///
    /// `index` is the position of the element being tested. The predicate's
    /// own error is kept untouched as the `source`.
    #[error("Predicate failed on element {index}: {source}")]
    Predicate {
        index: usize,
        source: PredicateError,
    },

    /// A glob pattern could not be compiled
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FilterError>;
