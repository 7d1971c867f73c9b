//! Filter implementations.
//!
//! Concrete include and exclude filters that can be used on their own or
//! composed into a FilterChain.

pub mod membership;
pub mod pattern;
pub mod predicate;

// Re-export for convenience
pub use membership::{AllowList, DenyList};
pub use pattern::{GlobExclude, GlobInclude, GlobSet};
pub use predicate::{Complement, ExcludeWhere, IncludeWhere, exclude_where, include_where};
