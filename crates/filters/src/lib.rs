//! Include and exclude filtering over ordered collections.
//!
//! This crate provides:
//! - `IncludeFilter` / `ExcludeFilter`: implement one predicate, inherit the
//!   order-preserving traversal
//! - `TryIncludeFilter` / `TryExcludeFilter`: fallible predicates that abort
//!   the pass on the first failure
//! - Concrete filters: closures, glob patterns, allow/deny lists
//! - `FilterChain` for composing filters
//! - `ParIncludeFilter` / `ParExcludeFilter` for Rayon-backed filtering
//!
//! ## Example Usage
//! ```ignore
//! use filters::{FilterChain, IncludeFilter};
//! use filters::filters::*;
//!
//! let evens = include_where(|e: &i32| e % 2 == 0);
//! assert_eq!(evens.filter(&[1, 2, 3, 4, 5, 6]), vec![2, 4, 6]);
//!
//! let chain = FilterChain::new()
//!     .include(GlobInclude::new(["web-*"])?)
//!     .exclude(GlobExclude::new(["*-canary"])?);
//! let hosts = chain.apply(hosts);
//! ```

pub mod error;
pub mod filter_chain;
pub mod filters;
pub mod parallel;
pub mod traits;

// Re-export main types
pub use error::{FilterError, PredicateError, Result};
pub use filter_chain::FilterChain;
pub use parallel::{ParExcludeFilter, ParIncludeFilter};
pub use traits::{ExcludeFilter, IncludeFilter, TryExcludeFilter, TryIncludeFilter};
