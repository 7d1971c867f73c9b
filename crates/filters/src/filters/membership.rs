//! Set-membership filters.
//!
//! Each element is mapped to a key and the key is looked up in a `HashSet`,
//! giving O(1) decisions per element.

use crate::traits::{ExcludeFilter, IncludeFilter};
use std::collections::HashSet;
use std::hash::Hash;

/// Keeps elements whose key is in the allowed set.
pub struct AllowList<K, F> {
    keys: HashSet<K>,
    key_of: F,
}

impl<K, F> AllowList<K, F>
where
    K: Eq + Hash,
{
    /// Create a new AllowList.
    ///
    /// # Arguments
    /// * `keys` - The keys to allow
    /// * `key_of` - Extracts the lookup key from an element
    pub fn new<I>(keys: I, key_of: F) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self {
            keys: keys.into_iter().collect(),
            key_of,
        }
    }

    pub fn keys(&self) -> &HashSet<K> {
        &self.keys
    }
}

impl<T, K, F> IncludeFilter<T> for AllowList<K, F>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    fn name(&self) -> &str {
        "AllowList"
    }

    fn should_include(&self, item: &T) -> bool {
        self.keys.contains(&(self.key_of)(item))
    }
}

/// Drops elements whose key is in the denied set.
pub struct DenyList<K, F> {
    keys: HashSet<K>,
    key_of: F,
}

impl<K, F> DenyList<K, F>
where
    K: Eq + Hash,
{
    pub fn new<I>(keys: I, key_of: F) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self {
            keys: keys.into_iter().collect(),
            key_of,
        }
    }

    pub fn keys(&self) -> &HashSet<K> {
        &self.keys
    }
}

impl<T, K, F> ExcludeFilter<T> for DenyList<K, F>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    fn name(&self) -> &str {
        "DenyList"
    }

    fn should_exclude(&self, item: &T) -> bool {
        self.keys.contains(&(self.key_of)(item))
    }
}
