//! Glob pattern filters for string-like elements.
//!
//! Patterns use shell glob syntax (`*`, `?`, `[a-z]`) as implemented by the
//! `glob` crate. An element matches when any pattern in the set matches it.

use crate::error::{FilterError, Result};
use crate::traits::{ExcludeFilter, IncludeFilter};
use glob::Pattern;

/// A compiled set of glob patterns.
#[derive(Debug, Clone, Default)]
pub struct GlobSet {
    patterns: Vec<Pattern>,
}

impl GlobSet {
    /// Compile every pattern, failing on the first invalid one.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|raw| {
                let raw = raw.as_ref();
                Pattern::new(raw).map_err(|err| FilterError::InvalidPattern {
                    pattern: raw.to_string(),
                    reason: err.msg.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!("Compiled {} glob patterns", patterns.len());
        Ok(Self { patterns })
    }

    /// True if any pattern matches `candidate`.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(candidate))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Keeps elements matching at least one pattern.
///
/// With no patterns nothing matches, so everything is dropped.
#[derive(Debug, Clone)]
pub struct GlobInclude {
    set: GlobSet,
}

impl GlobInclude {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            set: GlobSet::new(patterns)?,
        })
    }

    pub fn patterns(&self) -> &GlobSet {
        &self.set
    }
}

impl<T> IncludeFilter<T> for GlobInclude
where
    T: AsRef<str>,
{
    fn name(&self) -> &str {
        "GlobInclude"
    }

    fn should_include(&self, item: &T) -> bool {
        self.set.is_match(item.as_ref())
    }
}

/// Drops elements matching at least one pattern.
#[derive(Debug, Clone)]
pub struct GlobExclude {
    set: GlobSet,
}

impl GlobExclude {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            set: GlobSet::new(patterns)?,
        })
    }

    pub fn patterns(&self) -> &GlobSet {
        &self.set
    }
}

impl<T> ExcludeFilter<T> for GlobExclude
where
    T: AsRef<str>,
{
    fn name(&self) -> &str {
        "GlobExclude"
    }

    fn should_exclude(&self, item: &T) -> bool {
        self.set.is_match(item.as_ref())
    }
}
