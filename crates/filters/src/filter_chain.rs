//! The FilterChain runs include and exclude filters in sequence.
//!
//! This module provides the FilterChain struct that chains multiple
//! filters together using the builder pattern.

use crate::traits::{ExcludeFilter, IncludeFilter};

type BoxedInclude<T> = Box<dyn IncludeFilter<T> + Send + Sync>;
type BoxedExclude<T> = Box<dyn ExcludeFilter<T> + Send + Sync>;

enum Stage<T> {
    Include(BoxedInclude<T>),
    Exclude(BoxedExclude<T>),
}

impl<T> Stage<T> {
    fn name(&self) -> &str {
        match self {
            Stage::Include(filter) => filter.name(),
            Stage::Exclude(filter) => filter.name(),
        }
    }

    fn admits(&self, item: &T) -> bool {
        match self {
            Stage::Include(filter) => filter.should_include(item),
            Stage::Exclude(filter) => !filter.should_exclude(item),
        }
    }

    fn apply(&self, input: Vec<T>) -> Vec<T> {
        match self {
            Stage::Include(filter) => filter.filter_owned(input),
            Stage::Exclude(filter) => filter.filter_owned(input),
        }
    }
}

/// Chains include and exclude filters together into one pass per stage.
///
/// A chain is itself an [`IncludeFilter`]: an element is included when
/// every stage lets it through.
///
/// ## Usage
/// ```ignore
/// let chain = FilterChain::new()
///     .include(GlobInclude::new(["web-*"])?)
///     .exclude(GlobExclude::new(["*-canary"])?);
///
/// let kept = chain.apply(hosts);
/// ```
pub struct FilterChain<T> {
    stages: Vec<Stage<T>>,
}

impl<T> FilterChain<T> {
    /// Create a new empty FilterChain.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add an include stage (builder pattern).
    pub fn include(mut self, filter: impl IncludeFilter<T> + Send + Sync + 'static) -> Self {
        self.stages.push(Stage::Include(Box::new(filter)));
        self
    }

    /// Add an exclude stage (builder pattern).
    pub fn exclude(mut self, filter: impl ExcludeFilter<T> + Send + Sync + 'static) -> Self {
        self.stages.push(Stage::Exclude(Box::new(filter)));
        self
    }

    /// Names of the stages, in the order they run.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(Stage::name).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Apply all stages in sequence.
    ///
    /// ## Algorithm
    /// 1. Start with the input elements
    /// 2. For each stage in order:
    ///    a. Log stage name and input count
    ///    b. Apply the stage
    ///    c. Log output count
    /// 3. Return the final set
    pub fn apply(&self, input: Vec<T>) -> Vec<T> {
        let mut current = input;
        for stage in &self.stages {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                stage.name(),
                current.len()
            );
            current = stage.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                stage.name(),
                current.len()
            );
        }
        current
    }
}

impl<T> IncludeFilter<T> for FilterChain<T> {
    fn name(&self) -> &str {
        "FilterChain"
    }

    fn should_include(&self, item: &T) -> bool {
        self.stages.iter().all(|stage| stage.admits(item))
    }
}

impl<T> Default for FilterChain<T> {
    fn default() -> Self {
        Self::new()
    }
}
