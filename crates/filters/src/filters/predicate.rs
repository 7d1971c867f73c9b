//! Closure-backed filters.
//!
//! Wraps a plain `Fn(&T) -> bool` so it can be used wherever an include or
//! exclude filter is expected, plus `Complement` for flipping polarity.

use crate::traits::{ExcludeFilter, IncludeFilter};
use std::marker::PhantomData;

/// Include filter driven by a closure.
pub struct IncludeWhere<T, F> {
    name: String,
    predicate: F,
    _marker: PhantomData<fn(&T) -> bool>,
}

impl<T, F> IncludeWhere<T, F>
where
    F: Fn(&T) -> bool,
{
    pub fn new(predicate: F) -> Self {
        Self {
            name: "IncludeWhere".to_string(),
            predicate,
            _marker: PhantomData,
        }
    }

    /// Give the filter a descriptive name for chain logging.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<T, F> IncludeFilter<T> for IncludeWhere<T, F>
where
    F: Fn(&T) -> bool,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn should_include(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

/// Exclude filter driven by a closure.
pub struct ExcludeWhere<T, F> {
    name: String,
    predicate: F,
    _marker: PhantomData<fn(&T) -> bool>,
}

impl<T, F> ExcludeWhere<T, F>
where
    F: Fn(&T) -> bool,
{
    pub fn new(predicate: F) -> Self {
        Self {
            name: "ExcludeWhere".to_string(),
            predicate,
            _marker: PhantomData,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<T, F> ExcludeFilter<T> for ExcludeWhere<T, F>
where
    F: Fn(&T) -> bool,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn should_exclude(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

/// Shorthand for [`IncludeWhere::new`].
pub fn include_where<T, F>(predicate: F) -> IncludeWhere<T, F>
where
    F: Fn(&T) -> bool,
{
    IncludeWhere::new(predicate)
}

/// Shorthand for [`ExcludeWhere::new`].
pub fn exclude_where<T, F>(predicate: F) -> ExcludeWhere<T, F>
where
    F: Fn(&T) -> bool,
{
    ExcludeWhere::new(predicate)
}

/// Flips a filter's polarity.
///
/// `Complement(include)` excludes exactly what `include` would keep, and
/// `Complement(exclude)` includes exactly what `exclude` would drop. The
/// predicate is reused as-is; nothing is negated.
#[derive(Debug, Clone)]
pub struct Complement<F>(pub F);

impl<T, F> ExcludeFilter<T> for Complement<F>
where
    F: IncludeFilter<T>,
{
    fn name(&self) -> &str {
        self.0.name()
    }

    fn should_exclude(&self, item: &T) -> bool {
        self.0.should_include(item)
    }
}

impl<T, F> IncludeFilter<T> for Complement<F>
where
    F: ExcludeFilter<T>,
{
    fn name(&self) -> &str {
        self.0.name()
    }

    fn should_include(&self, item: &T) -> bool {
        self.0.should_exclude(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_where_even() {
        let filter = include_where(|e: &i32| e % 2 == 0);
        assert_eq!(filter.filter(&[1, 2, 3, 4, 5, 6]), vec![2, 4, 6]);
    }

    #[test]
    fn test_exclude_where_even() {
        let filter = exclude_where(|e: &i32| e % 2 == 0);
        assert_eq!(filter.filter(&[1, 2, 3, 4, 5, 6]), vec![1, 3, 5]);
    }

    #[test]
    fn test_include_where_string_length() {
        let input = vec!["a".to_string(), "bb".to_string(), "ccc".to_string()];
        let filter = include_where(|e: &String| e.len() > 1);

        assert_eq!(filter.filter(&input), vec!["bb".to_string(), "ccc".to_string()]);
    }

    #[test]
    fn test_named() {
        let filter = include_where(|e: &i32| *e > 0).named("positive");
        assert_eq!(IncludeFilter::name(&filter), "positive");

        let filter = exclude_where(|e: &i32| *e > 0);
        assert_eq!(ExcludeFilter::name(&filter), "ExcludeWhere");
    }

    #[test]
    fn test_complement_of_include_excludes_same_elements() {
        let input = vec![1, 2, 3, 4, 5, 6];
        let include = include_where(|e: &i32| *e > 3);
        let kept = include.filter(&input);

        let complement = Complement(include);
        let dropped_by_complement = ExcludeFilter::filter(&complement, &input);

        assert_eq!(kept, vec![4, 5, 6]);
        assert_eq!(dropped_by_complement, vec![1, 2, 3]);
    }

    #[test]
    fn test_complement_of_exclude_includes_matches() {
        let input = vec![1, 2, 3, 4, 5, 6];
        let complement = Complement(exclude_where(|e: &i32| e % 3 == 0));

        assert_eq!(IncludeFilter::filter(&complement, &input), vec![3, 6]);
    }
}
