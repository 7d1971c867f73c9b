//! Core traits for include and exclude filtering.
//!
//! A filter only has to answer one question per element. The traversal
//! (`filter`, `filter_owned`, `try_filter`) is provided by the traits, so a
//! concrete filter overrides the predicate and inherits the rest.
//!
//! ## Guarantees
//! - Output keeps the input's relative order
//! - Output is a fresh `Vec`; a borrowed input is never mutated
//! - Empty input gives empty output, and a filter that rejects everything
//!   returns an empty `Vec`
//! - Calls are idempotent for a given filter and input

use crate::error::{FilterError, PredicateError, Result};

/// Keeps the elements its predicate accepts.
pub trait IncludeFilter<T> {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Decide whether `item` belongs in the result.
    fn should_include(&self, item: &T) -> bool;

    /// Returns a filtered copy of `input`.
    ///
    /// ## Algorithm
    /// One pass front to back, cloning every element for which
    /// `should_include` is true into a new vector.
    fn filter(&self, input: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        select(input, Polarity::Keep, |item| self.should_include(item))
    }

    /// Same as [`IncludeFilter::filter`], consuming the input instead of
    /// cloning out of it.
    fn filter_owned(&self, input: Vec<T>) -> Vec<T> {
        select_owned(input, Polarity::Keep, |item| self.should_include(item))
    }
}

/// Drops the elements its predicate matches.
///
/// Mirror image of [`IncludeFilter`]: an element survives iff
/// `should_exclude` returns false.
pub trait ExcludeFilter<T> {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Decide whether `item` must be left out of the result.
    fn should_exclude(&self, item: &T) -> bool;

    /// Returns a copy of `input` without the excluded elements.
    fn filter(&self, input: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        select(input, Polarity::Drop, |item| self.should_exclude(item))
    }

    /// Same as [`ExcludeFilter::filter`], consuming the input.
    fn filter_owned(&self, input: Vec<T>) -> Vec<T> {
        select_owned(input, Polarity::Drop, |item| self.should_exclude(item))
    }
}

/// An include filter whose predicate can fail.
///
/// The first failure aborts the pass: `try_filter` never returns a
/// partially filtered result.
pub trait TryIncludeFilter<T> {
    type Error: Into<PredicateError>;

    fn try_should_include(&self, item: &T) -> std::result::Result<bool, Self::Error>;

    /// Returns a filtered copy of `input`, or the first predicate failure.
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The included elements, in input order
    /// * `Err(FilterError::Predicate)` - Position and error of the first failure
    fn try_filter(&self, input: &[T]) -> Result<Vec<T>>
    where
        T: Clone,
    {
        try_select(input, Polarity::Keep, |item| self.try_should_include(item))
    }
}

/// An exclude filter whose predicate can fail.
pub trait TryExcludeFilter<T> {
    type Error: Into<PredicateError>;

    fn try_should_exclude(&self, item: &T) -> std::result::Result<bool, Self::Error>;

    /// Returns `input` without the excluded elements, or the first
    /// predicate failure.
    fn try_filter(&self, input: &[T]) -> Result<Vec<T>>
    where
        T: Clone,
    {
        try_select(input, Polarity::Drop, |item| self.try_should_exclude(item))
    }
}

/// Whether a predicate match keeps or drops the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Polarity {
    Keep,
    Drop,
}

impl Polarity {
    pub(crate) fn admits(self, matched: bool) -> bool {
        match self {
            Polarity::Keep => matched,
            Polarity::Drop => !matched,
        }
    }
}

fn select<T, P>(input: &[T], polarity: Polarity, mut matches: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    input
        .iter()
        .filter(|&item| polarity.admits(matches(item)))
        .cloned()
        .collect()
}

fn select_owned<T, P>(input: Vec<T>, polarity: Polarity, mut matches: P) -> Vec<T>
where
    P: FnMut(&T) -> bool,
{
    input
        .into_iter()
        .filter(|item| polarity.admits(matches(item)))
        .collect()
}

fn try_select<T, E, P>(input: &[T], polarity: Polarity, mut matches: P) -> Result<Vec<T>>
where
    T: Clone,
    E: Into<PredicateError>,
    P: FnMut(&T) -> std::result::Result<bool, E>,
{
    let mut output = Vec::new();
    for (index, item) in input.iter().enumerate() {
        let matched = matches(item).map_err(|err| FilterError::Predicate {
            index,
            source: err.into(),
        })?;
        if polarity.admits(matched) {
            output.push(item.clone());
        }
    }
    Ok(output)
}
