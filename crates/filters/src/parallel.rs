//! Parallel filtering with Rayon.
//!
//! The predicate is evaluated concurrently across the input and the kept
//! elements are collected back in input order, so `par_filter` returns
//! exactly what `filter` would. Blanket-implemented for every `Sync` filter.

use crate::traits::{ExcludeFilter, IncludeFilter, Polarity};
use rayon::prelude::*;

/// Parallel counterpart of [`IncludeFilter::filter`].
pub trait ParIncludeFilter<T> {
    fn par_filter(&self, input: &[T]) -> Vec<T>;
}

/// Parallel counterpart of [`ExcludeFilter::filter`].
pub trait ParExcludeFilter<T> {
    fn par_filter(&self, input: &[T]) -> Vec<T>;
}

impl<T, F> ParIncludeFilter<T> for F
where
    F: IncludeFilter<T> + Sync + ?Sized,
    T: Clone + Send + Sync,
{
    fn par_filter(&self, input: &[T]) -> Vec<T> {
        par_select(input, Polarity::Keep, |item| self.should_include(item))
    }
}

impl<T, F> ParExcludeFilter<T> for F
where
    F: ExcludeFilter<T> + Sync + ?Sized,
    T: Clone + Send + Sync,
{
    fn par_filter(&self, input: &[T]) -> Vec<T> {
        par_select(input, Polarity::Drop, |item| self.should_exclude(item))
    }
}

fn par_select<T, P>(input: &[T], polarity: Polarity, matches: P) -> Vec<T>
where
    T: Clone + Send + Sync,
    P: Fn(&T) -> bool + Sync,
{
    let output: Vec<T> = input
        .par_iter()
        .filter(|&item| polarity.admits(matches(item)))
        .cloned()
        .collect();
    tracing::trace!("Parallel filter kept {} of {}", output.len(), input.len());
    output
}
