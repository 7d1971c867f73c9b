//! Property-based tests for the filter contract invariants.

use filters::filters::*;
use filters::{ExcludeFilter, FilterChain, IncludeFilter, ParExcludeFilter, ParIncludeFilter};
use proptest::prelude::*;

/// Strategy for generating input sequences.
fn sequence_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000, 0..200)
}

/// Strategy for picking a divisor used to build predicates.
fn divisor_strategy() -> impl Strategy<Value = i32> {
    1i32..10
}

/// True when `sub` appears in `full` in the same relative order.
fn is_subsequence(sub: &[i32], full: &[i32]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|wanted| rest.any(|item| item == wanted))
}

proptest! {
    /// Invariant: include keeps exactly the matching elements, in order.
    #[test]
    fn include_equals_matching_subsequence(input in sequence_strategy(), d in divisor_strategy()) {
        let p = move |e: &i32| e % d == 0;
        let expected: Vec<i32> = input.iter().copied().filter(|e| p(e)).collect();

        prop_assert_eq!(include_where(p).filter(&input), expected);
    }

    /// Invariant: exclude keeps exactly the non-matching elements, in order.
    #[test]
    fn exclude_equals_non_matching_subsequence(input in sequence_strategy(), d in divisor_strategy()) {
        let p = move |e: &i32| e % d == 0;
        let expected: Vec<i32> = input.iter().copied().filter(|e| !p(e)).collect();

        prop_assert_eq!(exclude_where(p).filter(&input), expected);
    }

    /// Invariant: include(p) and exclude(not p) agree.
    #[test]
    fn include_and_negated_exclude_agree(input in sequence_strategy(), d in divisor_strategy()) {
        let include = include_where(move |e: &i32| e % d == 0);
        let exclude = exclude_where(move |e: &i32| e % d != 0);

        prop_assert_eq!(include.filter(&input), exclude.filter(&input));
    }

    /// Invariant: filtering twice is the same as filtering once.
    #[test]
    fn filtering_is_idempotent(input in sequence_strategy(), d in divisor_strategy()) {
        let include = include_where(move |e: &i32| e % d == 0);
        let once = include.filter(&input);
        prop_assert_eq!(include.filter(&once), once.clone());

        let exclude = exclude_where(move |e: &i32| e % d == 0);
        let once = exclude.filter(&input);
        prop_assert_eq!(exclude.filter(&once), once.clone());
    }

    /// Invariant: the input is left untouched.
    #[test]
    fn input_is_not_mutated(input in sequence_strategy(), d in divisor_strategy()) {
        let snapshot = input.clone();
        let _ = include_where(move |e: &i32| e % d == 0).filter(&input);
        let _ = exclude_where(move |e: &i32| e % d == 0).filter(&input);

        prop_assert_eq!(input, snapshot);
    }

    /// Invariant: always-true keeps everything on include and nothing on exclude.
    #[test]
    fn always_true_boundaries(input in sequence_strategy()) {
        prop_assert_eq!(include_where(|_: &i32| true).filter(&input), input.clone());
        prop_assert!(exclude_where(|_: &i32| true).filter(&input).is_empty());
    }

    /// Invariant: parallel filtering returns exactly the sequential result.
    #[test]
    fn parallel_matches_sequential(input in sequence_strategy(), d in divisor_strategy()) {
        let include = include_where(move |e: &i32| e % d == 0);
        let exclude = exclude_where(move |e: &i32| e % d == 0);

        prop_assert_eq!(ParIncludeFilter::par_filter(&include, &input), IncludeFilter::filter(&include, &input));
        prop_assert_eq!(ParExcludeFilter::par_filter(&exclude, &input), ExcludeFilter::filter(&exclude, &input));
    }

    /// Invariant: a chain yields a subsequence equal to running its stages one by one.
    #[test]
    fn chain_equals_sequential_stages(input in sequence_strategy(), a in divisor_strategy(), b in divisor_strategy()) {
        let chain = FilterChain::new()
            .include(include_where(move |e: &i32| e % a == 0))
            .exclude(exclude_where(move |e: &i32| e % b == 0));

        let step = include_where(move |e: &i32| e % a == 0).filter(&input);
        let step = exclude_where(move |e: &i32| e % b == 0).filter(&step);

        let chained = chain.apply(input.clone());
        prop_assert!(is_subsequence(&chained, &input));
        prop_assert_eq!(chained, step);
    }
}

#[test]
fn empty_input_yields_empty_output() {
    let empty: Vec<i32> = Vec::new();

    assert!(include_where(|_: &i32| true).filter(&empty).is_empty());
    assert!(exclude_where(|_: &i32| false).filter(&empty).is_empty());
}
