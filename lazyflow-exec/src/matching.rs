// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Short-circuiting predicate queries.
//!
//! Each query stops the source at the first element that settles the answer:
//!
//! | query | stops at | result on empty |
//! |-------|----------|-----------------|
//! | [`any_match`](MatchExt::any_match) | first match | `false` |
//! | [`all_match`](MatchExt::all_match) | first non-match | `true` |
//! | [`none_match`](MatchExt::none_match) | first match | `true` |
//! | [`find_first`](MatchExt::find_first) | first match | `None` |
//!
//! ```
//! use lazyflow_core::Pipeline;
//! use lazyflow_exec::MatchExt;
//!
//! let naturals = Pipeline::infinite(|i| i);
//! assert!(naturals.any_match(|n| *n > 100));
//! assert_eq!(naturals.find_first(|n| n % 7 == 6), Some(6));
//! ```

use lazyflow_core::Pipeline;

/// Extension trait providing the predicate queries.
pub trait MatchExt<T> {
    /// Returns `true` if any element satisfies `predicate`.
    fn any_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// Returns `true` if every element satisfies `predicate`.
    fn all_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// Returns `true` if no element satisfies `predicate`.
    fn none_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// Returns the first element satisfying `predicate`.
    fn find_first<F>(&self, predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool;
}

impl<T: 'static> MatchExt<T> for Pipeline<T> {
    fn any_match<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let mut matched = false;
        self.drive(|value| {
            matched = predicate(&value);
            !matched
        });
        matched
    }

    fn all_match<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let mut all = true;
        self.drive(|value| {
            all = predicate(&value);
            all
        });
        all
    }

    fn none_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        !self.any_match(predicate)
    }

    fn find_first<F>(&self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut found = None;
        self.drive(|value| {
            if predicate(&value) {
                found = Some(value);
                return false;
            }
            true
        });
        found
    }
}
