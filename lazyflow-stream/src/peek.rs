// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side-effect operator for debugging and troubleshooting pipelines.
//!
//! Insert `peek` at any point in a chain to observe the elements flowing
//! through it. The action runs lazily, once per element actually pulled, so it
//! also shows how far a short-circuiting consumer reached:
//!
//! ```
//! use lazyflow_stream::prelude::*;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let seen = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&seen);
//!
//! let first_two = Pipeline::range(0, 1_000)
//!     .peek(move |_| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     })
//!     .take(2);
//!
//! first_two.drive(|_| true);
//! assert_eq!(seen.load(Ordering::SeqCst), 2);
//! ```

use lazyflow_core::Pipeline;

/// Extension trait providing the [`peek`](Self::peek) operator.
pub trait PeekExt<T>: Sized {
    /// Calls `action` with a reference to each element, then passes the
    /// element on unchanged.
    fn peek<F>(self, action: F) -> Pipeline<T>
    where
        F: Fn(&T) + Send + Sync + 'static;
}

impl<T: 'static> PeekExt<T> for Pipeline<T> {
    fn peek<F>(self, action: F) -> Pipeline<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Pipeline::from_fn(move |sink| {
            self.drive(|value| {
                action(&value);
                sink(value)
            });
        })
    }
}
