// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Element-wise transformation.
//!
//! [`map`](MapExt::map) keeps the element type, [`map_to`](MapExt::map_to)
//! may change it:
//!
//! ```
//! use lazyflow_stream::prelude::*;
//!
//! let labels = Pipeline::range(1, 4)
//!     .map(|n| n * 10)
//!     .map_to(|n| format!("#{n}"));
//!
//! let mut out = Vec::new();
//! labels.drive(|label| {
//!     out.push(label);
//!     true
//! });
//! assert_eq!(out, ["#10", "#20", "#30"]);
//! ```

use lazyflow_core::Pipeline;

/// Extension trait providing the [`map`](Self::map) and [`map_to`](Self::map_to) operators.
pub trait MapExt<T>: Sized {
    /// Replaces every element with `mapper(element)`.
    fn map<F>(self, mapper: F) -> Pipeline<T>
    where
        F: Fn(T) -> T + Send + Sync + 'static;

    /// Transforms every element into a value of another type.
    fn map_to<R, F>(self, mapper: F) -> Pipeline<R>
    where
        R: 'static,
        F: Fn(T) -> R + Send + Sync + 'static;
}

impl<T: 'static> MapExt<T> for Pipeline<T> {
    fn map<F>(self, mapper: F) -> Pipeline<T>
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.map_to(mapper)
    }

    fn map_to<R, F>(self, mapper: F) -> Pipeline<R>
    where
        R: 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Pipeline::from_fn(move |sink| {
            self.drive(|value| sink(mapper(value)));
        })
    }
}
