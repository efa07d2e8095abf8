// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::Pipeline;

/// Extension trait providing the [`collect`](Self::collect) terminal operation.
pub trait CollectExt<T> {
    /// Drains the pipeline into a vector, in order.
    ///
    /// Never returns on an unbounded pipeline.
    ///
    /// ```
    /// use lazyflow_core::Pipeline;
    /// use lazyflow_exec::CollectExt;
    ///
    /// assert_eq!(Pipeline::range(3, 6).collect(), vec![3, 4, 5]);
    /// ```
    fn collect(&self) -> Vec<T>;
}

impl<T: 'static> CollectExt<T> for Pipeline<T> {
    fn collect(&self) -> Vec<T> {
        let mut values = Vec::new();
        self.drive(|value| {
            values.push(value);
            true
        });
        values
    }
}
