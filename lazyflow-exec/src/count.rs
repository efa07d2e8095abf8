// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::Pipeline;

/// Extension trait providing the [`count`](Self::count) terminal operation.
pub trait CountExt<T> {
    /// Drains the pipeline and returns how many elements it produced.
    fn count(&self) -> usize;
}

impl<T: 'static> CountExt<T> for Pipeline<T> {
    fn count(&self) -> usize {
        let mut count = 0;
        self.drive(|_| {
            count += 1;
            true
        });
        count
    }
}
