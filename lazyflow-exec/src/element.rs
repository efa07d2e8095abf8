// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::Pipeline;

/// Extension trait providing the [`first`](Self::first) and [`last`](Self::last)
/// terminal operations.
pub trait ElementExt<T> {
    /// Returns the first element, stopping the source right after it.
    ///
    /// Safe on unbounded pipelines.
    fn first(&self) -> Option<T>;

    /// Returns the last element.
    ///
    /// Drains the whole pipeline, so it never returns on an unbounded one.
    fn last(&self) -> Option<T>;
}

impl<T: 'static> ElementExt<T> for Pipeline<T> {
    fn first(&self) -> Option<T> {
        let mut found = None;
        self.drive(|value| {
            found = Some(value);
            false
        });
        found
    }

    fn last(&self) -> Option<T> {
        let mut found = None;
        self.drive(|value| {
            found = Some(value);
            true
        });
        found
    }
}
