// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lazyflow_core::{FlowError, Pipeline, Result};
use std::mem;

/// Extension trait providing the [`chunk`](Self::chunk) operator.
pub trait ChunkExt<T>: Sized {
    /// Groups consecutive elements into vectors of `size`.
    ///
    /// A chunk is emitted as soon as it is full. If the source ends part-way
    /// through a chunk, the shorter final chunk is still emitted.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidConfiguration`] when `size` is zero. The
    /// check happens here, not when the pipeline is driven.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyflow_stream::prelude::*;
    ///
    /// let chunks = Pipeline::range(1, 11).chunk(3)?;
    ///
    /// let mut out = Vec::new();
    /// chunks.drive(|chunk| {
    ///     out.push(chunk);
    ///     true
    /// });
    /// assert_eq!(out, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]);
    ///
    /// assert!(Pipeline::range(1, 11).chunk(0).is_err());
    /// # Ok::<(), lazyflow_core::FlowError>(())
    /// ```
    fn chunk(self, size: usize) -> Result<Pipeline<Vec<T>>>;
}

impl<T: 'static> ChunkExt<T> for Pipeline<T> {
    fn chunk(self, size: usize) -> Result<Pipeline<Vec<T>>> {
        if size == 0 {
            debug!("rejecting chunk with size 0");
            return Err(FlowError::invalid_configuration("chunk", "size", size));
        }
        Ok(Pipeline::from_fn(move |sink| {
            let mut chunk = Vec::with_capacity(size);
            let mut open = true;
            self.drive(|value| {
                chunk.push(value);
                if chunk.len() == size {
                    open = sink(mem::replace(&mut chunk, Vec::with_capacity(size)));
                }
                open
            });
            if open && !chunk.is_empty() {
                sink(chunk);
            }
        }))
    }
}
