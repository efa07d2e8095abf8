// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixed-size windows over a pipeline.
//!
//! A window of `size` elements is emitted each time the internal buffer holds
//! `size` elements; the buffer then advances by `step`:
//!
//! - `step < size`: sliding, consecutive windows overlap by `size - step`
//! - `step == size`: tumbling, windows are adjacent
//! - `step > size`: the buffer is cleared and filling restarts from the next
//!   element
//!
//! Trailing elements that never fill a window are dropped. Every emitted
//! window is its own `Vec`, independent of the buffer and of other windows.
//!
//! ```
//! use lazyflow_stream::prelude::*;
//!
//! let sliding = Pipeline::range(1, 6).window(3, 1)?;
//!
//! let mut out = Vec::new();
//! sliding.drive(|w| {
//!     out.push(w);
//!     true
//! });
//! assert_eq!(out, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
//! # Ok::<(), lazyflow_core::FlowError>(())
//! ```

use lazyflow_core::{FlowError, Pipeline, Result};
use std::num::NonZeroUsize;

/// A validated window shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowConfig {
    size: NonZeroUsize,
    step: NonZeroUsize,
}

impl WindowConfig {
    /// Creates a window shape of `size` elements advancing by `step`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidConfiguration`] when either value is zero.
    pub fn new(size: usize, step: usize) -> Result<Self> {
        let size = NonZeroUsize::new(size).ok_or_else(|| {
            debug!("rejecting window with size 0");
            FlowError::invalid_configuration("window", "size", size)
        })?;
        let step = NonZeroUsize::new(step).ok_or_else(|| {
            debug!("rejecting window with step 0");
            FlowError::invalid_configuration("window", "step", step)
        })?;
        Ok(Self { size, step })
    }

    /// Overlapping windows advancing one element at a time.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidConfiguration`] when `size` is zero.
    pub fn sliding(size: usize) -> Result<Self> {
        Self::new(size, 1)
    }

    /// Adjacent, non-overlapping windows.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidConfiguration`] when `size` is zero.
    pub fn tumbling(size: usize) -> Result<Self> {
        Self::new(size, size)
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size.get()
    }

    #[must_use]
    pub const fn step(&self) -> usize {
        self.step.get()
    }
}

/// Extension trait providing the [`window`](Self::window) and
/// [`window_with`](Self::window_with) operators.
pub trait WindowExt<T>: Sized {
    /// Emits windows of `size` elements advancing by `step`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidConfiguration`] when `size` or `step` is
    /// zero, before any element is produced.
    fn window(self, size: usize, step: usize) -> Result<Pipeline<Vec<T>>>;

    /// Emits windows shaped by an already validated [`WindowConfig`].
    fn window_with(self, config: WindowConfig) -> Pipeline<Vec<T>>;
}

impl<T> WindowExt<T> for Pipeline<T>
where
    T: Clone + 'static,
{
    fn window(self, size: usize, step: usize) -> Result<Pipeline<Vec<T>>> {
        Ok(self.window_with(WindowConfig::new(size, step)?))
    }

    fn window_with(self, config: WindowConfig) -> Pipeline<Vec<T>> {
        let size = config.size();
        let step = config.step();
        Pipeline::from_fn(move |sink| {
            let mut buffer: Vec<T> = Vec::with_capacity(size);
            self.drive(|value| {
                buffer.push(value);
                while buffer.len() >= size {
                    if !sink(buffer[..size].to_vec()) {
                        return false;
                    }
                    if step >= buffer.len() {
                        buffer.clear();
                    } else {
                        buffer.drain(..step);
                    }
                }
                true
            });
        })
    }
}
