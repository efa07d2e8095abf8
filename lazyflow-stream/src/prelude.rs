// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all commonly used traits and types.
//!
//! Import this module for convenient access to every lazyflow operator:
//!
//! ```
//! use lazyflow_stream::prelude::*;
//!
//! let processed = Pipeline::range(0, 100)
//!     .filter(|n| n % 7 == 0)
//!     .map(|n| n * 2)
//!     .skip(1)
//!     .take(3);
//! # let _ = processed;
//! ```
//!
//! # Contents
//!
//! ## Extension Traits (Operators)
//!
//! - [`ChunkExt`] - Fixed-size groups with a short final group
//! - [`CombineExt`] - Position-wise pairing of two pipelines
//! - [`ConcatExt`] - One pipeline after another
//! - [`DistinctExt`] - First occurrence of each value
//! - [`FilterExt`] - Keep elements matching a predicate
//! - [`FlatMapExt`] - Expand each element into a sub-pipeline
//! - [`GroupByExt`] - Group by a derived key
//! - [`MapExt`] - Transform elements
//! - [`MergeExt`] - Any number of pipelines in sequence
//! - [`PeekExt`] - Side-effect observation for debugging
//! - [`SkipExt`] / [`SkipWhileExt`] - Drop a prefix
//! - [`TakeExt`] / [`TakeWhileExt`] - Keep a prefix
//! - [`WindowExt`] - Sliding and tumbling windows
//!
//! ## Types
//!
//! - [`Pipeline`], [`IntoPipeline`] and the [`pipeline!`] macro
//! - [`Pair`] - Output of [`CombineExt::combine`]
//! - [`KeyValue`] - Output of [`GroupByExt::group_by_flow`]
//! - [`WindowConfig`] - Validated window shape

pub use crate::chunk::ChunkExt;
pub use crate::combine::CombineExt;
pub use crate::concat::ConcatExt;
pub use crate::distinct::DistinctExt;
pub use crate::filter::FilterExt;
pub use crate::flat_map::FlatMapExt;
pub use crate::group_by::GroupByExt;
pub use crate::map::MapExt;
pub use crate::merge::{merge, MergeExt};
pub use crate::peek::PeekExt;
pub use crate::skip::SkipExt;
pub use crate::skip_while::SkipWhileExt;
pub use crate::take::TakeExt;
pub use crate::take_while::TakeWhileExt;
pub use crate::window::{WindowConfig, WindowExt};

pub use lazyflow_core::{pipeline, IntoPipeline, KeyValue, Pair, Pipeline};
