// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Lazyflow
//!
//! Lazy, composable pipelines over values of any type.
//!
//! ## Overview
//!
//! A [`Pipeline`] wraps a *producer*: a re-runnable routine that pushes elements
//! one at a time into a *sink*. The sink answers `true` to ask for more and
//! `false` to stop, and every operator forwards that answer upstream. This gives
//! three guarantees:
//!
//! - nothing runs until a terminal operation drives the pipeline
//! - an infinite source can be consumed as long as something downstream stops it
//! - each terminal operation re-runs the source from the start
//!
//! The library is split across three crates, all re-exported here:
//!
//! - `lazyflow-core`: [`Pipeline`], sources, [`FlowError`], the dynamic boundary
//! - `lazyflow-stream`: intermediate operators (`filter`, `map`, `window`, ...)
//! - `lazyflow-exec`: terminal operations (`collect`, `reduce`, `to_channel`, ...)
//!
//! ## Quick Start
//!
//! ```rust
//! use lazyflow::prelude::*;
//!
//! let squares_of_evens = Pipeline::infinite(|i| i as u64)
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * n)
//!     .take(4)
//!     .collect();
//!
//! assert_eq!(squares_of_evens, vec![0, 4, 16, 36]);
//! ```
//!
//! ## Errors
//!
//! Operators with numeric parameters are validated when they are built:
//!
//! ```rust
//! use lazyflow::prelude::*;
//!
//! assert!(Pipeline::range(0, 10).chunk(0).is_err());
//! let chunks = Pipeline::range(0, 5).chunk(2)?.collect();
//! assert_eq!(chunks, vec![vec![0, 1], vec![2, 3], vec![4]]);
//! # Ok::<(), lazyflow::FlowError>(())
//! ```
//!
//! ## Feature flags
//!
//! - `tracing`: emit `tracing` events from every crate instead of the silent
//!   default

pub use lazyflow_core::reflect::{self, flow_of, flow_of_values, DynamicCallable};
pub use lazyflow_core::{
    pipeline, FlowError, IntoPipeline, Invocable, KeyValue, MapValues, Pair, Pipeline, Producer,
    Result, Sink,
};

pub use lazyflow_exec::ChannelExport;
pub use lazyflow_stream::{merge, WindowConfig};

/// Every operator trait, grouped by crate.
pub mod ops {
    pub use lazyflow_exec::{
        CollectExt, CountExt, ElementExt, ForEachExt, MatchExt, PartitionExt, ReduceExt,
        ToChannelExt,
    };
    pub use lazyflow_stream::{
        ChunkExt, CombineExt, ConcatExt, DistinctExt, FilterExt, FlatMapExt, GroupByExt, MapExt,
        MergeExt, PeekExt, SkipExt, SkipWhileExt, TakeExt, TakeWhileExt, WindowExt,
    };
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ops::*;
    pub use lazyflow_core::{
        pipeline, FlowError, IntoPipeline, Invocable, KeyValue, Pair, Pipeline,
    };
    pub use lazyflow_exec::ChannelExport;
    pub use lazyflow_stream::{merge, WindowConfig};
}
