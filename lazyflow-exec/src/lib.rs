// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal operations for lazyflow pipelines.
//!
//! A terminal operation drives a [`Pipeline`](lazyflow_core::Pipeline) and
//! returns a plain value. All of them take `&self`, so the same pipeline can be
//! consumed again later; each run re-executes the source.
//!
//! - [`CollectExt`], [`CountExt`], [`ReduceExt`], [`PartitionExt`]: drain everything
//! - [`ElementExt`]: `first` stops after one element, `last` drains everything
//! - [`MatchExt`]: stop at the first element that settles the answer
//! - [`ForEachExt`]: typed, [`Invocable`](lazyflow_core::Invocable) and
//!   dynamically typed consumers
//! - [`ToChannelExt`]: drive on a producer thread into a bounded channel

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod collect;
pub mod count;
pub mod element;
pub mod for_each;
pub mod matching;
pub mod partition;
pub mod reduce;
pub mod to_channel;

pub use collect::CollectExt;
pub use count::CountExt;
pub use element::ElementExt;
pub use for_each::ForEachExt;
pub use matching::MatchExt;
pub use partition::PartitionExt;
pub use reduce::ReduceExt;
pub use to_channel::{ChannelExport, ToChannelExt};
