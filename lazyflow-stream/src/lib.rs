// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Intermediate operators for lazyflow pipelines.
//!
//! Every operator is provided by its own extension trait on
//! [`Pipeline`](lazyflow_core::Pipeline) and returns a new pipeline whose
//! producer wraps the old one. Nothing runs until the outermost pipeline is
//! driven; then each element is pulled through every stage in turn, and a stop
//! signal from the consumer travels back up to the source.
//!
//! ## Operator Categories
//!
//! ### Single-source operators
//!
//! - **[`filter`](FilterExt::filter)**, **[`map`](MapExt::map)**,
//!   **[`map_to`](MapExt::map_to)**, **[`peek`](PeekExt::peek)**
//! - **[`take`](TakeExt::take)**, **[`skip`](SkipExt::skip)**,
//!   **[`take_while`](TakeWhileExt::take_while)**,
//!   **[`skip_while`](SkipWhileExt::skip_while)**
//!
//! ### Multi-source operators
//!
//! - **[`concat`](ConcatExt::concat)** and **[`merge`](MergeExt::merge)**: sequential, never interleaved
//! - **[`combine`](CombineExt::combine)** and **[`combine_with`](CombineExt::combine_with)**:
//!   position-wise pairing; these buffer both inputs, see [`combine`](mod@combine)
//!
//! ### Stateful operators
//!
//! - **[`distinct`](DistinctExt::distinct)**
//! - **[`chunk`](ChunkExt::chunk)** and **[`window`](WindowExt::window)**: validated
//!   when the operator is built
//! - **[`group_by`](GroupByExt::group_by)** and **[`group_by_flow`](GroupByExt::group_by_flow)**
//! - **[`flat_map`](FlatMapExt::flat_map)**
//!
//! # Example
//!
//! ```
//! use lazyflow_stream::prelude::*;
//!
//! let words = pipeline!["apple", "avocado", "banana", "blueberry", "cherry"];
//! let grouped = words
//!     .filter(|w| w.len() > 5)
//!     .group_by(|w| w.chars().next());
//!
//! assert_eq!(grouped[&Some('a')], vec!["avocado"]);
//! assert_eq!(grouped[&Some('b')], vec!["banana", "blueberry"]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod chunk;
pub mod combine;
pub mod concat;
pub mod distinct;
pub mod filter;
pub mod flat_map;
pub mod group_by;
pub mod map;
pub mod merge;
pub mod peek;
pub mod prelude;
pub mod skip;
pub mod skip_while;
pub mod take;
pub mod take_while;
pub mod window;

pub use self::chunk::ChunkExt;
pub use self::combine::CombineExt;
pub use self::concat::ConcatExt;
pub use self::distinct::DistinctExt;
pub use self::filter::FilterExt;
pub use self::flat_map::FlatMapExt;
pub use self::group_by::GroupByExt;
pub use self::map::MapExt;
pub use self::merge::{merge, MergeExt};
pub use self::peek::PeekExt;
pub use self::skip::SkipExt;
pub use self::skip_while::SkipWhileExt;
pub use self::take::TakeExt;
pub use self::take_while::TakeWhileExt;
pub use self::window::{WindowConfig, WindowExt};
