// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for the lazyflow pipeline library.
//!
//! - [`Pipeline`]: a lazy sequence backed by a re-runnable [`Producer`]
//! - [`Sink`]: the per-element callback a producer pushes into
//! - Source constructors (`from_vec`, `range`, `infinite`, `from_channel`, ...)
//!   and the [`pipeline!`] macro
//! - [`IntoPipeline`]: conversion from collections, maps and channels
//! - [`Pair`] and [`KeyValue`]: output shapes of the pairing and grouping operators
//! - [`Invocable`]: typed per-element handlers
//! - [`reflect`]: the dynamically typed boundary
//! - [`FlowError`] and [`Result`]

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod flow_error;
pub mod into_pipeline;
pub mod invocable;
pub mod pair;
pub mod pipeline;
pub mod reflect;
mod source;

pub use self::flow_error::{FlowError, Result};
pub use self::into_pipeline::{IntoPipeline, MapValues};
pub use self::invocable::Invocable;
pub use self::pair::{KeyValue, Pair};
pub use self::pipeline::{Pipeline, Producer, Sink};
