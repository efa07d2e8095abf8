// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the lazyflow pipeline library.
//!
//! This crate provides fixture types, source builders and contract checkers
//! used across the workspace's tests and benchmarks. It is designed for use in
//! development and testing only, not for production code.
//!
//! # Test Fixtures
//!
//! ```rust
//! use lazyflow_test_utils::test_data::{person_alice, TestData};
//!
//! match person_alice() {
//!     TestData::Person(p) => assert_eq!(p.name, "Alice"),
//!     _ => panic!("Expected person"),
//! }
//! ```
//!
//! - `Person` - a name and an age
//! - `Animal` - a name and a number of legs
//! - `Plant` - a species and a height
//!
//! # Checking Laziness
//!
//! [`counting_source`] counts how many elements a source produced, which is how
//! tests verify that operators pull no more than they need:
//!
//! ```rust
//! use lazyflow_test_utils::{counting_source, drain_prefix, produced};
//!
//! let (source, counter) = counting_source(vec![1, 2, 3, 4, 5]);
//! assert_eq!(drain_prefix(&source, 2), vec![1, 2]);
//! assert_eq!(produced(&counter), 2);
//! ```
//!
//! [`assert_stops_after`] panics if a producer keeps calling its sink after
//! being told to stop.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod animal;
pub mod helpers;
pub mod person;
pub mod plant;
pub mod test_data;

pub use helpers::{
    assert_stops_after, counting_naturals, counting_source, drain, drain_prefix, filled_channel,
    produced, Recorder,
};
pub use test_data::{DataVariant, TestData};
