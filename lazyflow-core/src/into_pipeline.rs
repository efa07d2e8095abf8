// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversions from collections, maps and channels into pipelines.

use crate::pipeline::Pipeline;
use async_channel::Receiver;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::BuildHasher;
use std::ops::Range;

/// A trait for types that can be converted into a [`Pipeline`].
///
/// This lets operators and constructors accept collections, channels and
/// existing pipelines uniformly. Converting a pipeline is the identity.
pub trait IntoPipeline<T> {
    /// Converts this value into a pipeline.
    fn into_pipeline(self) -> Pipeline<T>;
}

impl<T: 'static> IntoPipeline<T> for Pipeline<T> {
    fn into_pipeline(self) -> Pipeline<T> {
        self
    }
}

impl<T> IntoPipeline<T> for Vec<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn into_pipeline(self) -> Pipeline<T> {
        Pipeline::from_vec(self)
    }
}

impl<T, const N: usize> IntoPipeline<T> for [T; N]
where
    T: Clone + Send + Sync + 'static,
{
    fn into_pipeline(self) -> Pipeline<T> {
        Pipeline::from_vec(self.into())
    }
}

impl<T: Send + 'static> IntoPipeline<T> for Receiver<T> {
    fn into_pipeline(self) -> Pipeline<T> {
        Pipeline::from_channel(self)
    }
}

impl IntoPipeline<i64> for Range<i64> {
    fn into_pipeline(self) -> Pipeline<i64> {
        Pipeline::range(self.start, self.end)
    }
}

/// Maps convert into a pipeline of their keys.
impl<K, V, S> IntoPipeline<K> for HashMap<K, V, S>
where
    K: Clone + Send + Sync + 'static,
    S: BuildHasher,
{
    fn into_pipeline(self) -> Pipeline<K> {
        Pipeline::from_vec(self.into_keys().collect())
    }
}

impl<K, V> IntoPipeline<K> for BTreeMap<K, V>
where
    K: Clone + Send + Sync + 'static,
{
    fn into_pipeline(self) -> Pipeline<K> {
        Pipeline::from_vec(self.into_keys().collect())
    }
}

impl<T, S> IntoPipeline<T> for HashSet<T, S>
where
    T: Clone + Send + Sync + 'static,
    S: BuildHasher,
{
    fn into_pipeline(self) -> Pipeline<T> {
        Pipeline::from_vec(self.into_iter().collect())
    }
}

/// Selects the values of a map instead of its keys.
///
/// ```
/// use lazyflow_core::{IntoPipeline, MapValues};
/// use std::collections::BTreeMap;
///
/// let ages = BTreeMap::from([("alice", 25), ("bob", 30)]);
/// let values = MapValues(ages).into_pipeline();
/// # let _ = values;
/// ```
#[derive(Debug, Clone)]
pub struct MapValues<M>(pub M);

impl<K, V, S> IntoPipeline<V> for MapValues<HashMap<K, V, S>>
where
    V: Clone + Send + Sync + 'static,
    S: BuildHasher,
{
    fn into_pipeline(self) -> Pipeline<V> {
        Pipeline::from_vec(self.0.into_values().collect())
    }
}

impl<K, V> IntoPipeline<V> for MapValues<BTreeMap<K, V>>
where
    V: Clone + Send + Sync + 'static,
{
    fn into_pipeline(self) -> Pipeline<V> {
        Pipeline::from_vec(self.0.into_values().collect())
    }
}

impl<T> FromIterator<T> for Pipeline<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}
