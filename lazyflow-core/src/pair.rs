// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Two values produced side by side, as emitted by `combine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pair<T, U> {
    pub first: T,
    pub second: U,
}

impl<T, U> Pair<T, U> {
    #[must_use]
    pub const fn new(first: T, second: U) -> Self {
        Self { first, second }
    }

    pub fn into_tuple(self) -> (T, U) {
        (self.first, self.second)
    }
}

impl<T, U> From<(T, U)> for Pair<T, U> {
    fn from((first, second): (T, U)) -> Self {
        Self { first, second }
    }
}

/// A key together with the value grouped under it, as emitted by `group_by_flow`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyValue<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}
