// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Something that can be called once per pipeline element.
///
/// Every `Fn(T)` closure is `Invocable<T>`. Implement it by hand for handler
/// objects, or obtain one for an untyped callable through
/// [`DynamicCallable`](crate::reflect::DynamicCallable).
pub trait Invocable<T> {
    /// Handles one element.
    fn invoke(&self, value: T);
}

impl<T, F> Invocable<T> for F
where
    F: Fn(T),
{
    fn invoke(&self, value: T) {
        self(value);
    }
}
