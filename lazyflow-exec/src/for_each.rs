// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-element consumption.
//!
//! Three entry points, from most to least statically typed:
//!
//! - [`for_each`](ForEachExt::for_each) takes a closure
//! - [`for_each_invocable`](ForEachExt::for_each_invocable) takes any
//!   [`Invocable`] handler
//! - [`for_each_dynamic`](ForEachExt::for_each_dynamic) takes a type-erased
//!   callable and checks its shape before any element is produced

use lazyflow_core::reflect::DynamicCallable;
use lazyflow_core::{Invocable, Pipeline, Result};
use std::any::Any;

/// Extension trait providing the `for_each` family of terminal operations.
pub trait ForEachExt<T> {
    /// Calls `action` once per element, in order.
    fn for_each<F>(&self, action: F)
    where
        F: FnMut(T);

    /// Hands every element to `handler`, in order.
    ///
    /// ```
    /// use lazyflow_core::{Invocable, Pipeline};
    /// use lazyflow_exec::ForEachExt;
    /// use std::sync::atomic::{AtomicI64, Ordering};
    ///
    /// struct Total(AtomicI64);
    ///
    /// impl Invocable<i64> for Total {
    ///     fn invoke(&self, value: i64) {
    ///         self.0.fetch_add(value, Ordering::SeqCst);
    ///     }
    /// }
    ///
    /// let total = Total(AtomicI64::new(0));
    /// Pipeline::range(1, 5).for_each_invocable(&total);
    /// assert_eq!(total.0.load(Ordering::SeqCst), 10);
    /// ```
    fn for_each_invocable<I>(&self, handler: &I)
    where
        I: Invocable<T> + ?Sized;

    /// Adapts `callable` with [`DynamicCallable`], then calls it once per
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::NotInvocable`](lazyflow_core::FlowError::NotInvocable)
    /// when `callable` has no recognised callable shape. The pipeline is not
    /// driven in that case.
    fn for_each_dynamic(&self, callable: &dyn Any) -> Result<()>;
}

impl<T: 'static> ForEachExt<T> for Pipeline<T> {
    fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(T),
    {
        self.drive(|value| {
            action(value);
            true
        });
    }

    fn for_each_invocable<I>(&self, handler: &I)
    where
        I: Invocable<T> + ?Sized,
    {
        self.for_each(|value| handler.invoke(value));
    }

    fn for_each_dynamic(&self, callable: &dyn Any) -> Result<()> {
        let handler = DynamicCallable::<T>::resolve(callable)?;
        self.for_each_invocable(&handler);
        Ok(())
    }
}
