// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Dynamically typed boundary.
//!
//! The pipeline core is fully statically typed. This module is the one place
//! where type-erased values are accepted, for callers that only hold a
//! `dyn Any`: [`flow_of`] and [`flow_of_values`] adapt erased sources into a
//! `Pipeline<T>`, and [`DynamicCallable`] adapts an erased callable into an
//! [`Invocable`]. Every mismatch is reported as a [`FlowError`] at the point of
//! adaptation, before any element is produced.

use crate::flow_error::{FlowError, Result};
use crate::invocable::Invocable;
use crate::pipeline::Pipeline;
use async_channel::Receiver;
use std::any::{type_name, Any, TypeId};
use std::collections::{BTreeMap, HashMap, HashSet};

// Tries `[$elem; N]` for every listed `N`, returning on the first match.
macro_rules! downcast_arrays {
    ($source:ident, $elem:ty, [$($n:literal)*]) => {
        $(
            let $source = match $source.downcast::<[$elem; $n]>() {
                Ok(values) => return Ok(Pipeline::from_vec(Vec::from(*values))),
                Err(source) => source,
            };
        )*
    };
}

/// Best-effort universal constructor.
///
/// Accepted shapes, tried in this order:
///
/// - `()` - an empty pipeline
/// - `Pipeline<T>` - returned as-is
/// - `Vec<T>`, `Box<[T]>` or `[T; N]` with `N <= 32` - the elements in order
/// - `Receiver<T>` - drains the channel
/// - `HashMap<String, T>` / `BTreeMap<String, T>` - the keys when `T` is
///   `String`, the values otherwise
/// - `HashMap<T, T>`, `HashMap<T, String>`, `BTreeMap<T, T>` or
///   `BTreeMap<T, String>` - the keys
/// - `HashSet<T>` - the members
/// - `T` - a single value
///
/// Arrays longer than 32 elements and maps with other value types are not
/// recognised; box them as a `Vec<T>` or a `Box<[T]>` instead.
///
/// # Errors
///
/// Returns [`FlowError::TypeMismatch`] when `source` has none of these shapes.
///
/// # Examples
///
/// ```
/// use lazyflow_core::reflect::flow_of;
/// use std::any::Any;
///
/// let from_vec = flow_of::<i32>(Box::new(vec![1, 2, 3]));
/// let from_scalar = flow_of::<i32>(Box::new(7));
/// let wrong = flow_of::<i32>(Box::new("seven"));
///
/// assert!(from_vec.is_ok());
/// assert!(from_scalar.is_ok());
/// assert!(wrong.is_err());
/// ```
pub fn flow_of<T>(source: Box<dyn Any + Send>) -> Result<Pipeline<T>>
where
    T: Clone + Send + Sync + 'static,
{
    if source.is::<()>() {
        return Ok(Pipeline::empty());
    }
    let source = match source.downcast::<Pipeline<T>>() {
        Ok(pipeline) => return Ok(*pipeline),
        Err(source) => source,
    };
    let source = match source.downcast::<Vec<T>>() {
        Ok(values) => return Ok(Pipeline::from_vec(*values)),
        Err(source) => source,
    };
    let source = match source.downcast::<Box<[T]>>() {
        Ok(values) => return Ok(Pipeline::from_vec(values.into_vec())),
        Err(source) => source,
    };
    downcast_arrays!(source, T, [
        0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
        17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
    ]);
    let source = match source.downcast::<Receiver<T>>() {
        Ok(receiver) => return Ok(Pipeline::from_channel(*receiver)),
        Err(source) => source,
    };
    let source = match source.downcast::<HashMap<String, T>>() {
        Ok(map) => return Ok(Pipeline::from_vec(keys_or_values(map.into_iter()))),
        Err(source) => source,
    };
    let source = match source.downcast::<BTreeMap<String, T>>() {
        Ok(map) => return Ok(Pipeline::from_vec(keys_or_values(map.into_iter()))),
        Err(source) => source,
    };
    let source = match source.downcast::<HashMap<T, T>>() {
        Ok(map) => return Ok(Pipeline::from_vec(map.into_keys().collect())),
        Err(source) => source,
    };
    let source = match source.downcast::<HashMap<T, String>>() {
        Ok(map) => return Ok(Pipeline::from_vec(map.into_keys().collect())),
        Err(source) => source,
    };
    let source = match source.downcast::<BTreeMap<T, T>>() {
        Ok(map) => return Ok(Pipeline::from_vec(map.into_keys().collect())),
        Err(source) => source,
    };
    let source = match source.downcast::<BTreeMap<T, String>>() {
        Ok(map) => return Ok(Pipeline::from_vec(map.into_keys().collect())),
        Err(source) => source,
    };
    let source = match source.downcast::<HashSet<T>>() {
        Ok(set) => return Ok(Pipeline::from_vec(set.into_iter().collect())),
        Err(source) => source,
    };
    match source.downcast::<T>() {
        Ok(value) => Ok(Pipeline::single(*value)),
        Err(_) => {
            let error = FlowError::type_mismatch(format!(
                "cannot convert source into Pipeline<{}>",
                type_name::<T>()
            ));
            debug!("flow_of rejected source: {}", error);
            Err(error)
        }
    }
}

/// Variadic form of [`flow_of`]: every argument must be a `T`.
///
/// # Errors
///
/// Returns [`FlowError::TypeMismatch`] naming the 1-based position of the first
/// argument that is not a `T`.
pub fn flow_of_values<T>(values: Vec<Box<dyn Any + Send>>) -> Result<Pipeline<T>>
where
    T: Clone + Send + Sync + 'static,
{
    let mut typed = Vec::with_capacity(values.len());
    for (position, value) in values.into_iter().enumerate() {
        match value.downcast::<T>() {
            Ok(value) => typed.push(*value),
            Err(_) => {
                return Err(FlowError::type_mismatch(format!(
                    "argument {} is not of type {}",
                    position + 1,
                    type_name::<T>()
                )));
            }
        }
    }
    Ok(Pipeline::from_vec(typed))
}

fn keys_or_values<T: 'static>(entries: impl Iterator<Item = (String, T)>) -> Vec<T> {
    if TypeId::of::<T>() == TypeId::of::<String>() {
        entries
            .filter_map(|(key, _)| {
                let key: Box<dyn Any> = Box::new(key);
                key.downcast::<T>().ok().map(|key| *key)
            })
            .collect()
    } else {
        entries.map(|(_, value)| value).collect()
    }
}

enum Target<'a, T> {
    Unary(&'a (dyn Fn(T) + Send + Sync)),
    Nullary(&'a (dyn Fn() + Send + Sync)),
    Erased(&'a (dyn Fn(&dyn Any) + Send + Sync)),
}

/// An untyped callable adapted to take one pipeline element.
///
/// Recognised callables are function pointers `fn(T)`, `fn()` and
/// `fn(&dyn Any)`, and the boxed closures `Box<dyn Fn(T) + Send + Sync>`,
/// `Box<dyn Fn() + Send + Sync>` and `Box<dyn Fn(&dyn Any) + Send + Sync>`.
/// Zero-argument callables ignore the element; `&dyn Any` callables receive it
/// type-erased.
///
/// ```
/// use lazyflow_core::reflect::DynamicCallable;
/// use lazyflow_core::Invocable;
///
/// fn shout(word: &'static str) {
///     assert_eq!(word, "hi");
/// }
///
/// let callable: fn(&'static str) = shout;
/// let adapted = DynamicCallable::<&'static str>::resolve(&callable).unwrap();
/// adapted.invoke("hi");
///
/// assert!(DynamicCallable::<&'static str>::resolve(&42).is_err());
/// ```
pub struct DynamicCallable<'a, T> {
    target: Target<'a, T>,
}

impl<'a, T: 'static> DynamicCallable<'a, T> {
    /// Inspects `callable` and prepares it for invocation.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::NotInvocable`] if `callable` has none of the
    /// recognised shapes.
    pub fn resolve(callable: &'a dyn Any) -> Result<Self> {
        let target = if let Some(function) = callable.downcast_ref::<fn(T)>() {
            Target::Unary(function)
        } else if let Some(function) = callable.downcast_ref::<Box<dyn Fn(T) + Send + Sync>>() {
            Target::Unary(function.as_ref())
        } else if let Some(function) = callable.downcast_ref::<fn()>() {
            Target::Nullary(function)
        } else if let Some(function) = callable.downcast_ref::<Box<dyn Fn() + Send + Sync>>() {
            Target::Nullary(function.as_ref())
        } else if let Some(function) = callable.downcast_ref::<fn(&dyn Any)>() {
            Target::Erased(function)
        } else if let Some(function) =
            callable.downcast_ref::<Box<dyn Fn(&dyn Any) + Send + Sync>>()
        {
            Target::Erased(function.as_ref())
        } else {
            debug!("value passed as callable is not invocable");
            return Err(FlowError::NotInvocable);
        };
        Ok(Self { target })
    }
}

impl<T: 'static> Invocable<T> for DynamicCallable<'_, T> {
    fn invoke(&self, value: T) {
        match self.target {
            Target::Unary(function) => function(value),
            Target::Nullary(function) => function(),
            Target::Erased(function) => function(&value),
        }
    }
}
