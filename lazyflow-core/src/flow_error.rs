// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the lazyflow pipeline library
//!
//! Only two kinds of failure are reported as values: operator misconfiguration
//! (rejected when the operator is constructed, never while a pipeline is being
//! drained) and type adaptation at the dynamic boundary. Panics raised by
//! caller-supplied closures are not represented here; they unwind through the
//! terminal operation that triggered them.
//!
//! # Examples
//!
//! ```
//! use lazyflow_core::{FlowError, Result};
//!
//! fn checked_size(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(FlowError::invalid_configuration("chunk", "size", size));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(checked_size(0).is_err());
//! ```

/// Root error type for all lazyflow operations
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// An operator was configured with an out-of-range parameter
    ///
    /// Raised synchronously by the call that builds the operator.
    #[error("Invalid configuration for {operator}: {parameter} must be positive, got {value}")]
    InvalidConfiguration {
        /// Operator being constructed (`chunk`, `window`, ...)
        operator: &'static str,
        /// Offending parameter name
        parameter: &'static str,
        /// Rejected value
        value: usize,
    },

    /// A dynamically typed value did not match the requested element type
    #[error("Type mismatch: {context}")]
    TypeMismatch {
        /// Which argument failed and what was expected
        context: String,
    },

    /// A dynamically supplied entity cannot be called with one element
    #[error("argument must be a callable")]
    NotInvocable,

    /// The background producer of `to_channel` could not be started
    #[error("Failed to spawn producer task: {0}")]
    TaskSpawn(#[from] std::io::Error),
}

impl FlowError {
    /// Create a configuration error for `operator`'s `parameter`
    #[must_use]
    pub const fn invalid_configuration(
        operator: &'static str,
        parameter: &'static str,
        value: usize,
    ) -> Self {
        Self::InvalidConfiguration {
            operator,
            parameter,
            value,
        }
    }

    /// Create a type mismatch error with the given context
    pub fn type_mismatch(context: impl Into<String>) -> Self {
        Self::TypeMismatch {
            context: context.into(),
        }
    }

    /// Check if this error was raised while constructing an operator
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Check if this error comes from the dynamic type-adaptation boundary
    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. } | Self::NotInvocable)
    }
}

/// Specialized Result type for lazyflow operations
pub type Result<T> = std::result::Result<T, FlowError>;
