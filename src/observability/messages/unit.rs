// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for unit configuration and execution.

use crate::errors::{BufferSizeMismatchError, InvalidParameterError};
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A unit accepted a parameter assignment.
///
/// # Log Level
/// `debug!` - Routine detail
///
/// # Example
/// ```
/// use unit_registry::observability::messages::unit::ParameterApplied;
///
/// let msg = ParameterApplied {
///     unit: "Affine",
///     key: "gain",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ParameterApplied<'a> {
    pub unit: &'a str,
    pub key: &'a str,
}

impl Display for ParameterApplied<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Unit '{}' parameter '{}' set", self.unit, self.key)
    }
}

impl StructuredLog for ParameterApplied<'_> {
    fn log(&self) {
        tracing::debug!(unit = self.unit, key = self.key, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("parameter", span_name = name, unit = self.unit, key = self.key)
    }
}

/// A unit rejected a parameter assignment.
///
/// # Log Level
/// `warn!` - Returned to the caller as a typed error
///
/// # Example
/// ```
/// use unit_registry::errors::InvalidParameterError;
/// use unit_registry::observability::messages::unit::ParameterRejected;
///
/// let error = InvalidParameterError::UnknownKey {
///     unit: "Affine".to_string(),
///     key: "gian".to_string(),
/// };
/// let msg = ParameterRejected { error: &error };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct ParameterRejected<'a> {
    pub error: &'a InvalidParameterError,
}

impl Display for ParameterRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Parameter rejected: {}", self.error)
    }
}

impl StructuredLog for ParameterRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            unit = self.error.unit(),
            key = self.error.key(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "parameter",
            span_name = name,
            unit = self.error.unit(),
            key = self.error.key(),
        )
    }
}

/// `execute` was called with wrongly sized buffers.
///
/// # Log Level
/// `warn!` - Returned to the caller as a typed error
pub struct BufferSizeRejected<'a> {
    pub error: &'a BufferSizeMismatchError,
}

impl Display for BufferSizeRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Execution rejected: {}", self.error)
    }
}

impl StructuredLog for BufferSizeRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            unit = %self.error.unit,
            expected_input = self.error.expected_input,
            actual_input = self.error.actual_input,
            expected_output = self.error.expected_output,
            actual_output = self.error.actual_output,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "execution",
            span_name = name,
            unit = %self.error.unit,
        )
    }
}

/// A unit completed one computation step.
///
/// # Log Level
/// `trace!` - Emitted on every call to `execute`
///
/// # Example
/// ```
/// use unit_registry::observability::messages::unit::UnitExecuted;
///
/// let msg = UnitExecuted {
///     unit: "Sum",
///     input_len: 3,
///     output_len: 1,
/// };
///
/// assert_eq!(msg.to_string(), "Unit 'Sum' executed (3 in, 1 out)");
/// ```
pub struct UnitExecuted<'a> {
    pub unit: &'a str,
    pub input_len: usize,
    pub output_len: usize,
}

impl Display for UnitExecuted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Unit '{}' executed ({} in, {} out)", self.unit, self.input_len, self.output_len)
    }
}

impl StructuredLog for UnitExecuted<'_> {
    fn log(&self) {
        tracing::trace!(
            unit = self.unit,
            input_len = self.input_len,
            output_len = self.output_len,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "execution",
            span_name = name,
            unit = self.unit,
            input_len = self.input_len,
            output_len = self.output_len,
        )
    }
}
