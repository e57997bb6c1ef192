// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by unit instances while being configured or executed.

use crate::traits::ParamKind;
use thiserror::Error;

/// A parameter assignment was rejected by a unit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidParameterError {
    /// The unit does not recognise the key.
    #[error("Unit '{unit}' has no parameter named '{key}'")]
    UnknownKey { unit: String, key: String },

    /// The key is known but the value has the wrong kind.
    #[error("Unit '{unit}' expects a {expected} value for '{key}', got {found}")]
    TypeMismatch {
        unit: String,
        key: String,
        expected: ParamKind,
        found: ParamKind,
    },

    /// The value has the right kind but is not acceptable.
    #[error("Unit '{unit}' rejected value for '{key}': {reason}")]
    OutOfRange {
        unit: String,
        key: String,
        reason: String,
    },
}

impl InvalidParameterError {
    /// Key the rejected assignment targeted.
    pub fn key(&self) -> &str {
        match self {
            InvalidParameterError::UnknownKey { key, .. }
            | InvalidParameterError::TypeMismatch { key, .. }
            | InvalidParameterError::OutOfRange { key, .. } => key,
        }
    }

    /// Name of the unit that rejected the assignment.
    pub fn unit(&self) -> &str {
        match self {
            InvalidParameterError::UnknownKey { unit, .. }
            | InvalidParameterError::TypeMismatch { unit, .. }
            | InvalidParameterError::OutOfRange { unit, .. } => unit,
        }
    }
}

/// `execute` was called with buffers whose lengths disagree with the unit's
/// declared input or output count.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Unit '{unit}' expects {expected_input} input and {expected_output} output values, \
     got buffers of {actual_input} and {actual_output}"
)]
pub struct BufferSizeMismatchError {
    pub unit: String,
    pub expected_input: usize,
    pub actual_input: usize,
    pub expected_output: usize,
    pub actual_output: usize,
}
