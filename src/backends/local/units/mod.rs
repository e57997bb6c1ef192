// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod affine;
pub mod clamp;
pub mod noop;
pub mod sum;

pub use affine::*;
pub use clamp::*;
pub use noop::*;
pub use sum::*;

use crate::errors::InvalidParameterError;
use crate::observability::messages::unit::{ParameterApplied, ParameterRejected};
use crate::observability::messages::StructuredLog;
use crate::traits::{ParamKind, ParamValue};

/// Log the outcome of a parameter assignment and pass it through.
pub(crate) fn report(
    unit: &str,
    key: &str,
    outcome: Result<(), InvalidParameterError>,
) -> Result<(), InvalidParameterError> {
    match &outcome {
        Ok(()) => ParameterApplied { unit, key }.log(),
        Err(error) => ParameterRejected { error }.log(),
    }
    outcome
}

pub(crate) fn unknown_key(unit: &str, key: &str) -> InvalidParameterError {
    InvalidParameterError::UnknownKey {
        unit: unit.to_string(),
        key: key.to_string(),
    }
}

fn mismatch(unit: &str, key: &str, expected: ParamKind, value: &ParamValue) -> InvalidParameterError {
    InvalidParameterError::TypeMismatch {
        unit: unit.to_string(),
        key: key.to_string(),
        expected,
        found: value.kind(),
    }
}

pub(crate) fn out_of_range(unit: &str, key: &str, reason: impl Into<String>) -> InvalidParameterError {
    InvalidParameterError::OutOfRange {
        unit: unit.to_string(),
        key: key.to_string(),
        reason: reason.into(),
    }
}

/// Largest buffer width a builtin unit accepts.
pub const MAX_WIDTH: usize = 1 << 20;

/// A non-negative `Int` parameter describing a buffer width, at most [`MAX_WIDTH`].
pub(crate) fn expect_width(unit: &str, key: &str, value: &ParamValue) -> Result<usize, InvalidParameterError> {
    let raw = value
        .as_int()
        .ok_or_else(|| mismatch(unit, key, ParamKind::Int, value))?;
    match usize::try_from(raw) {
        Ok(width) if width <= MAX_WIDTH => Ok(width),
        Ok(_) => Err(out_of_range(
            unit,
            key,
            format!("width must be at most {}, got {}", MAX_WIDTH, raw),
        )),
        Err(_) => Err(out_of_range(unit, key, format!("width must be non-negative, got {}", raw))),
    }
}

/// A finite `Float` parameter, narrowed to `f32`.
pub(crate) fn expect_finite(unit: &str, key: &str, value: &ParamValue) -> Result<f32, InvalidParameterError> {
    let raw = value
        .as_float()
        .ok_or_else(|| mismatch(unit, key, ParamKind::Float, value))?;
    let narrowed = raw as f32;
    if !narrowed.is_finite() {
        return Err(out_of_range(unit, key, format!("{} is not a finite f32", raw)));
    }
    Ok(narrowed)
}

pub(crate) fn expect_bool(unit: &str, key: &str, value: &ParamValue) -> Result<bool, InvalidParameterError> {
    value
        .as_bool()
        .ok_or_else(|| mismatch(unit, key, ParamKind::Bool, value))
}
