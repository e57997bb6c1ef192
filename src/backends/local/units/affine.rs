// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::InvalidParameterError;
use crate::register_unit;
use crate::traits::{ParamValue, Unit};

use super::{expect_finite, expect_width, report, unknown_key};

/// Affine unit - element-wise `y = gain * x + bias`
///
/// Parameters:
/// - `width` (int, default 1, at most [`MAX_WIDTH`](super::MAX_WIDTH)): number of input and output values.
///   Changing it changes both counts.
/// - `gain` (float, default 1.0)
/// - `bias` (float, default 0.0)
#[derive(Debug, Clone)]
pub struct AffineUnit {
    width: usize,
    gain: f32,
    bias: f32,
}

register_unit!(AffineUnit, "Affine");

impl Default for AffineUnit {
    fn default() -> Self {
        Self {
            width: 1,
            gain: 1.0,
            bias: 0.0,
        }
    }
}

impl Unit for AffineUnit {
    fn name(&self) -> &str {
        "Affine"
    }

    fn set_parameter(&mut self, key: &str, value: ParamValue) -> Result<(), InvalidParameterError> {
        let unit = "Affine";
        let outcome = match key {
            "width" => expect_width(unit, key, &value).map(|width| self.width = width),
            "gain" => expect_finite(unit, key, &value).map(|gain| self.gain = gain),
            "bias" => expect_finite(unit, key, &value).map(|bias| self.bias = bias),
            _ => Err(unknown_key(unit, key)),
        };
        report(unit, key, outcome)
    }

    fn input_count(&self) -> usize {
        self.width
    }

    fn output_count(&self) -> usize {
        self.width
    }

    fn compute(&self, input: &[f32], output: &mut [f32]) {
        for (y, x) in output.iter_mut().zip(input) {
            *y = self.gain * x + self.bias;
        }
    }
}
