// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::InvalidParameterError;
use crate::register_unit;
use crate::traits::{ParamValue, Unit};

use super::{expect_bool, expect_width, report, unknown_key};

/// Sum unit - reduces `width` inputs to a single output
///
/// Parameters:
/// - `width` (int, default 1, at most [`MAX_WIDTH`](super::MAX_WIDTH)): number of inputs. Changing it changes `input_count`.
/// - `mean` (bool, default false): divide by `width`. A zero-width mean is 0.0.
#[derive(Debug, Clone)]
pub struct SumUnit {
    width: usize,
    mean: bool,
}

register_unit!(SumUnit, "Sum");

impl Default for SumUnit {
    fn default() -> Self {
        Self { width: 1, mean: false }
    }
}

impl Unit for SumUnit {
    fn name(&self) -> &str {
        "Sum"
    }

    fn set_parameter(&mut self, key: &str, value: ParamValue) -> Result<(), InvalidParameterError> {
        let unit = "Sum";
        let outcome = match key {
            "width" => expect_width(unit, key, &value).map(|width| self.width = width),
            "mean" => expect_bool(unit, key, &value).map(|mean| self.mean = mean),
            _ => Err(unknown_key(unit, key)),
        };
        report(unit, key, outcome)
    }

    fn input_count(&self) -> usize {
        self.width
    }

    fn output_count(&self) -> usize {
        1
    }

    fn compute(&self, input: &[f32], output: &mut [f32]) {
        let Some(slot) = output.first_mut() else {
            return;
        };
        let total: f32 = input.iter().sum();
        *slot = match (self.mean, input.len()) {
            (true, 0) => 0.0,
            (true, n) => total / n as f32,
            (false, _) => total,
        };
    }
}
