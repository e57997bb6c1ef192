// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::InvalidParameterError;
use crate::register_unit;
use crate::traits::{ParamValue, Unit};

use super::{expect_finite, expect_width, out_of_range, report, unknown_key};

/// Clamp unit - limits each value to `[min, max]`
///
/// Parameters:
/// - `width` (int, default 1, at most [`MAX_WIDTH`](super::MAX_WIDTH)): number of input and output values.
/// - `min` (float, default unbounded), `max` (float, default unbounded).
///   An assignment that would leave `min > max` is rejected.
#[derive(Debug, Clone)]
pub struct ClampUnit {
    width: usize,
    min: f32,
    max: f32,
}

register_unit!(ClampUnit, "Clamp");

impl Default for ClampUnit {
    fn default() -> Self {
        Self {
            width: 1,
            min: f32::NEG_INFINITY,
            max: f32::INFINITY,
        }
    }
}

impl Unit for ClampUnit {
    fn name(&self) -> &str {
        "Clamp"
    }

    fn set_parameter(&mut self, key: &str, value: ParamValue) -> Result<(), InvalidParameterError> {
        let unit = "Clamp";
        let outcome = match key {
            "width" => expect_width(unit, key, &value).map(|width| self.width = width),
            "min" => expect_finite(unit, key, &value).and_then(|min| {
                if min > self.max {
                    return Err(out_of_range(unit, key, format!("min {} exceeds max {}", min, self.max)));
                }
                self.min = min;
                Ok(())
            }),
            "max" => expect_finite(unit, key, &value).and_then(|max| {
                if max < self.min {
                    return Err(out_of_range(unit, key, format!("max {} is below min {}", max, self.min)));
                }
                self.max = max;
                Ok(())
            }),
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
            *y = x.clamp(self.min, self.max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_by_default() {
        let unit = ClampUnit::default();
        let mut out = [0.0];
        unit.execute(&[-1e30], &mut out).unwrap();
        assert_eq!(out, [-1e30]);
    }

    #[test]
    fn test_clamps_each_value() {
        let mut unit = ClampUnit::default();
        unit.set_parameter("width", ParamValue::Int(4)).unwrap();
        unit.set_parameter("min", ParamValue::Float(-1.0)).unwrap();
        unit.set_parameter("max", ParamValue::Float(1.0)).unwrap();

        let mut out = [0.0; 4];
        unit.execute(&[-3.0, -0.5, 0.5, 3.0], &mut out).unwrap();

        assert_eq!(out, [-1.0, -0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let mut unit = ClampUnit::default();
        unit.set_parameter("max", ParamValue::Float(0.0)).unwrap();

        let err = unit.set_parameter("min", ParamValue::Float(2.0)).unwrap_err();
        assert!(matches!(err, InvalidParameterError::OutOfRange { .. }));

        unit.set_parameter("min", ParamValue::Float(-2.0)).unwrap();
        let err = unit.set_parameter("max", ParamValue::Float(-3.0)).unwrap_err();
        assert!(matches!(err, InvalidParameterError::OutOfRange { .. }));

        let mut out = [0.0];
        unit.execute(&[5.0], &mut out).unwrap();
        assert_eq!(out, [0.0]);
    }
}
