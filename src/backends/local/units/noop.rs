// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::InvalidParameterError;
use crate::register_unit;
use crate::traits::{ParamValue, Unit};

use super::{report, unknown_key};

/// Noop unit - no inputs, no outputs, no parameters
#[derive(Debug, Default, Clone)]
pub struct NoopUnit;

register_unit!(NoopUnit, "Noop");

impl Unit for NoopUnit {
    fn name(&self) -> &str {
        "Noop"
    }

    fn set_parameter(&mut self, key: &str, _value: ParamValue) -> Result<(), InvalidParameterError> {
        report(self.name(), key, Err(unknown_key(self.name(), key)))
    }

    fn input_count(&self) -> usize {
        0
    }

    fn output_count(&self) -> usize {
        0
    }

    fn compute(&self, _input: &[f32], _output: &mut [f32]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_execute() {
        let unit = NoopUnit;
        let mut output: [f32; 0] = [];

        assert!(unit.execute(&[], &mut output).is_ok());
    }

    #[test]
    fn test_nonempty_buffers_are_rejected_untouched() {
        let unit = NoopUnit;
        let mut output = [4.0, 4.0];

        let err = unit.execute(&[1.0], &mut output).unwrap_err();

        assert_eq!(err.expected_input, 0);
        assert_eq!(err.expected_output, 0);
        assert_eq!(output, [4.0, 4.0]);
    }

    #[test]
    fn test_every_key_is_unknown() {
        let mut unit = NoopUnit;
        let err = unit.set_parameter("width", ParamValue::Int(1)).unwrap_err();
        assert!(matches!(err, InvalidParameterError::UnknownKey { .. }));
    }
}
