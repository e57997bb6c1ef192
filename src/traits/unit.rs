// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::{BufferSizeMismatchError, InvalidParameterError};
use crate::observability::messages::unit::{BufferSizeRejected, UnitExecuted};
use crate::observability::messages::StructuredLog;
use crate::traits::ParamValue;

/// Capability contract for a pluggable computation unit.
///
/// A unit owns its configuration, exposes a fixed input/output width and turns
/// `input_count()` values into `output_count()` values on every call to
/// [`execute`](Unit::execute). Instances are normally obtained from a
/// [`UnitRegistry`](crate::registry::UnitRegistry) rather than constructed directly.
///
/// Implementors provide [`compute`](Unit::compute); the provided `execute`
/// checks buffer lengths first, so `compute` only ever sees exactly-sized slices.
pub trait Unit: Send {
    /// Stable identifier; equals the name the unit type was registered under.
    fn name(&self) -> &str;

    /// Assign or update one named configuration value.
    ///
    /// Unknown keys, wrong value kinds and out-of-range values are rejected.
    /// A rejected call leaves the unit unchanged.
    fn set_parameter(&mut self, key: &str, value: ParamValue) -> Result<(), InvalidParameterError>;

    fn input_count(&self) -> usize;

    fn output_count(&self) -> usize;

    /// Computation step over buffers already known to have the declared lengths.
    ///
    /// Only reached through [`execute`](Unit::execute); calling it directly with
    /// wrongly sized slices may panic.
    fn compute(&self, input: &[f32], output: &mut [f32]);

    /// Check buffer lengths against `input_count()` and `output_count()`.
    ///
    /// Takes lengths rather than slices so callers can reject an input before
    /// allocating the output.
    fn check_buffers(&self, input_len: usize, output_len: usize) -> Result<(), BufferSizeMismatchError> {
        let expected_input = self.input_count();
        let expected_output = self.output_count();

        if input_len != expected_input || output_len != expected_output {
            let error = BufferSizeMismatchError {
                unit: self.name().to_string(),
                expected_input,
                actual_input: input_len,
                expected_output,
                actual_output: output_len,
            };
            BufferSizeRejected { error: &error }.log();
            return Err(error);
        }
        Ok(())
    }

    /// Run one computation step.
    ///
    /// `input` must hold exactly `input_count()` values and `output` exactly
    /// `output_count()` values. On a length mismatch nothing is written.
    fn execute(&self, input: &[f32], output: &mut [f32]) -> Result<(), BufferSizeMismatchError> {
        self.check_buffers(input.len(), output.len())?;

        let msg = UnitExecuted {
            unit: self.name(),
            input_len: input.len(),
            output_len: output.len(),
        };
        let span = msg.span("unit_execution");
        let _guard = span.enter();

        self.compute(input, output);
        msg.log();
        Ok(())
    }
}

impl std::fmt::Debug for dyn Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unit")
            .field("name", &self.name())
            .field("input_count", &self.input_count())
            .field("output_count", &self.output_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Copies input to output.
    struct Passthrough {
        width: usize,
    }

    impl Unit for Passthrough {
        fn name(&self) -> &str {
            "Passthrough"
        }

        fn set_parameter(&mut self, key: &str, _value: ParamValue) -> Result<(), InvalidParameterError> {
            Err(InvalidParameterError::UnknownKey {
                unit: self.name().to_string(),
                key: key.to_string(),
            })
        }

        fn input_count(&self) -> usize {
            self.width
        }

        fn output_count(&self) -> usize {
            self.width
        }

        fn compute(&self, input: &[f32], output: &mut [f32]) {
            output.copy_from_slice(input);
        }
    }

    #[test]
    fn test_execute_with_matching_buffers() {
        let unit = Passthrough { width: 3 };
        let mut output = [0.0; 3];

        unit.execute(&[1.0, 2.0, 3.0], &mut output).unwrap();

        assert_eq!(output, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_execute_rejects_mismatched_buffers_without_writing() {
        struct TestCase {
            name: &'static str,
            input: Vec<f32>,
            output_len: usize,
        }

        let test_cases = vec![
            TestCase { name: "short input", input: vec![1.0, 2.0], output_len: 3 },
            TestCase { name: "long input", input: vec![1.0; 4], output_len: 3 },
            TestCase { name: "short output", input: vec![1.0; 3], output_len: 2 },
            TestCase { name: "long output", input: vec![1.0; 3], output_len: 5 },
            TestCase { name: "both empty", input: vec![], output_len: 0 },
        ];

        let unit = Passthrough { width: 3 };
        for case in test_cases {
            let mut output = vec![-7.0; case.output_len];
            let err = unit
                .execute(&case.input, &mut output)
                .expect_err(case.name);

            assert_eq!(err.expected_input, 3, "{}", case.name);
            assert_eq!(err.actual_input, case.input.len(), "{}", case.name);
            assert_eq!(err.expected_output, 3, "{}", case.name);
            assert_eq!(err.actual_output, case.output_len, "{}", case.name);
            assert!(output.iter().all(|v| *v == -7.0), "{}: output was touched", case.name);
        }
    }

    #[test]
    fn test_zero_width_unit_accepts_empty_buffers() {
        let unit = Passthrough { width: 0 };
        let mut output: [f32; 0] = [];

        assert!(unit.execute(&[], &mut output).is_ok());
    }

    #[test]
    fn test_check_buffers_reports_lengths_without_slices() {
        let unit = Passthrough { width: 2 };

        assert!(unit.check_buffers(2, 2).is_ok());

        let err = unit.check_buffers(usize::MAX, 2).unwrap_err();
        assert_eq!(err.unit, "Passthrough");
        assert_eq!(err.expected_input, 2);
        assert_eq!(err.actual_input, usize::MAX);
        assert_eq!(err.actual_output, 2);
    }

    #[test]
    fn test_debug_for_trait_object() {
        let unit: Box<dyn Unit> = Box::new(Passthrough { width: 2 });
        let rendered = format!("{:?}", unit);

        assert!(rendered.contains("Passthrough"));
        assert!(rendered.contains("input_count: 2"));
    }
}
