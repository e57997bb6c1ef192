// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{validate_manifest, UnitManifest};
use crate::errors::{BufferSizeMismatchError, ConfigError, Error};
use crate::observability::messages::{manifest::InstanceConfigured, StructuredLog};
use crate::registry::UnitRegistry;
use crate::traits::Unit;

/// A configured unit instance together with the id it was declared under.
pub struct UnitInstance {
    id: String,
    unit: Box<dyn Unit>,
}

impl UnitInstance {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn unit(&self) -> &dyn Unit {
        self.unit.as_ref()
    }

    pub fn unit_mut(&mut self) -> &mut (dyn Unit + 'static) {
        self.unit.as_mut()
    }

    /// Execute the unit into a freshly allocated output buffer.
    ///
    /// The input length is checked before the output is allocated.
    pub fn run(&self, input: &[f32]) -> Result<Vec<f32>, BufferSizeMismatchError> {
        let output_len = self.unit.output_count();
        self.unit.check_buffers(input.len(), output_len)?;

        let mut output = vec![0.0; output_len];
        self.unit.execute(input, &mut output)?;
        Ok(output)
    }
}

impl std::fmt::Debug for UnitInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitInstance")
            .field("id", &self.id)
            .field("unit", &self.unit)
            .finish()
    }
}

/// Unit instances built from a manifest, in declaration order.
#[derive(Debug, Default)]
pub struct UnitSet {
    instances: Vec<UnitInstance>,
}

impl UnitSet {
    pub fn get(&self, id: &str) -> Option<&UnitInstance> {
        self.instances.iter().find(|instance| instance.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut UnitInstance> {
        self.instances.iter_mut().find(|instance| instance.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitInstance> {
        self.instances.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.instances.iter().map(UnitInstance::id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// Builds configured unit instances from a manifest.
///
/// # Examples
///
/// ```
/// use unit_registry::config::{parse_manifest, UnitSetBuilder};
/// use unit_registry::registry::UnitRegistry;
///
/// let registry = UnitRegistry::with_builtins().unwrap();
/// let manifest = parse_manifest(
///     "units:\n  - id: double\n    unit: Affine\n    parameters:\n      gain: 2.0\n",
/// )
/// .unwrap();
///
/// let units = UnitSetBuilder::build(&manifest, &registry).unwrap();
/// let double = units.get("double").unwrap();
/// assert_eq!(double.run(&[4.0]).unwrap(), vec![8.0]);
/// ```
pub struct UnitSetBuilder;

impl UnitSetBuilder {
    /// Validate the manifest, then create and configure every instance.
    ///
    /// Fails on the first instance whose unit rejects a parameter; the error
    /// names the instance and keeps the unit's [`InvalidParameterError`](crate::errors::InvalidParameterError).
    pub fn build(manifest: &UnitManifest, registry: &UnitRegistry) -> Result<UnitSet, Error> {
        validate_manifest(manifest, registry).map_err(ConfigError::Validation)?;

        let mut instances = Vec::with_capacity(manifest.units.len());
        for declared in &manifest.units {
            let mut unit = registry.create(&declared.unit)?;

            for (key, value) in &declared.parameters {
                unit.set_parameter(key, value.clone())
                    .map_err(|source| Error::InvalidParameter {
                        instance_id: declared.id.clone(),
                        source,
                    })?;
            }

            InstanceConfigured {
                instance_id: &declared.id,
                unit: unit.name(),
                parameter_count: declared.parameters.len(),
            }
            .log();

            instances.push(UnitInstance {
                id: declared.id.clone(),
                unit,
            });
        }

        Ok(UnitSet { instances })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_manifest;
    use crate::errors::{InvalidParameterError, ValidationError};
    use crate::traits::ParamValue;

    fn registry() -> UnitRegistry {
        UnitRegistry::with_builtins().unwrap()
    }

    #[test]
    fn test_build_configures_instances_in_order() {
        let manifest = parse_manifest(
            r#"
units:
  - id: scale
    unit: Affine
    parameters:
      width: 2
      gain: 3.0
      bias: 1.0
  - id: average
    unit: Sum
    parameters:
      width: 2
      mean: true
"#,
        )
        .unwrap();

        let units = UnitSetBuilder::build(&manifest, &registry()).unwrap();

        assert_eq!(units.len(), 2);
        assert_eq!(units.ids().collect::<Vec<_>>(), vec!["scale", "average"]);
        assert_eq!(units.get("scale").unwrap().run(&[1.0, 2.0]).unwrap(), vec![4.0, 7.0]);
        assert_eq!(units.get("average").unwrap().run(&[1.0, 2.0]).unwrap(), vec![1.5]);
    }

    #[test]
    fn test_same_unit_twice_yields_independent_instances() {
        let manifest = parse_manifest(
            "units:\n  - id: a\n    unit: Affine\n    parameters:\n      gain: 5.0\n  - id: b\n    unit: Affine\n",
        )
        .unwrap();

        let units = UnitSetBuilder::build(&manifest, &registry()).unwrap();

        assert_eq!(units.get("a").unwrap().run(&[1.0]).unwrap(), vec![5.0]);
        assert_eq!(units.get("b").unwrap().run(&[1.0]).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_rejected_parameter_names_instance() {
        let manifest = parse_manifest(
            "units:\n  - id: broken\n    unit: Clamp\n    parameters:\n      ceiling: 1.0\n",
        )
        .unwrap();

        let err = UnitSetBuilder::build(&manifest, &registry()).unwrap_err();

        match err {
            Error::InvalidParameter { instance_id, source } => {
                assert_eq!(instance_id, "broken");
                assert_eq!(
                    source,
                    InvalidParameterError::UnknownKey {
                        unit: "Clamp".to_string(),
                        key: "ceiling".to_string(),
                    }
                );
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_manifest_is_rejected_before_creation() {
        let manifest = parse_manifest("units:\n  - id: x\n    unit: Nonexistent\n").unwrap();

        let err = UnitSetBuilder::build(&manifest, &registry()).unwrap_err();

        match err {
            Error::Config(ConfigError::Validation(errors)) => {
                assert_eq!(
                    errors,
                    vec![ValidationError::UnknownUnit {
                        instance_id: "x".to_string(),
                        unit: "Nonexistent".to_string(),
                    }]
                );
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_instance_can_be_reconfigured() {
        let manifest = parse_manifest("units:\n  - id: c\n    unit: Clamp\n").unwrap();
        let mut units = UnitSetBuilder::build(&manifest, &registry()).unwrap();

        let instance = units.get_mut("c").unwrap();
        instance
            .unit_mut()
            .set_parameter("max", ParamValue::Float(0.5))
            .unwrap();

        assert_eq!(instance.run(&[2.0]).unwrap(), vec![0.5]);
        assert_eq!(instance.unit().name(), "Clamp");
    }

    #[test]
    fn test_oversized_width_is_rejected_at_build() {
        let manifest = parse_manifest(
            "units:\n  - id: big\n    unit: Affine\n    parameters:\n      width: 4611686018427387904\n",
        )
        .unwrap();

        let err = UnitSetBuilder::build(&manifest, &registry()).unwrap_err();

        match err {
            Error::InvalidParameter { instance_id, source } => {
                assert_eq!(instance_id, "big");
                assert!(matches!(source, InvalidParameterError::OutOfRange { .. }));
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    /// Declares an output far larger than any real buffer.
    struct HugeOutputUnit;

    impl Unit for HugeOutputUnit {
        fn name(&self) -> &str {
            "HugeOutput"
        }

        fn set_parameter(&mut self, key: &str, _value: ParamValue) -> Result<(), InvalidParameterError> {
            Err(InvalidParameterError::UnknownKey {
                unit: self.name().to_string(),
                key: key.to_string(),
            })
        }

        fn input_count(&self) -> usize {
            2
        }

        fn output_count(&self) -> usize {
            usize::MAX
        }

        fn compute(&self, _input: &[f32], _output: &mut [f32]) {}
    }

    #[test]
    fn test_run_rejects_input_before_allocating_output() {
        let instance = UnitInstance {
            id: "huge".to_string(),
            unit: Box::new(HugeOutputUnit),
        };

        let err = instance.run(&[1.0]).unwrap_err();

        assert_eq!(err.expected_input, 2);
        assert_eq!(err.actual_input, 1);
        assert_eq!(err.expected_output, usize::MAX);
    }

    #[test]
    fn test_run_with_wrong_input_length() {
        let manifest = parse_manifest("units:\n  - id: s\n    unit: Sum\n").unwrap();
        let units = UnitSetBuilder::build(&manifest, &registry()).unwrap();

        let err = units.get("s").unwrap().run(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err.expected_input, 1);
        assert_eq!(err.actual_input, 2);
    }
}
