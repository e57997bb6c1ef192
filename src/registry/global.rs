// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The process-wide registry and its one-time initialization pass.

use std::sync::OnceLock;
use std::time::Instant;

use crate::backends::local::BUILTIN_UNITS;
use crate::errors::DuplicateRegistrationError;
use crate::observability::messages::{registry::RegistryInitialized, StructuredLog};
use crate::registry::{Registration, UnitRegistry};

static GLOBAL_REGISTRY: OnceLock<UnitRegistry> = OnceLock::new();
static INITIALIZATION: OnceLock<Result<(), DuplicateRegistrationError>> = OnceLock::new();

/// Access the process-wide registry.
///
/// The registry starts empty; [`initialize`] fills it with the builtin units.
/// Units may still be registered on it directly at any later point.
pub fn global() -> &'static UnitRegistry {
    GLOBAL_REGISTRY.get_or_init(UnitRegistry::new)
}

/// Install the builtin units plus `extra` into the process-wide registry.
///
/// Meant to be called once by the process entry point before any unit is
/// created by name. The batch is installed atomically. Later calls do not
/// install anything and return the outcome of the first call, so `extra`
/// passed to them is ignored.
///
/// # Examples
/// ```
/// use unit_registry::registry;
///
/// let units = registry::initialize(&[]).unwrap();
/// assert!(units.contains("Affine"));
/// ```
pub fn initialize(extra: &[Registration]) -> Result<&'static UnitRegistry, DuplicateRegistrationError> {
    let outcome = INITIALIZATION.get_or_init(|| {
        let started = Instant::now();
        let batch: Vec<Registration> = BUILTIN_UNITS.iter().chain(extra).copied().collect();

        global().install(&batch)?;

        RegistryInitialized {
            builtin_count: BUILTIN_UNITS.len(),
            extra_count: extra.len(),
            duration: started.elapsed(),
        }
        .log();
        Ok(())
    });

    outcome.clone().map(|()| global())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ParamValue;

    #[test]
    fn test_initialize_installs_builtins() {
        let registry = initialize(&[]).unwrap();

        for registration in BUILTIN_UNITS {
            let unit = registry.create(registration.name()).unwrap();
            assert_eq!(unit.name(), registration.name());
        }
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let first = initialize(&[]).unwrap();
        let second = initialize(&[]).unwrap();

        assert!(std::ptr::eq(first, second));
        for registration in BUILTIN_UNITS {
            assert!(second.contains(registration.name()));
        }
    }

    #[derive(Default)]
    struct LateUnit;

    impl crate::traits::Unit for LateUnit {
        fn name(&self) -> &str {
            "GlobalLate"
        }

        fn set_parameter(
            &mut self,
            key: &str,
            _value: ParamValue,
        ) -> Result<(), crate::errors::InvalidParameterError> {
            Err(crate::errors::InvalidParameterError::UnknownKey {
                unit: "GlobalLate".to_string(),
                key: key.to_string(),
            })
        }

        fn input_count(&self) -> usize {
            1
        }

        fn output_count(&self) -> usize {
            1
        }

        fn compute(&self, input: &[f32], output: &mut [f32]) {
            output[0] = input[0] * 3.0;
        }
    }

    crate::register_unit!(LateUnit, "GlobalLate");

    #[test]
    fn test_global_accepts_late_registration() {
        initialize(&[]).unwrap();
        global().register_unit::<LateUnit>().unwrap();

        let unit = global().create("GlobalLate").unwrap();
        let mut out = [0.0];
        unit.execute(&[2.0], &mut out).unwrap();
        assert_eq!(unit.name(), "GlobalLate");
        assert_eq!(out, [6.0]);
    }
}
