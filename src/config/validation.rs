// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Manifest validation against a unit registry.
//!
//! Checks, in order, for every instance entry:
//!
//! 1. **Non-empty id**
//! 2. **Unique id** across the manifest
//! 3. **Known unit**: the unit name is registered
//!
//! All problems are collected so a single run reports everything wrong with
//! the manifest. Parameter values are not checked here; units reject them
//! when the instance is built.
//!
//! # Examples
//!
//! ```rust
//! use unit_registry::config::{parse_manifest, validate_manifest};
//! use unit_registry::errors::ValidationError;
//! use unit_registry::registry::UnitRegistry;
//!
//! let registry = UnitRegistry::with_builtins().unwrap();
//! let manifest = parse_manifest("units:\n  - id: a\n    unit: Softmax\n").unwrap();
//!
//! let errors = validate_manifest(&manifest, &registry).unwrap_err();
//! assert_eq!(
//!     errors,
//!     vec![ValidationError::UnknownUnit {
//!         instance_id: "a".to_string(),
//!         unit: "Softmax".to_string(),
//!     }]
//! );
//! ```

use std::collections::HashSet;

use crate::config::UnitManifest;
use crate::errors::ValidationError;
use crate::observability::messages::{manifest::ManifestInvalid, StructuredLog};
use crate::registry::UnitRegistry;

pub fn validate_manifest(
    manifest: &UnitManifest,
    registry: &UnitRegistry,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, instance) in manifest.units.iter().enumerate() {
        if instance.id.is_empty() {
            errors.push(ValidationError::EmptyInstanceId { index });
        } else if !seen.insert(instance.id.as_str()) {
            errors.push(ValidationError::DuplicateInstanceId {
                instance_id: instance.id.clone(),
            });
        }

        if !registry.contains(&instance.unit) {
            errors.push(ValidationError::UnknownUnit {
                instance_id: instance.id.clone(),
                unit: instance.unit.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        ManifestInvalid {
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}
