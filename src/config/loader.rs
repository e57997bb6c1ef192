// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;
use crate::observability::messages::{manifest::ManifestLoaded, StructuredLog};
use crate::registry::UnitRegistry;
use crate::traits::ParamValue;

/// Declares unit instances to create and how to configure them.
///
/// A manifest is a flat list: instances do not reference each other.
///
/// # Example
/// ```yaml
/// units:
///   - id: scale
///     unit: Affine
///     parameters:
///       width: 3
///       gain: 2.0
///   - id: total
///     unit: Sum
///     parameters:
///       width: 3
///       mean: true
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct UnitManifest {
    #[serde(default)]
    pub units: Vec<UnitInstanceConfig>,
}

/// One declared unit instance.
///
/// # Fields
/// * `id` - Unique name of this instance within the manifest
/// * `unit` - Registered unit name to create
/// * `parameters` - Values passed to `set_parameter`, applied in key order
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UnitInstanceConfig {
    pub id: String,
    pub unit: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, ParamValue>,
}

/// Parse a manifest from YAML text
pub fn parse_manifest(content: &str) -> Result<UnitManifest, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Load a manifest from a YAML file
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<UnitManifest, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest = parse_manifest(&content)?;

    ManifestLoaded {
        source: &path.display().to_string(),
        instance_count: manifest.units.len(),
    }
    .log();

    Ok(manifest)
}

/// Load a manifest and check it against `registry`.
///
/// Every validation problem is reported, not only the first one.
pub fn load_and_validate_manifest<P: AsRef<Path>>(
    path: P,
    registry: &UnitRegistry,
) -> Result<UnitManifest, ConfigError> {
    let manifest = load_manifest(path)?;
    crate::config::validate_manifest(&manifest, registry).map_err(ConfigError::Validation)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_basic_manifest() {
        let yaml = r#"
units:
  - id: scale
    unit: Affine
    parameters:
      width: 2
      gain: 1.5
  - id: nothing
    unit: Noop
"#;
        let manifest = parse_manifest(yaml).unwrap();

        assert_eq!(manifest.units.len(), 2);
        assert_eq!(manifest.units[0].id, "scale");
        assert_eq!(manifest.units[0].unit, "Affine");
        assert_eq!(manifest.units[0].parameters["width"], ParamValue::Int(2));
        assert_eq!(manifest.units[0].parameters["gain"], ParamValue::Float(1.5));
        assert!(manifest.units[1].parameters.is_empty());
    }

    #[test]
    fn parse_empty_manifest() {
        let manifest = parse_manifest("units: []").unwrap();
        assert!(manifest.units.is_empty());
    }

    #[test]
    fn parse_rejects_missing_unit_field() {
        let err = parse_manifest("units:\n  - id: orphan\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "units:\n  - id: s\n    unit: Sum\n    parameters:\n      mean: true").unwrap();

        let manifest = load_manifest(file.path()).unwrap();

        assert_eq!(manifest.units[0].parameters["mean"], ParamValue::Bool(true));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yaml");

        let err = load_manifest(&missing).unwrap_err();

        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
