// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Problems found while validating a unit manifest against a registry
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// An instance entry has an empty id
    EmptyInstanceId {
        /// Position of the entry in the manifest
        index: usize,
    },
    /// Two instance entries share an id
    DuplicateInstanceId {
        /// The duplicated id
        instance_id: String,
    },
    /// An instance refers to a unit name the registry does not know
    UnknownUnit {
        /// The instance that refers to the unit
        instance_id: String,
        /// The unit name that couldn't be resolved
        unit: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyInstanceId { index } => {
                write!(f, "Unit instance #{} has an empty id", index)
            }
            ValidationError::DuplicateInstanceId { instance_id } => {
                write!(f, "Duplicate unit instance id: '{}'", instance_id)
            }
            ValidationError::UnknownUnit { instance_id, unit } => {
                write!(
                    f,
                    "Unit instance '{}' uses unit '{}' which is not registered",
                    instance_id, unit
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors from loading a unit manifest
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read manifest '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Manifest validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
