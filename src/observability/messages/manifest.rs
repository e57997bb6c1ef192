// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for manifest loading and unit set construction.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A manifest file was read and parsed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use unit_registry::observability::messages::manifest::ManifestLoaded;
///
/// let msg = ManifestLoaded {
///     source: "units.yaml",
///     instance_count: 3,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ManifestLoaded<'a> {
    pub source: &'a str,
    pub instance_count: usize,
}

impl Display for ManifestLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded unit manifest '{}': {} instances",
            self.source, self.instance_count
        )
    }
}

impl StructuredLog for ManifestLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            instance_count = self.instance_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("manifest", span_name = name, source = self.source)
    }
}

/// A manifest failed validation against the registry.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use unit_registry::observability::messages::manifest::ManifestInvalid;
///
/// let msg = ManifestInvalid { error_count: 2 };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ManifestInvalid {
    pub error_count: usize,
}

impl Display for ManifestInvalid {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Unit manifest failed validation with {} errors", self.error_count)
    }
}

impl StructuredLog for ManifestInvalid {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "manifest",
            span_name = name,
            error_count = self.error_count,
        )
    }
}

/// A unit instance declared in a manifest was created and configured.
///
/// # Log Level
/// `info!` - Important operational event
pub struct InstanceConfigured<'a> {
    pub instance_id: &'a str,
    pub unit: &'a str,
    pub parameter_count: usize,
}

impl Display for InstanceConfigured<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configured instance '{}' of unit '{}' with {} parameters",
            self.instance_id, self.unit, self.parameter_count
        )
    }
}

impl StructuredLog for InstanceConfigured<'_> {
    fn log(&self) {
        tracing::info!(
            instance_id = self.instance_id,
            unit = self.unit,
            parameter_count = self.parameter_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "instance",
            span_name = name,
            instance_id = self.instance_id,
            unit = self.unit,
        )
    }
}
