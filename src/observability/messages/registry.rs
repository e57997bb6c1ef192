// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for unit registry events.
//!
//! This module contains message types for logging events related to:
//! * Registration of unit factories (single and batch)
//! * Lookup and creation of unit instances
//! * Process-wide registry initialization

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A unit factory was added to a registry.
///
/// # Log Level
/// `debug!` - Routine startup detail
///
/// # Example
/// ```
/// use unit_registry::observability::messages::registry::UnitRegistered;
///
/// let msg = UnitRegistered {
///     unit: "Affine",
///     registered_count: 1,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct UnitRegistered<'a> {
    pub unit: &'a str,
    pub registered_count: usize,
}

impl Display for UnitRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered unit '{}' ({} units registered)",
            self.unit, self.registered_count
        )
    }
}

impl StructuredLog for UnitRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            unit = self.unit,
            registered_count = self.registered_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "registration",
            span_name = name,
            unit = self.unit,
        )
    }
}

/// A registration was rejected because the name is taken.
///
/// # Log Level
/// `error!` - Fatal at load time
///
/// # Example
/// ```
/// use unit_registry::observability::messages::registry::RegistrationRejected;
///
/// let msg = RegistrationRejected { unit: "Affine" };
///
/// tracing::error!("{}", msg);
/// ```
pub struct RegistrationRejected<'a> {
    pub unit: &'a str,
}

impl Display for RegistrationRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registration of unit '{}' rejected: name already registered",
            self.unit
        )
    }
}

impl StructuredLog for RegistrationRejected<'_> {
    fn log(&self) {
        tracing::error!(unit = self.unit, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "registration",
            span_name = name,
            unit = self.unit,
        )
    }
}

/// A lookup or create call named an unregistered unit.
///
/// # Log Level
/// `warn!` - Recoverable, surfaced to the caller
///
/// # Example
/// ```
/// use unit_registry::observability::messages::registry::UnitLookupFailed;
///
/// let msg = UnitLookupFailed {
///     unit: "Nonexistent",
///     registered_count: 4,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct UnitLookupFailed<'a> {
    pub unit: &'a str,
    pub registered_count: usize,
}

impl Display for UnitLookupFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No unit named '{}' among {} registered units",
            self.unit, self.registered_count
        )
    }
}

impl StructuredLog for UnitLookupFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            unit = self.unit,
            registered_count = self.registered_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "lookup",
            span_name = name,
            unit = self.unit,
        )
    }
}

/// A fresh unit instance was constructed by its factory.
///
/// # Log Level
/// `debug!` - Routine detail
///
/// # Example
/// ```
/// use unit_registry::observability::messages::registry::UnitCreated;
///
/// let msg = UnitCreated {
///     unit: "Sum",
///     input_count: 4,
///     output_count: 1,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct UnitCreated<'a> {
    pub unit: &'a str,
    pub input_count: usize,
    pub output_count: usize,
}

impl Display for UnitCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Created unit '{}': inputs={}, outputs={}",
            self.unit, self.input_count, self.output_count
        )
    }
}

impl StructuredLog for UnitCreated<'_> {
    fn log(&self) {
        tracing::debug!(
            unit = self.unit,
            input_count = self.input_count,
            output_count = self.output_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "creation",
            span_name = name,
            unit = self.unit,
        )
    }
}

/// The process-wide registry finished its initialization pass.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use unit_registry::observability::messages::registry::RegistryInitialized;
/// use std::time::Duration;
///
/// let msg = RegistryInitialized {
///     builtin_count: 4,
///     extra_count: 1,
///     duration: Duration::from_micros(40),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RegistryInitialized {
    pub builtin_count: usize,
    pub extra_count: usize,
    pub duration: std::time::Duration,
}

impl Display for RegistryInitialized {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unit registry initialized: {} builtin and {} additional units in {:?}",
            self.builtin_count, self.extra_count, self.duration
        )
    }
}

impl StructuredLog for RegistryInitialized {
    fn log(&self) {
        tracing::info!(
            builtin_count = self.builtin_count,
            extra_count = self.extra_count,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "initialization",
            span_name = name,
            builtin_count = self.builtin_count,
            extra_count = self.extra_count,
        )
    }
}
