// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit the same event with typed `tracing` fields.
//!
//! # Organization
//!
//! * `registry` - registration, lookup and creation events
//! * `unit` - parameter assignment and execution events
//! * `manifest` - manifest loading and instance building events
//!
//! # Usage Pattern
//!
//! ```rust
//! use unit_registry::observability::messages::registry::UnitRegistered;
//! use unit_registry::observability::messages::StructuredLog;
//!
//! let msg = UnitRegistered {
//!     unit: "Affine",
//!     registered_count: 3,
//! };
//!
//! msg.log();
//! ```

pub mod manifest;
pub mod registry;
pub mod unit;

use tracing::Span;

/// A message that knows how to emit itself as a structured `tracing` event.
pub trait StructuredLog {
    /// Emit the event at the message's level, with its fields attached.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
