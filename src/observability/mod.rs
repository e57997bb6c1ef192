// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured logging for the unit registry.
//!
//! Diagnostic events are defined once as message structs with a `Display`
//! implementation, so call sites never build log strings by hand:
//!
//! * `messages::registry` - registration, lookup, creation and initialization
//! * `messages::unit` - parameter assignment and buffer checks
//! * `messages::manifest` - manifest loading and instance configuration
//!
//! # Usage
//!
//! ```rust
//! use unit_registry::observability::messages::registry::UnitLookupFailed;
//!
//! let msg = UnitLookupFailed {
//!     unit: "Nonexistent",
//!     registered_count: 4,
//! };
//!
//! tracing::warn!("{}", msg);
//! ```

pub mod messages;
