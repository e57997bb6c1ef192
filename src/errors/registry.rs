// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by the unit registry.

use thiserror::Error;

/// A unit name was registered a second time.
///
/// Duplicates are always rejected; the entry that was registered first stays
/// in place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unit '{name}' is already registered")]
pub struct DuplicateRegistrationError {
    pub name: String,
}

/// No factory is registered under the requested name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown unit '{name}': no factory is registered under this name")]
pub struct UnknownUnitError {
    pub name: String,
}
