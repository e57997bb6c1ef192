// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod registry;
mod unit;

pub use config::{ConfigError, ValidationError};
pub use registry::{DuplicateRegistrationError, UnknownUnitError};
pub use unit::{BufferSizeMismatchError, InvalidParameterError};

use thiserror::Error;

/// Any failure the crate can report, for callers that aggregate several steps.
///
/// Each variant wraps the specific error type unchanged so callers can still
/// match on the kind that occurred.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    DuplicateRegistration(#[from] DuplicateRegistrationError),

    #[error(transparent)]
    UnknownUnit(#[from] UnknownUnitError),

    #[error("Unit instance '{instance_id}': {source}")]
    InvalidParameter {
        instance_id: String,
        #[source]
        source: InvalidParameterError,
    },

    #[error(transparent)]
    BufferSizeMismatch(#[from] BufferSizeMismatchError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
