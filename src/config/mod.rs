// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod runtime;
mod validation;


pub use loader::{
    load_and_validate_manifest, load_manifest, parse_manifest, UnitInstanceConfig, UnitManifest,
};
pub use runtime::{UnitInstance, UnitSet, UnitSetBuilder};
pub use validation::validate_manifest;
