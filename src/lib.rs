// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;      // concrete units
pub mod config;        // unit manifests
pub mod errors;        // error handling
pub mod observability;
pub mod registry;      // name -> factory registry
pub mod traits;        // unit contract
