// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Unit registry: create units by name.
//!
//! * [`UnitRegistry`] maps names to [`UnitFactory`] entries.
//! * [`Registration`], [`RegisteredUnit`] and the `register_unit!` /
//!   `registrations!` macros bind unit types to names at compile time.
//! * [`global`] and [`initialize`] provide the process-wide instance.

mod factory;
mod global;
mod registration;
mod unit_registry;


pub use factory::{UnitConstructor, UnitFactory};
pub use global::{global, initialize};
pub use registration::{RegisteredUnit, Registration};
pub use unit_registry::UnitRegistry;
