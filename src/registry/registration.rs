// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Binding between a concrete unit type and the registry.
//!
//! A unit type becomes creatable by name in two steps: it declares its stable
//! name with [`register_unit!`](crate::register_unit), and a
//! [`Registration`] for it is listed in a compiled-in slice that the entry
//! point hands to [`initialize`](crate::registry::initialize). No shared
//! match statement or enum of unit types is involved.
//!
//! ```
//! use unit_registry::errors::InvalidParameterError;
//! use unit_registry::registry::{Registration, UnitRegistry};
//! use unit_registry::traits::{ParamValue, Unit};
//! use unit_registry::{register_unit, registrations};
//!
//! #[derive(Default)]
//! struct Negate;
//!
//! impl Unit for Negate {
//!     fn name(&self) -> &str {
//!         "Negate"
//!     }
//!
//!     fn set_parameter(&mut self, key: &str, _value: ParamValue) -> Result<(), InvalidParameterError> {
//!         Err(InvalidParameterError::UnknownKey { unit: "Negate".into(), key: key.into() })
//!     }
//!
//!     fn input_count(&self) -> usize { 1 }
//!     fn output_count(&self) -> usize { 1 }
//!
//!     fn compute(&self, input: &[f32], output: &mut [f32]) {
//!         output[0] = -input[0];
//!     }
//! }
//!
//! register_unit!(Negate, "Negate");
//!
//! const MY_UNITS: &[Registration] = registrations![Negate];
//!
//! let registry = UnitRegistry::new();
//! registry.install(MY_UNITS).unwrap();
//! assert_eq!(registry.create("Negate").unwrap().name(), "Negate");
//! ```

use std::fmt;

use crate::traits::Unit;

/// A unit type that can be default-constructed under a stable name.
///
/// Implemented through [`register_unit!`](crate::register_unit).
pub trait RegisteredUnit: Unit + Default + 'static {
    const NAME: &'static str;
}

/// Compile-time registration record for one unit type.
#[derive(Clone, Copy)]
pub struct Registration {
    name: &'static str,
    ctor: fn() -> Box<dyn Unit>,
}

impl Registration {
    pub const fn new(name: &'static str, ctor: fn() -> Box<dyn Unit>) -> Self {
        Self { name, ctor }
    }

    /// Registration for `U`, constructing `U::default()` under `U::NAME`.
    pub const fn of<U: RegisteredUnit>() -> Self {
        Self::new(U::NAME, construct::<U>)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn constructor(&self) -> fn() -> Box<dyn Unit> {
        self.ctor
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration").field("name", &self.name).finish()
    }
}

fn construct<U: RegisteredUnit>() -> Box<dyn Unit> {
    Box::new(U::default())
}

/// Declare the stable name a unit type is registered under.
///
/// The name must be the same string the type's [`Unit::name`] returns.
#[macro_export]
macro_rules! register_unit {
    ($unit:ty, $name:expr) => {
        impl $crate::registry::RegisteredUnit for $unit {
            const NAME: &'static str = $name;
        }
    };
}

/// Build a `&'static [Registration]` from a list of registered unit types.
///
/// Expands to a block around a `const` item, so the slice is `'static` in
/// expression position as well as in `const` and `static` initializers.
#[macro_export]
macro_rules! registrations {
    ($($unit:ty),* $(,)?) => {{
        const REGISTRATIONS: &[$crate::registry::Registration] =
            &[$($crate::registry::Registration::of::<$unit>()),*];
        REGISTRATIONS
    }};
}
