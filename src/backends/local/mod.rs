// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod units;

pub use units::*;

use crate::registrations;
use crate::registry::Registration;

/// Units compiled into the crate, installed by [`crate::registry::initialize`].
///
/// To ship another unit, declare its name with `register_unit!` and add the
/// type here.
pub const BUILTIN_UNITS: &[Registration] = registrations![AffineUnit, ClampUnit, NoopUnit, SumUnit];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_are_unique() {
        let names: HashSet<_> = BUILTIN_UNITS.iter().map(Registration::name).collect();
        assert_eq!(names.len(), BUILTIN_UNITS.len());
    }

    #[test]
    fn test_builtin_names_match_instances() {
        for registration in BUILTIN_UNITS {
            let unit = (registration.constructor())();
            assert_eq!(unit.name(), registration.name());
        }
    }
}
