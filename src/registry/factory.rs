// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use crate::observability::messages::{registry::UnitCreated, StructuredLog};
use crate::registry::Registration;
use crate::traits::Unit;

/// Zero-argument constructor producing an owned unit.
pub type UnitConstructor = dyn Fn() -> Box<dyn Unit> + Send + Sync;

/// A registry entry: the name a unit type is known by and its constructor.
///
/// Cloning is cheap; clones share the constructor. Every call to
/// [`create`](UnitFactory::create) builds a new, independent instance.
///
/// # Examples
/// ```
/// use unit_registry::backends::local::NoopUnit;
/// use unit_registry::registry::UnitFactory;
/// use unit_registry::traits::Unit;
///
/// let factory = UnitFactory::new("Noop", || Box::new(NoopUnit::default()));
/// let unit = factory.create();
/// assert_eq!(unit.name(), "Noop");
/// ```
#[derive(Clone)]
pub struct UnitFactory {
    name: Arc<str>,
    ctor: Arc<UnitConstructor>,
}

impl UnitFactory {
    pub fn new<F>(name: impl Into<String>, ctor: F) -> Self
    where
        F: Fn() -> Box<dyn Unit> + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            ctor: Arc::new(ctor),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Construct a fresh, default-initialized instance.
    pub fn create(&self) -> Box<dyn Unit> {
        let unit = (self.ctor)();
        UnitCreated {
            unit: unit.name(),
            input_count: unit.input_count(),
            output_count: unit.output_count(),
        }
        .log();
        unit
    }
}

impl From<Registration> for UnitFactory {
    fn from(registration: Registration) -> Self {
        let ctor = registration.constructor();
        Self::new(registration.name(), ctor)
    }
}

impl fmt::Debug for UnitFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitFactory")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
