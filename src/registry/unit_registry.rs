// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::backends::local::BUILTIN_UNITS;
use crate::errors::{DuplicateRegistrationError, UnknownUnitError};
use crate::observability::messages::registry::{
    RegistrationRejected, UnitLookupFailed, UnitRegistered,
};
use crate::observability::messages::StructuredLog;
use crate::registry::{RegisteredUnit, Registration, UnitFactory};
use crate::traits::Unit;

/// Name-to-factory mapping used to create units without knowing their types.
///
/// Names are unique: registering a taken name is rejected with
/// [`DuplicateRegistrationError`] and the existing entry is kept. The map sits
/// behind a read/write lock, so registration may also happen after other
/// threads have started looking units up; an entry is either fully visible or
/// not visible at all.
///
/// # Examples
/// ```
/// use unit_registry::registry::UnitRegistry;
///
/// let registry = UnitRegistry::with_builtins().unwrap();
///
/// let sum = registry.create("Sum").unwrap();
/// assert_eq!(sum.name(), "Sum");
///
/// let missing = registry.create("Nonexistent").unwrap_err();
/// assert_eq!(missing.name, "Nonexistent");
/// ```
#[derive(Default)]
pub struct UnitRegistry {
    entries: RwLock<HashMap<String, UnitFactory>>,
}

impl UnitRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every unit the crate ships with
    pub fn with_builtins() -> Result<Self, DuplicateRegistrationError> {
        let registry = Self::new();
        registry.install(BUILTIN_UNITS)?;
        Ok(registry)
    }

    /// Register `ctor` under `name`.
    pub fn register<F>(&self, name: impl Into<String>, ctor: F) -> Result<(), DuplicateRegistrationError>
    where
        F: Fn() -> Box<dyn Unit> + Send + Sync + 'static,
    {
        self.register_factory(UnitFactory::new(name, ctor))
    }

    /// Register a unit type under its declared name.
    pub fn register_unit<U: RegisteredUnit>(&self) -> Result<(), DuplicateRegistrationError> {
        self.register_factory(Registration::of::<U>().into())
    }

    pub fn register_factory(&self, factory: UnitFactory) -> Result<(), DuplicateRegistrationError> {
        let mut entries = self.write();

        match entries.entry(factory.name().to_string()) {
            Entry::Occupied(occupied) => {
                RegistrationRejected { unit: occupied.key() }.log();
                return Err(DuplicateRegistrationError {
                    name: occupied.key().clone(),
                });
            }
            Entry::Vacant(vacant) => {
                vacant.insert(factory.clone());
            }
        }

        UnitRegistered {
            unit: factory.name(),
            registered_count: entries.len(),
        }
        .log();
        Ok(())
    }

    /// Register a batch of units atomically.
    ///
    /// The whole batch is checked against the existing entries and against
    /// itself before anything is inserted. On a conflict nothing from the
    /// batch is registered.
    pub fn install(&self, registrations: &[Registration]) -> Result<(), DuplicateRegistrationError> {
        let mut entries = self.write();

        let mut seen = HashSet::with_capacity(registrations.len());
        for registration in registrations {
            let name = registration.name();
            if entries.contains_key(name) || !seen.insert(name) {
                RegistrationRejected { unit: name }.log();
                return Err(DuplicateRegistrationError {
                    name: name.to_string(),
                });
            }
        }

        for registration in registrations {
            entries.insert(registration.name().to_string(), UnitFactory::from(*registration));
            UnitRegistered {
                unit: registration.name(),
                registered_count: entries.len(),
            }
            .log();
        }

        Ok(())
    }

    /// Fetch the factory registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<UnitFactory, UnknownUnitError> {
        let entries = self.read();

        entries.get(name).cloned().ok_or_else(|| {
            UnitLookupFailed {
                unit: name,
                registered_count: entries.len(),
            }
            .log();
            UnknownUnitError {
                name: name.to_string(),
            }
        })
    }

    /// Construct a new instance of the unit registered under `name`.
    ///
    /// The factory runs after the registry lock is released.
    pub fn create(&self, name: &str) -> Result<Box<dyn Unit>, UnknownUnitError> {
        let factory = self.lookup(name)?;
        Ok(factory.create())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Registered names in ascending order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Inserts only happen after validation, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, UnitFactory>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, UnitFactory>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for UnitRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitRegistry")
            .field("unit_names", &self.names())
            .finish()
    }
}
