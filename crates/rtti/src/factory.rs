// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 rtti contributors

//! Name-keyed construction of type-erased objects.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::resolve::Reflect;

/// Zero-argument constructor returning an owned, type-erased object.
type Constructor = Arc<dyn Fn() -> Box<dyn Any> + Send + Sync>;

/// Errors produced by the typed factory helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// No constructor is registered under the given name.
    NotRegistered(String),
    /// A constructor exists but produces a different concrete type.
    WrongType(String),
}

impl fmt::Display for FactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactoryError::NotRegistered(name) => {
                write!(f, "no constructor registered for: {}", name)
            }
            FactoryError::WrongType(name) => {
                write!(f, "constructor for {} produces a different type", name)
            }
        }
    }
}

impl std::error::Error for FactoryError {}

/// Registry of named constructors.
///
/// [`ObjectFactory::global`] is the process-wide instance that startup
/// registration code targets; independent instances can be built with
/// [`ObjectFactory::new`] and passed explicitly where isolation is
/// wanted (tests, plugin sandboxes).
///
/// Created objects are owned by their callers from the moment of
/// construction; the factory keeps no record of them.
pub struct ObjectFactory {
    constructors: RwLock<HashMap<String, Constructor>>,
}

impl ObjectFactory {
    /// Create an empty factory.
    pub fn new() -> Self {
        Self {
            constructors: RwLock::new(HashMap::new()),
        }
    }

    /// Process-wide factory, created lazily on first use.
    pub fn global() -> &'static ObjectFactory {
        static GLOBAL: OnceLock<ObjectFactory> = OnceLock::new();
        GLOBAL.get_or_init(ObjectFactory::new)
    }

    /// Register a constructor under `name`.
    ///
    /// Re-registering a name replaces the previous constructor; the last
    /// registration wins.
    pub fn register<F>(&self, name: impl Into<String>, ctor: F)
    where
        F: Fn() -> Box<dyn Any> + Send + Sync + 'static,
    {
        let name = name.into();
        log::trace!("[ObjectFactory::register] {}", name);
        self.constructors.write().insert(name, Arc::new(ctor));
    }

    /// Register `T` under its descriptor name with a `T::default()`
    /// constructor.
    pub fn register_default<T: Reflect + Default + Any>(&self) {
        self.register(T::descriptor().full_name(), || {
            Box::new(T::default()) as Box<dyn Any>
        });
    }

    /// Construct the object registered under `name`.
    ///
    /// Returns `None` when nothing is registered under `name`; the
    /// caller must check before downcasting.
    pub fn create(&self, name: &str) -> Option<Box<dyn Any>> {
        let ctor = self.constructors.read().get(name).cloned();
        match ctor {
            Some(ctor) => Some(ctor()),
            None => {
                log::debug!("[ObjectFactory::create] no constructor for {}", name);
                None
            }
        }
    }

    /// Construct and downcast in one step.
    pub fn create_as<T: Any>(&self, name: &str) -> Result<Box<T>, FactoryError> {
        let object = self
            .create(name)
            .ok_or_else(|| FactoryError::NotRegistered(name.to_string()))?;
        object
            .downcast::<T>()
            .map_err(|_| FactoryError::WrongType(name.to_string()))
    }

    /// Whether a constructor is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.read().contains_key(name)
    }

    /// Names with a registered constructor, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.constructors.read().keys().cloned().collect()
    }
}

impl Default for ObjectFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_unregistered_returns_none() {
        let factory = ObjectFactory::new();
        assert!(factory.create("Unregistered").is_none());
    }

    #[test]
    fn test_create_returns_registered_type() {
        let factory = ObjectFactory::new();
        factory.register("Counter", || Box::new(7u64) as Box<dyn Any>);

        let object = factory.create("Counter").expect("registered");
        let counter = object.downcast::<u64>().expect("constructor produces u64");
        assert_eq!(*counter, 7);
    }

    #[test]
    fn test_last_registration_wins() {
        let factory = ObjectFactory::new();
        factory.register("Value", || Box::new(1u32) as Box<dyn Any>);
        factory.register("Value", || Box::new(2u32) as Box<dyn Any>);

        let object = factory.create("Value").expect("registered");
        assert_eq!(*object.downcast::<u32>().expect("u32"), 2);
    }

    #[test]
    fn test_register_default_uses_descriptor_name() {
        let factory = ObjectFactory::new();
        factory.register_default::<String>();

        assert!(factory.contains("String"));
        let object = factory.create("String").expect("registered");
        assert_eq!(*object.downcast::<String>().expect("String"), String::new());
    }

    #[test]
    fn test_create_as_errors() {
        let factory = ObjectFactory::new();
        factory.register("Flag", || Box::new(true) as Box<dyn Any>);

        assert!(*factory.create_as::<bool>("Flag").expect("bool"));
        assert_eq!(
            factory.create_as::<bool>("Missing"),
            Err(FactoryError::NotRegistered("Missing".to_string()))
        );
        assert_eq!(
            factory.create_as::<u32>("Flag"),
            Err(FactoryError::WrongType("Flag".to_string()))
        );
    }

    #[test]
    fn test_names_lists_registrations() {
        let factory = ObjectFactory::new();
        factory.register("A", || Box::new(0u8) as Box<dyn Any>);
        factory.register("B", || Box::new(0u8) as Box<dyn Any>);

        let mut names = factory.names();
        names.sort();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_global_is_shared() {
        ObjectFactory::global().register("factory_tests::unique", || {
            Box::new(41i32) as Box<dyn Any>
        });
        let object = ObjectFactory::global()
            .create("factory_tests::unique")
            .expect("registered on the same instance");
        assert_eq!(*object.downcast::<i32>().expect("i32"), 41);
    }
}
