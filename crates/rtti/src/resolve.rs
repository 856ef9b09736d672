// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 rtti contributors

//! Compile-time-type to descriptor resolution.

use std::any::TypeId;
use std::sync::OnceLock;

use dashmap::DashMap;

use crate::descriptor::TypeDescriptor;

/// A reflectable type: one that can produce its own descriptor.
///
/// Implemented by the closed primitive set, by the container adapters,
/// and by `#[derive(Reflect)]` structs. Resolving any other type is a
/// missing-trait-bound error at compile time; no runtime path exists for
/// unreflectable types.
pub trait Reflect: 'static {
    /// Descriptor for this type. Every call returns the same instance.
    fn descriptor() -> &'static TypeDescriptor;
}

/// Resolve a compile-time type to its descriptor.
///
/// Idempotent: repeated calls for the same `T` return the same
/// descriptor instance, not merely an equal one.
pub fn resolve<T: Reflect>() -> &'static TypeDescriptor {
    T::descriptor()
}

/// Interning store for descriptors synthesized at runtime.
///
/// Struct and primitive descriptors live in per-type statics; container
/// adapters are built on demand, once per container type, and cached
/// here keyed by `TypeId`. [`TypeRegistry::global`] is the
/// one-instance-per-process default used by the blanket container impls;
/// independent registries can be built with [`TypeRegistry::new`] and
/// passed explicitly.
pub struct TypeRegistry {
    cache: DashMap<TypeId, &'static TypeDescriptor>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    /// Process-wide registry, created lazily on first use.
    pub fn global() -> &'static TypeRegistry {
        static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();
        GLOBAL.get_or_init(TypeRegistry::new)
    }

    /// Descriptor for `K`, building it on first request.
    ///
    /// The shard lock taken by `entry` guarantees `build` runs at most
    /// once per key even under concurrent resolution, and that every
    /// caller observes the fully-built descriptor. `build` must not
    /// resolve other descriptors itself (nested type references are
    /// lazy thunks), so interning never re-enters the map.
    pub fn intern<K: 'static>(
        &self,
        build: impl FnOnce() -> TypeDescriptor,
    ) -> &'static TypeDescriptor {
        *self.cache.entry(TypeId::of::<K>()).or_insert_with(|| {
            let desc: &'static TypeDescriptor = Box::leak(Box::new(build()));
            log::trace!("[TypeRegistry::intern] synthesized {} descriptor", desc.name);
            desc
        })
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
