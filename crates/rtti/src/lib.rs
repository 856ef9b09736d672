// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 rtti contributors

//! # rtti - Runtime Type Reflection for Rust
//!
//! Runtime-inspectable descriptions of compiled Rust types: name, size,
//! member fields with byte offsets and nested descriptors. Any described
//! instance can be rendered generically as a tree, and objects can be
//! constructed from their type name alone, without the caller knowing
//! the concrete type at compile time.
//!
//! ## Quick Start
//!
//! ```rust
//! use rtti::{dump, resolve, Reflect};
//!
//! #[derive(Default, Reflect)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! let desc = resolve::<Point>();
//! assert_eq!(desc.name, "Point");
//! assert_eq!(desc.fields().map(|f| f.len()), Some(2));
//!
//! let origin = Point::default();
//! println!("{}", dump(&origin));
//! ```
//!
//! ## Name-keyed construction
//!
//! ```rust
//! use std::any::Any;
//! use rtti::ObjectFactory;
//!
//! let factory = ObjectFactory::new();
//! factory.register("Greeting", || Box::new(String::from("hello")) as Box<dyn Any>);
//!
//! let object = factory.create("Greeting").expect("registered above");
//! assert_eq!(*object.downcast::<String>().expect("String"), "hello");
//! assert!(factory.create("Unknown").is_none());
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TypeDescriptor`] | Runtime metadata: name, size, structural kind |
//! | [`Reflect`] | Contract implemented by every resolvable type |
//! | [`StructBuilder`] | Hand-registration of aggregate descriptors |
//! | [`TypeRegistry`] | Interning store for synthesized descriptors |
//! | [`ObjectFactory`] | Constructs objects from their registered name |
//!
//! Descriptors are built lazily, exactly once per type, and live for the
//! rest of the process; repeated [`resolve`] calls return the same
//! instance. Resolving a type that is neither a supported primitive, a
//! supported container, nor a `#[derive(Reflect)]` struct fails to
//! compile.

pub mod descriptor;
pub mod dump;
pub mod factory;
pub mod resolve;

pub use descriptor::{
    FieldDescriptor, PrimitiveDescriptor, PrimitiveKind, SequenceDescriptor, StructBuilder,
    TypeDescriptor, TypeKind,
};
pub use dump::{dump, dump_to, dump_value};
pub use factory::{FactoryError, ObjectFactory};
pub use resolve::{resolve, Reflect, TypeRegistry};

pub use rtti_codegen::Reflect; // Derive macro (for #[derive(rtti::Reflect)])
