// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 rtti contributors

//! Fluent builder for aggregate descriptors.

use crate::descriptor::{FieldDescriptor, TypeDescriptor};
use crate::resolve::Reflect;

/// Builder for struct-kind descriptors.
///
/// Populates an aggregate's field list exactly once. `#[derive(Reflect)]`
/// drives it from inside the type's lazy initializer, after the type's
/// layout is final; it is also the public path for registering aggregates
/// by hand:
///
/// ```rust
/// use rtti::StructBuilder;
///
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// let desc = StructBuilder::new("Point", std::mem::size_of::<Point>())
///     .field::<f64>("x", std::mem::offset_of!(Point, x))
///     .field::<f64>("y", std::mem::offset_of!(Point, y))
///     .build();
///
/// assert_eq!(desc.name, "Point");
/// assert_eq!(desc.fields().map(|f| f.len()), Some(2));
/// ```
#[derive(Debug)]
pub struct StructBuilder {
    name: &'static str,
    size: usize,
    fields: Vec<FieldDescriptor>,
}

impl StructBuilder {
    /// Start a descriptor for a struct with the given name and in-memory
    /// size.
    pub fn new(name: &'static str, size: usize) -> Self {
        Self {
            name,
            size,
            fields: Vec::new(),
        }
    }

    /// Append a field. Declaration order is preserved; `offset` is the
    /// field's byte offset within the struct (`core::mem::offset_of!`).
    pub fn field<F: Reflect>(mut self, name: &'static str, offset: usize) -> Self {
        self.fields.push(FieldDescriptor::new(name, offset, F::descriptor));
        self
    }

    /// Finish the descriptor. The field list is read-only afterwards.
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor::struct_type(self.name, self.size, self.fields)
    }
}
