// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 rtti contributors

//! Type descriptors for runtime type information.
//!
//! One [`TypeDescriptor`] exists per described compile-time type. It is
//! built lazily, exactly once, on first resolution, and lives for the
//! rest of the process; all later resolutions observe the same instance.

mod builder;
mod primitive;
mod sequence;

pub use builder::StructBuilder;
pub use primitive::{PrimitiveDescriptor, PrimitiveKind};
pub use sequence::SequenceDescriptor;

/// Type kind enumeration.
#[derive(Debug)]
pub enum TypeKind {
    /// Primitive type with a bound value renderer.
    Primitive(PrimitiveDescriptor),
    /// Struct with named, offset-addressable fields.
    Struct(Vec<FieldDescriptor>),
    /// Homogeneous ordered container (dynamic length).
    Sequence(SequenceDescriptor),
}

/// A complete type descriptor.
#[derive(Debug)]
pub struct TypeDescriptor {
    /// Type name (unqualified).
    pub name: &'static str,
    /// In-memory size in bytes.
    pub size: usize,
    /// Type kind.
    pub kind: TypeKind,
}

impl TypeDescriptor {
    /// Create a struct type descriptor.
    pub fn struct_type(name: &'static str, size: usize, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name,
            size,
            kind: TypeKind::Struct(fields),
        }
    }

    /// Create a sequence type descriptor. `name` is the container name.
    pub fn sequence(name: &'static str, size: usize, desc: SequenceDescriptor) -> Self {
        Self {
            name,
            size,
            kind: TypeKind::Sequence(desc),
        }
    }

    /// Qualified display name.
    ///
    /// Plain types render as their `name`; sequences include the element
    /// type, e.g. `Vec<Node>`.
    pub fn full_name(&self) -> String {
        match &self.kind {
            TypeKind::Sequence(seq) => {
                format!("{}<{}>", self.name, seq.element_type().full_name())
            }
            _ => self.name.to_string(),
        }
    }

    /// Check if this is a primitive type.
    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive(_))
    }

    /// Check if this is a struct type.
    pub fn is_struct(&self) -> bool {
        matches!(self.kind, TypeKind::Struct(_))
    }

    /// Check if this is a sequence type.
    pub fn is_sequence(&self) -> bool {
        matches!(self.kind, TypeKind::Sequence(_))
    }

    /// Get fields if this is a struct.
    pub fn fields(&self) -> Option<&[FieldDescriptor]> {
        match &self.kind {
            TypeKind::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields()?.iter().find(|f| f.name == name)
    }

    /// Get field index by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields()?.iter().position(|f| f.name == name)
    }
}

/// Field descriptor for struct members.
#[derive(Debug)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: &'static str,
    /// Byte offset of the field within its struct.
    pub offset: usize,
    /// Field type, resolved on demand. A thunk rather than an eager
    /// reference so self-referential aggregates terminate during
    /// descriptor construction.
    resolve: fn() -> &'static TypeDescriptor,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(
        name: &'static str,
        offset: usize,
        resolve: fn() -> &'static TypeDescriptor,
    ) -> Self {
        Self {
            name,
            offset,
            resolve,
        }
    }

    /// Descriptor of the field's type.
    pub fn type_desc(&self) -> &'static TypeDescriptor {
        (self.resolve)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{resolve, Reflect};

    #[test]
    fn test_struct_field_lookup() {
        struct Point {
            x: f64,
            y: f64,
        }

        let desc = StructBuilder::new("Point", std::mem::size_of::<Point>())
            .field::<f64>("x", std::mem::offset_of!(Point, x))
            .field::<f64>("y", std::mem::offset_of!(Point, y))
            .build();

        assert!(desc.is_struct());
        assert!(!desc.is_primitive());
        assert_eq!(desc.fields().map(|f| f.len()), Some(2));
        assert!(desc.field("x").is_some());
        assert!(desc.field("z").is_none());
        assert_eq!(desc.field_index("y"), Some(1));
    }

    #[test]
    fn test_full_name_plain_types() {
        assert_eq!(resolve::<u32>().full_name(), "u32");

        struct Empty {}
        let desc = StructBuilder::new("Empty", std::mem::size_of::<Empty>()).build();
        assert_eq!(desc.full_name(), "Empty");
    }

    #[test]
    fn test_field_type_resolves_to_shared_descriptor() {
        struct Tagged {
            tag: String,
        }

        let desc = StructBuilder::new("Tagged", std::mem::size_of::<Tagged>())
            .field::<String>("tag", std::mem::offset_of!(Tagged, tag))
            .build();

        let field = desc.field("tag").expect("field");
        assert!(std::ptr::eq(field.type_desc(), String::descriptor()));
    }
}
