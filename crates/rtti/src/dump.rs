// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 rtti contributors

//! Generic structural walk: renders any resolved instance as a tree.
//!
//! The walk is driven entirely by descriptors, so one implementation
//! serves every registered type. Struct fields are visited in
//! declaration order, sequence elements in index order; nothing is
//! skipped. Rendering goes to any [`fmt::Write`] sink.

use std::fmt;

use crate::descriptor::{TypeDescriptor, TypeKind};
use crate::resolve::{resolve, Reflect};

/// Indent step per nesting level, in spaces.
const INDENT_WIDTH: usize = 4;

/// Render `value` as a tree into a fresh string.
pub fn dump<T: Reflect>(value: &T) -> String {
    let mut out = String::new();
    dump_to(value, &mut out).expect("formatting into a String cannot fail");
    out
}

/// Render `value` as a tree into `out`.
pub fn dump_to<T: Reflect>(value: &T, out: &mut dyn fmt::Write) -> fmt::Result {
    let desc = resolve::<T>();
    // SAFETY: `value` is a live instance of exactly the type `desc`
    // describes.
    unsafe { dump_value(desc, (value as *const T).cast(), 0, out) }
}

/// Recursive walk over a `(descriptor, address)` pair.
///
/// Renders primitives as `name{value}`, structs as a `name { .. }` block
/// with one `field = value` line per member, and sequences as a
/// `full_name { .. }` block with one `[index] value` line per element.
/// An empty sequence renders the distinct `full_name{}` marker instead
/// of an empty block.
///
/// # Safety
///
/// `ptr` must point to a valid, initialized instance of exactly the type
/// `desc` describes. There is no runtime check; a mismatched pair is
/// undefined behavior.
pub unsafe fn dump_value(
    desc: &TypeDescriptor,
    ptr: *const u8,
    depth: usize,
    out: &mut dyn fmt::Write,
) -> fmt::Result {
    match &desc.kind {
        TypeKind::Primitive(prim) => {
            write!(out, "{}{{", desc.name)?;
            (prim.write)(ptr, out)?;
            out.write_char('}')
        }
        TypeKind::Struct(fields) => {
            writeln!(out, "{} {{", desc.name)?;
            let inner = (depth + 1) * INDENT_WIDTH;
            for field in fields {
                write!(out, "{:inner$}{} = ", "", field.name)?;
                dump_value(field.type_desc(), ptr.add(field.offset), depth + 1, out)?;
                out.write_char('\n')?;
            }
            write!(out, "{:outer$}}}", "", outer = depth * INDENT_WIDTH)
        }
        TypeKind::Sequence(seq) => {
            let count = (seq.len)(ptr);
            if count == 0 {
                return write!(out, "{}{{}}", desc.full_name());
            }
            writeln!(out, "{} {{", desc.full_name())?;
            let inner = (depth + 1) * INDENT_WIDTH;
            let element = seq.element_type();
            for index in 0..count {
                write!(out, "{:inner$}[{}] ", "", index)?;
                dump_value(element, (seq.get)(ptr, index), depth + 1, out)?;
                out.write_char('\n')?;
            }
            write!(out, "{:outer$}}}", "", outer = depth * INDENT_WIDTH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::StructBuilder;
    use crate::resolve::Reflect;
    use std::sync::OnceLock;

    #[test]
    fn test_dump_primitives() {
        assert_eq!(dump(&42u32), "u32{42}");
        assert_eq!(dump(&-7i64), "i64{-7}");
        assert_eq!(dump(&true), "bool{true}");
        assert_eq!(dump(&1.5f64), "f64{1.5}");
        assert_eq!(dump(&'x'), "char{'x'}");
        assert_eq!(dump(&String::from("hi")), "String{\"hi\"}");
    }

    #[test]
    fn test_dump_empty_sequence_marker() {
        let empty: Vec<u32> = Vec::new();
        assert_eq!(dump(&empty), "Vec<u32>{}");
    }

    #[test]
    fn test_dump_sequence_elements() {
        let values: Vec<u8> = vec![1, 2];
        assert_eq!(dump(&values), "Vec<u8> {\n    [0] u8{1}\n    [1] u8{2}\n}");
    }

    struct Reading {
        id: u32,
        samples: Vec<f64>,
    }

    impl Reflect for Reading {
        fn descriptor() -> &'static TypeDescriptor {
            static DESCRIPTOR: OnceLock<TypeDescriptor> = OnceLock::new();
            DESCRIPTOR.get_or_init(|| {
                StructBuilder::new("Reading", std::mem::size_of::<Reading>())
                    .field::<u32>("id", std::mem::offset_of!(Reading, id))
                    .field::<Vec<f64>>("samples", std::mem::offset_of!(Reading, samples))
                    .build()
            })
        }
    }

    #[test]
    fn test_dump_struct_block() {
        let reading = Reading {
            id: 9,
            samples: vec![0.5],
        };
        let expected = "\
Reading {
    id = u32{9}
    samples = Vec<f64> {
        [0] f64{0.5}
    }
}";
        assert_eq!(dump(&reading), expected);
    }

    #[test]
    fn test_dump_struct_with_empty_sequence() {
        let reading = Reading {
            id: 1,
            samples: Vec::new(),
        };
        let expected = "\
Reading {
    id = u32{1}
    samples = Vec<f64>{}
}";
        assert_eq!(dump(&reading), expected);
    }

    #[test]
    fn test_dump_to_arbitrary_sink() {
        let mut sink = String::from("> ");
        dump_to(&5u8, &mut sink).expect("write");
        assert_eq!(sink, "> u8{5}");
    }
}
