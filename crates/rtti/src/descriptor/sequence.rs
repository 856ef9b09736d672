// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 rtti contributors

//! Generic adapter giving homogeneous ordered containers a descriptor.
//!
//! One adapter implementation serves every container/element pairing:
//! the two accessors below are monomorphized per element type and stored
//! as type-erased function pointers. Adapter descriptors are interned in
//! the [`TypeRegistry`](crate::TypeRegistry), one per container type.

use std::collections::VecDeque;
use std::mem;

use crate::descriptor::TypeDescriptor;
use crate::resolve::{Reflect, TypeRegistry};

/// Sequence-kind payload: the element descriptor plus two accessors
/// bound to the concrete container type at construction time.
#[derive(Debug)]
pub struct SequenceDescriptor {
    /// Element type, resolved on demand (thunk, so `Vec<Self>` inside a
    /// struct terminates during descriptor construction).
    element: fn() -> &'static TypeDescriptor,
    /// Element count of the container at `ptr`.
    pub(crate) len: unsafe fn(*const u8) -> usize,
    /// Address of element `index` of the container at `ptr`.
    pub(crate) get: unsafe fn(*const u8, usize) -> *const u8,
}

impl SequenceDescriptor {
    /// Bind an adapter from its element thunk and erased accessors.
    ///
    /// Public so further containers can be adapted outside this crate;
    /// the accessors must agree on the container type they cast to.
    pub fn new(
        element: fn() -> &'static TypeDescriptor,
        len: unsafe fn(*const u8) -> usize,
        get: unsafe fn(*const u8, usize) -> *const u8,
    ) -> Self {
        Self { element, len, get }
    }

    /// Descriptor of the element type.
    pub fn element_type(&self) -> &'static TypeDescriptor {
        (self.element)()
    }
}

/// # Safety
///
/// `seq` must point to a valid, initialized `Vec<E>`.
unsafe fn vec_len<E>(seq: *const u8) -> usize {
    (*seq.cast::<Vec<E>>()).len()
}

/// # Safety
///
/// `seq` must point to a valid, initialized `Vec<E>` and `index` must be
/// in bounds.
unsafe fn vec_get<E>(seq: *const u8, index: usize) -> *const u8 {
    (*seq.cast::<Vec<E>>()).as_ptr().add(index).cast()
}

/// # Safety
///
/// `seq` must point to a valid, initialized `VecDeque<E>`.
unsafe fn deque_len<E>(seq: *const u8) -> usize {
    (*seq.cast::<VecDeque<E>>()).len()
}

/// # Safety
///
/// `seq` must point to a valid, initialized `VecDeque<E>` and `index`
/// must be in bounds.
unsafe fn deque_get<E>(seq: *const u8, index: usize) -> *const u8 {
    let deque = &*seq.cast::<VecDeque<E>>();
    (&deque[index] as *const E).cast()
}

impl<E: Reflect> Reflect for Vec<E> {
    fn descriptor() -> &'static TypeDescriptor {
        TypeRegistry::global().intern::<Vec<E>>(|| {
            TypeDescriptor::sequence(
                "Vec",
                mem::size_of::<Vec<E>>(),
                SequenceDescriptor::new(E::descriptor, vec_len::<E>, vec_get::<E>),
            )
        })
    }
}

impl<E: Reflect> Reflect for VecDeque<E> {
    fn descriptor() -> &'static TypeDescriptor {
        TypeRegistry::global().intern::<VecDeque<E>>(|| {
            TypeDescriptor::sequence(
                "VecDeque",
                mem::size_of::<VecDeque<E>>(),
                SequenceDescriptor::new(E::descriptor, deque_len::<E>, deque_get::<E>),
            )
        })
    }
}
