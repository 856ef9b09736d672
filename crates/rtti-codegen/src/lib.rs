// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 rtti contributors

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// `#[derive(Reflect)]` macro: generates the type's descriptor impl.
///
/// Supports named-field structs only. Every field type must itself be
/// reflectable (a primitive, a supported container, or another
/// `#[derive(Reflect)]` struct); a field of any other type fails to
/// compile at the generated impl.
///
/// The generated descriptor is built lazily, exactly once, on first
/// resolution; field offsets are taken with `core::mem::offset_of!`
/// against the type's final layout.
///
/// Example:
/// ```ignore
/// use rtti::Reflect;
///
/// #[derive(Reflect)]
/// struct SensorReading {
///     sensor_id: u32,
///     temperature: f64,
///     samples: Vec<f64>,
/// }
/// ```
#[proc_macro_derive(Reflect)]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let type_name = name.to_string();

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "Generic structs are not supported")
            .to_compile_error()
            .into();
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(f) => &f.named,
            _ => {
                return syn::Error::new_spanned(&input, "Only named fields are supported")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "Only structs are supported")
                .to_compile_error()
                .into()
        }
    };

    let field_entries: Vec<_> = fields
        .iter()
        .map(|field| {
            let Some(field_name) = field.ident.as_ref() else {
                return syn::Error::new_spanned(field, "Field must have a name")
                    .to_compile_error();
            };
            let name_str = field_name.to_string();
            let field_type = &field.ty;
            quote! {
                .field::<#field_type>(#name_str, ::core::mem::offset_of!(#name, #field_name))
            }
        })
        .collect();

    let expanded = quote! {
        impl ::rtti::Reflect for #name {
            fn descriptor() -> &'static ::rtti::TypeDescriptor {
                static DESCRIPTOR: ::std::sync::OnceLock<::rtti::TypeDescriptor> =
                    ::std::sync::OnceLock::new();
                DESCRIPTOR.get_or_init(|| {
                    ::rtti::StructBuilder::new(#type_name, ::core::mem::size_of::<#name>())
                        #(#field_entries)*
                        .build()
                })
            }
        }
    };

    expanded.into()
}
