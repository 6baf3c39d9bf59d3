//! Procedural macros for kind.
//!
//! # Reflect Derive
//!
//! `#[derive(Reflect)]` describes a struct as a classification leaf: its
//! shape is `Struct` and its fields are never inspected. Type parameters
//! are required to implement `Reflect` and show up in the canonical name.
//!
//! ```text
//! #[derive(Reflect)]
//! pub struct Pair<T> {
//!     pub left: T,
//!     pub right: T,
//! }
//!
//! assert_eq!(Kind::of(Pair { left: 1i32, right: 2 }).name(), "Pair<i32>");
//! ```
//!
//! The generated impl refers to `::kind::Reflect` and `::kind::TypeDesc`,
//! so the deriving crate must depend on `kind`.

mod reflect;

use proc_macro::TokenStream;

/// Derive `kind::Reflect` for a struct.
///
/// Named, tuple and unit structs are supported, with or without generics.
/// Enums and unions are rejected.
#[proc_macro_derive(Reflect)]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect::derive_reflect(input)
}
