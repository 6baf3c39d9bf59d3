//! Static type descriptors.
//!
//! Rust has no runtime reflection, so types describe themselves through the
//! [`Reflect`] trait. A [`TypeDesc`] answers exactly the questions the
//! classifier asks:
//!
//! - the [`Shape`] of a type (pointer, slice, array, map, chan, struct,
//!   func, one of the fixed scalars, nil, or something else),
//! - the element type of pointers, slices, arrays and channels,
//! - the key and value types of maps,
//! - the canonical name (`Vec<Vec<i32>>`, `HashMap<String, i64>`, ...).
//!
//! Implementations are provided for the primitives, references and smart
//! pointers, the standard sequences and maps, `mpsc` channels and function
//! pointers. User structs implement it by hand with
//! [`TypeDesc::structure`] or through `#[derive(Reflect)]`.

mod desc;
mod reflect;
mod scalar;

pub use desc::{Shape, TypeDesc};
pub use reflect::Reflect;
pub use scalar::{Complex128, Complex64, Scalar, ScalarKind, Uintptr};
