//! The `Reflect` trait and its implementations for standard types.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::ffi::c_void;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::Arc;

use crate::{Complex128, Complex64, Scalar, ScalarKind, Shape, TypeDesc, Uintptr};

/// A type that can describe itself.
///
/// # Example
///
/// ```
/// use kind_reflect::{Reflect, Shape, TypeDesc};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Reflect for Point {
///     fn type_desc() -> TypeDesc {
///         TypeDesc::structure("Point")
///     }
/// }
///
/// let desc = Vec::<Point>::type_desc();
/// assert_eq!(desc.name(), "Vec<Point>");
/// assert_eq!(desc.elem().map(TypeDesc::shape), Some(Shape::Struct));
/// ```
pub trait Reflect {
    /// Set for dynamically sized views (`str`, `[T]`).
    ///
    /// A reference or box around such a type *is* the string or slice, so
    /// it takes over the pointee's shape instead of becoming a pointer.
    const UNSIZED: bool = false;

    /// Describe the type.
    fn type_desc() -> TypeDesc;

    /// Capture the value when it is one of the fixed scalars.
    fn scalar(&self) -> Option<Scalar> {
        None
    }
}

// -- Scalars --

macro_rules! impl_reflect_scalar {
    ($( $ty:ident => $kind:ident ),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_desc() -> TypeDesc {
                    TypeDesc::scalar(stringify!($ty), ScalarKind::$kind)
                }

                fn scalar(&self) -> Option<Scalar> {
                    Some(Scalar::$kind(*self))
                }
            }
        )+
    };
}

impl_reflect_scalar!(
    bool => Bool,
    isize => Int,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    usize => Uint,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
    Complex64 => Complex64,
    Complex128 => Complex128,
);

impl Reflect for Uintptr {
    fn type_desc() -> TypeDesc {
        TypeDesc::scalar("Uintptr", ScalarKind::Uintptr)
    }

    fn scalar(&self) -> Option<Scalar> {
        Some(Scalar::Uintptr(self.0))
    }
}

impl Reflect for str {
    const UNSIZED: bool = true;

    fn type_desc() -> TypeDesc {
        TypeDesc::scalar("str", ScalarKind::String)
    }

    fn scalar(&self) -> Option<Scalar> {
        Some(Scalar::String(self.to_owned()))
    }
}

impl Reflect for String {
    fn type_desc() -> TypeDesc {
        TypeDesc::scalar("String", ScalarKind::String)
    }

    fn scalar(&self) -> Option<Scalar> {
        Some(Scalar::String(self.clone()))
    }
}

impl Reflect for *const c_void {
    fn type_desc() -> TypeDesc {
        TypeDesc::scalar("*const c_void", ScalarKind::UnsafePointer)
    }
}

impl Reflect for *mut c_void {
    fn type_desc() -> TypeDesc {
        TypeDesc::scalar("*mut c_void", ScalarKind::UnsafePointer)
    }
}

impl Reflect for () {
    fn type_desc() -> TypeDesc {
        TypeDesc::nil()
    }
}

macro_rules! impl_reflect_other {
    ($( $ty:ident ),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_desc() -> TypeDesc {
                    TypeDesc::other(stringify!($ty))
                }
            }
        )+
    };
}

impl_reflect_other!(char, i128, u128);

// -- Indirection --

/// Describe a pointer-like wrapper around `T`.
///
/// Wrappers around `str` and `[E]` keep the pointee's shape under the
/// wrapper's name.
fn indirection<T: Reflect + ?Sized>(name: impl FnOnce(&str) -> String) -> TypeDesc {
    let pointee = T::type_desc();
    let name = name(pointee.name());
    if T::UNSIZED {
        pointee.renamed(name)
    } else {
        TypeDesc::pointer(name, pointee)
    }
}

/// Capture through a wrapper only when it stands for the pointee itself.
fn indirect_scalar<T: Reflect + ?Sized>(pointee: &T) -> Option<Scalar> {
    if T::UNSIZED {
        pointee.scalar()
    } else {
        None
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn type_desc() -> TypeDesc {
        indirection::<T>(|inner| format!("&{inner}"))
    }

    fn scalar(&self) -> Option<Scalar> {
        indirect_scalar::<T>(self)
    }
}

impl<T: Reflect + ?Sized> Reflect for &mut T {
    fn type_desc() -> TypeDesc {
        indirection::<T>(|inner| format!("&mut {inner}"))
    }

    fn scalar(&self) -> Option<Scalar> {
        indirect_scalar::<T>(self)
    }
}

macro_rules! impl_reflect_smart_pointer {
    ($( $wrapper:ident ),+ $(,)?) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $wrapper<T> {
                fn type_desc() -> TypeDesc {
                    indirection::<T>(|inner| format!(concat!(stringify!($wrapper), "<{}>"), inner))
                }

                fn scalar(&self) -> Option<Scalar> {
                    indirect_scalar::<T>(self)
                }
            }
        )+
    };
}

impl_reflect_smart_pointer!(Box, Rc, Arc);

impl<T: Reflect> Reflect for Option<T> {
    fn type_desc() -> TypeDesc {
        let inner = T::type_desc();
        TypeDesc::pointer(format!("Option<{}>", inner.name()), inner)
    }
}

// -- Sequences --

impl<T: Reflect> Reflect for [T] {
    const UNSIZED: bool = true;

    fn type_desc() -> TypeDesc {
        let elem = T::type_desc();
        TypeDesc::slice(format!("[{}]", elem.name()), elem)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_desc() -> TypeDesc {
        let elem = T::type_desc();
        TypeDesc::array(format!("[{}; {N}]", elem.name()), elem, N)
    }
}

macro_rules! impl_reflect_sequence {
    ($( $seq:ident ),+ $(,)?) => {
        $(
            impl<T: Reflect> Reflect for $seq<T> {
                fn type_desc() -> TypeDesc {
                    let elem = T::type_desc();
                    TypeDesc::slice(format!(concat!(stringify!($seq), "<{}>"), elem.name()), elem)
                }
            }
        )+
    };
}

impl_reflect_sequence!(Vec, VecDeque);

// -- Maps --

fn map_desc<K: Reflect, V: Reflect>(map: &str) -> TypeDesc {
    let key = K::type_desc();
    let value = V::type_desc();
    TypeDesc::map(format!("{map}<{}, {}>", key.name(), value.name()), key, value)
}

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn type_desc() -> TypeDesc {
        map_desc::<K, V>("HashMap")
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn type_desc() -> TypeDesc {
        map_desc::<K, V>("BTreeMap")
    }
}

// -- Channels --

fn chan_desc<T: Reflect>(endpoint: &str) -> TypeDesc {
    let elem = T::type_desc();
    TypeDesc::chan(format!("{endpoint}<{}>", elem.name()), elem)
}

impl<T: Reflect> Reflect for Sender<T> {
    fn type_desc() -> TypeDesc {
        chan_desc::<T>("Sender")
    }
}

impl<T: Reflect> Reflect for SyncSender<T> {
    fn type_desc() -> TypeDesc {
        chan_desc::<T>("SyncSender")
    }
}

impl<T: Reflect> Reflect for Receiver<T> {
    fn type_desc() -> TypeDesc {
        chan_desc::<T>("Receiver")
    }
}

#[cfg(feature = "crossbeam")]
mod crossbeam_channels {
    use super::{chan_desc, Reflect, TypeDesc};

    impl<T: Reflect> Reflect for crossbeam::channel::Sender<T> {
        fn type_desc() -> TypeDesc {
            chan_desc::<T>("crossbeam::Sender")
        }
    }

    impl<T: Reflect> Reflect for crossbeam::channel::Receiver<T> {
        fn type_desc() -> TypeDesc {
            chan_desc::<T>("crossbeam::Receiver")
        }
    }
}

// -- Functions --

/// Render a function pointer name the way Rust spells it.
fn fn_name(params: &[String], ret: &TypeDesc) -> String {
    let mut name = format!("fn({})", params.join(", "));
    if ret.shape() != Shape::Nil {
        name.push_str(" -> ");
        name.push_str(ret.name());
    }
    name
}

macro_rules! impl_reflect_fn {
    ($( ($($arg:ident),*) ),+ $(,)?) => {
        $(
            impl<R: Reflect, $($arg: Reflect),*> Reflect for fn($($arg),*) -> R {
                fn type_desc() -> TypeDesc {
                    let params: &[String] = &[$($arg::type_desc().name().to_owned()),*];
                    TypeDesc::func(fn_name(params, &R::type_desc()))
                }
            }
        )+
    };
}

impl_reflect_fn!((), (A), (A, B), (A, B, C), (A, B, C, D));
