//! The classified view of one type.

use std::borrow::Cow;
use std::fmt;

use kind_reflect::{Complex128, Complex64, Reflect, Scalar, Shape, TypeDesc};
use kind_tag::Tag;

use crate::walk;

/// Name given to the nil sentinel.
const NIL: &str = "nil";

/// Name given to a type the taxonomy has no category for.
const UNDEFINED: &str = "undefined";

/// The categories a type belongs to, under its canonical name.
///
/// A `Kind` is built by [`Kind::of`] or [`Kind::of_type`] and never changes
/// afterwards. Map kinds own one child `Kind` for the key type and one for
/// the value type.
#[derive(Clone, PartialEq, Debug)]
pub struct Kind {
    pub(crate) name: String,
    pub(crate) value: Option<Scalar>,
    pub(crate) tag: Tag,
    pub(crate) map_key: Option<Box<Kind>>,
    pub(crate) map_value: Option<Box<Kind>>,
}

// Classified kinds are handed across threads for reading.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Kind>();
};

/// Forward `is_<category>` predicates to the tag.
macro_rules! tag_predicates {
    ($( $method:ident ),+ $(,)?) => {
        $(
            #[inline]
            pub fn $method(&self) -> bool {
                self.tag.$method()
            }
        )+
    };
}

/// Generate `as_<scalar>` extractors for `Copy` payloads.
macro_rules! scalar_extractors {
    ($( ($method:ident, $predicate:ident, $variant:ident, $ty:ty) ),+ $(,)?) => {
        $(
            #[doc = concat!("The captured value when this is exactly `", stringify!($ty), "`.")]
            pub fn $method(&self) -> Option<$ty> {
                match &self.value {
                    Some(Scalar::$variant(value)) if self.$predicate() => Some(*value),
                    _ => None,
                }
            }
        )+
    };
}

impl Kind {
    /// Classify the type of `value`.
    ///
    /// Scalar values are kept so they can be extracted again with the
    /// matching `as_*` accessor.
    #[tracing::instrument(level = "trace", skip_all, fields(ty = std::any::type_name::<T>()))]
    pub fn of<T: Reflect>(value: T) -> Self {
        let mut kind = Self::of_type(&T::type_desc());
        kind.value = value.scalar();
        kind
    }

    /// Classify a type from its descriptor alone.
    #[tracing::instrument(level = "trace", skip_all, fields(name = desc.name()))]
    pub fn of_type(desc: &TypeDesc) -> Self {
        match desc.shape() {
            Shape::Nil => Self::nil(),
            Shape::Other => Self::named(UNDEFINED),
            _ => {
                let mut kind = Self::named(desc.name());
                walk::classify(&mut kind, desc, 0);
                kind
            }
        }
    }

    /// The nil sentinel.
    pub fn nil() -> Self {
        let mut kind = Self::named(NIL);
        kind.tag = Tag::NIL;
        kind
    }

    pub(crate) fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            tag: Tag::empty(),
            map_key: None,
            map_value: None,
        }
    }

    /// Canonical name of the classified type.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every category the type belongs to.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Check against a category label or the exact type name.
    ///
    /// Labels are matched ignoring case and spaces, and include the Rust
    /// spellings of the primitives, so `"Slice of Slices"`, `"int32"` and
    /// `"i32"` all test categories. Any other text must equal
    /// [`name`](Self::name).
    ///
    /// ```
    /// use kind::Kind;
    ///
    /// let kind = Kind::of(vec![1u8]);
    /// assert!(kind.is("slice"));
    /// assert!(kind.is("u8"));
    /// assert!(kind.is("Vec<u8>"));
    /// assert!(!kind.is("vec<u8>"));
    /// ```
    pub fn is(&self, text: &str) -> bool {
        match Tag::from_label(text) {
            Some(flag) => self.tag.has(flag),
            None => self.name == text,
        }
    }

    /// More than one category is set (a container and what it holds).
    pub fn is_complex(&self) -> bool {
        self.tag.is_complex()
    }

    tag_predicates!(
        is_nil,
        is_pointer,
        is_array,
        is_array_of_arrays,
        is_array_of_slices,
        is_slice,
        is_slice_of_slices,
        is_slice_of_arrays,
        is_struct,
        is_map,
        is_function,
        is_channel,
        is_bool,
        is_string,
        is_int,
        is_int8,
        is_int16,
        is_int32,
        is_int64,
        is_uint,
        is_uint8,
        is_uint16,
        is_uint32,
        is_uint64,
        is_uintptr,
        is_float32,
        is_float64,
        is_complex64,
        is_complex128,
        is_unsafe_pointer,
    );

    /// Any integer, float or complex category.
    pub fn is_number(&self) -> bool {
        self.is_any_int() || self.is_any_float() || self.is_any_complex()
    }

    /// Signed or unsigned integer of any width. Uintptr is not counted.
    pub fn is_any_int(&self) -> bool {
        self.tag.intersects(Tag::ANY_INT)
    }

    /// Float of either width.
    pub fn is_any_float(&self) -> bool {
        self.tag.intersects(Tag::ANY_FLOAT)
    }

    /// Complex number of either width.
    pub fn is_any_complex(&self) -> bool {
        self.tag.intersects(Tag::ANY_COMPLEX)
    }

    /// Signed integer, float or complex number.
    pub fn is_signed(&self) -> bool {
        self.tag
            .intersects(Tag::ANY_INT.difference(Tag::ANY_UINT) | Tag::ANY_FLOAT | Tag::ANY_COMPLEX)
    }

    /// Unsigned integer of any width.
    pub fn is_unsigned(&self) -> bool {
        self.tag.intersects(Tag::ANY_UINT)
    }

    /// Kind of the map key type.
    ///
    /// Anything that is not a map answers with a fresh nil kind.
    pub fn map_key_kind(&self) -> Cow<'_, Kind> {
        self.map_child(self.map_key.as_deref())
    }

    /// Kind of the map value type.
    ///
    /// Anything that is not a map answers with a fresh nil kind.
    pub fn map_value_kind(&self) -> Cow<'_, Kind> {
        self.map_child(self.map_value.as_deref())
    }

    fn map_child<'a>(&self, child: Option<&'a Kind>) -> Cow<'a, Kind> {
        match child {
            Some(child) if self.is_map() => Cow::Borrowed(child),
            _ => Cow::Owned(Kind::nil()),
        }
    }

    /// The captured text when this is a string.
    pub fn as_string(&self) -> Option<&str> {
        match &self.value {
            Some(Scalar::String(text)) if self.is_string() => Some(text),
            _ => None,
        }
    }

    scalar_extractors!(
        (as_bool, is_bool, Bool, bool),
        (as_int, is_int, Int, isize),
        (as_int8, is_int8, Int8, i8),
        (as_int16, is_int16, Int16, i16),
        (as_int32, is_int32, Int32, i32),
        (as_int64, is_int64, Int64, i64),
        (as_uint, is_uint, Uint, usize),
        (as_uint8, is_uint8, Uint8, u8),
        (as_uint16, is_uint16, Uint16, u16),
        (as_uint32, is_uint32, Uint32, u32),
        (as_uint64, is_uint64, Uint64, u64),
        (as_uintptr, is_uintptr, Uintptr, usize),
        (as_float32, is_float32, Float32, f32),
        (as_float64, is_float64, Float64, f64),
        (as_complex64, is_complex64, Complex64, Complex64),
        (as_complex128, is_complex128, Complex128, Complex128),
    );
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
