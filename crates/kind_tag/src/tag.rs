//! The category bitset.
//!
//! # Bit layout
//!
//! - bit 0: Nil
//! - bits 1-11: Shapes (data layout of a value)
//! - bits 12-29: Scalars (one bit per fixed-width primitive)
//! - bit 30: overflow boundary, never a legal flag

use std::fmt;

use bitflags::bitflags;

use crate::TagError;

bitflags! {
    /// Classification of a type as a set of categories.
    ///
    /// A scalar type carries exactly one bit; a container type carries its
    /// shape bit plus whatever its elements contribute, e.g. `Vec<i32>` is
    /// `SLICE | INT32`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Tag: u32 {
        // === Nil (bit 0) ===

        /// The "no value" sentinel.
        const NIL = 1 << 0;

        // === Shapes (bits 1-11) ===

        /// Indirection to another value.
        const POINTER = 1 << 1;
        /// Fixed-length sequence.
        const ARRAY = 1 << 2;
        /// Fixed-length sequence of fixed-length sequences.
        const ARRAY_OF_ARRAYS = 1 << 3;
        /// Fixed-length sequence of growable sequences.
        const ARRAY_OF_SLICES = 1 << 4;
        /// Growable sequence.
        const SLICE = 1 << 5;
        /// Growable sequence of growable sequences.
        const SLICE_OF_SLICES = 1 << 6;
        /// Growable sequence of fixed-length sequences.
        const SLICE_OF_ARRAYS = 1 << 7;
        /// Record with fields (never inspected).
        const STRUCT = 1 << 8;
        /// Key/value mapping.
        const MAP = 1 << 9;
        /// Function.
        const FUNC = 1 << 10;
        /// Channel endpoint.
        const CHAN = 1 << 11;

        // === Scalars (bits 12-29) ===

        /// Boolean.
        const BOOL = 1 << 12;
        /// Pointer-sized signed integer.
        const INT = 1 << 13;
        /// 8-bit signed integer.
        const INT8 = 1 << 14;
        /// 16-bit signed integer.
        const INT16 = 1 << 15;
        /// 32-bit signed integer.
        const INT32 = 1 << 16;
        /// 64-bit signed integer.
        const INT64 = 1 << 17;
        /// Pointer-sized unsigned integer.
        const UINT = 1 << 18;
        /// 8-bit unsigned integer.
        const UINT8 = 1 << 19;
        /// 16-bit unsigned integer.
        const UINT16 = 1 << 20;
        /// 32-bit unsigned integer.
        const UINT32 = 1 << 21;
        /// 64-bit unsigned integer.
        const UINT64 = 1 << 22;
        /// Integer holding an address.
        const UINTPTR = 1 << 23;
        /// 32-bit float.
        const FLOAT32 = 1 << 24;
        /// 64-bit float.
        const FLOAT64 = 1 << 25;
        /// Complex number of two 32-bit floats.
        const COMPLEX64 = 1 << 26;
        /// Complex number of two 64-bit floats.
        const COMPLEX128 = 1 << 27;
        /// UTF-8 text.
        const STRING = 1 << 28;
        /// Untyped raw pointer.
        const UNSAFE_POINTER = 1 << 29;
    }
}

/// Generate one `is_<category>` predicate per category flag.
macro_rules! category_predicates {
    ($( ($method:ident, $flag:ident, $doc:literal) ),+ $(,)?) => {
        $(
            #[doc = $doc]
            #[inline]
            pub fn $method(self) -> bool {
                self.has(Self::$flag)
            }
        )+
    };
}

impl Tag {
    /// One past the last defined bit.
    ///
    /// Any tag with this bit (or a higher one) set is invalid.
    pub const OVERFLOW: u32 = 1 << 30;

    /// The nested sequence categories.
    ///
    /// At most one of them is set on a classified type.
    pub const NESTED_SEQUENCES: Self = Self::SLICE_OF_SLICES
        .union(Self::SLICE_OF_ARRAYS)
        .union(Self::ARRAY_OF_SLICES)
        .union(Self::ARRAY_OF_ARRAYS);

    /// Signed and unsigned integers of every width (not uintptr).
    pub const ANY_INT: Self = Self::INT
        .union(Self::INT8)
        .union(Self::INT16)
        .union(Self::INT32)
        .union(Self::INT64)
        .union(Self::ANY_UINT);

    /// Unsigned integers of every width (not uintptr).
    pub const ANY_UINT: Self = Self::UINT
        .union(Self::UINT8)
        .union(Self::UINT16)
        .union(Self::UINT32)
        .union(Self::UINT64);

    /// Both float widths.
    pub const ANY_FLOAT: Self = Self::FLOAT32.union(Self::FLOAT64);

    /// Both complex widths.
    pub const ANY_COMPLEX: Self = Self::COMPLEX64.union(Self::COMPLEX128);

    /// Check that every set bit is a defined category.
    ///
    /// The empty tag is valid and means "not classified yet".
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.bits() & !Self::all().bits() == 0
    }

    /// Check for exactly one category bit.
    #[inline]
    pub const fn is_single(self) -> bool {
        self.bits().count_ones() == 1 && self.bits() < Self::OVERFLOW
    }

    /// Check for two or more category bits.
    #[inline]
    pub const fn is_complex(self) -> bool {
        !self.is_empty() && !self.is_single()
    }

    /// Test whether every bit of `flag` is set.
    ///
    /// Fails for the empty flag, for a flag with undefined bits, and for a
    /// receiver with undefined bits, in that order.
    pub fn try_contains(self, flag: Self) -> Result<bool, TagError> {
        if flag.is_empty() {
            return Err(TagError::ZeroFlag);
        }
        if !flag.is_valid() {
            return Err(TagError::InvalidFlag { bits: flag.bits() });
        }
        if !self.is_valid() {
            return Err(TagError::Damaged { bits: self.bits() });
        }

        Ok(self.contains(flag))
    }

    /// Like [`Tag::try_contains`], treating every error as "not contained".
    #[inline]
    pub fn has(self, flag: Self) -> bool {
        self.try_contains(flag).unwrap_or(false)
    }

    /// Check that this tag is exactly the single category `flag`.
    #[inline]
    pub fn is(self, flag: Self) -> bool {
        self.has(flag) && self.is_single()
    }

    /// Replace the value with the union of `flags`.
    ///
    /// Whatever the receiver held is discarded. Duplicates are ignored.
    #[allow(clippy::unused_self)]
    pub fn try_set(self, flags: &[Self]) -> Result<Self, TagError> {
        Self::empty().try_add(flags)
    }

    /// Union `flags` into the value. Flags already present are ignored.
    pub fn try_add(self, flags: &[Self]) -> Result<Self, TagError> {
        flags.iter().try_fold(self, |acc, &flag| {
            Self::check_flag(flag)?;
            Ok(acc.union(flag))
        })
    }

    /// Remove `flags` from the value.
    ///
    /// A flag is removed only when all of its bits are present; a compound
    /// flag that is partly set leaves the value alone.
    pub fn try_delete(self, flags: &[Self]) -> Result<Self, TagError> {
        flags.iter().try_fold(self, |acc, &flag| {
            Self::check_flag(flag)?;
            Ok(if acc.contains(flag) {
                acc.difference(flag)
            } else {
                acc
            })
        })
    }

    /// Check that every flag is set. True for an empty list.
    pub fn has_all(self, flags: &[Self]) -> bool {
        flags.iter().all(|&flag| self.has(flag))
    }

    /// Check that at least one flag is set. False for an empty list.
    pub fn has_any(self, flags: &[Self]) -> bool {
        flags.iter().any(|&flag| self.has(flag))
    }

    /// All defined categories, one single-bit tag each, in bit order.
    pub fn categories() -> impl Iterator<Item = Self> {
        Self::all().iter()
    }

    fn check_flag(flag: Self) -> Result<(), TagError> {
        if flag.is_valid() {
            Ok(())
        } else {
            Err(TagError::InvalidFlag { bits: flag.bits() })
        }
    }

    category_predicates!(
        (is_nil, NIL, "Check for the nil sentinel."),
        (is_pointer, POINTER, "Check for the pointer shape."),
        (is_array, ARRAY, "Check for the plain array shape."),
        (is_array_of_arrays, ARRAY_OF_ARRAYS, "Check for an array of arrays."),
        (is_array_of_slices, ARRAY_OF_SLICES, "Check for an array of slices."),
        (is_slice, SLICE, "Check for the plain slice shape."),
        (is_slice_of_slices, SLICE_OF_SLICES, "Check for a slice of slices."),
        (is_slice_of_arrays, SLICE_OF_ARRAYS, "Check for a slice of arrays."),
        (is_struct, STRUCT, "Check for the struct shape."),
        (is_map, MAP, "Check for the map shape."),
        (is_function, FUNC, "Check for the function shape."),
        (is_channel, CHAN, "Check for the channel shape."),
        (is_bool, BOOL, "Check for `bool`."),
        (is_int, INT, "Check for the pointer-sized signed integer."),
        (is_int8, INT8, "Check for the 8-bit signed integer."),
        (is_int16, INT16, "Check for the 16-bit signed integer."),
        (is_int32, INT32, "Check for the 32-bit signed integer."),
        (is_int64, INT64, "Check for the 64-bit signed integer."),
        (is_uint, UINT, "Check for the pointer-sized unsigned integer."),
        (is_uint8, UINT8, "Check for the 8-bit unsigned integer."),
        (is_uint16, UINT16, "Check for the 16-bit unsigned integer."),
        (is_uint32, UINT32, "Check for the 32-bit unsigned integer."),
        (is_uint64, UINT64, "Check for the 64-bit unsigned integer."),
        (is_uintptr, UINTPTR, "Check for an address-holding integer."),
        (is_float32, FLOAT32, "Check for the 32-bit float."),
        (is_float64, FLOAT64, "Check for the 64-bit float."),
        (is_complex64, COMPLEX64, "Check for the 64-bit complex number."),
        (is_complex128, COMPLEX128, "Check for the 128-bit complex number."),
        (is_string, STRING, "Check for text."),
        (is_unsafe_pointer, UNSAFE_POINTER, "Check for an untyped raw pointer."),
    );
}

impl Default for Tag {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("empty");
        }
        if !self.is_valid() {
            return write!(f, "invalid({:#x})", self.bits());
        }

        for (i, flag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            if let Some(label) = flag.label() {
                f.write_str(label)?;
            }
        }
        Ok(())
    }
}

// Every defined bit sits below the overflow boundary, with no gaps.
const _: () = assert!(Tag::all().bits() == Tag::OVERFLOW - 1);
const _: () = assert!(std::mem::size_of::<Tag>() == 4);

#[cfg(test)]
mod tests;
