//! Fixed scalar kinds and their values.

use std::fmt;

/// One of the fixed scalar kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScalarKind {
    Bool,
    String,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    UnsafePointer,
}

/// A scalar value captured from a reflected value.
///
/// Only scalars are ever extracted again, so this is the whole payload a
/// classified value keeps around. Raw pointers are never captured.
#[derive(Clone, PartialEq, Debug)]
pub enum Scalar {
    Bool(bool),
    String(String),
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint(usize),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Uintptr(usize),
    Float32(f32),
    Float64(f64),
    Complex64(Complex64),
    Complex128(Complex128),
}

impl Scalar {
    /// Kind of the captured value.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::String(_) => ScalarKind::String,
            Scalar::Int(_) => ScalarKind::Int,
            Scalar::Int8(_) => ScalarKind::Int8,
            Scalar::Int16(_) => ScalarKind::Int16,
            Scalar::Int32(_) => ScalarKind::Int32,
            Scalar::Int64(_) => ScalarKind::Int64,
            Scalar::Uint(_) => ScalarKind::Uint,
            Scalar::Uint8(_) => ScalarKind::Uint8,
            Scalar::Uint16(_) => ScalarKind::Uint16,
            Scalar::Uint32(_) => ScalarKind::Uint32,
            Scalar::Uint64(_) => ScalarKind::Uint64,
            Scalar::Uintptr(_) => ScalarKind::Uintptr,
            Scalar::Float32(_) => ScalarKind::Float32,
            Scalar::Float64(_) => ScalarKind::Float64,
            Scalar::Complex64(_) => ScalarKind::Complex64,
            Scalar::Complex128(_) => ScalarKind::Complex128,
        }
    }
}

/// Complex number made of two `f32` parts.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Complex64 {
    pub re: f32,
    pub im: f32,
}

impl Complex64 {
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

impl fmt::Display for Complex64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{:+}i)", self.re, self.im)
    }
}

/// Complex number made of two `f64` parts.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Complex128 {
    pub re: f64,
    pub im: f64,
}

impl Complex128 {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl fmt::Display for Complex128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{:+}i)", self.re, self.im)
    }
}

/// An integer holding a memory address.
///
/// `usize` already classifies as the plain unsigned integer; wrap an address
/// in `Uintptr` to classify it as one.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Debug)]
pub struct Uintptr(pub usize);
