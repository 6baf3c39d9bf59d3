//! Type descriptor tree.

use std::fmt;

use crate::ScalarKind;

/// Description of one type: its canonical name and its structure.
///
/// Children (element, key, value) are owned, so a descriptor is a finite
/// tree mirroring the nesting of the type it describes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDesc {
    name: String,
    kind: TypeKind,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
enum TypeKind {
    Nil,
    Pointer(Box<TypeDesc>),
    Array { elem: Box<TypeDesc>, len: usize },
    Slice(Box<TypeDesc>),
    Map { key: Box<TypeDesc>, value: Box<TypeDesc> },
    Chan(Box<TypeDesc>),
    Struct,
    Func,
    Scalar(ScalarKind),
    Other,
}

/// Structural kind of a type, without its children.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Shape {
    /// The unit value, Rust's "no value".
    Nil,
    /// Indirection: references, boxes, shared pointers, options.
    Pointer,
    /// Fixed-length sequence `[T; N]`.
    Array,
    /// Growable or borrowed sequence.
    Slice,
    /// Key/value mapping.
    Map,
    /// Channel endpoint.
    Chan,
    /// Record type; fields are never described.
    Struct,
    /// Function pointer; the signature is never described.
    Func,
    /// One of the fixed scalars.
    Scalar(ScalarKind),
    /// Anything outside the taxonomy (`char`, `i128`, ...).
    Other,
}

impl TypeDesc {
    /// The unit type.
    pub fn nil() -> Self {
        Self::leaf("()", TypeKind::Nil)
    }

    /// A scalar type.
    pub fn scalar(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self::leaf(name, TypeKind::Scalar(kind))
    }

    /// A pointer-like type referring to `pointee`.
    pub fn pointer(name: impl Into<String>, pointee: TypeDesc) -> Self {
        Self::leaf(name, TypeKind::Pointer(Box::new(pointee)))
    }

    /// A fixed-length array of `len` elements.
    pub fn array(name: impl Into<String>, elem: TypeDesc, len: usize) -> Self {
        Self::leaf(
            name,
            TypeKind::Array {
                elem: Box::new(elem),
                len,
            },
        )
    }

    /// A slice-like sequence.
    pub fn slice(name: impl Into<String>, elem: TypeDesc) -> Self {
        Self::leaf(name, TypeKind::Slice(Box::new(elem)))
    }

    /// A map from `key` to `value`.
    pub fn map(name: impl Into<String>, key: TypeDesc, value: TypeDesc) -> Self {
        Self::leaf(
            name,
            TypeKind::Map {
                key: Box::new(key),
                value: Box::new(value),
            },
        )
    }

    /// A channel endpoint carrying `elem`.
    pub fn chan(name: impl Into<String>, elem: TypeDesc) -> Self {
        Self::leaf(name, TypeKind::Chan(Box::new(elem)))
    }

    /// A struct. Its fields are not part of the description.
    pub fn structure(name: impl Into<String>) -> Self {
        Self::leaf(name, TypeKind::Struct)
    }

    /// A function. Its signature only shows up in the name.
    pub fn func(name: impl Into<String>) -> Self {
        Self::leaf(name, TypeKind::Func)
    }

    /// A type outside the taxonomy.
    pub fn other(name: impl Into<String>) -> Self {
        Self::leaf(name, TypeKind::Other)
    }

    /// The same structure under another name.
    #[must_use]
    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: self.kind,
        }
    }

    fn leaf(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Canonical name of the type.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Structural kind of the type.
    pub fn shape(&self) -> Shape {
        match &self.kind {
            TypeKind::Nil => Shape::Nil,
            TypeKind::Pointer(_) => Shape::Pointer,
            TypeKind::Array { .. } => Shape::Array,
            TypeKind::Slice(_) => Shape::Slice,
            TypeKind::Map { .. } => Shape::Map,
            TypeKind::Chan(_) => Shape::Chan,
            TypeKind::Struct => Shape::Struct,
            TypeKind::Func => Shape::Func,
            TypeKind::Scalar(kind) => Shape::Scalar(*kind),
            TypeKind::Other => Shape::Other,
        }
    }

    /// Element type of a pointer, array, slice or channel.
    pub fn elem(&self) -> Option<&TypeDesc> {
        match &self.kind {
            TypeKind::Pointer(elem)
            | TypeKind::Array { elem, .. }
            | TypeKind::Slice(elem)
            | TypeKind::Chan(elem) => Some(elem.as_ref()),
            _ => None,
        }
    }

    /// Key type of a map.
    pub fn key(&self) -> Option<&TypeDesc> {
        match &self.kind {
            TypeKind::Map { key, .. } => Some(key.as_ref()),
            _ => None,
        }
    }

    /// Value type of a map.
    pub fn value(&self) -> Option<&TypeDesc> {
        match &self.kind {
            TypeKind::Map { value, .. } => Some(value.as_ref()),
            _ => None,
        }
    }

    /// Length of an array.
    pub fn array_len(&self) -> Option<usize> {
        match &self.kind {
            TypeKind::Array { len, .. } => Some(*len),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests;
