//! Recursive descriptor walk.
//!
//! Every shape adds its category to the kind being built, then the walk
//! continues into the element type of pointers, sequences and channels.
//! Maps classify their key and value types into separate child kinds.
//!
//! # Nested Sequences
//!
//! A sequence whose element is itself a sequence gets one of the four
//! nested categories (`SLICE_OF_SLICES`, ...) instead of its plain one.
//! Once a nested category is recorded, inner sequences no longer add their
//! plain category, so `Vec<Vec<Vec<i32>>>` is a slice of slices and never
//! also a plain slice.

use kind_reflect::{ScalarKind, Shape, TypeDesc};
use kind_tag::Tag;

use crate::Kind;

/// Minimum stack space to keep available before descending.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing.
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Classify `desc` into `kind`.
///
/// `depth` counts the indirections and sequences above `desc` and is only
/// reported to tracing.
pub(crate) fn classify(kind: &mut Kind, desc: &TypeDesc, depth: usize) {
    ensure_sufficient_stack(|| classify_shape(kind, desc, depth));
}

fn classify_shape(kind: &mut Kind, desc: &TypeDesc, depth: usize) {
    let shape = desc.shape();
    tracing::trace!(depth, ?shape, name = desc.name(), "classify");

    match shape {
        Shape::Slice => sequence(
            kind,
            desc,
            depth,
            [Tag::SLICE, Tag::SLICE_OF_SLICES, Tag::SLICE_OF_ARRAYS],
        ),
        Shape::Array => sequence(
            kind,
            desc,
            depth,
            [Tag::ARRAY, Tag::ARRAY_OF_SLICES, Tag::ARRAY_OF_ARRAYS],
        ),
        Shape::Pointer => {
            add_flag(kind, Tag::POINTER);
            descend(kind, desc, depth);
        }
        Shape::Chan => {
            add_flag(kind, Tag::CHAN);
            descend(kind, desc, depth);
        }
        Shape::Map => {
            add_flag(kind, Tag::MAP);
            if let (Some(key), Some(value)) = (desc.key(), desc.value()) {
                kind.map_key = Some(Box::new(map_child(key)));
                kind.map_value = Some(Box::new(map_child(value)));
            }
        }
        Shape::Struct => add_flag(kind, Tag::STRUCT),
        Shape::Func => add_flag(kind, Tag::FUNC),
        Shape::Scalar(scalar) => add_flag(kind, scalar_flag(scalar)),
        // Only meaningful at the top, where the entry point names it.
        Shape::Nil | Shape::Other => {}
    }
}

/// Key or value kind of a map, named after its own type and walked from
/// depth 0.
fn map_child(desc: &TypeDesc) -> Kind {
    let mut child = Kind::named(desc.name());
    classify(&mut child, desc, 0);
    child
}

/// Shared rule for slices and arrays.
///
/// `flags` holds the plain category, then the category for a slice
/// element, then the one for an array element.
fn sequence(kind: &mut Kind, desc: &TypeDesc, depth: usize, flags: [Tag; 3]) {
    let [plain, of_slices, of_arrays] = flags;

    match desc.elem().map(TypeDesc::shape) {
        Some(Shape::Slice) => add_flag(kind, of_slices),
        Some(Shape::Array) => add_flag(kind, of_arrays),
        _ if !is_multi_sequence(kind) => add_flag(kind, plain),
        _ => {}
    }

    descend(kind, desc, depth);
}

fn descend(kind: &mut Kind, desc: &TypeDesc, depth: usize) {
    if let Some(elem) = desc.elem() {
        classify(kind, elem, depth + 1);
    }
}

/// A nested sequence category has already been recorded.
fn is_multi_sequence(kind: &Kind) -> bool {
    kind.tag.intersects(Tag::NESTED_SEQUENCES)
}

/// Fold one category into the kind.
///
/// The walk only passes defined single flags, so the error branch is
/// unreachable in practice. It is logged and the flag skipped.
fn add_flag(kind: &mut Kind, flag: Tag) {
    match kind.tag.try_add(&[flag]) {
        Ok(tag) => kind.tag = tag,
        Err(error) => {
            tracing::error!(%error, name = %kind.name, "failed to record category");
        }
    }
}

fn scalar_flag(scalar: ScalarKind) -> Tag {
    match scalar {
        ScalarKind::Bool => Tag::BOOL,
        ScalarKind::String => Tag::STRING,
        ScalarKind::Int => Tag::INT,
        ScalarKind::Int8 => Tag::INT8,
        ScalarKind::Int16 => Tag::INT16,
        ScalarKind::Int32 => Tag::INT32,
        ScalarKind::Int64 => Tag::INT64,
        ScalarKind::Uint => Tag::UINT,
        ScalarKind::Uint8 => Tag::UINT8,
        ScalarKind::Uint16 => Tag::UINT16,
        ScalarKind::Uint32 => Tag::UINT32,
        ScalarKind::Uint64 => Tag::UINT64,
        ScalarKind::Uintptr => Tag::UINTPTR,
        ScalarKind::Float32 => Tag::FLOAT32,
        ScalarKind::Float64 => Tag::FLOAT64,
        ScalarKind::Complex64 => Tag::COMPLEX64,
        ScalarKind::Complex128 => Tag::COMPLEX128,
        ScalarKind::UnsafePointer => Tag::UNSAFE_POINTER,
    }
}
