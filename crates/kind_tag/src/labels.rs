//! Human-readable names for tag categories.
//!
//! Lookup keys are normalized with [`normalize_label`], so `"Array of
//! Slices"`, `"array of slices"` and `"arrayofslices"` all resolve to
//! [`Tag::ARRAY_OF_SLICES`].

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::Tag;

/// Display label of every category, in bit order.
const CATEGORY_LABELS: [(Tag, &str); 30] = [
    (Tag::NIL, "nil"),
    (Tag::POINTER, "pointer"),
    (Tag::ARRAY, "array"),
    (Tag::ARRAY_OF_ARRAYS, "array of arrays"),
    (Tag::ARRAY_OF_SLICES, "array of slices"),
    (Tag::SLICE, "slice"),
    (Tag::SLICE_OF_SLICES, "slice of slices"),
    (Tag::SLICE_OF_ARRAYS, "slice of arrays"),
    (Tag::STRUCT, "struct"),
    (Tag::MAP, "map"),
    (Tag::FUNC, "func"),
    (Tag::CHAN, "chan"),
    (Tag::BOOL, "bool"),
    (Tag::INT, "int"),
    (Tag::INT8, "int8"),
    (Tag::INT16, "int16"),
    (Tag::INT32, "int32"),
    (Tag::INT64, "int64"),
    (Tag::UINT, "uint"),
    (Tag::UINT8, "uint8"),
    (Tag::UINT16, "uint16"),
    (Tag::UINT32, "uint32"),
    (Tag::UINT64, "uint64"),
    (Tag::UINTPTR, "uintptr"),
    (Tag::FLOAT32, "float32"),
    (Tag::FLOAT64, "float64"),
    (Tag::COMPLEX64, "complex64"),
    (Tag::COMPLEX128, "complex128"),
    (Tag::STRING, "string"),
    (Tag::UNSAFE_POINTER, "unsafe pointer"),
];

/// Rust spellings of the scalar categories.
const RUST_ALIASES: [(&str, Tag); 15] = [
    ("isize", Tag::INT),
    ("i8", Tag::INT8),
    ("i16", Tag::INT16),
    ("i32", Tag::INT32),
    ("i64", Tag::INT64),
    ("usize", Tag::UINT),
    ("u8", Tag::UINT8),
    ("u16", Tag::UINT16),
    ("u32", Tag::UINT32),
    ("u64", Tag::UINT64),
    ("f32", Tag::FLOAT32),
    ("f64", Tag::FLOAT64),
    ("str", Tag::STRING),
    ("function", Tag::FUNC),
    ("channel", Tag::CHAN),
];

static LABEL_TABLE: OnceLock<FxHashMap<String, Tag>> = OnceLock::new();

fn label_table() -> &'static FxHashMap<String, Tag> {
    LABEL_TABLE.get_or_init(|| {
        let mut table = FxHashMap::default();
        for (tag, label) in CATEGORY_LABELS {
            table.insert(normalize_label(label), tag);
        }
        for (alias, tag) in RUST_ALIASES {
            table.insert(normalize_label(alias), tag);
        }
        table
    })
}

/// Lower-case `text` and drop all whitespace.
pub fn normalize_label(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl Tag {
    /// Display label of a single category, `None` for any other value.
    pub fn label(self) -> Option<&'static str> {
        if !self.is_single() {
            return None;
        }
        CATEGORY_LABELS
            .iter()
            .find(|(tag, _)| *tag == self)
            .map(|(_, label)| *label)
    }

    /// Resolve a human label (or a Rust primitive name) to its category.
    pub fn from_label(text: &str) -> Option<Self> {
        label_table().get(&normalize_label(text)).copied()
    }
}
