//! Type category tags.
//!
//! A [`Tag`] is a `u32` bitset where every bit names one category of the
//! closed taxonomy used by the classifier:
//!
//! - **Nil**: the "no value" sentinel.
//! - **Shapes**: pointer, array, slice, the four nested sequence forms,
//!   struct, map, func, chan.
//! - **Scalars**: bool, string, every fixed-width integer, uintptr,
//!   floats, complex numbers, unsafe pointer.
//!
//! Tags are plain `Copy` values. The checked combinators ([`Tag::try_set`],
//! [`Tag::try_add`], [`Tag::try_delete`]) return a new value, so a rejected
//! call can never leave a half-applied receiver behind.
//!
//! # Example
//!
//! ```
//! use kind_tag::Tag;
//!
//! let tag = Tag::empty().try_add(&[Tag::SLICE, Tag::INT32]).unwrap();
//! assert!(tag.is_complex());
//! assert!(tag.has_all(&[Tag::SLICE, Tag::INT32]));
//! assert_eq!(Tag::from_label("Slice of Slices"), Some(Tag::SLICE_OF_SLICES));
//! ```

mod error;
mod labels;
mod tag;

pub use error::TagError;
pub use labels::normalize_label;
pub use tag::Tag;
