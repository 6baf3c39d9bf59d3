use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_category_is_single() {
    let categories: Vec<Tag> = Tag::categories().collect();
    assert_eq!(categories.len(), 30);

    for tag in categories {
        assert!(tag.is_single(), "{tag:?} should be single");
        assert!(!tag.is_complex(), "{tag:?} should not be complex");
        assert!(tag.is_valid());
    }
}

#[test]
fn categories_are_in_bit_order() {
    let bits: Vec<u32> = Tag::categories().map(|tag| tag.bits()).collect();
    let expected: Vec<u32> = (0..30).map(|shift| 1 << shift).collect();
    assert_eq!(bits, expected);
}

#[test]
fn pairs_are_complex() {
    let categories: Vec<Tag> = Tag::categories().collect();
    for (i, &a) in categories.iter().enumerate() {
        for &b in &categories[i + 1..] {
            let pair = a | b;
            assert!(pair.is_complex(), "{pair:?} should be complex");
            assert!(!pair.is_single(), "{pair:?} should not be single");
        }
    }
}

#[test]
fn empty_is_valid_but_neither_single_nor_complex() {
    let tag = Tag::empty();
    assert!(tag.is_valid());
    assert!(!tag.is_single());
    assert!(!tag.is_complex());
    assert_eq!(Tag::default(), tag);
}

#[test]
fn overflow_bit_invalidates() {
    let overflow = Tag::from_bits_retain(Tag::OVERFLOW);
    assert!(!overflow.is_valid());
    assert!(!overflow.is_single());

    let damaged = Tag::from_bits_retain(Tag::INT.bits() | Tag::OVERFLOW);
    assert!(!damaged.is_valid());
    assert!(damaged.is_complex());
}

#[test]
fn contains_rejects_zero_flag() {
    assert_eq!(Tag::empty().try_contains(Tag::empty()), Err(TagError::ZeroFlag));
    assert_eq!(Tag::INT.try_contains(Tag::empty()), Err(TagError::ZeroFlag));

    let damaged = Tag::from_bits_retain(Tag::OVERFLOW);
    assert_eq!(damaged.try_contains(Tag::empty()), Err(TagError::ZeroFlag));
}

#[test]
fn contains_rejects_invalid_flag() {
    let bad = Tag::from_bits_retain(Tag::OVERFLOW);
    assert_eq!(
        Tag::INT.try_contains(bad),
        Err(TagError::InvalidFlag { bits: Tag::OVERFLOW })
    );
}

#[test]
fn contains_reports_damaged_receiver() {
    let bits = Tag::SLICE.bits() | Tag::OVERFLOW;
    let damaged = Tag::from_bits_retain(bits);
    assert_eq!(damaged.try_contains(Tag::SLICE), Err(TagError::Damaged { bits }));
    assert!(!damaged.has(Tag::SLICE));
}

#[test]
fn contains_requires_every_bit() {
    let tag = Tag::SLICE | Tag::INT;
    assert_eq!(tag.try_contains(Tag::SLICE), Ok(true));
    assert_eq!(tag.try_contains(Tag::SLICE | Tag::INT), Ok(true));
    assert_eq!(tag.try_contains(Tag::SLICE | Tag::BOOL), Ok(false));
    assert_eq!(tag.try_contains(Tag::MAP), Ok(false));
}

#[test]
fn is_requires_single_match() {
    assert!(Tag::INT.is(Tag::INT));
    assert!(!(Tag::INT | Tag::SLICE).is(Tag::INT));
    assert!(!Tag::INT.is(Tag::UINT));
}

#[test]
fn set_discards_previous_value() {
    let tag = Tag::MAP | Tag::STRING;
    assert_eq!(tag.try_set(&[Tag::INT]), Ok(Tag::INT));
    assert_eq!(tag.try_set(&[]), Ok(Tag::empty()));
}

#[test]
fn set_ignores_duplicates_and_order() {
    let a = Tag::empty().try_set(&[Tag::INT, Tag::INT, Tag::SLICE]);
    let b = Tag::NIL.try_set(&[Tag::SLICE, Tag::INT]);
    assert_eq!(a, b);
    assert_eq!(a, Ok(Tag::INT | Tag::SLICE));
}

#[test]
fn set_rejects_invalid_flag() {
    let bad = Tag::from_bits_retain(Tag::OVERFLOW << 1);
    let tag = Tag::BOOL;
    assert_eq!(
        tag.try_set(&[Tag::INT, bad]),
        Err(TagError::InvalidFlag { bits: bad.bits() })
    );
    // The receiver is a value; it is never touched.
    assert_eq!(tag, Tag::BOOL);
}

#[test]
fn add_is_idempotent() {
    let tag = Tag::SLICE;
    let once = tag.try_add(&[Tag::INT32]);
    let twice = tag.try_add(&[Tag::INT32, Tag::INT32, Tag::SLICE]);
    assert_eq!(once, Ok(Tag::SLICE | Tag::INT32));
    assert_eq!(once, twice);
}

#[test]
fn add_accepts_zero_and_compound_flags() {
    assert_eq!(Tag::BOOL.try_add(&[Tag::empty()]), Ok(Tag::BOOL));
    assert_eq!(
        Tag::BOOL.try_add(&[Tag::SLICE | Tag::INT]),
        Ok(Tag::BOOL | Tag::SLICE | Tag::INT)
    );
}

#[test]
fn add_stops_at_first_invalid_flag() {
    let bad = Tag::from_bits_retain(u32::MAX);
    let result = Tag::empty().try_add(&[Tag::INT, bad, Tag::BOOL]);
    assert_eq!(result, Err(TagError::InvalidFlag { bits: u32::MAX }));
}

#[test]
fn delete_removes_present_flags_only() {
    let tag = Tag::SLICE | Tag::INT;
    assert_eq!(tag.try_delete(&[Tag::INT]), Ok(Tag::SLICE));
    assert_eq!(tag.try_delete(&[Tag::MAP]), Ok(tag));
    assert_eq!(tag.try_delete(&[Tag::INT, Tag::SLICE]), Ok(Tag::empty()));
}

#[test]
fn delete_compound_flag_needs_every_bit() {
    let tag = Tag::SLICE | Tag::INT;

    assert_eq!(tag.try_delete(&[Tag::INT | Tag::MAP]), Ok(tag));
    assert_eq!(tag.try_delete(&[Tag::SLICE | Tag::INT]), Ok(Tag::empty()));
    assert_eq!(
        (tag | Tag::MAP).try_delete(&[Tag::INT | Tag::MAP]),
        Ok(Tag::SLICE)
    );
    // The first flag takes INT away, so the second one is no longer whole.
    assert_eq!(
        tag.try_delete(&[Tag::INT, Tag::SLICE | Tag::INT]),
        Ok(Tag::SLICE)
    );
}

#[test]
fn delete_rejects_invalid_flag() {
    let bad = Tag::from_bits_retain(Tag::OVERFLOW);
    assert_eq!(
        Tag::INT.try_delete(&[bad]),
        Err(TagError::InvalidFlag { bits: Tag::OVERFLOW })
    );
}

#[test]
fn all_and_any() {
    let tag = Tag::MAP | Tag::STRING | Tag::INT;

    assert!(tag.has_all(&[]));
    assert!(tag.has_all(&[Tag::MAP, Tag::INT]));
    assert!(!tag.has_all(&[Tag::MAP, Tag::BOOL]));

    assert!(!tag.has_any(&[]));
    assert!(tag.has_any(&[Tag::BOOL, Tag::STRING]));
    assert!(!tag.has_any(&[Tag::BOOL, Tag::FLOAT64]));

    // Zero flags are never contained.
    assert!(!tag.has_all(&[Tag::empty()]));
}

#[test]
fn predicates_match_contains() {
    let tag = Tag::POINTER | Tag::SLICE_OF_ARRAYS | Tag::UINT16;
    assert!(tag.is_pointer());
    assert!(tag.is_slice_of_arrays());
    assert!(tag.is_uint16());
    assert!(!tag.is_slice());
    assert!(!tag.is_array());
    assert!(!tag.is_nil());
    assert!(!tag.is_uint());

    assert!(Tag::FUNC.is_function());
    assert!(Tag::CHAN.is_channel());
    assert!(Tag::UNSAFE_POINTER.is_unsafe_pointer());
    assert!(Tag::COMPLEX128.is_complex128());
}

#[test]
fn derived_groups() {
    assert!(Tag::ANY_INT.contains(Tag::ANY_UINT));
    assert!(!Tag::ANY_INT.contains(Tag::UINTPTR));
    assert_eq!(Tag::NESTED_SEQUENCES.bits().count_ones(), 4);
    assert_eq!(Tag::ANY_FLOAT, Tag::FLOAT32 | Tag::FLOAT64);
}

#[test]
fn display() {
    assert_eq!(Tag::empty().to_string(), "empty");
    assert_eq!(Tag::SLICE_OF_SLICES.to_string(), "slice of slices");
    assert_eq!((Tag::SLICE | Tag::INT32).to_string(), "slice | int32");
    assert_eq!(
        Tag::from_bits_retain(Tag::OVERFLOW).to_string(),
        "invalid(0x40000000)"
    );
}
