use super::*;

#[test]
fn leaves_have_no_children() {
    for desc in [
        TypeDesc::nil(),
        TypeDesc::scalar("i32", ScalarKind::Int32),
        TypeDesc::structure("Point"),
        TypeDesc::func("fn()"),
        TypeDesc::other("char"),
    ] {
        assert_eq!(desc.elem(), None, "{desc}");
        assert_eq!(desc.key(), None, "{desc}");
        assert_eq!(desc.value(), None, "{desc}");
        assert_eq!(desc.array_len(), None, "{desc}");
    }
}

#[test]
fn shapes() {
    let int = || TypeDesc::scalar("i32", ScalarKind::Int32);

    assert_eq!(TypeDesc::nil().shape(), Shape::Nil);
    assert_eq!(int().shape(), Shape::Scalar(ScalarKind::Int32));
    assert_eq!(TypeDesc::pointer("&i32", int()).shape(), Shape::Pointer);
    assert_eq!(TypeDesc::array("[i32; 2]", int(), 2).shape(), Shape::Array);
    assert_eq!(TypeDesc::slice("Vec<i32>", int()).shape(), Shape::Slice);
    assert_eq!(TypeDesc::map("HashMap<i32, i32>", int(), int()).shape(), Shape::Map);
    assert_eq!(TypeDesc::chan("Sender<i32>", int()).shape(), Shape::Chan);
    assert_eq!(TypeDesc::structure("Point").shape(), Shape::Struct);
    assert_eq!(TypeDesc::func("fn()").shape(), Shape::Func);
    assert_eq!(TypeDesc::other("char").shape(), Shape::Other);
}

#[test]
fn sequence_children() {
    let elem = TypeDesc::scalar("u8", ScalarKind::Uint8);
    let array = TypeDesc::array("[u8; 4]", elem.clone(), 4);

    assert_eq!(array.elem(), Some(&elem));
    assert_eq!(array.array_len(), Some(4));
    assert_eq!(array.key(), None);
}

#[test]
fn map_children() {
    let key = TypeDesc::scalar("String", ScalarKind::String);
    let value = TypeDesc::slice("Vec<bool>", TypeDesc::scalar("bool", ScalarKind::Bool));
    let map = TypeDesc::map("HashMap<String, Vec<bool>>", key.clone(), value.clone());

    assert_eq!(map.key(), Some(&key));
    assert_eq!(map.value(), Some(&value));
    assert_eq!(map.elem(), None);
}

#[test]
fn renamed_keeps_structure() {
    let slice = TypeDesc::slice("[i32]", TypeDesc::scalar("i32", ScalarKind::Int32));
    let renamed = slice.clone().renamed("&[i32]");

    assert_eq!(renamed.name(), "&[i32]");
    assert_eq!(renamed.shape(), Shape::Slice);
    assert_eq!(renamed.elem(), slice.elem());
    assert_eq!(renamed.to_string(), "&[i32]");
}
