//! Plain struct with named fields.

#![allow(dead_code)]

use kind::{Kind, Reflect, Shape};

#[derive(Reflect)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

fn main() {
    let desc = Point::type_desc();
    assert_eq!(desc.name(), "Point");
    assert_eq!(desc.shape(), Shape::Struct);
    assert!(Kind::of(Point { x: 1, y: 2 }).is_struct());
}
