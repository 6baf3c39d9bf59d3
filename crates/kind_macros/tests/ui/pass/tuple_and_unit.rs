//! Tuple and unit structs.

#![allow(dead_code)]

use kind::{Reflect, Shape};

#[derive(Reflect)]
pub struct Meters(pub f64);

#[derive(Reflect)]
pub struct Empty;

fn main() {
    assert_eq!(Meters::type_desc().name(), "Meters");
    assert_eq!(Empty::type_desc().shape(), Shape::Struct);
}
