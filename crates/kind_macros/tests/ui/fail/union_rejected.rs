//! Error: Reflect derive only supports structs.

#![allow(dead_code)]

use kind::Reflect;

#[derive(Reflect)]
pub union Bits {
    int: u32,
    float: f32,
}

fn main() {}
