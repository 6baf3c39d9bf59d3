//! Error: Reflect derive only supports structs.

#![allow(dead_code)]

use kind::Reflect;

#[derive(Reflect)]
pub enum Direction {
    North,
    South,
}

fn main() {}
