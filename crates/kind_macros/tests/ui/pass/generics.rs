//! Type, lifetime and const parameters.

#![allow(dead_code)]

use std::fmt::Debug;

use kind::Reflect;

#[derive(Reflect)]
pub struct Pair<T> {
    pub left: T,
    pub right: T,
}

#[derive(Reflect)]
pub struct Buffer<'a, T: Debug, const N: usize>
where
    T: Clone,
{
    pub items: &'a [T; N],
}

fn main() {
    assert_eq!(Pair::<u8>::type_desc().name(), "Pair<u8>");
    assert_eq!(Pair::<Vec<String>>::type_desc().name(), "Pair<Vec<String>>");
    assert_eq!(Buffer::<'static, i64, 4>::type_desc().name(), "Buffer<i64, 4>");
}
