// src/lib.rs
//
// 固定幅の既約分数型 `Rational`
//
// 分子・分母は i32 で保持し、常に既約形（分母 > 0）に正規化される。
// 加算・乗算・比較の中間計算は倍幅 (i64) で行う。

pub mod error;
pub mod rational;
pub mod stream;

mod cmp;
mod fmt;
mod num;
mod ops;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{RationalError, Result};
pub use num::{checked_product, checked_sum};
pub use rational::{Rational, Wide};
pub use stream::{read_token, RationalReader, ReadError};
