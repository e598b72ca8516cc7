// src/fmt.rs
//
// テキスト形式
//
// 出力: 分母が 1 なら "分子"、それ以外は "分子/分母"
// 入力: ["-"] 数字 [ "/" ["-"] 数字 ]（最初の '/' で分割し、倍幅で解析してから正規化）

use crate::error::RationalError;
use crate::rational::{Rational, Wide};
use std::fmt;
use std::str::FromStr;

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numerator)?;
        if self.denominator != 1 {
            write!(f, "/{}", self.denominator)?;
        }
        Ok(())
    }
}

/// 文字列からのパース ("7/-2", "10")
impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numer, denom) = match s.split_once('/') {
            Some((numer, denom)) => (numer.parse::<Wide>()?, denom.parse::<Wide>()?),
            None => (s.parse::<Wide>()?, 1),
        };
        let mut ratio = Rational::ZERO;
        ratio.set(numer, denom)?;
        Ok(ratio)
    }
}
