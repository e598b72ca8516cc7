// src/cmp.rs
//
// 比較演算
//
// 浮動小数点を使わず、倍幅の交差乗算 a*d < c*b を唯一の順序プリミティブとする。
// 分母は常に正なので交差乗算で順序が保たれる。
// 等値は既約形が一意であることから、分子・分母のフィールド比較（derive）で判定する。

use crate::rational::{Rational, Wide};
use std::cmp::Ordering;

impl Rational {
    /// 小なり比較: lhs.分子 * rhs.分母 < rhs.分子 * lhs.分母
    pub fn lt_cross(&self, other: &Rational) -> bool {
        // 整数同士の場合は乗算をスキップ
        if self.is_integer() && other.is_integer() {
            return self.numerator < other.numerator;
        }
        Wide::from(self.numerator) * Wide::from(other.denominator)
            < Wide::from(other.numerator) * Wide::from(self.denominator)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.lt_cross(other) {
            Ordering::Less
        } else if other.lt_cross(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
