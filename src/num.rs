// src/num.rs
//
// num-traits との連携と集約演算

use crate::error::Result;
use crate::rational::Rational;
use num_traits::{One, ToPrimitive, Zero};
use std::iter::{Product, Sum};

impl Zero for Rational {
    fn zero() -> Self {
        Rational::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::ONE
    }

    fn is_one(&self) -> bool {
        *self == Rational::ONE
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        // ゼロ方向へ切り捨て
        Some(i64::from(self.numerator / self.denominator))
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.numerator / self.denominator).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(*self))
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::ZERO, |acc, x| acc + x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::ONE, |acc, x| acc * x)
    }
}

/// 途中で失敗しうる総和（最初のエラーで止まる）
pub fn checked_sum<I: IntoIterator<Item = Rational>>(iter: I) -> Result<Rational> {
    iter.into_iter().try_fold(Rational::ZERO, Rational::checked_add)
}

/// 途中で失敗しうる総乗（最初のエラーで止まる）
pub fn checked_product<I: IntoIterator<Item = Rational>>(iter: I) -> Result<Rational> {
    iter.into_iter().try_fold(Rational::ONE, Rational::checked_mul)
}
