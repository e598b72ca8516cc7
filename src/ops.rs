// src/ops.rs
//
// 四則演算・符号・インクリメント/デクリメント
//
// 二項演算はすべて複合代入形（checked_*_assign）を基本とし、
// 非破壊形は左辺をコピーしてから複合代入形を呼ぶ。
// 演算子トレイトは checked 版に委譲し、エラー時は整数の `/` と同じく panic する。

use crate::error::{RationalError, Result};
use crate::rational::{Rational, Wide};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Rational {
    /// 加算: (a/b) + (c/d) = (a*d + c*b) / (b*d)
    pub fn checked_add_assign(&mut self, rhs: Rational) -> Result<()> {
        let left = Wide::from(self.numerator) * Wide::from(rhs.denominator);
        let right = Wide::from(rhs.numerator) * Wide::from(self.denominator);
        let numer = left.checked_add(right).ok_or(RationalError::Overflow)?;
        let denom = Wide::from(self.denominator) * Wide::from(rhs.denominator);
        self.set(numer, denom)
    }

    /// 乗算: (a/b) * (c/d) = (a*c) / (b*d)
    pub fn checked_mul_assign(&mut self, rhs: Rational) -> Result<()> {
        let numer = Wide::from(self.numerator) * Wide::from(rhs.numerator);
        let denom = Wide::from(self.denominator) * Wide::from(rhs.denominator);
        self.set(numer, denom)
    }

    /// 減算: lhs + (-rhs)
    pub fn checked_sub_assign(&mut self, rhs: Rational) -> Result<()> {
        self.checked_add_assign(rhs.checked_neg()?)
    }

    /// 除算: lhs * (rhs の逆数)。ゼロで割ると `DivisionByZero`
    pub fn checked_div_assign(&mut self, rhs: Rational) -> Result<()> {
        self.checked_mul_assign(rhs.recip()?)
    }

    pub fn checked_add(self, rhs: Rational) -> Result<Self> {
        let mut tmp = self;
        tmp.checked_add_assign(rhs)?;
        Ok(tmp)
    }

    pub fn checked_sub(self, rhs: Rational) -> Result<Self> {
        let mut tmp = self;
        tmp.checked_sub_assign(rhs)?;
        Ok(tmp)
    }

    pub fn checked_mul(self, rhs: Rational) -> Result<Self> {
        let mut tmp = self;
        tmp.checked_mul_assign(rhs)?;
        Ok(tmp)
    }

    pub fn checked_div(self, rhs: Rational) -> Result<Self> {
        let mut tmp = self;
        tmp.checked_div_assign(rhs)?;
        Ok(tmp)
    }

    /// 単項プラス（恒等）
    pub fn pos(self) -> Self {
        self
    }

    /// 単項マイナス: (-分子, 分母) から新しい値を作る
    pub fn checked_neg(self) -> Result<Self> {
        let mut negated = Rational::ZERO;
        negated.set(-Wide::from(self.numerator), Wide::from(self.denominator))?;
        Ok(negated)
    }

    /// 前置インクリメント: 分子に分母を足す
    ///
    /// gcd(n + d, d) == gcd(n, d) == 1 なので再約分は不要。
    pub fn inc(&mut self) -> Result<&mut Self> {
        self.numerator = self
            .numerator
            .checked_add(self.denominator)
            .ok_or(RationalError::Overflow)?;
        Ok(self)
    }

    /// 前置デクリメント: 分子から分母を引く
    pub fn dec(&mut self) -> Result<&mut Self> {
        self.numerator = self
            .numerator
            .checked_sub(self.denominator)
            .ok_or(RationalError::Overflow)?;
        Ok(self)
    }

    /// 後置インクリメント: 変更前の値を返す
    pub fn post_inc(&mut self) -> Result<Self> {
        let before = *self;
        self.inc()?;
        Ok(before)
    }

    /// 後置デクリメント: 変更前の値を返す
    pub fn post_dec(&mut self) -> Result<Self> {
        let before = *self;
        self.dec()?;
        Ok(before)
    }
}

fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $checked:ident) => {
        impl $OpAssign for Rational {
            fn $op_assign(&mut self, rhs: Rational) {
                or_panic(self.$checked(rhs))
            }
        }

        impl $OpAssign<&Rational> for Rational {
            fn $op_assign(&mut self, rhs: &Rational) {
                or_panic(self.$checked(*rhs))
            }
        }

        impl $Op for Rational {
            type Output = Rational;

            fn $op(mut self, rhs: Rational) -> Rational {
                self.$op_assign(rhs);
                self
            }
        }

        impl $Op<&Rational> for Rational {
            type Output = Rational;

            fn $op(mut self, rhs: &Rational) -> Rational {
                self.$op_assign(rhs);
                self
            }
        }

        impl $Op<Rational> for &Rational {
            type Output = Rational;

            fn $op(self, rhs: Rational) -> Rational {
                (*self).$op(rhs)
            }
        }

        impl $Op<&Rational> for &Rational {
            type Output = Rational;

            fn $op(self, rhs: &Rational) -> Rational {
                (*self).$op(rhs)
            }
        }
    };
}

binary_op!(Add, add, AddAssign, add_assign, checked_add_assign);
binary_op!(Sub, sub, SubAssign, sub_assign, checked_sub_assign);
binary_op!(Mul, mul, MulAssign, mul_assign, checked_mul_assign);
binary_op!(Div, div, DivAssign, div_assign, checked_div_assign);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        or_panic(self.checked_neg())
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -*self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i32, d: i32) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn test_addition() {
        assert_eq!(r(1, 2) + r(1, 3), r(5, 6));
        assert_eq!(r(1, 2) + r(-1, 2), Rational::ZERO);
        assert_eq!(&r(1, 4) + &r(1, 4), r(1, 2));

        let mut acc = r(1, 6);
        acc += r(1, 3);
        assert_eq!(acc, r(1, 2));
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(r(1, 2) - r(1, 3), r(1, 6));
        assert_eq!(r(1, 3) - r(1, 2), r(-1, 6));

        let mut acc = Rational::ONE;
        acc -= &r(1, 4);
        assert_eq!(acc, r(3, 4));
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(r(1, 2) * r(1, 3), r(1, 6));
        assert_eq!(r(2, 3) * r(3, 2), Rational::ONE);
        assert_eq!(r(-2, 3) * r(3, 4), r(-1, 2));
    }

    #[test]
    fn test_division() {
        assert_eq!(r(1, 2) / r(1, 2), Rational::ONE);
        assert_eq!(r(1, 2) / r(-1, 4), Rational::integer(-2));
        assert_eq!(r(3, 4).checked_div(Rational::ZERO), Err(RationalError::DivisionByZero));

        let mut acc = r(5, 1);
        assert_eq!(acc.checked_div_assign(Rational::ZERO), Err(RationalError::DivisionByZero));
        assert_eq!(acc, r(5, 1));
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_division_by_zero_panics() {
        let _ = Rational::ONE / Rational::ZERO;
    }

    #[test]
    fn test_wide_intermediates() {
        // 分母の積は i32 を超えるが、約分後は収まる
        let big = r(1, 46_341);
        let sum = big + big;
        assert_eq!(sum, r(2, 46_341));

        let product = r(46_340, 46_341) * r(46_341, 46_340);
        assert_eq!(product, Rational::ONE);

        let max = Rational::integer(i32::MAX);
        assert_eq!(max.checked_add(Rational::ONE), Err(RationalError::Overflow));
        assert_eq!(max.checked_mul(max), Err(RationalError::Overflow));
    }

    #[test]
    fn test_sum_overflows_on_narrowing() {
        let min = Rational::integer(i32::MIN);
        let min_over_max = Rational::new(i32::MIN, i32::MAX).unwrap();
        assert!(min.checked_add(min_over_max).is_err());
    }

    #[test]
    fn test_unary() {
        let x = r(-3, 7);
        assert_eq!(x.pos(), x);
        assert_eq!(-x, r(3, 7));
        assert_eq!(-&x, r(3, 7));
        assert_eq!(-Rational::ZERO, Rational::ZERO);
        assert_eq!(Rational::integer(i32::MIN).checked_neg(), Err(RationalError::Overflow));
    }

    #[test]
    fn test_increment_decrement() {
        let mut x = r(1, 2);
        x.inc().unwrap();
        assert_eq!((x.numerator(), x.denominator()), (3, 2));

        let before = x.post_inc().unwrap();
        assert_eq!(before, r(3, 2));
        assert_eq!(x, r(5, 2));

        x.dec().unwrap().dec().unwrap();
        assert_eq!(x, r(1, 2));

        let before = x.post_dec().unwrap();
        assert_eq!(before, r(1, 2));
        assert_eq!(x, r(-1, 2));

        let mut max = Rational::integer(i32::MAX);
        assert_eq!(max.post_inc(), Err(RationalError::Overflow));
        assert_eq!(max, Rational::integer(i32::MAX));
    }
}
