// src/rational.rs
//
// 固定幅の既約分数型
//
// 値は常に既約形（分母 > 0、gcd(|分子|, 分母) == 1、0 は 0/1）で保持する。
// すべての変更は `set` を通り、中間計算は倍幅 (Wide) で行ってから格納幅へ戻す。

use crate::error::{RationalError, Result};
use num_integer::Integer;
use tracing::debug;

/// 中間計算に使う倍幅整数
pub type Wide = i64;

/// 既約分数 `numerator / denominator`
///
/// 不変条件:
/// - `denominator > 0`（符号は分子が持つ）
/// - `gcd(|numerator|, denominator) == 1`、分子が 0 なら分母は 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub(crate) numerator: i32,
    pub(crate) denominator: i32,
}

impl Rational {
    pub const ZERO: Self = Rational { numerator: 0, denominator: 1 };
    pub const ONE: Self = Rational { numerator: 1, denominator: 1 };

    /// 分子・分母の組から生成し、即座に既約形へ正規化する
    ///
    /// `denom == 0` なら `DivisionByZero`。
    /// `i32::MIN / -1` のように約分後の値が i32 に収まらない場合は `Overflow`。
    ///
    /// ```rust
    /// use ratio_core::Rational;
    ///
    /// let r = Rational::new(2, -4).unwrap();
    /// assert_eq!((r.numerator(), r.denominator()), (-1, 2));
    /// assert!(Rational::new(1, 0).is_err());
    /// ```
    pub fn new(numer: i32, denom: i32) -> Result<Self> {
        let mut ratio = Self::ZERO;
        ratio.set(Wide::from(numer), Wide::from(denom))?;
        Ok(ratio)
    }

    /// 整数 n/1（約分不要）
    pub const fn integer(value: i32) -> Self {
        Rational { numerator: value, denominator: 1 }
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    /// 現在の分母を保ったまま分子を差し替えて再正規化する
    pub fn set_numerator(&mut self, value: i32) -> Result<()> {
        self.set(Wide::from(value), Wide::from(self.denominator))
    }

    /// 現在の分子を保ったまま分母を差し替えて再正規化する
    pub fn set_denominator(&mut self, value: i32) -> Result<()> {
        self.set(Wide::from(self.numerator), Wide::from(value))
    }

    /// 正規化の基本操作
    ///
    /// 倍幅の分子・分母を gcd で約分し、分母の符号を分子へ移してから格納幅へ戻す。
    /// 失敗した場合 `self` は変更されない。
    pub fn set(&mut self, numer: Wide, denom: Wide) -> Result<()> {
        if denom == 0 {
            debug!(numer, "rejected zero denominator");
            return Err(RationalError::DivisionByZero);
        }
        let (numerator, denominator) = reduce(numer, denom).ok_or_else(|| {
            debug!(numer, denom, "reduced value does not fit the stored width");
            RationalError::Overflow
        })?;
        self.numerator = numerator;
        self.denominator = denominator;
        Ok(())
    }

    /// 逆数 (分母/分子)。ゼロの逆数は `DivisionByZero`
    pub fn recip(self) -> Result<Self> {
        Rational::new(self.denominator, self.numerator)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    pub fn signum(&self) -> i32 {
        self.numerator.signum()
    }

    /// 絶対値。`i32::MIN` の分子は `Overflow`
    pub fn abs(self) -> Result<Self> {
        let numerator = self.numerator.checked_abs().ok_or(RationalError::Overflow)?;
        Ok(Rational { numerator, denominator: self.denominator })
    }

    /// 分母が 1 のときだけ分子を返す
    pub fn to_integer(self) -> Option<i32> {
        if self.is_integer() {
            Some(self.numerator)
        } else {
            None
        }
    }

    /// f64 への変換（精度は落ちる）
    pub fn to_f64(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// ゼロ方向への丸め
    pub fn trunc(self) -> Self {
        Rational::integer(self.numerator / self.denominator)
    }

    /// 負の無限大方向への丸め
    pub fn floor(self) -> Self {
        if self.is_integer() {
            return self;
        }
        Rational::integer(Integer::div_floor(&self.numerator, &self.denominator))
    }

    /// 正の無限大方向への丸め
    pub fn ceil(self) -> Self {
        if self.is_integer() {
            return self;
        }
        Rational::integer(Integer::div_ceil(&self.numerator, &self.denominator))
    }
}

/// 約分して符号を正規化し、格納幅に収まれば返す
fn reduce(numer: Wide, denom: Wide) -> Option<(i32, i32)> {
    // denom != 0 なので common >= 1
    let common = numer.unsigned_abs().gcd(&denom.unsigned_abs());
    let numer_mag = i64::try_from(numer.unsigned_abs() / common).ok()?;
    let denom_mag = denom.unsigned_abs() / common;

    let numer_signed = if (numer < 0) != (denom < 0) { -numer_mag } else { numer_mag };
    Some((i32::try_from(numer_signed).ok()?, i32::try_from(denom_mag).ok()?))
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Rational::integer(value)
    }
}

impl TryFrom<(i32, i32)> for Rational {
    type Error = RationalError;

    fn try_from((numer, denom): (i32, i32)) -> Result<Self> {
        Rational::new(numer, denom)
    }
}
