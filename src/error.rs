// src/error.rs
//
// 有理数型のエラー定義
// 構築・変更・演算・テキスト解析で発生するエラーを統一的に管理

use std::num::ParseIntError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RationalError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RationalError {
    /// 分母が 0 になる構築・変更・除算
    #[error("Division by zero")]
    DivisionByZero,
    /// 約分後の値が格納幅 (i32) に収まらない
    #[error("Rational overflow")]
    Overflow,
    /// 整数部分の解析エラー（変換せずそのまま保持）
    #[error("Invalid integer: {0}")]
    InvalidInteger(#[from] ParseIntError),
}

impl RationalError {
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, RationalError::DivisionByZero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RationalError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(RationalError::Overflow.to_string(), "Rational overflow");

        let err: RationalError = "x".parse::<i64>().unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid integer: "));
        assert!(!err.is_division_by_zero());
    }
}
