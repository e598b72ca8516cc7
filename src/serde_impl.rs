// src/serde_impl.rs
//
// serde 対応（feature = "serde"）
// テキスト形式 "n" / "n/d" で直列化し、復元時は FromStr を通して再検証する。

use crate::rational::Rational;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct RationalVisitor;

impl<'de> Visitor<'de> for RationalVisitor {
    type Value = Rational;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rational such as \"3\" or \"-2/5\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Rational, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Rational, E> {
        let value = i32::try_from(v).map_err(E::custom)?;
        Ok(Rational::integer(value))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Rational, E> {
        let value = i32::try_from(v).map_err(E::custom)?;
        Ok(Rational::integer(value))
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RationalVisitor)
    }
}
