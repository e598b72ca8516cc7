// src/stream.rs
//
// ストリーム入出力
//
// 入力は空白区切りのトークンを 1 つずつ読み、`FromStr` と同じ規則で正規化する。
// 区切りの空白自体は消費しない（次の読み取りで読み飛ばす）。

use crate::error::RationalError;
use crate::rational::Rational;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Unexpected end of input")]
    UnexpectedEof,
    #[error(transparent)]
    Rational(#[from] RationalError),
}

/// 空白を読み飛ばして次のトークンを返す。入力が尽きていれば `None`
pub fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let mut used = 0;
        let mut finished = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if token.is_empty() {
                    used += 1;
                    continue;
                }
                finished = true;
                break;
            }
            token.push(byte);
            used += 1;
        }
        reader.consume(used);
        if finished {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

impl Rational {
    /// トークンを 1 つ読んで自身を置き換える。失敗時は値を変えない
    pub fn read_from<R: BufRead>(&mut self, reader: &mut R) -> Result<(), ReadError> {
        let token = read_token(reader)?.ok_or(ReadError::UnexpectedEof)?;
        trace!(token = %token, "read rational token");
        *self = token.parse()?;
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}

/// 入力が尽きるまで有理数を読み続けるイテレータ
pub struct RationalReader<R> {
    reader: R,
}

impl<R: BufRead> RationalReader<R> {
    pub fn new(reader: R) -> Self {
        RationalReader { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for RationalReader<R> {
    type Item = Result<Rational, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = match read_token(&mut self.reader) {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(e) => return Some(Err(e.into())),
        };
        trace!(token = %token, "read rational token");
        Some(token.parse().map_err(ReadError::from))
    }
}
