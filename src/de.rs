//! Streaming JSON decoding.
//!
//! This module provides the [`StreamDecoder`], a single-pass reader that
//! pulls one complete JSON value at a time from a byte stream, tolerating
//! any amount of whitespace between values (newline-delimited JSON is the
//! common case).
//!
//! ## Overview
//!
//! - **Two products**: [`StreamDecoder::next_raw`] returns the exact
//!   source text of the next value as a [`RawValue`] without building a
//!   tree; [`StreamDecoder::next_value`] parses the next value into a
//!   [`Value`](crate::Value) tree. Both leave the stream positioned
//!   immediately after the value they consumed.
//! - **Bounded memory**: input is read in chunks and consumed bytes are
//!   dropped between top-level values, so memory use is bounded by the
//!   largest single value, not the whole stream.
//! - **Error reporting**: syntax errors carry the 1-based line and column
//!   of the offending byte. An error is fatal; the decoder must not be
//!   used again after returning one.
//!
//! ## Usage
//!
//! ```rust
//! use jsonfmt::StreamDecoder;
//!
//! let input = "{\"a\":1}\n{\"b\":2}\n";
//! let mut decoder = StreamDecoder::new(input.as_bytes());
//!
//! let first = decoder.next_raw().unwrap().unwrap();
//! assert_eq!(first.as_str(), "{\"a\":1}");
//!
//! let second = decoder.next_raw().unwrap().unwrap();
//! assert_eq!(second.as_str(), "{\"b\":2}");
//!
//! assert!(decoder.next_raw().unwrap().is_none());
//! ```

use crate::{Error, Map, Number, Result, Value};
use std::fmt;
use std::io::{ErrorKind, Read};

/// Bytes requested from the underlying reader per refill.
const READ_CHUNK: usize = 8 * 1024;

/// Maximum nesting depth for arrays and objects.
///
/// Parsing and rendering both recurse, so unbounded nesting would
/// overflow the stack long before memory runs out.
const MAX_DEPTH: usize = 128;

/// The exact source text of one complete, syntactically valid JSON value.
///
/// Produced by [`StreamDecoder::next_raw`]. Carries no semantic
/// structure; string contents, number literals and escape sequences are
/// untouched bytes from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValue(String);

impl RawValue {
    /// Returns the value's source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper, returning the source text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RawValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A streaming JSON decoder over any [`Read`] implementation.
///
/// Yields one value per call, in input order. The sequence is finite and
/// non-restartable; after the first error the decoder is exhausted.
pub struct StreamDecoder<R> {
    reader: R,
    buf: Vec<u8>,
    pos: usize,
    line: usize,
    col: usize,
    reader_done: bool,
}

impl<R: Read> StreamDecoder<R> {
    /// Creates a decoder reading from `reader`.
    pub fn new(reader: R) -> Self {
        StreamDecoder {
            reader,
            buf: Vec::with_capacity(READ_CHUNK),
            pos: 0,
            line: 1,
            col: 1,
            reader_done: false,
        }
    }

    /// Returns the source text of the next value, or `Ok(None)` once only
    /// whitespace remains.
    ///
    /// # Errors
    ///
    /// Returns a [`Error::Syntax`] for malformed JSON (with position) or
    /// [`Error::Io`] if the underlying reader fails.
    pub fn next_raw(&mut self) -> Result<Option<RawValue>> {
        if !self.begin_value()? {
            return Ok(None);
        }
        self.scan_value(0)?;
        let text = std::str::from_utf8(&self.buf[..self.pos])
            .map_err(|_| Error::syntax(self.line, self.col, "invalid UTF-8 in input"))?;
        Ok(Some(RawValue(text.to_string())))
    }

    /// Parses the next value into a [`Value`] tree, or returns `Ok(None)`
    /// once only whitespace remains.
    ///
    /// String escapes are decoded and duplicate object keys collapse to
    /// their last occurrence.
    ///
    /// # Errors
    ///
    /// Returns a [`Error::Syntax`] for malformed JSON (with position) or
    /// [`Error::Io`] if the underlying reader fails.
    pub fn next_value(&mut self) -> Result<Option<Value>> {
        if !self.begin_value()? {
            return Ok(None);
        }
        self.parse_value(0).map(Some)
    }

    /// Skips leading whitespace and drops already-consumed bytes so the
    /// next value starts at the head of the buffer. Returns `false` at a
    /// clean end of stream.
    fn begin_value(&mut self) -> Result<bool> {
        self.skip_whitespace()?;
        self.buf.drain(..self.pos);
        self.pos = 0;
        Ok(self.peek()?.is_some())
    }

    fn fill(&mut self) -> Result<()> {
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            match self.reader.read(&mut chunk) {
                Ok(0) => {
                    self.reader_done = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.buf.extend_from_slice(&chunk[..n]);
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::io(e)),
            }
        }
    }

    fn peek(&mut self) -> Result<Option<u8>> {
        self.peek_at(0)
    }

    fn peek_at(&mut self, offset: usize) -> Result<Option<u8>> {
        while self.pos + offset >= self.buf.len() {
            if self.reader_done {
                return Ok(None);
            }
            self.fill()?;
        }
        Ok(Some(self.buf[self.pos + offset]))
    }

    fn advance(&mut self) -> Result<Option<u8>> {
        let b = self.peek()?;
        if let Some(b) = b {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else if b & 0xC0 != 0x80 {
                // UTF-8 continuation bytes don't advance the column
                self.col += 1;
            }
        }
        Ok(b)
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        while let Some(b) = self.peek()? {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => {
                    self.advance()?;
                }
                _ => break,
            }
        }
        Ok(())
    }

    fn err_here(&self, msg: impl Into<String>) -> Error {
        Error::syntax(self.line, self.col, msg)
    }

    fn unexpected_eof(&self) -> Error {
        self.err_here("unexpected end of input")
    }

    // ------------------------------------------------------------------
    // Scanning (raw path): validate and consume without building a tree.
    // ------------------------------------------------------------------

    fn scan_value(&mut self, depth: usize) -> Result<()> {
        match self.peek()? {
            None => Err(self.unexpected_eof()),
            Some(b'{') => self.scan_object(depth),
            Some(b'[') => self.scan_array(depth),
            Some(b'"') => self.scan_string(),
            Some(b't') => self.expect_keyword("true"),
            Some(b'f') => self.expect_keyword("false"),
            Some(b'n') => self.expect_keyword("null"),
            Some(b'-' | b'0'..=b'9') => self.scan_number(),
            Some(_) => Err(self.err_here("expected a JSON value")),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth >= MAX_DEPTH {
            return Err(self.err_here("maximum nesting depth exceeded"));
        }
        Ok(())
    }

    fn scan_object(&mut self, depth: usize) -> Result<()> {
        self.check_depth(depth)?;
        self.advance()?; // consume '{'
        self.skip_whitespace()?;
        if self.peek()? == Some(b'}') {
            self.advance()?;
            return Ok(());
        }
        loop {
            if self.peek()? != Some(b'"') {
                return Err(match self.peek()? {
                    None => self.unexpected_eof(),
                    Some(_) => self.err_here("expected object key"),
                });
            }
            self.scan_string()?;
            self.skip_whitespace()?;
            match self.peek()? {
                Some(b':') => {
                    self.advance()?;
                }
                None => return Err(self.unexpected_eof()),
                Some(_) => return Err(self.err_here("expected ':' after object key")),
            }
            self.skip_whitespace()?;
            self.scan_value(depth + 1)?;
            self.skip_whitespace()?;
            match self.peek()? {
                Some(b',') => {
                    self.advance()?;
                    self.skip_whitespace()?;
                }
                Some(b'}') => {
                    self.advance()?;
                    return Ok(());
                }
                None => return Err(self.unexpected_eof()),
                Some(_) => return Err(self.err_here("expected ',' or '}' in object")),
            }
        }
    }

    fn scan_array(&mut self, depth: usize) -> Result<()> {
        self.check_depth(depth)?;
        self.advance()?; // consume '['
        self.skip_whitespace()?;
        if self.peek()? == Some(b']') {
            self.advance()?;
            return Ok(());
        }
        loop {
            self.scan_value(depth + 1)?;
            self.skip_whitespace()?;
            match self.peek()? {
                Some(b',') => {
                    self.advance()?;
                    self.skip_whitespace()?;
                }
                Some(b']') => {
                    self.advance()?;
                    return Ok(());
                }
                None => return Err(self.unexpected_eof()),
                Some(_) => return Err(self.err_here("expected ',' or ']' in array")),
            }
        }
    }

    /// Consumes a string literal, validating escapes but keeping the raw
    /// bytes in place.
    fn scan_string(&mut self) -> Result<()> {
        self.advance()?; // consume opening quote
        loop {
            match self.advance()? {
                None => return Err(self.err_here("unterminated string")),
                Some(b'"') => return Ok(()),
                Some(b'\\') => match self.advance()? {
                    None => return Err(self.err_here("unterminated string")),
                    Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => {}
                    Some(b'u') => {
                        self.read_hex4()?;
                    }
                    Some(_) => return Err(self.err_here("invalid escape sequence")),
                },
                Some(b) if b < 0x20 => {
                    return Err(self.err_here("control character in string"));
                }
                Some(_) => {}
            }
        }
    }

    fn scan_number(&mut self) -> Result<()> {
        if self.peek()? == Some(b'-') {
            self.advance()?;
        }
        // Integer part: a lone zero, or a nonzero digit run
        match self.peek()? {
            Some(b'0') => {
                self.advance()?;
                if matches!(self.peek()?, Some(b'0'..=b'9')) {
                    return Err(self.err_here("leading zeros are not allowed"));
                }
            }
            Some(b'1'..=b'9') => {
                while matches!(self.peek()?, Some(b'0'..=b'9')) {
                    self.advance()?;
                }
            }
            None => return Err(self.unexpected_eof()),
            Some(_) => return Err(self.err_here("expected digit in number")),
        }
        // Optional fraction
        if self.peek()? == Some(b'.') {
            self.advance()?;
            if !matches!(self.peek()?, Some(b'0'..=b'9')) {
                return Err(self.err_here("expected digit after decimal point"));
            }
            while matches!(self.peek()?, Some(b'0'..=b'9')) {
                self.advance()?;
            }
        }
        // Optional exponent
        if matches!(self.peek()?, Some(b'e' | b'E')) {
            self.advance()?;
            if matches!(self.peek()?, Some(b'+' | b'-')) {
                self.advance()?;
            }
            if !matches!(self.peek()?, Some(b'0'..=b'9')) {
                return Err(self.err_here("expected digit in exponent"));
            }
            while matches!(self.peek()?, Some(b'0'..=b'9')) {
                self.advance()?;
            }
        }
        Ok(())
    }

    fn expect_keyword(&mut self, keyword: &'static str) -> Result<()> {
        let (line, col) = (self.line, self.col);
        for expected in keyword.bytes() {
            match self.advance()? {
                Some(b) if b == expected => {}
                _ => {
                    return Err(Error::syntax(
                        line,
                        col,
                        format!("invalid literal, expected '{}'", keyword),
                    ))
                }
            }
        }
        Ok(())
    }

    fn read_hex4(&mut self) -> Result<u16> {
        let mut code: u16 = 0;
        for _ in 0..4 {
            let digit = match self.advance()? {
                Some(b @ b'0'..=b'9') => b - b'0',
                Some(b @ b'a'..=b'f') => b - b'a' + 10,
                Some(b @ b'A'..=b'F') => b - b'A' + 10,
                _ => {
                    return Err(self.err_here("invalid unicode escape, expected 4 hex digits"));
                }
            };
            code = code << 4 | digit as u16;
        }
        Ok(code)
    }

    // ------------------------------------------------------------------
    // Parsing (tree path): build a Value, unescaping as we go.
    // ------------------------------------------------------------------

    fn parse_value(&mut self, depth: usize) -> Result<Value> {
        match self.peek()? {
            None => Err(self.unexpected_eof()),
            Some(b'{') => self.parse_object(depth),
            Some(b'[') => self.parse_array(depth),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b't') => {
                self.expect_keyword("true")?;
                Ok(Value::Bool(true))
            }
            Some(b'f') => {
                self.expect_keyword("false")?;
                Ok(Value::Bool(false))
            }
            Some(b'n') => {
                self.expect_keyword("null")?;
                Ok(Value::Null)
            }
            Some(b'-' | b'0'..=b'9') => self.parse_number().map(Value::Number),
            Some(_) => Err(self.err_here("expected a JSON value")),
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value> {
        self.check_depth(depth)?;
        self.advance()?; // consume '{'
        self.skip_whitespace()?;
        let mut map = Map::new();
        if self.peek()? == Some(b'}') {
            self.advance()?;
            return Ok(Value::Object(map));
        }
        loop {
            if self.peek()? != Some(b'"') {
                return Err(match self.peek()? {
                    None => self.unexpected_eof(),
                    Some(_) => self.err_here("expected object key"),
                });
            }
            let key = self.parse_string()?;
            self.skip_whitespace()?;
            match self.peek()? {
                Some(b':') => {
                    self.advance()?;
                }
                None => return Err(self.unexpected_eof()),
                Some(_) => return Err(self.err_here("expected ':' after object key")),
            }
            self.skip_whitespace()?;
            let value = self.parse_value(depth + 1)?;
            // Duplicate keys: last occurrence wins
            map.insert(key, value);
            self.skip_whitespace()?;
            match self.peek()? {
                Some(b',') => {
                    self.advance()?;
                    self.skip_whitespace()?;
                }
                Some(b'}') => {
                    self.advance()?;
                    return Ok(Value::Object(map));
                }
                None => return Err(self.unexpected_eof()),
                Some(_) => return Err(self.err_here("expected ',' or '}' in object")),
            }
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value> {
        self.check_depth(depth)?;
        self.advance()?; // consume '['
        self.skip_whitespace()?;
        let mut elements = Vec::new();
        if self.peek()? == Some(b']') {
            self.advance()?;
            return Ok(Value::Array(elements));
        }
        loop {
            elements.push(self.parse_value(depth + 1)?);
            self.skip_whitespace()?;
            match self.peek()? {
                Some(b',') => {
                    self.advance()?;
                    self.skip_whitespace()?;
                }
                Some(b']') => {
                    self.advance()?;
                    return Ok(Value::Array(elements));
                }
                None => return Err(self.unexpected_eof()),
                Some(_) => return Err(self.err_here("expected ',' or ']' in array")),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        self.advance()?; // consume opening quote
        let mut out: Vec<u8> = Vec::new();
        loop {
            match self.advance()? {
                None => return Err(self.err_here("unterminated string")),
                Some(b'"') => {
                    return String::from_utf8(out)
                        .map_err(|_| self.err_here("invalid UTF-8 in string"));
                }
                Some(b'\\') => match self.advance()? {
                    None => return Err(self.err_here("unterminated string")),
                    Some(b'"') => out.push(b'"'),
                    Some(b'\\') => out.push(b'\\'),
                    Some(b'/') => out.push(b'/'),
                    Some(b'b') => out.push(0x08),
                    Some(b'f') => out.push(0x0C),
                    Some(b'n') => out.push(b'\n'),
                    Some(b'r') => out.push(b'\r'),
                    Some(b't') => out.push(b'\t'),
                    Some(b'u') => {
                        let ch = self.parse_unicode_escape()?;
                        let mut utf8 = [0u8; 4];
                        out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
                    }
                    Some(_) => return Err(self.err_here("invalid escape sequence")),
                },
                Some(b) if b < 0x20 => {
                    return Err(self.err_here("control character in string"));
                }
                Some(b) => out.push(b),
            }
        }
    }

    fn parse_number(&mut self) -> Result<Number> {
        let start = self.pos;
        let (line, col) = (self.line, self.col);
        self.scan_number()?;
        let text = std::str::from_utf8(&self.buf[start..self.pos])
            .map_err(|_| Error::syntax(line, col, "invalid number"))?;
        if !text.bytes().any(|b| matches!(b, b'.' | b'e' | b'E')) {
            if let Ok(i) = text.parse::<i64>() {
                return Ok(Number::Integer(i));
            }
        }
        let f: f64 = text
            .parse()
            .map_err(|_| Error::syntax(line, col, "invalid number"))?;
        if !f.is_finite() {
            return Err(Error::syntax(line, col, "number out of range"));
        }
        Ok(Number::Float(f))
    }

    /// Decodes `\uXXXX` (the `\u` is already consumed), combining
    /// surrogate pairs. Unpaired surrogates decode to U+FFFD rather than
    /// failing, matching the common lenient decoder behavior.
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let first = self.read_hex4()?;
        match first {
            0xD800..=0xDBFF => {
                // High surrogate: only a \uXXXX low surrogate right after
                // can complete it
                if self.peek()? == Some(b'\\') && self.peek_at(1)? == Some(b'u') {
                    self.advance()?;
                    self.advance()?;
                    let second = self.read_hex4()?;
                    if (0xDC00..=0xDFFF).contains(&second) {
                        let combined =
                            0x10000 + ((first as u32 - 0xD800) << 10) + (second as u32 - 0xDC00);
                        return Ok(char::from_u32(combined).unwrap_or('\u{FFFD}'));
                    }
                    Ok(char::from_u32(second as u32).unwrap_or('\u{FFFD}'))
                } else {
                    Ok('\u{FFFD}')
                }
            }
            0xDC00..=0xDFFF => Ok('\u{FFFD}'),
            code => Ok(char::from_u32(code as u32).unwrap_or('\u{FFFD}')),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reader that returns one byte per read call, forcing refills.
    struct TrickleReader<'a> {
        data: &'a [u8],
        pos: usize,
    }

    impl Read for TrickleReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.data.len() {
                return Ok(0);
            }
            buf[0] = self.data[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    #[test]
    fn test_raw_keeps_source_bytes() {
        let input = r#"{"a" :  1.50e+2,"b":"x\ny"}"#;
        let mut decoder = StreamDecoder::new(input.as_bytes());
        let raw = decoder.next_raw().unwrap().unwrap();
        assert_eq!(raw.as_str(), input);
    }

    #[test]
    fn test_values_across_refills() {
        let input = br#"{"key": [1, 2, 3]} "tail""#;
        let mut decoder = StreamDecoder::new(TrickleReader {
            data: input,
            pos: 0,
        });
        let first = decoder.next_raw().unwrap().unwrap();
        assert_eq!(first.as_str(), r#"{"key": [1, 2, 3]}"#);
        let second = decoder.next_raw().unwrap().unwrap();
        assert_eq!(second.as_str(), r#""tail""#);
        assert!(decoder.next_raw().unwrap().is_none());
    }

    #[test]
    fn test_error_position() {
        let mut decoder = StreamDecoder::new("{\"a\": 1,\n \"b\" 2}".as_bytes());
        let err = decoder.next_value().unwrap_err();
        assert_eq!(err.position(), Some((2, 6)));
    }

    #[test]
    fn test_surrogate_pair_decoding() {
        let mut decoder = StreamDecoder::new(r#""\uD83D\uDE00""#.as_bytes());
        let value = decoder.next_value().unwrap().unwrap();
        assert_eq!(value, Value::String("\u{1F600}".to_string()));
    }

    #[test]
    fn test_unpaired_surrogate_is_replaced() {
        let mut decoder = StreamDecoder::new(r#""a\uD800b""#.as_bytes());
        let value = decoder.next_value().unwrap().unwrap();
        assert_eq!(value, Value::String("a\u{FFFD}b".to_string()));
    }

    #[test]
    fn test_depth_limit() {
        let deep = "[".repeat(200) + &"]".repeat(200);
        let mut decoder = StreamDecoder::new(deep.as_bytes());
        let err = decoder.next_raw().unwrap_err();
        assert!(err.to_string().contains("nesting depth"));
    }

    #[test]
    fn test_number_overflow_to_float() {
        let mut decoder = StreamDecoder::new("99999999999999999999".as_bytes());
        let value = decoder.next_value().unwrap().unwrap();
        assert_eq!(value, Value::Number(Number::Float(1e20)));
    }

    #[test]
    fn test_leading_zero_rejected() {
        let mut decoder = StreamDecoder::new("0123".as_bytes());
        assert!(decoder.next_raw().is_err());
    }
}
