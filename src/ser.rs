//! JSON rendering.
//!
//! This module provides the [`Formatter`], which turns one decoded value
//! into its output text. Two mutually exclusive paths exist, chosen by
//! whether key sorting was requested:
//!
//! - **Order-preserving path** ([`Formatter::render_raw`]): operates on
//!   the value's original source text. Compact mode strips insignificant
//!   whitespace; pretty mode re-indents. String contents, escape
//!   sequences and number literals pass through byte-for-byte.
//! - **Tree path** ([`Formatter::render_value`]): renders a
//!   [`Value`](crate::Value) tree from scratch. Key order is whatever the
//!   tree holds (the pipeline sorts before rendering), numbers re-emit in
//!   their shortest form, and strings are re-escaped minimally.
//!
//! ## Usage
//!
//! ```rust
//! use jsonfmt::{FormatOptions, Formatter, StreamDecoder};
//!
//! let options = FormatOptions::default();
//! let formatter = Formatter::new(&options);
//!
//! let mut decoder = StreamDecoder::new("{\"x\": [1,2]}".as_bytes());
//! let raw = decoder.next_raw().unwrap().unwrap();
//! assert_eq!(
//!     formatter.render_raw(&raw),
//!     "{\n  \"x\": [\n    1,\n    2\n  ]\n}"
//! );
//! ```

use crate::{Error, FormatOptions, Number, RawValue, Result, Value};

/// Renders decoded values according to a [`FormatOptions`].
///
/// The formatter is stateless between values; it borrows the run's
/// options and can be reused for every value in a stream.
pub struct Formatter<'a> {
    options: &'a FormatOptions,
}

impl<'a> Formatter<'a> {
    pub fn new(options: &'a FormatOptions) -> Self {
        Formatter { options }
    }

    /// Renders a value from its original source text, preserving key
    /// order and all value bytes exactly.
    #[must_use]
    pub fn render_raw(&self, raw: &RawValue) -> String {
        if self.options.compact {
            self.compact_raw(raw.as_str())
        } else {
            self.indent_raw(raw.as_str())
        }
    }

    /// Renders a value tree, compact or pretty per the options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the tree contains a number with no
    /// JSON representation (infinite or NaN floats, which can only come
    /// from programmatic construction).
    pub fn render_value(&self, value: &Value) -> Result<String> {
        let mut out = String::with_capacity(256);
        self.write_value(value, 0, &mut out)?;
        Ok(out)
    }

    /// Strips insignificant whitespace from already-valid JSON text.
    fn compact_raw(&self, src: &str) -> String {
        let mut out = String::with_capacity(src.len());
        let bytes = src.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'"' => {
                    i = copy_string(src, i, &mut out);
                }
                b' ' | b'\t' | b'\n' | b'\r' => {
                    i += 1;
                }
                b => {
                    out.push(b as char);
                    i += 1;
                }
            }
        }
        out
    }

    /// Re-indents already-valid JSON text: one structural element per
    /// line, `": "` between key and value, empty containers kept on one
    /// line.
    fn indent_raw(&self, src: &str) -> String {
        let mut out = String::with_capacity(src.len() * 2);
        let bytes = src.as_bytes();
        let mut depth = 0usize;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'"' => {
                    i = copy_string(src, i, &mut out);
                }
                open @ (b'{' | b'[') => {
                    let close = if open == b'{' { b'}' } else { b']' };
                    let mut j = i + 1;
                    while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                        j += 1;
                    }
                    if j < bytes.len() && bytes[j] == close {
                        out.push(open as char);
                        out.push(close as char);
                        i = j + 1;
                    } else {
                        out.push(open as char);
                        depth += 1;
                        self.newline(depth, &mut out);
                        i += 1;
                    }
                }
                close @ (b'}' | b']') => {
                    depth = depth.saturating_sub(1);
                    self.newline(depth, &mut out);
                    out.push(close as char);
                    i += 1;
                }
                b',' => {
                    out.push(',');
                    self.newline(depth, &mut out);
                    i += 1;
                }
                b':' => {
                    out.push_str(": ");
                    i += 1;
                }
                b' ' | b'\t' | b'\n' | b'\r' => {
                    i += 1;
                }
                b => {
                    out.push(b as char);
                    i += 1;
                }
            }
        }
        out
    }

    fn newline(&self, depth: usize, out: &mut String) {
        out.push('\n');
        out.push_str(&self.options.prefix);
        for _ in 0..depth {
            out.push_str(&self.options.indent);
        }
    }

    fn write_value(&self, value: &Value, depth: usize, out: &mut String) -> Result<()> {
        match value {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.write_number(*n, out)?,
            Value::String(s) => write_string(s, out),
            Value::Array(arr) => {
                if arr.is_empty() {
                    out.push_str("[]");
                    return Ok(());
                }
                out.push('[');
                for (i, element) in arr.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    if !self.options.compact {
                        self.newline(depth + 1, out);
                    }
                    self.write_value(element, depth + 1, out)?;
                }
                if !self.options.compact {
                    self.newline(depth, out);
                }
                out.push(']');
            }
            Value::Object(map) => {
                if map.is_empty() {
                    out.push_str("{}");
                    return Ok(());
                }
                out.push('{');
                for (i, (key, member)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    if !self.options.compact {
                        self.newline(depth + 1, out);
                    }
                    write_string(key, out);
                    out.push(':');
                    if !self.options.compact {
                        out.push(' ');
                    }
                    self.write_value(member, depth + 1, out)?;
                }
                if !self.options.compact {
                    self.newline(depth, out);
                }
                out.push('}');
            }
        }
        Ok(())
    }

    fn write_number(&self, number: Number, out: &mut String) -> Result<()> {
        if let Number::Float(f) = number {
            if !f.is_finite() {
                return Err(Error::render("number has no JSON representation"));
            }
        }
        out.push_str(&number.to_string());
        Ok(())
    }
}

/// Copies a string literal (quotes and escapes included) verbatim and
/// returns the index just past its closing quote.
fn copy_string(src: &str, start: usize, out: &mut String) -> usize {
    let bytes = src.as_bytes();
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => {
                i += 1;
                break;
            }
            _ => i += 1,
        }
    }
    out.push_str(&src[start..i]);
    i
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
