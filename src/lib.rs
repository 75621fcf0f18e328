//! # jsonfmt
//!
//! A streaming JSON pretty-printer, minifier and syntax highlighter.
//!
//! ## What does it do?
//!
//! `jsonfmt` reads a stream of JSON values (a single document or many
//! whitespace-separated values, NDJSON-style) and re-serializes each one with
//! the formatting you ask for: pretty-printed or compact, with source key
//! order preserved or every object's keys sorted, optionally wrapped in
//! ANSI color codes for terminal display. It can also validate a stream
//! without producing output.
//!
//! ## Key Features
//!
//! - **Streaming**: values are decoded one at a time; memory use is
//!   bounded by the largest single value, not the stream
//! - **Byte-faithful by default**: without key sorting, string contents
//!   and number literals pass through exactly as written
//! - **Recursive key sorting**: `sort_keys` reorders every object at
//!   every depth, leaving array order untouched
//! - **Lexing highlighter**: tokens are colored by a structural scan, so
//!   string contents are never mis-classified
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! jsonfmt = "0.1"
//! ```
//!
//! ### Formatting a string
//!
//! ```rust
//! use jsonfmt::{format_str, FormatOptions};
//!
//! let pretty = format_str("{\"z\":9,\"a\":1}", &FormatOptions::default()).unwrap();
//! assert_eq!(pretty, "{\n  \"z\": 9,\n  \"a\": 1\n}\n");
//!
//! let sorted = format_str(
//!     "{\"z\":9,\"a\":1}",
//!     &FormatOptions::new().with_sort_keys(true),
//! )
//! .unwrap();
//! assert_eq!(sorted, "{\n  \"a\": 1,\n  \"z\": 9\n}\n");
//! ```
//!
//! ### Streaming between readers and writers
//!
//! ```rust
//! use jsonfmt::{format_to_writer, FormatOptions};
//!
//! let input = "{\"a\": 1}\n{\"b\": 2}\n";
//! let mut output = Vec::new();
//! let summary =
//!     format_to_writer(input.as_bytes(), &mut output, &FormatOptions::compact()).unwrap();
//! assert_eq!(summary.processed, 2);
//! assert_eq!(output, b"{\"a\":1}\n{\"b\":2}\n");
//! ```
//!
//! ### Validating without output
//!
//! ```rust
//! use jsonfmt::validate_str;
//!
//! assert_eq!(validate_str("{\"a\":1}\n{\"b\":2}").unwrap(), 2);
//! assert!(validate_str("{\"a\":}").is_err());
//! ```
//!
//! ## Ordering semantics
//!
//! Without `sort_keys`, each value is re-rendered from its original text:
//! key order, duplicate keys and number spellings are all preserved. With
//! `sort_keys`, each value is rebuilt as a tree first: keys sort in
//! ascending byte order at every depth, duplicate keys collapse to the
//! last occurrence, and numbers re-emit in their shortest form. The two
//! paths are deliberately distinct; collapsing them would lose the
//! byte-fidelity guarantee of the default path.

pub mod de;
pub mod error;
pub mod highlight;
pub mod macros;
pub mod map;
pub mod options;
pub mod pipeline;
pub mod ser;
pub mod value;

pub use de::{RawValue, StreamDecoder};
pub use error::{Error, Result};
pub use map::Map;
pub use options::FormatOptions;
pub use pipeline::{Pipeline, Summary};
pub use ser::Formatter;
pub use value::{Number, Value};

use std::io;

/// Formats every JSON value in `input`, returning the rendered stream.
///
/// Each value is followed by exactly one newline. In validation-only mode
/// the returned string is empty.
///
/// # Examples
///
/// ```rust
/// use jsonfmt::{format_str, FormatOptions};
///
/// let out = format_str("{\"x\": [1,2,3]}", &FormatOptions::compact()).unwrap();
/// assert_eq!(out, "{\"x\":[1,2,3]}\n");
/// ```
///
/// # Errors
///
/// Returns an error if the input is not well-formed JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_str(input: &str, options: &FormatOptions) -> Result<String> {
    let mut out = Vec::new();
    Pipeline::new(options.clone()).run(input.as_bytes(), &mut out)?;
    String::from_utf8(out).map_err(|e| Error::render(e))
}

/// Streams every JSON value from `reader` to `writer`, formatted per
/// `options`, and reports how many values were processed.
///
/// # Examples
///
/// ```rust
/// use jsonfmt::{format_to_writer, FormatOptions};
///
/// let mut out = Vec::new();
/// let summary = format_to_writer("1 2".as_bytes(), &mut out, &FormatOptions::compact()).unwrap();
/// assert_eq!(summary.processed, 2);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not well-formed JSON,
/// or writing fails. Values written before the failure remain written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_to_writer<R, W>(reader: R, writer: W, options: &FormatOptions) -> Result<Summary>
where
    R: io::Read,
    W: io::Write,
{
    Pipeline::new(options.clone()).run(reader, writer)
}

/// Checks that `input` is a stream of well-formed JSON values, returning
/// how many it contains.
///
/// # Examples
///
/// ```rust
/// use jsonfmt::validate_str;
///
/// assert_eq!(validate_str("[1] [2] [3]").unwrap(), 3);
/// ```
///
/// # Errors
///
/// Returns a syntax error (with position) at the first malformed value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn validate_str(input: &str) -> Result<usize> {
    let options = FormatOptions::new().with_validate_only(true);
    let summary = Pipeline::new(options).run(input.as_bytes(), io::sink())?;
    Ok(summary.processed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_default() {
        let out = format_str("{\"z\":9,\"a\":1}", &FormatOptions::default()).unwrap();
        assert_eq!(out, "{\n  \"z\": 9,\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_sorted_pretty() {
        let options = FormatOptions::new().with_sort_keys(true);
        let out = format_str("{\"z\":9,\"a\":1}", &options).unwrap();
        assert_eq!(out, "{\n  \"a\": 1,\n  \"z\": 9\n}\n");
    }

    #[test]
    fn test_compact() {
        let out = format_str("{\"x\": [1,2,3]}", &FormatOptions::compact()).unwrap();
        assert_eq!(out, "{\"x\":[1,2,3]}\n");
    }

    #[test]
    fn test_ndjson_stream() {
        let out = format_str("1\n\"two\"\n[3]\n", &FormatOptions::compact()).unwrap();
        assert_eq!(out, "1\n\"two\"\n[3]\n");
    }

    #[test]
    fn test_validate_counts() {
        assert_eq!(validate_str("{\"a\":1}\n{\"b\":2}").unwrap(), 2);
    }

    #[test]
    fn test_malformed_input_fails() {
        assert!(format_str("{\"a\":}", &FormatOptions::default()).is_err());
        assert!(validate_str("{\"a\":1}\n{bad}").is_err());
    }
}
