//! The per-run processing loop.
//!
//! [`Pipeline`] ties the stages together: decode one value, render it
//! (unless validating), highlight it (if enabled), write it with one
//! trailing newline, repeat until the stream ends. Control flows strictly
//! forward; nothing is buffered across iterations except the running
//! count.
//!
//! Errors are fatal to the run. Values written before a mid-stream syntax
//! error stay written; the pipeline halts at the first bad value and
//! reports it, never skipping past.
//!
//! ## Examples
//!
//! ```rust
//! use jsonfmt::{FormatOptions, Pipeline};
//!
//! let pipeline = Pipeline::new(FormatOptions::compact());
//! let mut out = Vec::new();
//! let summary = pipeline
//!     .run("{\"a\": 1}\n{\"b\": 2}".as_bytes(), &mut out)
//!     .unwrap();
//!
//! assert_eq!(summary.processed, 2);
//! assert_eq!(out, b"{\"a\":1}\n{\"b\":2}\n");
//! ```

use crate::{highlight, Error, FormatOptions, Formatter, Result, StreamDecoder};
use std::io::{Read, Write};

/// The outcome of a successful run: how many values were processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
}

/// A configured decode → format → highlight → write loop.
///
/// Input and output streams are caller-resolved; the pipeline performs no
/// path handling and no terminal detection, it only obeys its options.
pub struct Pipeline {
    options: FormatOptions,
}

impl Pipeline {
    /// Creates a pipeline with the given per-run configuration.
    #[must_use]
    pub fn new(options: FormatOptions) -> Self {
        Pipeline { options }
    }

    /// Returns the pipeline's configuration.
    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Processes every value from `input`, writing rendered values to
    /// `output` (nothing in validation mode).
    ///
    /// # Errors
    ///
    /// Returns the first decode, render or write error; values emitted
    /// before the failure remain in the output.
    pub fn run<R: Read, W: Write>(&self, input: R, mut output: W) -> Result<Summary> {
        let mut decoder = StreamDecoder::new(input);
        let formatter = Formatter::new(&self.options);
        let mut processed = 0usize;

        if self.options.validate_only {
            while decoder.next_raw()?.is_some() {
                processed += 1;
            }
            return Ok(Summary { processed });
        }

        loop {
            let rendered = if self.options.sort_keys {
                match decoder.next_value()? {
                    None => break,
                    Some(mut value) => {
                        value.sort_all_keys();
                        formatter.render_value(&value)?
                    }
                }
            } else {
                match decoder.next_raw()? {
                    None => break,
                    Some(raw) => formatter.render_raw(&raw),
                }
            };

            let rendered = if self.options.colorize {
                highlight::highlight(&rendered)
            } else {
                rendered
            };

            output.write_all(rendered.as_bytes()).map_err(Error::io)?;
            output.write_all(b"\n").map_err(Error::io)?;
            processed += 1;
        }

        output.flush().map_err(Error::io)?;
        Ok(Summary { processed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(input: &str, options: FormatOptions) -> (Result<Summary>, String) {
        let mut out = Vec::new();
        let result = Pipeline::new(options).run(input.as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_counts_every_value() {
        let (result, out) = run_to_string("1 2 3", FormatOptions::compact());
        assert_eq!(result.unwrap().processed, 3);
        assert_eq!(out, "1\n2\n3\n");
    }

    #[test]
    fn test_validate_writes_nothing() {
        let options = FormatOptions::new().with_validate_only(true);
        let (result, out) = run_to_string("{\"a\":1}\n{\"b\":2}", options);
        assert_eq!(result.unwrap().processed, 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_error_keeps_prior_output() {
        let (result, out) = run_to_string("{\"a\":1}\n{bad}", FormatOptions::compact());
        assert!(result.is_err());
        assert_eq!(out, "{\"a\":1}\n");
    }

    #[test]
    fn test_colorize_wraps_and_strips() {
        let options = FormatOptions::compact().with_colorize(true);
        let (result, out) = run_to_string("{\"a\":1}", options);
        assert_eq!(result.unwrap().processed, 1);
        assert!(out.contains("\x1b["));
        assert_eq!(highlight::strip(&out), "{\"a\":1}\n");
    }
}
