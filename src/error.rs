//! Error types for JSON decoding and formatting.
//!
//! Every failure the pipeline can hit is represented here: unreadable or
//! unwritable streams, malformed JSON, and internal rendering failures.
//! Errors are fatal to a run (there is no skip-and-continue past a bad
//! value), so each variant carries enough context to be printed once and
//! acted on.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: the input stream could not be read or the output
//!   stream could not be written
//! - **Syntax Errors**: malformed JSON, with 1-based line/column position
//! - **Render Errors**: internal formatting failures
//!
//! ## Examples
//!
//! ```rust
//! use jsonfmt::{format_str, Error, FormatOptions};
//!
//! let result = format_str("{\"a\":}", &FormatOptions::default());
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("{}", err);
//!     // Syntax error at line 1, column 6: expected a JSON value
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while decoding, formatting
/// or highlighting a JSON stream.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed JSON at a known position in the input stream
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
    },

    /// Internal formatting failure
    #[error("Render error: {0}")]
    Render(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// Positions are 1-based and point at the offending byte.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonfmt::Error;
    ///
    /// let err = Error::syntax(10, 5, "unexpected token");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.into(),
        }
    }

    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: impl fmt::Display) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a render error for internal formatting failures.
    pub fn render(msg: impl fmt::Display) -> Self {
        Error::Render(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonfmt::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the input position of a syntax error, if this is one.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Syntax { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
