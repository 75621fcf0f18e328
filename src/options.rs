//! Configuration options for the formatting pipeline.
//!
//! [`FormatOptions`] is constructed once per run (typically from CLI
//! arguments), then passed by reference into the pipeline. It is never
//! mutated after construction; there is no process-wide configuration
//! state.
//!
//! ## Examples
//!
//! ```rust
//! use jsonfmt::{format_str, FormatOptions};
//!
//! // Pretty-printed, two-space indent (the default)
//! let options = FormatOptions::default();
//! assert_eq!(format_str("[1,2]", &options).unwrap(), "[\n  1,\n  2\n]\n");
//!
//! // Minified
//! let options = FormatOptions::compact();
//! assert_eq!(format_str("[1, 2]", &options).unwrap(), "[1,2]\n");
//!
//! // Sorted keys with a tab indent
//! let options = FormatOptions::new()
//!     .with_indent("\t")
//!     .with_sort_keys(true);
//! ```

/// Immutable per-run formatting configuration.
///
/// `compact` and the indent settings are mutually exclusive in effect:
/// when `compact` is set, `indent` and `prefix` are ignored. `colorize`
/// is obeyed as given; deciding whether the output destination can
/// display color is the caller's job.
///
/// # Examples
///
/// ```rust
/// use jsonfmt::FormatOptions;
///
/// let options = FormatOptions::new()
///     .with_prefix("> ")
///     .with_sort_keys(true)
///     .with_colorize(true);
/// assert!(options.sort_keys);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Indentation unit, repeated once per nesting depth in pretty mode.
    pub indent: String,
    /// Prefix written at the start of every line after the first.
    pub prefix: String,
    /// Minify: strip all insignificant whitespace.
    pub compact: bool,
    /// Recursively sort object keys in ascending lexicographic order.
    pub sort_keys: bool,
    /// Wrap token classes in ANSI color escape sequences.
    pub colorize: bool,
    /// Decode and count values without producing any output.
    pub validate_only: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            indent: "  ".to_string(),
            prefix: String::new(),
            compact: false,
            sort_keys: false,
            colorize: false,
            validate_only: false,
        }
    }
}

impl FormatOptions {
    /// Creates default options (pretty-printed, two-space indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for minified output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonfmt::FormatOptions;
    ///
    /// let options = FormatOptions::compact();
    /// assert!(options.compact);
    /// ```
    #[must_use]
    pub fn compact() -> Self {
        FormatOptions {
            compact: true,
            ..Default::default()
        }
    }

    /// Sets the indentation unit (any string, typically spaces or a tab).
    ///
    /// Ignored in compact mode.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets the per-line prefix. Ignored in compact mode.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enables or disables compact (minified) output.
    #[must_use]
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Enables or disables recursive key sorting.
    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    /// Enables or disables ANSI color highlighting of the output.
    #[must_use]
    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Enables or disables validation-only mode (decode, count, discard).
    #[must_use]
    pub fn with_validate_only(mut self, validate_only: bool) -> Self {
        self.validate_only = validate_only;
        self
    }
}
