//! Terminal syntax highlighting for rendered JSON.
//!
//! [`highlight`] wraps five token classes in ANSI color escape sequences:
//! object keys, string values, numbers, booleans and the null literal.
//! Each colored span is followed by a reset code, so stripping the escape
//! sequences ([`strip`]) recovers the rendered text exactly.
//!
//! The highlighter is a single forward scan over the rendered text with a
//! tiny lexer: string literals are consumed whole (escape sequences
//! respected), and a string is classified as a key when the next
//! non-blank byte after its closing quote is a colon. Because tokens are
//! lexed rather than pattern-matched, string *content* that happens to
//! look like JSON punctuation is never mis-highlighted.
//!
//! The escape sequences are fixed output bytes, not terminal styling
//! decisions. Whether the destination can display them is decided by the
//! caller before enabling colorization.
//!
//! ## Examples
//!
//! ```rust
//! use jsonfmt::highlight::{highlight, strip};
//!
//! let rendered = "{\"a\": 1}";
//! let colored = highlight(rendered);
//! assert_ne!(colored, rendered);
//! assert_eq!(strip(&colored), rendered);
//! ```

/// Bold blue, for object keys.
const KEY: &str = "\x1b[1;34m";
/// Green, for string values.
const STRING: &str = "\x1b[32m";
/// Yellow, for numbers.
const NUMBER: &str = "\x1b[33m";
/// Magenta, for `true` and `false`.
const BOOL: &str = "\x1b[35m";
/// Red, for `null`.
const NULL: &str = "\x1b[31m";
/// Reset, after every highlighted span.
const RESET: &str = "\x1b[0m";

/// Returns `text` with ANSI color codes wrapped around JSON tokens.
///
/// `text` must be rendered JSON (one value, formatting already applied);
/// the scan assumes string literals are well-formed.
#[must_use]
pub fn highlight(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() * 2);
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let end = string_end(bytes, i);
                let mut j = end;
                while j < bytes.len() && (bytes[j] == b' ' || bytes[j] == b'\t') {
                    j += 1;
                }
                let color = if j < bytes.len() && bytes[j] == b':' {
                    KEY
                } else {
                    STRING
                };
                wrap(&mut out, color, &text[i..end]);
                i = end;
            }
            b'-' | b'0'..=b'9' => {
                let end = number_end(bytes, i);
                wrap(&mut out, NUMBER, &text[i..end]);
                i = end;
            }
            b't' if text[i..].starts_with("true") => {
                wrap(&mut out, BOOL, "true");
                i += 4;
            }
            b'f' if text[i..].starts_with("false") => {
                wrap(&mut out, BOOL, "false");
                i += 5;
            }
            b'n' if text[i..].starts_with("null") => {
                wrap(&mut out, NULL, "null");
                i += 4;
            }
            _ => {
                // Punctuation, whitespace, or a line prefix; copied through
                let ch = text[i..].chars().next().unwrap_or('\u{FFFD}');
                out.push(ch);
                i += ch.len_utf8();
            }
        }
    }
    out
}

/// Removes every ANSI CSI escape sequence from `text`.
///
/// `strip(highlight(s)) == s` for any rendered JSON `s`.
#[must_use]
pub fn strip(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == 0x1B && i + 1 < bytes.len() && bytes[i + 1] == b'[' {
            i += 2;
            while i < bytes.len() && !(0x40..=0x7E).contains(&bytes[i]) {
                i += 1;
            }
            // Skip the final byte of the sequence
            i += 1;
        } else {
            let ch = text[i..].chars().next().unwrap_or('\u{FFFD}');
            out.push(ch);
            i += ch.len_utf8();
        }
    }
    out
}

fn wrap(out: &mut String, color: &str, token: &str) {
    out.push_str(color);
    out.push_str(token);
    out.push_str(RESET);
}

/// Index just past the closing quote of the string starting at `start`.
fn string_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Index just past the number token starting at `start`.
fn number_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len()
        && matches!(bytes[i], b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-')
    {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_and_string_value_get_distinct_colors() {
        let colored = highlight("{\"name\": \"Alice\"}");
        assert!(colored.contains(&format!("{}\"name\"{}", KEY, RESET)));
        assert!(colored.contains(&format!("{}\"Alice\"{}", STRING, RESET)));
    }

    #[test]
    fn test_literals() {
        let colored = highlight("[true, false, null, -1.5e3]");
        assert!(colored.contains(&format!("{}true{}", BOOL, RESET)));
        assert!(colored.contains(&format!("{}false{}", BOOL, RESET)));
        assert!(colored.contains(&format!("{}null{}", NULL, RESET)));
        assert!(colored.contains(&format!("{}-1.5e3{}", NUMBER, RESET)));
    }

    #[test]
    fn test_tricky_string_content_is_not_reclassified() {
        // The value's content looks like a key/value pair; a lexing
        // highlighter must treat it as one string token
        let rendered = "{\"msg\": \"a\\\": 1,\"}";
        let colored = highlight(rendered);
        assert!(colored.contains(&format!("{}\"a\\\": 1,\"{}", STRING, RESET)));
        assert_eq!(strip(&colored), rendered);
    }

    #[test]
    fn test_strip_roundtrip() {
        let rendered = "{\n  \"a\": [1, true, null, \"x\"]\n}";
        assert_eq!(strip(&highlight(rendered)), rendered);
    }

    #[test]
    fn test_strip_is_noop_without_escapes() {
        let rendered = "{\"a\": \"plain\"}";
        assert_eq!(strip(rendered), rendered);
    }
}
