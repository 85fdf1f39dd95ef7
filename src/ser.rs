//! Rendering a pair list back to a line.
//!
//! The parser does not need an encoder, but callers that assemble or modify
//! a [`PairList`] usually want to write it back out. [`to_line`] produces a
//! line the parser maps back to an equal list, for any list the parser can
//! produce.
//!
//! ## Usage
//!
//! ```rust
//! use pairline::{parse_str, to_line};
//!
//! let pairs = parse_str("a=1 flag msg='two words'").unwrap();
//! let line = to_line(&pairs);
//! assert_eq!(line, r"a=1 flag msg=two\ words");
//! assert_eq!(parse_str(&line).unwrap(), pairs);
//! ```
//!
//! Values are rendered per [`QuoteStyle`]: the default escaped style emits
//! bare values and backslash-escapes every structural byte; the quoted
//! styles wrap the value in quotes and escape only what the quoted grammar
//! requires. Absent values render as bare keys; empty present values render
//! as `key=` (escaped style) or empty quotes.

use crate::options::{EncodeOptions, QuoteStyle};
use crate::pair::PairList;
use std::fmt;

/// Renders a pair list to a single line with default options.
///
/// # Examples
///
/// ```rust
/// use pairline::{to_line, Pair, PairList};
///
/// let pairs: PairList = vec![Pair::new("a", "1"), Pair::bare("b")].into();
/// assert_eq!(to_line(&pairs), "a=1 b");
/// ```
#[must_use]
pub fn to_line(pairs: &PairList) -> String {
    to_line_with_options(pairs, EncodeOptions::default())
}

/// Renders a pair list to a single line with the given options.
#[must_use]
pub fn to_line_with_options(pairs: &PairList, options: EncodeOptions) -> String {
    let mut out = String::new();
    for (i, pair) in pairs.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(pair.key());
        if let Some(value) = pair.value() {
            out.push('=');
            encode_value(&mut out, value, options.quote_style);
        }
    }
    out
}

fn encode_value(out: &mut String, value: &str, style: QuoteStyle) {
    match style.quote() {
        None => {
            for ch in value.chars() {
                match ch {
                    '\0' => out.push_str("\\0"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    '"' => out.push_str("\\\""),
                    '\'' => out.push_str("\\'"),
                    '\\' => out.push_str("\\\\"),
                    ' ' => out.push_str("\\ "),
                    _ => out.push(ch),
                }
            }
        }
        Some(quote) => {
            out.push(quote);
            for ch in value.chars() {
                match ch {
                    '\0' => out.push_str("\\0"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    '\\' => out.push_str("\\\\"),
                    c if c == quote => {
                        out.push('\\');
                        out.push(c);
                    }
                    _ => out.push(ch),
                }
            }
            out.push(quote);
        }
    }
}

impl fmt::Display for PairList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_line(self))
    }
}
