//! # pairline
//!
//! A small parser for single-line `key[=value]` argument strings with
//! quoting and backslash escapes.
//!
//! ## What is a pair line?
//!
//! Many tools accept their configuration as one opaque line of
//! whitespace-separated tokens: bare switches, `key=value` settings, quoted
//! values with spaces in them. This crate turns such a byte buffer into an
//! ordered sequence of [`Pair`]s that the rest of an application can query,
//! fold into typed configuration, or serialize as a structured document.
//!
//! ```text
//! host=db.local port=5432 verbose label='staging box'
//! ```
//!
//! ## Key Features
//!
//! - **Three value forms**: absent (`key`), simple (`key=value`), and
//!   quoted (`key="a b"` / `key='a b'`), with a closed table of backslash
//!   escapes usable in both quoted and unquoted values
//! - **Order-preserving**: pairs come back in source order, duplicates
//!   included; an insertion-ordered map projection is one call away
//! - **Byte-tolerant**: input need not be valid UTF-8 up front; only value
//!   text is decoded, at the boundary
//! - **Pure**: no I/O, no state, no unsafe; safe to call from anywhere
//!
//! ## Quick Start
//!
//! ```rust
//! use pairline::parse_str;
//!
//! let pairs = parse_str("host=db.local port=5432 verbose").unwrap();
//!
//! assert_eq!(pairs.get("host").and_then(|p| p.value()), Some("db.local"));
//! assert_eq!(pairs.get("port").and_then(|p| p.value()), Some("5432"));
//! assert!(pairs.get("verbose").unwrap().value().is_none());
//! ```
//!
//! ### Structured projection
//!
//! A parsed line projects into an insertion-ordered map whose absent
//! values serialize as explicit `null`:
//!
//! ```rust
//! use pairline::parse_str;
//!
//! let map = parse_str("a=1 b").unwrap().to_map();
//! let json = serde_json::to_string(&map).unwrap();
//! assert_eq!(json, r#"{"a":"1","b":null}"#);
//! ```
//!
//! ### Typed configuration
//!
//! Reduce a line into an application-specific value with
//! [`PairList::try_build`], short-circuiting on the first failure:
//!
//! ```rust
//! use pairline::{cast_bool, parse_str};
//!
//! #[derive(Default)]
//! struct Config {
//!     port: u16,
//!     verbose: bool,
//! }
//!
//! let config = parse_str("port=5432 verbose=yes")
//!     .unwrap()
//!     .try_build(Config::default(), |mut cfg, pair| {
//!         match (pair.key(), pair.value()) {
//!             ("port", Some(v)) => cfg.port = v.parse().map_err(|_| "bad port")?,
//!             ("verbose", Some(v)) => cfg.verbose = cast_bool(v).ok_or("bad flag")?,
//!             _ => return Err("unknown key"),
//!         }
//!         Ok(cfg)
//!     })
//!     .unwrap();
//!
//! assert_eq!(config.port, 5432);
//! assert!(config.verbose);
//! ```
//!
//! ### Raw mode
//!
//! Callers that want no structure can bypass the grammar entirely and get
//! the decoded text back verbatim:
//!
//! ```rust
//! use pairline::{parse_with_mode, ParseMode, Parsed};
//!
//! let out = parse_with_mode(b"anything at all = no grammar", ParseMode::Raw).unwrap();
//! assert_eq!(out.as_raw(), Some("anything at all = no grammar"));
//! ```
//!
//! ## Grammar
//!
//! The full line grammar, escape table, and edge cases are documented in
//! the [`spec`] module.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All indexing is bounds-checked
//! - No panics in the public API for any input

pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod pair;
mod parser;
pub mod ser;
pub mod spec;

pub use error::{Error, Result};
pub use map::PairMap;
pub use options::{EncodeOptions, ParseMode, QuoteStyle};
pub use pair::{cast_bool, Pair, PairList, Parsed};
pub use ser::{to_line, to_line_with_options};

use std::io;

/// Parses a pair line from a string.
///
/// # Examples
///
/// ```rust
/// use pairline::parse_str;
///
/// let pairs = parse_str("a=1 b=2 c").unwrap();
/// assert_eq!(pairs.len(), 3);
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the input does not match the grammar, and
/// [`Error::Encoding`] if a decoded value is not valid UTF-8 (possible
/// here only through escapes, since the input is already text).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(input: &str) -> Result<PairList> {
    parse_slice(input.as_bytes())
}

/// Parses a pair line from a byte buffer.
///
/// The buffer is not assumed to be valid UTF-8; only value text is
/// decoded, once assembled. Empty and whitespace-only buffers parse to an
/// empty list. A missing trailing newline is tolerated.
///
/// # Examples
///
/// ```rust
/// use pairline::parse_slice;
///
/// assert!(parse_slice(b"  \t ").unwrap().is_empty());
/// assert_eq!(parse_slice(b"key=value\n").unwrap().len(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the input does not match the grammar, and
/// [`Error::Encoding`] if a decoded value is not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(input: &[u8]) -> Result<PairList> {
    parser::parse(input)
}

/// Parses input in the given [`ParseMode`].
///
/// [`ParseMode::Pairs`] runs the grammar and yields [`Parsed::Pairs`];
/// [`ParseMode::Raw`] bypasses the grammar and yields the whole buffer
/// decoded as text, verbatim.
///
/// # Examples
///
/// ```rust
/// use pairline::{parse_with_mode, ParseMode, Parsed};
///
/// let out = parse_with_mode(b"a=1", ParseMode::Pairs).unwrap();
/// assert!(matches!(out, Parsed::Pairs(_)));
/// ```
///
/// # Errors
///
/// In pairs mode, the same errors as [`parse_slice`]. In raw mode, only
/// [`Error::Encoding`] when the buffer is not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_mode(input: &[u8], mode: ParseMode) -> Result<Parsed> {
    match mode {
        ParseMode::Pairs => parse_slice(input).map(Parsed::Pairs),
        ParseMode::Raw => String::from_utf8(input.to_vec())
            .map(Parsed::Raw)
            .map_err(|e| Error::encoding(e.utf8_error().valid_up_to())),
    }
}

/// Reads a reader to its end and parses the bytes as a pair line.
///
/// Obtaining the bytes is otherwise the caller's concern; this is a
/// convenience for the common read-a-whole-file case.
///
/// # Examples
///
/// ```rust
/// use pairline::parse_reader;
/// use std::io::Cursor;
///
/// let pairs = parse_reader(Cursor::new(b"a=1 b")).unwrap();
/// assert_eq!(pairs.len(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise the same errors as
/// [`parse_slice`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R: io::Read>(mut reader: R) -> Result<PairList> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse_slice(&buf)
}
