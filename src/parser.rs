//! The pair-line grammar.
//!
//! This module implements the core parser that turns a raw byte buffer into
//! an ordered [`PairList`]. Parsing is single-pass over bytes with one byte
//! of lookahead; only ASCII structural bytes are inspected, so arbitrary
//! bytes may appear inside values and are decoded as UTF-8 text once a value
//! is fully assembled.
//!
//! ## Overview
//!
//! A line is zero or more entries separated by runs of horizontal whitespace
//! (space and tab), with optional leading and trailing whitespace, concluded
//! by a single `\n`. Input that does not end in a newline is accepted as if
//! one were appended.
//!
//! Each entry is a key (`[A-Za-z0-9_-]+`), optionally followed by `=` and a
//! value. A value is either quoted (`"…"` or `'…'`) or simple (bare bytes up
//! to the next separator); both forms accept backslash escape sequences at
//! any point. See [`crate::spec`] for the full grammar.
//!
//! Most users should use the entry points in the crate root:
//!
//! ```rust
//! use pairline::parse_str;
//!
//! let pairs = parse_str("host=db.local port=5432 verbose").unwrap();
//! assert_eq!(pairs.len(), 3);
//! ```

use crate::error::{Error, Result};
use crate::pair::{Pair, PairList};

/// Bytes legal in a key.
const fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Horizontal whitespace: the entry separator class. Newline is the line
/// terminator, never a separator.
const fn is_hspace(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Byte cursor over the input buffer.
///
/// Lives only for the duration of one parse call; position only, no other
/// state.
struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a [u8]) -> Self {
        Cursor { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_hspace(&mut self) {
        while matches!(self.peek(), Some(b) if is_hspace(b)) {
            self.pos += 1;
        }
    }
}

/// Parses a complete line into an ordered pair list.
///
/// Succeeds on empty and whitespace-only input with an empty list. Fails if
/// any byte remains unconsumed after the (real or virtual) line terminator.
pub(crate) fn parse(input: &[u8]) -> Result<PairList> {
    let mut cur = Cursor::new(input);
    let mut pairs = PairList::new();

    cur.skip_hspace();
    loop {
        match cur.peek() {
            // End of input counts as the line terminator.
            None => break,
            Some(b'\n') => {
                cur.bump();
                break;
            }
            Some(b) if is_key_byte(b) => {
                pairs.push(parse_entry(&mut cur)?);
                match cur.peek() {
                    None | Some(b'\n') => {}
                    Some(b) if is_hspace(b) => cur.skip_hspace(),
                    Some(_) => return Err(Error::syntax(cur.pos, "expected separator after entry")),
                }
            }
            Some(_) => return Err(Error::syntax(cur.pos, "expected key")),
        }
    }

    if !cur.at_end() {
        return Err(Error::syntax(cur.pos, "unexpected bytes after line terminator"));
    }
    Ok(pairs)
}

/// One `key[=value]` entry. The caller has already established that the
/// cursor rests on a key byte.
fn parse_entry(cur: &mut Cursor<'_>) -> Result<Pair> {
    let key = parse_key(cur)?;
    if cur.peek() == Some(b'=') {
        cur.bump();
        let value = parse_value(cur)?;
        Ok(Pair::new(key, value))
    } else {
        Ok(Pair::bare(key))
    }
}

fn parse_key(cur: &mut Cursor<'_>) -> Result<String> {
    let start = cur.pos;
    while matches!(cur.peek(), Some(b) if is_key_byte(b)) {
        cur.bump();
    }
    if cur.pos == start {
        return Err(Error::syntax(start, "expected key"));
    }
    // Key bytes are ASCII by construction.
    Ok(cur.input[start..cur.pos].iter().map(|&b| b as char).collect())
}

/// A value, entered after `=` was consumed. One byte of lookahead picks the
/// quoted or simple form.
fn parse_value(cur: &mut Cursor<'_>) -> Result<String> {
    let start = cur.pos;
    let mut buf = Vec::new();

    match cur.peek() {
        Some(quote @ (b'"' | b'\'')) => {
            cur.bump();
            loop {
                match cur.peek() {
                    None => return Err(Error::syntax(cur.pos, "unterminated quoted value")),
                    Some(b) if b == quote => {
                        cur.bump();
                        break;
                    }
                    Some(b'\\') => buf.push(parse_escape(cur)?),
                    Some(b) => {
                        buf.push(b);
                        cur.bump();
                    }
                }
            }
        }
        _ => {
            // Simple value: may be empty when the next byte is already a
            // terminator (`key=` followed by whitespace or end of input).
            loop {
                match cur.peek() {
                    None | Some(b'\n') => break,
                    Some(b) if is_hspace(b) => break,
                    Some(b'"') | Some(b'\'') => break,
                    Some(b'\\') => buf.push(parse_escape(cur)?),
                    Some(b) => {
                        buf.push(b);
                        cur.bump();
                    }
                }
            }
        }
    }

    String::from_utf8(buf).map_err(|_| Error::encoding(start))
}

/// A two-byte escape sequence. Decoding is identical inside and outside
/// quotes; a backslash followed by anything not in the table is a parse
/// failure, including a backslash at end of input.
fn parse_escape(cur: &mut Cursor<'_>) -> Result<u8> {
    let at = cur.pos;
    cur.bump();
    match cur.bump() {
        Some(b'0') => Ok(0x00),
        Some(b'n') => Ok(b'\n'),
        Some(b'r') => Ok(b'\r'),
        Some(b't') => Ok(b'\t'),
        Some(b'"') => Ok(b'"'),
        Some(b'\'') => Ok(b'\''),
        Some(b'\\') => Ok(b'\\'),
        Some(b' ') => Ok(b' '),
        _ => Err(Error::syntax(at, "invalid escape sequence")),
    }
}
