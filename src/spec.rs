//! Pair-Line Format Specification
//!
//! This module documents the line grammar as implemented by this library.
//!
//! # Overview
//!
//! A pair line is a single line of whitespace-separated `key[=value]`
//! tokens. It is the common shape of argument and configuration blobs
//! handed over as one opaque string: a few named switches, some with
//! values, some without, with quoting and escapes available for values
//! that contain whitespace or structural characters.
//!
//! ```text
//! host=db.local port=5432 verbose label='staging box' motd=hi\ there
//! ```
//!
//! # Framing
//!
//! - Leading and trailing horizontal whitespace (space, tab) is ignored.
//! - Entries are separated by runs of horizontal whitespace; consecutive
//!   separators collapse into one.
//! - The line concludes with a single `\n`. Input that does not end in a
//!   newline is accepted as if one were appended; this is a convenience of
//!   the parser, not an obligation on the producer.
//! - An empty line, or a line of only whitespace, is a valid line with
//!   zero entries.
//! - Any byte left over after the line terminator fails the whole parse.
//!
//! Newline is only ever the terminator. It is not a separator, and a
//! second line is not another document: feed lines one at a time.
//!
//! # Keys
//!
//! One or more bytes from `[A-Za-z0-9_-]`. A key is followed immediately
//! by either `=` (a value follows) or a separator/line end (no value).
//!
//! ```text
//! timeout=30     key "timeout", value "30"
//! verbose        key "verbose", no value
//! log-level=info hyphens and underscores are key bytes
//! ```
//!
//! "No value" is distinct from "empty value": `key` carries no value at
//! all, while `key=` carries the empty string.
//!
//! # Values
//!
//! A value is entered only after `=`. One byte of lookahead picks the
//! form:
//!
//! ## Simple values
//!
//! A possibly-empty run of bytes, none of which are horizontal
//! whitespace, newline, `"`, `'`, or `\`, interleaved with escape
//! sequences. The run ends at whitespace, end of entries, or end of
//! input. An empty simple value is only legal when the next byte is
//! already a terminator, so `key=` followed by whitespace or end of input
//! yields the empty string.
//!
//! ## Quoted values
//!
//! Opened by `"` or `'` and closed by the matching quote. Content is any
//! byte that is neither the closing quote nor a backslash, interleaved
//! with escape sequences. The non-matching quote is plain content, as is
//! raw whitespace. `""` and `''` yield the empty string. A missing
//! closing quote fails the parse.
//!
//! ## Escape sequences
//!
//! A backslash followed by exactly one byte from the table below decodes
//! to one output byte. The table is closed: a backslash followed by
//! anything else, or at end of input, fails the parse. Decoding is
//! identical inside and outside quotes.
//!
//! | Escape | Decodes to |
//! |--------|------------|
//! | `\0`   | NUL (0x00) |
//! | `\n`   | line feed (0x0A) |
//! | `\r`   | carriage return (0x0D) |
//! | `\t`   | horizontal tab (0x09) |
//! | `\"`   | `"` |
//! | `\'`   | `'` |
//! | `\\`   | `\` |
//! | `\ `   | space (0x20) |
//!
//! # Text decoding
//!
//! Only ASCII structural bytes are inspected during parsing; arbitrary
//! bytes pass through values untouched. Once a value's bytes are fully
//! assembled they are decoded as UTF-8. A decode failure is reported as a
//! distinct error kind from a grammar failure: the line was well-formed,
//! the value was not text.
//!
//! # Ordering and duplicates
//!
//! Pairs are emitted in source order. Duplicate keys are legal and all
//! occurrences are preserved; deduplication, when wanted, belongs to the
//! caller (the map projection keeps the last value per key).
//!
//! # Edge Cases
//!
//! ```text
//! (empty input)      -> []
//! "   \t  "          -> []
//! key                -> [("key", absent)]
//! key=               -> [("key", "")]
//! key= x             -> [("key", ""), ("x", absent)]
//! key=""             -> [("key", "")]
//! key="a b"          -> [("key", "a b")]
//! key=a\ b           -> [("key", "a b")]
//! a=1 b=2 c          -> [("a", "1"), ("b", "2"), ("c", absent)]
//! key="abc           -> parse failure (unterminated quote)
//! key=a\xb           -> parse failure (unknown escape)
//! key=a"b            -> parse failure (quote inside a bare value)
//! ```
//!
//! # Error reporting
//!
//! There is one grammar failure kind, "malformed input", carrying the
//! byte offset at which parsing stopped. No caller contract depends on
//! diagnostic content beyond success or failure.

// This module contains only documentation; no implementation code
