//! Error types for pair-line parsing.
//!
//! The grammar deliberately reports a single coarse failure kind: either the
//! whole line parses, or it does not. Errors still carry the byte offset at
//! which parsing stopped, which is enough to point a user at the offending
//! token without promising any richer diagnostic contract.
//!
//! ## Error Categories
//!
//! - **Syntax**: no grammar production matched (bad key byte, unterminated
//!   quote, invalid escape, trailing garbage)
//! - **Encoding**: the decoded value bytes were not valid UTF-8
//! - **I/O**: reading the input failed (only produced by [`parse_reader`])
//!
//! [`parse_reader`]: crate::parse_reader
//!
//! ## Examples
//!
//! ```rust
//! use pairline::{parse_str, Error};
//!
//! let err = parse_str("key=\"unterminated").unwrap_err();
//! assert!(matches!(err, Error::Syntax { .. }));
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while parsing a pair line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No grammar production matched at the given byte offset.
    #[error("malformed input at byte {offset}: {msg}")]
    Syntax {
        /// Byte offset into the input at which parsing stopped.
        offset: usize,
        /// Short description of the production that failed.
        msg: &'static str,
    },

    /// A decoded value was not valid UTF-8.
    ///
    /// This is distinct from a grammar failure: the line was well-formed,
    /// but the bytes assembled for a value could not be interpreted as text.
    #[error("invalid text encoding in value starting at byte {offset}")]
    Encoding {
        /// Byte offset of the value whose bytes failed to decode.
        offset: usize,
    },

    /// IO error while reading input.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a syntax error at the given byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pairline::Error;
    ///
    /// let err = Error::syntax(3, "expected key");
    /// assert!(err.to_string().contains("byte 3"));
    /// ```
    pub fn syntax(offset: usize, msg: &'static str) -> Self {
        Error::Syntax { offset, msg }
    }

    /// Creates an encoding error for a value starting at the given offset.
    pub fn encoding(offset: usize) -> Self {
        Error::Encoding { offset }
    }

    /// Creates an I/O error from a display message.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the byte offset associated with this error, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pairline::Error;
    ///
    /// assert_eq!(Error::syntax(7, "expected key").offset(), Some(7));
    /// assert_eq!(Error::io("broken pipe").offset(), None);
    /// ```
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Syntax { offset, .. } | Error::Encoding { offset } => Some(*offset),
            Error::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
