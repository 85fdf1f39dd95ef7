//! Caller-facing configuration.
//!
//! This module provides the small closed set of knobs the crate exposes:
//!
//! - [`ParseMode`]: which output shape [`parse_with_mode`] produces
//! - [`QuoteStyle`] and [`EncodeOptions`]: how [`to_line_with_options`]
//!   renders values
//!
//! [`parse_with_mode`]: crate::parse_with_mode
//! [`to_line_with_options`]: crate::to_line_with_options
//!
//! ## Examples
//!
//! ```rust
//! use pairline::{parse_str, to_line_with_options, EncodeOptions, QuoteStyle};
//!
//! let pairs = parse_str("msg='a b'").unwrap();
//!
//! let escaped = to_line_with_options(&pairs, EncodeOptions::new());
//! assert_eq!(escaped, r"msg=a\ b");
//!
//! let quoted = to_line_with_options(
//!     &pairs,
//!     EncodeOptions::new().with_quote_style(QuoteStyle::Double),
//! );
//! assert_eq!(quoted, r#"msg="a b""#);
//! ```

/// How the input buffer should be interpreted.
///
/// The set of output shapes is fixed and small, so it is modeled as a plain
/// enum rather than any open-ended dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Run the pair grammar and produce a pair list.
    #[default]
    Pairs,
    /// Bypass the grammar entirely: decode the whole buffer as text.
    Raw,
}

/// Quoting strategy used when rendering values back to a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Bare values with backslash escapes for structural bytes.
    #[default]
    Escaped,
    /// Double-quoted values, escaping only where required.
    Double,
    /// Single-quoted values, escaping only where required.
    Single,
}

impl QuoteStyle {
    /// Returns the quote character for this style, if it uses one.
    #[must_use]
    pub const fn quote(&self) -> Option<char> {
        match self {
            QuoteStyle::Escaped => None,
            QuoteStyle::Double => Some('"'),
            QuoteStyle::Single => Some('\''),
        }
    }
}

/// Options for rendering a pair list back to a line.
///
/// # Examples
///
/// ```rust
/// use pairline::{EncodeOptions, QuoteStyle};
///
/// let options = EncodeOptions::new().with_quote_style(QuoteStyle::Single);
/// assert_eq!(options.quote_style, QuoteStyle::Single);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeOptions {
    pub quote_style: QuoteStyle,
}

impl EncodeOptions {
    /// Creates options with the default escaped style.
    #[must_use]
    pub fn new() -> Self {
        EncodeOptions::default()
    }

    /// Sets the quoting strategy.
    #[must_use]
    pub fn with_quote_style(mut self, quote_style: QuoteStyle) -> Self {
        self.quote_style = quote_style;
        self
    }
}
