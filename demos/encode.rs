//! Rendering pair lists back to lines with different quote styles.
//!
//! Run with: cargo run --example encode

use pairline::{pairs, parse_str, to_line_with_options, EncodeOptions, QuoteStyle};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let list = pairs! {
        "msg" => "two words",
        "path" => "/tmp/data",
        "flag",
        "empty" => "",
    };

    for style in [QuoteStyle::Escaped, QuoteStyle::Double, QuoteStyle::Single] {
        let options = EncodeOptions::new().with_quote_style(style);
        let line = to_line_with_options(&list, options);
        println!("{style:?}: {line}");

        // Every rendering parses back to the same list.
        assert_eq!(parse_str(&line)?, list);
    }

    println!("\nAll three renderings round-trip.");
    Ok(())
}
