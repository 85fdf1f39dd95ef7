//! Folding a pair line into typed configuration.
//!
//! Run with: cargo run --example typed_config

use pairline::{cast_bool, parse_str};
use std::error::Error;

#[derive(Debug, Default)]
struct Config {
    host: String,
    port: u16,
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let line = "host=db.local port=5432 verbose=YES";

    let config = parse_str(line)?.try_build(Config::default(), |mut cfg, pair| {
        match (pair.key(), pair.value()) {
            ("host", Some(v)) => cfg.host = v.to_string(),
            ("port", Some(v)) => cfg.port = v.parse().map_err(|_| format!("bad port: {v}"))?,
            ("verbose", Some(v)) => {
                cfg.verbose = cast_bool(v).ok_or_else(|| format!("bad flag: {v}"))?;
            }
            (key, _) => return Err(format!("unknown key: {key}")),
        }
        Ok(cfg)
    })?;

    println!("{config:#?}");

    // The fold short-circuits on the first error the closure reports.
    let err: Result<Config, String> = parse_str("port=oops")?.try_build(Config::default(), |mut cfg, pair| {
        match (pair.key(), pair.value()) {
            ("port", Some(v)) => cfg.port = v.parse().map_err(|_| format!("bad port: {v}"))?,
            _ => {}
        }
        Ok(cfg)
    });
    println!("\nExpected failure: {err:?}");

    Ok(())
}
