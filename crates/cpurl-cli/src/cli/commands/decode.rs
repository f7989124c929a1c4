//! Decode command: percent-decode an encoded path.

use super::for_each_input;
use anyhow::Result;
use cpurl_core::decode_path;

/// Percent-decode the input(s) and print one result per line.
pub fn run_decode(path: &str) -> Result<()> {
    for_each_input(path, |p| println!("{}", decode_path(p)))
}
