//! Encode command: percent-encode a raw path.

use super::for_each_input;
use anyhow::Result;
use cpurl_core::{encode_path, HostOs};

/// Percent-encode the input(s) and print one result per line.
pub fn run_encode(path: &str, os: HostOs) -> Result<()> {
    tracing::debug!("encoding with os={:?}", os);
    for_each_input(path, |p| println!("{}", encode_path(p, os)))
}
