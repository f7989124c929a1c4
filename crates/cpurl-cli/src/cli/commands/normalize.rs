//! Normalize command: rewrite a path into a canonical encoded URL.

use super::for_each_input;
use anyhow::Result;
use cpurl_core::{normalize_url_path, HostOs};

/// Normalize the input(s) and print one canonical URL per line.
pub fn run_normalize(path: &str, os: HostOs) -> Result<()> {
    tracing::debug!("normalizing with os={:?}", os);
    for_each_input(path, |p| println!("{}", normalize_url_path(p, os)))
}
