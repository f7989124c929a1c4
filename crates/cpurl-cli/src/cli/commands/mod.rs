//! CLI subcommand implementations.

mod decode;
mod encode;
mod normalize;

pub use decode::run_decode;
pub use encode::run_encode;
pub use normalize::run_normalize;

use anyhow::Result;
use std::io::{self, BufRead};

/// Apply `f` to the argument, or to each stdin line when the argument is "-".
pub(crate) fn for_each_input(arg: &str, mut f: impl FnMut(&str)) -> Result<()> {
    if arg == "-" {
        for line in io::stdin().lock().lines() {
            f(&line?);
        }
    } else {
        f(arg);
    }
    Ok(())
}
