//! Host operating-system family for drive-letter handling.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// OS family that affects path-to-URL conversion.
///
/// Only Windows changes behavior (drive-letter colons stay unescaped and
/// drive prefixes are extracted during normalization); everything else
/// behaves as Posix. Passed explicitly so both branches are testable on any
/// host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Windows,
    #[default]
    Posix,
}

impl HostOs {
    /// The OS family of the compile target this process runs on.
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Posix
        }
    }

    pub fn is_windows(self) -> bool {
        self == HostOs::Windows
    }
}

/// Error parsing an OS family name from config or CLI text.
#[derive(Debug, Error)]
#[error("unrecognized OS family {0:?} (expected \"windows\" or \"posix\")")]
pub struct ParseHostOsError(String);

impl FromStr for HostOs {
    type Err = ParseHostOsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(HostOs::Windows),
            "posix" | "unix" | "linux" | "macos" => Ok(HostOs::Posix),
            other => Err(ParseHostOsError(other.to_string())),
        }
    }
}
