//! Percent-encoding of URL paths.

use crate::host::HostOs;
use crate::safe::is_safe_byte;

/// Recognized classpath URL scheme prefixes.
///
/// Tested in order, first match wins: `jar:file:` is listed before `jar:`
/// so the full two-scheme prefix is credited when both would match. Order
/// is load-bearing, not cosmetic.
pub(crate) const SCHEME_PREFIXES: [&str; 6] =
    ["jrt:", "file:", "jar:file:", "jar:", "http:", "https:"];

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Length (in bytes) of the leading region where `:` may stay unescaped:
/// the longest matching scheme prefix, extended on Windows by a drive
/// letter and colon appearing right after it (optionally behind one `/`).
fn colon_prefix_len(path: &str, os: HostOs) -> usize {
    let bytes = path.as_bytes();

    let mut len = SCHEME_PREFIXES
        .iter()
        .find(|prefix| path.starts_with(**prefix))
        .map_or(0, |prefix| prefix.len());

    if os.is_windows() {
        let mut i = len;
        if i < bytes.len() && bytes[i] == b'/' {
            i += 1;
        }
        if i + 1 < bytes.len() && bytes[i].is_ascii_alphabetic() && bytes[i + 1] == b':' {
            len = i + 2;
        }
    }

    len
}

/// Percent-encode a raw path for use inside a URL.
///
/// `/` is never encoded. `:` is kept literal only while its byte position
/// falls inside the scheme/drive prefix (see [`colon_prefix_len`]); every
/// other unsafe byte becomes `%` plus two lowercase hex digits. The input
/// is processed as UTF-8 bytes, so multi-byte characters are escaped one
/// byte at a time. Never fails.
pub fn encode_path(path: &str, os: HostOs) -> String {
    let colon_prefix = colon_prefix_len(path, os);

    let bytes = path.as_bytes();
    let mut encoded = String::with_capacity(bytes.len() * 3);
    for (i, &b) in bytes.iter().enumerate() {
        if is_safe_byte(b) || (b == b':' && i < colon_prefix) {
            encoded.push(b as char);
        } else {
            encoded.push('%');
            encoded.push(HEX[(b >> 4) as usize] as char);
            encoded.push(HEX[(b & 0x0f) as usize] as char);
        }
    }
    encoded
}
