//! Percent-decoding of URL path and query strings.
//!
//! Malformed or truncated `%` escapes are never an error: they pass through
//! verbatim and the caller gets a best-effort decoded string.

/// Outcome of scanning one `%` escape attempt.
#[derive(Debug, PartialEq, Eq)]
enum EscapeScan {
    /// `%` followed by two hex digits; the decoded byte (3 chars consumed).
    Byte(u8),
    /// Invalid or truncated escape; number of chars (including the `%`) to
    /// copy through verbatim.
    Literal(usize),
}

fn hex_digit(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

/// Scan the escape starting at `chars[at]` (which must be `%`), looking
/// ahead at most two characters.
fn scan_escape(chars: &[char], at: usize) -> EscapeScan {
    match (chars.get(at + 1), chars.get(at + 2)) {
        (Some(&c1), Some(&c2)) => match (hex_digit(c1), hex_digit(c2)) {
            (Some(hi), Some(lo)) => EscapeScan::Byte((hi << 4) | lo),
            _ => EscapeScan::Literal(3),
        },
        (Some(_), None) => EscapeScan::Literal(2),
        _ => EscapeScan::Literal(1),
    }
}

/// Decode one part (path or query) into `buf` as raw bytes.
///
/// In the query part, `+` decodes to a space (form-encoding convention).
fn unescape_into(part: &str, is_query: bool, buf: &mut Vec<u8>) {
    let chars: Vec<char> = part.chars().collect();
    let mut utf8 = [0u8; 4];

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '%' {
            match scan_escape(&chars, i) {
                EscapeScan::Byte(b) => {
                    buf.push(b);
                    i += 3;
                }
                EscapeScan::Literal(n) => {
                    for &lit in &chars[i..i + n] {
                        buf.extend_from_slice(lit.encode_utf8(&mut utf8).as_bytes());
                    }
                    i += n;
                }
            }
        } else if is_query && c == '+' {
            buf.push(b' ');
            i += 1;
        } else {
            buf.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            i += 1;
        }
    }
}

/// Percent-decode a URL path with an optional `?query` portion.
///
/// The part before the first `?` and the part from it onward are decoded
/// independently; only the query part treats `+` as a space. The decoded
/// byte sequence is interpreted as UTF-8, lossily, so this never fails.
pub fn decode_path(input: &str) -> String {
    let (path_part, query_part) = match input.find('?') {
        Some(idx) => (&input[..idx], &input[idx..]),
        None => (input, ""),
    };

    let mut buf = Vec::with_capacity(input.len());
    unescape_into(path_part, false, &mut buf);
    unescape_into(query_part, true, &mut buf);

    String::from_utf8_lossy(&buf).into_owned()
}
