//! URL-safe byte classification.

/// Per-byte table of values allowed to appear unescaped in an encoded path.
///
/// Safe: ASCII letters, digits, `$ - _ . +` ("safe" rule), `! * ' ( ) ,`
/// ("extra" rule), and `/` as the one path segment separator kept from the
/// "fsegment"/"hsegment" rules. `:`, `@`, `&` and `=` are excluded; the
/// encoder re-admits `:` only inside a recognized scheme/drive prefix.
static SAFE: [bool; 256] = build_safe_table();

const fn build_safe_table() -> [bool; 256] {
    let mut safe = [false; 256];

    let mut b = b'a';
    while b <= b'z' {
        safe[b as usize] = true;
        b += 1;
    }
    let mut b = b'A';
    while b <= b'Z' {
        safe[b as usize] = true;
        b += 1;
    }
    let mut b = b'0';
    while b <= b'9' {
        safe[b as usize] = true;
        b += 1;
    }

    let punct = [
        b'$', b'-', b'_', b'.', b'+', b'!', b'*', b'\'', b'(', b')', b',', b'/',
    ];
    let mut i = 0;
    while i < punct.len() {
        safe[punct[i] as usize] = true;
        i += 1;
    }

    safe
}

/// Whether `b` may appear literally in an encoded path.
pub(crate) fn is_safe_byte(b: u8) -> bool {
    SAFE[b as usize]
}
