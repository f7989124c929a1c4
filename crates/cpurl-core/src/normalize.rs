//! Normalization of heterogeneous path forms into canonical URL strings.

use crate::encode::encode_path;
use crate::host::HostOs;

/// Extract a Windows drive token (`"C:"`) from the front of `path`,
/// accepting both `C:/rest` and `/C:/rest` forms. Returns the token and the
/// remainder with the drive (and any leading `/`) removed.
fn split_drive_prefix(path: &str) -> Option<(&str, &str)> {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        Some((&path[..2], &path[2..]))
    } else if bytes.len() >= 3
        && bytes[0] == b'/'
        && bytes[1].is_ascii_alphabetic()
        && bytes[2] == b':'
    {
        Some((&path[1..3], &path[3..]))
    } else {
        None
    }
}

/// Rewrite archive-entry separators so every `!` is followed by exactly one
/// `/`, which the `jar:` scheme requires. `/!`, `!/` and bare `!` all
/// collapse to the same canonical `!/`.
fn normalize_archive_separators(path: &str) -> String {
    path.replace("/!", "!").replace("!/", "!").replace('!', "!/")
}

/// Normalize an arbitrary path into a canonical, percent-encoded URL string
/// suitable for a URL/URI constructor.
///
/// Inputs already starting with `jrt:`, `http://` or `https://` are only
/// encoded. Anything else is treated as a filesystem path, possibly
/// partially qualified: at most one leading `jar:` and then one `file:` are
/// stripped, a Windows drive prefix is extracted (Windows only), archive
/// `!` separators are canonicalized, and the result is re-rooted as
/// `file:/...` (or `jar:file:/...!/...` when an archive separator is
/// present) before encoding. Never fails; malformed inputs still produce
/// some output string.
pub fn normalize_url_path(url_path: &str, os: HostOs) -> String {
    if url_path.starts_with("jrt:")
        || url_path.starts_with("http://")
        || url_path.starts_with("https://")
    {
        return encode_path(url_path, os);
    }

    let mut rest = url_path;
    if let Some(stripped) = rest.strip_prefix("jar:") {
        rest = stripped;
    }
    if let Some(stripped) = rest.strip_prefix("file:") {
        rest = stripped;
    }

    // Pull the drive out before encoding so its ':' is not escaped as %3a.
    let mut drive = None;
    if os.is_windows() {
        if let Some((token, remainder)) = split_drive_prefix(rest) {
            drive = Some(token);
            rest = remainder;
        }
    }

    let path = normalize_archive_separators(rest);

    let mut normalized = match drive {
        None if path.starts_with('/') => format!("file:{path}"),
        None => format!("file:/{path}"),
        Some(token) if path.starts_with('/') => format!("file:/{token}{path}"),
        Some(token) => format!("file:/{token}/{path}"),
    };

    if normalized.contains('!') && !normalized.starts_with("jar:") {
        normalized = format!("jar:{normalized}");
    }

    encode_path(&normalized, os)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_absolute_path() {
        assert_eq!(
            normalize_url_path("/usr/lib/foo.jar", HostOs::Posix),
            "file:/usr/lib/foo.jar"
        );
    }

    #[test]
    fn relative_path_rooted() {
        assert_eq!(
            normalize_url_path("lib/foo.jar", HostOs::Posix),
            "file:/lib/foo.jar"
        );
    }

    #[test]
    fn already_qualified_file_url() {
        assert_eq!(
            normalize_url_path("file:/usr/lib/foo.jar", HostOs::Posix),
            "file:/usr/lib/foo.jar"
        );
    }

    #[test]
    fn nested_archive_gets_jar_scheme() {
        assert_eq!(
            normalize_url_path("/a/b.jar!/c/d.class", HostOs::Posix),
            "jar:file:/a/b.jar!/c/d.class"
        );
    }

    #[test]
    fn archive_separator_forms_equivalent() {
        for input in ["/a/b.jar!/c.class", "/a/b.jar!c.class", "/a/b.jar/!c.class"] {
            assert_eq!(
                normalize_url_path(input, HostOs::Posix),
                "jar:file:/a/b.jar!/c.class",
                "input {input:?}"
            );
        }
    }

    #[test]
    fn multiple_archive_levels() {
        assert_eq!(
            normalize_url_path("/a.jar!/lib/b.jar!/c.class", HostOs::Posix),
            "jar:file:/a.jar!/lib/b.jar!/c.class"
        );
    }

    #[test]
    fn jar_file_prefixes_restored() {
        assert_eq!(
            normalize_url_path("jar:file:/a.jar!/b.class", HostOs::Posix),
            "jar:file:/a.jar!/b.class"
        );
        assert_eq!(
            normalize_url_path("jar:/a.jar!b.class", HostOs::Posix),
            "jar:file:/a.jar!/b.class"
        );
        assert_eq!(
            normalize_url_path("file:/a.jar!/b.class", HostOs::Posix),
            "jar:file:/a.jar!/b.class"
        );
    }

    #[test]
    fn jrt_and_http_pass_through() {
        assert_eq!(
            normalize_url_path("jrt:java.base", HostOs::Posix),
            "jrt:java.base"
        );
        assert_eq!(
            normalize_url_path("http://example.com/x.jar", HostOs::Posix),
            "http://example.com/x.jar"
        );
        assert_eq!(
            normalize_url_path("https://example.com/a b", HostOs::Posix),
            "https://example.com/a%20b"
        );
    }

    #[test]
    fn unsafe_chars_encoded_after_rewrite() {
        assert_eq!(
            normalize_url_path("/opt/my libs/a.jar", HostOs::Posix),
            "file:/opt/my%20libs/a.jar"
        );
    }

    #[test]
    fn windows_drive_forms() {
        assert_eq!(
            normalize_url_path("C:/Users/x/y.jar", HostOs::Windows),
            "file:/C:/Users/x/y.jar"
        );
        assert_eq!(
            normalize_url_path("/C:/Users/x/y.jar", HostOs::Windows),
            "file:/C:/Users/x/y.jar"
        );
        assert_eq!(
            normalize_url_path("file:/C:/Users/x/y.jar", HostOs::Windows),
            "file:/C:/Users/x/y.jar"
        );
    }

    #[test]
    fn windows_drive_with_archive() {
        assert_eq!(
            normalize_url_path("C:/libs/a.jar!/b.class", HostOs::Windows),
            "jar:file:/C:/libs/a.jar!/b.class"
        );
    }

    #[test]
    fn drive_letter_is_plain_path_on_posix() {
        // No drive extraction: the colon lands outside the scheme prefix
        // and gets escaped.
        assert_eq!(
            normalize_url_path("C:/Users/x", HostOs::Posix),
            "file:/C%3a/Users/x"
        );
    }

    #[test]
    fn split_drive_forms() {
        assert_eq!(split_drive_prefix("C:/x"), Some(("C:", "/x")));
        assert_eq!(split_drive_prefix("/C:/x"), Some(("C:", "/x")));
        assert_eq!(split_drive_prefix("c:/x"), Some(("c:", "/x")));
        assert_eq!(split_drive_prefix("/usr"), None);
        assert_eq!(split_drive_prefix("1:/x"), None);
        assert_eq!(split_drive_prefix(""), None);
    }

    #[test]
    fn file_jar_ordering_not_symmetric() {
        // Stripping is fixed-order: "jar:" then "file:". A "file:jar:" input
        // keeps its "jar:" segment in the body.
        assert_eq!(
            normalize_url_path("file:jar:/a.jar!/b", HostOs::Posix),
            "jar:file:/jar%3a/a.jar!/b"
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize_url_path("", HostOs::Posix), "file:/");
    }
}
