//! Charset sniffing for saved page snapshots.
//!
//! Snapshots arrive as raw bytes. The declared charset is read from the
//! document head and the bytes are decoded lossily to UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Only the head of a document is searched for a declaration.
const SNIFF_BYTES: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("valid regex")
});

/// Charset label declared in the head of `html`, if any.
fn declared_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_BYTES)]);

    [&*META_CHARSET, &*HTTP_EQUIV_CHARSET]
        .iter()
        .find_map(|re| re.captures(&head)?.get(1).map(|m| m.as_str().to_string()))
}

/// Encoding declared by `html`; UTF-8 when undeclared or unknown.
///
/// A meta-declared UTF-16 label is read as UTF-8, since the declaration
/// itself could only be found in ASCII-compatible bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    declared_charset(html)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .map_or(UTF_8, Encoding::output_encoding)
}

/// Decode `html` to UTF-8, replacing malformed sequences with U+FFFD.
///
/// ```
/// use rs_feedpost::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"windows-1252\"><span class=\"f1\">Caf\xE9</span>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
