//! URL path encoding for content-relative routes.
//!
//! Article routes mirror the content tree, so directory and file names with
//! spaces, `%`, or non-ASCII characters (common in human-named folders like
//! `topic 1/My Post.md`) must be percent-encoded before they can appear in a
//! link. Each `/`-separated segment is encoded independently — the path
//! structure survives, everything inside a segment is escaped.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};

/// Characters left literal by component encoding: ASCII alphanumerics plus
/// `- _ . ! ~ * ' ( )`. Everything else — including `%` itself and each
/// byte of multi-byte UTF-8 sequences — is escaped.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path segment.
pub fn encode_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), COMPONENT_ENCODE_SET).to_string()
}

/// Encode a `/`-separated relative path segment by segment.
///
/// Literal `/` separators are preserved; everything within a segment is
/// escaped. The result round-trips through standard percent-decoding.
pub fn encode_path(rel: &str) -> String {
    rel.split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/")
}
