//! Front-matter extraction from markdown articles.
//!
//! An article may begin with a metadata block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Classic Sorting Algorithms
//! category: Data Structures
//! date: 2024-05-01
//! order: 1
//! ---
//! Body text...
//! ```
//!
//! Extraction is best-effort and never fails: a missing or unterminated
//! block, an unknown key, or an unparseable value all fall back to defaults
//! at the call site. One bad post must not break the build.
//!
//! ## Value semantics
//!
//! Each recognized key is resolved by a line scan over the block — the first
//! line carrying a non-empty value wins, later occurrences are ignored.
//! Values are trimmed and quote characters (`'`, `"`) are stripped, so
//! `title: "Hello"` and `title: Hello` are equivalent.

use regex::Regex;
use std::sync::OnceLock;

/// Sort sentinel for articles without an explicit `order` — they sort last.
pub const DEFAULT_ORDER: u32 = 999;

/// Raw metadata extracted from an article's front-matter block.
///
/// All fields are optional; `None` means the key was absent (or its value
/// unusable) and the scan-time default applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub order: Option<u32>,
}

static BLOCK_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches a front-matter block at the very start of the file: an opening
/// `---` line, the block body, a closing `---` line.
fn block_regex() -> &'static Regex {
    BLOCK_REGEX.get_or_init(|| Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---").unwrap())
}

/// Extract front-matter from article content.
///
/// Returns default (all-`None`) metadata when the block is absent or
/// malformed — extraction is non-fatal by design.
pub fn extract(content: &str) -> FrontMatter {
    let Some(captures) = block_regex().captures(content) else {
        return FrontMatter::default();
    };
    let block = captures.get(1).map_or("", |m| m.as_str());

    FrontMatter {
        title: scan_value(block, "title"),
        category: scan_value(block, "category"),
        date: scan_value(block, "date"),
        order: scan_value(block, "order").and_then(|v| v.parse().ok()),
    }
}

/// Scan the block for the first `key: value` line with a usable value.
///
/// Keys are matched at line start (after optional indentation); the value is
/// trimmed and stripped of quote characters. Lines whose value is empty
/// after cleanup don't count as a match — scanning continues.
fn scan_value(block: &str, key: &str) -> Option<String> {
    for line in block.lines() {
        let Some(rest) = line.trim_start().strip_prefix(key) else {
            continue;
        };
        let Some(raw) = rest.strip_prefix(':') else {
            continue;
        };
        let cleaned: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, '"' | '\''))
            .collect();
        let cleaned = cleaned.trim();
        if !cleaned.is_empty() {
            return Some(cleaned.to_string());
        }
    }
    None
}
