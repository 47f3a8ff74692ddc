//! Content tree scanning and article discovery.
//!
//! Walks the posts content root and turns every markdown article into an
//! [`Article`] carrying the metadata the sidebar is built from. This is the
//! first half of the index pipeline; [`crate::sidebar`] sorts, groups, and
//! emits what is discovered here.
//!
//! ## Directory Structure
//!
//! ```text
//! docs/posts/                      # Posts content root
//! ├── index.md                     # Section landing page (never indexed)
//! ├── hello-world.md               # Root-level article
//! ├── Data Structures/             # Folder name becomes the category
//! │   ├── sorting.md
//! │   └── trees.md
//! └── Life/
//!     └── japan/                   # Nested folders build "Life/japan"
//!         └── tokyo.md
//! ```
//!
//! ## Category Resolution
//!
//! The enclosing folder path is the category. Only an article sitting
//! directly under the content root may take its category from front-matter;
//! with neither folder nor front-matter it lands in [`ROOT_CATEGORY`].
//! Folder-over-front-matter precedence is a deliberate policy: moving a file
//! into a folder must regroup it even if stale metadata says otherwise.
//!
//! ## Error Policy
//!
//! A missing or unreadable content root is fatal — an empty sidebar would
//! silently ship a broken site. Everything per-file (absent front-matter,
//! unparseable date or order) resolves to defaults and never fails.

use crate::frontmatter::{self, DEFAULT_ORDER};
use crate::urlpath;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("content root not found or not a directory: {0}")]
    MissingRoot(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Category for root-level articles that declare none.
pub const ROOT_CATEGORY: &str = "Articles";

/// One discovered article with resolved metadata.
#[derive(Debug, Clone)]
pub struct Article {
    /// Front-matter `title`, or the filename stem.
    pub title: String,
    /// Enclosing folder path, front-matter fallback, or [`ROOT_CATEGORY`].
    pub category: String,
    /// Parsed front-matter `date`; unparseable values are treated as absent.
    pub date: Option<NaiveDate>,
    /// Front-matter `order`, defaulting to [`DEFAULT_ORDER`] (sorts last).
    pub order: u32,
    /// Root-relative path, extension stripped, un-encoded. Sort tie-break.
    pub rel_stem: String,
    /// `rel_stem` with each segment percent-encoded.
    pub url_path: String,
    /// Full route: section base + `url_path`.
    pub link: String,
}

/// Discover all articles under `root` in deterministic traversal order.
///
/// `base_route` is the section prefix links are rooted at (e.g. `/posts/`).
/// Fails fast when `root` is missing — see the module error policy.
pub fn scan_articles(root: &Path, base_route: &str) -> Result<Vec<Article>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }
    let mut articles = Vec::new();
    scan_directory(root, "", base_route, &mut articles)?;
    Ok(articles)
}

fn scan_directory(
    dir: &Path,
    rel_dir: &str,
    base_route: &str,
    out: &mut Vec<Article>,
) -> Result<(), ScanError> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            // Skip hidden entries (.git, .obsidian, editor droppings)
            !p.file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with('.'))
        })
        .collect();
    entries.sort();

    for entry in entries {
        if entry.is_dir() {
            let name = entry
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let child_rel = if rel_dir.is_empty() {
                name
            } else {
                format!("{rel_dir}/{name}")
            };
            scan_directory(&entry, &child_rel, base_route, out)?;
        } else if is_article(&entry) {
            out.push(read_article(&entry, rel_dir, base_route)?);
        }
    }
    Ok(())
}

/// Markdown files are articles, except the reserved `index.md` landing file.
fn is_article(path: &Path) -> bool {
    let is_md = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("md"));
    let is_index = path.file_stem().is_some_and(|s| s == "index");
    is_md && !is_index
}

fn read_article(path: &Path, rel_dir: &str, base_route: &str) -> Result<Article, ScanError> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let content = fs::read_to_string(path)?;
    let fm = frontmatter::extract(&content);

    let title = fm.title.unwrap_or_else(|| stem.clone());
    let category = if rel_dir.is_empty() {
        fm.category.unwrap_or_else(|| ROOT_CATEGORY.to_string())
    } else {
        // Folder wins over front-matter whenever a folder exists
        rel_dir.to_string()
    };
    let date = fm.date.as_deref().and_then(parse_date);
    let order = fm.order.unwrap_or(DEFAULT_ORDER);

    let rel_stem = if rel_dir.is_empty() {
        stem
    } else {
        format!("{rel_dir}/{stem}")
    };
    let url_path = urlpath::encode_path(&rel_stem);
    let link = format!("{base_route}{url_path}");

    Ok(Article {
        title,
        category,
        date,
        order,
        rel_stem,
        url_path,
        link,
    })
}

/// Best-effort date parsing over the formats seen in real front-matter.
///
/// Anything unrecognized counts as "no date" — the sort treats the article
/// as undated rather than failing the build.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    None
}
