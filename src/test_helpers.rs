//! Shared test utilities for the navpress test suite.
//!
//! Provides fixture builders, article constructors, and sidebar-shape
//! assertions used across the module tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_content();
//! let site_index = sidebar::build(tmp.path()).unwrap();
//!
//! assert_sidebar_shape(&site_index.groups, &[
//!     ("Articles", &["Getting Started", "Hello World"]),
//!     ("Data Structures", &["Classic Sorting", "trees"]),
//! ]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::Article;
use crate::types::SidebarGroup;
use crate::urlpath;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write a markdown article at `rel` below `dir`, creating parent
/// directories. `front` is the front-matter body (no delimiters); pass ""
/// for an article without front-matter.
pub fn write_article(dir: &Path, rel: &str, front: &str, body: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let content = if front.is_empty() {
        body.to_string()
    } else {
        format!("---\n{front}---\n\n{body}")
    };
    std::fs::write(path, content).unwrap();
}

/// Build a representative content root in a temp directory:
///
/// ```text
/// <tmp>/
/// ├── posts/
/// │   ├── index.md                  # excluded from the index
/// │   ├── hello-world.md            # Articles (root fallback)
/// │   ├── getting-started.md        # Articles, dated newer
/// │   ├── Data Structures/
/// │   │   ├── sorting.md            # order 1
/// │   │   └── trees.md              # order 2, no title
/// │   └── Life/
/// │       └── travel.md             # no front-matter at all
/// └── about/
///     ├── index.md
///     ├── Projects/index.md
///     └── Reading/notes.md          # no landing file → skipped
/// ```
pub fn setup_content() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let posts = tmp.path().join("posts");

    write_article(&posts, "index.md", "", "Posts landing page.");
    write_article(
        &posts,
        "hello-world.md",
        "title: Hello World\ndate: 2024-01-15\n",
        "First post.",
    );
    write_article(
        &posts,
        "getting-started.md",
        "title: Getting Started\ndate: 2024-02-01\n",
        "Second post.",
    );
    write_article(
        &posts,
        "Data Structures/sorting.md",
        "title: Classic Sorting\norder: 1\n",
        "Sorting walkthrough.",
    );
    write_article(&posts, "Data Structures/trees.md", "order: 2\n", "Trees.");
    write_article(&posts, "Life/travel.md", "", "Trip notes.");

    let about = tmp.path().join("about");
    write_article(&about, "index.md", "", "About landing page.");
    write_article(&about, "Projects/index.md", "", "Projects landing.");
    write_article(&about, "Reading/notes.md", "", "No landing file here.");

    tmp
}

// =========================================================================
// Article constructors — build articles without touching the filesystem
// =========================================================================

/// An undated article. Title is the last path segment of `rel_stem`.
pub fn article(rel_stem: &str, category: &str, order: u32) -> Article {
    let title = rel_stem.rsplit('/').next().unwrap_or(rel_stem).to_string();
    let url_path = urlpath::encode_path(rel_stem);
    Article {
        title,
        category: category.to_string(),
        date: None,
        order,
        rel_stem: rel_stem.to_string(),
        url_path: url_path.clone(),
        link: format!("/posts/{url_path}"),
    }
}

/// A dated article; `date` must be `YYYY-MM-DD`.
pub fn dated_article(rel_stem: &str, category: &str, order: u32, date: &str) -> Article {
    let mut a = article(rel_stem, category, order);
    a.date = Some(date.parse().unwrap());
    a
}

// =========================================================================
// Sidebar lookups — panics with a clear message on miss
// =========================================================================

/// Find a group by heading. Panics if not found.
pub fn find_group<'a>(groups: &'a [SidebarGroup], text: &str) -> &'a SidebarGroup {
    groups.iter().find(|g| g.text == text).unwrap_or_else(|| {
        let titles = group_titles(groups);
        panic!("group '{text}' not found. Available: {titles:?}")
    })
}

/// All group headings in order.
pub fn group_titles(groups: &[SidebarGroup]) -> Vec<&str> {
    groups.iter().map(|g| g.text.as_str()).collect()
}

/// All entry texts of a group in order.
pub fn entry_texts(group: &SidebarGroup) -> Vec<&str> {
    group.items.iter().map(|e| e.text.as_str()).collect()
}

/// All entry links of a group in order.
pub fn entry_links(group: &SidebarGroup) -> Vec<&str> {
    group.items.iter().map(|e| e.link.as_str()).collect()
}

/// Assert that the group sequence matches an expected shape.
///
/// Each entry is `(heading, member texts)`.
///
/// ```rust
/// assert_sidebar_shape(&groups, &[
///     ("Articles", &["Getting Started", "Hello World"]),
///     ("Data Structures", &["Classic Sorting", "trees"]),
/// ]);
/// ```
pub fn assert_sidebar_shape(groups: &[SidebarGroup], expected: &[(&str, &[&str])]) {
    let expected_titles: Vec<&str> = expected.iter().map(|(t, _)| *t).collect();
    assert_eq!(
        group_titles(groups),
        expected_titles,
        "group heading order mismatch"
    );

    for (title, members) in expected {
        let group = find_group(groups, title);
        assert_eq!(
            entry_texts(group),
            members.to_vec(),
            "members of '{title}' mismatch"
        );
    }
}
