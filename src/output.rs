//! CLI output formatting for the index pipeline.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (group, article, nav link) is its semantic identity —
//! title and positional index — with source paths shown as secondary context
//! via indented `Source:` lines. The printout reads as a content inventory
//! while still letting users trace entries back to files.
//!
//! # Output Format
//!
//! ```text
//! Sidebar
//! 001 Data Structures (2 articles)
//!     001 Classic Sorting
//!         Source: Data Structures/sorting.md
//!     002 Binary Trees
//!         Source: Data Structures/trees.md
//!
//! About
//! 001 About
//!     About Me → /about/
//! 002 Projects
//!     Projects → /about/Projects/
//!
//! Nav
//!     Home → /
//!     Posts → /posts/
//!
//! Indexed 2 articles in 1 category, 5 sidebar routes
//! ```
//!
//! # Architecture
//!
//! The stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::sidebar::SiteIndex;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional count.
///
/// ```text
/// 001 Data Structures (2 articles)
/// 001 About
/// ```
fn entity_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(1) => format!("{} {} (1 article)", format_index(index), title),
        Some(n) => format!("{} {} ({} articles)", format_index(index), title, n),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Format the full index summary.
pub fn format_index_output(site_index: &SiteIndex) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Sidebar".to_string());
    for (pos, group) in site_index.groups.iter().enumerate() {
        lines.push(entity_header(pos + 1, &group.text, Some(group.items.len())));
        for (entry_pos, entry) in group.items.iter().enumerate() {
            lines.push(format!(
                "{}{}",
                indent(1),
                entity_header(entry_pos + 1, &entry.text, None)
            ));
            // The un-encoded source path is recoverable from the articles
            if let Some(article) = site_index.articles.iter().find(|a| a.link == entry.link) {
                lines.push(format!("{}Source: {}.md", indent(2), article.rel_stem));
            }
        }
    }

    lines.push(String::new());
    lines.push("About".to_string());
    for (pos, group) in site_index.about.groups.iter().enumerate() {
        lines.push(entity_header(pos + 1, &group.text, None));
        for entry in &group.items {
            lines.push(format!("{}{} → {}", indent(1), entry.text, entry.link));
        }
    }

    lines.push(String::new());
    lines.push("Nav".to_string());
    for link in &site_index.manifest.site.nav {
        lines.push(format!("{}{} → {}", indent(1), link.text, link.link));
    }

    lines.push(String::new());
    let article_count = site_index.articles.len();
    let category_count = site_index.groups.len();
    let route_count = site_index.manifest.sidebar.len();
    lines.push(format!(
        "Indexed {} article{} in {} categor{}, {} sidebar route{}",
        article_count,
        if article_count == 1 { "" } else { "s" },
        category_count,
        if category_count == 1 { "y" } else { "ies" },
        route_count,
        if route_count == 1 { "" } else { "s" },
    ));

    lines
}

/// Print the index summary to stdout.
pub fn print_index_output(site_index: &SiteIndex) {
    for line in format_index_output(site_index) {
        println!("{line}");
    }
}
