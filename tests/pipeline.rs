//! End-to-end pipeline tests: content tree in, manifest out.
//!
//! These build a real content directory with `tempfile`, run the full
//! index pipeline, and assert on the assembled manifest — the same artifact
//! the `index` command serializes.

use navpress::scan::ScanError;
use navpress::sidebar::{self, BuildError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A content tree exercising every metadata source: front-matter titles,
/// explicit ordering, dates, folder categories, and the about section.
fn setup_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write(
        root,
        "posts/hello-world.md",
        "---\ntitle: Hello World\ndate: 2024-01-15\n---\n\nFirst post.\n",
    );
    write(
        root,
        "posts/getting-started.md",
        "---\ntitle: Getting Started\ndate: 2024-02-01\n---\n\nSecond post.\n",
    );
    write(
        root,
        "posts/index.md",
        "# Posts\n\nListing page, not an article.\n",
    );
    write(
        root,
        "posts/Data Structures/sorting.md",
        "---\ntitle: Classic Sorting\norder: 1\n---\n\nSorting.\n",
    );
    write(
        root,
        "posts/Data Structures/trees.md",
        "---\norder: 2\n---\n\nTrees.\n",
    );
    write(root, "posts/Life/travel.md", "Trip notes, no front-matter.\n");

    write(root, "about/index.md", "# About\n");
    write(root, "about/Projects/index.md", "# Projects\n");
    write(root, "about/Reading/notes.md", "No landing file here.\n");

    tmp
}

#[test]
fn full_pipeline_builds_expected_sidebar() {
    let tmp = setup_site();
    let site_index = sidebar::build(tmp.path()).unwrap();

    // Groups alphabetical; Articles members newest-first (both order 999)
    let titles: Vec<&str> = site_index.groups.iter().map(|g| g.text.as_str()).collect();
    assert_eq!(titles, vec!["Articles", "Data Structures", "Life"]);

    let articles_group = &site_index.groups[0];
    let texts: Vec<&str> = articles_group.items.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Getting Started", "Hello World"]);

    // Explicit order wins inside the folder category
    let ds_group = &site_index.groups[1];
    let texts: Vec<&str> = ds_group.items.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Classic Sorting", "trees"]);

    // Folder names with spaces are encoded in links, readable in headings
    assert_eq!(
        ds_group.items[0].link,
        "/posts/Data%20Structures/sorting"
    );
}

#[test]
fn index_md_never_appears_in_sidebar() {
    let tmp = setup_site();
    let site_index = sidebar::build(tmp.path()).unwrap();
    for groups in site_index.manifest.sidebar.values() {
        for group in groups {
            for entry in &group.items {
                assert!(
                    !entry.link.ends_with("/index"),
                    "landing page leaked into sidebar: {}",
                    entry.link
                );
            }
        }
    }
}

#[test]
fn all_posts_routes_share_one_sidebar() {
    let tmp = setup_site();
    let site_index = sidebar::build(tmp.path()).unwrap();
    let sidebar = &site_index.manifest.sidebar;

    let listing = sidebar.get("/posts/").expect("listing route");
    assert_eq!(sidebar.get("/posts"), Some(listing));
    for article in &site_index.articles {
        assert_eq!(
            sidebar.get(&article.link),
            Some(listing),
            "sidebar differs on {}",
            article.link
        );
    }
}

#[test]
fn about_section_indexed_with_own_sidebar() {
    let tmp = setup_site();
    let site_index = sidebar::build(tmp.path()).unwrap();
    let sidebar = &site_index.manifest.sidebar;

    let about = sidebar.get("/about/").expect("about route");
    let titles: Vec<&str> = about.iter().map(|g| g.text.as_str()).collect();
    // Reading/ has no index.md and is skipped
    assert_eq!(titles, vec!["About", "Projects"]);
    assert_eq!(sidebar.get("/about/Projects/"), Some(about));
    assert_eq!(sidebar.get("/about/Projects"), Some(about));
}

#[test]
fn missing_posts_root_aborts_missing_about_does_not() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "posts/solo.md", "Only post.\n");
    // No about/ directory at all: build still succeeds with the lead group
    let site_index = sidebar::build(tmp.path()).unwrap();
    let about = site_index.manifest.sidebar.get("/about/").unwrap();
    assert_eq!(about.len(), 1);
    assert_eq!(about[0].text, "About");

    // No posts/ directory: build fails
    let empty = TempDir::new().unwrap();
    let result = sidebar::build(empty.path());
    assert!(matches!(
        result,
        Err(BuildError::Scan(ScanError::MissingRoot(_)))
    ));
}

#[test]
fn manifest_serializes_site_and_sidebar() {
    let tmp = setup_site();
    write(
        tmp.path(),
        "site.toml",
        "title = \"Ada's Blog\"\nbase = \"/blog/\"\n",
    );
    let site_index = sidebar::build(tmp.path()).unwrap();
    let json = serde_json::to_string_pretty(&site_index.manifest).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["site"]["title"], "Ada's Blog");
    assert_eq!(value["site"]["base"], "/blog/");
    assert_eq!(value["site"]["nav"][0]["text"], "Home");
    assert!(value["sidebar"]["/posts/"].is_array());
    let group = &value["sidebar"]["/posts/"][0];
    assert_eq!(group["collapsed"], false);
    assert_eq!(group["collapsible"], true);
    assert!(group["items"][0]["link"].is_string());
}

#[test]
fn renamed_sections_move_all_routes() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "site.toml",
        "[content]\nposts_dir = \"articles\"\n",
    );
    write(tmp.path(), "articles/post.md", "Body.\n");
    let site_index = sidebar::build(tmp.path()).unwrap();
    let sidebar = &site_index.manifest.sidebar;
    assert!(sidebar.contains_key("/articles/"));
    assert!(sidebar.contains_key("/articles/post"));
    assert!(!sidebar.contains_key("/posts/"));
}
