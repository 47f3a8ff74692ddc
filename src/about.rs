//! About-section indexing.
//!
//! The about section is a shallow, optional content area: one level of
//! subdirectories under `about/`, each holding an `index.md` landing page.
//! Every such subdirectory becomes its own single-entry sidebar group below
//! a fixed lead group.
//!
//! Unlike the posts scan, a missing about root is not an error — the section
//! is non-critical, so the indexer degrades to the lead group alone rather
//! than failing the build.

use crate::types::{SidebarEntry, SidebarGroup, SidebarIndex};
use crate::urlpath;
use std::fs;
use std::path::{Path, PathBuf};

/// Lead group heading and its single entry.
const LEAD_GROUP: &str = "About";
const LEAD_ENTRY: &str = "About Me";

/// The indexed about section: its sidebar groups and the subdirectory
/// routes that display them.
#[derive(Debug)]
pub struct AboutSection {
    pub groups: Vec<SidebarGroup>,
    /// Encoded routes of the indexed subdirectories, trailing slash included.
    pub routes: Vec<String>,
}

/// Index the about section under `root`.
///
/// Never fails: subdirectories without an `index.md` landing file are
/// silently skipped, and a missing or unreadable root yields just the lead
/// group.
pub fn scan_about(root: &Path, base_route: &str) -> AboutSection {
    let lead = SidebarGroup::fixed(
        LEAD_GROUP,
        vec![SidebarEntry {
            text: LEAD_ENTRY.to_string(),
            link: base_route.to_string(),
        }],
    );
    let mut groups = vec![lead];
    let mut routes = Vec::new();

    let Ok(entries) = fs::read_dir(root) else {
        return AboutSection { groups, routes };
    };

    let mut subdirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_dir()
                && !p
                    .file_name()
                    .is_some_and(|n| n.to_string_lossy().starts_with('.'))
        })
        .collect();
    subdirs.sort();

    for dir in subdirs {
        if !dir.join("index.md").is_file() {
            continue;
        }
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let route = format!("{base_route}{}/", urlpath::encode_segment(&name));
        groups.push(SidebarGroup::fixed(
            name.as_str(),
            vec![SidebarEntry {
                text: name.clone(),
                link: route.clone(),
            }],
        ));
        routes.push(route);
    }

    AboutSection { groups, routes }
}

/// Register the about sidebar under every route that displays it: the
/// section base and each subdirectory route, each with and without the
/// trailing slash.
pub fn extend_index(index: &mut SidebarIndex, base_route: &str, section: &AboutSection) {
    let mut keys = vec![base_route.to_string()];
    keys.extend(section.routes.iter().cloned());
    for key in keys {
        index.insert(key.trim_end_matches('/').to_string(), section.groups.clone());
        index.insert(key, section.groups.clone());
    }
}
