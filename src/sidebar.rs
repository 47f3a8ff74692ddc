//! Sidebar assembly: article ordering, category grouping, route indexing.
//!
//! The second half of the index pipeline. Takes the articles discovered by
//! [`crate::scan`], applies the total sort order, partitions into category
//! groups, and emits the per-route [`SidebarIndex`] — every route that can
//! display the posts sidebar maps to the identical group sequence, so the
//! sidebar never changes shape as the reader moves between articles.
//!
//! ## Sort Order
//!
//! Articles are ordered by, in priority:
//!
//! 1. ascending `order` (explicit front-matter ranking);
//! 2. at equal order, descending date — newest first — when both articles
//!    carry one; a dated article beats an undated one;
//! 3. two undated articles fall back to ascending relative path.
//!
//! The sort is stable: articles comparing equal keep traversal order.
//!
//! ## Group Order
//!
//! Groups are sorted alphabetically by category name. This is independent of
//! the member sort — a category whose articles all sort last still appears
//! at its alphabetical position.

use crate::about::{self, AboutSection};
use crate::config::{self, ConfigError, SiteConfig};
use crate::scan::{self, Article, ScanError};
use crate::types::{SidebarEntry, SidebarGroup, SidebarIndex};
use serde::Serialize;
use std::cmp::Ordering;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// The emitted artifact: site metadata plus the per-route sidebar index.
///
/// Serialized once per build as pretty JSON and consumed by the site
/// framework at build start; never mutated afterward.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub site: SiteConfig,
    pub sidebar: SidebarIndex,
}

/// Everything one build produces, kept apart for display purposes.
///
/// The manifest is what gets written; the sorted articles, groups, and
/// about section feed the CLI summary.
#[derive(Debug)]
pub struct SiteIndex {
    pub articles: Vec<Article>,
    pub groups: Vec<SidebarGroup>,
    pub about: AboutSection,
    pub manifest: Manifest,
}

/// Run the full index pipeline against a content root.
///
/// Loads `site.toml`, scans the posts section (fatal if missing), indexes
/// the about section (tolerant if missing), and assembles the manifest.
/// Pure given an unchanged filesystem snapshot.
pub fn build(source: &Path) -> Result<SiteIndex, BuildError> {
    let site = config::load_config(source)?;

    let posts_route = site.content.posts_route();
    let mut articles = scan::scan_articles(&source.join(&site.content.posts_dir), &posts_route)?;
    sort_articles(&mut articles);
    let groups = build_groups(&articles);
    let mut index = build_sidebar_index(&posts_route, &articles, &groups);

    let about_route = site.content.about_route();
    let about = about::scan_about(&source.join(&site.content.about_dir), &about_route);
    about::extend_index(&mut index, &about_route, &about);

    let manifest = Manifest {
        site,
        sidebar: index,
    };
    Ok(SiteIndex {
        articles,
        groups,
        about,
        manifest,
    })
}

/// Apply the total sort order described in the module docs.
pub fn sort_articles(articles: &mut [Article]) {
    articles.sort_by(compare_articles);
}

fn compare_articles(a: &Article, b: &Article) -> Ordering {
    match a.order.cmp(&b.order) {
        Ordering::Equal => match (a.date, b.date) {
            // Newest first; equal dates stay in traversal order
            (Some(da), Some(db)) => db.cmp(&da),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.rel_stem.cmp(&b.rel_stem),
        },
        unequal => unequal,
    }
}

/// Partition sorted articles into category groups.
///
/// Members keep their sorted relative order; the groups themselves are then
/// sorted alphabetically by category name.
pub fn build_groups(articles: &[Article]) -> Vec<SidebarGroup> {
    let mut groups: Vec<SidebarGroup> = Vec::new();
    for article in articles {
        let entry = SidebarEntry {
            text: article.title.clone(),
            link: article.link.clone(),
        };
        match groups.iter_mut().find(|g| g.text == article.category) {
            Some(group) => group.items.push(entry),
            None => groups.push(SidebarGroup::collapsible(article.category.as_str(), vec![entry])),
        }
    }
    groups.sort_by(|a, b| a.text.cmp(&b.text));
    groups
}

/// Map every posts route to the same group sequence.
///
/// Keys are the listing route with and without its trailing slash plus each
/// article's own link, so the sidebar is identical regardless of which
/// article is open.
pub fn build_sidebar_index(
    base_route: &str,
    articles: &[Article],
    groups: &[SidebarGroup],
) -> SidebarIndex {
    let mut index = SidebarIndex::new();
    index.insert(base_route.to_string(), groups.to_vec());
    index.insert(
        base_route.trim_end_matches('/').to_string(),
        groups.to_vec(),
    );
    for article in articles {
        index.insert(article.link.clone(), groups.to_vec());
    }
    index
}
