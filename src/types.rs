//! Shared types serialized into the site manifest.
//!
//! These types form the contract with the site-rendering framework: the
//! sidebar structures feed its sidebar slot, the nav links feed its top
//! navbar. Field names match what the framework's theme expects, so renames
//! here are breaking changes to the generated `site.json`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single sidebar link: display text plus target route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarEntry {
    pub text: String,
    pub link: String,
}

/// One category group in the sidebar.
///
/// Article groups are collapsible and start expanded; fixed groups (the
/// about section) render as plain headings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub text: String,
    pub collapsed: bool,
    pub collapsible: bool,
    pub items: Vec<SidebarEntry>,
}

impl SidebarGroup {
    /// A collapsible group, expanded by default. Used for article categories.
    pub fn collapsible(text: impl Into<String>, items: Vec<SidebarEntry>) -> Self {
        Self {
            text: text.into(),
            collapsed: false,
            collapsible: true,
            items,
        }
    }

    /// A fixed (non-collapsible) group. Used for the about section.
    pub fn fixed(text: impl Into<String>, items: Vec<SidebarEntry>) -> Self {
        Self {
            text: text.into(),
            collapsed: false,
            collapsible: false,
            items,
        }
    }
}

/// Mapping from URL-path prefix to the sidebar shown on pages under it.
///
/// A `BTreeMap` keeps the serialized key order deterministic across builds.
/// Built once per build and never mutated afterward.
pub type SidebarIndex = BTreeMap<String, Vec<SidebarGroup>>;

/// A top navbar link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

impl NavLink {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}
