//! Site configuration module.
//!
//! Handles loading and validating `site.toml` from the content root. The
//! configuration is static site metadata passed through to the rendering
//! framework — everything the framework needs besides the generated sidebar.
//!
//! ## Config File Location
//!
//! ```text
//! docs/
//! ├── site.toml        # Site configuration (optional)
//! ├── posts/           # Article content root
//! └── about/           # About section
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! lang = "en-US"             # Site language tag
//! title = "My Blog"          # Site title
//! description = "Notes and articles"
//! base = "/"                 # URL base path the site is served under
//! favicon = "/favicon.ico"   # Favicon route
//! # logo = "logo.png"        # Navbar logo (omitted by default)
//!
//! [[nav]]                    # Top navbar links, in display order
//! text = "Home"
//! link = "/"
//!
//! [footer]
//! message = ""               # Footer line
//! copyright = ""             # Copyright line
//!
//! [content]
//! posts_dir = "posts"        # Articles directory under the content root
//! about_dir = "about"        # About section directory
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.

use crate::types::NavLink;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site language tag.
    pub lang: String,
    /// Site title shown in the navbar and page titles.
    pub title: String,
    /// Site description for meta tags.
    pub description: String,
    /// URL base path the site is served under (must start and end with `/`).
    pub base: String,
    /// Favicon route.
    pub favicon: String,
    /// Navbar logo (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Top navbar links, in display order.
    pub nav: Vec<NavLink>,
    /// Footer lines.
    pub footer: FooterConfig,
    /// Content section directory names.
    pub content: ContentConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "en-US".to_string(),
            title: "My Blog".to_string(),
            description: "Notes and articles".to_string(),
            base: "/".to_string(),
            favicon: "/favicon.ico".to_string(),
            logo: None,
            nav: vec![
                NavLink::new("Home", "/"),
                NavLink::new("Posts", "/posts/"),
                NavLink::new("About", "/about/"),
            ],
            footer: FooterConfig::default(),
            content: ContentConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            return Err(ConfigError::Validation(
                "base must start and end with '/'".into(),
            ));
        }
        for link in &self.nav {
            if link.text.is_empty() || link.link.is_empty() {
                return Err(ConfigError::Validation(
                    "nav entries must have non-empty text and link".into(),
                ));
            }
        }
        self.content.validate()
    }
}

/// Footer lines shown by the framework below the content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    pub message: String,
    pub copyright: String,
}

/// Content section directory names under the content root.
///
/// Section routes are derived from the directory names, so renaming
/// `posts_dir` moves the whole section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    pub posts_dir: String,
    pub about_dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            posts_dir: "posts".to_string(),
            about_dir: "about".to_string(),
        }
    }
}

impl ContentConfig {
    /// Listing route of the posts section, trailing slash included.
    pub fn posts_route(&self) -> String {
        format!("/{}/", self.posts_dir)
    }

    /// Base route of the about section, trailing slash included.
    pub fn about_route(&self) -> String {
        format!("/{}/", self.about_dir)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, dir) in [("posts_dir", &self.posts_dir), ("about_dir", &self.about_dir)] {
            if dir.is_empty() || dir.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "content.{key} must be a single non-empty directory name"
                )));
            }
        }
        Ok(())
    }
}

/// Load `site.toml` from the content root.
///
/// A missing file yields the stock defaults; a present file must parse and
/// validate.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("site.toml");
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let contents = fs::read_to_string(&path)?;
    let config: SiteConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// A fully documented stock `site.toml`, printed by `gen-config`.
pub fn stock_site_toml() -> &'static str {
    r##"# navpress site configuration
# All options are optional - the values below are the stock defaults.

# Site language tag.
lang = "en-US"

# Site title shown in the navbar and page titles.
title = "My Blog"

# Site description for meta tags.
description = "Notes and articles"

# URL base path the site is served under. Must start and end with '/'.
base = "/"

# Favicon route.
favicon = "/favicon.ico"

# Navbar logo. Uncomment to show one.
# logo = "logo.png"

# Top navbar links, in display order.
[[nav]]
text = "Home"
link = "/"

[[nav]]
text = "Posts"
link = "/posts/"

[[nav]]
text = "About"
link = "/about/"

# Footer lines. Empty strings hide them.
[footer]
message = ""
copyright = ""

# Content section directory names under the content root.
[content]
posts_dir = "posts"
about_dir = "about"
"##
}
