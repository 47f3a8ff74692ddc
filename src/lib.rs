//! # navpress
//!
//! A sidebar and navigation index generator for markdown blog and
//! documentation sites. Your filesystem is the data source: folders become
//! categories, front-matter supplies titles, dates and explicit ordering,
//! and the output is a ready-to-consume sidebar definition for the site
//! framework.
//!
//! # Architecture: One-Shot Index Pipeline
//!
//! navpress runs once per site build, synchronously, producing a single
//! JSON manifest the rendering framework reads at startup:
//!
//! ```text
//! walk docs/posts/  →  parse front-matter  →  sort  →  group  →  site.json
//! ```
//!
//! Each step is a pure function over the previous step's output, so unit
//! tests can exercise ordering and grouping logic on in-memory articles
//! without touching a real content tree.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the posts tree, resolves per-article metadata, handles the fatal-on-missing-root policy |
//! | [`frontmatter`] | Best-effort extraction of `title`/`category`/`date`/`order` from the leading `---` block |
//! | [`urlpath`] | Segment-wise percent-encoding of content-relative routes |
//! | [`sidebar`] | Total article ordering, category grouping, per-route sidebar index, pipeline entry point |
//! | [`about`] | The optional about section: one group per landing-page subdirectory, degrades instead of failing |
//! | [`config`] | `site.toml` loading, validation, and the documented stock config |
//! | [`types`] | Serialized sidebar/nav types shared with the framework |
//! | [`output`] | CLI output formatting — tree-based display of index results |
//!
//! # Design Decisions
//!
//! ## Folders Over Front-Matter
//!
//! A file's enclosing folder path always wins as its category; front-matter
//! `category` only applies to files sitting directly under the content
//! root. Moving a file is therefore always sufficient to regroup it — stale
//! metadata can't pin an article to a category its location contradicts.
//!
//! ## One Sidebar, Many Routes
//!
//! The emitted index maps the listing route and every article route to the
//! same group sequence. The framework looks sidebars up by longest route
//! prefix; registering every route explicitly keeps the sidebar identical
//! on every page without relying on the framework's prefix semantics.
//!
//! ## Two-Tier Error Policy
//!
//! A missing posts root aborts the build — an empty sidebar would silently
//! ship a broken site. Everything per-file resolves to documented defaults,
//! because a best-effort index beats a build failed over one bad post. The
//! about section goes one step further and tolerates a wholly missing root,
//! degrading to its static lead group.

pub mod about;
pub mod config;
pub mod frontmatter;
pub mod output;
pub mod scan;
pub mod sidebar;
pub mod types;
pub mod urlpath;

#[cfg(test)]
pub(crate) mod test_helpers;
