//! Rich-text rendering.
//!
//! Reduces a user-authored HTML field (submission description, journal body,
//! profile) to bracket-tag text and collects the users, submissions and
//! journals it refers to.
//!
//! # Module Structure
//!
//! - `anchor`: user anchor resolution (`/user/<id>` plus display name)
//! - `links`: link classification against the source site
//! - `render`: the recursive renderer and its branch table
//! - `state`: text buffer and reference sets of one walk
//! - `normalize`: the final whitespace pass
//! - `tags`: structural tags, bbcode style tags and class names
//!
//! # Output dialect
//!
//! | Markup | Text |
//! |---|---|
//! | `a.iconusername` | `:iconName:` or `:Nameicon:` |
//! | `a.linkusername` | `:linkName:` |
//! | `a.named_url`, `a.auto_link` | `[url=href]...[/url]` |
//! | `.bbcode` with inline colour | `[color=c]...[/color]` |
//! | `.bbcode.bbcode_quote` | `[quote=Author]...[/quote]` |
//! | `.bbcode.bbcode_<tag>` | `[tag]...[/tag]` |
//! | `.parsed_nav_links` | `[prev,first,next]` |
//! | `.youtubeWrapper` | `[yt]id[/yt]` |
//! | `br` / `hr` | newline / `\n-----\n` |

pub mod anchor;
pub mod links;
pub mod normalize;
pub mod render;
pub mod state;
pub mod tags;

pub use anchor::resolve_anchor;
pub use links::{classify_href, classify_link, LinkTarget};
pub use normalize::normalize_whitespace;
pub use render::Renderer;
pub use state::RenderState;

use dom_query::Selection;
use url::Url;

use crate::error::Result;
use crate::options::Options;
use crate::result::RichText;

/// Render the children of `root` with default options.
pub fn parse_rich_text(root: &Selection, base_url: &Url) -> Result<RichText> {
    parse_rich_text_with_options(root, base_url, &Options::default())
}

/// Render the children of `root`.
///
/// Fails with `UnhandledElementError` on markup without a rule; nothing of
/// the partial walk is returned in that case.
pub fn parse_rich_text_with_options(
    root: &Selection,
    base_url: &Url,
    options: &Options,
) -> Result<RichText> {
    Renderer::new(base_url, options).parse(root)
}
