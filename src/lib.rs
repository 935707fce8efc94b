//! # fa-scraper
//!
//! Parses FurAffinity HTML into typed records.
//!
//! User-authored fields (submission descriptions, journal bodies, profiles)
//! are reduced to a compact bracket-tag text, and every user, submission and
//! journal the field links to is collected on the way. Whole pages are
//! assembled into submissions, journals, users and paginated listings.
//!
//! ## Quick Start
//!
//! ```rust
//! use fa_scraper::parse_rich_text_html;
//! use url::Url;
//!
//! let base = Url::parse("https://www.furaffinity.net/view/1/").unwrap();
//! let html = r#"Hi <a class="linkusername" href="/user/foo/">Foo</a>!
//!     <span class="bbcode bbcode_b">bold</span>"#;
//!
//! let text = parse_rich_text_html(html, &base)?;
//! assert_eq!(text.text, "Hi :linkFoo:! [b]bold[/b]");
//! assert!(text.refers_to_users.contains("foo"));
//! # Ok::<(), fa_scraper::Error>(())
//! ```
//!
//! ## Pages
//!
//! Fetching is left to the caller. Validate a fetched page with
//! [`pages::check_page`], then hand it to the matching parser in [`pages`].

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Rich-text rendering to bracket-tag text.
pub mod richtext;

/// Whole-page parsers and page validation.
pub mod pages;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, WatchDirection};
pub use result::{
    Journal, Paginated, RichText, Submission, SubmissionPreview, User, UserPreview,
};
pub use richtext::{parse_rich_text, parse_rich_text_with_options};

use url::Url;

/// Render an HTML fragment's rich text with default options.
///
/// The fragment is parsed as a document body.
pub fn parse_rich_text_html(html: &str, base_url: &Url) -> Result<RichText> {
    parse_rich_text_html_with_options(html, base_url, &Options::default())
}

/// Render an HTML fragment's rich text.
pub fn parse_rich_text_html_with_options(
    html: &str,
    base_url: &Url,
    options: &Options,
) -> Result<RichText> {
    let doc = dom::parse(html);
    parse_rich_text_with_options(&doc.select("body"), base_url, options)
}
