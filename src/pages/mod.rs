//! Page parsers: whole site pages to typed records.
//!
//! Each parser takes a parsed page and the URL it was fetched from (relative
//! links resolve against it). Rich-text fields go through the renderer in
//! [`crate::richtext`], so an unhandled element in a description fails the
//! whole record.
//!
//! # Module Structure
//!
//! - `system`: error-page and partial-load detection
//! - `date`: site date formats
//! - `submission`: submission pages
//! - `journal`: journal pages and journal listings
//! - `user`: profile pages and watch lists
//! - `listing`: gallery/browse figures and pagination

pub mod date;
pub mod journal;
pub mod listing;
pub mod submission;
pub mod system;
pub mod user;

pub use date::parse_site_date;
pub use journal::{parse_journal, parse_journal_section, parse_journals_page};
pub use listing::{
    max_submission_id, parse_browse_page, parse_gallery_page, parse_submission_figure,
};
pub use submission::parse_submission;
pub use system::check_page;
pub use user::{parse_user_page, parse_watch_list};

use chrono::{DateTime, Utc};
use dom_query::Selection;
use url::Url;

use crate::dom;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::RichText;
use crate::richtext::parse_rich_text_with_options;

/// First node of `sel`, or `MissingField(what)`.
fn required<'a>(sel: &Selection<'a>, what: &'static str) -> Result<Selection<'a>> {
    dom::first(sel).ok_or(Error::MissingField(what))
}

/// Resolve an href found on the page.
fn resolve_url(page_url: &Url, href: &str) -> Result<Url> {
    page_url.join(href).map_err(|source| Error::InvalidUrl {
        url: href.to_string(),
        source,
    })
}

/// Optional URL attribute, resolved. Empty or unresolvable values are absent.
fn optional_url(page_url: &Url, sel: &Selection, attr: &str) -> Option<Url> {
    dom::get_attribute(sel, attr)
        .filter(|href| !href.trim().is_empty())
        .and_then(|href| page_url.join(&href).ok())
}

/// Date in the `title` of the first node, as on `span.popup_date`.
fn popup_date(sel: &Selection) -> Result<DateTime<Utc>> {
    let title = dom::first(sel)
        .and_then(|span| dom::get_attribute(&span, "title"))
        .ok_or(Error::MissingField("created_at"))?;
    parse_site_date(&title)
}

/// Render a rich-text field and keep its raw inner HTML.
fn rich_text_field(
    el: &Selection,
    page_url: &Url,
    options: &Options,
) -> Result<(RichText, String)> {
    let text = parse_rich_text_with_options(el, page_url, options)?;
    Ok((text, dom::inner_html(el).to_string()))
}
