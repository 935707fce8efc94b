//! Submission listings and pagination.
//!
//! Gallery, scraps and browse pages list submissions as `figure` elements.
//! Every listing page carries its pagination as small forms whose button
//! text names the direction; the form `action` points at the target page.

use dom_query::{Document, Selection};
use tracing::debug;
use url::Url;

use super::{optional_url, required};
use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::SUBMISSION_PATH;
use crate::result::{Paginated, SubmissionPreview};
use crate::richtext::resolve_anchor;

/// Button text of gallery and scraps pagination.
pub const GALLERY_MATCHERS: (&str, &str) = ("Next", "Prev");

/// Button text of browse pagination.
pub const BROWSE_MATCHERS: (&str, &str) = ("Next", "Back");

/// Wrap `data` with the next and previous page numbers found on `doc`.
pub fn paginate<T>(
    doc: &Document,
    page_url: &Url,
    data: T,
    (next_matcher, prev_matcher): (&str, &str),
) -> Paginated<T> {
    Paginated {
        next_page: find_page_form(doc, page_url, next_matcher),
        prev_page: find_page_form(doc, page_url, prev_matcher),
        data,
    }
}

fn find_page_form(doc: &Document, page_url: &Url, matcher: &str) -> Option<u32> {
    let action = doc
        .select("form")
        .iter()
        .find(|form| form.text().contains(matcher))
        .and_then(|form| dom::get_attribute(&form, "action"))?;

    page_number(page_url, &action)
}

/// Page number a pagination link points at.
///
/// A link back to the requested page means there is no page in that
/// direction. Otherwise the last path segment is the page number.
#[must_use]
pub fn page_number(page_url: &Url, href: &str) -> Option<u32> {
    if href.is_empty() {
        return None;
    }

    let target = match page_url.join(href) {
        Ok(url) => url,
        Err(err) => {
            debug!(href, %err, "unresolvable pagination link");
            return None;
        }
    };

    let target_path = normalized_path(&target);
    if normalized_path(page_url) == target_path {
        return None;
    }

    let segment = target_path.rsplit('/').next().unwrap_or_default();
    match segment.parse() {
        Ok(page) => Some(page),
        Err(_) => {
            debug!(href, "pagination link without a page number");
            None
        }
    }
}

fn normalized_path(url: &Url) -> &str {
    url.path().trim_end_matches('/')
}

/// One `figure` of a listing.
pub fn parse_submission_figure(figure: &Selection, page_url: &Url) -> Result<SubmissionPreview> {
    let id = dom::get_attribute(&figure.select("a"), "href")
        .and_then(|href| SUBMISSION_PATH.captures(&href).map(|caps| caps[1].to_string()))
        .and_then(|id| id.parse().ok())
        .ok_or(Error::MissingField("submission id"))?;

    let captions = figure.select("figcaption p");
    let title = dom::first(&captions)
        .map(|p| dom::trimmed_text(&p))
        .unwrap_or_default();
    let by = dom::last(&captions).ok_or(Error::MissingField("creator"))?;
    let anchor = required(&by.select("a"), "creator")?;

    Ok(SubmissionPreview {
        id,
        thumbnail: optional_url(page_url, &figure.select("img"), "src"),
        title,
        created_by: resolve_anchor(page_url, &anchor, None)?,
    })
}

fn parse_figures(doc: &Document, page_url: &Url) -> Result<Vec<SubmissionPreview>> {
    debug!(%page_url, "parsing submission listing");
    doc.select("figure")
        .iter()
        .map(|figure| parse_submission_figure(&figure, page_url))
        .collect()
}

/// A gallery or scraps page.
pub fn parse_gallery_page(
    doc: &Document,
    page_url: &Url,
) -> Result<Paginated<Vec<SubmissionPreview>>> {
    let items = parse_figures(doc, page_url)?;
    Ok(paginate(doc, page_url, items, GALLERY_MATCHERS))
}

/// A browse page.
pub fn parse_browse_page(
    doc: &Document,
    page_url: &Url,
) -> Result<Paginated<Vec<SubmissionPreview>>> {
    let items = parse_figures(doc, page_url)?;
    Ok(paginate(doc, page_url, items, BROWSE_MATCHERS))
}

/// Highest submission id in a listing; the newest submission on a browse page.
#[must_use]
pub fn max_submission_id(items: &[SubmissionPreview]) -> Option<u64> {
    items.iter().map(|item| item.id).max()
}
