//! Journal pages and per-user journal listings.

use dom_query::{Document, Selection};
use tracing::debug;
use url::Url;

use super::listing::paginate;
use super::{popup_date, required, rich_text_field};
use crate::dom;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::{Journal, Paginated, UserPreview};
use crate::richtext::resolve_anchor;

/// Button text of journal listing pagination.
pub const JOURNALS_MATCHERS: (&str, &str) = ("Older", "Newer");

const JOURNAL_ID_PREFIX: &str = "jid:";

/// Owner of a user-scoped page: the avatar link, named by the page heading.
pub(super) fn page_owner(doc: &Document, page_url: &Url) -> Result<UserPreview> {
    let anchor = required(&doc.select("userpage-nav-avatar a"), "owner")?;
    let heading = dom::first(&doc.select("h1 username"));
    resolve_anchor(page_url, &anchor, heading.as_ref())
}

/// Assemble a journal from its `/journal/<id>/` page.
pub fn parse_journal(doc: &Document, page_url: &Url, id: u64, options: &Options) -> Result<Journal> {
    debug!(%page_url, id, "parsing journal");
    let (description, raw) =
        rich_text_field(&doc.select("div.journal-content"), page_url, options)?;

    Ok(Journal {
        id,
        title: dom::trimmed_text(&doc.select("div.journal-title")),
        description,
        raw,
        created_by: page_owner(doc, page_url)?,
        created_at: popup_date(&doc.select("span.popup_date"))?,
    })
}

/// One `section` of a journal listing.
///
/// Listing sections do not name their author; it is the listing's owner.
pub fn parse_journal_section(
    section: &Selection,
    page_url: &Url,
    created_by: &UserPreview,
    options: &Options,
) -> Result<Journal> {
    let id = dom::get_attribute(section, "id")
        .as_deref()
        .and_then(|id| id.strip_prefix(JOURNAL_ID_PREFIX))
        .and_then(|id| id.trim().parse().ok())
        .ok_or(Error::MissingField("journal id"))?;

    let (description, raw) = rich_text_field(&section.select(".journal-body"), page_url, options)?;

    Ok(Journal {
        id,
        title: dom::trimmed_text(&section.select(".section-header h2")),
        description,
        raw,
        created_by: created_by.clone(),
        created_at: popup_date(&section.select(".popup_date"))?,
    })
}

/// A `/journals/<user>/<page>/` listing.
///
/// Only sections with a `jid:` id are journals; other sections on the page
/// (headers, notices) are skipped.
pub fn parse_journals_page(
    doc: &Document,
    page_url: &Url,
    options: &Options,
) -> Result<Paginated<Vec<Journal>>> {
    let created_by = page_owner(doc, page_url)?;
    debug!(%page_url, owner = %created_by.id, "parsing journal listing");

    let journals = doc
        .select("section")
        .iter()
        .filter(|section| {
            dom::get_attribute(section, "id").is_some_and(|id| id.starts_with(JOURNAL_ID_PREFIX))
        })
        .map(|section| parse_journal_section(&section, page_url, &created_by, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(paginate(doc, page_url, journals, JOURNALS_MATCHERS))
}
