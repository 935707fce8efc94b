//! Submission page.

use std::collections::BTreeSet;

use dom_query::Document;
use tracing::debug;
use url::Url;

use super::{optional_url, popup_date, required, resolve_url, rich_text_field};
use crate::dom;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::Submission;
use crate::richtext::resolve_anchor;

/// Assemble a submission from its `/view/<id>/` page.
///
/// The download link and the posting date are required; the remaining
/// metadata fields fall back to empty strings.
pub fn parse_submission(
    doc: &Document,
    page_url: &Url,
    id: u64,
    options: &Options,
) -> Result<Submission> {
    debug!(%page_url, id, "parsing submission");

    let file = doc
        .select("a.button")
        .iter()
        .find(|a| a.text().contains("Download"))
        .and_then(|a| dom::get_attribute(&a, "href"))
        .filter(|href| !href.trim().is_empty())
        .ok_or(Error::MissingField("download link"))?;

    let creator = required(&doc.select("div.submission-id-sub-container a"), "creator")?;
    let (description, raw) =
        rich_text_field(&doc.select("div.submission-description"), page_url, options)?;

    Ok(Submission {
        id,
        thumbnail: optional_url(page_url, &doc.select("img#submissionImg"), "data-preview-src"),
        title: dom::trimmed_text(&doc.select("div.submission-title")),
        created_by: resolve_anchor(page_url, &creator, None)?,
        file: resolve_url(page_url, &file)?,
        description,
        raw,
        category: first_text(doc, "span.category-name"),
        submission_type: first_text(doc, "span.type-name"),
        species: labelled_value(doc, "Species"),
        gender: labelled_value(doc, "Gender"),
        created_at: popup_date(&doc.select("span.popup_date"))?,
        tags: tags(doc),
    })
}

fn first_text(doc: &Document, selector: &str) -> String {
    dom::first(&doc.select(selector))
        .map(|el| dom::trimmed_text(&el))
        .unwrap_or_default()
}

/// The `span` right after a `strong.highlight` label.
fn labelled_value(doc: &Document, label: &str) -> String {
    doc.select("strong.highlight")
        .iter()
        .filter(|strong| strong.text().contains(label))
        .filter_map(|strong| dom::next_element_sibling(&strong))
        .find(|sibling| dom::tag_name(sibling).as_deref() == Some("span"))
        .map(|span| dom::trimmed_text(&span))
        .unwrap_or_default()
}

fn tags(doc: &Document) -> BTreeSet<String> {
    doc.select("section.tags-row span.tags a")
        .iter()
        .map(|a| dom::trimmed_text(&a))
        .filter(|tag| !tag.is_empty())
        .collect()
}
