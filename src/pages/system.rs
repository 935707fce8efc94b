//! Site error page detection.
//!
//! The site reports missing content and access problems with a normal 200
//! page titled "System Error" or "System Message". A page without the
//! footer's online statistics was only partially delivered.

use dom_query::Document;

use crate::dom;
use crate::error::{Error, Result};

/// Fail on system error/message pages and on partial loads.
pub fn check_page(doc: &Document) -> Result<()> {
    check_system_error(doc)?;
    check_system_message(doc)?;
    check_complete(doc)
}

fn check_system_error(doc: &Document) -> Result<()> {
    let title = dom::trimmed_text(&doc.select("body > section h2")).to_lowercase();
    if title != "system error" {
        return Ok(());
    }

    let body = doc.select("div.section-body");
    Err(Error::SystemError {
        message: dom::trimmed_text(&body),
        raw_html: dom::inner_html(&body).to_string(),
    })
}

fn check_system_message(doc: &Document) -> Result<()> {
    let title = dom::trimmed_text(&doc.select("section.notice-message h2")).to_lowercase();
    if title != "system message" {
        return Ok(());
    }

    let mut body = doc.select("section.notice-message p");
    let mut message = dom::trimmed_text(&body);
    if message.is_empty() {
        body = doc.select("section.notice-message .redirect-message");
        message = dom::trimmed_text(&body);
    }

    Err(Error::SystemError {
        message,
        raw_html: dom::inner_html(&body).to_string(),
    })
}

fn check_complete(doc: &Document) -> Result<()> {
    if doc.select("div.online-stats").exists() {
        Ok(())
    } else {
        Err(Error::InvalidPage("no div.online-stats, partial load?".into()))
    }
}
