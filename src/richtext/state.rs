//! Render state threaded through one rich-text walk.
//!
//! One `RenderState` is created per top-level parse and passed by `&mut`
//! into every recursive call. It is consumed by `finish`, which applies the
//! whitespace normalizer exactly once.

use dom_query::NodeId;

use crate::result::RichText;

use super::links::LinkTarget;
use super::normalize::normalize_whitespace;

/// Text buffer and reference sets of an in-progress walk.
#[derive(Debug, Default)]
pub struct RenderState {
    content: RichText,
    skipped: Vec<NodeId>,
}

impl RenderState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token without letting whitespace pile up across appends.
    ///
    /// A leading space survives only if the buffer does not already end in
    /// one; the token is trimmed; a trailing space is kept as exactly one.
    pub fn push_token(&mut self, token: &str) {
        let text = &mut self.content.text;
        if token.starts_with(' ') && !text.ends_with(' ') {
            text.push(' ');
        }
        text.push_str(token.trim());
        if token.ends_with(' ') {
            text.push(' ');
        }
    }

    /// Append verbatim, bypassing `push_token` spacing rules.
    pub fn push_raw(&mut self, raw: &str) {
        self.content.text.push_str(raw);
    }

    pub fn add_user(&mut self, id: &str) {
        self.content.refers_to_users.insert(id.to_string());
    }

    pub fn add_submission(&mut self, id: u64) {
        self.content.refers_to_submissions.insert(id);
    }

    pub fn add_journal(&mut self, id: u64) {
        self.content.refers_to_journals.insert(id);
    }

    /// Record a classified link in the matching set.
    pub fn add_link(&mut self, target: LinkTarget) {
        match target {
            LinkTarget::User(id) => {
                self.content.refers_to_users.insert(id);
            }
            LinkTarget::Submission(id) => self.add_submission(id),
            LinkTarget::Journal(id) => self.add_journal(id),
            LinkTarget::Unrelated => {}
        }
    }

    /// Leave `id` out of the walk wherever it turns up.
    pub(crate) fn skip_node(&mut self, id: NodeId) {
        self.skipped.push(id);
    }

    #[must_use]
    pub(crate) fn is_skipped(&self, id: NodeId) -> bool {
        self.skipped.contains(&id)
    }

    /// Text accumulated so far, before normalization.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn text(&self) -> &str {
        &self.content.text
    }

    /// Normalize the text and hand out the result.
    #[must_use]
    pub fn finish(self) -> RichText {
        let mut content = self.content;
        content.text = normalize_whitespace(&content.text);
        content
    }
}
