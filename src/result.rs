//! Record types produced by the parsers.
//!
//! `RichText` is the output of one rich-text field; the remaining types are
//! the records assembled from whole pages.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A rich-text field reduced to bracket-tag text plus the records it refers to.
///
/// The reference sets are filled only from markup met during rendering,
/// never by scanning `text` afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    /// Normalized bracket-tag text.
    pub text: String,

    /// Lowercase user slugs.
    pub refers_to_users: BTreeSet<String>,

    /// Submission ids.
    pub refers_to_submissions: BTreeSet<u64>,

    /// Journal ids.
    pub refers_to_journals: BTreeSet<u64>,
}

/// A user reference: slug plus display name.
///
/// `id` is the lowercase slug and the authoritative key. `name` is for
/// display only and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserPreview {
    pub id: String,
    pub name: String,
}

/// A user profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub preview: UserPreview,
    pub avatar: Option<Url>,
    pub description: RichText,
    /// Inner HTML of the profile, kept for re-rendering.
    pub raw: String,
    /// Account type, e.g. `Member`.
    pub user_type: String,
    pub created_at: DateTime<Utc>,
}

/// A submission as listed in galleries and browse pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPreview {
    pub id: u64,
    pub thumbnail: Option<Url>,
    pub title: String,
    pub created_by: UserPreview,
}

/// A full submission page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: u64,
    pub thumbnail: Option<Url>,
    pub title: String,
    pub created_by: UserPreview,
    /// The downloadable file.
    pub file: Url,
    pub description: RichText,
    /// Inner HTML of the description, kept for re-rendering.
    pub raw: String,
    pub category: String,
    pub submission_type: String,
    pub species: String,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub tags: BTreeSet<String>,
}

/// A journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    pub id: u64,
    pub title: String,
    pub description: RichText,
    /// Inner HTML of the journal body, kept for re-rendering.
    pub raw: String,
    pub created_by: UserPreview,
    pub created_at: DateTime<Utc>,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
    pub data: T,
}

impl RichText {
    /// True when the text is empty and nothing is referenced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.refers_to_users.is_empty()
            && self.refers_to_submissions.is_empty()
            && self.refers_to_journals.is_empty()
    }
}
