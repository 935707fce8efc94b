//! Compiled regex patterns used across rich-text rendering and page parsing.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

// =============================================================================
// Whitespace
// =============================================================================

/// Any run of whitespace inside a text node.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Spaces trailing a newline or space. Replaced by the captured anchor.
pub static SPACES_AFTER_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\n ]) +").expect("SPACES_AFTER_ANCHOR regex"));

// =============================================================================
// Site paths
// =============================================================================

/// `/user/<id>` on an already-lowercased path.
pub static USER_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/user/([^/]+)(?:/|$)").expect("USER_PATH regex"));

/// `/view/<id>` in a raw href.
pub static SUBMISSION_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/view/([^/]+)(?:/|$)").expect("SUBMISSION_PATH regex"));

// =============================================================================
// Dates
// =============================================================================

/// Ordinal day suffix, as in `Sep 8th, 2023`.
pub static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)(?:st|nd|rd|th)\b").expect("ORDINAL_SUFFIX regex"));

/// Leading `Label:` before a date, as in `Registered: Dec 11, 2006`.
pub static DATE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z ]*:\s*").expect("DATE_LABEL regex"));

// =============================================================================
// Defaults
// =============================================================================

/// Root of the source site.
pub static DEFAULT_BASE_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://www.furaffinity.net/").expect("DEFAULT_BASE_URL url")
});
