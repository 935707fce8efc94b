//! Error types for fa-scraper.
//!
//! This module defines the error types returned by rich-text rendering and
//! page parsing.

/// Site messages meaning the requested content no longer exists.
const NOT_FOUND_MESSAGES: [&str; 3] = [
    "the submission you are trying to find is not in our database",
    "the page you are trying to reach is currently pending deletion by a request from",
    "has voluntarily disabled access to their account and all of its contents",
];

/// Error type for parsing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An anchor's href did not contain a `/user/<id>` path.
    #[error("Could not parse user anchor: {0}")]
    AnchorParseError(String),

    /// Markup with no rendering rule. Aborts the whole rich-text field.
    #[error("Unhandled element: {0}")]
    UnhandledElementError(String),

    /// Rich text nested deeper than `Options::max_tree_depth`.
    #[error("Markup nested deeper than {0} elements")]
    NestingTooDeep(usize),

    /// A URL could not be parsed or joined.
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A required element or attribute is absent from the page.
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// A date string matched none of the known site formats.
    #[error("Could not parse date {0:?}")]
    InvalidDate(String),

    /// A caller-supplied argument was out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The site answered with a "System Error" or "System Message" page.
    #[error("System error: {message}")]
    SystemError { message: String, raw_html: String },

    /// The page is structurally incomplete (e.g. a partial load).
    #[error("Invalid page: {0}")]
    InvalidPage(String),
}

impl Error {
    /// Whether this error means the requested record is gone (deleted,
    /// pending deletion, or its owner disabled their account).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::SystemError { message, .. } => {
                let message = message.to_lowercase();
                NOT_FOUND_MESSAGES.iter().any(|m| message.contains(m))
            }
            _ => false,
        }
    }
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
