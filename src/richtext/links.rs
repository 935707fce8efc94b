//! Link classification.
//!
//! Maps a URL on the source site to the kind of record it points at. Every
//! failure ends in `LinkTarget::Unrelated`; a bad link never aborts a parse.

use url::Url;

/// What a link refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Lowercase user slug.
    User(String),
    Submission(u64),
    Journal(u64),
    /// Off-site, malformed, or not a record link.
    Unrelated,
}

/// Path types whose second segment names a user.
const USER_PATH_TYPES: [&str; 7] = [
    "user",
    "gallery",
    "scraps",
    "journals",
    "favorites",
    "commissions",
    "stats",
];

/// Whether `url` is on the site, with or without a `www.` prefix.
#[must_use]
pub fn is_site_url(url: &Url, site_host: &str) -> bool {
    url.host_str().is_some_and(|host| {
        host.eq_ignore_ascii_case(site_host)
            || host
                .strip_prefix("www.")
                .is_some_and(|bare| bare.eq_ignore_ascii_case(site_host))
    })
}

/// Classify an absolute URL.
#[must_use]
pub fn classify_link(url: &Url, site_host: &str) -> LinkTarget {
    if !is_site_url(url, site_host) {
        return LinkTarget::Unrelated;
    }

    let mut segments = url.path().split('/').filter(|s| !s.is_empty());
    let (Some(link_type), Some(link_id)) = (segments.next(), segments.next()) else {
        return LinkTarget::Unrelated;
    };

    if USER_PATH_TYPES.contains(&link_type) {
        return LinkTarget::User(link_id.to_lowercase());
    }

    match link_type {
        "view" => link_id.parse().map_or(LinkTarget::Unrelated, LinkTarget::Submission),
        "journal" => link_id.parse().map_or(LinkTarget::Unrelated, LinkTarget::Journal),
        _ => LinkTarget::Unrelated,
    }
}

/// Resolve `href` against `base_url`, then classify.
#[must_use]
pub fn classify_href(href: &str, base_url: &Url, site_host: &str) -> LinkTarget {
    match base_url.join(href) {
        Ok(url) => classify_link(&url, site_host),
        Err(err) => {
            tracing::debug!(href, error = %err, "unresolvable link ignored");
            LinkTarget::Unrelated
        }
    }
}
