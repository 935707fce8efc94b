//! Tag and class tables for the rich-text renderer.

/// Elements whose classes decide how they render. Without a class they are
/// transparent wrappers.
pub static STRUCTURAL_TAGS: [&str; 17] = [
    "strong", "code", "span", "sup", "sub", "u", "b", "s", "i",
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "div",
];

/// Bracket tags backed by a `bbcode_<tag>` class. Checked in this order; the
/// first one present wins.
pub static STYLE_TAGS: [&str; 16] = [
    "b", "i", "u", "s", "sup", "sub", "center", "right", "left",
    "h1", "h2", "h3", "h4", "h5", "h6", "spoiler",
];

pub const CLASS_BBCODE: &str = "bbcode";
pub const CLASS_BBCODE_PREFIX: &str = "bbcode_";
pub const CLASS_QUOTE: &str = "bbcode_quote";
pub const CLASS_QUOTE_NAME: &str = "bbcode_quote_name";
pub const CLASS_ICON_USERNAME: &str = "iconusername";
pub const CLASS_LINK_USERNAME: &str = "linkusername";
pub const CLASS_NAMED_URL: &str = "named_url";
pub const CLASS_AUTO_LINK: &str = "auto_link";
pub const CLASS_NAV_LINKS: &str = "parsed_nav_links";
pub const CLASS_YOUTUBE: &str = "youtubeWrapper";
pub const CLASS_SMILIE: &str = "smilie";
pub const CLASS_SUBMISSION_FOOTER: &str = "submission-footer";

/// Trailing label of a quote author, as in `Alice wrote:`.
pub const QUOTE_NAME_SUFFIX: &str = "wrote:";

/// Check if a tag is a structural wrapper
#[inline]
#[must_use]
pub fn is_structural_tag(tag: &str) -> bool {
    STRUCTURAL_TAGS.contains(&tag)
}

/// First entry of `STYLE_TAGS` present as a `bbcode_<tag>` class.
///
/// Class suffixes compare case-insensitively.
#[must_use]
pub fn style_tag<S: AsRef<str>>(classes: &[S]) -> Option<&'static str> {
    let present: Vec<String> = classes
        .iter()
        .filter_map(|c| c.as_ref().strip_prefix(CLASS_BBCODE_PREFIX))
        .filter(|suffix| !suffix.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();

    STYLE_TAGS
        .iter()
        .copied()
        .find(|tag| present.iter().any(|p| p == tag))
}
