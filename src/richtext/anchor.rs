//! User anchor resolution.

use dom_query::Selection;
use url::Url;

use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::USER_PATH;
use crate::result::UserPreview;

/// Resolve a `/user/<id>` anchor to a user reference.
///
/// The display name comes from `name_from` when that has text, else from the
/// anchor's own text, else from the `alt` of an image inside the anchor. A
/// leading decoration glyph (one non-word character) is stripped from it.
///
/// A missing href resolves like an empty one, to `base_url` itself, so an
/// anchor without a target on a `/user/<id>/` page names that page's user.
///
/// Fails with `AnchorParseError` when the resolved URL holds no user id.
pub fn resolve_anchor(
    base_url: &Url,
    anchor: &Selection,
    name_from: Option<&Selection>,
) -> Result<UserPreview> {
    let href = anchor.attr("href").map(|href| href.to_string()).unwrap_or_default();
    let id = base_url
        .join(&href)
        .ok()
        .and_then(|url| user_id_from_path(url.path()))
        .ok_or_else(|| Error::AnchorParseError(dom::outer_html(anchor).to_string()))?;

    Ok(UserPreview {
        id,
        name: display_name(anchor, name_from),
    })
}

/// Lowercase user id from a URL path, if it has a `/user/<id>` segment.
#[must_use]
pub fn user_id_from_path(path: &str) -> Option<String> {
    let path = path.to_lowercase();
    USER_PATH.captures(&path).map(|caps| caps[1].to_string())
}

fn display_name(anchor: &Selection, name_from: Option<&Selection>) -> String {
    let name = name_from
        .map(dom::trimmed_text)
        .filter(|name| !name.is_empty())
        .or_else(|| Some(dom::trimmed_text(anchor)).filter(|name| !name.is_empty()))
        .or_else(|| dom::get_attribute(&anchor.select("img"), "alt"))
        .unwrap_or_default();

    strip_decoration(name.trim())
}

/// Drop one leading non-word character.
fn strip_decoration(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if !(first.is_alphanumeric() || first == '_') => chars.as_str().to_string(),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    fn base() -> Url {
        Url::parse("https://www.furaffinity.net/view/1/").unwrap()
    }

    #[test]
    fn test_resolve_from_text() {
        let doc = parse(r#"<a class="linkusername" href="/user/Foo/">Foo</a>"#);
        let user = resolve_anchor(&base(), &doc.select("a"), None).unwrap();
        assert_eq!(user, UserPreview { id: "foo".into(), name: "Foo".into() });
    }

    #[test]
    fn test_resolve_from_image_alt() {
        let doc = parse(r#"<a href="/user/bar"><img alt="Bar" src="/a.gif"></a>"#);
        let user = resolve_anchor(&base(), &doc.select("a"), None).unwrap();
        assert_eq!(user.id, "bar");
        assert_eq!(user.name, "Bar");
    }

    #[test]
    fn test_name_from_overrides_anchor_text() {
        let doc = parse(r#"<a href="/user/baz/">avatar</a><h1><username>~Baz_Name</username></h1>"#);
        let name_from = doc.select("h1 username");
        let user = resolve_anchor(&base(), &doc.select("a"), Some(&name_from)).unwrap();
        assert_eq!(user.id, "baz");
        assert_eq!(user.name, "Baz_Name");
    }

    #[test]
    fn test_empty_name_from_falls_back() {
        let doc = parse(r#"<a href="/user/baz/">Baz</a><p id="empty">  </p>"#);
        let name_from = doc.select("#empty");
        let user = resolve_anchor(&base(), &doc.select("a"), Some(&name_from)).unwrap();
        assert_eq!(user.name, "Baz");
    }

    #[test]
    fn test_no_name_anywhere() {
        let doc = parse(r#"<a href="/user/ghost/"></a>"#);
        let user = resolve_anchor(&base(), &doc.select("a"), None).unwrap();
        assert_eq!(user.id, "ghost");
        assert_eq!(user.name, "");
    }

    #[test]
    fn test_absolute_href() {
        let doc = parse(r#"<a href="https://www.furaffinity.net/user/Abs-Olute">x</a>"#);
        let user = resolve_anchor(&base(), &doc.select("a"), None).unwrap();
        assert_eq!(user.id, "abs-olute");
    }

    #[test]
    fn test_missing_href_fails_off_user_pages() {
        let doc = parse(r#"<a class="linkusername">Nobody</a>"#);
        let err = resolve_anchor(&base(), &doc.select("a"), None).unwrap_err();
        assert!(matches!(err, Error::AnchorParseError(_)));
    }

    #[test]
    fn test_missing_href_names_page_owner() {
        let page = Url::parse("https://www.furaffinity.net/user/owner/").unwrap();
        let doc = parse(r#"<a class="linkusername">~Owner</a>"#);
        let user = resolve_anchor(&page, &doc.select("a"), None).unwrap();
        assert_eq!(user, UserPreview { id: "owner".into(), name: "Owner".into() });
    }

    #[test]
    fn test_non_user_href_fails() {
        let doc = parse(r#"<a href="/gallery/foo/">Foo</a>"#);
        let err = resolve_anchor(&base(), &doc.select("a"), None).unwrap_err();
        assert!(matches!(err, Error::AnchorParseError(html) if html.contains("/gallery/foo/")));
    }

    #[test]
    fn test_strip_decoration() {
        assert_eq!(strip_decoration("~Name"), "Name");
        assert_eq!(strip_decoration("!!Name"), "!Name");
        assert_eq!(strip_decoration("Name"), "Name");
        assert_eq!(strip_decoration("_under"), "_under");
        assert_eq!(strip_decoration(""), "");
    }
}
