//! User profile pages and watch lists.

use dom_query::Document;
use tracing::debug;
use url::Url;

use super::journal::page_owner;
use super::listing::paginate;
use super::{optional_url, rich_text_field};
use crate::dom;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::pages::date::parse_site_date;
use crate::result::{Paginated, User, UserPreview};
use crate::richtext::resolve_anchor;

/// Button text of watch list pagination, trailing space included.
pub const WATCHLIST_MATCHERS: (&str, &str) = ("Next ", "Back ");

/// Assemble a user from their `/user/<id>/` page.
///
/// The title line reads `<type> | <registration date>`.
pub fn parse_user_page(doc: &Document, page_url: &Url, options: &Options) -> Result<User> {
    debug!(%page_url, "parsing user page");

    let title = dom::trimmed_text(&doc.select("username.user-title"));
    let mut parts = title.split('|');
    let user_type = parts.next().unwrap_or_default().trim().to_string();
    let created_at = parts
        .next()
        .map(str::trim)
        .filter(|date| !date.is_empty())
        .ok_or(Error::MissingField("created_at"))
        .and_then(parse_site_date)?;

    let (description, raw) =
        rich_text_field(&doc.select("div.userpage-profile"), page_url, options)?;

    Ok(User {
        preview: page_owner(doc, page_url)?,
        avatar: optional_url(page_url, &doc.select("userpage-nav-avatar img"), "src"),
        description,
        raw,
        user_type,
        created_at,
    })
}

/// A `/watchlist/<by|to>/<user>/<page>/` page.
pub fn parse_watch_list(doc: &Document, page_url: &Url) -> Result<Paginated<Vec<UserPreview>>> {
    let users = doc
        .select("div.watch-list-items a")
        .iter()
        .map(|anchor| resolve_anchor(page_url, &anchor, None))
        .collect::<Result<Vec<_>>>()?;

    Ok(paginate(doc, page_url, users, WATCHLIST_MATCHERS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    const PROFILE: &str = r#"<body>
        <userpage-nav-avatar><a href="/user/foxglove/"><img src="//a.furaffinity.net/1600000000/foxglove.gif" alt="foxglove"></a></userpage-nav-avatar>
        <h1><username>~Foxglove</username></h1>
        <username class="user-title">Member | Registered: Dec 11, 2006 09:37</username>
        <div class="userpage-profile">Hi! Friend of <a href="/user/bramble" class="iconusername"><img alt="bramble" src="/a.gif">Bramble</a></div>
    </body>"#;

    fn user_url() -> Url {
        Url::parse("https://www.furaffinity.net/user/foxglove/").unwrap()
    }

    #[test]
    fn test_parse_user_page() {
        let user = parse_user_page(&parse(PROFILE), &user_url(), &Options::default()).unwrap();

        assert_eq!(user.preview, UserPreview { id: "foxglove".into(), name: "Foxglove".into() });
        assert_eq!(
            user.avatar.as_ref().map(Url::as_str),
            Some("https://a.furaffinity.net/1600000000/foxglove.gif")
        );
        assert_eq!(user.user_type, "Member");
        assert_eq!(user.created_at.to_rfc3339(), "2006-12-11T09:37:00+00:00");
        assert_eq!(user.description.text, "Hi! Friend of :iconBramble:");
        assert!(user.description.refers_to_users.contains("bramble"));
    }

    #[test]
    fn test_user_page_without_date() {
        let html = PROFILE.replace("Member | Registered: Dec 11, 2006 09:37", "Member");
        let err = parse_user_page(&parse(&html), &user_url(), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::MissingField("created_at")));
    }

    #[test]
    fn test_watch_list() {
        let html = r#"<body><div class="watch-list-items">
            <div><a href="/user/alpha/">Alpha</a></div>
            <div><a href="/user/beta_2/">beta_2</a></div>
        </div>
        <form action="/watchlist/by/foxglove/2/"><button>Next 200</button></form>
        <form action="/watchlist/by/foxglove/1/"><button>Back 200</button></form></body>"#;
        let url = Url::parse("https://www.furaffinity.net/watchlist/by/foxglove/1/").unwrap();
        let page = parse_watch_list(&parse(html), &url).unwrap();

        let ids: Vec<_> = page.data.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "beta_2"]);
        assert_eq!(page.next_page, Some(2));
        assert_eq!(page.prev_page, None);
    }
}
