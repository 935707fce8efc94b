use fa_scraper::dom::parse;
use fa_scraper::pages::{
    check_page, max_submission_id, parse_browse_page, parse_journals_page, parse_submission,
    parse_user_page, parse_watch_list,
};
use fa_scraper::{Error, Options, WatchDirection};

const FOOTER: &str = r#"<footer><div class="online-stats">12345 users online</div></footer>"#;

fn page(body: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>FA</title></head><body>{body}{FOOTER}</body></html>")
}

#[test]
fn submission_page_end_to_end() {
    let options = Options::default();
    let url = options.submission_url(4242).unwrap();
    let html = page(
        r#"<div id="site-content">
        <section class="submission-page">
          <img id="submissionImg" data-preview-src="//t.furaffinity.net/4242@600-1700000000.jpg" src="//d.furaffinity.net/art/quill/1700000000/quill_sketch.png">
          <div class="submission-id-sub-container">
            <div class="submission-title"><h2><p>Morning Sketch</p></h2></div>
            <a href="/user/quill/"><strong class="iconusername">Quill</strong></a>
            <strong><span class="popup_date" title="Nov 14th, 2023 10:40 PM">Nov 14, 2023</span></strong>
          </div>
          <div class="aligncenter auto_link hideonfull1 favorite-nav">
            <a class="button standard mobile-fix" href="/fav/4242/">+Fav</a>
            <a class="button standard mobile-fix" href="//d.furaffinity.net/art/quill/1700000000/quill_sketch.png">Download</a>
          </div>
          <div class="submission-description user-submitted-links">
            Quick one for <a href="/user/inkwell" class="iconusername"><img alt="inkwell" src="//a.furaffinity.net/inkwell.gif">inkwell</a>.<br>
            <br>
            <div class="parsed_nav_links"><a href="/view/4200/">&lt;&lt;&lt; PREV</a> | <a href="/view/4000/">FIRST</a></div>
          </div>
          <section class="info text">
            <div><span class="category-name">Artwork (Traditional)</span> / <span class="type-name">General Furry Art</span></div>
            <div><strong class="highlight">Species</strong> <span>Otter</span></div>
            <div><strong class="highlight">Gender</strong> <span>Any</span></div>
          </section>
          <section class="tags-row"><span class="tags"><a href="/search/@keywords otter">otter</a></span><span class="tags"><a href="/search/@keywords sketch">sketch</a></span></section>
        </section></div>"#,
    );

    let doc = parse(&html);
    check_page(&doc).unwrap();
    let sub = parse_submission(&doc, &url, 4242, &options).unwrap();

    assert_eq!(sub.title, "Morning Sketch");
    assert_eq!(sub.created_by.id, "quill");
    assert_eq!(sub.file.host_str(), Some("d.furaffinity.net"));
    assert_eq!(sub.description.text, "Quick one for :iconinkwell:.\n\n[4200,4000,-]");
    assert!(sub.description.refers_to_users.contains("inkwell"));
    assert!(sub.description.refers_to_submissions.contains(&4000));
    assert_eq!(sub.species, "Otter");
    assert_eq!(sub.tags.len(), 2);
    assert_eq!(sub.created_at.to_rfc3339(), "2023-11-14T22:40:00+00:00");

    let json = serde_json::to_value(&sub).unwrap();
    assert_eq!(json["created_by"]["id"], "quill");
    assert_eq!(json["created_at"], "2023-11-14T22:40:00Z");
}

#[test]
fn deleted_submission_is_not_found() {
    let html = page(
        r#"<section><h2>System Error</h2><div class="section-body">The submission you are trying to find is not in our database.</div></section>"#,
    );
    let err = check_page(&parse(&html)).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().starts_with("System error:"));
}

#[test]
fn disabled_account_message_is_not_found() {
    let html = page(
        r#"<section class="aligncenter notice-message"><h2>System Message</h2>
        <div class="section-body alignleft"><div class="redirect-message">User "Quill" has voluntarily disabled access to their account and all of its contents.</div></div></section>"#,
    );
    let err = check_page(&parse(&html)).unwrap_err();
    assert!(matches!(err, Error::SystemError { .. }));
    assert!(err.is_not_found());
}

#[test]
fn truncated_page_is_rejected() {
    let doc = parse("<html><body><section><h2>Gallery</h2></section>");
    assert!(matches!(check_page(&doc), Err(Error::InvalidPage(_))));
}

#[test]
fn browse_page_and_newest_id() {
    let options = Options::default();
    let url = options.browse_url(1).unwrap();
    let figures: String = [(900, "alpha"), (905, "beta"), (901, "gamma")]
        .iter()
        .map(|(id, user)| {
            format!(
                r#"<figure id="sid-{id}"><b><u><a href="/view/{id}/"><img src="//t.furaffinity.net/{id}@200.jpg"></a></u></b>
                <figcaption><p><a href="/view/{id}/">Piece {id}</a></p><p><i>by</i> <a href="/user/{user}/">{user}</a></p></figcaption></figure>"#
            )
        })
        .collect();
    let html = page(&format!(
        r#"<section class="gallery">{figures}</section>
        <form action="/browse/2/" method="post"><button class="button" type="submit">Next</button></form>"#
    ));

    let listing = parse_browse_page(&parse(&html), &url).unwrap();
    assert_eq!(listing.data.len(), 3);
    assert_eq!(listing.next_page, Some(2));
    assert_eq!(listing.prev_page, None);
    assert_eq!(max_submission_id(&listing.data), Some(905));
    assert_eq!(listing.data[1].created_by.id, "beta");
}

#[test]
fn journals_listing_shares_owner() {
    let options = Options::default();
    let url = options.journals_url("Quill", 2).unwrap();
    let html = page(
        r#"<userpage-nav-avatar><a href="/user/quill/"><img src="//a.furaffinity.net/quill.gif" alt="quill"></a></userpage-nav-avatar>
        <h1><username>!Quill</username></h1>
        <section id="jid:31" class="aligncenter"><div class="section-header"><h2>Update</h2>
          <span class="popup_date" title="Feb 1, 2024 09:00 AM">x</span></div>
          <div class="section-body journal-body">Commissions <span class="bbcode bbcode_u">open</span></div></section>
        <form action="/journals/quill/1/"><button>Newer</button></form>
        <form action="/journals/quill/3/"><button>Older</button></form>"#,
    );

    let listing = parse_journals_page(&parse(&html), &url, &options).unwrap();
    assert_eq!(listing.data.len(), 1);
    assert_eq!(listing.data[0].id, 31);
    assert_eq!(listing.data[0].created_by.name, "Quill");
    assert_eq!(listing.data[0].description.text, "Commissions [u]open[/u]");
    assert_eq!(listing.next_page, Some(3));
    assert_eq!(listing.prev_page, Some(1));
}

#[test]
fn user_page_and_watch_list() {
    let options = Options::default();

    let profile = page(
        r#"<userpage-nav-avatar><a href="/user/quill/"><img src="//a.furaffinity.net/quill.gif" alt="quill"></a></userpage-nav-avatar>
        <h1><username>~Quill</username></h1>
        <username class="user-title">Member | Registered: Jan 5, 2010 07:15</username>
        <div class="userpage-profile">Otters only.</div>"#,
    );
    let user = parse_user_page(&parse(&profile), &options.user_url("Quill").unwrap(), &options).unwrap();
    assert_eq!(user.preview.id, "quill");
    assert_eq!(user.user_type, "Member");
    assert_eq!(user.description.text, "Otters only.");

    let watch_url = options
        .watchlist_url("quill", WatchDirection::WatchedBy, 1)
        .unwrap();
    assert_eq!(watch_url.path(), "/watchlist/to/quill/1/");

    let list = page(
        r#"<div class="watch-list-items"><a href="/user/alpha/">alpha</a><a href="/user/beta/">beta</a></div>
        <form action="/watchlist/to/quill/1/"><button>Next 200</button></form>"#,
    );
    let listing = parse_watch_list(&parse(&list), &watch_url).unwrap();
    assert_eq!(listing.data.len(), 2);
    assert_eq!(listing.next_page, None);
}
