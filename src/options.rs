//! Configuration options for page parsing.
//!
//! The `Options` struct names the source site and bounds rich-text recursion.
//! It also builds the URLs of every page kind the parsers understand, so
//! callers fetching pages and the parsers resolving links agree on one site.

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::DEFAULT_BASE_URL;

/// Which side of a watch relationship to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchDirection {
    /// Users the given user watches.
    Watching,
    /// Users watching the given user.
    WatchedBy,
}

impl WatchDirection {
    fn path_segment(self) -> &'static str {
        match self {
            Self::Watching => "by",
            Self::WatchedBy => "to",
        }
    }
}

/// Configuration options for parsing.
///
/// # Example
///
/// ```rust
/// use fa_scraper::Options;
///
/// let options = Options::default();
/// assert_eq!(options.site_host(), "furaffinity.net");
///
/// let options = Options {
///     max_tree_depth: 64,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Root of the source site. Links are classified against its host,
    /// with or without a `www.` prefix.
    ///
    /// Default: `https://www.furaffinity.net/`
    pub base_url: Url,

    /// Maximum element nesting inside one rich-text field.
    ///
    /// Default: `256`
    pub max_tree_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.clone(),
            max_tree_depth: 256,
        }
    }
}

impl Options {
    /// Site host with any `www.` prefix removed.
    #[must_use]
    pub fn site_host(&self) -> &str {
        let host = self.base_url.host_str().unwrap_or_default();
        host.strip_prefix("www.").unwrap_or(host)
    }

    /// `/view/<id>/`
    pub fn submission_url(&self, id: u64) -> Result<Url> {
        self.join(&format!("/view/{id}/"))
    }

    /// `/journal/<id>/`
    pub fn journal_url(&self, id: u64) -> Result<Url> {
        self.join(&format!("/journal/{id}/"))
    }

    /// `/user/<id>/`
    pub fn user_url(&self, user_id: &str) -> Result<Url> {
        self.join(&format!("/user/{}/", user_id.to_lowercase()))
    }

    /// `/gallery/<id>/<page>/`
    pub fn gallery_url(&self, user_id: &str, page: u32) -> Result<Url> {
        check_page_number(page)?;
        self.join(&format!("/gallery/{}/{page}/", user_id.to_lowercase()))
    }

    /// `/scraps/<id>/<page>/`
    pub fn scraps_url(&self, user_id: &str, page: u32) -> Result<Url> {
        check_page_number(page)?;
        self.join(&format!("/scraps/{}/{page}/", user_id.to_lowercase()))
    }

    /// `/journals/<id>/<page>/`
    pub fn journals_url(&self, user_id: &str, page: u32) -> Result<Url> {
        check_page_number(page)?;
        self.join(&format!("/journals/{}/{page}/", user_id.to_lowercase()))
    }

    /// `/watchlist/<by|to>/<id>/<page>/`
    pub fn watchlist_url(&self, user_id: &str, direction: WatchDirection, page: u32) -> Result<Url> {
        check_page_number(page)?;
        self.join(&format!(
            "/watchlist/{}/{}/{page}/",
            direction.path_segment(),
            user_id.to_lowercase()
        ))
    }

    /// `/browse/<page>/`
    pub fn browse_url(&self, page: u32) -> Result<Url> {
        check_page_number(page)?;
        self.join(&format!("/browse/{page}/"))
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|source| Error::InvalidUrl {
            url: path.to_string(),
            source,
        })
    }
}

fn check_page_number(page: u32) -> Result<()> {
    if page < 1 {
        return Err(Error::InvalidArgument(format!("page must be >= 1, got {page}")));
    }
    Ok(())
}
