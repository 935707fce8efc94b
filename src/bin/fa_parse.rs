//! Reads one FurAffinity page from stdin and prints the parsed record as JSON.
//!
//! ```text
//! curl -s https://www.furaffinity.net/view/123/ | fa-parse submission --url https://www.furaffinity.net/view/123/ --id 123
//! ```
//!
//! Log output goes to stderr and is filtered with `RUST_LOG`.

use std::io::{self, Read};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use fa_scraper::dom::{self, Document};
use fa_scraper::{pages, parse_rich_text_html_with_options, Options};
use serde_json::{to_value, Value};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    /// An HTML fragment of user-authored rich text
    RichText,
    /// A `/view/<id>/` page
    Submission,
    /// A `/journal/<id>/` page
    Journal,
    /// A `/user/<id>/` page
    User,
    /// A gallery or scraps page
    Gallery,
    /// A `/journals/<user>/<page>/` page
    Journals,
    /// A `/watchlist/<by|to>/<user>/<page>/` page
    Watchlist,
    /// A `/browse/<page>/` page
    Browse,
}

/// Parse a FurAffinity page read from stdin
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Page kind
    #[arg(value_enum)]
    kind: Kind,

    /// URL the page was fetched from; relative links resolve against it
    #[arg(long)]
    url: Url,

    /// Submission or journal id
    #[arg(long)]
    id: Option<u64>,

    /// Maximum element nesting inside one rich-text field
    #[arg(long, default_value_t = 256)]
    max_depth: usize,

    /// Print compact JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fa_scraper=info".parse()?))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut html = String::new();
    io::stdin()
        .read_to_string(&mut html)
        .context("failed to read HTML from stdin")?;
    debug!(bytes = html.len(), kind = ?cli.kind, "read page");

    let options = Options {
        max_tree_depth: cli.max_depth,
        ..Options::default()
    };

    let url = &cli.url;
    let page = || load_page(&html, url);
    let value = match cli.kind {
        Kind::RichText => to_value(parse_rich_text_html_with_options(&html, url, &options)?)?,
        Kind::Submission => to_value(pages::parse_submission(
            &page()?,
            url,
            required_id(&cli)?,
            &options,
        )?)?,
        Kind::Journal => to_value(pages::parse_journal(
            &page()?,
            url,
            required_id(&cli)?,
            &options,
        )?)?,
        Kind::User => to_value(pages::parse_user_page(&page()?, url, &options)?)?,
        Kind::Gallery => to_value(pages::parse_gallery_page(&page()?, url)?)?,
        Kind::Journals => to_value(pages::parse_journals_page(&page()?, url, &options)?)?,
        Kind::Watchlist => to_value(pages::parse_watch_list(&page()?, url)?)?,
        Kind::Browse => {
            let listing = pages::parse_browse_page(&page()?, url)?;
            debug!(max_id = ?pages::max_submission_id(&listing.data), "browse page");
            to_value(listing)?
        }
    };

    emit(&value, cli.compact)
}

/// Parse and validate a whole page.
fn load_page(html: &str, url: &Url) -> Result<Document> {
    let doc = dom::parse(html);
    if let Err(err) = pages::check_page(&doc) {
        if err.is_not_found() {
            warn!(%url, "record no longer exists");
        }
        return Err(err.into());
    }
    Ok(doc)
}

fn required_id(cli: &Cli) -> Result<u64> {
    cli.id
        .ok_or_else(|| anyhow!("--id is required for {:?} pages", cli.kind))
}

fn emit(value: &Value, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}
