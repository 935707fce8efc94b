//! Rich-text renderer: HTML subtree to bracket-tag text.
//!
//! Children are walked strictly in document order. Every element either
//! matches a rule below or aborts the parse with `UnhandledElementError`:
//! unknown markup means the site changed, and dropping it silently would lose
//! content.

use dom_query::{NodeRef, Selection};
use url::Url;

use crate::dom;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::{SUBMISSION_PATH, WHITESPACE_RUN};
use crate::result::{RichText, UserPreview};

use super::anchor::resolve_anchor;
use super::links::classify_href;
use super::state::RenderState;
use super::tags::{
    is_structural_tag, style_tag, CLASS_AUTO_LINK, CLASS_BBCODE, CLASS_ICON_USERNAME,
    CLASS_LINK_USERNAME, CLASS_NAMED_URL, CLASS_NAV_LINKS, CLASS_QUOTE, CLASS_QUOTE_NAME,
    CLASS_SMILIE, CLASS_SUBMISSION_FOOTER, CLASS_YOUTUBE, QUOTE_NAME_SUFFIX,
};

/// Renders the children of one subtree root.
pub struct Renderer<'a> {
    base_url: &'a Url,
    site_host: &'a str,
    max_depth: usize,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub fn new(base_url: &'a Url, options: &'a Options) -> Self {
        Self {
            base_url,
            site_host: options.site_host(),
            max_depth: options.max_tree_depth,
        }
    }

    /// Render the children of `root` and normalize the result.
    pub fn parse(&self, root: &Selection) -> Result<RichText> {
        let mut state = RenderState::new();
        if let Some(node) = root.nodes().first() {
            self.render(node, &mut state, 0)?;
        }
        Ok(state.finish())
    }

    /// Render the children of `parent` into `state`, leaving out the nodes
    /// `state` marks as skipped.
    pub(crate) fn render(
        &self,
        parent: &NodeRef,
        state: &mut RenderState,
        depth: usize,
    ) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::NestingTooDeep(self.max_depth));
        }

        for child in parent.children() {
            if state.is_skipped(child.id) {
                continue;
            }

            if child.is_text() {
                let text = child.text();
                state.push_token(&WHITESPACE_RUN.replace_all(&text, " "));
                continue;
            }

            // Comments, doctypes and processing instructions carry no content.
            if !child.is_element() {
                continue;
            }

            self.render_element(&child, state, depth)?;
        }

        Ok(())
    }

    fn render_element(&self, node: &NodeRef, state: &mut RenderState, depth: usize) -> Result<()> {
        let el = Selection::from(*node);
        let tag = dom::tag_name(&el).unwrap_or_default();

        match tag.as_str() {
            "br" => state.push_raw("\n"),
            "wbr" => {}
            "hr" => state.push_raw("\n-----\n"),
            "a" => self.render_anchor(node, &el, state, depth)?,
            t if is_structural_tag(t) => self.render_structural(node, &el, state, depth)?,
            _ => return Err(unhandled(&el)),
        }

        Ok(())
    }

    fn render_anchor(
        &self,
        node: &NodeRef,
        el: &Selection,
        state: &mut RenderState,
        depth: usize,
    ) -> Result<()> {
        if dom::has_class(el, CLASS_ICON_USERNAME) {
            let has_name_suffix = !dom::trimmed_text(el).is_empty();
            let user = self.user_anchor(el, state);
            if has_name_suffix {
                state.push_token(&format!(":icon{}:", user.name));
            } else {
                state.push_token(&format!(":{}icon:", user.name));
            }
            return Ok(());
        }

        if dom::has_class(el, CLASS_LINK_USERNAME) {
            let user = self.user_anchor(el, state);
            state.push_token(&format!(":link{}:", user.name));
            return Ok(());
        }

        if dom::has_class(el, CLASS_NAMED_URL) || dom::has_class(el, CLASS_AUTO_LINK) {
            let href = dom::get_attribute(el, "href").unwrap_or_default();
            if !href.is_empty() {
                state.add_link(classify_href(&href, self.base_url, self.site_host));
            }
            state.push_token(&format!("[url={href}]"));
            self.render(node, state, depth + 1)?;
            state.push_token("[/url]");
            return Ok(());
        }

        Err(unhandled(el))
    }

    /// Resolve a username anchor, degrading to a reference-less placeholder
    /// when the href is unusable (e.g. a deleted account).
    fn user_anchor(&self, el: &Selection, state: &mut RenderState) -> UserPreview {
        match resolve_anchor(self.base_url, el, None) {
            Ok(user) => {
                state.add_user(&user.id);
                user
            }
            Err(err) => {
                tracing::warn!(error = %err, "user anchor without user id");
                UserPreview {
                    id: String::new(),
                    name: dom::trimmed_text(el),
                }
            }
        }
    }

    fn render_structural(
        &self,
        node: &NodeRef,
        el: &Selection,
        state: &mut RenderState,
        depth: usize,
    ) -> Result<()> {
        if dom::has_class(el, CLASS_SUBMISSION_FOOTER) {
            return Ok(());
        }

        if dom::has_class(el, CLASS_BBCODE) {
            return self.render_bbcode(node, el, state, depth);
        }

        if dom::has_class(el, CLASS_NAV_LINKS) {
            render_nav_links(el, state);
            return Ok(());
        }

        if dom::has_class(el, CLASS_YOUTUBE) {
            if let Some(video_id) = youtube_id(el) {
                state.push_token(&format!("[yt]{video_id}[/yt]"));
            }
            return Ok(());
        }

        // Smilies are decoration only.
        if dom::has_class(el, CLASS_SMILIE) {
            return Ok(());
        }

        if dom::class_list(el).is_empty() {
            return self.render(node, state, depth + 1);
        }

        Err(unhandled(el))
    }

    fn render_bbcode(
        &self,
        node: &NodeRef,
        el: &Selection,
        state: &mut RenderState,
        depth: usize,
    ) -> Result<()> {
        if let Some(color) = dom::inline_style(el, "color") {
            state.push_token(&format!("[color={color}]"));
            self.render(node, state, depth + 1)?;
            state.push_token("[/color]");
            return Ok(());
        }

        if dom::has_class(el, CLASS_QUOTE) {
            // A nested quote owns its own name element.
            let name_el = dom::descendant_with_class(el, CLASS_QUOTE_NAME, CLASS_QUOTE);
            let author = name_el.as_ref().map(quote_author).unwrap_or_default();
            if let Some(name) = name_el.as_ref().and_then(|n| n.nodes().first().copied()) {
                state.skip_node(name.id);
            }

            if author.is_empty() {
                state.push_token("[quote]");
            } else {
                state.push_token(&format!("[quote={author}]"));
            }
            self.render(node, state, depth + 1)?;
            state.push_token("[/quote]");
            return Ok(());
        }

        let classes = dom::class_list(el);
        if let Some(tag) = style_tag(classes.as_slice()) {
            state.push_token(&format!("[{tag}]"));
            self.render(node, state, depth + 1)?;
            state.push_token(&format!("[/{tag}]"));
            return Ok(());
        }

        Err(unhandled(el))
    }
}

/// Emit `[prev,first,next]` submission ids, `-` for absent slots.
fn render_nav_links(el: &Selection, state: &mut RenderState) {
    let slots = ["PREV", "FIRST", "NEXT"].map(|label| nav_link_id(el, label));

    for id in slots.iter().flatten() {
        state.add_submission(*id);
    }

    let [prev, first, next] =
        slots.map(|slot| slot.map_or_else(|| "-".to_string(), |id| id.to_string()));
    state.push_token(&format!("[{prev},{first},{next}]"));
}

/// Submission id of the first anchor whose text contains `label`.
fn nav_link_id(el: &Selection, label: &str) -> Option<u64> {
    let anchor = el.select("a").iter().find(|a| a.text().contains(label))?;
    let href = anchor.attr("href")?;
    SUBMISSION_PATH
        .captures(&href)
        .and_then(|caps| caps[1].parse().ok())
}

/// Last path segment of the embedded iframe's `src`, without the query.
fn youtube_id(el: &Selection) -> Option<String> {
    let src = el.select("iframe").attr("src")?;
    let last = src.rsplit('/').next()?;
    let id = last.split('?').next()?;
    (!id.is_empty()).then(|| id.to_string())
}

fn quote_author(name_el: &Selection) -> String {
    let author = dom::trimmed_text(name_el);
    match author.strip_suffix(QUOTE_NAME_SUFFIX) {
        Some(stripped) => stripped.trim().to_string(),
        None => author,
    }
}

fn unhandled(el: &Selection) -> Error {
    Error::UnhandledElementError(dom::outer_html(el).to_string())
}
