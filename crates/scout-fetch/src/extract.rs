//! Best-effort text and link extraction from fetched markup.

use reqwest::Url;
use scout_core::entities::FetchResult;
use scraper::{Html, Node, Selector};

/// Elements whose text never reaches the reader.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Substrings that mark an anchor as a careers page link.
pub const CAREERS_MARKERS: &[&str] = &["career", "job", "join"];

/// Parse `body` once and build the [`FetchResult`] for `url`.
#[must_use]
pub fn extract_page(url: &str, body: &str) -> FetchResult {
    let document = Html::parse_document(body);
    let text = visible_text(&document);
    let careers = find_careers_link(&document, url).map(String::from);
    FetchResult::new(url, body, &text).with_careers_link(careers)
}

/// Visible text of `document` with whitespace collapsed to single spaces.
///
/// Case is preserved; [`FetchResult::new`] lower-cases it.
#[must_use]
pub fn visible_text(document: &Html) -> String {
    let mut words: Vec<&str> = Vec::new();
    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            words.extend(text.split_whitespace());
        }
    }
    words.join(" ")
}

/// First anchor whose `href` mentions careers, jobs or joining, resolved
/// against `base`.
///
/// Only the first matching anchor in document order is considered. Returns
/// `None` when there is no match, the base is not a URL, or the resolved
/// link is not `http`/`https`.
#[must_use]
pub fn find_careers_link(document: &Html, base: &str) -> Option<Url> {
    let selector = Selector::parse("a[href]").ok()?;
    let href = document
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .find(|href| {
            let lower = href.to_lowercase();
            CAREERS_MARKERS.iter().any(|m| lower.contains(m))
        })?;

    let resolved = Url::parse(base).ok()?.join(href.trim()).ok()?;
    matches!(resolved.scheme(), "http" | "https").then_some(resolved)
}
