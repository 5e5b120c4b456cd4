use serde::{Deserialize, Serialize};

/// One fetched page, lower-cased, ready for keyword matching.
///
/// Created per request and dropped once the audit that needed it returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchResult {
    /// Address that was requested.
    pub url: String,
    /// Full response body, lower-cased.
    pub raw_html: String,
    /// Visible text with whitespace collapsed, lower-cased.
    pub visible_text: String,
    /// Absolute address of the first careers/jobs/join anchor, resolved
    /// against `url` from the case-preserved markup.
    pub careers_link: Option<String>,
}

impl FetchResult {
    /// Build a result from already extracted text, lower-casing both bodies.
    #[must_use]
    pub fn new(url: impl Into<String>, raw_html: &str, visible_text: &str) -> Self {
        Self {
            url: url.into(),
            raw_html: raw_html.to_lowercase(),
            visible_text: visible_text.to_lowercase(),
            careers_link: None,
        }
    }

    #[must_use]
    pub fn with_careers_link(mut self, link: Option<String>) -> Self {
        self.careers_link = link;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lowercases_bodies_but_not_url() {
        let page = FetchResult::new("https://Acme.com", "<B>WordPress</B>", "Hello World");
        assert_eq!(page.url, "https://Acme.com");
        assert_eq!(page.raw_html, "<b>wordpress</b>");
        assert_eq!(page.visible_text, "hello world");
        assert!(page.careers_link.is_none());
    }
}
