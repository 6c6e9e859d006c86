//! Markup adapter: exposes a `scraper` parse tree through [`ElementNode`].
//!
//! Snippets are parsed as HTML fragments. html5ever wraps every fragment in
//! a synthetic `<html>` element, which serves as the container handed to the
//! engine.

use locsmith::dom::ElementNode;
use scraper::{ElementRef, Html};

/// Parsed markup snippet
#[derive(Debug)]
pub struct HtmlFragment {
    html: Html,
}

impl HtmlFragment {
    /// Parse a snippet; malformed markup is repaired, never rejected
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_fragment(markup);
        tracing::debug!(errors = html.errors.len(), "parsed markup fragment");
        Self { html }
    }

    /// Fragment container
    #[must_use]
    pub fn container(&self) -> HtmlElement<'_> {
        HtmlElement(self.html.root_element())
    }

    /// Whether the fragment holds at least one element
    #[must_use]
    pub fn has_elements(&self) -> bool {
        !self.container().children().is_empty()
    }
}

/// Element handle inside an [`HtmlFragment`]
#[derive(Debug, Clone, Copy)]
pub struct HtmlElement<'a>(ElementRef<'a>);

impl ElementNode for HtmlElement<'_> {
    fn tag_name(&self) -> String {
        self.0.value().name().to_ascii_lowercase()
    }

    fn attributes(&self) -> Vec<(String, String)> {
        self.0
            .value()
            .attrs()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(str::to_string)
    }

    fn text_content(&self) -> String {
        self.0.text().collect()
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent().and_then(ElementRef::wrap).map(HtmlElement)
    }

    fn children(&self) -> Vec<Self> {
        self.0.children().filter_map(ElementRef::wrap).map(HtmlElement).collect()
    }

    fn same_node(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
