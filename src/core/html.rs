// src/core/html.rs
//
// The markup-parsing seam. The pipeline only ever asks a document for
// "text of every element matching this selector, in document order";
// `HtmlDocument` answers that with the `scraper` crate.

use scraper::{Html, Selector};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid selector `{selector}`: {reason}")]
pub struct InvalidSelector {
    pub selector: String,
    pub reason: String,
}

/// A parsed document that can be queried by selector.
pub trait MarkupDocument {
    /// Text content of every matching element, in document order.
    fn find_all(&self, selector: &str) -> Result<Vec<String>, InvalidSelector>;
}

/// HTML document parsed once, queried many times.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(text: &str) -> Self {
        Self { html: Html::parse_document(text) }
    }

    /// Raw bytes as fetched; invalid UTF-8 is replaced, not rejected.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }
}

impl MarkupDocument for HtmlDocument {
    fn find_all(&self, selector: &str) -> Result<Vec<String>, InvalidSelector> {
        let sel = Selector::parse(selector).map_err(|e| InvalidSelector {
            selector: s!(selector),
            reason: format!("{e:?}"),
        })?;

        Ok(self
            .html
            .select(&sel)
            .map(|el| el.text().collect::<String>())
            .collect())
    }
}
