//! The document under analysis: a parsed HTML tree plus the URL it was loaded from.

use std::path::Path;

use scraper::{ElementRef, Html};
use url::Url;

use crate::error::{AppError, Result};

/// A read-only parsed page.
///
/// Every extractor borrows the same `Page`; nothing here mutates the tree.
pub struct Page {
    document: Html,
    url: Url,
}

impl Page {
    pub fn parse(html: &str, url: Url) -> Self {
        Self {
            document: Html::parse_document(html),
            url,
        }
    }

    /// Parse with a URL given as a string.
    pub fn parse_with_url(html: &str, url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| AppError::InvalidUrl(format!("{url}: {e}")))?;
        Ok(Self::parse(html, url))
    }

    /// Load a local HTML file.
    ///
    /// Without `base_url` the page URL is the file's own `file://` URL, which
    /// has an opaque origin: no link will classify as internal.
    pub fn from_file(path: &Path, base_url: Option<Url>) -> Result<Self> {
        let html = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let url = match base_url {
            Some(url) => url,
            None => {
                let absolute = std::fs::canonicalize(path).map_err(|e| AppError::io(path, e))?;
                Url::from_file_path(&absolute).map_err(|_| {
                    AppError::InvalidUrl(format!("cannot express {} as a URL", absolute.display()))
                })?
            }
        };
        Ok(Self::parse(&html, url))
    }

    pub fn document(&self) -> &Html {
        &self.document
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Resolve an attribute URL the way a browser's `href`/`src` property does:
    /// absolute against the page URL, or the raw value when it cannot be resolved.
    pub fn resolve(&self, raw: &str) -> String {
        let raw = raw.trim();
        self.url
            .join(raw)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| raw.to_string())
    }

    /// True when `candidate` parses to the same (tuple) origin as the page.
    pub fn is_same_origin(&self, candidate: &str) -> bool {
        Url::parse(candidate)
            .map(|u| u.origin() == self.url.origin())
            .unwrap_or(false)
    }

    pub fn is_secure(&self) -> bool {
        self.url.scheme() == "https"
    }

    /// The root `<html>` element.
    pub fn root(&self) -> ElementRef<'_> {
        self.document.root_element()
    }

    pub fn body(&self) -> Option<ElementRef<'_>> {
        self.document.select(selector!("body")).next()
    }

    /// Document title: text of the first `<title>`, whitespace collapsed.
    /// Empty when there is no title element.
    pub fn title(&self) -> String {
        self.document
            .select(selector!("title"))
            .next()
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
            .unwrap_or_default()
    }

    /// `content` of the first `<meta name="...">`.
    pub fn meta_name(&self, name: &str) -> Option<&str> {
        self.document
            .select(selector!("meta[name]"))
            .find(|el| el.value().attr("name") == Some(name))
            .and_then(|el| el.value().attr("content"))
    }

    /// `content` of the first `<meta property="...">` (Open Graph).
    pub fn meta_property(&self, property: &str) -> Option<&str> {
        self.document
            .select(selector!("meta[property]"))
            .find(|el| el.value().attr("property") == Some(property))
            .and_then(|el| el.value().attr("content"))
    }

    /// `lang` of the root element, when non-empty. Whitespace counts as set.
    pub fn language(&self) -> Option<&str> {
        self.root()
            .value()
            .attr("lang")
            .filter(|lang| !lang.is_empty())
    }

    /// Number of elements matching `selector`.
    pub fn count(&self, selector: &scraper::Selector) -> usize {
        self.document.select(selector).count()
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
