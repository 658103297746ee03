//! Pure, read-only extraction functions over a parsed [`Page`](crate::Page).

pub mod general_extractor;
pub mod heading_extractor;
pub mod image_extractor;
pub mod resource_extractor;
pub mod structure_extractor;
pub mod url_extractor;

use regex::Regex;
use scraper::ElementRef;
use std::sync::OnceLock;

pub use general_extractor::extract_metadata;
pub use heading_extractor::extract_text_content;
pub use image_extractor::extract_images;
pub use resource_extractor::extract_resources;
pub use structure_extractor::extract_structure;
pub use url_extractor::extract_links;

/// Strip tag-like `<...>` runs and surrounding whitespace.
pub fn sanitize(text: &str) -> String {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    let tags = TAGS.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());
    tags.replace_all(text, "").trim().to_string()
}

/// Keep the first `max` characters and mark the cut with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Sanitized `textContent` of an element.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    sanitize(&element.text().collect::<String>())
}

/// Non-empty value of an attribute.
pub(crate) fn non_empty_attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name).filter(|v| !v.is_empty())
}
