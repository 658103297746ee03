use tracing::info;

use super::{element_text, truncate};
use crate::domain::models::{HeadingText, TextContent};
use crate::domain::page::Page;

const MAX_PARAGRAPHS: usize = 10;
const MIN_PARAGRAPH_CHARS: usize = 20;
const PARAGRAPH_MAX_CHARS: usize = 200;
const MAX_LIST_ITEMS: usize = 20;

/// Heading level (1-6) of every `h1`..`h6` in document order.
pub fn heading_levels(page: &Page) -> Vec<u8> {
    page.document()
        .select(selector!("h1, h2, h3, h4, h5, h6"))
        .filter_map(|el| el.value().name().strip_prefix('h')?.parse().ok())
        .collect()
}

/// Headings, leading paragraphs and list items, in document order.
pub fn extract_text_content(page: &Page) -> TextContent {
    info!("Extracting text content...");

    let headings = page
        .document()
        .select(selector!("h1, h2, h3, h4, h5, h6"))
        .map(|el| HeadingText {
            level: el.value().name().to_string(),
            text: element_text(el),
        })
        .collect();

    let paragraphs = page
        .document()
        .select(selector!("p"))
        .map(element_text)
        .filter(|text| text.chars().count() > MIN_PARAGRAPH_CHARS)
        .take(MAX_PARAGRAPHS)
        .map(|text| truncate(&text, PARAGRAPH_MAX_CHARS))
        .collect();

    let list_items = page
        .document()
        .select(selector!("ul li, ol li"))
        .take(MAX_LIST_ITEMS)
        .map(element_text)
        .collect();

    info!("Text content extracted");
    TextContent {
        headings,
        paragraphs,
        list_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mocks;
    use pretty_assertions::assert_eq;

    fn page(html: &str) -> Page {
        Page::parse_with_url(html, "https://example.com/").unwrap()
    }

    #[test]
    fn headings_keep_document_order() {
        let p = page("<h2>Second</h2><h1> First </h1><h3><em>Third</em></h3>");
        let content = extract_text_content(&p);
        let pairs: Vec<(&str, &str)> = content
            .headings
            .iter()
            .map(|h| (h.level.as_str(), h.text.as_str()))
            .collect();
        assert_eq!(pairs, vec![("h2", "Second"), ("h1", "First"), ("h3", "Third")]);
        assert_eq!(heading_levels(&p), vec![2, 1, 3]);
    }

    #[test]
    fn short_paragraphs_are_skipped_and_long_ones_truncated() {
        let long = "word ".repeat(60);
        let p = page(&format!(
            "<p>Too short to keep.</p><p>{long}</p><p>This paragraph is long enough.</p>"
        ));
        let content = extract_text_content(&p);
        assert_eq!(content.paragraphs.len(), 2);
        assert_eq!(content.paragraphs[0].chars().count(), PARAGRAPH_MAX_CHARS + 3);
        assert!(content.paragraphs[0].ends_with("..."));
        assert_eq!(content.paragraphs[1], "This paragraph is long enough.");
    }

    #[test]
    fn paragraph_must_exceed_twenty_chars() {
        let twenty = "a".repeat(20);
        let twenty_one = "b".repeat(21);
        let p = page(&format!("<p>{twenty}</p><p>{twenty_one}</p>"));
        assert_eq!(extract_text_content(&p).paragraphs, vec![twenty_one]);
    }

    #[test]
    fn paragraphs_stop_at_ten_qualifying() {
        let p = page(&mocks::html_with_paragraphs(15));
        assert_eq!(extract_text_content(&p).paragraphs.len(), MAX_PARAGRAPHS);
    }

    #[test]
    fn list_items_stop_at_twenty() {
        let items: String = (0..25).map(|i| format!("<li>item {i}</li>")).collect();
        let p = page(&format!("<ul>{items}</ul><ol><li>ordered</li></ol><li>orphan</li>"));
        let content = extract_text_content(&p);
        assert_eq!(content.list_items.len(), MAX_LIST_ITEMS);
        assert_eq!(content.list_items[0], "item 0");
        assert_eq!(content.list_items[19], "item 19");
    }

    #[test]
    fn orphan_list_items_are_ignored() {
        let p = page("<li>orphan</li><ol><li>kept</li></ol>");
        assert_eq!(extract_text_content(&p).list_items, vec!["kept".to_string()]);
    }
}
