use tracing::{debug, info};

use super::{element_text, non_empty_attr, truncate};
use crate::domain::models::{LinkInfo, DEFAULT_LINK_TARGET};
use crate::domain::page::Page;

const LINK_TEXT_MAX_CHARS: usize = 50;

/// Every `a[href]` in document order, minus `javascript:` pseudo links.
pub fn extract_links(page: &Page) -> Vec<LinkInfo> {
    info!("Extracting links...");
    let mut links = Vec::new();

    for anchor in page.document().select(selector!("a[href]")) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let url = page.resolve(href);
        if url.is_empty() || url.starts_with("javascript:") {
            debug!("Skipping anchor with href {:?}", href);
            continue;
        }

        links.push(LinkInfo {
            text: truncate(&element_text(anchor), LINK_TEXT_MAX_CHARS),
            internal: page.is_same_origin(&url),
            target: non_empty_attr(anchor, "target")
                .unwrap_or(DEFAULT_LINK_TARGET)
                .to_string(),
            url,
        });
    }

    info!("Found {} links", links.len());
    links
}
