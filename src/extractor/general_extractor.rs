use tracing::info;

use crate::domain::models::{Metadata, NOT_AVAILABLE};
use crate::domain::page::Page;

/// Title, description, Open Graph and the other head fields.
/// Each one falls back to `N/A` on its own.
pub fn extract_metadata(page: &Page) -> Metadata {
    info!("Extracting metadata...");

    let title = page.title();

    let metadata = Metadata {
        title: or_na(Some(title.as_str())),
        description: or_na(page.meta_name("description")),
        keywords: or_na(page.meta_name("keywords")),
        author: or_na(page.meta_name("author")),
        og_title: or_na(page.meta_property("og:title")),
        og_description: or_na(page.meta_property("og:description")),
        og_image: or_na(page.meta_property("og:image")),
        canonical: or_na(canonical_url(page).as_deref()),
        robots: or_na(page.meta_name("robots")),
        viewport: or_na(page.meta_name("viewport")),
        charset: or_na(declared_charset(page).as_deref()),
        language: or_na(page.language()),
    };

    info!("Metadata extracted");
    metadata
}

fn or_na(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Resolved `href` of `link[rel="canonical"]`.
pub fn canonical_url(page: &Page) -> Option<String> {
    page.document()
        .select(selector!(r#"link[rel="canonical"]"#))
        .next()
        .and_then(|el| el.value().attr("href"))
        .filter(|href| !href.trim().is_empty())
        .map(|href| page.resolve(href))
}

/// `<meta charset>`, else the charset parameter of an http-equiv content type.
fn declared_charset(page: &Page) -> Option<String> {
    if let Some(charset) = page
        .document()
        .select(selector!("meta[charset]"))
        .next()
        .and_then(|el| el.value().attr("charset"))
    {
        return Some(charset.trim().to_uppercase());
    }

    page.document()
        .select(selector!("meta[http-equiv]"))
        .filter(|el| {
            el.value()
                .attr("http-equiv")
                .is_some_and(|v| v.eq_ignore_ascii_case("content-type"))
        })
        .find_map(|el| el.value().attr("content"))
        .and_then(|content| {
            content.split(';').find_map(|param| {
                let (key, value) = param.split_once('=')?;
                key.trim()
                    .eq_ignore_ascii_case("charset")
                    .then(|| value.trim().trim_matches('"').to_uppercase())
            })
        })
}
