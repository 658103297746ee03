use tracing::info;

use super::non_empty_attr;
use crate::domain::models::{ImageInfo, DEFAULT_LOADING_MODE, NO_ALT_TEXT};
use crate::domain::page::Page;

/// Every `img` in document order.
///
/// A static document has no decoded images, so the declared `width`/`height`
/// attributes stand in for the natural size.
pub fn extract_images(page: &Page) -> Vec<ImageInfo> {
    info!("Extracting images...");

    let images: Vec<ImageInfo> = page
        .document()
        .select(selector!("img"))
        .map(|img| ImageInfo {
            src: non_empty_attr(img, "src")
                .map(|src| page.resolve(src))
                .unwrap_or_default(),
            alt: non_empty_attr(img, "alt").unwrap_or(NO_ALT_TEXT).to_string(),
            width: parse_dimension(img.value().attr("width")),
            height: parse_dimension(img.value().attr("height")),
            loading: non_empty_attr(img, "loading")
                .unwrap_or(DEFAULT_LOADING_MODE)
                .to_string(),
        })
        .collect();

    info!("Found {} images", images.len());
    images
}

/// Leading digits of a dimension attribute (`"120px"` -> 120), 0 otherwise.
fn parse_dimension(value: Option<&str>) -> u32 {
    let Some(value) = value else {
        return 0;
    };
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mocks;

    #[test]
    fn defaults_for_bare_images() {
        let page = Page::parse_with_url(&mocks::html_with_missing_alt(), "https://example.com/").unwrap();
        let images = extract_images(&page);

        assert_eq!(images.len(), 1);
        let img = &images[0];
        assert_eq!(img.src, "https://example.com/logo.png");
        assert_eq!(img.alt, NO_ALT_TEXT);
        assert_eq!((img.width, img.height), (0, 0));
        assert_eq!(img.loading, "eager");
    }

    #[test]
    fn declared_attributes_are_reported() {
        let page = Page::parse_with_url(
            r#"<img src="/hero.jpg" alt="Hero" width="640" height="360px" loading="lazy">
               <img alt="" width="wide">"#,
            "https://example.com/",
        )
        .unwrap();
        let images = extract_images(&page);

        assert_eq!(images[0].src, "https://example.com/hero.jpg");
        assert_eq!(images[0].alt, "Hero");
        assert_eq!((images[0].width, images[0].height), (640, 360));
        assert_eq!(images[0].loading, "lazy");

        assert_eq!(images[1].src, "");
        assert_eq!(images[1].alt, NO_ALT_TEXT);
        assert_eq!(images[1].width, 0);
    }

    #[test]
    fn dimension_parsing() {
        assert_eq!(parse_dimension(Some("100")), 100);
        assert_eq!(parse_dimension(Some(" 42px")), 42);
        assert_eq!(parse_dimension(Some("auto")), 0);
        assert_eq!(parse_dimension(None), 0);
    }
}
