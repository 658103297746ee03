use tracing::info;

use crate::domain::models::{ElementCounts, HeadingCounts, MediaCounts, PageStructure};
use crate::domain::page::Page;

/// Element counts by group. Nothing is truncated.
pub fn extract_structure(page: &Page) -> PageStructure {
    info!("Analyzing page structure...");

    let structure = PageStructure {
        headings: HeadingCounts {
            h1: page.count(selector!("h1")),
            h2: page.count(selector!("h2")),
            h3: page.count(selector!("h3")),
            h4: page.count(selector!("h4")),
            h5: page.count(selector!("h5")),
            h6: page.count(selector!("h6")),
        },
        elements: ElementCounts {
            paragraphs: page.count(selector!("p")),
            lists: page.count(selector!("ul, ol")),
            tables: page.count(selector!("table")),
            forms: page.count(selector!("form")),
            buttons: page.count(selector!("button")),
            inputs: page.count(selector!("input")),
        },
        media: MediaCounts {
            images: page.count(selector!("img")),
            videos: page.count(selector!("video")),
            audios: page.count(selector!("audio")),
            iframes: page.count(selector!("iframe")),
        },
    };

    info!("Structure analyzed");
    structure
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_group() {
        let page = Page::parse_with_url(
            r#"<body>
                <h1>A</h1><h2>B</h2><h2>C</h2><h6>D</h6>
                <p>one</p><p>two</p>
                <ul><li>x</li><li><ol><li>nested</li></ol></li></ul>
                <table><tr><td>1</td></tr></table>
                <form><input name="q"><input type="submit"><button>Go</button></form>
                <img src="a.png"><video></video><audio></audio>
                <iframe src="https://example.org/embed"></iframe>
            </body>"#,
            "https://example.com/",
        )
        .unwrap();

        let s = extract_structure(&page);
        assert_eq!(
            s.headings,
            HeadingCounts { h1: 1, h2: 2, h3: 0, h4: 0, h5: 0, h6: 1 }
        );
        assert_eq!(
            s.elements,
            ElementCounts { paragraphs: 2, lists: 2, tables: 1, forms: 1, buttons: 1, inputs: 2 }
        );
        assert_eq!(s.media, MediaCounts { images: 1, videos: 1, audios: 1, iframes: 1 });
    }

    #[test]
    fn empty_document_counts_zero() {
        let page = Page::parse_with_url("", "https://example.com/").unwrap();
        assert_eq!(extract_structure(&page), PageStructure::default());
    }
}
