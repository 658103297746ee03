use tracing::info;

use crate::domain::models::{Resources, ScriptResource};
use crate::domain::page::Page;

/// External scripts, stylesheets and font links, classified by tag and `rel` only.
pub fn extract_resources(page: &Page) -> Resources {
    info!("Finding external resources...");
    let document = page.document();

    let scripts: Vec<ScriptResource> = document
        .select(selector!("script[src]"))
        .map(|script| ScriptResource {
            src: page.resolve(script.value().attr("src").unwrap_or_default()),
            is_async: script.value().attr("async").is_some(),
            defer: script.value().attr("defer").is_some(),
        })
        .collect();

    let stylesheets: Vec<String> = document
        .select(selector!(r#"link[rel="stylesheet"]"#))
        .map(|link| link_href(page, link))
        .collect();

    let fonts: Vec<String> = document
        .select(selector!(r#"link[rel*="font"]"#))
        .map(|link| link_href(page, link))
        .collect();

    info!(
        "Found {} scripts, {} stylesheets",
        scripts.len(),
        stylesheets.len()
    );
    Resources {
        scripts,
        stylesheets,
        fonts,
    }
}

fn link_href(page: &Page, link: scraper::ElementRef<'_>) -> String {
    link.value()
        .attr("href")
        .filter(|href| !href.trim().is_empty())
        .map(|href| page.resolve(href))
        .unwrap_or_default()
}
