//! Console rendering of reports. Presentation only; nothing here changes data.

use serde::Serialize;

use super::tables::{as_ascii_table, as_key_value_table};
use crate::domain::models::{
    AccessibilityReport, ImageInfo, LinkInfo, Metadata, PageReport, PerformanceMetrics,
    SeoReport,
};
use crate::service::auditor::{CheckOutcome, Scorecard};

/// Rows shown for long lists before the "showing first" cut-off.
pub const PREVIEW_ROWS: usize = 10;

pub fn render_links(links: &[LinkInfo]) -> String {
    let rows = links.iter().take(PREVIEW_ROWS).map(|link| {
        [
            link.text.clone(),
            link.url.clone(),
            if link.internal { "yes" } else { "no" }.to_string(),
            link.target.clone(),
        ]
    });
    format!(
        "Links (showing first {} of {}):\n{}",
        links.len().min(PREVIEW_ROWS),
        links.len(),
        as_ascii_table(["Text", "URL", "Internal", "Target"], rows)
    )
}

pub fn render_images(images: &[ImageInfo]) -> String {
    let rows = images.iter().take(PREVIEW_ROWS).map(|img| {
        [
            img.src.clone(),
            img.alt.clone(),
            img.width.to_string(),
            img.height.to_string(),
            img.loading.clone(),
        ]
    });
    format!(
        "Images (showing first {} of {}):\n{}",
        images.len().min(PREVIEW_ROWS),
        images.len(),
        as_ascii_table(["Src", "Alt", "Width", "Height", "Loading"], rows)
    )
}

pub fn render_metadata(metadata: &Metadata) -> String {
    format!(
        "Metadata:\n{}",
        as_key_value_table(
            metadata
                .fields()
                .into_iter()
                .map(|(key, value)| (key, value.to_string()))
        )
    )
}

pub fn render_performance(metrics: Option<&PerformanceMetrics>) -> String {
    let Some(m) = metrics else {
        return "Performance Metrics: not available".to_string();
    };
    format!(
        "Performance Metrics:\n{}",
        as_key_value_table([
            ("page_load_time", format!("{} ms", m.page_load_time)),
            ("dom_content_loaded", format!("{} ms", m.dom_content_loaded)),
            ("first_paint", format!("{} ms", m.first_paint)),
            ("first_contentful_paint", format!("{} ms", m.first_contentful_paint)),
            ("resource_count", m.resource_count.to_string()),
        ])
    )
}

/// Checklist breakdown: one row per check.
pub fn render_scorecard(title: &str, card: &Scorecard) -> String {
    let rows = card.checks.iter().map(|check| {
        let (status, detail) = match &check.outcome {
            CheckOutcome::Passed(note) => ("pass", note.clone().unwrap_or_default()),
            CheckOutcome::Failed(message) => ("fail", message.clone()),
            CheckOutcome::Skipped => ("-", String::new()),
        };
        let points = if check.outcome.passed() {
            card.points_per_check
        } else {
            0
        };
        [
            check.label.to_string(),
            status.to_string(),
            points.to_string(),
            detail,
        ]
    });
    format!(
        "{}: {}/{}\n{}",
        title,
        card.score(),
        card.max_score(),
        as_ascii_table(["Check", "Status", "Points", "Detail"], rows)
    )
}

pub fn render_seo(report: &SeoReport) -> String {
    let mut out = format!("SEO Score: {}/{}\n", report.score, SeoReport::MAX_SCORE);
    for issue in &report.issues {
        out.push_str(&format!("  issue: {}\n", issue));
    }
    for recommendation in &report.recommendations {
        out.push_str(&format!("  recommendation: {}\n", recommendation));
    }
    out
}

pub fn render_accessibility(report: &AccessibilityReport) -> String {
    let mut out = format!(
        "Accessibility Score: {}/{}\n",
        report.score,
        AccessibilityReport::MAX_SCORE
    );
    for pass in &report.passes {
        out.push_str(&format!("  pass: {}\n", pass));
    }
    for issue in &report.issues {
        out.push_str(&format!("  issue: {}\n", issue));
    }
    out
}

/// Pretty JSON under a heading; falls back to Debug-free error text.
pub fn render_json<T: Serialize>(title: &str, value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(json) => format!("{}:\n{}", title, json),
        Err(e) => format!("{}: <unserializable: {}>", title, e),
    }
}

pub fn render_summary(report: &PageReport) -> String {
    format!(
        "All data extracted for {}\n{}",
        report.url,
        as_key_value_table([
            ("links", report.links.len().to_string()),
            ("images", report.images.len().to_string()),
            (
                "seo_score",
                format!("{}/{}", report.seo.score, SeoReport::MAX_SCORE)
            ),
            (
                "accessibility_score",
                format!(
                    "{}/{}",
                    report.accessibility.score,
                    AccessibilityReport::MAX_SCORE
                )
            ),
            ("scripts", report.resources.scripts.len().to_string()),
            ("stylesheets", report.resources.stylesheets.len().to_string()),
        ])
    )
}
