//! AnalysisAssembler - runs every extractor and auditor over one page and
//! builds the combined report.

use chrono::{SecondsFormat, Utc};
use tracing::info;

use crate::domain::models::{AccessibilityReport, PageReport, SeoReport};
use crate::domain::page::Page;
use crate::extractor;
use crate::service::auditor::{AccessibilityAuditor, Auditor, SeoAuditor};
use crate::service::performance::{performance, TimingSource};

pub struct AnalysisAssembler<'a> {
    page: &'a Page,
    timing: Option<&'a dyn TimingSource>,
}

impl<'a> AnalysisAssembler<'a> {
    pub fn new(page: &'a Page, timing: Option<&'a dyn TimingSource>) -> Self {
        Self { page, timing }
    }

    /// Build a PageReport. The caller owns the result; nothing is cached.
    pub fn assemble(&self) -> PageReport {
        info!("Extracting all available data from {}", self.page.url());

        let report = PageReport {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            url: self.page.url().to_string(),
            links: extractor::extract_links(self.page),
            images: extractor::extract_images(self.page),
            metadata: extractor::extract_metadata(self.page),
            structure: extractor::extract_structure(self.page),
            content: extractor::extract_text_content(self.page),
            seo: SeoAuditor.audit(self.page),
            accessibility: AccessibilityAuditor.audit(self.page),
            resources: extractor::extract_resources(self.page),
            performance: performance(self.timing),
        };

        info!(
            "All data extracted: {} links, {} images, SEO {}/{}, accessibility {}/{}",
            report.links.len(),
            report.images.len(),
            report.seo.score,
            SeoReport::MAX_SCORE,
            report.accessibility.score,
            AccessibilityReport::MAX_SCORE
        );
        report
    }
}

/// Run every report kind once over `page`.
pub fn extract_all(page: &Page, timing: Option<&dyn TimingSource>) -> PageReport {
    AnalysisAssembler::new(page, timing).assemble()
}
