//! SEO auditor: eight independent checks worth ten points each.

use tracing::{debug, info, warn};

use super::{Auditor, CheckOutcome, Scorecard};
use crate::domain::models::SeoReport;
use crate::domain::page::Page;

const POINTS_PER_CHECK: u32 = 10;

const TITLE_MIN_CHARS: usize = 10;
const TITLE_MAX_CHARS: usize = 60;
const DESCRIPTION_MIN_CHARS: usize = 50;
const DESCRIPTION_MAX_CHARS: usize = 160;

pub const RECOMMENDATION_ALL_CLEAR: &str = "Great job! No major SEO issues found.";
pub const RECOMMENDATION_FIX_ISSUES: &str = "Fix the issues listed above to improve SEO";

#[derive(Debug, Default, Clone, Copy)]
pub struct SeoAuditor;

impl SeoAuditor {
    pub fn scorecard(&self, page: &Page) -> Scorecard {
        let mut card = Scorecard::new(POINTS_PER_CHECK);
        card.record("document_title", "Document Title", self.check_title(page));
        card.record("meta_description", "Meta Description", self.check_meta_description(page));
        card.record("h1", "Single H1", self.check_h1(page));
        card.record("image_alt", "Image Alt Attributes", self.check_image_alt(page));
        card.record(
            "canonical",
            "Canonical URL",
            present(page, selector!(r#"link[rel="canonical"]"#)),
        );
        card.record(
            "robots",
            "Robots Meta Tag",
            present(page, selector!(r#"meta[name="robots"]"#)),
        );
        card.record(
            "viewport",
            "Viewport Meta Tag",
            present(page, selector!(r#"meta[name="viewport"]"#)),
        );
        card.record("https", "Secure Transport", self.check_https(page));
        card
    }

    fn check_title(&self, page: &Page) -> CheckOutcome {
        let len = page.title().chars().count();
        debug!("Title length: {} chars", len);
        if len < TITLE_MIN_CHARS {
            CheckOutcome::fail("Title tag is missing or too short")
        } else if len > TITLE_MAX_CHARS {
            CheckOutcome::fail("Title tag is too long (>60 chars)")
        } else {
            CheckOutcome::pass()
        }
    }

    fn check_meta_description(&self, page: &Page) -> CheckOutcome {
        match page.meta_name("description").filter(|d| !d.is_empty()) {
            None => CheckOutcome::fail("Meta description is missing"),
            Some(d) if d.chars().count() < DESCRIPTION_MIN_CHARS => {
                CheckOutcome::fail("Meta description is too short")
            }
            Some(d) if d.chars().count() > DESCRIPTION_MAX_CHARS => {
                CheckOutcome::fail("Meta description is too long")
            }
            Some(_) => CheckOutcome::pass(),
        }
    }

    fn check_h1(&self, page: &Page) -> CheckOutcome {
        match page.count(selector!("h1")) {
            0 => CheckOutcome::fail("No H1 tag found"),
            1 => CheckOutcome::pass(),
            _ => CheckOutcome::fail("Multiple H1 tags found"),
        }
    }

    /// Empty `alt` counts as missing here, unlike the accessibility check.
    fn check_image_alt(&self, page: &Page) -> CheckOutcome {
        let mut total = 0;
        let mut missing_alt = 0;

        for img in page.document().select(selector!("img")) {
            total += 1;
            if img.value().attr("alt").map_or(true, str::is_empty) {
                missing_alt += 1;
            }
        }

        if missing_alt > 0 {
            CheckOutcome::fail(format!("{} images missing alt text", missing_alt))
        } else if total > 0 {
            CheckOutcome::pass()
        } else {
            CheckOutcome::Skipped
        }
    }

    fn check_https(&self, page: &Page) -> CheckOutcome {
        if page.is_secure() {
            CheckOutcome::pass()
        } else {
            CheckOutcome::fail("Site not using HTTPS")
        }
    }
}

/// Presence-only check: points when found, silent otherwise.
fn present(page: &Page, selector: &scraper::Selector) -> CheckOutcome {
    if page.count(selector) > 0 {
        CheckOutcome::pass()
    } else {
        CheckOutcome::Skipped
    }
}

impl Auditor for SeoAuditor {
    type Report = SeoReport;

    fn audit(&self, page: &Page) -> SeoReport {
        info!("Running SEO analysis...");
        self.report(&self.scorecard(page))
    }

    fn name(&self) -> &'static str {
        "SEO"
    }
}

impl SeoAuditor {
    /// Summarise a finished scorecard.
    pub fn report(&self, card: &Scorecard) -> SeoReport {
        let issues = card.issues();
        let recommendation = if issues.is_empty() {
            RECOMMENDATION_ALL_CLEAR
        } else {
            RECOMMENDATION_FIX_ISSUES
        };

        let report = SeoReport {
            score: card.score(),
            issues,
            recommendations: vec![recommendation.to_string()],
        };

        if report.score >= 60 {
            info!("SEO Score: {}/{}", report.score, SeoReport::MAX_SCORE);
        } else {
            warn!("SEO Score: {}/{}", report.score, SeoReport::MAX_SCORE);
        }
        report
    }
}

/// Score the page against the SEO checklist.
pub fn seo_score(page: &Page) -> SeoReport {
    SeoAuditor.audit(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mocks, PAGE_URL};
    use pretty_assertions::assert_eq;

    fn page(html: &str) -> Page {
        Page::parse_with_url(html, PAGE_URL).unwrap()
    }

    fn outcome(html: &str, key: &str) -> CheckOutcome {
        SeoAuditor
            .scorecard(&page(html))
            .get(key)
            .unwrap()
            .outcome
            .clone()
    }

    #[test]
    fn complete_page_scores_eighty() {
        let report = seo_score(&page(&mocks::seo_complete_page()));
        assert_eq!(report.score, 80);
        assert!(report.issues.is_empty(), "{:?}", report.issues);
        assert_eq!(report.recommendations, vec![RECOMMENDATION_ALL_CLEAR.to_string()]);
    }

    #[test]
    fn test_check_title() {
        let ok = mocks::basic_html_page("A reasonable title", "H");
        assert!(outcome(&ok, "document_title").passed());

        let short = mocks::basic_html_page("Short", "H");
        assert_eq!(
            outcome(&short, "document_title"),
            CheckOutcome::fail("Title tag is missing or too short")
        );

        let long = mocks::basic_html_page(&"t".repeat(61), "H");
        assert_eq!(
            outcome(&long, "document_title"),
            CheckOutcome::fail("Title tag is too long (>60 chars)")
        );

        assert_eq!(
            outcome("<html><head></head></html>", "document_title"),
            CheckOutcome::fail("Title tag is missing or too short")
        );
    }

    #[test]
    fn title_bounds_are_inclusive() {
        assert!(outcome(&mocks::basic_html_page(&"t".repeat(10), "H"), "document_title").passed());
        assert!(outcome(&mocks::basic_html_page(&"t".repeat(60), "H"), "document_title").passed());
    }

    #[test]
    fn description_messages_are_distinct() {
        let with_desc = |d: &str| format!(r#"<head><meta name="description" content="{d}"></head>"#);
        assert_eq!(
            outcome("<head></head>", "meta_description"),
            CheckOutcome::fail("Meta description is missing")
        );
        assert_eq!(
            outcome(&with_desc(""), "meta_description"),
            CheckOutcome::fail("Meta description is missing")
        );
        assert_eq!(
            outcome(&with_desc(&"d".repeat(49)), "meta_description"),
            CheckOutcome::fail("Meta description is too short")
        );
        assert_eq!(
            outcome(&with_desc(&"d".repeat(161)), "meta_description"),
            CheckOutcome::fail("Meta description is too long")
        );
        assert!(outcome(&with_desc(&"d".repeat(50)), "meta_description").passed());
        assert!(outcome(&with_desc(&"d".repeat(160)), "meta_description").passed());
    }

    #[test]
    fn multiple_h1_scores_nothing() {
        let report = seo_score(&page("<h1>One</h1><h1>Two</h1>"));
        assert!(report.issues.contains(&"Multiple H1 tags found".to_string()));
        assert_eq!(
            outcome("<h1>One</h1><h1>Two</h1>", "h1"),
            CheckOutcome::fail("Multiple H1 tags found")
        );
        assert_eq!(outcome("<p>none</p>", "h1"), CheckOutcome::fail("No H1 tag found"));
    }

    #[test]
    fn test_check_image_alt() {
        assert_eq!(outcome("<p>no images</p>", "image_alt"), CheckOutcome::Skipped);
        assert!(outcome(r#"<img src="a.png" alt="A">"#, "image_alt").passed());
        assert_eq!(
            outcome(r#"<img src="a.png" alt=""><img src="b.png"><img src="c.png" alt="C">"#, "image_alt"),
            CheckOutcome::fail("2 images missing alt text")
        );
    }

    #[test]
    fn presence_checks_never_report_issues() {
        let report = seo_score(&page("<html><head></head><body></body></html>"));
        let card = SeoAuditor.scorecard(&page("<html><head></head><body></body></html>"));
        for key in ["canonical", "robots", "viewport"] {
            assert_eq!(card.get(key).unwrap().outcome, CheckOutcome::Skipped, "{key}");
        }
        assert_eq!(report.score, 10); // https only
        assert_eq!(report.recommendations, vec![RECOMMENDATION_FIX_ISSUES.to_string()]);
    }

    #[test]
    fn plain_http_is_an_issue() {
        let page = Page::parse_with_url(&mocks::seo_complete_page(), "http://example.com/").unwrap();
        let report = seo_score(&page);
        assert_eq!(report.score, 70);
        assert_eq!(report.issues, vec!["Site not using HTTPS".to_string()]);
    }

    #[test]
    fn scores_are_multiples_of_ten() {
        for html in [
            mocks::seo_complete_page(),
            mocks::html_with_missing_alt(),
            mocks::basic_html_page("x", "y"),
            String::new(),
        ] {
            let score = seo_score(&page(&html)).score;
            assert!(score <= SeoReport::MAX_SCORE && score % 10 == 0, "{score}");
        }
    }

    #[test]
    fn report_from_scorecard_matches_audit() {
        let page = page(&mocks::basic_html_page("Short", "Heading"));
        let card = SeoAuditor.scorecard(&page);
        assert_eq!(SeoAuditor.report(&card), SeoAuditor.audit(&page));
        assert_eq!(SeoAuditor.name(), "SEO");
    }
}
