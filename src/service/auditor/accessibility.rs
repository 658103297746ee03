//! Accessibility auditor: five checks worth twenty points each.
//!
//! These are heuristics over the static markup. No rendering happens, so the
//! "defined background" check looks at declared styles only and no contrast
//! ratio is computed.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use scraper::ElementRef;
use tracing::{info, warn};

use super::{Auditor, CheckOutcome, Scorecard};
use crate::domain::models::AccessibilityReport;
use crate::domain::page::Page;
use crate::extractor::heading_extractor::heading_levels;

const POINTS_PER_CHECK: u32 = 20;

#[derive(Debug, Default, Clone, Copy)]
pub struct AccessibilityAuditor;

impl AccessibilityAuditor {
    pub fn scorecard(&self, page: &Page) -> Scorecard {
        let mut card = Scorecard::new(POINTS_PER_CHECK);
        card.record("image_alt", "Image Alt Attributes", self.check_image_alt(page));
        card.record("input_labels", "Form Labels", self.check_input_labels(page));
        card.record("language", "Page Language", self.check_language(page));
        card.record("heading_order", "Heading Hierarchy", self.check_heading_order(page));
        card.record("background", "Defined Background", self.check_background(page));
        card
    }

    /// Only a missing attribute counts; `alt=""` marks a decorative image.
    fn check_image_alt(&self, page: &Page) -> CheckOutcome {
        match page.count(selector!("img:not([alt])")) {
            0 => CheckOutcome::pass_with("All images have alt text"),
            n => CheckOutcome::fail(format!("{} images without alt text", n)),
        }
    }

    fn check_input_labels(&self, page: &Page) -> CheckOutcome {
        let total = page.count(selector!("input"));
        let unlabelled = unlabelled_inputs(page);
        if unlabelled > 0 {
            CheckOutcome::fail(format!("{} inputs without labels", unlabelled))
        } else if total > 0 {
            CheckOutcome::pass_with("All inputs have labels")
        } else {
            CheckOutcome::Skipped
        }
    }

    fn check_language(&self, page: &Page) -> CheckOutcome {
        if page.language().is_some() {
            CheckOutcome::pass_with("Page language is set")
        } else {
            CheckOutcome::fail("Page language not set")
        }
    }

    fn check_heading_order(&self, page: &Page) -> CheckOutcome {
        let levels = heading_levels(page);
        if !heading_order_is_valid(&levels) {
            CheckOutcome::fail("Heading hierarchy has gaps")
        } else if !levels.is_empty() {
            CheckOutcome::pass_with("Heading hierarchy is correct")
        } else {
            CheckOutcome::Skipped
        }
    }

    fn check_background(&self, page: &Page) -> CheckOutcome {
        if declares_background(page) {
            CheckOutcome::pass()
        } else {
            CheckOutcome::Skipped
        }
    }
}

impl Auditor for AccessibilityAuditor {
    type Report = AccessibilityReport;

    fn audit(&self, page: &Page) -> AccessibilityReport {
        info!("Checking accessibility...");
        self.report(&self.scorecard(page))
    }

    fn name(&self) -> &'static str {
        "Accessibility"
    }
}

impl AccessibilityAuditor {
    /// Summarise a finished scorecard.
    pub fn report(&self, card: &Scorecard) -> AccessibilityReport {
        let report = AccessibilityReport {
            score: card.score(),
            issues: card.issues(),
            passes: card.passes(),
        };

        if report.score >= 70 {
            info!("Accessibility Score: {}/{}", report.score, AccessibilityReport::MAX_SCORE);
        } else {
            warn!("Accessibility Score: {}/{}", report.score, AccessibilityReport::MAX_SCORE);
        }
        report
    }
}

/// Score the page against the accessibility checklist.
pub fn accessibility_score(page: &Page) -> AccessibilityReport {
    AccessibilityAuditor.audit(page)
}

/// Levels may go down by any amount but never up by more than one.
pub fn heading_order_is_valid(levels: &[u8]) -> bool {
    levels
        .windows(2)
        .all(|pair| i16::from(pair[1]) - i16::from(pair[0]) <= 1)
}

fn is_labelable(element: ElementRef<'_>) -> bool {
    match element.value().name() {
        "input" => !element
            .value()
            .attr("type")
            .is_some_and(|t| t.trim().eq_ignore_ascii_case("hidden")),
        "button" | "meter" | "output" | "progress" | "select" | "textarea" => true,
        _ => false,
    }
}

/// Inputs that no `<label>` points at, either through `for` or by nesting.
/// Hidden inputs cannot carry labels and always count.
fn unlabelled_inputs(page: &Page) -> usize {
    let document = page.document();

    let mut first_by_id: HashMap<&str, ElementRef<'_>> = HashMap::new();
    for element in document.select(selector!("[id]")) {
        if let Some(id) = element.value().attr("id") {
            first_by_id.entry(id).or_insert(element);
        }
    }

    let mut labelled = Vec::new();
    for label in document.select(selector!("label")) {
        let control = match label.value().attr("for") {
            Some(target) => first_by_id.get(target).copied().filter(|el| is_labelable(*el)),
            None => label
                .select(selector!("input, button, meter, output, progress, select, textarea"))
                .find(|el| is_labelable(*el)),
        };
        if let Some(control) = control {
            labelled.push(control.id());
        }
    }

    document
        .select(selector!("input"))
        .filter(|input| !is_labelable(*input) || !labelled.contains(&input.id()))
        .count()
}

/// Background declared on `body`/`html` inline, through `bgcolor`, or by a
/// `<style>` rule targeting them.
fn declares_background(page: &Page) -> bool {
    let inline = [page.body(), Some(page.root())]
        .into_iter()
        .flatten()
        .any(|element| {
            element
                .value()
                .attr("bgcolor")
                .is_some_and(|color| !is_transparent(color))
                || element
                    .value()
                    .attr("style")
                    .is_some_and(declarations_set_background)
        });

    inline
        || page
            .document()
            .select(selector!("style"))
            .any(|style| stylesheet_styles_root(&style.text().collect::<String>()))
}

fn declarations_set_background(declarations: &str) -> bool {
    declarations
        .split(';')
        .filter_map(|declaration| declaration.split_once(':'))
        .any(|(property, value)| {
            let property = property.trim().to_ascii_lowercase();
            (property == "background" || property == "background-color") && !is_transparent(value)
        })
}

fn is_transparent(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    let compact = compact.trim_end_matches("!important");
    matches!(
        compact,
        "" | "transparent"
            | "none"
            | "initial"
            | "inherit"
            | "unset"
            | "rgba(0,0,0,0)"
            | "hsla(0,0%,0%,0)"
            | "#0000"
            | "#00000000"
    )
}

fn stylesheet_styles_root(css: &str) -> bool {
    static COMMENTS: OnceLock<Regex> = OnceLock::new();
    let comments = COMMENTS.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
    let css = comments.replace_all(css, "");

    css.split('}')
        .filter_map(|block| block.rsplit_once('{'))
        .any(|(head, declarations)| {
            let selectors = head.rsplit(['{', ';']).next().unwrap_or(head);
            selectors.split(',').any(|selector| {
                matches!(
                    selector.trim().to_ascii_lowercase().as_str(),
                    "html" | "body" | ":root"
                )
            }) && declarations_set_background(declarations)
        })
}
