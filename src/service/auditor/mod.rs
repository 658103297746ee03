//! Checklist auditors.
//!
//! - **SEO**: eight checks, ten points each (maximum 80)
//! - **Accessibility**: five checks, twenty points each (maximum 100)
//!
//! Both implement the `Auditor` trait; the checklists are fixed.

mod accessibility;
mod seo;
mod types;

pub use accessibility::{accessibility_score, heading_order_is_valid, AccessibilityAuditor};
pub use seo::{seo_score, SeoAuditor, RECOMMENDATION_ALL_CLEAR, RECOMMENDATION_FIX_ISSUES};
pub use types::*;

use crate::domain::page::Page;

/// A fixed checklist scored against one page.
pub trait Auditor {
    type Report;

    /// Score the page. Never fails: absent elements simply fail or skip checks.
    fn audit(&self, page: &Page) -> Self::Report;

    /// Human-readable name for this auditor.
    fn name(&self) -> &'static str;
}
