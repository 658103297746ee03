pub mod analysis_assembler;
pub mod auditor;
pub mod performance;

pub use analysis_assembler::{extract_all, AnalysisAssembler};
pub use auditor::{accessibility_score, seo_score, AccessibilityAuditor, Auditor, SeoAuditor};
pub use performance::{performance, TimingSnapshot, TimingSource};
