//! Report entities produced by the extractors and auditors.
//!
//! Every report is plain data: serializable for export, comparable so that
//! repeated runs over an unchanged page can be checked for equality.

use serde::{Deserialize, Serialize};

/// Placeholder for metadata fields the page does not declare.
pub const NOT_AVAILABLE: &str = "N/A";
/// Placeholder for images without alt text.
pub const NO_ALT_TEXT: &str = "No alt text";
pub const DEFAULT_LINK_TARGET: &str = "_self";
pub const DEFAULT_LOADING_MODE: &str = "eager";

// ====== Extraction reports ======

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInfo {
    pub text: String,
    pub url: String,
    pub internal: bool,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
    pub loading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub canonical: String,
    pub robots: String,
    pub viewport: String,
    pub charset: String,
    pub language: String,
}

impl Metadata {
    /// Field name / value pairs in display order.
    pub fn fields(&self) -> [(&'static str, &str); 12] {
        [
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("keywords", self.keywords.as_str()),
            ("author", self.author.as_str()),
            ("og_title", self.og_title.as_str()),
            ("og_description", self.og_description.as_str()),
            ("og_image", self.og_image.as_str()),
            ("canonical", self.canonical.as_str()),
            ("robots", self.robots.as_str()),
            ("viewport", self.viewport.as_str()),
            ("charset", self.charset.as_str()),
            ("language", self.language.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCounts {
    pub paragraphs: usize,
    pub lists: usize,
    pub tables: usize,
    pub forms: usize,
    pub buttons: usize,
    pub inputs: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaCounts {
    pub images: usize,
    pub videos: usize,
    pub audios: usize,
    pub iframes: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStructure {
    pub headings: HeadingCounts,
    pub elements: ElementCounts,
    pub media: MediaCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingText {
    /// Tag name, `h1` through `h6`.
    pub level: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub headings: Vec<HeadingText>,
    pub paragraphs: Vec<String>,
    pub list_items: Vec<String>,
}

/// Timing report, all values in whole milliseconds since navigation start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub page_load_time: i64,
    pub dom_content_loaded: i64,
    pub first_paint: i64,
    pub first_contentful_paint: i64,
    pub resource_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptResource {
    pub src: String,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub defer: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub scripts: Vec<ScriptResource>,
    pub stylesheets: Vec<String>,
    pub fonts: Vec<String>,
}

// ====== Scoring reports ======

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoReport {
    /// 0 to 80 in steps of ten.
    pub score: u32,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl SeoReport {
    pub const MAX_SCORE: u32 = 80;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    /// 0 to 100 in steps of twenty.
    pub score: u32,
    pub issues: Vec<String>,
    pub passes: Vec<String>,
}

impl AccessibilityReport {
    pub const MAX_SCORE: u32 = 100;
}

// ====== Aggregate ======

/// Everything extracted from one page in a single pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReport {
    /// RFC 3339 time of extraction.
    pub timestamp: String,
    pub url: String,
    pub links: Vec<LinkInfo>,
    pub images: Vec<ImageInfo>,
    pub metadata: Metadata,
    pub structure: PageStructure,
    pub content: TextContent,
    pub seo: SeoReport,
    pub accessibility: AccessibilityReport,
    pub resources: Resources,
    pub performance: Option<PerformanceMetrics>,
}
