//! Session state: the last computed value of each report.
//!
//! Owned by whoever drives the session (the console loop); there is no
//! process-wide instance.

use serde::{Deserialize, Deserializer, Serialize};

use super::models::{
    AccessibilityReport, ImageInfo, LinkInfo, Metadata, PageReport, PageStructure,
    PerformanceMetrics, Resources, SeoReport, TextContent,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<LinkInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<PageStructure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<TextContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<AccessibilityReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Resources>,
    /// `Some(None)` records a performance run without a timing source; it
    /// serializes as `null`, unlike a run that never happened.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    pub performance: Option<Option<PerformanceMetrics>>,
}

impl SessionData {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        [
            self.timestamp.is_some(),
            self.url.is_some(),
            self.links.is_some(),
            self.images.is_some(),
            self.metadata.is_some(),
            self.structure.is_some(),
            self.content.is_some(),
            self.seo.is_some(),
            self.accessibility.is_some(),
            self.resources.is_some(),
            self.performance.is_some(),
        ]
        .iter()
        .filter(|stored| **stored)
        .count()
    }
}

impl From<PageReport> for SessionData {
    fn from(report: PageReport) -> Self {
        Self {
            timestamp: Some(report.timestamp),
            url: Some(report.url),
            links: Some(report.links),
            images: Some(report.images),
            metadata: Some(report.metadata),
            structure: Some(report.structure),
            content: Some(report.content),
            seo: Some(report.seo),
            accessibility: Some(report.accessibility),
            resources: Some(report.resources),
            performance: Some(report.performance),
        }
    }
}

/// A key present in the input, `null` included, maps to `Some`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_session_serializes_to_empty_object() {
        let session = SessionData::default();
        assert!(session.is_empty());
        assert_eq!(session.len(), 0);
        assert_eq!(serde_json::to_string(&session).unwrap(), "{}");
    }

    #[test]
    fn partial_session_round_trips() {
        let session = SessionData {
            seo: Some(SeoReport {
                score: 40,
                issues: vec!["No H1 tag found".into()],
                recommendations: vec!["Fix the issues listed above to improve SEO".into()],
            }),
            links: Some(vec![LinkInfo {
                text: "Home".into(),
                url: "https://example.com/".into(),
                internal: true,
                target: "_self".into(),
            }]),
            ..Default::default()
        };

        let json = serde_json::to_string_pretty(&session).unwrap();
        let parsed: SessionData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
        assert_eq!(parsed.len(), 2);
        assert!(!json.contains("images"));
    }

    #[test]
    fn unavailable_performance_is_kept_as_null() {
        let session = SessionData {
            performance: Some(None),
            ..Default::default()
        };
        assert!(!session.is_empty());

        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"performance":null}"#);

        let parsed: SessionData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.performance, Some(None));
        let never_ran: SessionData = serde_json::from_str("{}").unwrap();
        assert_eq!(never_ran.performance, None);
    }
}
