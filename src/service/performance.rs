//! Performance report from an optional timing source.
//!
//! A timing snapshot mirrors what a browser's Performance API exposes: one
//! navigation entry, paint entries and a resource count. It can be recorded
//! in a browser and loaded from JSON, or produced by the HTTP fetch.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::models::PerformanceMetrics;
use crate::error::{AppError, Result};

pub const FIRST_PAINT: &str = "first-paint";
pub const FIRST_CONTENTFUL_PAINT: &str = "first-contentful-paint";

/// Navigation timestamps in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    #[serde(default)]
    pub fetch_start: f64,
    #[serde(default)]
    pub dom_content_loaded_event_end: f64,
    #[serde(default)]
    pub load_event_end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintEntry {
    pub name: String,
    pub start_time: f64,
}

/// Point-in-time read of a timing source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingSnapshot {
    #[serde(default)]
    pub navigation: Option<NavigationEntry>,
    #[serde(default)]
    pub paint: Vec<PaintEntry>,
    #[serde(default)]
    pub resource_count: u32,
}

impl TimingSnapshot {
    /// Load a snapshot recorded as JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        serde_json::from_str(&raw)
            .map_err(|e| AppError::TimingSnapshot(format!("{}: {}", path.display(), e)))
    }

    fn paint_time(&self, name: &str) -> i64 {
        self.paint
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| round_ms(entry.start_time))
            .unwrap_or(0)
    }
}

/// Anything that can hand out a timing snapshot on demand.
pub trait TimingSource {
    /// `None` when timing is unsupported by this source.
    fn snapshot(&self) -> Option<TimingSnapshot>;
}

impl TimingSource for TimingSnapshot {
    fn snapshot(&self) -> Option<TimingSnapshot> {
        Some(self.clone())
    }
}

fn round_ms(value: f64) -> i64 {
    value.round() as i64
}

/// Build the performance report, or `None` when no timing is available.
pub fn performance(source: Option<&dyn TimingSource>) -> Option<PerformanceMetrics> {
    info!("Analyzing performance...");
    let Some(snapshot) = source.and_then(|s| s.snapshot()) else {
        warn!("Performance timing not available");
        return None;
    };

    let (page_load_time, dom_content_loaded) = match &snapshot.navigation {
        Some(nav) => (
            round_ms(nav.load_event_end - nav.fetch_start),
            round_ms(nav.dom_content_loaded_event_end - nav.fetch_start),
        ),
        None => (0, 0),
    };

    let metrics = PerformanceMetrics {
        page_load_time,
        dom_content_loaded,
        first_paint: snapshot.paint_time(FIRST_PAINT),
        first_contentful_paint: snapshot.paint_time(FIRST_CONTENTFUL_PAINT),
        resource_count: snapshot.resource_count,
    };

    info!("Performance analyzed");
    Some(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Unsupported;

    impl TimingSource for Unsupported {
        fn snapshot(&self) -> Option<TimingSnapshot> {
            None
        }
    }

    #[test]
    fn missing_source_yields_none() {
        assert_eq!(performance(None), None);
        assert_eq!(performance(Some(&Unsupported)), None);
    }

    #[test]
    fn times_are_relative_to_fetch_start_and_rounded() {
        let snapshot = TimingSnapshot {
            navigation: Some(NavigationEntry {
                fetch_start: 10.0,
                dom_content_loaded_event_end: 310.9,
                load_event_end: 1210.0,
            }),
            paint: vec![
                PaintEntry { name: FIRST_PAINT.into(), start_time: 120.49 },
                PaintEntry { name: FIRST_CONTENTFUL_PAINT.into(), start_time: 130.5 },
            ],
            resource_count: 17,
        };

        let metrics = performance(Some(&snapshot)).unwrap();
        assert_eq!(
            metrics,
            PerformanceMetrics {
                page_load_time: 1200,
                dom_content_loaded: 301,
                first_paint: 120,
                first_contentful_paint: 131,
                resource_count: 17,
            }
        );
    }

    #[test]
    fn missing_entries_default_to_zero() {
        let metrics = performance(Some(&TimingSnapshot::default())).unwrap();
        assert_eq!(metrics, PerformanceMetrics::default());
    }

    #[test]
    fn snapshot_parses_browser_shaped_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timing.json");
        std::fs::write(
            &path,
            r#"{
                "navigation": {"fetchStart": 0, "domContentLoadedEventEnd": 480.2, "loadEventEnd": 900.7, "type": "navigate"},
                "paint": [{"name": "first-contentful-paint", "startTime": 250.2, "entryType": "paint"}],
                "resourceCount": 4
            }"#,
        )
        .unwrap();

        let snapshot = TimingSnapshot::from_file(&path).unwrap();
        let metrics = performance(Some(&snapshot)).unwrap();
        assert_eq!(metrics.page_load_time, 901);
        assert_eq!(metrics.dom_content_loaded, 480);
        assert_eq!(metrics.first_paint, 0);
        assert_eq!(metrics.first_contentful_paint, 250);
        assert_eq!(metrics.resource_count, 4);
    }

    #[test]
    fn malformed_snapshot_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timing.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            TimingSnapshot::from_file(&path),
            Err(AppError::TimingSnapshot(_))
        ));
    }
}
