use std::time::Instant;

use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ProbeSettings;
use crate::error::{AppError, Result};
use crate::service::performance::{NavigationEntry, TimingSnapshot, TimingSource};

/// A page body together with what was observed while fetching it.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: Url,
    pub status: u16,
    pub html: String,
    /// Milliseconds from request start until the response headers arrived.
    pub response_start_ms: f64,
    /// Milliseconds from request start until the body was fully read.
    pub response_end_ms: f64,
}

/// The fetch doubles as a timing source: navigation spans request start to
/// body received. There is no renderer, so paint entries are absent.
impl TimingSource for FetchedPage {
    fn snapshot(&self) -> Option<TimingSnapshot> {
        Some(TimingSnapshot {
            navigation: Some(NavigationEntry {
                fetch_start: 0.0,
                dom_content_loaded_event_end: self.response_end_ms,
                load_event_end: self.response_end_ms,
            }),
            paint: Vec::new(),
            resource_count: 0,
        })
    }
}

pub fn build_client(settings: &ProbeSettings) -> Result<Client> {
    Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(settings.timeout())
        .build()
        .map_err(|e| AppError::network(format!("failed to build HTTP client: {e}")))
}

/// GET the page once. Non-success statuses are errors.
pub async fn fetch_page(url: &Url, settings: &ProbeSettings) -> Result<FetchedPage> {
    info!("Fetching HTML from URL: {}", url);
    let client = build_client(settings)?;
    let start = Instant::now();

    let response = client.get(url.as_str()).send().await?;
    let response_start_ms = start.elapsed().as_secs_f64() * 1000.0;
    let status = response.status();
    let final_url = response.url().clone();

    if !status.is_success() {
        warn!("Failed to fetch HTML: {}", status);
        return Err(AppError::HttpStatus {
            status: status.as_u16(),
            url: final_url.to_string(),
        });
    }

    let html = response.text().await?;
    let response_end_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "Fetched {} bytes from {} in {:.2}ms",
        html.len(),
        final_url,
        response_end_ms
    );

    Ok(FetchedPage {
        url: final_url,
        status: status.as_u16(),
        html,
        response_start_ms,
        response_end_ms,
    })
}
