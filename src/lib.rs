// src/lib.rs

/// Lazily parsed, process-wide CSS selector for a literal pattern.
macro_rules! selector {
    ($css:literal) => {{
        static SELECTOR: std::sync::OnceLock<scraper::Selector> = std::sync::OnceLock::new();
        SELECTOR.get_or_init(|| scraper::Selector::parse($css).unwrap())
    }};
}

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod io;
pub mod lifecycle;
pub mod service;
pub mod views;

#[cfg(test)]
pub(crate) mod test_utils;

pub use domain::models::PageReport;
pub use domain::page::Page;
pub use domain::session::SessionData;
pub use error::{AppError, Result};
