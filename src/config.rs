// src/config.rs
use crate::extractors::{PageExtractor, PageLayout};
use crate::utils::AppError;

/// Read-only settings shared by every request.
#[derive(Debug, Clone)]
pub struct Settings {
    pub upstream_url: String,
    pub extractor: PageExtractor,
}

impl Settings {
    pub fn new(upstream_url: &str, layout: PageLayout, footer_rows: usize) -> Result<Self, AppError> {
        let url = reqwest::Url::parse(upstream_url)
            .map_err(|e| AppError::Config(format!("Invalid upstream URL '{}': {}", upstream_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Upstream URL must be http(s), got scheme '{}'",
                url.scheme()
            )));
        }

        Ok(Self {
            upstream_url: url.to_string(),
            extractor: PageExtractor::new(layout, footer_rows),
        })
    }
}
