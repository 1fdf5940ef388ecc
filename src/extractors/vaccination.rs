// src/extractors/vaccination.rs
use super::cases::{element_text, parse_leading_number};
use super::PageExtractor;
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static VACCINATION_CONTAINER_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.fullbol").expect("Failed to compile VACCINATION_CONTAINER_SELECTOR")
});
static VACCINATION_LABEL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("span.coviddata").expect("Failed to compile VACCINATION_LABEL_SELECTOR")
});

impl PageExtractor {
    /// Total vaccination doses, read from `div.fullbol span.coviddata`.
    pub fn extract_vaccination_count(&self, html_content: &str) -> Result<u64, ExtractError> {
        let document = Html::parse_document(html_content);

        let container = document
            .select(&VACCINATION_CONTAINER_SELECTOR)
            .next()
            .ok_or_else(|| ExtractError::ContainerNotFound("div.fullbol".to_string()))?;
        let label = container
            .select(&VACCINATION_LABEL_SELECTOR)
            .next()
            .ok_or_else(|| ExtractError::LabelNotFound("div.fullbol".to_string()))?;

        let count = parse_leading_number(&element_text(label))?;
        tracing::debug!("Extracted vaccination count {}", count);
        Ok(count)
    }
}
