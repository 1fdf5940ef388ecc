// src/api/handlers.rs
use super::error::ApiError;
use crate::config::Settings;
use crate::extractors::{ContactInfo, OverallStats, RegionStats};
use crate::upstream;
use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    #[serde(rename = "contact-information")]
    pub contact_information: ContactInfo,
}

#[derive(Debug, Serialize)]
pub struct VaccinationResponse {
    #[serde(rename = "vaccination-count")]
    pub vaccination_count: u64,
}

#[derive(Debug, Serialize)]
pub struct RegionStatsResponse {
    #[serde(rename = "region-stats")]
    pub region_stats: RegionStats,
}

/// GET /covid-overall-stats
pub async fn overall_stats(State(settings): State<Arc<Settings>>) -> Result<Json<OverallStats>, ApiError> {
    let document = upstream::fetch_document(&settings.upstream_url).await?;
    let stats = settings.extractor.extract_overall_stats(&document)?;
    tracing::info!("Serving overall stats: {:?}", stats);
    Ok(Json(stats))
}

/// GET /covid-contact-info
pub async fn contact_info(State(settings): State<Arc<Settings>>) -> Result<Json<ContactResponse>, ApiError> {
    let document = upstream::fetch_document(&settings.upstream_url).await?;
    let contact_information = settings.extractor.extract_contact_info(&document)?;
    Ok(Json(ContactResponse { contact_information }))
}

/// GET /covid-vaccination-info
pub async fn vaccination_info(
    State(settings): State<Arc<Settings>>,
) -> Result<Json<VaccinationResponse>, ApiError> {
    let document = upstream::fetch_document(&settings.upstream_url).await?;
    let vaccination_count = settings.extractor.extract_vaccination_count(&document)?;
    Ok(Json(VaccinationResponse { vaccination_count }))
}

/// GET /covid-region-stats
pub async fn region_stats(State(settings): State<Arc<Settings>>) -> Result<Json<RegionStatsResponse>, ApiError> {
    let document = upstream::fetch_document(&settings.upstream_url).await?;
    let region_stats = settings.extractor.extract_region_stats(&document)?;
    tracing::info!("Serving stats for {} regions", region_stats.len());
    Ok(Json(RegionStatsResponse { region_stats }))
}

/// GET /health, answered locally without touching the upstream page.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
