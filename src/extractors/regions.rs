// src/extractors/regions.rs
use super::cases::element_text;
use super::PageExtractor;
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate and footnote rows at the bottom of the state table.
/// Tied to the current page layout, not detected from content.
pub const DEFAULT_FOOTER_ROWS: usize = 6;

const HEADER_ROWS: usize = 1;
// ordinal, region name, four statistics
const MIN_CELLS: usize = 6;

static REGION_TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.data-table table").expect("Failed to compile REGION_TABLE_SELECTOR")
});
static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("Failed to compile ROW_SELECTOR"));
static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td, th").expect("Failed to compile CELL_SELECTOR"));

/// One state/UT row, cell text kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionRecord {
    pub active_cases: String,
    pub cured_discharged_migrated: String,
    pub deaths: String,
    pub total_confirmed_cases: String,
}

pub type RegionStats = BTreeMap<String, RegionRecord>;

impl PageExtractor {
    /// Per-region statistics keyed by region name.
    pub fn extract_region_stats(&self, html_content: &str) -> Result<RegionStats, ExtractError> {
        let document = Html::parse_document(html_content);

        let table = document
            .select(&REGION_TABLE_SELECTOR)
            .next()
            .ok_or_else(|| ExtractError::ContainerNotFound("div.data-table table".to_string()))?;

        let rows: Vec<ElementRef> = table.select(&ROW_SELECTOR).collect();
        let skipped = HEADER_ROWS + self.footer_rows;
        if rows.len() < skipped {
            return Err(ExtractError::TooFewNodes {
                marker: "div.data-table tr".to_string(),
                expected: skipped,
                found: rows.len(),
            });
        }
        let body = &rows[HEADER_ROWS..rows.len() - self.footer_rows];
        tracing::debug!(
            "Region table has {} rows, {} region rows after skipping header and {} footer rows",
            rows.len(),
            body.len(),
            self.footer_rows
        );

        let mut stats = RegionStats::new();
        for (offset, row) in body.iter().enumerate() {
            let row_index = HEADER_ROWS + offset;
            let cells: Vec<String> = row
                .select(&CELL_SELECTOR)
                .map(|cell| element_text(cell).trim().to_string())
                .collect();
            if cells.len() < MIN_CELLS {
                return Err(ExtractError::MalformedRow {
                    row: row_index,
                    reason: format!("expected at least {} cells, found {}", MIN_CELLS, cells.len()),
                });
            }

            // cells[0] is the ordinal
            let region = cells[1].clone();
            if region.is_empty() {
                tracing::warn!("Region table row {} has an empty region name", row_index);
            }
            let record = RegionRecord {
                active_cases: cells[2].clone(),
                cured_discharged_migrated: cells[3].clone(),
                deaths: cells[4].clone(),
                total_confirmed_cases: cells[5].clone(),
            };
            // Later rows overwrite earlier ones with the same name
            if stats.insert(region.clone(), record).is_some() {
                tracing::warn!("Region '{}' repeated at row {}, keeping the later row", region, row_index);
            }
        }

        Ok(stats)
    }
}
