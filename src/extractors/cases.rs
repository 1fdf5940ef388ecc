// src/extractors/cases.rs

// --- Imports ---
use super::{PageExtractor, PageLayout};
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

// --- Constants ---
// Index 0 of the nested layout's `strong.mob-hide` list is the caption
const NESTED_LABEL_INDEX: usize = 1;

// --- CSS Selectors (Lazy Static) ---
static STATS_CONTAINER_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.site-stats-count").expect("Failed to compile STATS_CONTAINER_SELECTOR")
});

static COUNT_LABEL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("strong.mob-hide").expect("Failed to compile COUNT_LABEL_SELECTOR")
});

static ACTIVE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li.bg-blue").expect("Failed to compile ACTIVE_SELECTOR"));
static CURED_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li.bg-green").expect("Failed to compile CURED_SELECTOR"));
static DEATH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li.bg-red").expect("Failed to compile DEATH_SELECTOR"));
static MIGRATED_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li.bg-orange").expect("Failed to compile MIGRATED_SELECTOR"));

// --- Regex Patterns (Lazy Static) ---
// Leading numeral run; single grouping commas between digits (1,234 and 1,23,456)
static NUMERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:,\d+)*").expect("Failed to compile NUMERAL_RE"));

// --- Data Structures ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CaseCategory {
    Active,
    CuredDischarged,
    Death,
    Migrated,
}

impl CaseCategory {
    pub const ALL: [CaseCategory; 4] = [
        CaseCategory::Active,
        CaseCategory::CuredDischarged,
        CaseCategory::Death,
        CaseCategory::Migrated,
    ];

    /// Class name carried by the category's `li` node.
    pub fn marker(self) -> &'static str {
        match self {
            CaseCategory::Active => "bg-blue",
            CaseCategory::CuredDischarged => "bg-green",
            CaseCategory::Death => "bg-red",
            CaseCategory::Migrated => "bg-orange",
        }
    }

    fn selector(self) -> &'static Selector {
        match self {
            CaseCategory::Active => &*ACTIVE_SELECTOR,
            CaseCategory::CuredDischarged => &*CURED_SELECTOR,
            CaseCategory::Death => &*DEATH_SELECTOR,
            CaseCategory::Migrated => &*MIGRATED_SELECTOR,
        }
    }
}

/// Body of `/covid-overall-stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OverallStats {
    pub active_cases: u64,
    pub cured_discharged_cases: u64,
    pub death_cases: u64,
}

/// All four categories, used by the one-shot CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CaseCounts {
    #[serde(flatten)]
    pub overall: OverallStats,
    pub migrated_cases: u64,
}

impl PageExtractor {
    /// Reads the count for one category.
    pub fn extract_case_count(&self, html_content: &str, category: CaseCategory) -> Result<u64, ExtractError> {
        let document = Html::parse_document(html_content);
        self.case_count_in(&document, category)
    }

    /// Active, cured/discharged and death counts from a single parse.
    pub fn extract_overall_stats(&self, html_content: &str) -> Result<OverallStats, ExtractError> {
        let document = Html::parse_document(html_content);
        self.overall_stats_in(&document)
    }

    pub fn extract_all_case_counts(&self, html_content: &str) -> Result<CaseCounts, ExtractError> {
        let document = Html::parse_document(html_content);
        let mut counts = [0u64; 4];
        for (slot, category) in counts.iter_mut().zip(CaseCategory::ALL) {
            *slot = self.case_count_in(&document, category)?;
        }
        let [active_cases, cured_discharged_cases, death_cases, migrated_cases] = counts;
        Ok(CaseCounts {
            overall: OverallStats { active_cases, cured_discharged_cases, death_cases },
            migrated_cases,
        })
    }

    fn overall_stats_in(&self, document: &Html) -> Result<OverallStats, ExtractError> {
        Ok(OverallStats {
            active_cases: self.case_count_in(document, CaseCategory::Active)?,
            cured_discharged_cases: self.case_count_in(document, CaseCategory::CuredDischarged)?,
            death_cases: self.case_count_in(document, CaseCategory::Death)?,
        })
    }

    fn case_count_in(&self, document: &Html, category: CaseCategory) -> Result<u64, ExtractError> {
        let node_marker = format!("li.{}", category.marker());

        let label = match self.layout {
            PageLayout::Nested => {
                let node = document
                    .select(category.selector())
                    .next()
                    .ok_or_else(|| ExtractError::NodeNotFound(node_marker.clone()))?;
                node.select(&COUNT_LABEL_SELECTOR).nth(NESTED_LABEL_INDEX)
            }
            PageLayout::Direct => {
                let container = document
                    .select(&STATS_CONTAINER_SELECTOR)
                    .next()
                    .ok_or_else(|| ExtractError::ContainerNotFound("div.site-stats-count".to_string()))?;
                let node = container
                    .select(category.selector())
                    .next()
                    .ok_or_else(|| ExtractError::NodeNotFound(node_marker.clone()))?;
                node.select(&COUNT_LABEL_SELECTOR).next()
            }
        }
        .ok_or_else(|| ExtractError::LabelNotFound(node_marker.clone()))?;

        let count = parse_leading_number(&element_text(label))?;
        tracing::debug!("Extracted {:?} count {} from {}", category, count, node_marker);
        Ok(count)
    }
}

pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

/// Parses the numeral run at the start of `text`, ignoring surrounding
/// whitespace, grouping commas and any trailing words.
pub(crate) fn parse_leading_number(text: &str) -> Result<u64, ExtractError> {
    let trimmed = text.trim();
    let run = NUMERAL_RE
        .find(trimmed)
        .ok_or_else(|| ExtractError::NotANumber(trimmed.to_string()))?;

    run.as_str()
        .replace(',', "")
        .parse::<u64>()
        .map_err(|_| ExtractError::NotANumber(trimmed.to_string()))
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::DEFAULT_FOOTER_ROWS;

    fn nested_page(label: &str) -> String {
        let mut items = String::new();
        for category in CaseCategory::ALL {
            items.push_str(&format!(
                r#"<li class="{} item"><strong class="mob-hide">Caption</strong><strong class="mob-hide">{}</strong></li>"#,
                category.marker(),
                label
            ));
        }
        format!("<html><body><ul>{}</ul></body></html>", items)
    }

    fn direct_page(label: &str) -> String {
        let mut items = String::new();
        for category in CaseCategory::ALL {
            items.push_str(&format!(
                r#"<li class="{}"><span class="mob-hide">Caption</span><strong class="mob-hide">{}</strong></li>"#,
                category.marker(),
                label
            ));
        }
        format!(
            r#"<html><body><div class="site-stats-count"><ul>{}</ul></div></body></html>"#,
            items
        )
    }

    fn nested() -> PageExtractor {
        PageExtractor::new(PageLayout::Nested, DEFAULT_FOOTER_ROWS)
    }

    fn direct() -> PageExtractor {
        PageExtractor::new(PageLayout::Direct, DEFAULT_FOOTER_ROWS)
    }

    #[test]
    fn reads_leading_numeral_for_every_category() {
        let nested_html = nested_page("  123 (New)  ");
        let direct_html = direct_page("\n123 (New)\n");
        for category in CaseCategory::ALL {
            assert_eq!(nested().extract_case_count(&nested_html, category), Ok(123), "{:?}", category);
            assert_eq!(direct().extract_case_count(&direct_html, category), Ok(123), "{:?}", category);
        }
    }

    #[test]
    fn grouping_commas_are_stripped() {
        let html = nested_page("1,234 new");
        assert_eq!(nested().extract_case_count(&html, CaseCategory::Active), Ok(1234));
        let html = nested_page("1,23,456");
        assert_eq!(nested().extract_case_count(&html, CaseCategory::Death), Ok(123456));
    }

    #[test]
    fn missing_category_marker_fails() {
        let html = r#"<html><body><ul><li class="bg-blue"><strong class="mob-hide">A</strong><strong class="mob-hide">5</strong></li></ul></body></html>"#;
        assert_eq!(
            nested().extract_case_count(html, CaseCategory::Death),
            Err(ExtractError::NodeNotFound("li.bg-red".to_string()))
        );
        assert_eq!(nested().extract_case_count(html, CaseCategory::Active), Ok(5));
    }

    #[test]
    fn missing_label_is_not_zero() {
        let html = r#"<ul><li class="bg-blue"><strong class="mob-hide">Active</strong></li></ul>"#;
        assert_eq!(
            nested().extract_case_count(html, CaseCategory::Active),
            Err(ExtractError::LabelNotFound("li.bg-blue".to_string()))
        );
    }

    #[test]
    fn direct_layout_requires_container() {
        // Valid nested markup, but no container for the direct layout
        let html = nested_page("42");
        assert_eq!(
            direct().extract_case_count(&html, CaseCategory::Active),
            Err(ExtractError::ContainerNotFound("div.site-stats-count".to_string()))
        );
    }

    #[test]
    fn non_numeric_label_fails() {
        for label in ["N/A", "(New) 123", "", "-5"] {
            let html = nested_page(label);
            let result = nested().extract_case_count(&html, CaseCategory::Active);
            assert!(matches!(result, Err(ExtractError::NotANumber(_))), "{label:?} gave {result:?}");
        }
    }

    #[test]
    fn overflowing_numeral_fails() {
        let html = nested_page("99999999999999999999999");
        assert!(matches!(
            nested().extract_case_count(&html, CaseCategory::Active),
            Err(ExtractError::NotANumber(_))
        ));
    }

    #[test]
    fn overall_stats_and_all_counts() {
        let html = crate::test_support::FULL_PAGE;
        let stats = nested().extract_overall_stats(html).unwrap();
        assert_eq!(
            stats,
            OverallStats { active_cases: 123, cured_discharged_cases: 4567, death_cases: 89 }
        );

        let all = nested().extract_all_case_counts(html).unwrap();
        assert_eq!(all.overall, stats);
        assert_eq!(all.migrated_cases, 1);

        let json = serde_json::to_value(all).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "active-cases": 123,
                "cured-discharged-cases": 4567,
                "death-cases": 89,
                "migrated-cases": 1
            })
        );
    }

    #[test]
    fn extraction_is_repeatable() {
        let html = nested_page("77 today");
        let first = nested().extract_overall_stats(&html);
        let second = nested().extract_overall_stats(&html);
        assert_eq!(first, second);
    }

    #[test]
    fn direct_layout_missing_node_and_label() {
        let html = r#"<div class="site-stats-count"><ul><li class="bg-blue"><span class="mob-hide">Active</span></li></ul></div>"#;
        assert_eq!(
            direct().extract_case_count(html, CaseCategory::Death),
            Err(ExtractError::NodeNotFound("li.bg-red".to_string()))
        );
        assert_eq!(
            direct().extract_case_count(html, CaseCategory::Active),
            Err(ExtractError::LabelNotFound("li.bg-blue".to_string()))
        );
    }

    #[test]
    fn direct_layout_reads_only_inside_container() {
        let html = crate::test_support::DIRECT_PAGE;
        let all = direct().extract_all_case_counts(html).unwrap();
        assert_eq!(
            all,
            CaseCounts {
                overall: OverallStats { active_cases: 2345, cured_discharged_cases: 6789, death_cases: 12 },
                migrated_cases: 3,
            }
        );
        // Nested picks the decorative li outside the container and finds no second label
        assert_eq!(
            nested().extract_case_count(html, CaseCategory::Active),
            Err(ExtractError::LabelNotFound("li.bg-blue".to_string()))
        );
        // Strong captions in the nested fixture are read as the count under Direct
        assert_eq!(
            direct().extract_case_count(crate::test_support::FULL_PAGE, CaseCategory::Active),
            Err(ExtractError::NotANumber("Active".to_string()))
        );
    }

    #[test]
    fn malformed_grouping_stops_the_numeral_run() {
        assert_eq!(parse_leading_number("1,,2"), Ok(1));
        assert_eq!(parse_leading_number("12, rising"), Ok(12));
        assert_eq!(parse_leading_number("12,"), Ok(12));
        assert_eq!(parse_leading_number(",12"), Err(ExtractError::NotANumber(",12".to_string())));
    }

    #[test]
    fn category_names_match_cli_and_json() {
        use clap::ValueEnum;
        for (category, name) in CaseCategory::ALL
            .into_iter()
            .zip(["active", "cured-discharged", "death", "migrated"])
        {
            assert_eq!(CaseCategory::from_str(name, false), Ok(category));
            assert_eq!(serde_json::to_value(category).unwrap(), serde_json::json!(name));
        }
    }
}
