// src/extractors/mod.rs
pub mod cases;
pub mod contact;
pub mod regions;
pub mod vaccination;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use cases::{CaseCategory, CaseCounts, OverallStats};
pub use contact::ContactInfo;
#[allow(unused_imports)]
pub use regions::{RegionRecord, RegionStats, DEFAULT_FOOTER_ROWS};

/// Marker-set variant of the upstream page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PageLayout {
    /// Category `li` found anywhere in the page; the count is the second
    /// `strong.mob-hide` inside it (the first is the caption).
    #[default]
    Nested,
    /// Category `li` looked up inside the `div.site-stats-count` container;
    /// the count is its first `strong.mob-hide`. Captions in this markup are
    /// `span.mob-hide`, so a page with `strong` captions only reads under `Nested`.
    Direct,
}

/// Turns the raw upstream document into typed values.
///
/// Every method parses its own copy of the document and keeps nothing
/// between calls, so the same input always yields the same output.
#[derive(Debug, Clone)]
pub struct PageExtractor {
    layout: PageLayout,
    footer_rows: usize,
}

impl PageExtractor {
    pub fn new(layout: PageLayout, footer_rows: usize) -> Self {
        Self { layout, footer_rows }
    }

    pub fn layout(&self) -> PageLayout {
        self.layout
    }

    #[cfg(test)]
    pub fn footer_rows(&self) -> usize {
        self.footer_rows
    }
}

impl Default for PageExtractor {
    fn default() -> Self {
        Self::new(PageLayout::default(), DEFAULT_FOOTER_ROWS)
    }
}
