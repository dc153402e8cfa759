//! Chart and classification rendering.
//!
//! This crate provides:
//! - Serializable mirror records (`ChartRecord`, `ReadingProfile`)
//! - JSON rendering of charts and classifications
//! - The daily-reading and pair-analysis prompt blocks
//! - A plain-text chart table for terminal output
//!
//! Everything here produces text; submitting it anywhere is the caller's
//! concern.

pub mod error;
pub mod prompt;
pub mod record;

pub use error::ReportError;
pub use prompt::{daily_prompt, pair_prompt};
pub use record::{CategorySummary, ChartRecord, LuckyAttributes, PillarRecord, ReadingProfile};

use sizhu_analysis::Classification;
use sizhu_chart::FourPillars;

/// Pretty-printed JSON for a chart.
pub fn chart_json(chart: &FourPillars) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&ChartRecord::from(chart))?)
}

/// Pretty-printed JSON for a classification.
pub fn classification_json(cls: &Classification) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&ReadingProfile::from(cls))?)
}

/// Plain-text chart table.
pub fn render_chart(chart: &FourPillars) -> String {
    let mut out = String::new();
    for (label, pillar) in [
        ("Year ", chart.year),
        ("Month", chart.month),
        ("Day  ", chart.day),
        ("Hour ", chart.hour),
    ] {
        out.push_str(&format!(
            "{label}  {:<12} element {:<6} animal {}\n",
            pillar.to_string(),
            pillar.stem.element().name(),
            pillar.branch.animal().name()
        ));
    }
    out
}
