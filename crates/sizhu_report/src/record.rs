//! Serializable mirror records for charts and classifications.
//!
//! The engine's value types stay serde-free; these records are the
//! key-value rendering consumed by downstream prompt assembly and by the
//! CLI's JSON output. `ReadingProfile` reproduces the analysis shape the
//! consuming product embeds into its reading prompts, with all symbols in
//! English.

use serde::Serialize;
use sizhu_analysis::Classification;
use sizhu_chart::{FourPillars, Pillar};

/// One pillar as name + glyph pairs.
#[derive(Debug, Clone, Serialize)]
pub struct PillarRecord {
    pub stem: &'static str,
    pub stem_glyph: &'static str,
    pub branch: &'static str,
    pub branch_glyph: &'static str,
    pub element: &'static str,
    pub animal: &'static str,
}

impl From<Pillar> for PillarRecord {
    fn from(p: Pillar) -> Self {
        Self {
            stem: p.stem.name(),
            stem_glyph: p.stem.glyph(),
            branch: p.branch.name(),
            branch_glyph: p.branch.glyph(),
            element: p.stem.element().name(),
            animal: p.branch.animal().name(),
        }
    }
}

/// A full chart as four pillar records.
#[derive(Debug, Clone, Serialize)]
pub struct ChartRecord {
    pub year: PillarRecord,
    pub month: PillarRecord,
    pub day: PillarRecord,
    pub hour: PillarRecord,
}

impl From<&FourPillars> for ChartRecord {
    fn from(chart: &FourPillars) -> Self {
        Self {
            year: chart.year.into(),
            month: chart.month.into(),
            day: chart.day.into(),
            hour: chart.hour.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub dominant: &'static str,
    pub weak: &'static str,
    pub all: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LuckyAttributes {
    pub colors: Vec<&'static str>,
    pub numbers: Vec<u8>,
    pub directions: Vec<&'static str>,
}

/// The analysis block embedded into reading prompts.
#[derive(Debug, Clone, Serialize)]
pub struct ReadingProfile {
    pub elements: CategorySummary,
    pub animals: CategorySummary,
    pub personality: Vec<&'static str>,
    pub compatibility: Vec<&'static str>,
    pub lucky: LuckyAttributes,
    pub challenges: Vec<&'static str>,
    pub opportunities: Vec<&'static str>,
}

impl From<&Classification> for ReadingProfile {
    fn from(cls: &Classification) -> Self {
        let profile = cls.profile;
        Self {
            elements: CategorySummary {
                dominant: cls.dominant_element.name(),
                weak: cls.weak_element.name(),
                all: cls
                    .element_counts
                    .present()
                    .into_iter()
                    .map(|e| e.name())
                    .collect(),
            },
            animals: CategorySummary {
                dominant: cls.dominant_animal.name(),
                weak: cls.weak_animal.name(),
                all: cls
                    .animal_counts
                    .present()
                    .into_iter()
                    .map(|a| a.name())
                    .collect(),
            },
            personality: profile.personality.to_vec(),
            compatibility: profile
                .compatible_elements
                .iter()
                .map(|e| e.name())
                .collect(),
            lucky: LuckyAttributes {
                colors: profile.lucky_colors.to_vec(),
                numbers: profile.lucky_numbers.to_vec(),
                directions: profile.lucky_directions.to_vec(),
            },
            challenges: profile.challenges.to_vec(),
            opportunities: profile.opportunities.to_vec(),
        }
    }
}
