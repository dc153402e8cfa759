//! Four-pillar chart computation engine.
//!
//! This crate provides:
//! - `ChartInput` / `GeoLocation` input types
//! - `compute_pillars`: civil date/time → `FourPillars`
//! - Single-pillar primitives (`year_pillar`, `day_pillar`, ...) and the
//!   solar-term month table they build on
//!
//! The engine is pure: no I/O, no hidden state, no coordination needed
//! under concurrent use. Only input validation can fail.

pub mod error;
pub mod input;
pub mod pillars;
pub mod solar_month;

pub use error::ChartError;
pub use input::{ChartInput, GeoLocation};
pub use pillars::{
    FourPillars, Pillar, compute_pillars, day_pillar, hour_pillar, month_pillar, year_pillar,
};
pub use solar_month::{SolarMonth, solar_month, sui_year};

// Re-export the cycle and calendar types callers consume alongside the
// engine, so most users only need this crate.
pub use sizhu_cycles::{Animal, Branch, Element, Polarity, Stem, sexagenary_index};
pub use sizhu_time::{CivilDateTime, DateError};
