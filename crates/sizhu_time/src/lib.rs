//! Civil calendar support for the sizhu pillar engine.
//!
//! This crate provides:
//! - `CivilDateTime`, the validated local civil date/time input type
//! - Julian day number ↔ calendar conversions (proleptic Gregorian)
//! - Leap-year and month-length helpers

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::CivilDateTime;
pub use error::DateError;
pub use julian::{J2000_JDN, days_in_month, is_leap_year, jdn_to_civil, julian_day_number};
