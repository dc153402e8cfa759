//! Input types for chart computation.

use sizhu_time::{CivilDateTime, DateError};

use crate::error::ChartError;

/// Geographic location of the birth or query moment.
///
/// Accepted for callers that record it alongside the civil time; the
/// cycle-index arithmetic does not consume it. Range-checked when present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ChartError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(ChartError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(ChartError::InvalidLocation("longitude outside [-180, 180]"));
        }
        Ok(())
    }
}

/// Input to the pillar calculation: a validated local civil moment, an
/// optional location, and the caller's calendar-system flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartInput {
    /// Local civil date/time. Time-zone resolution happens upstream.
    pub datetime: CivilDateTime,
    /// Optional geographic coordinates, unused by the index arithmetic.
    pub location: Option<GeoLocation>,
    /// Whether the date is expressed in a lunar calendar. Lunar input is
    /// rejected at computation time; conversion is out of scope.
    pub lunar: bool,
}

impl ChartInput {
    /// Input from an already-validated civil date/time.
    pub fn new(datetime: CivilDateTime) -> Self {
        Self {
            datetime,
            location: None,
            lunar: false,
        }
    }

    /// Validate raw calendar fields and build an input.
    pub fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, DateError> {
        Ok(Self::new(CivilDateTime::new(year, month, day, hour, minute)?))
    }

    pub fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_lunar(mut self, lunar: bool) -> Self {
        self.lunar = lunar;
        self
    }
}
