//! Four-pillar computation.
//!
//! One canonical formula set, anchored on the standard almanac epochs:
//! - year: sexagenary index `sui_year - 4` (1984 = Jia-Zi)
//! - month: branch from the solar-term table, stem by the five-tigers rule
//! - day: sexagenary index `JDN + 49` (1949-10-01 = Jia-Zi)
//! - hour: branch from the two-hour window, stem by the five-rats rule
//!
//! Every reduction goes through `rem_euclid`, so pre-epoch dates and
//! negative years land on in-range cycle positions.

use sizhu_cycles::{Branch, Stem, sexagenary_from_index};
use sizhu_time::julian_day_number;

use crate::error::ChartError;
use crate::input::ChartInput;
use crate::solar_month::{SolarMonth, solar_month, sui_year};

/// Sexagenary offset of year 4 CE, the Jia-Zi origin of the year cycle.
const YEAR_EPOCH_OFFSET: i64 = 4;

/// Sexagenary offset aligning the Julian day number to the day cycle
/// (JDN 2433191 = 1949-10-01 = Jia-Zi).
const DAY_EPOCH_OFFSET: i64 = 49;

/// A (stem, branch) pair naming one unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pillar at a raw sexagenary index.
    pub fn from_sexagenary(index: i64) -> Self {
        let (stem, branch) = sexagenary_from_index(index);
        Self { stem, branch }
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{} ({}{})",
            self.stem.name(),
            self.branch.name(),
            self.stem.glyph(),
            self.branch.glyph()
        )
    }
}

/// The four pillars of a chart: year, month, day, hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// The four pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// The four stems in pillar order.
    pub fn stems(&self) -> [Stem; 4] {
        [
            self.year.stem,
            self.month.stem,
            self.day.stem,
            self.hour.stem,
        ]
    }

    /// The four branches in pillar order.
    pub fn branches(&self) -> [Branch; 4] {
        [
            self.year.branch,
            self.month.branch,
            self.day.branch,
            self.hour.branch,
        ]
    }
}

/// Year pillar for a solar (sui) year.
pub fn year_pillar(sui_year: i32) -> Pillar {
    Pillar::from_sexagenary(sui_year as i64 - YEAR_EPOCH_OFFSET)
}

/// Month pillar from the year stem and a resolved solar month.
///
/// Five-tigers rule: the Yin month of a Jia or Ji year opens with Bing,
/// i.e. the Yin-month stem is `year_stem * 2 + 2`; later months advance
/// the stem by one each.
pub fn month_pillar(year_stem: Stem, solar: SolarMonth) -> Pillar {
    let stem_idx = year_stem.index() as i64 * 2 + 2 + solar.index_from_yin as i64;
    Pillar {
        stem: Stem::from_index(stem_idx),
        branch: solar.branch,
    }
}

/// Day pillar for a Julian day number.
pub fn day_pillar(jdn: i64) -> Pillar {
    Pillar::from_sexagenary(jdn + DAY_EPOCH_OFFSET)
}

/// Hour pillar from the day stem and a civil hour (0-23).
///
/// Five-rats rule: the Zi hour of a Jia or Ji day opens with Jia, i.e.
/// the Zi-hour stem is `day_stem * 2`; later branches advance the stem.
/// The branch is the plain two-hour window (`hour / 2`), so hour 23 stays
/// on the current day's Hai rather than rolling into the next day's Zi.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let branch = Branch::from_hour(hour);
    let stem_idx = day_stem.index() as i64 * 2 + branch.index() as i64;
    Pillar {
        stem: Stem::from_index(stem_idx),
        branch,
    }
}

/// Compute the four pillars for a chart input.
///
/// Pure and total over valid input: the only failures are the explicit
/// lunar-calendar rejection and an out-of-range location. Minutes are
/// accepted but do not affect the result.
pub fn compute_pillars(input: &ChartInput) -> Result<FourPillars, ChartError> {
    if input.lunar {
        return Err(ChartError::LunarCalendar);
    }
    if let Some(location) = input.location {
        location.validate()?;
    }

    let dt = input.datetime;
    let year = year_pillar(sui_year(dt.year(), dt.month(), dt.day()));
    let month = month_pillar(year.stem, solar_month(dt.month(), dt.day()));
    let day = day_pillar(julian_day_number(dt.year(), dt.month(), dt.day()));
    let hour = hour_pillar(day.stem, dt.hour());

    Ok(FourPillars {
        year,
        month,
        day,
        hour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GeoLocation;
    use sizhu_cycles::{ALL_STEMS, sexagenary_index};

    fn input(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> ChartInput {
        ChartInput::from_fields(year, month, day, hour, minute).unwrap()
    }

    #[test]
    fn year_pillar_1984_is_jia_zi() {
        let p = year_pillar(1984);
        assert_eq!((p.stem, p.branch), (Stem::Jia, Branch::Zi));
    }

    #[test]
    fn year_pillar_2024_is_jia_chen() {
        let p = year_pillar(2024);
        assert_eq!((p.stem, p.branch), (Stem::Jia, Branch::Chen));
    }

    #[test]
    fn year_pillar_repeats_every_60() {
        for y in [-120, 4, 1900, 1984, 2024] {
            assert_eq!(year_pillar(y), year_pillar(y + 60));
        }
    }

    #[test]
    fn year_pillar_pre_epoch() {
        // Year 0 sits 4 before the Jia-Zi origin.
        let p = year_pillar(0);
        assert_eq!(sexagenary_index(p.stem, p.branch), Some(56));
    }

    #[test]
    fn day_pillar_anchor_1949() {
        let p = day_pillar(2_433_191);
        assert_eq!((p.stem, p.branch), (Stem::Jia, Branch::Zi));
    }

    #[test]
    fn day_pillar_anchor_2000() {
        // 2000-01-01 = JDN 2451545 = Wu-Wu.
        let p = day_pillar(2_451_545);
        assert_eq!((p.stem, p.branch), (Stem::Wu, Branch::Wu));
    }

    #[test]
    fn day_pillar_repeats_every_60() {
        assert_eq!(day_pillar(2_451_545), day_pillar(2_451_545 + 60));
        assert_eq!(day_pillar(2_451_545), day_pillar(2_451_545 - 60));
    }

    #[test]
    fn five_tigers_openings() {
        // Canonical Yin-month stems: Jia/Ji → Bing, Yi/Geng → Wu,
        // Bing/Xin → Geng, Ding/Ren → Ren, Wu/Gui → Jia.
        let yin = solar_month(2, 15);
        let expected = [
            Stem::Bing,
            Stem::Wu,
            Stem::Geng,
            Stem::Ren,
            Stem::Jia,
            Stem::Bing,
            Stem::Wu,
            Stem::Geng,
            Stem::Ren,
            Stem::Jia,
        ];
        for (year_stem, want) in ALL_STEMS.into_iter().zip(expected) {
            assert_eq!(month_pillar(year_stem, yin).stem, want, "{year_stem:?}");
        }
    }

    #[test]
    fn five_rats_openings() {
        // Canonical Zi-hour stems: Jia/Ji → Jia, Yi/Geng → Bing,
        // Bing/Xin → Wu, Ding/Ren → Geng, Wu/Gui → Ren.
        let expected = [
            Stem::Jia,
            Stem::Bing,
            Stem::Wu,
            Stem::Geng,
            Stem::Ren,
            Stem::Jia,
            Stem::Bing,
            Stem::Wu,
            Stem::Geng,
            Stem::Ren,
        ];
        for (day_stem, want) in ALL_STEMS.into_iter().zip(expected) {
            assert_eq!(hour_pillar(day_stem, 0).stem, want, "{day_stem:?}");
        }
    }

    #[test]
    fn hour_pillar_advances_with_branch() {
        // Geng day, 23:00 → Ding-Hai.
        let p = hour_pillar(Stem::Geng, 23);
        assert_eq!((p.stem, p.branch), (Stem::Ding, Branch::Hai));
    }

    #[test]
    fn new_year_2024_chart() {
        // 2024-01-01T00:00 precedes Lichun: year Gui-Mao (2023), month
        // Jia-Zi, day Jia-Zi, hour Jia-Zi.
        let chart = compute_pillars(&input(2024, 1, 1, 0, 0)).unwrap();
        assert_eq!(
            (chart.year.stem, chart.year.branch),
            (Stem::Gui, Branch::Mao)
        );
        assert_eq!(
            (chart.month.stem, chart.month.branch),
            (Stem::Jia, Branch::Zi)
        );
        assert_eq!((chart.day.stem, chart.day.branch), (Stem::Jia, Branch::Zi));
        assert_eq!(
            (chart.hour.stem, chart.hour.branch),
            (Stem::Jia, Branch::Zi)
        );
    }

    #[test]
    fn deterministic() {
        let i = input(1992, 8, 17, 14, 30);
        assert_eq!(compute_pillars(&i).unwrap(), compute_pillars(&i).unwrap());
    }

    #[test]
    fn minutes_do_not_matter() {
        let a = compute_pillars(&input(1992, 8, 17, 14, 0)).unwrap();
        let b = compute_pillars(&input(1992, 8, 17, 14, 59)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_lunar_input() {
        let i = input(2024, 1, 1, 0, 0).with_lunar(true);
        assert_eq!(compute_pillars(&i), Err(ChartError::LunarCalendar));
    }

    #[test]
    fn rejects_bad_location() {
        let i = input(2024, 1, 1, 0, 0).with_location(GeoLocation::new(91.0, 0.0));
        assert!(matches!(
            compute_pillars(&i),
            Err(ChartError::InvalidLocation(_))
        ));
    }

    #[test]
    fn location_does_not_change_result() {
        let plain = compute_pillars(&input(2024, 6, 1, 10, 0)).unwrap();
        let located = compute_pillars(
            &input(2024, 6, 1, 10, 0).with_location(GeoLocation::new(39.9, 116.4)),
        )
        .unwrap();
        assert_eq!(plain, located);
    }

    #[test]
    fn year_zero_in_range() {
        let chart = compute_pillars(&input(0, 6, 1, 6, 0)).unwrap();
        for p in chart.pillars() {
            assert!(p.stem.index() < 10);
            assert!(p.branch.index() < 12);
        }
    }

    #[test]
    fn pillar_display() {
        let p = Pillar {
            stem: Stem::Jia,
            branch: Branch::Zi,
        };
        assert_eq!(p.to_string(), "Jia-Zi (甲子)");
    }
}
