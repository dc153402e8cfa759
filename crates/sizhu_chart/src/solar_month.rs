//! Solar-term month table.
//!
//! The pillar calendar divides the year into 12 solar months, each opened
//! by a "jie" term: Lichun (early February) opens the Yin month, and the
//! cycle runs through Xiaohan (early January) opening the Chou month. The
//! table below fixes each term to its traditional civil day; the true
//! instants wander by at most one day around these, which is the accepted
//! approximation for an engine without solar-longitude ephemerides.

use sizhu_cycles::Branch;

/// Civil day on which the solar month opens, indexed by civil month 1-12.
///
/// Jan 6 (Xiaohan), Feb 4 (Lichun), Mar 6 (Jingzhe), Apr 5 (Qingming),
/// May 6 (Lixia), Jun 6 (Mangzhong), Jul 7 (Xiaoshu), Aug 8 (Liqiu),
/// Sep 8 (Bailu), Oct 8 (Hanlu), Nov 7 (Lidong), Dec 7 (Daxue).
const TERM_DAY: [u32; 12] = [6, 4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7];

/// Branch opened by the term falling in each civil month (same indexing).
const TERM_BRANCH: [Branch; 12] = [
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
    Branch::Zi,
];

/// A resolved solar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarMonth {
    /// Branch of the solar month.
    pub branch: Branch,
    /// Months elapsed since the Yin month (0 = Yin .. 11 = Chou), the
    /// offset the five-tigers stem rule consumes.
    pub index_from_yin: u8,
}

/// Resolve the solar month containing a civil (month, day).
///
/// Callers pass fields of a validated date, so `month` is 1-12.
pub fn solar_month(month: u32, day: u32) -> SolarMonth {
    let m = (month - 1) as usize;
    let branch = if day >= TERM_DAY[m] {
        TERM_BRANCH[m]
    } else {
        // Before this month's term: still in the previous month's term.
        TERM_BRANCH[(m + 11) % 12]
    };
    let index_from_yin = (branch.index() as i64 - 2).rem_euclid(12) as u8;
    SolarMonth {
        branch,
        index_from_yin,
    }
}

/// Solar ("sui") year a civil date belongs to: the pillar year rolls over
/// at Lichun, so January and early February belong to the previous year.
pub fn sui_year(year: i32, month: u32, day: u32) -> i32 {
    if month < 2 || (month == 2 && day < TERM_DAY[1]) {
        year - 1
    } else {
        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lichun_opens_yin() {
        let m = solar_month(2, 4);
        assert_eq!(m.branch, Branch::Yin);
        assert_eq!(m.index_from_yin, 0);
    }

    #[test]
    fn before_lichun_is_chou() {
        let m = solar_month(2, 3);
        assert_eq!(m.branch, Branch::Chou);
        assert_eq!(m.index_from_yin, 11);
    }

    #[test]
    fn early_january_is_zi() {
        // Jan 1-5 sits before Xiaohan, in the Zi month opened in December.
        let m = solar_month(1, 1);
        assert_eq!(m.branch, Branch::Zi);
        assert_eq!(m.index_from_yin, 10);
    }

    #[test]
    fn mid_january_is_chou() {
        let m = solar_month(1, 6);
        assert_eq!(m.branch, Branch::Chou);
    }

    #[test]
    fn december_after_daxue_is_zi() {
        assert_eq!(solar_month(12, 7).branch, Branch::Zi);
        assert_eq!(solar_month(12, 6).branch, Branch::Hai);
    }

    #[test]
    fn all_twelve_branches_reachable() {
        let mut seen = std::collections::HashSet::new();
        for month in 1..=12 {
            seen.insert(solar_month(month, 15).branch);
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn sui_year_boundary() {
        assert_eq!(sui_year(2024, 1, 1), 2023);
        assert_eq!(sui_year(2024, 2, 3), 2023);
        assert_eq!(sui_year(2024, 2, 4), 2024);
        assert_eq!(sui_year(2024, 12, 31), 2024);
    }
}
