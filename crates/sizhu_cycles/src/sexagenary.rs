//! The combined 60-position sexagenary cycle.
//!
//! Stems and branches advance together, so a position pairs stem `i mod 10`
//! with branch `i mod 12`. Only same-polarity pairs occur: 60 of the 120
//! combinatorial pairings are reachable.

use crate::branch::Branch;
use crate::stem::Stem;

/// Length of the combined cycle (lcm of 10 and 12).
pub const SEXAGENARY_CYCLE: i64 = 60;

/// Stem/branch pair at a (possibly negative) sexagenary offset.
pub fn sexagenary_from_index(index: i64) -> (Stem, Branch) {
    let i = index.rem_euclid(SEXAGENARY_CYCLE);
    (Stem::from_index(i), Branch::from_index(i))
}

/// Position (0..=59) of a stem/branch pair in the sexagenary cycle, or
/// `None` for the 60 mixed-polarity pairs that never occur.
///
/// CRT over the 10- and 12-cycles: `i = 6*stem - 5*branch (mod 60)`.
pub fn sexagenary_index(stem: Stem, branch: Branch) -> Option<u8> {
    if stem.index() % 2 != branch.index() % 2 {
        return None;
    }
    let i = (6 * stem.index() as i64 - 5 * branch.index() as i64).rem_euclid(SEXAGENARY_CYCLE);
    Some(i as u8)
}
