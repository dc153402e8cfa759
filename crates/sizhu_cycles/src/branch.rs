//! The 12 earthly branches (dizhi).
//!
//! Each branch carries exactly one zodiac animal, one element, and one
//! polarity, and covers a fixed two-hour window of the civil day: Zi is
//! hours 0-1, Chou hours 2-3, and so on through Hai at hours 22-23.

use crate::animal::Animal;
use crate::element::{Element, Polarity};

/// The 12 earthly branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
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
];

impl Branch {
    /// Pinyin name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese character for the branch.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Zodiac animal of the branch. Total: every branch has exactly one.
    pub const fn animal(self) -> Animal {
        match self {
            Self::Zi => Animal::Rat,
            Self::Chou => Animal::Ox,
            Self::Yin => Animal::Tiger,
            Self::Mao => Animal::Rabbit,
            Self::Chen => Animal::Dragon,
            Self::Si => Animal::Snake,
            Self::Wu => Animal::Horse,
            Self::Wei => Animal::Goat,
            Self::Shen => Animal::Monkey,
            Self::You => Animal::Rooster,
            Self::Xu => Animal::Dog,
            Self::Hai => Animal::Pig,
        }
    }

    /// Element of the branch (standard branch-element assignment).
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
        }
    }

    /// Yin/yang polarity of the branch.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Branch at a (possibly negative) cycle offset, reduced modulo 12.
    pub fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Branch covering a civil hour: each branch spans a two-hour window,
    /// Zi = hours 0-1 through Hai = hours 22-23.
    pub fn from_hour(hour: u32) -> Self {
        ALL_BRANCHES[((hour % 24) / 2) as usize]
    }

    /// All 12 branches in cycle order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_branches_count() {
        assert_eq!(ALL_BRANCHES.len(), 12);
    }

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn names_and_glyphs_nonempty() {
        for b in ALL_BRANCHES {
            assert!(!b.name().is_empty());
            assert!(!b.glyph().is_empty());
        }
    }

    #[test]
    fn animal_totality() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.animal().index() as usize, i);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Branch::from_index(0), Branch::Zi);
        assert_eq!(Branch::from_index(12), Branch::Zi);
        assert_eq!(Branch::from_index(-1), Branch::Hai);
        assert_eq!(Branch::from_index(59), Branch::Hai);
    }

    #[test]
    fn hour_windows() {
        assert_eq!(Branch::from_hour(0), Branch::Zi);
        assert_eq!(Branch::from_hour(1), Branch::Zi);
        assert_eq!(Branch::from_hour(2), Branch::Chou);
        assert_eq!(Branch::from_hour(3), Branch::Chou);
        assert_eq!(Branch::from_hour(12), Branch::Wu);
        assert_eq!(Branch::from_hour(23), Branch::Hai);
    }

    #[test]
    fn branch_elements() {
        assert_eq!(Branch::Zi.element(), Element::Water);
        assert_eq!(Branch::Yin.element(), Element::Wood);
        assert_eq!(Branch::Wu.element(), Element::Fire);
        assert_eq!(Branch::Chou.element(), Element::Earth);
        assert_eq!(Branch::You.element(), Element::Metal);
    }
}
