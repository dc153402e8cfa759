//! The 10 heavenly stems (tiangan).
//!
//! The stem cycle pairs with the branch cycle to form the 60-position
//! sexagenary cycle. Each stem carries exactly one element and one
//! polarity; consecutive stems share an element (yang form first).

use crate::element::{Element, Polarity};

/// The 10 heavenly stems in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Pinyin name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Chinese character for the stem.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Element of the stem. Total: every stem has exactly one element.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Yin/yang polarity of the stem.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Stem at a (possibly negative) cycle offset, reduced modulo 10.
    pub fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// All 10 stems in cycle order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), 10);
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn names_and_glyphs_nonempty() {
        for s in ALL_STEMS {
            assert!(!s.name().is_empty());
            assert!(!s.glyph().is_empty());
        }
    }

    #[test]
    fn element_totality() {
        // Each element owns exactly two stems, yang form first.
        for s in ALL_STEMS {
            let _ = s.element(); // total by construction
        }
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Geng.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn polarity_pairs() {
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Yi.polarity(), Polarity::Yin);
        assert_eq!(Stem::Ren.polarity(), Polarity::Yang);
        assert_eq!(Stem::Gui.polarity(), Polarity::Yin);
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Stem::from_index(0), Stem::Jia);
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Stem::from_index(54), Stem::Wu);
        assert_eq!(Stem::from_index(-1), Stem::Gui);
        assert_eq!(Stem::from_index(-11), Stem::Gui);
    }
}
