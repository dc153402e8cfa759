//! Static descriptive profiles keyed by dominant element.
//!
//! Tables are immutable data, not code branches: one record per element,
//! total over the element cycle, plus a generic balanced fallback for
//! callers without a computed dominant.

use sizhu_cycles::Element;

/// Descriptive text block for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementProfile {
    pub personality: &'static [&'static str],
    /// Elements a dominant of this kind harmonizes with.
    pub compatible_elements: &'static [Element],
    pub lucky_colors: &'static [&'static str],
    pub lucky_numbers: &'static [u8],
    pub lucky_directions: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub opportunities: &'static [&'static str],
}

/// Profiles in canonical element order (Wood, Fire, Earth, Metal, Water).
static PROFILES: [ElementProfile; 5] = [
    ElementProfile {
        personality: &[
            "Creative and innovative",
            "Strong leadership qualities",
            "Growth-oriented mindset",
            "Adaptable and flexible",
        ],
        compatible_elements: &[Element::Fire, Element::Earth],
        lucky_colors: &["Green", "Blue"],
        lucky_numbers: &[3, 4],
        lucky_directions: &["East", "Southeast"],
        challenges: &[
            "May be too rigid in thinking",
            "Need to balance assertiveness",
            "Should develop patience",
        ],
        opportunities: &[
            "Great potential for growth",
            "Natural leadership abilities",
            "Creative opportunities",
        ],
    },
    ElementProfile {
        personality: &[
            "Passionate and energetic",
            "Charismatic and inspiring",
            "Dynamic and enthusiastic",
            "Natural leader",
        ],
        compatible_elements: &[Element::Earth, Element::Metal],
        lucky_colors: &["Red", "Orange", "Purple"],
        lucky_numbers: &[9, 1],
        lucky_directions: &["South"],
        challenges: &[
            "May be too impulsive",
            "Need to control temper",
            "Should develop patience",
        ],
        opportunities: &[
            "Excellent for new ventures",
            "Strong influence on others",
            "Dynamic career opportunities",
        ],
    },
    ElementProfile {
        personality: &[
            "Stable and reliable",
            "Practical and grounded",
            "Patient and nurturing",
            "Good at building relationships",
        ],
        compatible_elements: &[Element::Metal, Element::Water],
        lucky_colors: &["Yellow", "Brown"],
        lucky_numbers: &[2, 5, 8],
        lucky_directions: &["Center", "Northeast", "Southwest"],
        challenges: &[
            "May be too conservative",
            "Need to embrace change",
            "Should take more risks",
        ],
        opportunities: &[
            "Stable foundation for success",
            "Good for long-term projects",
            "Strong relationship building",
        ],
    },
    ElementProfile {
        personality: &[
            "Disciplined and organized",
            "Strong sense of justice",
            "Determined and focused",
            "Value quality and precision",
        ],
        compatible_elements: &[Element::Water, Element::Wood],
        lucky_colors: &["White", "Gold"],
        lucky_numbers: &[6, 7],
        lucky_directions: &["West", "Northwest"],
        challenges: &[
            "May be too critical",
            "Need to be more flexible",
            "Should show more compassion",
        ],
        opportunities: &[
            "Excellent for organization",
            "Strong analytical abilities",
            "Good for detailed work",
        ],
    },
    ElementProfile {
        personality: &[
            "Intuitive and wise",
            "Adaptable and flexible",
            "Good at communication",
            "Deep understanding of others",
        ],
        compatible_elements: &[Element::Wood, Element::Fire],
        lucky_colors: &["Black", "Blue"],
        lucky_numbers: &[1, 6],
        lucky_directions: &["North"],
        challenges: &[
            "May be too emotional",
            "Need to be more decisive",
            "Should set clearer boundaries",
        ],
        opportunities: &[
            "Great for communication",
            "Strong intuitive abilities",
            "Good for creative work",
        ],
    },
];

/// Generic fallback for callers without a computed dominant element.
pub static BALANCED_PROFILE: ElementProfile = ElementProfile {
    personality: &["Balanced personality traits"],
    compatible_elements: &sizhu_cycles::ALL_ELEMENTS,
    lucky_colors: &["All colors"],
    lucky_numbers: &[1, 2, 3, 4, 5, 6, 7, 8, 9],
    lucky_directions: &["All directions"],
    challenges: &["Balance your elements"],
    opportunities: &["Focus on your strengths"],
};

/// Profile for an element. Total over the element cycle.
pub fn profile(element: Element) -> &'static ElementProfile {
    &PROFILES[element.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_cycles::ALL_ELEMENTS;

    #[test]
    fn every_element_has_a_profile() {
        for e in ALL_ELEMENTS {
            let p = profile(e);
            assert!(!p.personality.is_empty(), "{e:?}");
            assert!(!p.compatible_elements.is_empty(), "{e:?}");
            assert!(!p.lucky_colors.is_empty(), "{e:?}");
            assert!(!p.lucky_numbers.is_empty(), "{e:?}");
            assert!(!p.lucky_directions.is_empty(), "{e:?}");
            assert!(!p.challenges.is_empty(), "{e:?}");
            assert!(!p.opportunities.is_empty(), "{e:?}");
        }
    }

    #[test]
    fn compatibility_follows_generating_and_overcoming_order() {
        // Each element lists the one it generates first, then the one it
        // overcomes.
        assert_eq!(
            profile(Element::Wood).compatible_elements,
            &[Element::Fire, Element::Earth]
        );
        assert_eq!(
            profile(Element::Water).compatible_elements,
            &[Element::Wood, Element::Fire]
        );
    }

    #[test]
    fn no_element_lists_itself() {
        for e in ALL_ELEMENTS {
            assert!(!profile(e).compatible_elements.contains(&e), "{e:?}");
        }
    }

    #[test]
    fn balanced_fallback_nonempty() {
        assert!(!BALANCED_PROFILE.personality.is_empty());
        assert_eq!(BALANCED_PROFILE.compatible_elements.len(), 5);
        assert_eq!(BALANCED_PROFILE.lucky_numbers.len(), 9);
    }
}
