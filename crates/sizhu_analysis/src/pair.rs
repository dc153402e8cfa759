//! Pair compatibility from two dominant elements.

use sizhu_cycles::Element;

use crate::profile::profile;

/// Compatibility between two dominant elements, in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairCompatibility {
    /// First element lists the second as compatible.
    pub forward: bool,
    /// Second element lists the first as compatible.
    pub reverse: bool,
}

impl PairCompatibility {
    /// Both directions agree.
    pub fn mutual(&self) -> bool {
        self.forward && self.reverse
    }
}

/// Compatibility of two dominant elements via the static profile tables.
pub fn pair_compatibility(a: Element, b: Element) -> PairCompatibility {
    PairCompatibility {
        forward: profile(a).compatible_elements.contains(&b),
        reverse: profile(b).compatible_elements.contains(&a),
    }
}
