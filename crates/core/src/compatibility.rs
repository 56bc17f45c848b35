//! Purchase compatibility: does a candidate garment pair with what is owned?

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Garment;

/// Colour that pairs with everything.
pub const NEUTRAL_COLOR: &str = "black";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityVerdict {
    pub worthwhile: bool,
    pub match_count: usize,
}

/// Colour text comparison, ignoring case and surrounding whitespace.
pub fn same_color(left: &str, right: &str) -> bool {
    left.trim().eq_ignore_ascii_case(right.trim())
}

fn is_neutral(color: &str) -> bool {
    same_color(color, NEUTRAL_COLOR)
}

/// Two colours match when either is black or they differ.
///
/// Identical non-black colours do not match: buying a second red piece is
/// not a pairing. Apart from the black check, colour text is compared
/// exactly after trimming, so `red` and `Red` are different colours.
pub fn colors_match(left: &str, right: &str) -> bool {
    is_neutral(left) || is_neutral(right) || left.trim() != right.trim()
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CompatibilityChecker;

impl CompatibilityChecker {
    pub fn evaluate(&self, candidate: &Garment, garments: &[Garment]) -> CompatibilityVerdict {
        let match_count = garments
            .iter()
            .filter(|owned| colors_match(owned.color(), candidate.color()))
            .count();

        debug!(
            event_name = "compatibility.evaluated",
            candidate = %candidate.display_name(),
            wardrobe_size = garments.len(),
            match_count,
            "purchase compatibility evaluated"
        );

        CompatibilityVerdict { worthwhile: match_count > 0, match_count }
    }
}

pub fn is_acquisition_worthwhile(candidate: &Garment, garments: &[Garment]) -> CompatibilityVerdict {
    CompatibilityChecker.evaluate(candidate, garments)
}

#[cfg(test)]
mod tests {
    use super::{colors_match, is_acquisition_worthwhile, CompatibilityChecker, CompatibilityVerdict};
    use crate::domain::{Category, Garment, GarmentOptions, GarmentSpec};

    fn garment(color: &str) -> Garment {
        Garment::create(
            GarmentSpec::new(Category::Skirt, color, "S", "Poly", "Zara"),
            GarmentOptions::default(),
        )
        .expect("garment")
    }

    #[test]
    fn color_rule_matches_black_and_different_colors_only() {
        assert!(colors_match("Black", "Red"));
        assert!(colors_match("Red", "black"));
        assert!(colors_match("Black", "Black"));
        assert!(colors_match("Blue", "Red"));
        assert!(!colors_match("Red", "Red"));
        assert!(!colors_match("Red", " Red "));
    }

    #[test]
    fn black_check_ignores_case_but_duplicates_compare_exactly() {
        assert!(colors_match("BLACK", "black"));
        assert!(colors_match(" black", "Red"));
        assert!(colors_match("red", "Red"));
        assert!(!colors_match("red", "red"));
    }

    #[test]
    fn black_candidate_matches_whole_wardrobe() {
        let wardrobe = vec![garment("Red"), garment("Black"), garment("Blue")];

        let verdict = is_acquisition_worthwhile(&garment("Black"), &wardrobe);

        assert_eq!(verdict, CompatibilityVerdict { worthwhile: true, match_count: 3 });
    }

    #[test]
    fn duplicate_non_black_color_is_not_worthwhile() {
        let wardrobe = vec![garment("Red")];

        let verdict = CompatibilityChecker.evaluate(&garment("Red"), &wardrobe);

        assert_eq!(verdict, CompatibilityVerdict { worthwhile: false, match_count: 0 });
    }

    #[test]
    fn empty_wardrobe_is_never_worthwhile() {
        let verdict = is_acquisition_worthwhile(&garment("Neon Pink"), &[]);
        assert!(!verdict.worthwhile);
        assert_eq!(verdict.match_count, 0);
    }

    #[test]
    fn counts_only_matching_garments() {
        let wardrobe = vec![garment("Neon Pink"), garment("Blue"), garment("Black")];

        let verdict = is_acquisition_worthwhile(&garment("Neon Pink"), &wardrobe);

        assert_eq!(verdict, CompatibilityVerdict { worthwhile: true, match_count: 2 });
    }
}
