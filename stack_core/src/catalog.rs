//! # HSS Section Catalog
//!
//! Candidate square HSS column sections with properties per the AISC Steel
//! Construction Manual. The catalog is the fixed ordered list the selector
//! scans; it is data, not logic - extending it never touches the
//! acceptance rules in [`crate::calculations::post`].
//!
//! ## Ordering Invariant
//!
//! Candidates are ordered by ascending axial capacity (φPn grows
//! monotonically down the list). Selection returns the *first* adequate
//! candidate, so catalog order is what makes the result the smallest
//! adequate section.
//!
//! ## Example
//!
//! ```rust
//! use stack_core::catalog::{candidates, lookup};
//!
//! let first = &candidates()[0];
//! assert_eq!(first.designation, "HSS6x6x3/16");
//!
//! let section = lookup("HSS8x8x1/4").unwrap();
//! assert_eq!(section.width_in, 8.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Square HSS section with the properties the design checks consume.
///
/// All dimensional values are in US customary units.
///
/// ## JSON Example
///
/// ```json
/// {
///   "designation": "HSS8x8x1/4",
///   "area_in2": 7.56,
///   "sx_in3": 22.4,
///   "width_in": 8.0,
///   "weight_plf": 22.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HssSection {
    /// AISC Manual label (e.g., "HSS8x8x1/4")
    pub designation: String,

    /// Cross-sectional area (in²)
    pub area_in2: f64,

    /// Elastic section modulus about either axis (in³)
    pub sx_in3: f64,

    /// Outside width B (in)
    pub width_in: f64,

    /// Nominal weight per linear foot (lb/ft) - carried for schedules and
    /// takeoffs, unused by the design checks
    pub weight_plf: f64,
}

impl HssSection {
    fn new(designation: &str, area_in2: f64, sx_in3: f64, width_in: f64, weight_plf: f64) -> Self {
        HssSection {
            designation: designation.to_string(),
            area_in2,
            sx_in3,
            width_in,
            weight_plf,
        }
    }
}

impl std::fmt::Display for HssSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation)
    }
}

/// Candidate catalog, ascending capacity. ASTM A500 Gr. B square sections.
static CANDIDATES: Lazy<Vec<HssSection>> = Lazy::new(|| {
    vec![
        HssSection::new("HSS6x6x3/16", 4.30, 10.3, 6.0, 12.5),
        HssSection::new("HSS8x8x3/16", 5.75, 17.4, 8.0, 16.8),
        HssSection::new("HSS8x8x1/4", 7.56, 22.4, 8.0, 22.0),
        HssSection::new("HSS10x10x1/4", 9.52, 35.2, 10.0, 27.5),
        HssSection::new("HSS12x12x1/4", 11.5, 50.8, 12.0, 33.0),
    ]
});

/// All candidate sections in selection order (smallest capacity first).
pub fn candidates() -> &'static [HssSection] {
    &CANDIDATES
}

/// Look up a section by its AISC designation.
pub fn lookup(designation: &str) -> Option<&'static HssSection> {
    CANDIDATES.iter().find(|s| s.designation == designation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_order() {
        let sections = candidates();
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[0].designation, "HSS6x6x3/16");
        assert_eq!(sections[4].designation, "HSS12x12x1/4");

        // Ascending capacity: area strictly increases down the list
        for pair in sections.windows(2) {
            assert!(pair[0].area_in2 < pair[1].area_in2);
        }
    }

    #[test]
    fn test_lookup() {
        let section = lookup("HSS10x10x1/4").unwrap();
        assert_eq!(section.area_in2, 9.52);
        assert_eq!(section.sx_in3, 35.2);
        assert!(lookup("HSS4x4x1/8").is_none());
    }

    #[test]
    fn test_section_serialization() {
        let section = lookup("HSS8x8x1/4").unwrap();
        let json = serde_json::to_string(section).unwrap();
        assert!(json.contains("\"designation\":\"HSS8x8x1/4\""));
        let roundtrip: HssSection = serde_json::from_str(&json).unwrap();
        assert_eq!(*section, roundtrip);
    }
}
