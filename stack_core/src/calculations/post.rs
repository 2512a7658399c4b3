//! # Post Section Selection
//!
//! Selects the smallest adequate square HSS post for a stack level under
//! combined axial load and eccentric beam bending, LRFD basis.
//!
//! ## Assumptions
//!
//! - Pin-pin posts (K = 1.0 unless overridden in the criteria)
//! - Radius of gyration approximated as r_factor·√A for square HSS
//! - Beam edge flush with the post face, so the beam reaction acts at an
//!   eccentricity of B/2 − beam_width/2 from the post centerline
//!
//! ## Selection Rule
//!
//! The catalog is scanned in ascending-capacity order. A candidate is
//! skipped (not a terminal failure) when its slenderness exceeds 200, and
//! accepted when the combined interaction P/φPn + M/φMn is at most 0.9 -
//! a 10% margin below the unity limit. The two rules are kept as a single
//! filter-then-first-match pass so the rejection screen and the acceptance
//! bound stay separate.
//!
//! ## Example
//!
//! ```rust
//! use stack_core::calculations::post::{select_section, PostInput};
//! use stack_core::materials::DesignCriteria;
//!
//! let input = PostInput {
//!     label: "P-1".to_string(),
//!     length_in: 120.0,
//!     total_load_kips: 116.1,
//!     beam_load_kips: 56.0,
//!     beam_width_in: 3.0,
//!     criteria: DesignCriteria::default(),
//! };
//!
//! let selection = select_section(&input).unwrap().unwrap();
//! assert_eq!(selection.section.designation, "HSS6x6x3/16");
//! assert!(selection.interaction <= 0.9);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{self, HssSection};
use crate::errors::{DesignError, DesignResult};
use crate::materials::DesignCriteria;

/// Slenderness ratio above which a candidate is skipped (KL/r limit).
pub const SLENDERNESS_LIMIT: f64 = 200.0;

/// Acceptance bound on the combined interaction ratio, holding a 10%
/// margin below the theoretical unity limit.
pub const INTERACTION_LIMIT: f64 = 0.9;

/// Input parameters for post selection at one stack level.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-1",
///   "length_in": 120.0,
///   "total_load_kips": 116.1,
///   "beam_load_kips": 56.0,
///   "beam_width_in": 3.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostInput {
    /// User label for this post (e.g., "P-1", "Level 1 Post")
    pub label: String,

    /// Unbraced post length in inches
    pub length_in: f64,

    /// Total factored axial load at this level, including everything
    /// carried down from the levels above (kips)
    pub total_load_kips: f64,

    /// This level's factored beam reaction, the load applied at the beam
    /// eccentricity (kips)
    pub beam_load_kips: f64,

    /// LVL beam width in inches
    pub beam_width_in: f64,

    /// Material and factor set
    #[serde(default)]
    pub criteria: DesignCriteria,
}

impl PostInput {
    /// Validate input parameters.
    pub fn validate(&self) -> DesignResult<()> {
        if self.length_in <= 0.0 {
            return Err(DesignError::invalid_input(
                "length_in",
                self.length_in.to_string(),
                "Post length must be positive",
            ));
        }
        if self.total_load_kips < 0.0 {
            return Err(DesignError::invalid_input(
                "total_load_kips",
                self.total_load_kips.to_string(),
                "Load cannot be negative",
            ));
        }
        if self.beam_load_kips < 0.0 {
            return Err(DesignError::invalid_input(
                "beam_load_kips",
                self.beam_load_kips.to_string(),
                "Load cannot be negative",
            ));
        }
        if self.beam_width_in <= 0.0 {
            return Err(DesignError::invalid_input(
                "beam_width_in",
                self.beam_width_in.to_string(),
                "Beam width must be positive",
            ));
        }
        Ok(())
    }
}

/// A selected section together with the check values that qualified it.
///
/// ## JSON Example
///
/// ```json
/// {
///   "section": { "designation": "HSS6x6x3/16", "area_in2": 4.3,
///                "sx_in3": 10.3, "width_in": 6.0, "weight_plf": 12.5 },
///   "phi_pn_kips": 178.0,
///   "phi_mn_kipin": 426.4,
///   "slenderness": 144.7,
///   "eccentricity_in": 1.5,
///   "moment_kipin": 84.0,
///   "interaction": 0.85
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSelection {
    /// The chosen catalog section
    pub section: HssSection,

    /// Design axial capacity φPn = φc·Fy·A (kips)
    pub phi_pn_kips: f64,

    /// Design moment capacity φMn = φc·Fy·S (kip-in)
    pub phi_mn_kipin: f64,

    /// Slenderness ratio KL/r with r ≈ r_factor·√A
    pub slenderness: f64,

    /// Beam reaction eccentricity from the post centerline (in)
    pub eccentricity_in: f64,

    /// Moment demand Mu = beam load · eccentricity (kip-in)
    pub moment_kipin: f64,

    /// Combined interaction ratio P/φPn + M/φMn
    pub interaction: f64,
}

/// Select the smallest adequate HSS section for the given level.
///
/// Returns `Ok(None)` when no catalog candidate satisfies both the
/// slenderness screen and the interaction bound - a legitimate terminal
/// design outcome, not an error. Callers deciding a stack level record it
/// as a per-level failure.
///
/// # Arguments
///
/// * `input` - Level loads, geometry, and criteria
///
/// # Returns
///
/// * `Ok(Some(PostSelection))` - First adequate candidate with its checks
/// * `Ok(None)` - Catalog exhausted without an adequate candidate
/// * `Err(DesignError)` - If inputs are invalid
pub fn select_section(input: &PostInput) -> DesignResult<Option<PostSelection>> {
    input.validate()?;

    let picked = catalog::candidates()
        .iter()
        .map(|section| check_candidate(input, section))
        .find(|check| {
            check.slenderness <= SLENDERNESS_LIMIT && check.interaction <= INTERACTION_LIMIT
        });

    Ok(picked)
}

/// Run the slenderness and interaction checks for one candidate.
fn check_candidate(input: &PostInput, section: &HssSection) -> PostSelection {
    let criteria = &input.criteria;
    let fy_ksi = criteria.hss_grade.fy_ksi();

    let phi_pn_kips = criteria.phi_c * fy_ksi * section.area_in2;
    let slenderness =
        criteria.k_factor * input.length_in / (criteria.r_factor * section.area_in2.sqrt());

    // Beam edge at the post face
    let eccentricity_in = section.width_in / 2.0 - input.beam_width_in / 2.0;
    let moment_kipin = input.beam_load_kips * eccentricity_in;
    let phi_mn_kipin = criteria.phi_c * fy_ksi * section.sx_in3;

    let interaction = input.total_load_kips / phi_pn_kips + moment_kipin / phi_mn_kipin;

    PostSelection {
        section: section.clone(),
        phi_pn_kips,
        phi_mn_kipin,
        slenderness,
        eccentricity_in,
        moment_kipin,
        interaction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_post() -> PostInput {
        PostInput {
            label: "Test Post".to_string(),
            length_in: 120.0,
            total_load_kips: 116.1,
            beam_load_kips: 56.0,
            beam_width_in: 3.0,
            criteria: DesignCriteria::default(),
        }
    }

    #[test]
    fn test_demo_level_selection() {
        let selection = select_section(&test_post()).unwrap().unwrap();

        assert_eq!(selection.section.designation, "HSS6x6x3/16");
        // phi_Pn = 0.9 * 46 * 4.30 = 178.02 kips
        assert!((selection.phi_pn_kips - 178.02).abs() < 0.01);
        // KL/r = 120 / (0.4 * sqrt(4.30)) = 144.7
        assert!((selection.slenderness - 144.7).abs() < 0.1);
        // e = 6/2 - 3/2 = 1.5 in, Mu = 84 kip-in
        assert!((selection.eccentricity_in - 1.5).abs() < 1e-9);
        assert!((selection.moment_kipin - 84.0).abs() < 1e-9);
        assert!((selection.interaction - 0.8492).abs() < 0.001);
    }

    #[test]
    fn test_selection_keeps_safety_margin() {
        let selection = select_section(&test_post()).unwrap().unwrap();
        assert!(selection.interaction <= INTERACTION_LIMIT);
    }

    #[test]
    fn test_first_match_is_smallest_adequate() {
        // Every candidate ahead of the returned one must fail a bound
        let input = PostInput {
            total_load_kips: 130.0,
            ..test_post()
        };
        let selection = select_section(&input).unwrap().unwrap();
        assert_eq!(selection.section.designation, "HSS8x8x3/16");

        for section in catalog::candidates() {
            if section.designation == selection.section.designation {
                break;
            }
            let check = check_candidate(&input, section);
            assert!(
                check.slenderness > SLENDERNESS_LIMIT || check.interaction > INTERACTION_LIMIT,
                "{} should not have been adequate",
                section.designation
            );
        }
    }

    #[test]
    fn test_slender_candidate_skipped_not_fatal() {
        // At L = 170 in the smallest section fails KL/r > 200; the scan
        // continues to the next size instead of giving up
        let input = PostInput {
            length_in: 170.0,
            total_load_kips: 20.0,
            beam_load_kips: 10.0,
            ..test_post()
        };
        let selection = select_section(&input).unwrap().unwrap();
        assert_eq!(selection.section.designation, "HSS8x8x3/16");

        let skipped = check_candidate(&input, &catalog::candidates()[0]);
        assert!(skipped.slenderness > SLENDERNESS_LIMIT);
    }

    #[test]
    fn test_no_adequate_section() {
        let input = PostInput {
            total_load_kips: 10000.0,
            ..test_post()
        };
        assert!(select_section(&input).unwrap().is_none());
    }

    #[test]
    fn test_invalid_length() {
        let mut input = test_post();
        input.length_in = -5.0;
        assert!(select_section(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_post();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: PostInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.total_load_kips, roundtrip.total_load_kips);

        let selection = select_section(&input).unwrap().unwrap();
        let json = serde_json::to_string_pretty(&selection).unwrap();
        let roundtrip: PostSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(selection, roundtrip);
    }
}
