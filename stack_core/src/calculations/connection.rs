//! # Cap Plate, Bearing Plate, and Weld Sizing
//!
//! Sizes the steel connection hardware that transfers an LVL beam reaction
//! and the stacked load from above into a square HSS post: the cap plate
//! the beam bears on, the pair of bearing plates carrying the upper post
//! load past the beam, and the fillet welds tying the plates to the post.
//!
//! ## Load Basis
//!
//! Beam bearing on LVL is a serviceability check, so the bearing length
//! works from the service-level reaction (factored load divided by the
//! LRFD load factor). Plate bending and weld checks use factored loads
//! directly.
//!
//! ## Assumptions
//!
//! - Two identical bearing plates share the upper post load equally
//! - Cap plate bending follows a cantilever yield-line model with the arm
//!   taken as the longest of the 95% post-width setback, the 80% beam-width
//!   setback, and the beam-eccentricity overhang
//! - E70 electrodes, fillet welds on all four post faces
//!
//! ## Example
//!
//! ```rust
//! use stack_core::calculations::connection::{size_connection, ConnectionInput};
//! use stack_core::materials::DesignCriteria;
//!
//! let input = ConnectionInput {
//!     beam_load_kips: 56.0,
//!     upper_load_kips: 60.1,
//!     hss_width_in: 6.0,
//!     beam_width_in: 3.0,
//!     beam_depth_in: 12.0,
//!     beam_offset_in: 0.0,
//!     criteria: DesignCriteria::default(),
//! };
//!
//! let design = size_connection(&input).unwrap();
//! assert_eq!(design.cap_plate.to_string(), "8.000 x 23.500 x 0.625 in");
//! assert!(design.bearing_stress_psi <= 500.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::materials::DesignCriteria;
use crate::rounding::{ceil_to_increment, round_up_increment};

/// Number of bearing plates sharing the upper post load.
pub const BEARING_PLATE_COUNT: usize = 2;

/// Practical minimum cap plate thickness (in).
pub const MIN_CAP_THICKNESS_IN: f64 = 0.375;

/// Minimum fillet weld size (in).
pub const MIN_WELD_SIZE_IN: f64 = 3.0 / 16.0;

// Bearing length rounds up to quarter inches, plate thicknesses to
// eighths, weld sizes to sixteenths
const QUARTER_IN: f64 = 0.25;
const EIGHTH_IN: f64 = 0.125;
const SIXTEENTH_IN: f64 = 0.0625;

// Plate bearing capacity φRn = 0.75·1.8·Fy·Apb (AISC J7)
const BEARING_PHI: f64 = 0.75;
const BEARING_COEFF: f64 = 1.8;

// Fillet weld capacity per inch: φ·0.707·size·0.6·FEXX, E70 electrodes
const WELD_PHI: f64 = 0.75;
const WELD_THROAT_FACTOR: f64 = 0.707;
const WELD_STRENGTH_COEFF: f64 = 0.6;
const E70_FEXX_KSI: f64 = 70.0;

/// Input parameters for connection sizing at one stack level.
///
/// ## JSON Example
///
/// ```json
/// {
///   "beam_load_kips": 56.0,
///   "upper_load_kips": 60.1,
///   "hss_width_in": 6.0,
///   "beam_width_in": 3.0,
///   "beam_depth_in": 12.0,
///   "beam_offset_in": 0.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionInput {
    /// This level's factored beam reaction (kips)
    pub beam_load_kips: f64,

    /// Factored load delivered by the post above, excluding this level's
    /// beam (kips)
    pub upper_load_kips: f64,

    /// Outside width of the supporting HSS post (in)
    pub hss_width_in: f64,

    /// LVL beam width (in)
    pub beam_width_in: f64,

    /// LVL beam depth (in)
    pub beam_depth_in: f64,

    /// Distance from the post face to the near beam edge (in).
    ///
    /// Only the cap plate cantilever check sees this offset; post selection
    /// always assumes a flush beam edge. Confirm intended beam placement
    /// before relying on nonzero offsets.
    #[serde(default)]
    pub beam_offset_in: f64,

    /// Material and factor set
    #[serde(default)]
    pub criteria: DesignCriteria,
}

impl ConnectionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> DesignResult<()> {
        if self.beam_load_kips < 0.0 {
            return Err(DesignError::invalid_input(
                "beam_load_kips",
                self.beam_load_kips.to_string(),
                "Load cannot be negative",
            ));
        }
        if self.upper_load_kips < 0.0 {
            return Err(DesignError::invalid_input(
                "upper_load_kips",
                self.upper_load_kips.to_string(),
                "Load cannot be negative",
            ));
        }
        if self.hss_width_in <= 0.0 {
            return Err(DesignError::invalid_input(
                "hss_width_in",
                self.hss_width_in.to_string(),
                "Post width must be positive",
            ));
        }
        if self.beam_width_in <= 0.0 {
            return Err(DesignError::invalid_input(
                "beam_width_in",
                self.beam_width_in.to_string(),
                "Beam width must be positive",
            ));
        }
        if self.beam_depth_in <= 0.0 {
            return Err(DesignError::invalid_input(
                "beam_depth_in",
                self.beam_depth_in.to_string(),
                "Beam depth must be positive",
            ));
        }
        if self.beam_offset_in < 0.0 {
            return Err(DesignError::invalid_input(
                "beam_offset_in",
                self.beam_offset_in.to_string(),
                "Offset cannot be negative",
            ));
        }
        if self.criteria.load_factor <= 0.0 {
            return Err(DesignError::invalid_input(
                "criteria.load_factor",
                self.criteria.load_factor.to_string(),
                "Load factor must be positive",
            ));
        }
        if self.criteria.lvl_bearing_psi <= 0.0 {
            return Err(DesignError::invalid_input(
                "criteria.lvl_bearing_psi",
                self.criteria.lvl_bearing_psi.to_string(),
                "Allowable bearing stress must be positive",
            ));
        }
        Ok(())
    }
}

/// Cap plate dimensions: width across the beam, length along it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapPlate {
    /// Plate width B (in), clearing post and beam by 1 in each side
    pub width_in: f64,

    /// Plate length N (in), the LVL bearing length
    pub length_in: f64,

    /// Plate thickness (in), eighth-inch increments
    pub thickness_in: f64,
}

impl std::fmt::Display for CapPlate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.3} x {:.3} x {:.3} in",
            self.width_in, self.length_in, self.thickness_in
        )
    }
}

/// One of the two identical bearing plates stiffening the post walls under
/// the upper load path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingPlate {
    /// Plate width (in), matching the post width
    pub width_in: f64,

    /// Plate height (in), matching the beam depth
    pub height_in: f64,

    /// Plate thickness (in), eighth-inch increments
    pub thickness_in: f64,
}

impl std::fmt::Display for BearingPlate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.3} x {:.3} x {:.3} in",
            self.width_in, self.height_in, self.thickness_in
        )
    }
}

/// Complete sized connection for one stack level.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cap_plate": { "width_in": 8.0, "length_in": 23.5, "thickness_in": 0.625 },
///   "bearing_plate": { "width_in": 6.0, "height_in": 12.0, "thickness_in": 1.0 },
///   "bearing_stress_psi": 496.5,
///   "weld_size_in": 0.25
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateDesign {
    /// Cap plate the beam bears on
    pub cap_plate: CapPlate,

    /// One of the [`BEARING_PLATE_COUNT`] identical bearing plates
    pub bearing_plate: BearingPlate,

    /// Realized LVL bearing stress under the service reaction (psi)
    pub bearing_stress_psi: f64,

    /// Fillet weld size (in), sixteenth-inch increments
    pub weld_size_in: f64,
}

impl std::fmt::Display for PlateDesign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cap Plate: {}; Bearing Plates: {} plates, {}; LVL Bearing Stress: {:.1} psi; Weld Size: {:.3} in",
            self.cap_plate, BEARING_PLATE_COUNT, self.bearing_plate, self.bearing_stress_psi, self.weld_size_in
        )
    }
}

/// Size the cap plate, bearing plates, and welds for one stack level.
///
/// # Arguments
///
/// * `input` - Level loads, post and beam geometry, and criteria
///
/// # Returns
///
/// * `Ok(PlateDesign)` - Sized plates, realized bearing stress, weld size
/// * `Err(DesignError)` - Invalid inputs, degenerate plate geometry, or a
///   bearing stress that still exceeds the allowable after rounding
pub fn size_connection(input: &ConnectionInput) -> DesignResult<PlateDesign> {
    input.validate()?;

    let criteria = &input.criteria;
    let fy_ksi = criteria.plate_grade.fy_ksi();

    // Bearing length from the service-level reaction, never shorter than
    // the post it caps, rounded up to the quarter inch
    let service_load_kips = input.beam_load_kips / criteria.load_factor;
    let bearing_area_in2 = service_load_kips * 1000.0 / criteria.lvl_bearing_psi;
    let required_length_in = bearing_area_in2 / input.beam_width_in;
    let bearing_length_in =
        ceil_to_increment(required_length_in.max(input.hss_width_in), QUARTER_IN);

    // Cap plate width clears post and beam by 1 in each side
    let cap_width_in = (input.hss_width_in + 2.0).max(input.beam_width_in + 2.0);

    // Cantilever arm: setbacks from the 95% post-width and 80% beam-width
    // lines, or the beam-eccentricity overhang, whichever is longest
    let m = (cap_width_in - 0.95 * input.hss_width_in) / 2.0;
    let n = (cap_width_in - 0.8 * input.beam_width_in) / 2.0;
    let beam_centroid_in = input.beam_offset_in + input.beam_width_in / 2.0;
    let overhang_in = (input.hss_width_in - (input.beam_offset_in + input.beam_width_in))
        .max(beam_centroid_in);
    let cantilever_in = m.max(n).max(overhang_in);

    let total_load_kips = input.beam_load_kips + input.upper_load_kips;
    let denominator = criteria.phi_bending * fy_ksi * cap_width_in * bearing_length_in;
    if denominator == 0.0 {
        return Err(DesignError::invalid_plate_geometry(
            "Cap plate bending denominator is zero",
        ));
    }
    let raw_cap_thickness_in = cantilever_in * (2.0 * total_load_kips / denominator).sqrt();
    let cap_thickness_in =
        round_up_increment(raw_cap_thickness_in, EIGHTH_IN).max(MIN_CAP_THICKNESS_IN);

    // Bearing plates: 1 in trial thickness, resized when half the upper
    // load exceeds the plate bearing capacity
    let bearing_plate_width_in = input.hss_width_in;
    let plate_share_kips = input.upper_load_kips / BEARING_PLATE_COUNT as f64;
    let trial_capacity_kips = BEARING_PHI * BEARING_COEFF * fy_ksi * (bearing_plate_width_in * 1.0);
    let bearing_thickness_in = if trial_capacity_kips < plate_share_kips {
        let raw =
            plate_share_kips / (BEARING_PHI * BEARING_COEFF * fy_ksi * bearing_plate_width_in);
        round_up_increment(raw, EIGHTH_IN)
    } else {
        1.0
    };

    // Re-verify the realized bearing stress; the rounding of the bearing
    // length is expected to keep this at or below the allowable
    let bearing_stress_psi =
        service_load_kips * 1000.0 / (input.beam_width_in * bearing_length_in);
    if bearing_stress_psi > criteria.lvl_bearing_psi {
        return Err(DesignError::bearing_stress_exceeded(
            bearing_stress_psi,
            criteria.lvl_bearing_psi,
        ));
    }

    // Weld demand per inch: cap plate weld wraps all four post faces,
    // bearing plate welds run two sides of each of the two plates
    let cap_weld_demand = total_load_kips / (4.0 * input.hss_width_in);
    let bearing_weld_demand = input.upper_load_kips / (2.0 * 2.0 * input.hss_width_in);
    let weld_demand = cap_weld_demand.max(bearing_weld_demand);

    let min_weld_capacity =
        WELD_PHI * WELD_THROAT_FACTOR * MIN_WELD_SIZE_IN * WELD_STRENGTH_COEFF * E70_FEXX_KSI;
    let weld_size_in = if weld_demand > min_weld_capacity {
        let required =
            weld_demand / (WELD_PHI * WELD_THROAT_FACTOR * WELD_STRENGTH_COEFF * E70_FEXX_KSI);
        ceil_to_increment(required, SIXTEENTH_IN)
    } else {
        MIN_WELD_SIZE_IN
    };

    Ok(PlateDesign {
        cap_plate: CapPlate {
            width_in: cap_width_in,
            length_in: bearing_length_in,
            thickness_in: cap_thickness_in,
        },
        bearing_plate: BearingPlate {
            width_in: bearing_plate_width_in,
            height_in: input.beam_depth_in,
            thickness_in: bearing_thickness_in,
        },
        bearing_stress_psi,
        weld_size_in,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_connection() -> ConnectionInput {
        ConnectionInput {
            beam_load_kips: 56.0,
            upper_load_kips: 60.1,
            hss_width_in: 6.0,
            beam_width_in: 3.0,
            beam_depth_in: 12.0,
            beam_offset_in: 0.0,
            criteria: DesignCriteria::default(),
        }
    }

    #[test]
    fn test_demo_level_cap_plate() {
        let design = size_connection(&test_connection()).unwrap();

        // N = ceil((35 * 1000 / 500 / 3) * 4) / 4 = 23.5 in
        assert_eq!(design.cap_plate.width_in, 8.0);
        assert_eq!(design.cap_plate.length_in, 23.5);
        assert_eq!(design.cap_plate.thickness_in, 0.625);
    }

    #[test]
    fn test_demo_level_bearing_plates() {
        let design = size_connection(&test_connection()).unwrap();

        // Half the upper load (30.05 kips) is well under the 1 in trial
        // plate capacity of 0.75 * 1.8 * 36 * 6 = 291.6 kips
        assert_eq!(design.bearing_plate.width_in, 6.0);
        assert_eq!(design.bearing_plate.height_in, 12.0);
        assert_eq!(design.bearing_plate.thickness_in, 1.0);
    }

    #[test]
    fn test_demo_level_bearing_stress() {
        let design = size_connection(&test_connection()).unwrap();
        // 35 kips service over 3 x 23.5 in
        assert!((design.bearing_stress_psi - 496.5).abs() < 0.1);
    }

    #[test]
    fn test_demo_level_weld_rounds_up() {
        let design = size_connection(&test_connection()).unwrap();
        // Demand 116.1 / 24 = 4.84 kip/in exceeds the 3/16 weld capacity of
        // 4.18 kip/in; required 0.217 in rounds up to the next sixteenth
        assert_eq!(design.weld_size_in, 0.25);
    }

    #[test]
    fn test_weld_keeps_minimum_when_adequate() {
        let input = ConnectionInput {
            beam_load_kips: 40.0,
            upper_load_kips: 20.1,
            beam_width_in: 3.5,
            beam_depth_in: 14.0,
            ..test_connection()
        };
        let design = size_connection(&input).unwrap();
        assert_eq!(design.weld_size_in, MIN_WELD_SIZE_IN);
        assert_eq!(design.cap_plate.to_string(), "8.000 x 14.500 x 0.500 in");
        assert!((design.bearing_stress_psi - 492.6).abs() < 0.1);
    }

    #[test]
    fn test_cap_thickness_bump_past_nearest_eighth() {
        // Raw thickness 0.436 in rounds to the nearest eighth at 0.375,
        // which under-predicts, so the result bumps to 0.5
        let input = ConnectionInput {
            beam_load_kips: 20.0,
            upper_load_kips: 0.1,
            beam_width_in: 2.5,
            beam_depth_in: 10.0,
            ..test_connection()
        };
        let design = size_connection(&input).unwrap();
        assert_eq!(design.cap_plate.length_in, 10.0);
        assert_eq!(design.cap_plate.thickness_in, 0.5);
    }

    #[test]
    fn test_minimum_cap_thickness() {
        let input = ConnectionInput {
            beam_load_kips: 0.1,
            upper_load_kips: 0.0,
            beam_width_in: 2.5,
            beam_depth_in: 10.0,
            ..test_connection()
        };
        let design = size_connection(&input).unwrap();
        // Bearing length floors at the post width
        assert_eq!(design.cap_plate.length_in, 6.0);
        assert_eq!(design.cap_plate.thickness_in, MIN_CAP_THICKNESS_IN);
    }

    #[test]
    fn test_bearing_plate_resized_under_heavy_upper_load() {
        let input = ConnectionInput {
            upper_load_kips: 600.0,
            ..test_connection()
        };
        let design = size_connection(&input).unwrap();
        // 300 kips per plate over 291.6 kips trial capacity: raw 1.029 in,
        // nearest eighth 1.0 under-predicts, bumped to 1.125
        assert_eq!(design.bearing_plate.thickness_in, 1.125);
    }

    #[test]
    fn test_offset_lengthens_cantilever() {
        let base = size_connection(&test_connection()).unwrap();
        let offset = ConnectionInput {
            beam_offset_in: 2.5,
            ..test_connection()
        };
        let design = size_connection(&offset).unwrap();
        assert!(design.cap_plate.thickness_in > base.cap_plate.thickness_in);
    }

    #[test]
    fn test_bearing_stress_never_exceeds_allowable() {
        // The rounded bearing length must keep the realized stress at or
        // below the allowable across a spread of widths and loads
        for &beam_width_in in &[1.5, 2.5, 3.5, 5.25, 7.0] {
            for &beam_load_kips in &[0.5, 4.0, 20.0, 56.0, 113.0, 200.0] {
                let input = ConnectionInput {
                    beam_load_kips,
                    beam_width_in,
                    ..test_connection()
                };
                let design = size_connection(&input).unwrap();
                assert!(
                    design.bearing_stress_psi <= input.criteria.lvl_bearing_psi,
                    "stress {} psi over allowable for width {} load {}",
                    design.bearing_stress_psi,
                    beam_width_in,
                    beam_load_kips
                );
            }
        }
    }

    #[test]
    fn test_zeroed_phi_reports_plate_geometry_error() {
        let mut input = test_connection();
        input.criteria.phi_bending = 0.0;
        let error = size_connection(&input).unwrap_err();
        assert_eq!(error.error_code(), "INVALID_PLATE_GEOMETRY");
    }

    #[test]
    fn test_invalid_beam_width() {
        let mut input = test_connection();
        input.beam_width_in = 0.0;
        assert!(size_connection(&input).is_err());
    }

    #[test]
    fn test_display_matches_schedule_format() {
        let design = size_connection(&test_connection()).unwrap();
        assert_eq!(design.cap_plate.to_string(), "8.000 x 23.500 x 0.625 in");
        assert_eq!(
            design.bearing_plate.to_string(),
            "6.000 x 12.000 x 1.000 in"
        );
        let summary = design.to_string();
        assert!(summary.contains("Bearing Plates: 2 plates, 6.000 x 12.000 x 1.000 in"));
        assert!(summary.contains("LVL Bearing Stress: 496.5 psi"));
        assert!(summary.contains("Weld Size: 0.250 in"));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let design = size_connection(&test_connection()).unwrap();
        let json = serde_json::to_string_pretty(&design).unwrap();
        assert!(json.contains("bearing_stress_psi"));
        let roundtrip: PlateDesign = serde_json::from_str(&json).unwrap();
        assert_eq!(design, roundtrip);
    }
}
