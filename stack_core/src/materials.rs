//! # Materials and Design Criteria
//!
//! Steel grades and the LRFD design criteria shared by the selection and
//! sizing checks. Values are US customary (ksi, psi) per the AISC manual
//! and the LVL manufacturer's published allowable bearing stress.
//!
//! ## Example
//!
//! ```rust
//! use stack_core::materials::{DesignCriteria, SteelGrade};
//!
//! let criteria = DesignCriteria::default();
//! assert_eq!(criteria.hss_grade.fy_ksi(), 46.0);
//! assert_eq!(criteria.plate_grade.fy_ksi(), 36.0);
//! assert_eq!(criteria.lvl_bearing_psi, 500.0);
//! ```

use serde::{Deserialize, Serialize};

/// Steel elastic modulus E (ksi).
///
/// Declared for completeness of the material record. The slenderness screen
/// intentionally uses the empirical radius-of-gyration approximation
/// (`r ≈ r_factor·√A`) rather than an E-based buckling formula; see
/// [`DesignCriteria::r_factor`].
pub const STEEL_E_KSI: f64 = 29000.0;

/// Structural steel grade with yield strength lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// ASTM A500 Grade B (HSS), Fy = 46 ksi
    #[serde(rename = "A500-GrB")]
    A500GrB,
    /// ASTM A36 (plate), Fy = 36 ksi
    #[serde(rename = "A36")]
    A36,
}

impl SteelGrade {
    /// All grades for iteration
    pub const ALL: [SteelGrade; 2] = [SteelGrade::A500GrB, SteelGrade::A36];

    /// Specified minimum yield strength (ksi)
    pub fn fy_ksi(&self) -> f64 {
        match self {
            SteelGrade::A500GrB => 46.0,
            SteelGrade::A36 => 36.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::A500GrB => "A500 Gr. B",
            SteelGrade::A36 => "A36",
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// LRFD design criteria for the whole stack.
///
/// Defaults match the design basis of the checks: A500 Gr. B posts, A36
/// plates, φc = φ = 0.9, a single 1.6 load factor for backing factored beam
/// loads down to service level, and 500 psi allowable bearing on LVL.
///
/// ## JSON Example
///
/// ```json
/// {
///   "hss_grade": "A500-GrB",
///   "plate_grade": "A36",
///   "phi_c": 0.9,
///   "phi_bending": 0.9,
///   "load_factor": 1.6,
///   "lvl_bearing_psi": 500.0,
///   "k_factor": 1.0,
///   "r_factor": 0.4
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignCriteria {
    /// Post (HSS) steel grade
    pub hss_grade: SteelGrade,

    /// Cap and bearing plate steel grade
    pub plate_grade: SteelGrade,

    /// Compression strength reduction factor φc
    pub phi_c: f64,

    /// Plate bending strength reduction factor φ
    pub phi_bending: f64,

    /// LRFD load factor relating factored beam loads to service level
    pub load_factor: f64,

    /// Allowable LVL bearing stress, compression perpendicular to grain (psi)
    pub lvl_bearing_psi: f64,

    /// Effective length factor K (1.0 for pin-pin posts)
    pub k_factor: f64,

    /// Empirical radius-of-gyration factor: r ≈ r_factor·√A for square HSS
    pub r_factor: f64,
}

impl Default for DesignCriteria {
    fn default() -> Self {
        DesignCriteria {
            hss_grade: SteelGrade::A500GrB,
            plate_grade: SteelGrade::A36,
            phi_c: 0.9,
            phi_bending: 0.9,
            load_factor: 1.6,
            lvl_bearing_psi: 500.0,
            k_factor: 1.0,
            r_factor: 0.4,
        }
    }
}
