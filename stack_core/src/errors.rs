//! # Error Types
//!
//! Structured error types for stack_core. Every failure carries enough
//! context to understand and handle it programmatically - no stringly-typed
//! errors, no panics in library code.
//!
//! ## Example
//!
//! ```rust
//! use stack_core::errors::{DesignError, DesignResult};
//!
//! fn validate_width(width_in: f64) -> DesignResult<()> {
//!     if width_in <= 0.0 {
//!         return Err(DesignError::InvalidInput {
//!             field: "width_in".to_string(),
//!             value: width_in.to_string(),
//!             reason: "Width must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for stack_core operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Structured error type for design operations.
///
/// Each variant provides specific context about what went wrong. Errors are
/// values: a failed stack level carries its error in the level record and
/// never aborts the rest of the stack.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The cap plate thickness formula produced a degenerate denominator
    #[error("Invalid plate geometry: {reason}")]
    InvalidPlateGeometry { reason: String },

    /// Realized LVL bearing stress exceeds the allowable
    #[error("Bearing stress {actual_psi:.1} psi exceeds {allowable_psi:.1} psi")]
    BearingStressExceeded {
        actual_psi: f64,
        allowable_psi: f64,
    },

    /// No catalog section satisfies the slenderness and interaction bounds
    #[error("No adequate HSS section for {demand_kips:.1} kips")]
    NoAdequateSection { demand_kips: f64 },
}

impl DesignError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidPlateGeometry error
    pub fn invalid_plate_geometry(reason: impl Into<String>) -> Self {
        DesignError::InvalidPlateGeometry {
            reason: reason.into(),
        }
    }

    /// Create a BearingStressExceeded error
    pub fn bearing_stress_exceeded(actual_psi: f64, allowable_psi: f64) -> Self {
        DesignError::BearingStressExceeded {
            actual_psi,
            allowable_psi,
        }
    }

    /// Create a NoAdequateSection error
    pub fn no_adequate_section(demand_kips: f64) -> Self {
        DesignError::NoAdequateSection { demand_kips }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DesignError::InvalidInput { .. } => "INVALID_INPUT",
            DesignError::InvalidPlateGeometry { .. } => "INVALID_PLATE_GEOMETRY",
            DesignError::BearingStressExceeded { .. } => "BEARING_STRESS_EXCEEDED",
            DesignError::NoAdequateSection { .. } => "NO_ADEQUATE_SECTION",
        }
    }
}
