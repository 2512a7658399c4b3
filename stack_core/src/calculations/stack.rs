//! # Stack Processing
//!
//! Orchestrates a multi-level post-and-beam stack: accumulates beam loads
//! from the top of the stack down, then selects a post and sizes its
//! connection for every level. Levels are ordered bottom-to-top in the
//! input (index 0 = lowest level) and results are reported 1-indexed in
//! the same order.
//!
//! A level that cannot be designed - no adequate catalog section, invalid
//! geometry, overstressed bearing - is recorded as that level's failed
//! outcome and never aborts the remaining levels.
//!
//! ## Example
//!
//! ```rust
//! use stack_core::calculations::stack::{process_stack, StackInput, StackLevel};
//! use stack_core::materials::DesignCriteria;
//!
//! let input = StackInput {
//!     label: "Demo Stack".to_string(),
//!     levels: vec![
//!         StackLevel { post_length_in: 120.0, beam_load_kips: 56.0, beam_width_in: 3.0, beam_depth_in: 12.0 },
//!         StackLevel { post_length_in: 96.0, beam_load_kips: 40.0, beam_width_in: 3.5, beam_depth_in: 14.0 },
//!     ],
//!     criteria: DesignCriteria::default(),
//! };
//!
//! let results = process_stack(&input);
//! assert_eq!(results.len(), 2);
//! assert!(results.iter().all(|r| r.outcome.is_designed()));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::connection::{size_connection, ConnectionInput, PlateDesign};
use crate::calculations::post::{select_section, PostInput, PostSelection};
use crate::errors::{DesignError, DesignResult};
use crate::materials::DesignCriteria;

/// One level of the stack: the post below a beam and the beam it supports.
///
/// ## JSON Example
///
/// ```json
/// {
///   "post_length_in": 120.0,
///   "beam_load_kips": 56.0,
///   "beam_width_in": 3.0,
///   "beam_depth_in": 12.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackLevel {
    /// Unbraced post length at this level (in)
    pub post_length_in: f64,

    /// Factored beam reaction applied at this level (kips)
    pub beam_load_kips: f64,

    /// LVL beam width (in)
    pub beam_width_in: f64,

    /// LVL beam depth (in)
    pub beam_depth_in: f64,
}

/// A whole stack, bottom level first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackInput {
    /// User label for this stack (e.g., "Grid C Stack")
    pub label: String,

    /// Levels ordered bottom-to-top
    pub levels: Vec<StackLevel>,

    /// Material and factor set shared by every level
    #[serde(default)]
    pub criteria: DesignCriteria,
}

/// Outcome of one level: a completed design or the error that stopped it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LevelOutcome {
    /// Post selected and connection sized
    Designed {
        selection: PostSelection,
        plates: PlateDesign,
    },
    /// The level could not be designed
    Failed { error: DesignError },
}

impl LevelOutcome {
    /// Check whether this level produced a complete design
    pub fn is_designed(&self) -> bool {
        matches!(self, LevelOutcome::Designed { .. })
    }
}

/// Result record for one stack level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelResult {
    /// Level number, 1-indexed from the bottom
    pub level: usize,

    /// Total factored load carried at this level (kips)
    pub total_load_kips: f64,

    /// Factored load arriving from the levels above (kips)
    pub upper_load_kips: f64,

    /// Design outcome for this level
    pub outcome: LevelOutcome,
}

impl std::fmt::Display for LevelResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            LevelOutcome::Designed { selection, plates } => {
                write!(
                    f,
                    "Level {}: {}; {}",
                    self.level, selection.section.designation, plates
                )
            }
            LevelOutcome::Failed { error } => {
                write!(f, "Level {}: Error: {}", self.level, error)
            }
        }
    }
}

/// Cumulative factored load per level.
///
/// Scans from the topmost (last) level down, accumulating beam loads, so
/// entry `i` is the sum of the beam loads at level `i` and every level
/// above it.
pub fn cumulative_loads(levels: &[StackLevel]) -> Vec<f64> {
    let mut totals = vec![0.0; levels.len()];
    let mut running_kips = 0.0;
    for (index, level) in levels.iter().enumerate().rev() {
        running_kips += level.beam_load_kips;
        totals[index] = running_kips;
    }
    totals
}

/// Design every level of the stack.
///
/// Returns one record per input level in bottom-to-top order. Failures are
/// carried in the per-level outcome; this function itself never fails and
/// never drops a level.
pub fn process_stack(input: &StackInput) -> Vec<LevelResult> {
    let totals = cumulative_loads(&input.levels);

    input
        .levels
        .iter()
        .zip(totals)
        .enumerate()
        .map(|(index, (level, total_load_kips))| {
            let level_no = index + 1;
            let upper_load_kips = total_load_kips - level.beam_load_kips;
            let outcome =
                match design_level(level, level_no, total_load_kips, &input.criteria) {
                    Ok((selection, plates)) => LevelOutcome::Designed { selection, plates },
                    Err(error) => LevelOutcome::Failed { error },
                };
            LevelResult {
                level: level_no,
                total_load_kips,
                upper_load_kips,
                outcome,
            }
        })
        .collect()
}

/// Select the post and size the connection for one level.
fn design_level(
    level: &StackLevel,
    level_no: usize,
    total_load_kips: f64,
    criteria: &DesignCriteria,
) -> DesignResult<(PostSelection, PlateDesign)> {
    let post = PostInput {
        label: format!("Level {} post", level_no),
        length_in: level.post_length_in,
        total_load_kips,
        beam_load_kips: level.beam_load_kips,
        beam_width_in: level.beam_width_in,
        criteria: *criteria,
    };
    let selection = select_section(&post)?
        .ok_or_else(|| DesignError::no_adequate_section(total_load_kips))?;

    let connection = ConnectionInput {
        beam_load_kips: level.beam_load_kips,
        upper_load_kips: total_load_kips - level.beam_load_kips,
        hss_width_in: selection.section.width_in,
        beam_width_in: level.beam_width_in,
        beam_depth_in: level.beam_depth_in,
        beam_offset_in: 0.0,
        criteria: *criteria,
    };
    let plates = size_connection(&connection)?;

    Ok((selection, plates))
}
