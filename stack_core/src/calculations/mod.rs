//! # Design Calculations
//!
//! The decision logic of the engine. Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, with `validate()`)
//! - Result struct - Outputs including the intermediate check values
//! - Pure function taking the input and returning `DesignResult`
//!
//! ## Available Calculations
//!
//! - [`post`] - Smallest adequate HSS post under axial load plus eccentric
//!   beam bending
//! - [`connection`] - Cap plate, bearing plates, and weld sizing
//! - [`stack`] - Multi-level orchestration with cumulative load transfer

pub mod connection;
pub mod post;
pub mod stack;

// Re-export commonly used types
pub use connection::{size_connection, ConnectionInput, PlateDesign};
pub use post::{select_section, PostInput, PostSelection};
pub use stack::{cumulative_loads, process_stack, LevelOutcome, LevelResult, StackInput, StackLevel};
