//! # Statics Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Configuration` / input struct - JSON-serializable input
//! - `*Analysis` / result struct - JSON-serializable output
//! - `calculate(input) -> CalcResult<_>` - pure calculation function
//!
//! ## Available Calculations
//!
//! - [`beam`] - Reactions and shear/moment/torque diagrams
//! - [`reactions`] - Equilibrium solve used by [`beam`]
//! - [`diagrams`] - Left-to-right internal force sweep
//! - [`supports`] - Support types and layout
//! - [`mass`] - Center of mass of point masses, force from torque
//! - [`truss`] - Plane truss bar forces by the method of joints
//! - [`frame`] - Plane frame displacements by the stiffness method

pub mod beam;
pub mod diagrams;
pub mod frame;
pub mod mass;
pub mod reactions;
mod structure;
pub mod supports;
pub mod truss;

// Re-export commonly used types
pub use beam::{calculate, BeamAnalysis, BeamConfiguration};
pub use diagrams::{DiagramSample, Diagrams, TorsorDiagram};
pub use reactions::{EquilibriumSummary, ReactionSet};
pub use frame::{solve_frame, FrameAnalysis, FrameModel};
pub use supports::SupportType;
pub use truss::{solve_truss, TrussAnalysis, TrussModel};
