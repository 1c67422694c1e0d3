//! # statics_core - Beam Statics Engine
//!
//! `statics_core` computes support reactions and shear/moment/torque diagrams
//! for a beam on two or three supports carrying point loads, distributed
//! loads and an applied torque. All inputs and outputs are JSON-serializable,
//! so the same functions back the HTTP service and the CLI.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types naming the offending field
//!
//! ## Quick Start
//!
//! ```rust
//! use statics_core::calculations::beam::{calculate, BeamConfiguration};
//! use statics_core::loads::DistributedLoad;
//!
//! // 10 m beam, 10 N/m over the full span
//! let beam = BeamConfiguration::new(10.0)
//!     .with_distributed_load(DistributedLoad::new(0.0, 10.0, 10.0))
//!     .with_num_points(10);
//!
//! let result = calculate(&beam).unwrap();
//! assert_eq!(result.reactions.a.vertical, 50.0);
//! assert_eq!(result.diagrams.moment[5], 125.0);
//! ```
//!
//! ## Modules
//!
//! - [`loads`] - Point and distributed loads, validation and resultants
//! - [`calculations`] - Reactions, diagram sweep and mechanics helpers
//! - [`equations`] - Cross-section properties
//! - [`api`] - Request/response envelope shared by the service and CLI
//! - [`export`] - CSV export of diagrams
//! - [`units`] - Unit system labels
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON file loading and atomic saves

pub mod api;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod loads;
pub mod numeric;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use api::{analyze, AnalysisResponse, BeamRequest};
pub use calculations::beam::{calculate, BeamAnalysis, BeamConfiguration};
pub use errors::{CalcError, CalcResult};
pub use loads::{DistributedLoad, LoadSet, PointLoad};
