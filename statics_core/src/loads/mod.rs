//! Load model: validation and normalization of beam loads
//!
//! The solver never looks at raw loads directly. It consumes the
//! [`Resultant`] of each load and the aggregate sums exposed by [`LoadSet`].
//!
//! # Example
//!
//! ```
//! use statics_core::loads::{DistributedLoad, LoadSet, PointLoad};
//!
//! let loads = LoadSet::new()
//!     .with_point(PointLoad::new(5.0, 100.0))
//!     .with_distributed(DistributedLoad::new(0.0, 10.0, 10.0));
//!
//! loads.validate(10.0).unwrap();
//! assert_eq!(loads.total_force(), 200.0);
//! assert_eq!(loads.total_moment_about_origin(), 1000.0);
//! assert_eq!(loads.center_of_mass(), Some(5.0));
//! ```

pub mod discrete;

pub use discrete::{DistributedLoad, DistributedLoadSummary, PointLoad, Resultant};

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::numeric::is_negligible;

/// All loads applied to one beam
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadSet {
    #[serde(default)]
    pub point_loads: Vec<PointLoad>,
    #[serde(default)]
    pub distributed_loads: Vec<DistributedLoad>,
}

impl LoadSet {
    /// Create an empty load set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point load (builder pattern)
    pub fn with_point(mut self, load: PointLoad) -> Self {
        self.point_loads.push(load);
        self
    }

    /// Add a distributed load (builder pattern)
    pub fn with_distributed(mut self, load: DistributedLoad) -> Self {
        self.distributed_loads.push(load);
        self
    }

    /// True when no load of either kind is present
    pub fn is_empty(&self) -> bool {
        self.point_loads.is_empty() && self.distributed_loads.is_empty()
    }

    /// Validate every load against a beam of `length`.
    ///
    /// Point loads are checked before distributed loads; the first failure
    /// is returned.
    pub fn validate(&self, length: f64) -> CalcResult<()> {
        for (index, load) in self.point_loads.iter().enumerate() {
            load.validate(index, length)?;
        }
        for (index, load) in self.distributed_loads.iter().enumerate() {
            load.validate(index, length)?;
        }
        Ok(())
    }

    /// Resultants of all loads, point loads first
    pub fn resultants(&self) -> Vec<Resultant> {
        self.point_loads
            .iter()
            .map(PointLoad::resultant)
            .chain(self.distributed_loads.iter().map(DistributedLoad::resultant))
            .collect()
    }

    /// ΣF over all loads (N)
    pub fn total_force(&self) -> f64 {
        self.resultants().iter().map(|r| r.force).sum()
    }

    /// Σ F·x̄ about support A (N·m)
    pub fn total_moment_about_origin(&self) -> f64 {
        self.resultants().iter().map(Resultant::moment_about_origin).sum()
    }

    /// Position of the combined resultant, `None` when ΣF is zero
    pub fn center_of_mass(&self) -> Option<f64> {
        let total = self.total_force();
        if is_negligible(total) {
            None
        } else {
            Some(self.total_moment_about_origin() / total)
        }
    }

    /// Distributed loads with their derived force and centroid
    pub fn distributed_summaries(&self) -> Vec<DistributedLoadSummary> {
        self.distributed_loads.iter().map(DistributedLoadSummary::from).collect()
    }
}
