//! # Beam Statics Calculation
//!
//! Computes support reactions and sampled shear/moment/torque diagrams for a
//! beam on supports A (x = 0) and B (x = L), with an optional intermediate
//! support C.
//!
//! ## Assumptions
//!
//! - All loads are transverse; horizontal reactions are reported as zero
//! - Positive loads act downward, positive reactions act upward
//! - The applied torque T is a free moment: it enters moment balance and
//!   offsets the moment diagram, but not force balance
//! - With support C active, A and C share load symmetrically (see
//!   [`super::reactions`])
//!
//! ## Example
//!
//! ```rust
//! use statics_core::calculations::beam::{calculate, BeamConfiguration};
//! use statics_core::loads::PointLoad;
//!
//! let beam = BeamConfiguration::new(10.0)
//!     .with_point_load(PointLoad::new(5.0, 100.0))
//!     .with_num_points(10);
//!
//! let result = calculate(&beam).unwrap();
//! assert_eq!(result.reactions.a.vertical, 50.0);
//! assert_eq!(result.reactions.b.vertical, 50.0);
//! assert_eq!(result.diagrams.positions.len(), 11);
//! ```

use serde::{Deserialize, Serialize};

use super::diagrams::{to_columns, BeamSweep, DiagramSample, Diagrams, TorsorDiagram};
use super::reactions::{
    solve_reactions, ComponentReactions, EquilibriumSummary, ReactionComponents, ReactionSet,
};
use super::supports::{SupportLayout, SupportSummary, SupportType};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{DistributedLoad, DistributedLoadSummary, LoadSet, PointLoad};

/// Sample count used when the request does not specify one
pub const DEFAULT_SAMPLE_COUNT: usize = 800;

/// Upper bound on the sample count accepted from callers
pub const MAX_SAMPLE_COUNT: usize = 5000;

fn default_support_a() -> SupportType {
    SupportType::Fixed
}

fn default_support_b() -> SupportType {
    SupportType::Roller
}

fn default_support_c() -> SupportType {
    SupportType::None
}

/// Beam geometry, supports and loads.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 10.0,
///   "support_a_type": "Fixed",
///   "support_b_type": "Roller",
///   "support_c_type": "None",
///   "support_c_position": null,
///   "torsor": 0.0,
///   "point_loads": [ { "label": "P1", "position": 5.0, "magnitude": 100.0 } ],
///   "distributed_loads": [ { "start": 0.0, "end": 10.0, "intensity": 10.0 } ],
///   "num_points": 400
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamConfiguration {
    /// Beam length L (m)
    pub length: f64,

    /// Elevation of the left end. Rendering metadata only.
    #[serde(default)]
    pub height_start: f64,

    /// Elevation of the right end. Rendering metadata only.
    #[serde(default)]
    pub height_end: f64,

    #[serde(default = "default_support_a")]
    pub support_a_type: SupportType,

    #[serde(default = "default_support_b")]
    pub support_b_type: SupportType,

    #[serde(default = "default_support_c")]
    pub support_c_type: SupportType,

    /// Position of support C; required when support C is active
    #[serde(default)]
    pub support_c_position: Option<f64>,

    /// Applied torque / free moment T (N·m)
    #[serde(default, alias = "applied_torque")]
    pub torsor: f64,

    #[serde(flatten)]
    pub loads: LoadSet,

    /// Number of sampling intervals; the diagrams hold `num_points + 1` samples
    #[serde(default, alias = "sample_count", skip_serializing_if = "Option::is_none")]
    pub num_points: Option<usize>,
}

impl BeamConfiguration {
    /// Fixed/roller beam of `length` with no loads
    pub fn new(length: f64) -> Self {
        BeamConfiguration {
            length,
            height_start: 0.0,
            height_end: 0.0,
            support_a_type: default_support_a(),
            support_b_type: default_support_b(),
            support_c_type: default_support_c(),
            support_c_position: None,
            torsor: 0.0,
            loads: LoadSet::new(),
            num_points: None,
        }
    }

    pub fn with_point_load(mut self, load: PointLoad) -> Self {
        self.loads.point_loads.push(load);
        self
    }

    pub fn with_distributed_load(mut self, load: DistributedLoad) -> Self {
        self.loads.distributed_loads.push(load);
        self
    }

    pub fn with_torsor(mut self, torsor: f64) -> Self {
        self.torsor = torsor;
        self
    }

    /// Activate support C at `position`
    pub fn with_support_c(mut self, support_type: SupportType, position: f64) -> Self {
        self.support_c_type = support_type;
        self.support_c_position = Some(position);
        self
    }

    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = Some(num_points);
        self
    }

    /// Effective sample count
    pub fn sample_count(&self) -> usize {
        self.num_points.unwrap_or(DEFAULT_SAMPLE_COUNT)
    }

    /// Position of support C when it provides a reaction
    pub fn active_support_c(&self) -> Option<f64> {
        if self.support_c_type.is_active() {
            self.support_c_position
        } else {
            None
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(CalcError::invalid_input(
                "length",
                self.length.to_string(),
                "Beam length must be a positive finite number",
            ));
        }
        if !self.torsor.is_finite() {
            return Err(CalcError::invalid_input(
                "torsor",
                self.torsor.to_string(),
                "Applied torque must be a finite number",
            ));
        }
        let samples = self.sample_count();
        if samples == 0 || samples > MAX_SAMPLE_COUNT {
            return Err(CalcError::invalid_input(
                "num_points",
                samples.to_string(),
                format!("Sample count must be between 1 and {}", MAX_SAMPLE_COUNT),
            ));
        }
        if !self.support_a_type.is_active() {
            return Err(CalcError::invalid_input(
                "support_a_type",
                self.support_a_type.to_string(),
                "Support A must be Fixed or Roller",
            ));
        }
        if !self.support_b_type.is_active() {
            return Err(CalcError::invalid_input(
                "support_b_type",
                self.support_b_type.to_string(),
                "Support B must be Fixed or Roller",
            ));
        }
        if self.support_c_type.is_active() {
            let c = self
                .support_c_position
                .ok_or_else(|| CalcError::missing_field("support_c_position"))?;
            if !c.is_finite() || c <= 0.0 || c >= self.length {
                return Err(CalcError::invalid_input(
                    "support_c_position",
                    c.to_string(),
                    format!("Support C must lie strictly inside the span (0, {})", self.length),
                ));
            }
        }
        self.loads.validate(self.length)
    }

    fn support_layout(&self) -> SupportLayout {
        SupportLayout {
            a: SupportSummary {
                support_type: self.support_a_type,
                position: Some(0.0),
            },
            b: SupportSummary {
                support_type: self.support_b_type,
                position: Some(self.length),
            },
            c: SupportSummary {
                support_type: self.support_c_type,
                position: self.active_support_c(),
            },
        }
    }
}

/// Normalized echo of the submitted loads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadEcho {
    pub point: Vec<PointLoad>,
    pub distributed: Vec<DistributedLoadSummary>,
}

/// Results of a beam statics calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamAnalysis {
    /// Reactions at A, B and C with vertical/horizontal components
    pub reactions: ComponentReactions,

    /// Load sums and residuals after substituting the reactions
    pub equilibrium: EquilibriumSummary,

    /// Position of the combined load resultant; `None` when ΣF = 0
    pub center_of_mass: Option<f64>,

    /// Shear and moment diagrams
    pub diagrams: Diagrams,

    /// Torque diagram
    pub torsor: TorsorDiagram,

    /// Normalized loads
    pub loads: LoadEcho,

    /// Support types and positions
    pub supports: SupportLayout,
}

impl BeamAnalysis {
    /// Vertical reactions only
    pub fn reaction_set(&self) -> ReactionSet {
        ReactionSet {
            a: self.reactions.a.vertical,
            b: self.reactions.b.vertical,
            c: self.reactions.c.vertical,
        }
    }

    /// Row-oriented view of the sampled diagrams, truncated to the shortest column
    pub fn samples(&self) -> Vec<DiagramSample> {
        let d = &self.diagrams;
        d.positions
            .iter()
            .zip(&d.shear)
            .zip(&d.moment)
            .zip(&self.torsor.values)
            .map(|(((&position, &shear), &moment), &torque)| DiagramSample {
                position,
                shear,
                moment,
                torque,
            })
            .collect()
    }

    /// Sample with the largest |V|
    pub fn max_abs_shear(&self) -> Option<DiagramSample> {
        self.samples()
            .into_iter()
            .max_by(|a, b| a.shear.abs().total_cmp(&b.shear.abs()))
    }

    /// Sample with the largest |M|
    pub fn max_abs_moment(&self) -> Option<DiagramSample> {
        self.samples()
            .into_iter()
            .max_by(|a, b| a.moment.abs().total_cmp(&b.moment.abs()))
    }
}

/// Solve reactions for a validated configuration
pub fn reactions(beam: &BeamConfiguration) -> CalcResult<ReactionSet> {
    beam.validate()?;
    solve_reactions(
        beam.length,
        beam.active_support_c(),
        beam.loads.total_force(),
        beam.loads.total_moment_about_origin(),
        beam.torsor,
    )
}

/// Internal torque at a single position `x` in `[0, L]`
pub fn torsor_at(beam: &BeamConfiguration, x: f64) -> CalcResult<f64> {
    beam.validate()?;
    if !x.is_finite() || x < 0.0 || x > beam.length {
        return Err(CalcError::invalid_input(
            "x",
            x.to_string(),
            format!("Position must lie within the beam [0, {}]", beam.length),
        ));
    }
    let support_c = beam.active_support_c();
    let r = solve_reactions(
        beam.length,
        support_c,
        beam.loads.total_force(),
        beam.loads.total_moment_about_origin(),
        beam.torsor,
    )?;
    let sweep = BeamSweep::new(beam.length, support_c, beam.torsor, r, &beam.loads);
    Ok(sweep.torsor_at(x))
}

/// Perform the full beam statics calculation.
///
/// Pure function: identical input always yields identical output.
pub fn calculate(beam: &BeamConfiguration) -> CalcResult<BeamAnalysis> {
    beam.validate()?;

    let support_c = beam.active_support_c();
    let total_force = beam.loads.total_force();
    let total_moment = beam.loads.total_moment_about_origin();

    let r = solve_reactions(beam.length, support_c, total_force, total_moment, beam.torsor)?;
    let equilibrium =
        EquilibriumSummary::evaluate(beam.length, support_c, total_force, total_moment, beam.torsor, &r);

    log::debug!(
        "solved beam L={} supports={} RA={:.6} RB={:.6} RC={:.6} balanced={}",
        beam.length,
        if support_c.is_some() { 3 } else { 2 },
        r.a,
        r.b,
        r.c,
        equilibrium.balanced
    );

    let sweep = BeamSweep::new(beam.length, support_c, beam.torsor, r, &beam.loads);
    let samples = sweep.sample(beam.sample_count());
    let (diagrams, torsor) = to_columns(&samples);

    if samples.iter().any(|s| !s.shear.is_finite() || !s.moment.is_finite()) {
        return Err(CalcError::computation_failed(
            "diagrams",
            "non-finite internal force in sampled diagram",
        ));
    }

    Ok(BeamAnalysis {
        reactions: ComponentReactions {
            a: ReactionComponents::vertical_only(r.a, beam.support_a_type),
            b: ReactionComponents::vertical_only(r.b, beam.support_b_type),
            c: ReactionComponents::vertical_only(r.c, beam.support_c_type),
        },
        equilibrium,
        center_of_mass: beam.loads.center_of_mass(),
        diagrams,
        torsor,
        loads: LoadEcho {
            point: beam.loads.point_loads.clone(),
            distributed: beam.loads.distributed_summaries(),
        },
        supports: beam.support_layout(),
    })
}
