//! # Support Reactions
//!
//! Closed-form reaction solve from the two equilibrium equations:
//!
//! ```text
//! ΣFy = 0:   RA + RB (+ RC) = ΣF
//! ΣM_A = 0:  RB·L (+ RC·c)  = ΣF·x̄ + T
//! ```
//!
//! With supports A and B only the beam is statically determinate. With
//! support C active there are three unknowns and two equations; the solver
//! then splits the load symmetrically between A and C:
//!
//! ```text
//! RB = ((ΣM + T) − c·ΣF/2) / (L − c)
//! RA = RC = (ΣF − RB) / 2
//! ```
//!
//! This is an approximation, not a compatibility-based indeterminate solve.
//! It satisfies ΣFy exactly but generally leaves a residual in ΣM_A, which is
//! reported by [`EquilibriumSummary`] rather than treated as an error.

use serde::{Deserialize, Serialize};

use super::supports::SupportType;
use crate::errors::{CalcError, CalcResult};
use crate::numeric::approx_eq;

/// Vertical reactions at the three supports (N, positive upward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReactionSet {
    #[serde(rename = "RA")]
    pub a: f64,
    #[serde(rename = "RB")]
    pub b: f64,
    /// Zero when support C is inactive
    #[serde(rename = "RC")]
    pub c: f64,
}

impl ReactionSet {
    /// RA + RB + RC
    pub fn total(&self) -> f64 {
        self.a + self.b + self.c
    }

    fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

/// Reaction at one support split into components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionComponents {
    pub vertical: f64,
    /// Always zero: every modeled load is transverse
    pub horizontal: f64,
    #[serde(rename = "type")]
    pub support_type: SupportType,
}

impl ReactionComponents {
    pub fn vertical_only(vertical: f64, support_type: SupportType) -> Self {
        ReactionComponents {
            vertical,
            horizontal: 0.0,
            support_type,
        }
    }
}

/// Component reactions keyed by support name
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentReactions {
    #[serde(rename = "A")]
    pub a: ReactionComponents,
    #[serde(rename = "B")]
    pub b: ReactionComponents,
    #[serde(rename = "C")]
    pub c: ReactionComponents,
}

/// Solve the vertical reactions.
///
/// * `length` - beam length L (m), already validated positive
/// * `support_c` - position of support C when active
/// * `total_force` - ΣF of all load resultants (N)
/// * `total_moment` - Σ F·x̄ about support A (N·m)
/// * `torsor` - applied free moment T (N·m)
pub fn solve_reactions(
    length: f64,
    support_c: Option<f64>,
    total_force: f64,
    total_moment: f64,
    torsor: f64,
) -> CalcResult<ReactionSet> {
    let reactions = match support_c {
        None => {
            let b = (total_moment + torsor) / length;
            ReactionSet {
                a: total_force - b,
                b,
                c: 0.0,
            }
        }
        Some(c) => {
            let b = ((total_moment + torsor) - c * total_force / 2.0) / (length - c);
            let a = (total_force - b) / 2.0;
            ReactionSet { a, b, c: a }
        }
    };

    if !reactions.is_finite() {
        return Err(CalcError::computation_failed(
            "reactions",
            format!("non-finite reaction {:?}", reactions),
        ));
    }
    Ok(reactions)
}

/// Equilibrium sums after substituting the solved reactions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumSummary {
    /// ΣF of applied loads (N)
    pub sum_vertical_loads: f64,
    /// Σ F·x̄ of applied loads about A (N·m)
    pub sum_moment_about_a: f64,
    /// Applied torque T (N·m)
    pub torsor: f64,
    /// RA + RB + RC (N)
    pub sum_reactions: f64,
    /// ΣF − ΣR
    pub residual_force: f64,
    /// (ΣM + T) − (RB·L + RC·c)
    pub residual_moment: f64,
    /// Both residuals within tolerance
    pub balanced: bool,
}

impl EquilibriumSummary {
    pub fn evaluate(
        length: f64,
        support_c: Option<f64>,
        total_force: f64,
        total_moment: f64,
        torsor: f64,
        reactions: &ReactionSet,
    ) -> Self {
        let sum_reactions = reactions.total();
        let applied_moment = total_moment + torsor;
        let c_arm = support_c.unwrap_or(0.0);
        let reaction_moment = reactions.b * length + reactions.c * c_arm;

        let force_scale =
            total_force.abs() + reactions.a.abs() + reactions.b.abs() + reactions.c.abs();
        let moment_scale = total_moment.abs()
            + torsor.abs()
            + (reactions.b * length).abs()
            + (reactions.c * c_arm).abs();

        EquilibriumSummary {
            sum_vertical_loads: total_force,
            sum_moment_about_a: total_moment,
            torsor,
            sum_reactions,
            residual_force: total_force - sum_reactions,
            residual_moment: applied_moment - reaction_moment,
            balanced: approx_eq(total_force, sum_reactions, force_scale)
                && approx_eq(applied_moment, reaction_moment, moment_scale),
        }
    }
}
