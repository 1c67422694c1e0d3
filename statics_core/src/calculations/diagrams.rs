//! # Internal Force Diagrams
//!
//! Shear, bending moment and torque are accumulated by walking the beam from
//! left to right: every reaction and load that lies behind the section at
//! `x` contributes to the internal forces there.
//!
//! ## Step Conventions
//!
//! The comparisons are part of the contract and must not be "tidied up":
//!
//! | Contribution | Active when |
//! |---|---|
//! | RA | always |
//! | RC | `x >= c` (support C active) |
//! | RB | `x >= L` |
//! | point load at `a` | `x > a` |
//! | distributed load `[s, e]` | `x > s`; partial while `x <= e` |
//!
//! The applied torque T is added to the moment at every position.

use serde::{Deserialize, Serialize};

use super::reactions::ReactionSet;
use crate::loads::LoadSet;
use crate::numeric::sample_positions;

/// Internal forces at one sampled position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramSample {
    pub position: f64,
    pub shear: f64,
    pub moment: f64,
    pub torque: f64,
}

/// Column-oriented shear and moment diagrams for plotting
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagrams {
    pub positions: Vec<f64>,
    pub shear: Vec<f64>,
    pub moment: Vec<f64>,
}

/// Column-oriented torque diagram
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TorsorDiagram {
    pub positions: Vec<f64>,
    pub values: Vec<f64>,
}

/// A solved beam ready to be swept
#[derive(Debug, Clone, Copy)]
pub struct BeamSweep<'a> {
    length: f64,
    support_c: Option<f64>,
    torsor: f64,
    reactions: ReactionSet,
    loads: &'a LoadSet,
}

impl<'a> BeamSweep<'a> {
    pub fn new(
        length: f64,
        support_c: Option<f64>,
        torsor: f64,
        reactions: ReactionSet,
        loads: &'a LoadSet,
    ) -> Self {
        BeamSweep {
            length,
            support_c,
            torsor,
            reactions,
            loads,
        }
    }

    /// Shear V and moment M at position `x`
    pub fn internal_forces_at(&self, x: f64) -> (f64, f64) {
        let r = &self.reactions;
        let mut v = r.a;
        let mut m = r.a * x + self.torsor;

        if let Some(c) = self.support_c {
            if x >= c {
                v += r.c;
                m += r.c * (x - c);
            }
        }

        if x >= self.length {
            v += r.b;
            m += r.b * (x - self.length);
        }

        for load in &self.loads.point_loads {
            if x > load.position {
                v -= load.magnitude;
                m -= load.magnitude * (x - load.position);
            }
        }

        for load in &self.loads.distributed_loads {
            if x > load.start {
                if x <= load.end {
                    let span = x - load.start;
                    v -= load.intensity * span;
                    m -= load.intensity * span * span / 2.0;
                } else {
                    let total = load.length();
                    v -= load.intensity * total;
                    m -= load.intensity * total * (x - load.centroid());
                }
            }
        }

        (v, m)
    }

    /// Shear at `x`
    pub fn shear_at(&self, x: f64) -> f64 {
        self.internal_forces_at(x).0
    }

    /// Bending moment at `x`, including the applied torque offset
    pub fn moment_at(&self, x: f64) -> f64 {
        self.internal_forces_at(x).1
    }

    /// Internal torque at `x`.
    ///
    /// No torsional loads are modeled separately, so the torque carried past
    /// a section is the applied torque plus the twist induced by the
    /// reactions and loads behind it, the same accumulation as the moment.
    pub fn torsor_at(&self, x: f64) -> f64 {
        self.moment_at(x)
    }

    /// Sample `count + 1` evenly spaced positions over `[0, L]`
    pub fn sample(&self, count: usize) -> Vec<DiagramSample> {
        sample_positions(self.length, count)
            .into_iter()
            .map(|x| {
                let (shear, moment) = self.internal_forces_at(x);
                let sample = DiagramSample {
                    position: x,
                    shear,
                    moment,
                    torque: self.torsor_at(x),
                };
                log::trace!("x={:.6} V={:.6} M={:.6}", x, shear, moment);
                sample
            })
            .collect()
    }
}

/// Split samples into the column layout used by the response payload
pub fn to_columns(samples: &[DiagramSample]) -> (Diagrams, TorsorDiagram) {
    let positions: Vec<f64> = samples.iter().map(|s| s.position).collect();
    let diagrams = Diagrams {
        positions: positions.clone(),
        shear: samples.iter().map(|s| s.shear).collect(),
        moment: samples.iter().map(|s| s.moment).collect(),
    };
    let torsor = TorsorDiagram {
        positions,
        values: samples.iter().map(|s| s.torque).collect(),
    };
    (diagrams, torsor)
}
