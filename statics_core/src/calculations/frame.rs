//! # Plane Frame (direct stiffness method)
//!
//! Each node carries three degrees of freedom (ux, uy, θ). Members are
//! Euler-Bernoulli beam-columns rigidly connected at both ends. The global
//! stiffness matrix is assembled from `Tᵀ·k·T` per member, the free block is
//! solved for displacements, and reactions follow from `R = K·d − F`.
//!
//! Sign convention: forces along +x/+y, moments and rotations counterclockwise.

use nalgebra::{DMatrix, DVector, Matrix6};
use serde::{Deserialize, Serialize};

use super::structure::{direction, index_nodes, lookup_node, solve_nonsingular};
use crate::errors::{CalcError, CalcResult};

const DOF: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameNode {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub load_x: f64,
    #[serde(default)]
    pub load_y: f64,
    #[serde(default)]
    pub moment: f64,
    #[serde(default)]
    pub restrain_x: bool,
    #[serde(default)]
    pub restrain_y: bool,
    #[serde(default)]
    pub restrain_rotation: bool,
}

impl FrameNode {
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        FrameNode {
            id,
            x,
            y,
            load_x: 0.0,
            load_y: 0.0,
            moment: 0.0,
            restrain_x: false,
            restrain_y: false,
            restrain_rotation: false,
        }
    }

    pub fn with_load(mut self, load_x: f64, load_y: f64, moment: f64) -> Self {
        self.load_x = load_x;
        self.load_y = load_y;
        self.moment = moment;
        self
    }

    /// Restrain all three degrees of freedom
    pub fn fixed(mut self) -> Self {
        self.restrain_x = true;
        self.restrain_y = true;
        self.restrain_rotation = true;
        self
    }

    fn restraints(&self) -> [bool; DOF] {
        [self.restrain_x, self.restrain_y, self.restrain_rotation]
    }

    fn loads(&self) -> [f64; DOF] {
        [self.load_x, self.load_y, self.moment]
    }
}

/// Prismatic member between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameMember {
    pub start: u32,
    pub end: u32,
    /// Young's modulus
    #[serde(alias = "E")]
    pub elastic_modulus: f64,
    /// Cross-section area
    #[serde(alias = "A")]
    pub area: f64,
    /// Second moment of area about the bending axis
    #[serde(alias = "I")]
    pub inertia: f64,
}

impl FrameMember {
    pub fn new(start: u32, end: u32, elastic_modulus: f64, area: f64, inertia: f64) -> Self {
        FrameMember {
            start,
            end,
            elastic_modulus,
            area,
            inertia,
        }
    }

    fn validate(&self, index: usize) -> CalcResult<()> {
        for (name, value) in [
            ("elastic_modulus", self.elastic_modulus),
            ("area", self.area),
            ("inertia", self.inertia),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("members[{}].{}", index, name),
                    value.to_string(),
                    "Member property must be a positive finite number",
                ));
            }
        }
        Ok(())
    }

    /// Member stiffness in global axes for direction cosines `(c, s)`
    fn global_stiffness(&self, c: f64, s: f64, length: f64) -> Matrix6<f64> {
        let l = length;
        let ea = self.elastic_modulus * self.area / l;
        let ei = self.elastic_modulus * self.inertia;
        let k1 = 12.0 * ei / l.powi(3);
        let k2 = 6.0 * ei / l.powi(2);
        let k3 = 4.0 * ei / l;
        let k4 = 2.0 * ei / l;

        #[rustfmt::skip]
        let local = Matrix6::from_row_slice(&[
             ea, 0.0, 0.0, -ea, 0.0, 0.0,
            0.0,  k1,  k2, 0.0, -k1,  k2,
            0.0,  k2,  k3, 0.0, -k2,  k4,
            -ea, 0.0, 0.0,  ea, 0.0, 0.0,
            0.0, -k1, -k2, 0.0,  k1, -k2,
            0.0,  k2,  k4, 0.0, -k2,  k3,
        ]);

        #[rustfmt::skip]
        let t = Matrix6::from_row_slice(&[
              c,   s, 0.0, 0.0, 0.0, 0.0,
             -s,   c, 0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0,   c,   s, 0.0,
            0.0, 0.0, 0.0,  -s,   c, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        ]);

        t.transpose() * local * t
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameModel {
    pub nodes: Vec<FrameNode>,
    pub members: Vec<FrameMember>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeDisplacement {
    pub node: u32,
    pub ux: f64,
    pub uy: f64,
    pub rotation: f64,
}

/// Reaction at a node with at least one restraint. Free components are 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameReaction {
    pub node: u32,
    pub rx: f64,
    pub ry: f64,
    pub moment: f64,
}

/// Displacements for every node and reactions at supports, in node order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameAnalysis {
    pub displacements: Vec<NodeDisplacement>,
    pub reactions: Vec<FrameReaction>,
}

/// Solve nodal displacements and support reactions
pub fn solve_frame(model: &FrameModel) -> CalcResult<FrameAnalysis> {
    for (i, node) in model.nodes.iter().enumerate() {
        for (name, value) in ["load_x", "load_y", "moment"].into_iter().zip(node.loads()) {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    format!("nodes[{}].{}", i, name),
                    value.to_string(),
                    "Load must be a finite number",
                ));
            }
        }
    }
    let index = index_nodes(model.nodes.iter().map(|n| (n.id, n.x, n.y)))?;
    if model.members.is_empty() {
        return Err(CalcError::missing_field("members"));
    }

    let n_dof = DOF * model.nodes.len();
    let mut k = DMatrix::<f64>::zeros(n_dof, n_dof);
    let f = DVector::<f64>::from_iterator(n_dof, model.nodes.iter().flat_map(FrameNode::loads));

    for (m, member) in model.members.iter().enumerate() {
        member.validate(m)?;
        let i = lookup_node(&index, member.start, format!("members[{}].start", m))?;
        let j = lookup_node(&index, member.end, format!("members[{}].end", m))?;
        let (ni, nj) = (&model.nodes[i], &model.nodes[j]);
        let (c, s, length) = direction(ni.x, ni.y, nj.x, nj.y, || format!("members[{}]", m))?;
        let kg = member.global_stiffness(c, s, length);

        let blocks = [DOF * i, DOF * j];
        for (a, &row) in blocks.iter().enumerate() {
            for (b, &col) in blocks.iter().enumerate() {
                let mut target = k.fixed_view_mut::<DOF, DOF>(row, col);
                target += kg.fixed_view::<DOF, DOF>(DOF * a, DOF * b);
            }
        }
    }

    let free: Vec<usize> = model
        .nodes
        .iter()
        .enumerate()
        .flat_map(|(i, node)| {
            node.restraints()
                .into_iter()
                .enumerate()
                .filter(|&(_, restrained)| !restrained)
                .map(move |(d, _)| DOF * i + d)
        })
        .collect();

    let mut d = DVector::<f64>::zeros(n_dof);
    if !free.is_empty() {
        let k_ff = k.select_rows(&free).select_columns(&free);
        let f_f = f.select_rows(&free);
        let d_f = solve_nonsingular(k_ff, &f_f).ok_or_else(|| {
            CalcError::invalid_input(
                "members",
                format!("{} free degrees of freedom", free.len()),
                "Frame is unstable (singular stiffness matrix)",
            )
        })?;
        for (&dof, value) in free.iter().zip(d_f.iter()) {
            d[dof] = *value;
        }
    }

    let r = &k * &d - &f;

    let displacements = model
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| NodeDisplacement {
            node: node.id,
            ux: d[DOF * i],
            uy: d[DOF * i + 1],
            rotation: d[DOF * i + 2],
        })
        .collect();

    let reactions = model
        .nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.restraints().contains(&true))
        .map(|(i, node)| {
            let [fx, fy, fm] = node.restraints();
            let pick = |restrained: bool, dof: usize| if restrained { r[DOF * i + dof] } else { 0.0 };
            FrameReaction {
                node: node.id,
                rx: pick(fx, 0),
                ry: pick(fy, 1),
                moment: pick(fm, 2),
            }
        })
        .collect();

    log::debug!(
        "solved frame: {} nodes, {} members, {} free dofs",
        model.nodes.len(),
        model.members.len(),
        free.len()
    );

    Ok(FrameAnalysis {
        displacements,
        reactions,
    })
}
