//! # Plane Truss (method of joints)
//!
//! Every bar is a two-force member, so each joint contributes two equilibrium
//! equations (ΣFx = 0, ΣFy = 0). The unknowns are one axial force per bar plus
//! one reaction per restrained direction. The truss is solvable when those
//! counts match and the equilibrium matrix is nonsingular.
//!
//! Bar forces are positive in tension.
//!
//! ## Example
//!
//! ```rust
//! use statics_core::calculations::truss::{solve_truss, TrussBar, TrussModel, TrussNode};
//!
//! // Symmetric triangle, 10 N down at the apex
//! let model = TrussModel {
//!     nodes: vec![
//!         TrussNode::new(1, 0.0, 0.0).pinned(),
//!         TrussNode::new(2, 4.0, 0.0).roller_y(),
//!         TrussNode::new(3, 2.0, 2.0).with_load(0.0, -10.0),
//!     ],
//!     bars: vec![TrussBar::new(1, 2), TrussBar::new(2, 3), TrussBar::new(1, 3)],
//! };
//! let result = solve_truss(&model).unwrap();
//! assert!((result.bar_forces[0].force - 5.0).abs() < 1e-9);
//! ```

use std::collections::HashMap;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use super::structure::{direction, index_nodes, lookup_node, solve_nonsingular};
use crate::errors::{CalcError, CalcResult};

/// A truss joint with an applied load and optional restraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrussNode {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub load_x: f64,
    #[serde(default)]
    pub load_y: f64,
    #[serde(default)]
    pub restrain_x: bool,
    #[serde(default)]
    pub restrain_y: bool,
}

impl TrussNode {
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        TrussNode {
            id,
            x,
            y,
            load_x: 0.0,
            load_y: 0.0,
            restrain_x: false,
            restrain_y: false,
        }
    }

    pub fn with_load(mut self, load_x: f64, load_y: f64) -> Self {
        self.load_x = load_x;
        self.load_y = load_y;
        self
    }

    /// Restrain both directions
    pub fn pinned(mut self) -> Self {
        self.restrain_x = true;
        self.restrain_y = true;
        self
    }

    /// Restrain the vertical direction only
    pub fn roller_y(mut self) -> Self {
        self.restrain_y = true;
        self
    }

    fn reaction_count(&self) -> usize {
        usize::from(self.restrain_x) + usize::from(self.restrain_y)
    }
}

/// A bar joining two nodes by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrussBar {
    pub start: u32,
    pub end: u32,
}

impl TrussBar {
    pub fn new(start: u32, end: u32) -> Self {
        TrussBar { start, end }
    }
}

/// Truss input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrussModel {
    pub nodes: Vec<TrussNode>,
    pub bars: Vec<TrussBar>,
}

/// Axial force in one bar, tension positive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarForce {
    pub start: u32,
    pub end: u32,
    pub force: f64,
}

/// Support reaction at a restrained node. Unrestrained components are 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrussReaction {
    pub node: u32,
    pub rx: f64,
    pub ry: f64,
}

/// Truss result: bar forces in input order, reactions in node order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrussAnalysis {
    pub bar_forces: Vec<BarForce>,
    pub reactions: Vec<TrussReaction>,
}

impl TrussModel {
    fn node_index(&self) -> CalcResult<HashMap<u32, usize>> {
        for (i, node) in self.nodes.iter().enumerate() {
            for (name, value) in [("load_x", node.load_x), ("load_y", node.load_y)] {
                if !value.is_finite() {
                    return Err(CalcError::invalid_input(
                        format!("nodes[{}].{}", i, name),
                        value.to_string(),
                        "Load must be a finite number",
                    ));
                }
            }
        }
        index_nodes(self.nodes.iter().map(|n| (n.id, n.x, n.y)))
    }
}

/// Solve bar forces and reactions.
///
/// Validation failures name the offending node or bar. A truss whose
/// unknown count differs from its equation count, or whose equilibrium
/// matrix is singular, is rejected as unstable or indeterminate.
pub fn solve_truss(model: &TrussModel) -> CalcResult<TrussAnalysis> {
    let index = model.node_index()?;
    if model.bars.is_empty() {
        return Err(CalcError::missing_field("bars"));
    }

    let equations = 2 * model.nodes.len();
    let reactions: usize = model.nodes.iter().map(TrussNode::reaction_count).sum();
    let unknowns = model.bars.len() + reactions;
    if unknowns != equations {
        return Err(CalcError::invalid_input(
            "bars",
            format!("{} bars + {} reactions", model.bars.len(), reactions),
            format!(
                "Method of joints needs as many unknowns as equations ({}); the truss is {}",
                equations,
                if unknowns < equations { "unstable" } else { "statically indeterminate" }
            ),
        ));
    }

    let mut a = DMatrix::<f64>::zeros(equations, unknowns);
    let mut b = DVector::<f64>::zeros(equations);

    for (k, bar) in model.bars.iter().enumerate() {
        let i = lookup_node(&index, bar.start, format!("bars[{}].start", k))?;
        let j = lookup_node(&index, bar.end, format!("bars[{}].end", k))?;
        let (ni, nj) = (&model.nodes[i], &model.nodes[j]);
        let (c, s, _) = direction(ni.x, ni.y, nj.x, nj.y, || format!("bars[{}]", k))?;
        a[(2 * i, k)] = c;
        a[(2 * i + 1, k)] = s;
        a[(2 * j, k)] = -c;
        a[(2 * j + 1, k)] = -s;
    }

    let mut col = model.bars.len();
    for (i, node) in model.nodes.iter().enumerate() {
        if node.restrain_x {
            a[(2 * i, col)] = 1.0;
            col += 1;
        }
        if node.restrain_y {
            a[(2 * i + 1, col)] = 1.0;
            col += 1;
        }
        b[2 * i] = -node.load_x;
        b[2 * i + 1] = -node.load_y;
    }

    let x = solve_nonsingular(a, &b).ok_or_else(|| {
        CalcError::invalid_input(
            "bars",
            format!("{} bars", model.bars.len()),
            "Truss is geometrically unstable (singular equilibrium matrix)",
        )
    })?;

    let bar_forces = model
        .bars
        .iter()
        .enumerate()
        .map(|(k, bar)| BarForce {
            start: bar.start,
            end: bar.end,
            force: x[k],
        })
        .collect();

    let mut col = model.bars.len();
    let mut support_reactions = Vec::new();
    for node in &model.nodes {
        if node.reaction_count() == 0 {
            continue;
        }
        let mut take = |restrained: bool| {
            if restrained {
                col += 1;
                x[col - 1]
            } else {
                0.0
            }
        };
        let rx = take(node.restrain_x);
        let ry = take(node.restrain_y);
        support_reactions.push(TrussReaction { node: node.id, rx, ry });
    }

    log::debug!(
        "solved truss: {} nodes, {} bars, {} reactions",
        model.nodes.len(),
        model.bars.len(),
        reactions
    );

    Ok(TrussAnalysis {
        bar_forces,
        reactions: support_reactions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::SQRT_2;

    fn triangle() -> TrussModel {
        TrussModel {
            nodes: vec![
                TrussNode::new(1, 0.0, 0.0).pinned(),
                TrussNode::new(2, 4.0, 0.0).roller_y(),
                TrussNode::new(3, 2.0, 2.0).with_load(0.0, -10.0),
            ],
            bars: vec![TrussBar::new(1, 2), TrussBar::new(2, 3), TrussBar::new(1, 3)],
        }
    }

    #[test]
    fn test_triangle_by_hand() {
        let result = solve_truss(&triangle()).unwrap();
        let f: Vec<f64> = result.bar_forces.iter().map(|b| b.force).collect();
        // Bottom chord in tension, both diagonals in compression
        assert_relative_eq!(f[0], 5.0, epsilon = 1e-9);
        assert_relative_eq!(f[1], -10.0 / SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(f[2], -10.0 / SQRT_2, epsilon = 1e-9);

        assert_eq!(result.reactions.len(), 2);
        assert_eq!(result.reactions[0].node, 1);
        assert_relative_eq!(result.reactions[0].rx, 0.0, epsilon = 1e-9);
        assert_relative_eq!(result.reactions[0].ry, 5.0, epsilon = 1e-9);
        assert_eq!(result.reactions[1].node, 2);
        assert_eq!(result.reactions[1].rx, 0.0);
        assert_relative_eq!(result.reactions[1].ry, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_horizontal_load_reacts_at_pin() {
        let mut model = triangle();
        model.nodes[2] = model.nodes[2].clone().with_load(6.0, 0.0);
        let result = solve_truss(&model).unwrap();
        let r = &result.reactions;
        assert_relative_eq!(r[0].rx, -6.0, epsilon = 1e-9);
        // Overturning: 6 N at height 2 over a 4 m base lifts the pin
        assert_relative_eq!(r[0].ry, -3.0, epsilon = 1e-9);
        assert_relative_eq!(r[1].ry, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let mut model = triangle();
        model.bars.pop();
        let err = solve_truss(&model).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("unstable"));
    }

    #[test]
    fn test_collinear_truss_is_singular() {
        let model = TrussModel {
            nodes: vec![
                TrussNode::new(1, 0.0, 0.0).pinned(),
                TrussNode::new(2, 1.0, 0.0).with_load(0.0, -1.0),
                TrussNode::new(3, 2.0, 0.0).roller_y(),
            ],
            bars: vec![TrussBar::new(1, 2), TrussBar::new(2, 3), TrussBar::new(1, 3)],
        };
        let err = solve_truss(&model).unwrap_err();
        assert!(err.to_string().contains("singular"));
    }

    #[test]
    fn test_unknown_node_and_duplicates() {
        let mut model = triangle();
        model.bars[1].end = 9;
        assert!(solve_truss(&model).unwrap_err().to_string().contains("bars[1].end"));

        let mut model = triangle();
        model.nodes[2].id = 1;
        assert!(solve_truss(&model).unwrap_err().to_string().contains("nodes[2].id"));
    }

    #[test]
    fn test_zero_length_bar() {
        let mut model = triangle();
        model.nodes[2].x = 0.0;
        model.nodes[2].y = 0.0;
        let err = solve_truss(&model).unwrap_err();
        assert!(err.to_string().contains("bars[2]"));
    }

    #[test]
    fn test_json_shape() {
        let model: TrussModel = serde_json::from_str(
            r#"{"nodes": [{"id": 1, "x": 0, "y": 0, "restrain_x": true}], "bars": []}"#,
        )
        .unwrap();
        assert_eq!(model.nodes[0].load_y, 0.0);
        assert!(model.nodes[0].restrain_x && !model.nodes[0].restrain_y);
        assert_eq!(solve_truss(&model).unwrap_err(), CalcError::missing_field("bars"));
    }
}
