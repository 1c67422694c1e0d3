//! Helpers shared by the truss and frame solvers.

use std::collections::HashMap;

use nalgebra::{DMatrix, DVector};

use crate::errors::{CalcError, CalcResult};

/// Smallest singular value, relative to the largest, below which a system
/// is treated as singular
const CONDITION_LIMIT: f64 = 1e-12;

/// Map node ids to their index, rejecting duplicates and bad coordinates
pub(crate) fn index_nodes(
    points: impl Iterator<Item = (u32, f64, f64)>,
) -> CalcResult<HashMap<u32, usize>> {
    let mut index = HashMap::new();
    for (i, (id, x, y)) in points.enumerate() {
        for (name, value) in [("x", x), ("y", y)] {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    format!("nodes[{}].{}", i, name),
                    value.to_string(),
                    "Coordinate must be a finite number",
                ));
            }
        }
        if index.insert(id, i).is_some() {
            return Err(CalcError::invalid_input(
                format!("nodes[{}].id", i),
                id.to_string(),
                "Node ids must be unique",
            ));
        }
    }
    if index.is_empty() {
        return Err(CalcError::missing_field("nodes"));
    }
    Ok(index)
}

pub(crate) fn lookup_node(
    index: &HashMap<u32, usize>,
    id: u32,
    field: String,
) -> CalcResult<usize> {
    index
        .get(&id)
        .copied()
        .ok_or_else(|| CalcError::invalid_input(field, id.to_string(), "Unknown node id"))
}

/// Direction cosines and length of the segment from `(xi, yi)` to `(xj, yj)`
pub(crate) fn direction(
    xi: f64,
    yi: f64,
    xj: f64,
    yj: f64,
    field: impl FnOnce() -> String,
) -> CalcResult<(f64, f64, f64)> {
    let (dx, dy) = (xj - xi, yj - yi);
    let length = dx.hypot(dy);
    if length <= f64::EPSILON {
        return Err(CalcError::invalid_input(
            field(),
            length.to_string(),
            "Member has zero length",
        ));
    }
    Ok((dx / length, dy / length, length))
}

/// Solve `a·x = b`, returning `None` when `a` is singular or ill-conditioned.
///
/// LU alone only catches exact zero pivots. A mechanism in floating point
/// usually leaves a tiny pivot instead, so the singular values are checked
/// first.
pub(crate) fn solve_nonsingular(a: DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
    let sv = a.singular_values();
    let max = sv.max();
    if !(max > 0.0) || sv.min() < CONDITION_LIMIT * max {
        return None;
    }
    a.lu()
        .solve(b)
        .filter(|x| x.iter().all(|v| v.is_finite()))
}
