//! Small mechanics helpers that sit beside the beam solver.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::numeric::is_negligible;

/// A point mass in space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMass {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Mass (or weight); any consistent unit
    pub m: f64,
}

/// Mass-weighted centroid of a point cloud
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterOfMass3d {
    pub x_cm: f64,
    pub y_cm: f64,
    pub z_cm: f64,
}

/// Center of mass of a set of point masses.
///
/// ```rust
/// use statics_core::calculations::mass::{center_of_mass_3d, PointMass};
///
/// let cm = center_of_mass_3d(&[
///     PointMass { x: 0.0, y: 0.0, z: 0.0, m: 1.0 },
///     PointMass { x: 2.0, y: 4.0, z: 6.0, m: 1.0 },
/// ]).unwrap();
/// assert_eq!((cm.x_cm, cm.y_cm, cm.z_cm), (1.0, 2.0, 3.0));
/// ```
pub fn center_of_mass_3d(points: &[PointMass]) -> CalcResult<CenterOfMass3d> {
    if points.is_empty() {
        return Err(CalcError::missing_field("points"));
    }
    for (i, p) in points.iter().enumerate() {
        for (name, value) in [("x", p.x), ("y", p.y), ("z", p.z), ("m", p.m)] {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    format!("points[{}].{}", i, name),
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
        }
    }

    let total: f64 = points.iter().map(|p| p.m).sum();
    if is_negligible(total) {
        return Err(CalcError::invalid_input(
            "points",
            total.to_string(),
            "Total mass cannot be zero",
        ));
    }

    Ok(CenterOfMass3d {
        x_cm: points.iter().map(|p| p.x * p.m).sum::<f64>() / total,
        y_cm: points.iter().map(|p| p.y * p.m).sum::<f64>() / total,
        z_cm: points.iter().map(|p| p.z * p.m).sum::<f64>() / total,
    })
}

/// Force whose moment arm `distance` produces `torsor`: F = T / d
pub fn force_from_torsor(torsor: f64, distance: f64) -> CalcResult<f64> {
    if !torsor.is_finite() {
        return Err(CalcError::invalid_input(
            "torsor",
            torsor.to_string(),
            "Value must be a finite number",
        ));
    }
    if !distance.is_finite() || distance == 0.0 {
        return Err(CalcError::invalid_input(
            "distance",
            distance.to_string(),
            "Distance must be a nonzero finite number",
        ));
    }
    Ok(torsor / distance)
}
