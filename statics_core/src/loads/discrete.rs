//! Discrete Load Types
//!
//! Point loads and uniformly distributed loads acting transversally on the
//! beam. Each load reduces to a [`Resultant`]: one force and its line of
//! action measured from support A.
//!
//! Sign convention: positive magnitude/intensity acts downward.

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Labels arrive from a form: `null`, missing and padded strings all occur.
fn trimmed_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.map(|s| s.trim().to_string()).unwrap_or_default())
}

fn require_finite(field: String, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ))
    }
}

fn require_on_beam(field: String, value: f64, length: f64) -> CalcResult<()> {
    if (0.0..=length).contains(&value) {
        Ok(())
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Position must lie within the beam [0, {}]", length),
        ))
    }
}

/// Resultant force of a load and its line of action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resultant {
    /// Force (N), positive downward
    pub force: f64,
    /// Distance of the line of action from support A (m)
    pub position: f64,
}

impl Resultant {
    /// Moment of this resultant about x = 0
    pub fn moment_about_origin(&self) -> f64 {
        self.force * self.position
    }
}

// ============================================================================
// Point Load
// ============================================================================

/// Concentrated load at a single position
///
/// ## JSON Example
///
/// ```json
/// { "label": "P1", "position": 5.0, "magnitude": 100.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Optional descriptive label
    #[serde(default, deserialize_with = "trimmed_label")]
    pub label: String,
    /// Distance from support A (m)
    pub position: f64,
    /// Load magnitude (N), positive downward
    pub magnitude: f64,
}

impl PointLoad {
    /// Create an unlabeled point load
    pub fn new(position: f64, magnitude: f64) -> Self {
        PointLoad {
            label: String::new(),
            position,
            magnitude,
        }
    }

    /// Set the label and return self (builder pattern)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into().trim().to_string();
        self
    }

    /// A point load is its own resultant
    pub fn resultant(&self) -> Resultant {
        Resultant {
            force: self.magnitude,
            position: self.position,
        }
    }

    /// Validate against a beam of `length`. `index` is used in the field path.
    pub fn validate(&self, index: usize, length: f64) -> CalcResult<()> {
        let field = |name: &str| format!("point_loads[{}].{}", index, name);
        require_finite(field("position"), self.position)?;
        require_finite(field("magnitude"), self.magnitude)?;
        require_on_beam(field("position"), self.position, length)
    }
}

// ============================================================================
// Distributed Load
// ============================================================================

/// Uniformly distributed load over `[start, end]`
///
/// ## JSON Example
///
/// ```json
/// { "label": "UDL", "start": 0.0, "end": 10.0, "intensity": 10.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Optional descriptive label
    #[serde(default, deserialize_with = "trimmed_label")]
    pub label: String,
    /// Start of the loaded span from support A (m)
    pub start: f64,
    /// End of the loaded span from support A (m)
    pub end: f64,
    /// Intensity (N/m), positive downward
    pub intensity: f64,
}

impl DistributedLoad {
    /// Create an unlabeled distributed load
    pub fn new(start: f64, end: f64, intensity: f64) -> Self {
        DistributedLoad {
            label: String::new(),
            start,
            end,
            intensity,
        }
    }

    /// Set the label and return self (builder pattern)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into().trim().to_string();
        self
    }

    /// Loaded length `end - start`
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Total force `intensity * (end - start)`
    pub fn equivalent_force(&self) -> f64 {
        self.intensity * self.length()
    }

    /// Midpoint of the loaded span
    pub fn centroid(&self) -> f64 {
        self.start + self.length() / 2.0
    }

    /// Equivalent force acting at the centroid
    pub fn resultant(&self) -> Resultant {
        Resultant {
            force: self.equivalent_force(),
            position: self.centroid(),
        }
    }

    /// Validate against a beam of `length`. `index` is used in the field path.
    pub fn validate(&self, index: usize, length: f64) -> CalcResult<()> {
        let field = |name: &str| format!("distributed_loads[{}].{}", index, name);
        require_finite(field("start"), self.start)?;
        require_finite(field("end"), self.end)?;
        require_finite(field("intensity"), self.intensity)?;
        if self.end <= self.start {
            return Err(CalcError::invalid_input(
                field("end"),
                self.end.to_string(),
                format!("End must be greater than start ({})", self.start),
            ));
        }
        require_on_beam(field("start"), self.start, length)?;
        require_on_beam(field("end"), self.end, length)
    }
}

/// Normalized echo of a distributed load, including derived quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoadSummary {
    pub label: String,
    pub start: f64,
    pub end: f64,
    pub intensity: f64,
    pub equivalent_force: f64,
    pub centroid: f64,
}

impl From<&DistributedLoad> for DistributedLoadSummary {
    fn from(load: &DistributedLoad) -> Self {
        DistributedLoadSummary {
            label: load.label.clone(),
            start: load.start,
            end: load.end,
            intensity: load.intensity,
            equivalent_force: load.equivalent_force(),
            centroid: load.centroid(),
        }
    }
}
