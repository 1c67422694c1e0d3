//! # Cross-Section Property Formulas
//!
//! Geometric properties of simple cross-sections. These are independent of
//! the beam solver and share only the request/response pattern.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `Ix` = Second moment of area about the horizontal centroidal axis
//! - `Iy` = Second moment of area about the vertical centroidal axis
//! - `b` = Width of section
//! - `h` = Height of section
//!
//! Coordinates are measured from the bottom-left corner of the section.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::numeric::is_negligible;

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Dimension must be a positive finite number",
        ))
    }
}

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Calculate cross-sectional area for rectangular section
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × h
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Centroid of a rectangle measured from its bottom-left corner: (b/2, h/2)
#[inline]
pub fn rectangular_centroid(b: f64, h: f64) -> (f64, f64) {
    (b / 2.0, h / 2.0)
}

/// Second moment of area about the horizontal centroidal axis
///
/// # Formula
/// Ix = bh³/12
///
/// # Example
/// ```rust
/// use statics_core::equations::section::rectangular_ix;
///
/// let ix = rectangular_ix(0.2, 0.3);
/// assert!((ix - 4.5e-4).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_ix(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Second moment of area about the vertical centroidal axis
///
/// # Formula
/// Iy = hb³/12
#[inline]
pub fn rectangular_iy(b: f64, h: f64) -> f64 {
    h * b.powi(3) / 12.0
}

/// Rectangular cross-section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangularSection {
    pub width: f64,
    pub height: f64,
}

/// Properties of a rectangular section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    pub area: f64,
    pub centroid_x: f64,
    pub centroid_y: f64,
    pub ix: f64,
    pub iy: f64,
}

impl RectangularSection {
    pub fn new(width: f64, height: f64) -> Self {
        RectangularSection { width, height }
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)
    }

    /// Area, centroid and second moments of area
    pub fn properties(&self) -> CalcResult<SectionProperties> {
        self.validate()?;
        let (b, h) = (self.width, self.height);
        let (centroid_x, centroid_y) = rectangular_centroid(b, h);
        Ok(SectionProperties {
            area: rectangular_area(b, h),
            centroid_x,
            centroid_y,
            ix: rectangular_ix(b, h),
            iy: rectangular_iy(b, h),
        })
    }
}

// =============================================================================
// BUILT-UP I-SECTION
// Three stacked rectangles, parallel-axis theorem
// =============================================================================

/// I-section built from a top flange, a web and a bottom flange
///
/// ```text
///     ┌───────────────┐  top flange  (b1 × h1)
///     └─────┐   ┌─────┘
///           │   │        web         (b2 × h2)
///     ┌─────┘   └─────┐
///     └───────────────┘  bottom flange (b3 × h3)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ISection {
    pub top_width: f64,
    pub top_height: f64,
    pub web_width: f64,
    pub web_height: f64,
    pub bottom_width: f64,
    pub bottom_height: f64,
}

/// Properties of a built-up I-section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ISectionProperties {
    pub area: f64,
    /// Height of the centroid above the base
    pub centroid_y: f64,
    /// Strong-axis second moment of area about the centroid
    pub ix: f64,
}

impl ISection {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("top_width", self.top_width)?;
        require_positive("top_height", self.top_height)?;
        require_positive("web_width", self.web_width)?;
        require_positive("web_height", self.web_height)?;
        require_positive("bottom_width", self.bottom_width)?;
        require_positive("bottom_height", self.bottom_height)
    }

    /// # Formula
    /// y_cg = Σ(Aᵢ·yᵢ) / ΣAᵢ
    ///
    /// I = Σ(bᵢhᵢ³/12 + Aᵢ(yᵢ − y_cg)²)
    pub fn properties(&self) -> CalcResult<ISectionProperties> {
        self.validate()?;
        let h3 = self.bottom_height;
        let h2 = self.web_height;
        let h1 = self.top_height;

        // (width, height, centroid height above base) for each part
        let parts = [
            (self.top_width, h1, h3 + h2 + h1 / 2.0),
            (self.web_width, h2, h3 + h2 / 2.0),
            (self.bottom_width, h3, h3 / 2.0),
        ];

        let area: f64 = parts.iter().map(|&(b, h, _)| rectangular_area(b, h)).sum();
        let centroid_y = parts
            .iter()
            .map(|&(b, h, y)| rectangular_area(b, h) * y)
            .sum::<f64>()
            / area;
        let ix = parts
            .iter()
            .map(|&(b, h, y)| rectangular_ix(b, h) + rectangular_area(b, h) * (y - centroid_y).powi(2))
            .sum();

        Ok(ISectionProperties { area, centroid_y, ix })
    }
}

// =============================================================================
// COMPOSITE PLANE FIGURES
// =============================================================================

/// Primitive shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Placed by its lower-left corner
    Rectangle,
    /// Right triangle placed by its right-angle corner
    Triangle,
    /// Placed by its center; `width` is the diameter
    Circle,
}

/// A shape placed in the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedShape {
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl PlacedShape {
    /// Check placement and dimensions; `index` names the shape in error paths
    pub fn validate(&self, index: usize) -> CalcResult<()> {
        for (name, value) in [("x", self.x), ("y", self.y)] {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    format!("shapes[{}].{}", index, name),
                    value.to_string(),
                    "Coordinate must be a finite number",
                ));
            }
        }
        require_positive(&format!("shapes[{}].width", index), self.width)?;
        match self.kind {
            ShapeKind::Circle => Ok(()),
            ShapeKind::Rectangle | ShapeKind::Triangle => {
                require_positive(&format!("shapes[{}].height", index), self.height)
            }
        }
    }

    /// Area and centroid (area, cx, cy)
    pub fn area_and_centroid(&self) -> (f64, f64, f64) {
        match self.kind {
            ShapeKind::Rectangle => (
                self.width * self.height,
                self.x + self.width / 2.0,
                self.y + self.height / 2.0,
            ),
            ShapeKind::Triangle => (
                self.width * self.height / 2.0,
                self.x + self.width / 3.0,
                self.y + self.height / 3.0,
            ),
            ShapeKind::Circle => (
                std::f64::consts::PI * (self.width / 2.0).powi(2),
                self.x,
                self.y,
            ),
        }
    }
}

/// Area-weighted centroid of a composite figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeCentroid {
    pub area: f64,
    pub cx: f64,
    pub cy: f64,
}

/// Centroid of a set of placed shapes.
///
/// ```rust
/// use statics_core::equations::section::{composite_centroid, PlacedShape, ShapeKind};
///
/// let shapes = [
///     PlacedShape { kind: ShapeKind::Rectangle, x: 0.0, y: 0.0, width: 2.0, height: 2.0 },
///     PlacedShape { kind: ShapeKind::Rectangle, x: 2.0, y: 0.0, width: 2.0, height: 2.0 },
/// ];
/// let c = composite_centroid(&shapes).unwrap();
/// assert_eq!((c.area, c.cx, c.cy), (8.0, 2.0, 1.0));
/// ```
pub fn composite_centroid(shapes: &[PlacedShape]) -> CalcResult<CompositeCentroid> {
    if shapes.is_empty() {
        return Err(CalcError::missing_field("shapes"));
    }
    for (i, shape) in shapes.iter().enumerate() {
        shape.validate(i)?;
    }

    let mut area = 0.0;
    let mut moment_x = 0.0;
    let mut moment_y = 0.0;
    for shape in shapes {
        let (a, cx, cy) = shape.area_and_centroid();
        area += a;
        moment_x += cx * a;
        moment_y += cy * a;
    }
    if is_negligible(area) {
        return Err(CalcError::invalid_input(
            "shapes",
            area.to_string(),
            "Total area is zero",
        ));
    }
    Ok(CompositeCentroid {
        area,
        cx: moment_x / area,
        cy: moment_y / area,
    })
}
