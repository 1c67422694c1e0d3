//! # Section Equations
//!
//! Geometric cross-section formulas. Independent of the beam solver.
//!
//! ## Modules
//!
//! - [`section`] - Rectangle, built-up I-section and composite centroids

pub mod section;

pub use section::{
    composite_centroid, rectangular_area, rectangular_centroid, rectangular_ix, rectangular_iy,
    ISection, ISectionProperties, PlacedShape, RectangularSection, SectionProperties, ShapeKind,
};
