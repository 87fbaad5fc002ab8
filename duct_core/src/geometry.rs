//! # Duct Geometry
//!
//! Cross-sectional area, perimeter and hydraulic diameter for rectangular
//! and round ducts. Dimensions come in inches; area and perimeter go out in
//! square feet and feet.
//!
//! ```text
//! Rectangular:  A = W·H / 144          P = 2(W + H) / 12
//! Circular:     A = π·D² / (4·144)     P = π·D / 12
//! Hydraulic:    Dh = 4A / P  (ft → in, ×12)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use duct_core::geometry::{compute_geometry, DuctShape};
//!
//! let shape = DuctShape::rectangular(12.0, 8.0);
//! let geom = compute_geometry(&shape).unwrap();
//! assert!((geom.area_ft2 - 0.6667).abs() < 1e-3);
//! assert!((geom.hydraulic_diameter_in() - 9.6).abs() < 1e-9);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Feet, Inches, SqFt, SqIn};

/// Duct cross-section with its dimensions in inches.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Rectangular", "width_in": 12.0, "height_in": 8.0 }
/// { "type": "Circular", "diameter_in": 10.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DuctShape {
    /// Rectangular duct, width × height
    Rectangular { width_in: f64, height_in: f64 },
    /// Round duct
    Circular { diameter_in: f64 },
}

impl DuctShape {
    /// Rectangular duct from width and height in inches
    pub fn rectangular(width_in: f64, height_in: f64) -> Self {
        DuctShape::Rectangular { width_in, height_in }
    }

    /// Round duct from diameter in inches
    pub fn circular(diameter_in: f64) -> Self {
        DuctShape::Circular { diameter_in }
    }

    /// Shape without dimensions
    pub fn kind(&self) -> ShapeKind {
        match self {
            DuctShape::Rectangular { .. } => ShapeKind::Rectangular,
            DuctShape::Circular { .. } => ShapeKind::Circular,
        }
    }

    /// Largest dimension, which governs sheet gauge selection
    pub fn governing_dimension_in(&self) -> f64 {
        match *self {
            DuctShape::Rectangular { width_in, height_in } => width_in.max(height_in),
            DuctShape::Circular { diameter_in } => diameter_in,
        }
    }

    /// Check that every dimension the shape needs is finite and positive
    pub fn validate(&self) -> CalcResult<()> {
        let kind = self.kind();
        let dims: Vec<(&str, f64)> = match *self {
            DuctShape::Rectangular { width_in, height_in } => vec![("width_in", width_in), ("height_in", height_in)],
            DuctShape::Circular { diameter_in } => vec![("diameter_in", diameter_in)],
        };
        for (name, value) in dims {
            if !value.is_finite() {
                return Err(CalcError::geometry(kind.key(), format!("{} must be a number, got {}", name, value)));
            }
            if value <= 0.0 {
                return Err(CalcError::geometry(kind.key(), format!("{} must be > 0, got {}", name, value)));
            }
        }
        Ok(())
    }
}

/// Duct shape tag, used where dimensions don't matter (spacing tables)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangular,
    Circular,
}

impl ShapeKind {
    /// Lowercase key for messages and form data
    pub fn key(&self) -> &'static str {
        match self {
            ShapeKind::Rectangular => "rectangular",
            ShapeKind::Circular => "circular",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeKind::Rectangular => write!(f, "Rectangular"),
            ShapeKind::Circular => write!(f, "Round"),
        }
    }
}

/// Cross-section area and wetted perimeter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryResult {
    /// Cross-sectional area (ft²)
    pub area_ft2: f64,
    /// Perimeter (ft)
    pub perimeter_ft: f64,
}

impl GeometryResult {
    /// Hydraulic diameter Dh = 4A/P, in inches
    pub fn hydraulic_diameter_in(&self) -> f64 {
        let dh = Feet(4.0 * self.area_ft2 / self.perimeter_ft);
        Inches::from(dh).value()
    }
}

/// Compute area and perimeter for a duct cross-section.
///
/// # Errors
///
/// [`CalcError::Geometry`] if a required dimension is non-finite or ≤ 0.
pub fn compute_geometry(shape: &DuctShape) -> CalcResult<GeometryResult> {
    shape.validate()?;

    let (area, perimeter) = match *shape {
        DuctShape::Rectangular { width_in, height_in } => {
            let area = SqFt::from(SqIn(width_in * height_in));
            let perimeter = Feet::from(Inches(2.0 * (width_in + height_in)));
            (area, perimeter)
        }
        DuctShape::Circular { diameter_in } => {
            let area = SqFt::from(SqIn(PI * diameter_in.powi(2) / 4.0));
            let perimeter = Feet::from(Inches(PI * diameter_in));
            (area, perimeter)
        }
    };

    Ok(GeometryResult {
        area_ft2: area.value(),
        perimeter_ft: perimeter.value(),
    })
}
