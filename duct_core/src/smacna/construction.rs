//! # Construction Lookups
//!
//! Picks the minimum sheet gauge, transverse joint spacing and hanger
//! spacing for a duct from the tables in [`super::tables`].
//!
//! ## Gauge selection
//!
//! 1. Governing dimension: `max(W, H)` for rectangular, `D` for round.
//! 2. First bucket of the pressure-class table covering that dimension.
//! 3. Thicken for the application (exhaust: 2 gauge numbers).
//! 4. Clamp into [18, 26].
//!
//! ## Example
//!
//! ```rust
//! use duct_core::smacna::{select_gauge, Application, Gauge, PressureClass};
//!
//! assert_eq!(select_gauge(PressureClass::Low, 12.0, Application::Supply), Gauge(24));
//! assert_eq!(select_gauge(PressureClass::Low, 12.0, Application::Exhaust), Gauge(22));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{DuctShape, ShapeKind};

use super::tables::{
    self, DEFAULT_HANGER_SPACING_FT, DEFAULT_JOINT_SPACING_FT, HANGER_SPACING_TIERS, JOINT_SPACING_TIERS,
};
use super::{Application, Gauge, PressureClass, THINNEST_GAUGE};

/// Construction requirements for one duct run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionSpec {
    /// Minimum sheet gauge
    pub gauge: Gauge,
    /// Maximum transverse joint spacing (ft)
    pub joint_spacing_ft: f64,
    /// Maximum hanger spacing (ft)
    pub hanger_spacing_ft: f64,
    /// Recommended longitudinal seam
    pub seam_type: String,
}

/// Minimum gauge for a duct of `dimension_in` (largest side or diameter).
pub fn select_gauge(pressure_class: PressureClass, dimension_in: f64, application: Application) -> Gauge {
    let base = match tables::lookup_gauge(pressure_class, dimension_in) {
        Some(gauge) => gauge,
        None => {
            tracing::warn!(dimension_in, ?pressure_class, "no gauge bucket matched, using thinnest gauge");
            Gauge(THINNEST_GAUGE)
        }
    };
    base.toughened(application.gauge_adjustment_steps())
}

/// [`select_gauge`] for partially filled form values.
///
/// # Errors
///
/// [`CalcError::ParameterMissing`] when any parameter is `None`, and
/// [`CalcError::InvalidInput`] when the duct size is not a positive number.
pub fn select_gauge_from_parts(
    pressure_class: Option<PressureClass>,
    duct_size_in: Option<f64>,
    application: Option<Application>,
) -> CalcResult<Gauge> {
    let pressure_class = pressure_class.ok_or_else(|| CalcError::parameter_missing("pressure_class"))?;
    let size = duct_size_in.ok_or_else(|| CalcError::parameter_missing("duct_size_in"))?;
    let application = application.ok_or_else(|| CalcError::parameter_missing("application"))?;

    if !size.is_finite() || size <= 0.0 {
        return Err(CalcError::invalid_input(
            "duct_size_in",
            size.to_string(),
            "Duct size must be > 0",
        ));
    }

    Ok(select_gauge(pressure_class, size, application))
}

/// Maximum transverse joint spacing (ft) for a velocity (ft/min).
///
/// Tier thresholds are strict: exactly 2500 fpm falls in the 2000–2500 tier.
pub fn joint_spacing_ft(velocity_fpm: f64, shape: ShapeKind) -> f64 {
    let (rect, round) = JOINT_SPACING_TIERS
        .iter()
        .find(|tier| velocity_fpm > tier.velocity_above_fpm)
        .map(|tier| (tier.rectangular_ft, tier.round_ft))
        .unwrap_or(DEFAULT_JOINT_SPACING_FT);

    match shape {
        ShapeKind::Rectangular => rect,
        ShapeKind::Circular => round,
    }
}

/// Maximum hanger spacing (ft) for a sheet gauge.
///
/// The same spacing applies to rectangular and round duct.
pub fn hanger_spacing_ft(gauge: Gauge, _shape: ShapeKind) -> f64 {
    HANGER_SPACING_TIERS
        .iter()
        .find(|(min_gauge, _)| gauge.number() >= *min_gauge)
        .map(|(_, spacing)| *spacing)
        .unwrap_or(DEFAULT_HANGER_SPACING_FT)
}

/// Gauge, spacing and seam for a duct moving air at `velocity_fpm`.
pub fn construction_for(
    shape: &DuctShape,
    velocity_fpm: f64,
    pressure_class: PressureClass,
    application: Application,
) -> ConstructionSpec {
    let kind = shape.kind();
    let dimension = shape.governing_dimension_in();
    let gauge = select_gauge(pressure_class, dimension, application);

    ConstructionSpec {
        gauge,
        joint_spacing_ft: joint_spacing_ft(velocity_fpm, kind),
        hanger_spacing_ft: hanger_spacing_ft(gauge, kind),
        seam_type: tables::recommended_seam(kind, pressure_class, dimension).to_string(),
    }
}
