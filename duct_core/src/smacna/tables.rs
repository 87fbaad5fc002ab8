//! SMACNA reference tables.
//!
//! Ordered range-bucket records. Each gauge table is sorted by
//! `max_dimension_in` ascending and ends in an unbounded bucket, so a linear
//! scan for the first bucket that fits always terminates on finite input.

use crate::geometry::ShapeKind;

use super::{Application, Gauge, PressureClass};

// ============================================================================
// Minimum Gauge by Largest Dimension
// ============================================================================

/// One row of a gauge table: ducts up to `max_dimension_in` use `gauge`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeBucket {
    /// Largest duct dimension covered by this row (in)
    pub max_dimension_in: f64,
    /// Minimum sheet gauge
    pub gauge: Gauge,
}

const fn bucket(max_dimension_in: f64, gauge: u8) -> GaugeBucket {
    GaugeBucket {
        max_dimension_in,
        gauge: Gauge(gauge),
    }
}

/// Low pressure (±2 in. w.g.)
pub const LOW_PRESSURE_GAUGES: [GaugeBucket; 9] = [
    bucket(6.0, 26),
    bucket(12.0, 24),
    bucket(18.0, 22),
    bucket(30.0, 20),
    bucket(42.0, 18),
    bucket(54.0, 16),
    bucket(60.0, 14),
    bucket(84.0, 12),
    bucket(f64::INFINITY, 10),
];

/// Medium pressure (±6 in. w.g.)
pub const MEDIUM_PRESSURE_GAUGES: [GaugeBucket; 9] = [
    bucket(6.0, 26),
    bucket(12.0, 24),
    bucket(18.0, 22),
    bucket(30.0, 20),
    bucket(42.0, 18),
    bucket(54.0, 16),
    bucket(60.0, 12),
    bucket(84.0, 10),
    bucket(f64::INFINITY, 8),
];

/// High pressure (±10 in. w.g.)
pub const HIGH_PRESSURE_GAUGES: [GaugeBucket; 9] = [
    bucket(6.0, 26),
    bucket(12.0, 22),
    bucket(18.0, 20),
    bucket(30.0, 18),
    bucket(42.0, 16),
    bucket(54.0, 14),
    bucket(60.0, 12),
    bucket(84.0, 8),
    bucket(f64::INFINITY, 6),
];

/// Gauge table for a pressure class
pub fn gauge_table(pressure_class: PressureClass) -> &'static [GaugeBucket] {
    match pressure_class {
        PressureClass::Low => &LOW_PRESSURE_GAUGES,
        PressureClass::Medium => &MEDIUM_PRESSURE_GAUGES,
        PressureClass::High => &HIGH_PRESSURE_GAUGES,
    }
}

/// First bucket whose `max_dimension_in` covers `dimension_in`.
///
/// `None` only for NaN, which no bucket covers.
pub fn lookup_gauge(pressure_class: PressureClass, dimension_in: f64) -> Option<Gauge> {
    gauge_table(pressure_class)
        .iter()
        .find(|b| b.max_dimension_in >= dimension_in)
        .map(|b| b.gauge)
}

// ============================================================================
// Velocity Limits by Application
// ============================================================================

/// Allowed and optimal velocity range (ft/min)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityLimits {
    pub min_fpm: f64,
    pub max_fpm: f64,
    pub optimal_min_fpm: f64,
    pub optimal_max_fpm: f64,
}

/// Velocity limits for an application
pub fn velocity_limits(application: Application) -> VelocityLimits {
    match application {
        Application::Supply => VelocityLimits {
            min_fpm: 800.0,
            max_fpm: 2500.0,
            optimal_min_fpm: 1200.0,
            optimal_max_fpm: 2000.0,
        },
        Application::Return => VelocityLimits {
            min_fpm: 600.0,
            max_fpm: 2000.0,
            optimal_min_fpm: 800.0,
            optimal_max_fpm: 1500.0,
        },
        Application::Exhaust => VelocityLimits {
            min_fpm: 1000.0,
            max_fpm: 3000.0,
            optimal_min_fpm: 1500.0,
            optimal_max_fpm: 2500.0,
        },
    }
}

// ============================================================================
// Transverse Joint Spacing
// ============================================================================

/// Joint spacing tier: above `velocity_above_fpm`, joints every
/// `rectangular_ft` / `round_ft`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSpacingTier {
    pub velocity_above_fpm: f64,
    pub rectangular_ft: f64,
    pub round_ft: f64,
}

/// Tiers from fastest to slowest
pub const JOINT_SPACING_TIERS: [JointSpacingTier; 2] = [
    JointSpacingTier {
        velocity_above_fpm: 2500.0,
        rectangular_ft: 4.0,
        round_ft: 6.0,
    },
    JointSpacingTier {
        velocity_above_fpm: 2000.0,
        rectangular_ft: 6.0,
        round_ft: 8.0,
    },
];

/// Joint spacing at or below the slowest tier (rectangular, round)
pub const DEFAULT_JOINT_SPACING_FT: (f64, f64) = (8.0, 10.0);

// ============================================================================
// Hanger Spacing
// ============================================================================

/// Hanger tiers as (minimum gauge number, spacing ft), thinnest first
pub const HANGER_SPACING_TIERS: [(u8, f64); 2] = [(24, 8.0), (20, 10.0)];

/// Hanger spacing for gauges thicker than every tier
pub const DEFAULT_HANGER_SPACING_FT: f64 = 12.0;

// ============================================================================
// Longitudinal Seams
// ============================================================================

/// Recommended longitudinal seam for a duct
pub fn recommended_seam(shape: ShapeKind, pressure_class: PressureClass, dimension_in: f64) -> &'static str {
    match (shape, pressure_class) {
        (ShapeKind::Circular, PressureClass::Low) if dimension_in <= 14.0 => "Snap lock",
        (ShapeKind::Circular, _) => "Spiral lock seam",
        (ShapeKind::Rectangular, PressureClass::Low) if dimension_in <= 30.0 => "Snap lock",
        (ShapeKind::Rectangular, PressureClass::High) => "Pittsburgh lock (sealed)",
        (ShapeKind::Rectangular, _) => "Pittsburgh lock",
    }
}
