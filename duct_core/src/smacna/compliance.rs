//! # Compliance Checks
//!
//! Advisory SMACNA checks on a sized duct. Five checks always run, in this
//! order, and their warnings and notes are concatenated in the same order:
//!
//! 1. Velocity against the application's allowed and optimal ranges
//! 2. Pressure loss against the 0.10 in. w.g. ceiling
//! 3. Gauge against the pressure-loss bands, followed by the seam note
//! 4. Joint spacing against the velocity tiers
//! 5. Hanger spacing against the gauge tiers
//!
//! [`validate_smacna`] never fails. A non-compliant design is still a
//! design; the report says what is wrong with it.

use serde::{Deserialize, Serialize};

use crate::geometry::ShapeKind;

use super::construction::{hanger_spacing_ft, joint_spacing_ft};
use super::tables::{recommended_seam, velocity_limits};
use super::{smacna_ref, Application, Gauge, PressureClass};

/// Recommended maximum friction loss (in. w.g.)
pub const PRESSURE_LOSS_CEILING_IN_WG: f64 = 0.1;

/// Fraction of the ceiling above which a soft warning is raised
pub const PRESSURE_SOFT_WARNING_FRACTION: f64 = 0.8;

/// Loss below which the duct is probably oversized (in. w.g.)
pub const PRESSURE_OVERSIZE_FLOOR_IN_WG: f64 = 0.02;

/// Computed values to check.
///
/// Spacing values are normally the ones [`super::construction_for`]
/// produced, in which case the spacing checks always pass. They only fail
/// for values set independently of the computed ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceInput {
    pub velocity_fpm: f64,
    pub pressure_loss_in_wg: f64,
    pub gauge: Gauge,
    pub joint_spacing_ft: f64,
    pub hanger_spacing_ft: f64,
    pub shape: ShapeKind,
    /// Largest cross-section dimension (in), selects the seam
    pub governing_dimension_in: f64,
    pub application: Application,
    pub pressure_class: PressureClass,
}

/// Overall verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    /// Every check passed with nothing to flag
    Compliant,
    /// Every check passed but something is close to a limit
    Warning,
    /// At least one check failed
    NonCompliant,
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStatus::Compliant => write!(f, "Compliant"),
            ComplianceStatus::Warning => write!(f, "Warning"),
            ComplianceStatus::NonCompliant => write!(f, "Non-Compliant"),
        }
    }
}

/// Result of the compliance checks.
///
/// ## JSON Example
///
/// ```json
/// {
///   "velocity_compliant": true,
///   "pressure_compliant": false,
///   "gauge_compliant": true,
///   "joint_spacing_compliant": true,
///   "hanger_spacing_compliant": true,
///   "gauge_recommendation": "24",
///   "warnings": ["Pressure loss 0.34\" w.g. exceeds recommended maximum of 0.10\" w.g."],
///   "educational_notes": ["..."]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub velocity_compliant: bool,
    pub pressure_compliant: bool,
    pub gauge_compliant: bool,
    pub joint_spacing_compliant: bool,
    pub hanger_spacing_compliant: bool,
    /// Gauge the pressure band calls for, or the current gauge if it already complies
    pub gauge_recommendation: String,
    pub warnings: Vec<String>,
    pub educational_notes: Vec<String>,
}

impl ComplianceReport {
    /// True if every check passed
    pub fn is_compliant(&self) -> bool {
        self.velocity_compliant
            && self.pressure_compliant
            && self.gauge_compliant
            && self.joint_spacing_compliant
            && self.hanger_spacing_compliant
    }

    /// Overall verdict
    pub fn status(&self) -> ComplianceStatus {
        if !self.is_compliant() {
            ComplianceStatus::NonCompliant
        } else if !self.warnings.is_empty() {
            ComplianceStatus::Warning
        } else {
            ComplianceStatus::Compliant
        }
    }
}

#[derive(Debug, Default)]
struct CheckOutcome {
    compliant: bool,
    warnings: Vec<String>,
    notes: Vec<String>,
}

impl CheckOutcome {
    fn passing() -> Self {
        CheckOutcome {
            compliant: true,
            ..Default::default()
        }
    }

    fn fail(&mut self, warning: String) {
        self.compliant = false;
        self.warnings.push(warning);
    }
}

/// Run every SMACNA check on a sized duct.
///
/// # Example
///
/// ```rust
/// use duct_core::geometry::ShapeKind;
/// use duct_core::smacna::{validate_smacna, Application, ComplianceInput, Gauge, PressureClass};
///
/// let report = validate_smacna(&ComplianceInput {
///     velocity_fpm: 3200.0,
///     pressure_loss_in_wg: 0.05,
///     gauge: Gauge(24),
///     joint_spacing_ft: 4.0,
///     hanger_spacing_ft: 8.0,
///     shape: ShapeKind::Rectangular,
///     governing_dimension_in: 12.0,
///     application: Application::Supply,
///     pressure_class: PressureClass::Low,
/// });
/// assert!(!report.velocity_compliant);
/// assert!(report.pressure_compliant);
/// ```
pub fn validate_smacna(input: &ComplianceInput) -> ComplianceReport {
    let velocity = check_velocity(input.velocity_fpm, input.application);
    let pressure = check_pressure(input.pressure_loss_in_wg);
    let (gauge, gauge_recommendation) = check_gauge(input);
    let joint = check_joint_spacing(input);
    let hanger = check_hanger_spacing(input);

    let mut warnings = Vec::new();
    let mut educational_notes = Vec::new();
    for outcome in [&velocity, &pressure, &gauge, &joint, &hanger] {
        warnings.extend(outcome.warnings.iter().cloned());
        educational_notes.extend(outcome.notes.iter().cloned());
    }

    ComplianceReport {
        velocity_compliant: velocity.compliant,
        pressure_compliant: pressure.compliant,
        gauge_compliant: gauge.compliant,
        joint_spacing_compliant: joint.compliant,
        hanger_spacing_compliant: hanger.compliant,
        gauge_recommendation,
        warnings,
        educational_notes,
    }
}

fn check_velocity(velocity_fpm: f64, application: Application) -> CheckOutcome {
    let limits = velocity_limits(application);
    let app = application.key();
    let mut out = CheckOutcome::passing();

    if velocity_fpm > limits.max_fpm {
        out.fail(format!(
            "Velocity {:.0} fpm exceeds SMACNA maximum of {:.0} fpm for {} ducts",
            velocity_fpm, limits.max_fpm, app
        ));
        out.notes.push(
            "High velocity raises noise and friction loss. A larger duct lowers both.".to_string(),
        );
    } else if velocity_fpm < limits.min_fpm {
        out.fail(format!(
            "Velocity {:.0} fpm is below SMACNA minimum of {:.0} fpm for {} ducts",
            velocity_fpm, limits.min_fpm, app
        ));
        out.notes.push(
            "Low velocity usually means an oversized duct. A smaller size saves sheet metal and space."
                .to_string(),
        );
    } else if velocity_fpm < limits.optimal_min_fpm || velocity_fpm > limits.optimal_max_fpm {
        out.notes.push(format!(
            "Velocity {:.0} fpm is within limits but outside the optimal {:.0}-{:.0} fpm range for {} ducts.",
            velocity_fpm, limits.optimal_min_fpm, limits.optimal_max_fpm, app
        ));
    } else {
        out.notes.push(format!("Velocity is in the optimal range for {} ducts.", app));
    }

    out
}

fn check_pressure(pressure_loss_in_wg: f64) -> CheckOutcome {
    let mut out = CheckOutcome::passing();
    let soft_limit = PRESSURE_LOSS_CEILING_IN_WG * PRESSURE_SOFT_WARNING_FRACTION;

    if pressure_loss_in_wg > PRESSURE_LOSS_CEILING_IN_WG {
        out.fail(format!(
            "Pressure loss {:.2}\" w.g. exceeds recommended maximum of {:.2}\" w.g.",
            pressure_loss_in_wg, PRESSURE_LOSS_CEILING_IN_WG
        ));
        out.notes.push(
            "Friction loss falls quickly with duct size. Upsizing one step or using smoother material reduces fan energy."
                .to_string(),
        );
    } else if pressure_loss_in_wg > soft_limit {
        out.warnings.push(format!(
            "Pressure loss {:.2}\" w.g. is approaching the {:.2}\" w.g. limit",
            pressure_loss_in_wg, PRESSURE_LOSS_CEILING_IN_WG
        ));
    } else if pressure_loss_in_wg < PRESSURE_OVERSIZE_FLOOR_IN_WG {
        out.notes.push(format!(
            "Pressure loss below {:.2}\" w.g. may indicate an oversized duct.",
            PRESSURE_OVERSIZE_FLOOR_IN_WG
        ));
    }

    out
}

/// Thinnest gauge allowed for a pressure loss, if the loss is high enough
/// to restrict it
fn max_gauge_for_pressure(pressure_loss_in_wg: f64) -> Option<Gauge> {
    if pressure_loss_in_wg > 4.0 {
        Some(Gauge(20))
    } else if pressure_loss_in_wg > 2.0 {
        Some(Gauge(22))
    } else if pressure_loss_in_wg > 1.0 {
        Some(Gauge(24))
    } else {
        None
    }
}

fn check_gauge(input: &ComplianceInput) -> (CheckOutcome, String) {
    let mut out = CheckOutcome::passing();
    let table_ref = match input.shape {
        ShapeKind::Rectangular => smacna_ref::RECTANGULAR_GAUGE,
        ShapeKind::Circular => smacna_ref::ROUND_GAUGE,
    };

    let recommendation = match max_gauge_for_pressure(input.pressure_loss_in_wg) {
        Some(required) if !input.gauge.is_at_least_as_thick_as(required) => {
            out.fail(format!(
                "{} ga is too light for {:.2}\" w.g.; use {} ga or heavier",
                input.gauge, input.pressure_loss_in_wg, required
            ));
            required
        }
        _ => input.gauge,
    };

    out.notes.push(format!(
        "{} ga selected for {} pressure class ({}).",
        input.gauge,
        input.pressure_class.display_name(),
        table_ref
    ));

    let seam = recommended_seam(input.shape, input.pressure_class, input.governing_dimension_in);
    out.notes.push(format!(
        "{} longitudinal seams recommended for ducts rated to {:.0}\" w.g. static ({}; {}).",
        seam,
        input.pressure_class.rated_static_pressure_in_wg(),
        smacna_ref::SEAMS,
        smacna_ref::PRESSURE_CLASS
    ));

    (out, recommendation.to_string())
}

fn check_joint_spacing(input: &ComplianceInput) -> CheckOutcome {
    let mut out = CheckOutcome::passing();
    let allowed = joint_spacing_ft(input.velocity_fpm, input.shape);
    if input.joint_spacing_ft > allowed {
        out.fail(format!(
            "Joint spacing {}' exceeds {}' maximum at {:.0} fpm ({})",
            input.joint_spacing_ft,
            allowed,
            input.velocity_fpm,
            smacna_ref::JOINT_SPACING
        ));
    }
    out
}

fn check_hanger_spacing(input: &ComplianceInput) -> CheckOutcome {
    let mut out = CheckOutcome::passing();
    let allowed = hanger_spacing_ft(input.gauge, input.shape);
    if input.hanger_spacing_ft > allowed {
        out.fail(format!(
            "Hanger spacing {}' exceeds {}' maximum for {} ga ({})",
            input.hanger_spacing_ft,
            allowed,
            input.gauge,
            smacna_ref::HANGER_SPACING
        ));
    }
    out
}
