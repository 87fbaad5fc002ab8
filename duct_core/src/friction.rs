//! # Friction Pressure Loss
//!
//! Straight-duct pressure loss by Darcy–Weisbach, with the friction factor
//! chosen by flow regime:
//!
//! ```text
//! Re = V·Dh / ν                                   (V in ft/s, Dh in ft)
//! f  = 64 / max(Re, 1)                            Re < 2300 (laminar)
//! f  = 0.25 / [log10(ε/(3.7·Dh) + 5.74/Re^0.9)]²  Re ≥ 2300 (Swamee–Jain)
//! Δp = f · (L/Dh) · ρV² / (2g)                    lb/ft²
//! ```
//!
//! Δp is converted lb/ft² → psi → in. w.g. and clamped at zero.
//!
//! Air is standard air at 70°F: ν = 1.62e-4 ft²/s, ρ = 0.075 lb/ft³.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;
use crate::units::{Feet, FeetPerMinute, FeetPerSecond, InWg, Inches, Psf};

/// Kinematic viscosity of standard air (ft²/s)
pub const KINEMATIC_VISCOSITY_FT2_S: f64 = 1.62e-4;

/// Density of standard air (lb/ft³)
pub const AIR_DENSITY_LB_FT3: f64 = 0.075;

/// Gravitational acceleration (ft/s²)
pub const GRAVITY_FT_S2: f64 = 32.2;

/// Reynolds number below which flow is treated as laminar
pub const LAMINAR_REYNOLDS_LIMIT: f64 = 2300.0;

/// Flow regime used to pick the friction factor correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl std::fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowRegime::Laminar => write!(f, "Laminar"),
            FlowRegime::Turbulent => write!(f, "Turbulent"),
        }
    }
}

/// Intermediate values from a pressure-loss calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureLossBreakdown {
    /// Reynolds number
    pub reynolds_number: f64,
    /// Darcy friction factor
    pub friction_factor: f64,
    /// Regime that selected the correlation
    pub regime: FlowRegime,
    /// Friction loss over the run (in. w.g., ≥ 0, unrounded)
    pub pressure_loss_in_wg: f64,
}

/// Reynolds number for air at `velocity` in a duct of hydraulic diameter `dh`.
pub fn reynolds_number(velocity: FeetPerMinute, dh: Inches) -> f64 {
    let v = FeetPerSecond::from(velocity);
    let d = Feet::from(dh);
    v.value() * d.value() / KINEMATIC_VISCOSITY_FT2_S
}

/// Darcy friction factor.
///
/// Laminar flow divides by `max(Re, 1)` so a zero-velocity duct does not
/// divide by zero. That value has no physical meaning near Re ≈ 0.
pub fn friction_factor(reynolds: f64, roughness_ft: f64, dh_ft: f64) -> (f64, FlowRegime) {
    if reynolds < LAMINAR_REYNOLDS_LIMIT {
        (64.0 / reynolds.max(1.0), FlowRegime::Laminar)
    } else {
        let relative = roughness_ft / (3.7 * dh_ft);
        let term = 5.74 / reynolds.powf(0.9);
        let f = 0.25 / (relative + term).log10().powi(2);
        (f, FlowRegime::Turbulent)
    }
}

/// Friction pressure loss for a straight duct run.
///
/// # Arguments
///
/// * `velocity` - Average air velocity (ft/min)
/// * `hydraulic_diameter` - Dh (in)
/// * `length_ft` - Run length (ft)
/// * `material` - Duct material (sets roughness)
///
/// # Errors
///
/// [`CalcError::CalculationFailed`] for a non-finite or negative velocity,
/// a non-positive diameter or length, or a non-finite result.
///
/// # Example
///
/// ```rust
/// use duct_core::friction::pressure_loss;
/// use duct_core::materials::Material;
/// use duct_core::units::{FeetPerMinute, Inches};
///
/// let loss = pressure_loss(FeetPerMinute(1500.0), Inches(9.6), 100.0, Material::Galvanized).unwrap();
/// assert!(loss.pressure_loss_in_wg > 0.1 && loss.pressure_loss_in_wg < 0.5);
/// ```
pub fn pressure_loss(
    velocity: FeetPerMinute,
    hydraulic_diameter: Inches,
    length_ft: f64,
    material: Material,
) -> CalcResult<PressureLossBreakdown> {
    check_input("velocity_fpm", velocity.value(), true)?;
    check_input("hydraulic_diameter_in", hydraulic_diameter.value(), false)?;
    check_input("length_ft", length_ft, false)?;

    let v_fps = FeetPerSecond::from(velocity).value();
    let d_ft = Feet::from(hydraulic_diameter).value();

    let reynolds = reynolds_number(velocity, hydraulic_diameter);
    let (f, regime) = friction_factor(reynolds, material.roughness_ft(), d_ft);

    let velocity_head = AIR_DENSITY_LB_FT3 * v_fps.powi(2) / (2.0 * GRAVITY_FT_S2);
    let dp = Psf(f * (length_ft / d_ft) * velocity_head);
    let loss = InWg::from(dp).value().max(0.0);

    if !loss.is_finite() {
        return Err(CalcError::calculation_failed(
            "pressure_loss",
            format!("non-finite result (Re = {}, f = {})", reynolds, f),
        ));
    }

    Ok(PressureLossBreakdown {
        reynolds_number: reynolds,
        friction_factor: f,
        regime,
        pressure_loss_in_wg: loss,
    })
}

/// [`pressure_loss`] for a raw material key from form data.
///
/// # Errors
///
/// [`CalcError::InvalidMaterial`] if the key is not galvanized, stainless
/// or aluminum.
pub fn pressure_loss_for_key(
    velocity: FeetPerMinute,
    hydraulic_diameter: Inches,
    length_ft: f64,
    material_key: &str,
) -> CalcResult<PressureLossBreakdown> {
    let material: Material = material_key.parse()?;
    pressure_loss(velocity, hydraulic_diameter, length_ft, material)
}

fn check_input(name: &str, value: f64, allow_zero: bool) -> CalcResult<()> {
    let ok = value.is_finite() && (value > 0.0 || (allow_zero && value == 0.0));
    if ok {
        Ok(())
    } else {
        Err(CalcError::calculation_failed(
            "pressure_loss",
            format!("{} must be {}, got {}", name, if allow_zero { ">= 0" } else { "> 0" }, value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reynolds_number() {
        // 1500 fpm = 25 ft/s, 9.6 in = 0.8 ft → Re = 25·0.8/1.62e-4 ≈ 123,457
        let re = reynolds_number(FeetPerMinute(1500.0), Inches(9.6));
        assert!((re - 123_456.8).abs() < 1.0);
    }

    #[test]
    fn test_turbulent_friction_factor() {
        let (f, regime) = friction_factor(123_456.8, 0.0003, 0.8);
        assert_eq!(regime, FlowRegime::Turbulent);
        assert!((f - 0.0193).abs() < 0.0005);
    }

    #[test]
    fn test_laminar_friction_factor() {
        let (f, regime) = friction_factor(1000.0, 0.0003, 0.8);
        assert_eq!(regime, FlowRegime::Laminar);
        assert!((f - 0.064).abs() < 1e-12);
    }

    #[test]
    fn test_laminar_boundary() {
        let (_, below) = friction_factor(2299.999, 0.0003, 0.8);
        let (_, at) = friction_factor(2300.0, 0.0003, 0.8);
        assert_eq!(below, FlowRegime::Laminar);
        assert_eq!(at, FlowRegime::Turbulent);
    }

    #[test]
    fn test_laminar_floor_near_zero_reynolds() {
        // Guard only: 64 / max(Re, 1) caps f at 64. Not a physical value.
        let (f_zero, _) = friction_factor(0.0, 0.0003, 0.8);
        let (f_half, _) = friction_factor(0.5, 0.0003, 0.8);
        assert_eq!(f_zero, 64.0);
        assert_eq!(f_half, 64.0);
    }

    #[test]
    fn test_reference_pressure_loss() {
        // 12"x8" galvanized, 1000 CFM, 100 ft: ≈ 0.338 in. w.g.
        let loss = pressure_loss(FeetPerMinute(1500.0), Inches(9.6), 100.0, Material::Galvanized).unwrap();
        assert_eq!(loss.regime, FlowRegime::Turbulent);
        assert!((loss.pressure_loss_in_wg - 0.338).abs() < 0.005);
    }

    #[test]
    fn test_zero_velocity_gives_zero_loss() {
        let loss = pressure_loss(FeetPerMinute(0.0), Inches(10.0), 50.0, Material::Galvanized).unwrap();
        assert_eq!(loss.regime, FlowRegime::Laminar);
        assert_eq!(loss.pressure_loss_in_wg, 0.0);
    }

    #[test]
    fn test_smoother_material_loses_less() {
        let galv = pressure_loss(FeetPerMinute(1800.0), Inches(12.0), 80.0, Material::Galvanized).unwrap();
        let ss = pressure_loss(FeetPerMinute(1800.0), Inches(12.0), 80.0, Material::Stainless).unwrap();
        let al = pressure_loss(FeetPerMinute(1800.0), Inches(12.0), 80.0, Material::Aluminum).unwrap();
        assert!(ss.pressure_loss_in_wg < galv.pressure_loss_in_wg);
        assert!(al.pressure_loss_in_wg < galv.pressure_loss_in_wg);
    }

    #[test]
    fn test_invalid_material_key() {
        let err = pressure_loss_for_key(FeetPerMinute(1500.0), Inches(9.6), 100.0, "copper").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MATERIAL");
    }

    #[test]
    fn test_rejects_bad_length() {
        let err = pressure_loss(FeetPerMinute(1500.0), Inches(9.6), 0.0, Material::Galvanized).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }
}
