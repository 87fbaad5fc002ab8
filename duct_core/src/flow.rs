//! # Air Velocity
//!
//! `V = Q / A`: CFM over square feet gives feet per minute.

use crate::errors::{CalcError, CalcResult};
use crate::units::FeetPerMinute;

/// Average air velocity (ft/min) for a flow rate (CFM) through an area (ft²).
///
/// # Errors
///
/// [`CalcError::CalculationFailed`] if the area is zero, negative or
/// non-finite. Validated geometry never hits this.
///
/// # Example
///
/// ```rust
/// use duct_core::flow::velocity_fpm;
///
/// let v = velocity_fpm(1000.0, 0.5).unwrap();
/// assert_eq!(v.0, 2000.0);
/// assert!(velocity_fpm(1000.0, 0.0).is_err());
/// ```
pub fn velocity_fpm(flow_rate_cfm: f64, area_ft2: f64) -> CalcResult<FeetPerMinute> {
    if !area_ft2.is_finite() || area_ft2 <= 0.0 {
        return Err(CalcError::calculation_failed(
            "velocity",
            format!("cross-sectional area must be > 0, got {}", area_ft2),
        ));
    }
    Ok(FeetPerMinute(flow_rate_cfm / area_ft2))
}
