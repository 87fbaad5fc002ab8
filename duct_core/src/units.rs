//! # Unit Types
//!
//! Type-safe wrappers for the imperial units used in duct design. These are
//! plain `f64` newtypes that serialize as bare numbers.
//!
//! ## Units in play
//!
//! - Length: inches (duct dimensions), feet (run length, spacing)
//! - Area: square inches, square feet
//! - Velocity: feet per minute (HVAC convention), feet per second (friction math)
//! - Pressure: pounds per square foot, psi, inches of water gauge (in. w.g.)
//!
//! ## Example
//!
//! ```rust
//! use duct_core::units::{FeetPerMinute, FeetPerSecond, Inches, Feet};
//!
//! let width: Feet = Inches(18.0).into();
//! assert_eq!(width.0, 1.5);
//!
//! let v: FeetPerSecond = FeetPerMinute(1200.0).into();
//! assert_eq!(v.0, 20.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Inches of water column per psi
pub const IN_WG_PER_PSI: f64 = 27.68;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl From<SqFt> for SqIn {
    fn from(sqft: SqFt) -> Self {
        SqIn(sqft.0 * 144.0)
    }
}

impl From<SqIn> for SqFt {
    fn from(sqin: SqIn) -> Self {
        SqFt(sqin.0 / 144.0)
    }
}

// ============================================================================
// Velocity Units
// ============================================================================

/// Air velocity in feet per minute (fpm)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeetPerMinute(pub f64);

/// Air velocity in feet per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeetPerSecond(pub f64);

impl From<FeetPerMinute> for FeetPerSecond {
    fn from(fpm: FeetPerMinute) -> Self {
        FeetPerSecond(fpm.0 / 60.0)
    }
}

impl From<FeetPerSecond> for FeetPerMinute {
    fn from(fps: FeetPerSecond) -> Self {
        FeetPerMinute(fps.0 * 60.0)
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Pressure in pounds per square foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

/// Pressure in pounds per square inch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Pressure in inches of water gauge (in. w.g.)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InWg(pub f64);

impl From<Psf> for Psi {
    fn from(psf: Psf) -> Self {
        Psi(psf.0 / 144.0)
    }
}

impl From<Psi> for InWg {
    fn from(psi: Psi) -> Self {
        InWg(psi.0 * IN_WG_PER_PSI)
    }
}

impl From<Psf> for InWg {
    fn from(psf: Psf) -> Self {
        Psi::from(psf).into()
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(SqIn);
impl_arithmetic!(SqFt);
impl_arithmetic!(FeetPerMinute);
impl_arithmetic!(FeetPerSecond);
impl_arithmetic!(Psf);
impl_arithmetic!(Psi);
impl_arithmetic!(InWg);

/// Round to a fixed number of decimal places (half away from zero)
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
