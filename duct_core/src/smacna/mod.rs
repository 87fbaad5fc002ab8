//! # SMACNA Construction Standards
//!
//! Sheet-metal duct construction rules from the SMACNA *HVAC Duct
//! Construction Standards - Metal and Flexible*.
//!
//! - [`tables`] - Static reference data (gauge, velocity, joint, hanger, seam)
//! - [`construction`] - Gauge, joint spacing and hanger spacing selection
//! - [`compliance`] - Advisory compliance checks and educational notes
//!
//! Lookups are pure functions over immutable tables. Nothing here fails on a
//! non-compliant design; non-compliance comes back as data.

pub mod compliance;
pub mod construction;
pub mod tables;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

pub use compliance::{validate_smacna, ComplianceInput, ComplianceReport, ComplianceStatus};
pub use construction::{
    construction_for, hanger_spacing_ft, joint_spacing_ft, select_gauge, select_gauge_from_parts,
    ConstructionSpec,
};

// ============================================================================
// SMACNA Section References
// ============================================================================

/// SMACNA section references quoted in warnings and notes.
pub mod smacna_ref {
    /// Rectangular duct reinforcement and gauge tables
    pub const RECTANGULAR_GAUGE: &str = "SMACNA Table 2-1";
    /// Round duct gauge tables
    pub const ROUND_GAUGE: &str = "SMACNA Table 3-2";
    /// Transverse joint spacing
    pub const JOINT_SPACING: &str = "SMACNA Ch. 2.3";
    /// Hanger spacing and support
    pub const HANGER_SPACING: &str = "SMACNA Ch. 5";
    /// Longitudinal seams
    pub const SEAMS: &str = "SMACNA Fig. 2-2";
    /// Duct pressure classification
    pub const PRESSURE_CLASS: &str = "SMACNA Table 1-1";
}

// ============================================================================
// Application and Pressure Class
// ============================================================================

/// What the duct carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Application {
    /// Conditioned supply air
    #[default]
    Supply,
    /// Return air
    Return,
    /// Exhaust air (general, kitchen, bathroom)
    Exhaust,
}

impl Application {
    /// All applications for UI selection
    pub const ALL: [Application; 3] = [Application::Supply, Application::Return, Application::Exhaust];

    /// Number of gauge numbers to thicken the sheet by for this service
    pub fn gauge_adjustment_steps(&self) -> u8 {
        match self {
            Application::Exhaust => 2,
            Application::Supply | Application::Return => 0,
        }
    }

    /// Lowercase key for form data
    pub fn key(&self) -> &'static str {
        match self {
            Application::Supply => "supply",
            Application::Return => "return",
            Application::Exhaust => "exhaust",
        }
    }
}

impl std::fmt::Display for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Application::Supply => write!(f, "Supply"),
            Application::Return => write!(f, "Return"),
            Application::Exhaust => write!(f, "Exhaust"),
        }
    }
}

impl FromStr for Application {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "supply" => Ok(Application::Supply),
            "return" => Ok(Application::Return),
            "exhaust" | "kitchen" | "kitchen_exhaust" | "bathroom" | "bathroom_exhaust" => Ok(Application::Exhaust),
            _ => Err(CalcError::invalid_input(
                "application",
                s,
                "Application must be supply, return, or exhaust",
            )),
        }
    }
}

/// SMACNA static pressure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PressureClass {
    /// Up to ±2 in. w.g.
    #[default]
    Low,
    /// Up to ±6 in. w.g.
    Medium,
    /// Up to ±10 in. w.g.
    High,
}

impl PressureClass {
    /// All pressure classes for UI selection
    pub const ALL: [PressureClass; 3] = [PressureClass::Low, PressureClass::Medium, PressureClass::High];

    /// Rated static pressure (in. w.g.)
    pub fn rated_static_pressure_in_wg(&self) -> f64 {
        match self {
            PressureClass::Low => 2.0,
            PressureClass::Medium => 6.0,
            PressureClass::High => 10.0,
        }
    }

    /// Parse a pressure class key, falling back to [`PressureClass::Low`]
    /// for anything unrecognized.
    pub fn from_key_or_low(key: &str) -> PressureClass {
        match key.trim().to_ascii_lowercase().as_str() {
            "low" => PressureClass::Low,
            "medium" => PressureClass::Medium,
            "high" => PressureClass::High,
            other => {
                tracing::warn!(pressure_class = other, "unknown pressure class, using low");
                PressureClass::Low
            }
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            PressureClass::Low => "Low (±2\" w.g.)",
            PressureClass::Medium => "Medium (±6\" w.g.)",
            PressureClass::High => "High (±10\" w.g.)",
        }
    }
}

impl std::fmt::Display for PressureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Gauge
// ============================================================================

/// Thinnest gauge the tables allow
pub const THINNEST_GAUGE: u8 = 26;

/// Thickest gauge after application adjustment
pub const THICKEST_ADJUSTED_GAUGE: u8 = 18;

/// Sheet-metal gauge number. Lower number = thicker sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gauge(pub u8);

impl Gauge {
    /// Raw gauge number
    pub fn number(self) -> u8 {
        self.0
    }

    /// Thicken by `steps` gauge numbers, then clamp into [18, 26]
    pub fn toughened(self, steps: u8) -> Gauge {
        let n = self.0.saturating_sub(steps);
        Gauge(n.clamp(THICKEST_ADJUSTED_GAUGE, THINNEST_GAUGE))
    }

    /// True if this sheet is at least as thick as `other`
    pub fn is_at_least_as_thick_as(self, other: Gauge) -> bool {
        self.0 <= other.0
    }
}

impl std::fmt::Display for Gauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_aliases() {
        assert_eq!("Kitchen".parse::<Application>().unwrap(), Application::Exhaust);
        assert_eq!("bathroom".parse::<Application>().unwrap(), Application::Exhaust);
        assert_eq!("RETURN".parse::<Application>().unwrap(), Application::Return);
        assert!("outside_air".parse::<Application>().is_err());
    }

    #[test]
    fn test_pressure_class_fallback() {
        assert_eq!(PressureClass::from_key_or_low("high"), PressureClass::High);
        assert_eq!(PressureClass::from_key_or_low("Medium"), PressureClass::Medium);
        assert_eq!(PressureClass::from_key_or_low("extreme"), PressureClass::Low);
        assert_eq!(PressureClass::from_key_or_low(""), PressureClass::Low);
    }

    #[test]
    fn test_gauge_toughening_clamps() {
        assert_eq!(Gauge(24).toughened(2), Gauge(22));
        assert_eq!(Gauge(26).toughened(0), Gauge(26));
        assert_eq!(Gauge(18).toughened(2), Gauge(18));
        assert_eq!(Gauge(10).toughened(0), Gauge(18));
        assert_eq!(Gauge(28).toughened(0), Gauge(26));
    }

    #[test]
    fn test_gauge_thickness_ordering() {
        assert!(Gauge(20).is_at_least_as_thick_as(Gauge(24)));
        assert!(!Gauge(26).is_at_least_as_thick_as(Gauge(24)));
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&PressureClass::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&Application::Exhaust).unwrap(), "\"exhaust\"");
        assert_eq!(serde_json::to_string(&Gauge(22)).unwrap(), "22");
    }
}
