//! # Duct Sizing Calculation
//!
//! Sizes a single straight duct run: geometry, velocity, friction loss,
//! SMACNA construction requirements and an advisory compliance report.
//!
//! ## Pipeline
//!
//! ```text
//! DuctInput → geometry → velocity → pressure loss → gauge / joints / hangers
//!           → compliance → snap summary → DuctResult
//! ```
//!
//! ## Example
//!
//! ```rust
//! use duct_core::calculations::duct::{calculate, DuctInput};
//! use duct_core::geometry::DuctShape;
//! use duct_core::materials::Material;
//! use duct_core::smacna::{Application, PressureClass};
//!
//! let input = DuctInput {
//!     flow_rate_cfm: 1000.0,
//!     shape: DuctShape::rectangular(12.0, 8.0),
//!     length_ft: 100.0,
//!     material: Material::Galvanized,
//!     application: Application::Supply,
//!     pressure_class: PressureClass::Low,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("{}", result.snap_summary);
//! assert_eq!(result.gauge, "24");
//! assert_eq!(result.area_ft2, 0.667);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::flow::velocity_fpm;
use crate::friction::{pressure_loss, FlowRegime};
use crate::geometry::{compute_geometry, DuctShape};
use crate::materials::Material;
use crate::smacna::{
    construction_for, validate_smacna, Application, ComplianceInput, ComplianceReport, ComplianceStatus,
    PressureClass,
};
use crate::summary::snap_summary;
use crate::units::{round_to, Inches};

/// Input parameters for one duct run.
///
/// Flow in CFM, dimensions in inches, length in feet.
///
/// ## JSON Example
///
/// ```json
/// {
///   "flow_rate_cfm": 1000.0,
///   "shape": { "type": "Rectangular", "width_in": 12.0, "height_in": 8.0 },
///   "length_ft": 100.0,
///   "material": "galvanized",
///   "application": "supply",
///   "pressure_class": "low"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuctInput {
    /// Volumetric airflow (CFM)
    pub flow_rate_cfm: f64,

    /// Cross-section and its dimensions (in)
    pub shape: DuctShape,

    /// Run length (ft)
    pub length_ft: f64,

    /// Sheet material
    #[serde(default)]
    pub material: Material,

    /// Air service
    #[serde(default)]
    pub application: Application,

    /// SMACNA static pressure class
    #[serde(default)]
    pub pressure_class: PressureClass,
}

impl DuctInput {
    /// Validate input parameters.
    ///
    /// Every numeric field, including the dimensions the shape needs, must
    /// be finite and > 0.
    pub fn validate(&self) -> CalcResult<()> {
        positive("flow_rate_cfm", self.flow_rate_cfm, "Flow rate")?;
        positive("length_ft", self.length_ft, "Length")?;
        match self.shape {
            DuctShape::Rectangular { width_in, height_in } => {
                positive("width_in", width_in, "Width")?;
                positive("height_in", height_in, "Height")?;
            }
            DuctShape::Circular { diameter_in } => {
                positive("diameter_in", diameter_in, "Diameter")?;
            }
        }
        Ok(())
    }
}

fn positive(field: &str, value: f64, label: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be a finite number", label),
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be > 0", label),
        ));
    }
    Ok(())
}

/// Results from a duct sizing calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "velocity_fpm": 1500.0,
///   "pressure_loss_in_wg": 0.34,
///   "gauge": "24",
///   "joint_spacing_ft": 8.0,
///   "hanger_spacing_ft": 8.0,
///   "hydraulic_diameter_in": 9.6,
///   "area_ft2": 0.667,
///   "perimeter_ft": 3.33,
///   "reynolds_number": 123456.8,
///   "friction_factor": 0.0193,
///   "flow_regime": "Turbulent",
///   "seam_type": "Snap lock",
///   "warnings": ["Pressure loss 0.34\" w.g. exceeds recommended maximum of 0.10\" w.g."],
///   "compliance": { "...": "..." },
///   "snap_summary": "1000 CFM • 12\"×8\" • 1500 ft/min • 0.34\" w.g. • 24 ga • 100' long"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuctResult {
    // === Flow ===
    /// Average air velocity (ft/min)
    pub velocity_fpm: f64,

    /// Friction loss over the run (in. w.g., 2 decimals)
    pub pressure_loss_in_wg: f64,

    // === Construction ===
    /// Minimum sheet gauge
    pub gauge: String,

    /// Maximum transverse joint spacing (ft)
    pub joint_spacing_ft: f64,

    /// Maximum hanger spacing (ft)
    pub hanger_spacing_ft: f64,

    /// Recommended longitudinal seam
    pub seam_type: String,

    // === Geometry ===
    /// Hydraulic diameter (in, 2 decimals)
    pub hydraulic_diameter_in: f64,

    /// Cross-sectional area (ft², 3 decimals)
    pub area_ft2: f64,

    /// Perimeter (ft, 2 decimals)
    pub perimeter_ft: f64,

    // === Friction intermediates ===
    pub reynolds_number: f64,
    pub friction_factor: f64,
    pub flow_regime: FlowRegime,

    // === Compliance ===
    /// Compliance warnings, in check order
    pub warnings: Vec<String>,

    /// Full compliance report
    pub compliance: ComplianceReport,

    /// One-line digest
    pub snap_summary: String,
}

impl DuctResult {
    /// Check if every SMACNA check passes
    pub fn passes(&self) -> bool {
        self.compliance.is_compliant()
    }

    /// Overall compliance verdict
    pub fn status(&self) -> ComplianceStatus {
        self.compliance.status()
    }
}

/// Size a duct run.
///
/// Pure function of its input: the same input always gives the same result.
///
/// # Returns
///
/// * `Ok(DuctResult)` - Fully populated result, compliant or not
/// * `Err(CalcError)` - Input failed validation
pub fn calculate(input: &DuctInput) -> CalcResult<DuctResult> {
    input.validate()?;

    let geometry = compute_geometry(&input.shape)?;
    let hydraulic_diameter = Inches(geometry.hydraulic_diameter_in());
    debug!(
        area_ft2 = geometry.area_ft2,
        perimeter_ft = geometry.perimeter_ft,
        hydraulic_diameter_in = hydraulic_diameter.value(),
        "geometry"
    );

    let velocity = velocity_fpm(input.flow_rate_cfm, geometry.area_ft2)?;
    debug!(velocity_fpm = velocity.value(), "velocity");

    let friction = pressure_loss(velocity, hydraulic_diameter, input.length_ft, input.material)?;
    let pressure_loss_in_wg = round_to(friction.pressure_loss_in_wg, 2);
    debug!(
        reynolds = friction.reynolds_number,
        friction_factor = friction.friction_factor,
        regime = %friction.regime,
        pressure_loss_in_wg,
        "pressure loss"
    );

    let construction = construction_for(&input.shape, velocity.value(), input.pressure_class, input.application);
    debug!(
        gauge = construction.gauge.number(),
        joint_spacing_ft = construction.joint_spacing_ft,
        hanger_spacing_ft = construction.hanger_spacing_ft,
        "construction"
    );

    let compliance = validate_smacna(&ComplianceInput {
        velocity_fpm: velocity.value(),
        pressure_loss_in_wg,
        gauge: construction.gauge,
        joint_spacing_ft: construction.joint_spacing_ft,
        hanger_spacing_ft: construction.hanger_spacing_ft,
        shape: input.shape.kind(),
        governing_dimension_in: input.shape.governing_dimension_in(),
        application: input.application,
        pressure_class: input.pressure_class,
    });
    debug!(status = %compliance.status(), warnings = compliance.warnings.len(), "compliance");

    let mut result = DuctResult {
        velocity_fpm: velocity.value(),
        pressure_loss_in_wg,
        gauge: construction.gauge.to_string(),
        joint_spacing_ft: construction.joint_spacing_ft,
        hanger_spacing_ft: construction.hanger_spacing_ft,
        seam_type: construction.seam_type,
        hydraulic_diameter_in: round_to(hydraulic_diameter.value(), 2),
        area_ft2: round_to(geometry.area_ft2, 3),
        perimeter_ft: round_to(geometry.perimeter_ft, 2),
        reynolds_number: friction.reynolds_number,
        friction_factor: friction.friction_factor,
        flow_regime: friction.regime,
        warnings: compliance.warnings.clone(),
        compliance,
        snap_summary: String::new(),
    };
    result.snap_summary = snap_summary(input, &result);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1000 CFM through 100 ft of 12"x8" galvanized supply duct
    fn test_duct() -> DuctInput {
        DuctInput {
            flow_rate_cfm: 1000.0,
            shape: DuctShape::rectangular(12.0, 8.0),
            length_ft: 100.0,
            material: Material::Galvanized,
            application: Application::Supply,
            pressure_class: PressureClass::Low,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let result = calculate(&test_duct()).unwrap();

        assert_eq!(result.area_ft2, 0.667);
        assert_eq!(result.perimeter_ft, 3.33);
        assert!((result.velocity_fpm - 1500.0).abs() < 1e-6);
        assert!((result.hydraulic_diameter_in - 9.6).abs() < 1e-9);
        assert!(result.pressure_loss_in_wg > 0.1 && result.pressure_loss_in_wg < 0.5);
        assert_eq!(result.pressure_loss_in_wg, 0.34);
        assert_eq!(result.gauge, "24");
        assert_eq!(result.joint_spacing_ft, 8.0);
        assert_eq!(result.hanger_spacing_ft, 8.0);
        assert_eq!(result.flow_regime, FlowRegime::Turbulent);
    }

    #[test]
    fn test_reference_summary() {
        let result = calculate(&test_duct()).unwrap();
        let summary = &result.snap_summary;
        assert!(summary.contains("1000 CFM"));
        assert!(summary.contains("12\"×8\""));
        assert!(summary.contains("ft/min"));
        assert!(summary.contains("\" w.g."));
        assert!(summary.contains("ga"));
        assert!(summary.contains("100' long"));
        assert_eq!(
            summary,
            "1000 CFM • 12\"×8\" • 1500 ft/min • 0.34\" w.g. • 24 ga • 100' long"
        );
    }

    #[test]
    fn test_reference_compliance() {
        let result = calculate(&test_duct()).unwrap();
        // 0.34" over 100 ft is above the 0.10" ceiling; everything else passes
        assert!(result.compliance.velocity_compliant);
        assert!(!result.compliance.pressure_compliant);
        assert!(result.compliance.gauge_compliant);
        assert!(result.compliance.joint_spacing_compliant);
        assert!(result.compliance.hanger_spacing_compliant);
        assert_eq!(result.status(), ComplianceStatus::NonCompliant);
        assert_eq!(result.warnings, result.compliance.warnings);
        assert!(!result.passes());
    }

    #[test]
    fn test_reference_seam_note() {
        let result = calculate(&test_duct()).unwrap();
        assert_eq!(result.seam_type, "Snap lock");
        let notes = &result.compliance.educational_notes;
        assert_eq!(notes.len(), 4);
        assert!(notes[2].starts_with("24 ga selected"));
        assert!(notes[3].starts_with("Snap lock longitudinal seams"));
    }

    #[test]
    fn test_zero_flow_rejected() {
        let mut duct = test_duct();
        duct.flow_rate_cfm = 0.0;
        let err = calculate(&duct).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        let msg = err.to_string();
        assert!(msg.contains("flow_rate_cfm"));
        assert!(msg.contains("must be > 0"));
    }

    #[test]
    fn test_negative_length_rejected() {
        let mut duct = test_duct();
        duct.length_ft = -10.0;
        assert!(matches!(
            calculate(&duct),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "length_ft"
        ));
    }

    #[test]
    fn test_non_finite_dimension_rejected() {
        let mut duct = test_duct();
        duct.shape = DuctShape::circular(f64::INFINITY);
        let err = calculate(&duct).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_round_duct() {
        let duct = DuctInput {
            shape: DuctShape::circular(12.0),
            ..test_duct()
        };
        let result = calculate(&duct).unwrap();
        assert!((result.hydraulic_diameter_in - 12.0).abs() < 1e-9);
        assert_eq!(result.joint_spacing_ft, 10.0);
        assert!(result.snap_summary.contains("12\"⌀"));
    }

    #[test]
    fn test_fast_exhaust_duct() {
        let duct = DuctInput {
            flow_rate_cfm: 3000.0,
            shape: DuctShape::rectangular(14.0, 10.0),
            application: Application::Exhaust,
            ..test_duct()
        };
        let result = calculate(&duct).unwrap();
        // 3000 / (140/144) ≈ 3086 fpm
        assert!(result.velocity_fpm > 3000.0);
        assert_eq!(result.joint_spacing_ft, 4.0);
        // 14" → 22 ga at low pressure, exhaust thickens to 20
        assert_eq!(result.gauge, "20");
        assert_eq!(result.hanger_spacing_ft, 10.0);
        assert!(!result.compliance.velocity_compliant);
    }

    #[test]
    fn test_idempotent() {
        let a = calculate(&test_duct()).unwrap();
        let b = calculate(&test_duct()).unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn test_input_defaults_from_json() {
        let json = r#"{
            "flow_rate_cfm": 1000.0,
            "shape": { "type": "Rectangular", "width_in": 12.0, "height_in": 8.0 },
            "length_ft": 100.0
        }"#;
        let input: DuctInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, test_duct());
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_duct()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("velocity_fpm"));
        assert!(json.contains("pressure_loss_in_wg"));
        assert!(json.contains("\"gauge\": \"24\""));

        let roundtrip: DuctResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.gauge, result.gauge);
        assert_eq!(roundtrip.warnings, result.warnings);
    }
}
