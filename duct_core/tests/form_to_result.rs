use duct_core::smacna::ComplianceStatus;
use duct_core::{calculate, validate_smacna, CalcError, ComplianceInput, DuctForm, Settings};

fn parse(json: &str) -> Result<duct_core::DuctInput, CalcError> {
    let form: DuctForm = serde_json::from_str(json).unwrap();
    form.parse(&Settings::default())
}

#[test]
fn reference_duct_from_form_json() {
    let input = parse(
        r#"{ "flowRate": "1000", "shape": "rectangular", "width": "12", "height": "8",
             "length": "100", "material": "galvanized", "application": "supply" }"#,
    )
    .unwrap();
    let result = calculate(&input).unwrap();

    assert_eq!(result.area_ft2, 0.667);
    assert!((result.velocity_fpm - 1500.0).abs() < 1e-6);
    assert!((result.hydraulic_diameter_in - 9.6).abs() < 1e-9);
    assert!(result.pressure_loss_in_wg > 0.1 && result.pressure_loss_in_wg < 0.5);
    assert_eq!(result.gauge, "24");
    assert_eq!(result.joint_spacing_ft, 8.0);
    assert_eq!(result.hanger_spacing_ft, 8.0);

    for part in ["1000 CFM", "12\"×8\"", "ft/min", "\" w.g.", "ga", "100' long"] {
        assert!(result.snap_summary.contains(part), "missing {part:?} in {}", result.snap_summary);
    }
}

#[test]
fn zero_flow_rate_is_rejected() {
    let err = parse(r#"{ "flowRate": 0, "shape": "rectangular", "width": 12, "height": 8, "length": 100 }"#)
        .unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput { .. }));
    assert!(err.to_string().contains("Flow rate must be > 0"));
}

#[test]
fn rectangular_without_dimensions_is_geometry_error() {
    let err = parse(r#"{ "flowRate": 1000, "shape": "rectangular", "length": 100 }"#).unwrap_err();
    assert!(matches!(err, CalcError::Geometry { .. }));
}

#[test]
fn equal_area_shapes_share_velocity() {
    let rect = parse(r#"{ "flowRate": 1000, "shape": "rectangular", "width": 12, "height": 8, "length": 50 }"#)
        .unwrap();
    let diameter = (4.0 * 96.0 / std::f64::consts::PI).sqrt();
    let round = parse(&format!(
        r#"{{ "flowRate": 1000, "shape": "circular", "diameter": {diameter}, "length": 50 }}"#
    ))
    .unwrap();

    let a = calculate(&rect).unwrap();
    let b = calculate(&round).unwrap();
    assert!((a.velocity_fpm - b.velocity_fpm).abs() < 1e-6);
}

#[test]
fn result_report_matches_standalone_validation() {
    let input = parse(r#"{ "flowRate": 600, "shape": "round", "diameter": 10, "length": 40, "application": "return" }"#)
        .unwrap();
    let result = calculate(&input).unwrap();

    let report = validate_smacna(&ComplianceInput {
        velocity_fpm: result.velocity_fpm,
        pressure_loss_in_wg: result.pressure_loss_in_wg,
        gauge: duct_core::smacna::Gauge(result.gauge.parse().unwrap()),
        joint_spacing_ft: result.joint_spacing_ft,
        hanger_spacing_ft: result.hanger_spacing_ft,
        shape: input.shape.kind(),
        governing_dimension_in: input.shape.governing_dimension_in(),
        application: input.application,
        pressure_class: input.pressure_class,
    });
    assert_eq!(report, result.compliance);
}

#[test]
fn slow_oversized_duct_is_flagged_not_rejected() {
    let input = parse(r#"{ "flowRate": 200, "shape": "rectangular", "width": 24, "height": 24, "length": 20 }"#)
        .unwrap();
    let result = calculate(&input).unwrap();

    // 200 CFM through 4 ft² is 50 fpm, far below the supply minimum
    assert!(!result.compliance.velocity_compliant);
    assert_eq!(result.status(), ComplianceStatus::NonCompliant);
    assert!(result
        .compliance
        .educational_notes
        .iter()
        .any(|n| n.contains("oversized")));
}
