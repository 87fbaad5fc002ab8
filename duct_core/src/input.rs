//! # Form Input Boundary
//!
//! Form layers hand over loosely typed data: a field may arrive as a JSON
//! number, as text, or not at all. [`DuctForm::parse`] is the one place that
//! data becomes a strict [`DuctInput`]. Nothing past this point sees text.
//!
//! ## Rules
//!
//! | Field                     | Missing            | Bad value                 |
//! |---------------------------|--------------------|---------------------------|
//! | flowRate, length          | ValidationError    | ValidationError           |
//! | shape                     | ValidationError    | ValidationError           |
//! | width/height, diameter    | GeometryError      | ValidationError           |
//! | material                  | settings default   | InvalidMaterialError      |
//! | application               | settings default   | ValidationError           |
//! | pressureClass             | settings default   | falls back to low         |
//!
//! ## Example
//!
//! ```rust
//! use duct_core::input::DuctForm;
//! use duct_core::settings::Settings;
//!
//! let form: DuctForm = serde_json::from_str(
//!     r#"{ "flowRate": "1000", "shape": "rectangular", "width": 12, "height": "8", "length": 100 }"#,
//! ).unwrap();
//! let input = form.parse(&Settings::default()).unwrap();
//! assert_eq!(input.flow_rate_cfm, 1000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::duct::DuctInput;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::DuctShape;
use crate::materials::Material;
use crate::settings::Settings;
use crate::smacna::{Application, PressureClass};

/// A form field holding either a number or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Blank text counts as not filled in
    fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }

    fn raw(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    fn to_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// Raw duct form data as a UI collects it.
///
/// ## JSON Example
///
/// ```json
/// {
///   "flowRate": "1000",
///   "shape": "rectangular",
///   "width": 12,
///   "height": 8,
///   "length": "100",
///   "material": "galvanized",
///   "application": "supply",
///   "pressureClass": "low"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DuctForm {
    pub flow_rate: Option<FieldValue>,
    pub shape: Option<String>,
    pub width: Option<FieldValue>,
    pub height: Option<FieldValue>,
    pub diameter: Option<FieldValue>,
    pub length: Option<FieldValue>,
    pub material: Option<String>,
    pub application: Option<String>,
    pub pressure_class: Option<String>,
}

impl DuctForm {
    /// Parse and validate into a [`DuctInput`], filling blank selections
    /// from `settings`.
    pub fn parse(&self, settings: &Settings) -> CalcResult<DuctInput> {
        let flow_rate_cfm = required_number("flow_rate_cfm", "Flow rate", self.flow_rate.as_ref())?;
        let length_ft = required_number("length_ft", "Length", self.length.as_ref())?;
        let shape = self.parse_shape()?;

        let defaults = settings.defaults;

        let material = match non_blank(self.material.as_deref()) {
            Some(key) => key.parse::<Material>()?,
            None => defaults.material,
        };
        let application = match non_blank(self.application.as_deref()) {
            Some(key) => key.parse::<Application>()?,
            None => defaults.application,
        };
        let pressure_class = match non_blank(self.pressure_class.as_deref()) {
            Some(key) => PressureClass::from_key_or_low(key),
            None => defaults.pressure_class,
        };

        Ok(DuctInput {
            flow_rate_cfm,
            shape,
            length_ft,
            material,
            application,
            pressure_class,
        })
    }

    fn parse_shape(&self) -> CalcResult<DuctShape> {
        let key = non_blank(self.shape.as_deref())
            .ok_or_else(|| CalcError::invalid_input("shape", "", "Shape is required"))?;

        match key.to_ascii_lowercase().as_str() {
            "rectangular" | "rect" => {
                let (width, height) = match (present(&self.width), present(&self.height)) {
                    (Some(w), Some(h)) => (w, h),
                    _ => {
                        return Err(CalcError::geometry(
                            "rectangular",
                            "width and height are required for rectangular ducts",
                        ))
                    }
                };
                Ok(DuctShape::Rectangular {
                    width_in: required_number("width_in", "Width", Some(width))?,
                    height_in: required_number("height_in", "Height", Some(height))?,
                })
            }
            "circular" | "round" => {
                let diameter = present(&self.diameter).ok_or_else(|| {
                    CalcError::geometry("circular", "diameter is required for circular ducts")
                })?;
                Ok(DuctShape::Circular {
                    diameter_in: required_number("diameter_in", "Diameter", Some(diameter))?,
                })
            }
            _ => Err(CalcError::invalid_input(
                "shape",
                key,
                "Shape must be rectangular or circular",
            )),
        }
    }
}

fn present(value: &Option<FieldValue>) -> Option<&FieldValue> {
    value.as_ref().filter(|v| !v.is_blank())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn required_number(field: &str, label: &str, value: Option<&FieldValue>) -> CalcResult<f64> {
    let value = value
        .filter(|v| !v.is_blank())
        .ok_or_else(|| CalcError::invalid_input(field, "", format!("{} is required", label)))?;

    let number = value.to_number().ok_or_else(|| {
        CalcError::invalid_input(field, value.raw(), format!("{} must be a number", label))
    })?;

    if !number.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.raw(),
            format!("{} must be a finite number", label),
        ));
    }
    if number <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.raw(),
            format!("{} must be > 0", label),
        ));
    }
    Ok(number)
}
