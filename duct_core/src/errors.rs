//! # Error Types
//!
//! Structured error types for duct_core. Every failure the engine can raise
//! is a variant here, carrying enough context for a form layer to point at
//! the offending field without parsing message strings.
//!
//! Compliance problems are *not* errors. An undersized or noisy duct still
//! produces a result; the issues come back as warnings in the
//! [`ComplianceReport`](crate::smacna::ComplianceReport).
//!
//! ## Example
//!
//! ```rust
//! use duct_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_ft: f64) -> CalcResult<()> {
//!     if length_ft <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "length_ft",
//!             length_ft.to_string(),
//!             "Length must be > 0",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for duct_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for duct calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A numeric field is missing, non-numeric, non-finite, or not positive
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The dimensions required by the duct shape are missing or unusable
    #[error("Geometry error for {shape} duct: {reason}")]
    Geometry { shape: String, reason: String },

    /// Material key is not in the roughness table
    #[error("Invalid material: '{material}' (expected galvanized, stainless, or aluminum)")]
    InvalidMaterial { material: String },

    /// A parameter needed for a construction lookup was not supplied
    #[error("Missing required parameter: {parameter}")]
    ParameterMissing { parameter: String },

    /// A numeric stage could not produce a finite value
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// Settings file could not be read or parsed
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Geometry error
    pub fn geometry(shape: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Geometry {
            shape: shape.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidMaterial error
    pub fn invalid_material(material: impl Into<String>) -> Self {
        CalcError::InvalidMaterial {
            material: material.into(),
        }
    }

    /// Create a ParameterMissing error
    pub fn parameter_missing(parameter: impl Into<String>) -> Self {
        CalcError::ParameterMissing {
            parameter: parameter.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(reason: impl Into<String>) -> Self {
        CalcError::Config {
            reason: reason.into(),
        }
    }

    /// Whether the error points at something the user typed (as opposed to
    /// a configuration or internal numeric failure)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::Geometry { .. }
                | CalcError::InvalidMaterial { .. }
                | CalcError::ParameterMissing { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "VALIDATION_ERROR",
            CalcError::Geometry { .. } => "GEOMETRY_ERROR",
            CalcError::InvalidMaterial { .. } => "INVALID_MATERIAL",
            CalcError::ParameterMissing { .. } => "PARAMETER_MISSING",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::Config { .. } => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("flow_rate_cfm", "0", "Flow rate must be > 0");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::geometry("rectangular", "width required").error_code(), "GEOMETRY_ERROR");
        assert_eq!(CalcError::invalid_material("copper").error_code(), "INVALID_MATERIAL");
        assert_eq!(CalcError::parameter_missing("application").error_code(), "PARAMETER_MISSING");
        assert_eq!(CalcError::config("bad toml").error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CalcError::invalid_material("copper").is_input_error());
        assert!(!CalcError::calculation_failed("flow", "area is zero").is_input_error());
        assert!(!CalcError::config("bad toml").is_input_error());
    }

    #[test]
    fn test_display_mentions_field() {
        let error = CalcError::invalid_input("length_ft", "-3", "Length must be > 0");
        let msg = error.to_string();
        assert!(msg.contains("length_ft"));
        assert!(msg.contains("> 0"));
    }
}
