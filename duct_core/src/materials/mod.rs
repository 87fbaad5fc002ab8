//! # Duct Materials
//!
//! Sheet-metal materials supported for duct construction and their absolute
//! surface roughness, which feeds the friction factor.
//!
//! | Material    | Roughness ε (ft) |
//! |-------------|------------------|
//! | Galvanized  | 0.0003           |
//! | Stainless   | 0.00015          |
//! | Aluminum    | 0.00015          |
//!
//! ## Example
//!
//! ```rust
//! use duct_core::materials::Material;
//!
//! let m: Material = "stainless".parse().unwrap();
//! assert_eq!(m.roughness_ft(), 0.00015);
//! assert!("copper".parse::<Material>().is_err());
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Duct sheet material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    /// Galvanized steel (most common)
    #[default]
    Galvanized,
    /// Stainless steel
    Stainless,
    /// Aluminum
    Aluminum,
}

impl Material {
    /// All materials for UI selection
    pub const ALL: [Material; 3] = [Material::Galvanized, Material::Stainless, Material::Aluminum];

    /// Absolute roughness ε in feet
    pub fn roughness_ft(&self) -> f64 {
        match self {
            Material::Galvanized => 0.0003,
            Material::Stainless => 0.00015,
            Material::Aluminum => 0.00015,
        }
    }

    /// Lookup key used in form data and JSON
    pub fn key(&self) -> &'static str {
        match self {
            Material::Galvanized => "galvanized",
            Material::Stainless => "stainless",
            Material::Aluminum => "aluminum",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::Galvanized => "Galvanized Steel",
            Material::Stainless => "Stainless Steel",
            Material::Aluminum => "Aluminum",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Material {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Material::ALL
            .into_iter()
            .find(|m| m.key() == key)
            .ok_or_else(|| CalcError::invalid_material(s))
    }
}

/// Roughness (ft) for a raw material key.
///
/// Fails with [`CalcError::InvalidMaterial`] for keys outside the table.
pub fn roughness_for_key(key: &str) -> CalcResult<f64> {
    key.parse::<Material>().map(|m| m.roughness_ft())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roughness_table() {
        assert_eq!(Material::Galvanized.roughness_ft(), 0.0003);
        assert_eq!(Material::Stainless.roughness_ft(), 0.00015);
        assert_eq!(Material::Aluminum.roughness_ft(), 0.00015);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Galvanized ".parse::<Material>().unwrap(), Material::Galvanized);
        assert_eq!("ALUMINUM".parse::<Material>().unwrap(), Material::Aluminum);
    }

    #[test]
    fn test_unknown_material_rejected() {
        let err = roughness_for_key("fiberglass").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MATERIAL");
        assert!(err.to_string().contains("fiberglass"));
    }

    #[test]
    fn test_default_is_galvanized() {
        assert_eq!(Material::default(), Material::Galvanized);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Material::Stainless).unwrap();
        assert_eq!(json, "\"stainless\"");
        let roundtrip: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Material::Stainless);
    }
}
