//! # Settings
//!
//! Defaults applied when form data leaves a selection blank. Stored as TOML:
//!
//! ```toml
//! [defaults]
//! material = "galvanized"
//! application = "supply"
//! pressure_class = "low"
//! ```
//!
//! Any missing key keeps its built-in default.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;
use crate::smacna::{Application, PressureClass};

/// Engine settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fallbacks for blank selections
    pub defaults: DuctDefaults,
}

/// Fallback selections for a new duct
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuctDefaults {
    pub material: Material,
    pub application: Application,
    pub pressure_class: PressureClass,
}

impl Settings {
    /// Parse settings from TOML text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use duct_core::settings::Settings;
    /// use duct_core::materials::Material;
    ///
    /// let settings = Settings::from_toml_str("[defaults]\nmaterial = \"aluminum\"\n").unwrap();
    /// assert_eq!(settings.defaults.material, Material::Aluminum);
    /// ```
    pub fn from_toml_str(text: &str) -> CalcResult<Settings> {
        toml::from_str(text).map_err(|e| CalcError::config(e.to_string()))
    }

    /// Serialize settings to TOML text.
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::config(e.to_string()))
    }

    /// Load settings from `path`, or built-in defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// [`CalcError::Config`] if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> CalcResult<Settings> {
        match fs::read_to_string(path) {
            Ok(text) => Settings::from_toml_str(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "settings file not found, using defaults");
                Ok(Settings::default())
            }
            Err(e) => Err(CalcError::config(format!("{}: {}", path.display(), e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.defaults.material, Material::Galvanized);
        assert_eq!(settings.defaults.application, Application::Supply);
        assert_eq!(settings.defaults.pressure_class, PressureClass::Low);
    }

    #[test]
    fn test_partial_file() {
        let settings = Settings::from_toml_str("[defaults]\npressure_class = \"medium\"\n").unwrap();
        assert_eq!(settings.defaults.pressure_class, PressureClass::Medium);
        assert_eq!(settings.defaults.material, Material::Galvanized);
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_value() {
        let err = Settings::from_toml_str("[defaults]\nmaterial = \"copper\"\n").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_toml_roundtrip() {
        let settings = Settings {
            defaults: DuctDefaults {
                material: Material::Stainless,
                application: Application::Exhaust,
                pressure_class: PressureClass::High,
            },
        };
        let text = settings.to_toml_string().unwrap();
        assert!(text.contains("stainless"));
        assert_eq!(Settings::from_toml_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = Path::new("definitely/not/a/real/settings.toml");
        assert_eq!(Settings::load_or_default(path).unwrap(), Settings::default());
    }
}
