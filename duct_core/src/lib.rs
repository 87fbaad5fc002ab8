//! # duct_core - HVAC Duct Sizing Engine
//!
//! `duct_core` sizes a single straight duct run: airflow and dimensions in,
//! velocity, friction loss, SMACNA construction requirements and an advisory
//! compliance report out. All inputs and outputs are JSON-serializable so a
//! UI layer can call it with plain data.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Advisory Compliance**: Non-compliant designs still produce results
//!
//! ## Quick Start
//!
//! ```rust
//! use duct_core::input::DuctForm;
//! use duct_core::settings::Settings;
//! use duct_core::calculate;
//!
//! let form: DuctForm = serde_json::from_str(
//!     r#"{ "flowRate": 1000, "shape": "rectangular", "width": 12, "height": 8, "length": 100 }"#,
//! ).unwrap();
//!
//! let input = form.parse(&Settings::default()).unwrap();
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.gauge, "24");
//! println!("{}", result.snap_summary);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Duct sizing pipeline (`DuctInput` → `DuctResult`)
//! - [`geometry`] - Area, perimeter, hydraulic diameter
//! - [`flow`] - Air velocity
//! - [`friction`] - Darcy–Weisbach pressure loss
//! - [`smacna`] - Construction tables, lookups and compliance checks
//! - [`summary`] - One-line result digest
//! - [`input`] - Parse boundary for loosely typed form data
//! - [`materials`] - Duct materials and roughness
//! - [`settings`] - TOML-backed defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod flow;
pub mod friction;
pub mod geometry;
pub mod input;
pub mod materials;
pub mod settings;
pub mod smacna;
pub mod summary;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, DuctInput, DuctResult};
pub use errors::{CalcError, CalcResult};
pub use geometry::DuctShape;
pub use input::DuctForm;
pub use materials::Material;
pub use settings::Settings;
pub use smacna::{validate_smacna, Application, ComplianceInput, ComplianceReport, PressureClass};
pub use summary::snap_summary;
