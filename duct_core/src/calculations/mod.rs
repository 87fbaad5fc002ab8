//! # Duct Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`duct`] - Single straight duct run sizing and SMACNA construction

pub mod duct;

pub use duct::{calculate, DuctInput, DuctResult};
