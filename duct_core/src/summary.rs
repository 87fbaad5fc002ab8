//! One-line "snap" summary of a duct calculation.
//!
//! ```text
//! 1000 CFM • 12"×8" • 1500 ft/min • 0.34" w.g. • 24 ga • 100' long
//! ```

use crate::calculations::duct::{DuctInput, DuctResult};
use crate::geometry::DuctShape;

/// Shape description: `W"×H"` or `D"⌀`
pub fn shape_description(shape: &DuctShape) -> String {
    match *shape {
        DuctShape::Rectangular { width_in, height_in } => format!("{}\"×{}\"", width_in, height_in),
        DuctShape::Circular { diameter_in } => format!("{}\"⌀", diameter_in),
    }
}

/// Format the summary line. Does no validation; `result` is assumed to come
/// from `input`.
pub fn snap_summary(input: &DuctInput, result: &DuctResult) -> String {
    format!(
        "{} CFM • {} • {:.0} ft/min • {:.2}\" w.g. • {} ga • {}' long",
        input.flow_rate_cfm,
        shape_description(&input.shape),
        result.velocity_fpm,
        result.pressure_loss_in_wg,
        result.gauge,
        input.length_ft,
    )
}
