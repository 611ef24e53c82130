//! Cutting-force and tool-life estimates
//!
//! Both estimates are first-order placeholders. They are pure functions of
//! the request and the material table: no state, no randomness, no logging.
//! Extreme inputs are not clamped.

use crate::error::EstimateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use vmccopilot_core::{MachiningRequest, Material};

/// Wear factor in the tool-life formula
const TOOL_LIFE_FORCE_FACTOR: f64 = 0.1;

/// Estimated tool life
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolLife {
    /// Finite, positive life in hours
    Hours(f64),
    /// No finite answer (zero cutting force)
    Undefined,
}

impl ToolLife {
    pub fn hours(self) -> Option<f64> {
        match self {
            Self::Hours(h) => Some(h),
            Self::Undefined => None,
        }
    }
}

impl fmt::Display for ToolLife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hours(h) => write!(f, "{:.3} hours", h),
            Self::Undefined => write!(f, "undefined"),
        }
    }
}

/// Force and tool-life estimate for one request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Cutting force (N)
    pub cutting_force_n: f64,
    pub tool_life: ToolLife,
}

/// Estimate the cutting force in newtons.
///
/// `force = speed * feed * diameter / 1000 * strength / 100`, where strength
/// comes from [`Material::strength_coefficient`]. Inputs are not clamped;
/// a product too large for `f64` yields [`EstimateError::UndefinedEstimate`].
pub fn estimate_cutting_force(
    diameter_mm: f64,
    cutting_speed: f64,
    feed_rate: f64,
    material: Material,
) -> Result<f64, EstimateError> {
    positive("diameter_mm", diameter_mm)?;
    positive("cutting_speed", cutting_speed)?;
    positive("feed_rate", feed_rate)?;

    let base = (cutting_speed * feed_rate * diameter_mm) / 1000.0;
    let force = base * (material.strength_coefficient() / 100.0);
    if !force.is_finite() {
        return Err(EstimateError::UndefinedEstimate(format!(
            "cutting force overflows for diameter {} mm, cutting speed {}, feed rate {}",
            diameter_mm, cutting_speed, feed_rate
        )));
    }
    Ok(force)
}

/// Estimate tool life in hours: `tool_diameter² / (force * 0.1)`.
///
/// A zero force has no finite answer and yields
/// [`EstimateError::UndefinedEstimate`].
pub fn estimate_tool_life(cutting_force_n: f64, tool_diameter_mm: f64) -> Result<f64, EstimateError> {
    if !cutting_force_n.is_finite() || cutting_force_n < 0.0 {
        return Err(EstimateError::InvalidArgument {
            name: "cutting_force_n".to_string(),
            reason: format!("must be a finite value >= 0, got {}", cutting_force_n),
        });
    }
    positive("tool_diameter_mm", tool_diameter_mm)?;

    if cutting_force_n == 0.0 {
        return Err(EstimateError::UndefinedEstimate(
            "cutting force is zero".to_string(),
        ));
    }

    let hours = tool_diameter_mm.powi(2) / (cutting_force_n * TOOL_LIFE_FORCE_FACTOR);
    if !hours.is_finite() {
        return Err(EstimateError::UndefinedEstimate(format!(
            "tool life overflows for a cutting force of {} N",
            cutting_force_n
        )));
    }
    Ok(hours)
}

/// Run both estimates for a request.
///
/// An undefined tool life is reported as [`ToolLife::Undefined`] rather than
/// an error; invalid arguments still fail.
pub fn estimate(request: &MachiningRequest) -> Result<EstimateResult, EstimateError> {
    let cutting_force_n = estimate_cutting_force(
        request.diameter_mm,
        request.cutting_speed_mm_per_min,
        request.feed_rate_mm_per_min,
        request.material,
    )?;

    let tool_life = match estimate_tool_life(cutting_force_n, request.tool_diameter_mm) {
        Ok(hours) => ToolLife::Hours(hours),
        Err(EstimateError::UndefinedEstimate(_)) => ToolLife::Undefined,
        Err(e) => return Err(e),
    };

    Ok(EstimateResult {
        cutting_force_n,
        tool_life,
    })
}

fn positive(name: &str, value: f64) -> Result<(), EstimateError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EstimateError::InvalidArgument {
            name: name.to_string(),
            reason: format!("must be a finite value > 0, got {}", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aluminum_force() {
        let force = estimate_cutting_force(50.0, 150.0, 100.0, Material::Aluminum).unwrap();
        assert_eq!(force, 750.0);
    }

    #[test]
    fn test_steel_force() {
        let force = estimate_cutting_force(50.0, 150.0, 100.0, Material::Steel).unwrap();
        assert_eq!(force, 1500.0);
    }

    #[test]
    fn test_tool_life() {
        let hours = estimate_tool_life(1500.0, 10.0).unwrap();
        assert!((hours - 0.6667).abs() < 1e-3);
    }

    #[test]
    fn test_zero_force_is_undefined() {
        let err = estimate_tool_life(0.0, 10.0).unwrap_err();
        assert!(matches!(err, EstimateError::UndefinedEstimate(_)));
    }

    #[test]
    fn test_subnormal_force_does_not_return_infinity() {
        let err = estimate_tool_life(f64::MIN_POSITIVE / 1e10, 10.0).unwrap_err();
        assert!(matches!(err, EstimateError::UndefinedEstimate(_)));
    }

    #[test]
    fn test_non_positive_inputs_are_invalid() {
        for (d, s, f) in [(0.0, 150.0, 100.0), (50.0, -1.0, 100.0), (50.0, 150.0, f64::NAN)] {
            let err = estimate_cutting_force(d, s, f, Material::Steel).unwrap_err();
            assert!(matches!(err, EstimateError::InvalidArgument { .. }));
        }
        assert!(matches!(
            estimate_tool_life(-5.0, 10.0),
            Err(EstimateError::InvalidArgument { .. })
        ));
        assert!(matches!(
            estimate_tool_life(100.0, 0.0),
            Err(EstimateError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_tool_life_display() {
        assert_eq!(ToolLife::Hours(0.66666).to_string(), "0.667 hours");
        assert_eq!(ToolLife::Undefined.to_string(), "undefined");
        assert_eq!(ToolLife::Undefined.hours(), None);
    }
}
