//! Machining request data model
//!
//! A [`MachiningRequest`] is built once per submission, checked with
//! [`MachiningRequest::validate`], and then passed by reference into the
//! estimator and formatters. Nothing downstream mutates it.

/// Route serde deserialization of a label enum through its case-insensitive `FromStr`
macro_rules! label_try_from {
    ($($ty:ty),+ $(,)?) => {$(
        impl TryFrom<String> for $ty {
            type Error = crate::error::Error;

            fn try_from(label: String) -> std::result::Result<Self, Self::Error> {
                label.parse()
            }
        }
    )+};
}

pub mod materials;
pub mod tools;

use crate::error::{Error, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use materials::{Material, OTHER_STRENGTH_N_PER_MM2};
pub use tools::{ToolSpec, ToolType};

/// Part shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PartShape {
    Cylinder,
    Cube,
    Cone,
    Sphere,
    Prism,
    Custom,
}

impl PartShape {
    /// Get all shapes in form order
    pub fn all() -> &'static [PartShape] {
        &[
            PartShape::Cylinder,
            PartShape::Cube,
            PartShape::Cone,
            PartShape::Sphere,
            PartShape::Prism,
            PartShape::Custom,
        ]
    }

    /// Whether length and width describe this shape
    pub fn has_footprint(self) -> bool {
        matches!(self, Self::Cube | Self::Prism)
    }
}

impl Default for PartShape {
    fn default() -> Self {
        Self::Cylinder
    }
}

impl fmt::Display for PartShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cylinder => write!(f, "Cylinder"),
            Self::Cube => write!(f, "Cube"),
            Self::Cone => write!(f, "Cone"),
            Self::Sphere => write!(f, "Sphere"),
            Self::Prism => write!(f, "Prism"),
            Self::Custom => write!(f, "Custom"),
        }
    }
}

impl FromStr for PartShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cylinder" => Ok(Self::Cylinder),
            "cube" => Ok(Self::Cube),
            "cone" => Ok(Self::Cone),
            "sphere" => Ok(Self::Sphere),
            "prism" => Ok(Self::Prism),
            "custom" => Ok(Self::Custom),
            _ => Err(Error::UnknownVariant {
                kind: "part shape",
                value: s.to_string(),
            }),
        }
    }
}

/// Surface finish class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum FinishType {
    Rough,
    Fine,
    #[serde(rename = "Ultra-Fine")]
    UltraFine,
}

impl Default for FinishType {
    fn default() -> Self {
        Self::Rough
    }
}

impl fmt::Display for FinishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rough => write!(f, "Rough"),
            Self::Fine => write!(f, "Fine"),
            Self::UltraFine => write!(f, "Ultra-Fine"),
        }
    }
}

impl FromStr for FinishType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rough" => Ok(Self::Rough),
            "fine" => Ok(Self::Fine),
            "ultra-fine" | "ultra fine" | "ultrafine" => Ok(Self::UltraFine),
            _ => Err(Error::UnknownVariant {
                kind: "finish type",
                value: s.to_string(),
            }),
        }
    }
}

/// How the workpiece sits in the vise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum WorkpieceOrientation {
    Flat,
    Vertical,
    Tilted,
}

impl Default for WorkpieceOrientation {
    fn default() -> Self {
        Self::Flat
    }
}

impl fmt::Display for WorkpieceOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "Flat"),
            Self::Vertical => write!(f, "Vertical"),
            Self::Tilted => write!(f, "Tilted"),
        }
    }
}

impl FromStr for WorkpieceOrientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "vertical" => Ok(Self::Vertical),
            "tilted" => Ok(Self::Tilted),
            _ => Err(Error::UnknownVariant {
                kind: "workpiece orientation",
                value: s.to_string(),
            }),
        }
    }
}

/// Machining operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Operation {
    Roughing,
    Drilling,
    Finishing,
    Tapping,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Roughing => write!(f, "Roughing"),
            Self::Drilling => write!(f, "Drilling"),
            Self::Finishing => write!(f, "Finishing"),
            Self::Tapping => write!(f, "Tapping"),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "roughing" => Ok(Self::Roughing),
            "drilling" => Ok(Self::Drilling),
            "finishing" => Ok(Self::Finishing),
            "tapping" => Ok(Self::Tapping),
            _ => Err(Error::UnknownVariant {
                kind: "operation",
                value: s.to_string(),
            }),
        }
    }
}

/// Parse a comma-separated operation sequence such as `"Roughing, Drilling"`.
///
/// Empty segments are skipped; an unknown name fails the whole sequence.
pub fn parse_operation_sequence(input: &str) -> Result<Vec<Operation>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::parse)
        .collect()
}

label_try_from!(PartShape, FinishType, WorkpieceOrientation, Operation);

/// Accept an operation list either as an array of labels or as a
/// comma-separated string
fn deserialize_operations<'de, D>(deserializer: D) -> std::result::Result<Vec<Operation>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Operations {
        Text(String),
        List(Vec<Operation>),
    }

    match Operations::deserialize(deserializer)? {
        Operations::Text(text) => parse_operation_sequence(&text).map_err(de::Error::custom),
        Operations::List(list) => Ok(list),
    }
}

/// Form options that are collected but feed no estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedOptions {
    /// Dimensional tolerance (mm)
    pub tolerance_mm: f64,
    /// Tool stick-out length (mm)
    pub tool_length_mm: f64,
    pub workpiece_orientation: WorkpieceOrientation,
    pub coolant: bool,
    /// Spindle speed (RPM)
    pub spindle_speed_rpm: f64,
    /// Chip load (mm/tooth)
    pub chip_load_mm_per_tooth: f64,
    /// Selected operations
    #[serde(deserialize_with = "deserialize_operations")]
    pub operations: Vec<Operation>,
    /// Requested execution order
    #[serde(deserialize_with = "deserialize_operations")]
    pub operation_sequence: Vec<Operation>,
}

impl Default for AdvancedOptions {
    fn default() -> Self {
        Self {
            tolerance_mm: 0.1,
            tool_length_mm: 50.0,
            workpiece_orientation: WorkpieceOrientation::Flat,
            coolant: true,
            spindle_speed_rpm: 1500.0,
            chip_load_mm_per_tooth: 0.1,
            operations: Vec::new(),
            operation_sequence: Vec::new(),
        }
    }
}

/// Minimum values accepted by the request form
pub struct FormLimits;

impl FormLimits {
    pub const MIN_DIMENSION_MM: f64 = 1.0;
    pub const MIN_TOLERANCE_MM: f64 = 0.01;
    pub const MIN_TOOL_DIAMETER_MM: f64 = 1.0;
    pub const MIN_TOOL_LENGTH_MM: f64 = 1.0;
    pub const MIN_CUTTING_SPEED: f64 = 1.0;
    pub const MIN_FEED_RATE: f64 = 1.0;
    pub const MIN_DEPTH_OF_CUT_MM: f64 = 0.1;
    pub const MIN_SPINDLE_SPEED_RPM: f64 = 500.0;
    pub const MIN_CHIP_LOAD_MM: f64 = 0.01;
}

/// One submission of machining parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachiningRequest {
    pub shape: PartShape,
    /// Part diameter (mm)
    pub diameter_mm: f64,
    /// Part height (mm)
    pub height_mm: f64,
    /// Part length (mm), Cube/Prism only
    pub length_mm: f64,
    /// Part width (mm), Cube/Prism only
    pub width_mm: f64,
    pub material: Material,
    pub tool_type: ToolType,
    /// Cutter diameter (mm)
    pub tool_diameter_mm: f64,
    pub cutting_speed_mm_per_min: f64,
    pub feed_rate_mm_per_min: f64,
    /// Axial depth of cut (mm)
    pub depth_of_cut_mm: f64,
    pub finish_type: FinishType,
    pub advanced: AdvancedOptions,
}

impl Default for MachiningRequest {
    fn default() -> Self {
        Self {
            shape: PartShape::Cylinder,
            diameter_mm: 50.0,
            height_mm: 100.0,
            length_mm: 0.0,
            width_mm: 0.0,
            material: Material::Aluminum,
            tool_type: ToolType::EndMill,
            tool_diameter_mm: 10.0,
            cutting_speed_mm_per_min: 150.0,
            feed_rate_mm_per_min: 100.0,
            depth_of_cut_mm: 5.0,
            finish_type: FinishType::Rough,
            advanced: AdvancedOptions::default(),
        }
    }
}

impl MachiningRequest {
    /// Form defaults for `shape`; footprint shapes start with a 100 mm length
    pub fn for_shape(shape: PartShape) -> Self {
        let length_mm = if shape.has_footprint() { 100.0 } else { 0.0 };
        Self {
            shape,
            length_mm,
            ..Self::default()
        }
    }

    /// Tool description for external toolpath generators
    pub fn tool_spec(&self) -> ToolSpec {
        ToolSpec {
            tool_type: self.tool_type,
            diameter_mm: self.tool_diameter_mm,
            length_mm: self.advanced.tool_length_mm,
        }
    }

    /// Check every field against the form minimums
    pub fn validate(&self) -> Result<()> {
        at_least("diameter_mm", self.diameter_mm, FormLimits::MIN_DIMENSION_MM)?;
        at_least("height_mm", self.height_mm, FormLimits::MIN_DIMENSION_MM)?;

        if self.shape.has_footprint() {
            at_least("length_mm", self.length_mm, FormLimits::MIN_DIMENSION_MM)?;
        } else {
            at_least("length_mm", self.length_mm, 0.0)?;
        }
        at_least("width_mm", self.width_mm, 0.0)?;

        at_least(
            "tool_diameter_mm",
            self.tool_diameter_mm,
            FormLimits::MIN_TOOL_DIAMETER_MM,
        )?;
        at_least(
            "cutting_speed_mm_per_min",
            self.cutting_speed_mm_per_min,
            FormLimits::MIN_CUTTING_SPEED,
        )?;
        at_least(
            "feed_rate_mm_per_min",
            self.feed_rate_mm_per_min,
            FormLimits::MIN_FEED_RATE,
        )?;
        at_least(
            "depth_of_cut_mm",
            self.depth_of_cut_mm,
            FormLimits::MIN_DEPTH_OF_CUT_MM,
        )?;

        let adv = &self.advanced;
        at_least("tolerance_mm", adv.tolerance_mm, FormLimits::MIN_TOLERANCE_MM)?;
        at_least(
            "tool_length_mm",
            adv.tool_length_mm,
            FormLimits::MIN_TOOL_LENGTH_MM,
        )?;
        at_least(
            "spindle_speed_rpm",
            adv.spindle_speed_rpm,
            FormLimits::MIN_SPINDLE_SPEED_RPM,
        )?;
        at_least(
            "chip_load_mm_per_tooth",
            adv.chip_load_mm_per_tooth,
            FormLimits::MIN_CHIP_LOAD_MM,
        )?;

        Ok(())
    }
}

fn at_least(field: &str, value: f64, min: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_argument(field, "must be a finite number"));
    }
    if value < min {
        return Err(Error::invalid_argument(
            field,
            format!("{} is below the minimum of {}", value, min),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_is_valid() {
        assert!(MachiningRequest::default().validate().is_ok());
    }

    #[test]
    fn test_cube_requires_length() {
        let mut request = MachiningRequest::for_shape(PartShape::Cube);
        assert_eq!(request.length_mm, 100.0);
        assert!(request.validate().is_ok());

        request.length_mm = 0.0;
        let err = request.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref field, .. } if field == "length_mm"));
    }

    #[test]
    fn test_nan_is_rejected() {
        let request = MachiningRequest {
            feed_rate_mm_per_min: f64::NAN,
            ..MachiningRequest::default()
        };
        assert!(request.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_finish_type_labels() {
        assert_eq!("Ultra-Fine".parse::<FinishType>().unwrap(), FinishType::UltraFine);
        assert_eq!(FinishType::UltraFine.to_string(), "Ultra-Fine");
        assert!("Mirror".parse::<FinishType>().is_err());
    }
}
