//! Cutting tool definitions

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tool types offered for a VMC job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ToolType {
    /// Flat end mill
    #[serde(rename = "End Mill")]
    EndMill,
    /// Ball end mill / ball nose
    #[serde(rename = "Ball End Mill")]
    BallEndMill,
    /// Face mill
    #[serde(rename = "Face Mill")]
    FaceMill,
    /// Twist drill
    Drill,
    /// Thread tap
    Tap,
}

impl ToolType {
    /// Get all tool types
    pub fn all() -> &'static [ToolType] {
        &[
            ToolType::EndMill,
            ToolType::BallEndMill,
            ToolType::FaceMill,
            ToolType::Drill,
            ToolType::Tap,
        ]
    }
}

impl Default for ToolType {
    fn default() -> Self {
        Self::EndMill
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndMill => write!(f, "End Mill"),
            Self::BallEndMill => write!(f, "Ball End Mill"),
            Self::FaceMill => write!(f, "Face Mill"),
            Self::Drill => write!(f, "Drill"),
            Self::Tap => write!(f, "Tap"),
        }
    }
}

impl FromStr for ToolType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "end mill" | "endmill" => Ok(Self::EndMill),
            "ball end mill" | "ball nose" => Ok(Self::BallEndMill),
            "face mill" => Ok(Self::FaceMill),
            "drill" => Ok(Self::Drill),
            "tap" => Ok(Self::Tap),
            _ => Err(Error::UnknownVariant {
                kind: "tool type",
                value: s.to_string(),
            }),
        }
    }
}

label_try_from!(ToolType);

/// Tool description handed to external toolpath generators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub tool_type: ToolType,
    /// Cutter diameter (mm)
    pub diameter_mm: f64,
    /// Stick-out length (mm)
    pub length_mm: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_type_parse() {
        assert_eq!("Ball End Mill".parse::<ToolType>().unwrap(), ToolType::BallEndMill);
        assert_eq!("  tap ".parse::<ToolType>().unwrap(), ToolType::Tap);
        for tool in ToolType::all() {
            assert_eq!(tool.to_string().parse::<ToolType>().unwrap(), *tool);
        }
    }

    #[test]
    fn test_unknown_tool_type_is_rejected() {
        let err = "Reamer".parse::<ToolType>().unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
