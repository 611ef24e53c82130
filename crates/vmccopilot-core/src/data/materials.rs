//! Workpiece materials and the strength table used by the force estimator
//!
//! The table is a process-wide constant. Lookup is total: every material,
//! including names this crate does not recognize, resolves to a coefficient.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength coefficient (N/mm²) applied to materials outside the table
pub const OTHER_STRENGTH_N_PER_MM2: f64 = 120.0;

/// Workpiece material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Material {
    Aluminum,
    Steel,
    Titanium,
    Brass,
    Plastic,
    /// Anything not listed above, including unrecognized names
    Other,
}

impl Material {
    /// Get all materials in form order
    pub fn all() -> &'static [Material] {
        &[
            Material::Aluminum,
            Material::Steel,
            Material::Titanium,
            Material::Brass,
            Material::Plastic,
            Material::Other,
        ]
    }

    /// Strength coefficient in N/mm²
    pub fn strength_coefficient(self) -> f64 {
        match self {
            Self::Aluminum => 100.0,
            Self::Steel => 200.0,
            Self::Titanium => 300.0,
            Self::Brass => 150.0,
            Self::Plastic => 50.0,
            Self::Other => OTHER_STRENGTH_N_PER_MM2,
        }
    }

    /// Resolve a material from its display name.
    ///
    /// Never fails: unknown names map to [`Material::Other`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "aluminum" | "aluminium" => Self::Aluminum,
            "steel" => Self::Steel,
            "titanium" => Self::Titanium,
            "brass" => Self::Brass,
            "plastic" => Self::Plastic,
            "other" => Self::Other,
            unknown => {
                tracing::debug!("Unknown material '{}', using Other", unknown);
                Self::Other
            }
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::Aluminum
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aluminum => write!(f, "Aluminum"),
            Self::Steel => write!(f, "Steel"),
            Self::Titanium => write!(f, "Titanium"),
            Self::Brass => write!(f, "Brass"),
            Self::Plastic => write!(f, "Plastic"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl From<&str> for Material {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for Material {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Material> for String {
    fn from(material: Material) -> Self {
        material.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_table() {
        assert_eq!(Material::Aluminum.strength_coefficient(), 100.0);
        assert_eq!(Material::Steel.strength_coefficient(), 200.0);
        assert_eq!(Material::Titanium.strength_coefficient(), 300.0);
        assert_eq!(Material::Brass.strength_coefficient(), 150.0);
        assert_eq!(Material::Plastic.strength_coefficient(), 50.0);
        assert_eq!(Material::Other.strength_coefficient(), 120.0);
    }

    #[test]
    fn test_unknown_name_falls_back_to_other() {
        assert_eq!(Material::from_name("Unobtainium"), Material::Other);
        assert_eq!(Material::from_name(""), Material::Other);
        assert_eq!(
            Material::from_name("Inconel").strength_coefficient(),
            OTHER_STRENGTH_N_PER_MM2
        );
    }

    #[test]
    fn test_display_round_trips_through_name() {
        for material in Material::all() {
            assert_eq!(Material::from_name(&material.to_string()), *material);
        }
        assert_eq!(Material::from_name("  STEEL "), Material::Steel);
    }
}
