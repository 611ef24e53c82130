//! Fixed G-code program template
//!
//! The output is a setup preamble around a descriptive toolpath note. It
//! carries no motion commands and is not derived from part geometry.

use crate::artifacts::{gcode_filename, TextArtifact};
use vmccopilot_core::{MachiningRequest, Material, ToolType};

/// Default note placed where a toolpath would go
pub fn default_toolpath_note(material: Material, tool_type: ToolType) -> String {
    format!(
        "Generating toolpath for {} part with tool {}.",
        material, tool_type
    )
}

/// Render the program text. The first line is `G21`, the last is `M30`.
pub fn format_gcode(material: Material, tool_type: ToolType, toolpath_note: &str) -> String {
    let mut gcode = String::new();

    gcode.push_str("G21 ; Set units to mm\n");
    gcode.push_str("G17 ; Select XY plane\n");
    gcode.push_str("G90 ; Absolute positioning\n");
    gcode.push_str(&format!(
        "; Toolpath for {} part with {}\n",
        material, tool_type
    ));
    gcode.push_str(toolpath_note);
    gcode.push('\n');
    gcode.push_str("M30");

    gcode
}

/// G-code text and its download name
#[derive(Debug, Clone, PartialEq)]
pub struct GCodeArtifact {
    pub filename: String,
    pub content: String,
}

impl GCodeArtifact {
    /// Build the templated program for a request using the default note
    pub fn for_request(request: &MachiningRequest) -> Self {
        let note = default_toolpath_note(request.material, request.tool_type);
        Self::with_note(request, &note)
    }

    /// Build the templated program with a caller-supplied toolpath note
    pub fn with_note(request: &MachiningRequest, toolpath_note: &str) -> Self {
        Self {
            filename: gcode_filename(request.diameter_mm, request.height_mm),
            content: format_gcode(request.material, request.tool_type, toolpath_note),
        }
    }
}

impl TextArtifact for GCodeArtifact {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn mime_type(&self) -> &'static str {
        "application/gcode"
    }
}
