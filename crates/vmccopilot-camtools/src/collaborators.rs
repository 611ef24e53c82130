//! Contracts for external collaborators
//!
//! Text generation produces a display-only design description; a CAM
//! backend turns an uploaded mesh into toolpath text. Neither output is
//! parsed or fed back into the estimates.

use crate::error::{CamToolError, CamToolResult, CollaboratorError};
use std::path::Path;
use vmccopilot_core::{MachiningRequest, ToolSpec};

/// Prompt sent to the text generator for a design description
pub fn design_prompt(request: &MachiningRequest) -> String {
    format!(
        "Create a 3D {} CNC VMC model with diameter {}mm, height {}mm, material {}, \
         using tool {}, with cutting speed {}mm/min, feed rate {}mm/min, depth of cut {}mm. \
         Apply {} finish.",
        request.shape,
        request.diameter_mm,
        request.height_mm,
        request.material,
        request.tool_type,
        request.cutting_speed_mm_per_min,
        request.feed_rate_mm_per_min,
        request.depth_of_cut_mm,
        request.finish_type,
    )
}

/// Free-text generation service
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, CollaboratorError>;
}

/// External CAM backend producing toolpath / G-code text from a mesh
pub trait ToolpathGenerator {
    fn generate_toolpath(
        &self,
        mesh: &MeshUpload,
        tool: &ToolSpec,
    ) -> Result<String, CollaboratorError>;
}

/// An uploaded STL mesh
#[derive(Debug, Clone, PartialEq)]
pub struct MeshUpload {
    file_name: String,
    bytes: Vec<u8>,
}

impl MeshUpload {
    /// Accept a non-empty upload whose name ends in `.stl`
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> CamToolResult<Self> {
        let file_name = file_name.into();

        let is_stl = Path::new(&file_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("stl"));
        if !is_stl {
            return Err(CamToolError::InvalidMesh(format!(
                "{} is not an .stl file",
                file_name
            )));
        }
        if bytes.is_empty() {
            return Err(CamToolError::InvalidMesh(format!("{} is empty", file_name)));
        }

        Ok(Self { file_name, bytes })
    }

    /// Read an upload from disk
    pub fn from_path(path: &Path) -> CamToolResult<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        Self::new(file_name, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
