//! # VMC Copilot CAM Tools
//!
//! Estimates and text artifacts for a VMC machining request.
//!
//! ## Included
//!
//! - **Estimator**: Cutting force and tool life from the material strength table
//! - **G-code Template**: Fixed setup preamble around a toolpath note, ending in `M30`
//! - **Artifacts**: Deterministic file naming, CAD placeholder, and an output writer
//! - **Collaborators**: Design prompt plus traits for text generation and external CAM
//!
//! The G-code template is not a toolpath compiler. It takes no geometry and
//! emits no motion commands.

pub mod artifacts;
pub mod collaborators;
pub mod error;
pub mod estimator;
pub mod gcode_template;

pub use artifacts::{
    cad_filename, format_cad_placeholder, gcode_filename, ArtifactWriter, CadArtifact,
    TextArtifact,
};
pub use collaborators::{design_prompt, MeshUpload, TextGenerator, ToolpathGenerator};
pub use error::{CamToolError, CamToolResult, CollaboratorError, EstimateError};
pub use estimator::{estimate, estimate_cutting_force, estimate_tool_life, EstimateResult, ToolLife};
pub use gcode_template::{default_toolpath_note, format_gcode, GCodeArtifact};
