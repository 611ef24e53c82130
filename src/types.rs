use std::fmt;
use std::path::PathBuf;
use vmccopilot_camtools::{
    CollaboratorError, EstimateResult, MeshUpload, TextGenerator, ToolpathGenerator,
};

/// External services available to one generation run
#[derive(Clone, Copy, Default)]
pub struct Collaborators<'a> {
    /// Produces the prose design description
    pub text_generator: Option<&'a dyn TextGenerator>,
    /// External CAM backend
    pub toolpath_generator: Option<&'a dyn ToolpathGenerator>,
    /// Mesh forwarded to the CAM backend
    pub mesh: Option<&'a MeshUpload>,
}

/// Which collaborator failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    TextGeneration,
    ToolpathGeneration,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextGeneration => write!(f, "Design description"),
            Self::ToolpathGeneration => write!(f, "CAM toolpath"),
        }
    }
}

/// A non-fatal collaborator failure recorded during a run
#[derive(Debug, Clone, PartialEq)]
pub struct CollaboratorFailure {
    pub service: Service,
    pub error: CollaboratorError,
}

/// Everything one generation run produced
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub estimate: EstimateResult,
    /// Prompt offered to the text generator
    pub prompt: String,
    pub description: Option<String>,
    /// Opaque output of the CAM backend
    pub cam_output: Option<String>,
    pub gcode_path: PathBuf,
    pub cad_path: PathBuf,
    pub failures: Vec<CollaboratorFailure>,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Design Generation and Toolpath Complete!")?;
        writeln!(f, "G-code: {}", self.gcode_path.display())?;
        writeln!(f, "CAD Model (STEP format): {}", self.cad_path.display())?;
        writeln!(
            f,
            "Estimated Cutting Force: {:.1} N",
            self.estimate.cutting_force_n
        )?;
        writeln!(f, "Tool Life Estimation: {}", self.estimate.tool_life)?;

        if let Some(description) = &self.description {
            writeln!(f)?;
            writeln!(f, "{}", description.trim_end())?;
        }
        if let Some(cam_output) = &self.cam_output {
            writeln!(f)?;
            writeln!(f, "CAM output: {} bytes", cam_output.len())?;
        }
        for failure in &self.failures {
            writeln!(f, "{} failed: {}", failure.service, failure.error)?;
        }
        Ok(())
    }
}
