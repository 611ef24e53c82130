//! Artifact naming, the CAD placeholder, and writing artifacts to disk
//!
//! Names are derived from diameter and height only. Two requests with the
//! same dimensions share a name, so later writes replace earlier ones unless
//! overwriting is disabled.

use crate::error::{CamToolError, CamToolResult};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vmccopilot_core::{MachiningRequest, Material};

/// Text output offered for download
pub trait TextArtifact {
    /// File name, without directory
    fn filename(&self) -> &str;
    /// File body
    fn content(&self) -> &str;
    /// MIME type advertised to downloaders
    fn mime_type(&self) -> &'static str;
}

/// `part_{diameter}x{height}_gcode.gcode`
pub fn gcode_filename(diameter_mm: f64, height_mm: f64) -> String {
    format!("part_{}x{}_gcode.gcode", diameter_mm, height_mm)
}

/// `part_{diameter}x{height}_model.step`
pub fn cad_filename(diameter_mm: f64, height_mm: f64) -> String {
    format!("part_{}x{}_model.step", diameter_mm, height_mm)
}

/// Placeholder body for the CAD download. Not STEP data.
pub fn format_cad_placeholder(material: Material, diameter_mm: f64, height_mm: f64) -> String {
    format!(
        "CAD file for {} part with diameter {}mm and height {}mm.",
        material, diameter_mm, height_mm
    )
}

/// Placeholder CAD model and its download name
#[derive(Debug, Clone, PartialEq)]
pub struct CadArtifact {
    pub filename: String,
    pub content: String,
}

impl CadArtifact {
    pub fn for_request(request: &MachiningRequest) -> Self {
        Self {
            filename: cad_filename(request.diameter_mm, request.height_mm),
            content: format_cad_placeholder(
                request.material,
                request.diameter_mm,
                request.height_mm,
            ),
        }
    }
}

impl TextArtifact for CadArtifact {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn mime_type(&self) -> &'static str {
        "application/step"
    }
}

/// Writes artifacts into an output directory
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    directory: PathBuf,
    overwrite: bool,
}

impl ArtifactWriter {
    pub fn new(directory: impl Into<PathBuf>, overwrite: bool) -> Self {
        Self {
            directory: directory.into(),
            overwrite,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path an artifact would be written to
    pub fn target_path(&self, artifact: &impl TextArtifact) -> PathBuf {
        self.directory.join(artifact.filename())
    }

    /// Write `artifact`, creating the directory if needed. Returns the path.
    pub fn write(&self, artifact: &impl TextArtifact) -> CamToolResult<PathBuf> {
        let path = self.target_path(artifact);

        if !self.directory.as_os_str().is_empty() && !self.directory.exists() {
            debug!("Creating output directory {}", self.directory.display());
            fs::create_dir_all(&self.directory)?;
        }

        if self.overwrite {
            fs::write(&path, artifact.content())?;
        } else {
            // create_new fails atomically if another writer got there first
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    return Err(CamToolError::ArtifactExists(path));
                }
                Err(e) => return Err(e.into()),
            };
            file.write_all(artifact.content().as_bytes())?;
        }
        info!(
            path = %path.display(),
            mime = artifact.mime_type(),
            bytes = artifact.content().len(),
            "Wrote artifact"
        );

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filenames() {
        assert_eq!(gcode_filename(50.0, 100.0), "part_50x100_gcode.gcode");
        assert_eq!(cad_filename(50.0, 100.0), "part_50x100_model.step");
        assert_eq!(gcode_filename(12.5, 3.0), "part_12.5x3_gcode.gcode");
    }

    #[test]
    fn test_cad_placeholder() {
        assert_eq!(
            format_cad_placeholder(Material::Titanium, 50.0, 100.0),
            "CAD file for Titanium part with diameter 50mm and height 100mm."
        );
    }

    #[test]
    fn test_cad_artifact_for_request() {
        let artifact = CadArtifact::for_request(&MachiningRequest::default());
        assert_eq!(artifact.filename(), "part_50x100_model.step");
        assert_eq!(artifact.mime_type(), "application/step");
        assert!(artifact.content().starts_with("CAD file for Aluminum part"));
    }
}
