//! Generation pipeline
//!
//! Validates a request, runs the estimates, consults the optional
//! collaborators, and writes the G-code and CAD artifacts. Collaborator
//! failures are recorded in the report; everything else aborts the run.

use crate::types::{CollaboratorFailure, Collaborators, GenerationReport, Service};
use anyhow::{Context, Result};
use tracing::{info, warn};
use vmccopilot_camtools::{
    design_prompt, estimate, ArtifactWriter, CadArtifact, GCodeArtifact,
};
use vmccopilot_core::MachiningRequest;
use vmccopilot_settings::Config;

/// Run one generation for `request`
pub fn generate(
    request: &MachiningRequest,
    config: &Config,
    collaborators: Collaborators<'_>,
) -> Result<GenerationReport> {
    request
        .validate()
        .context("Machining request failed validation")?;

    let estimate = estimate(request).context("Failed to estimate cutting parameters")?;
    info!(
        shape = %request.shape,
        material = %request.material,
        force_n = estimate.cutting_force_n,
        tool_life = %estimate.tool_life,
        "Estimated cutting parameters"
    );

    let mut failures = Vec::new();

    let prompt = design_prompt(request);
    let description = match collaborators.text_generator {
        Some(generator) => match generator.generate(&prompt) {
            Ok(text) => Some(text),
            Err(error) => {
                warn!("Design description failed: {}", error);
                failures.push(CollaboratorFailure {
                    service: Service::TextGeneration,
                    error,
                });
                None
            }
        },
        None => {
            tracing::debug!("No text generator configured; skipping design description");
            None
        }
    };

    let writer = ArtifactWriter::new(&config.output.directory, config.output.overwrite);
    let gcode_path = writer
        .write(&GCodeArtifact::for_request(request))
        .context("Failed to write G-code file")?;
    let cad_path = writer
        .write(&CadArtifact::for_request(request))
        .context("Failed to write CAD file")?;

    let cam_output = match (collaborators.toolpath_generator, collaborators.mesh) {
        (Some(generator), Some(mesh)) => {
            info!("Requesting toolpath for {}", mesh.file_name());
            match generator.generate_toolpath(mesh, &request.tool_spec()) {
                Ok(text) => Some(text),
                Err(error) => {
                    warn!("CAM toolpath failed: {}", error);
                    failures.push(CollaboratorFailure {
                        service: Service::ToolpathGeneration,
                        error,
                    });
                    None
                }
            }
        }
        (None, Some(mesh)) => {
            warn!("No CAM backend configured; ignoring {}", mesh.file_name());
            None
        }
        _ => None,
    };

    Ok(GenerationReport {
        estimate,
        prompt,
        description,
        cam_output,
        gcode_path,
        cad_path,
        failures,
    })
}
