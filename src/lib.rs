//! # VMC Copilot
//!
//! Collects CNC (VMC) machining parameters, estimates cutting force and tool
//! life, and emits a templated G-code program and a placeholder CAD file.
//!
//! ## Architecture
//!
//! VMC Copilot is organized as a workspace with multiple crates:
//!
//! 1. **vmccopilot-core** - Machining request, material table, validation
//! 2. **vmccopilot-camtools** - Estimator, G-code template, artifacts, collaborator traits
//! 3. **vmccopilot-settings** - Configuration and JSON/TOML persistence
//! 4. **vmccopilot** - Generation pipeline and the command-line binary
//!
//! The G-code is a fixed skeleton. No toolpath is computed here; a real CAM
//! backend can be plugged in through [`ToolpathGenerator`].

pub mod cli;
pub mod pipeline;
pub mod types;

pub use pipeline::generate;
pub use types::{CollaboratorFailure, Collaborators, GenerationReport, Service};

pub use vmccopilot_core::{
    parse_operation_sequence, AdvancedOptions, Error, FinishType, MachiningRequest, Material,
    Operation, PartShape, Result, ToolSpec, ToolType, WorkpieceOrientation,
};

pub use vmccopilot_camtools::{
    cad_filename, design_prompt, estimate, estimate_cutting_force, estimate_tool_life,
    format_cad_placeholder, format_gcode, gcode_filename, ArtifactWriter, CadArtifact,
    CamToolError, CollaboratorError, EstimateError, EstimateResult, GCodeArtifact, MeshUpload,
    TextGenerator, ToolLife, ToolpathGenerator,
};

pub use vmccopilot_settings::{Config, LogLevel, LoggingSettings, OutputSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - RUST_LOG environment variable support, falling back to `settings.level`
/// - Pretty output, or JSON lines when `settings.json` is set
/// - stderr as the sink so stdout carries only the report
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = match settings.level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    if settings.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
