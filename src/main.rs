use anyhow::Context;
use clap::{CommandFactory, Parser};
use vmccopilot::cli::Cli;
use vmccopilot::{generate, init_logging, Collaborators, Config, MachiningRequest, MeshUpload};
use vmccopilot_settings::read_document;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;

    if cli.defaults {
        let defaults =
            toml::to_string_pretty(&config.defaults).context("Failed to render default request")?;
        print!("{}", defaults);
        return Ok(());
    }

    let Some(request_path) = cli.request.as_deref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Some(output) = &cli.output {
        config.output.directory = output.clone();
    }
    if let Some(overwrite) = cli.overwrite_override() {
        config.output.overwrite = overwrite;
    }

    init_logging(&config.logging)?;
    tracing::info!("Loading request {}", request_path.display());

    let request: MachiningRequest = read_document(request_path)
        .with_context(|| format!("Failed to read request {}", request_path.display()))?;

    let mesh = cli
        .mesh
        .as_deref()
        .map(MeshUpload::from_path)
        .transpose()
        .context("Failed to load mesh")?;

    let collaborators = Collaborators {
        mesh: mesh.as_ref(),
        ..Collaborators::default()
    };
    let report = generate(&request, &config, collaborators)?;
    print!("{}", report);

    Ok(())
}
