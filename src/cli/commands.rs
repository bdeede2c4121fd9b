//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, InputArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::GlyphStyle;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute(cli: &Cli) -> CliResult<()> {
    let config_dir = resolve_config_dir(cli.config_dir.as_deref());
    let settings = Settings::load(config_dir.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Render { input, glyphs }) => render(settings, input, *glyphs),
        Some(Commands::Outline { input }) => outline(settings, input),
        Some(Commands::Nodes { input }) => nodes(settings, input),
        Some(Commands::Config { command }) => {
            config_command(&settings, config_dir.as_deref(), command)
        }
        Some(Commands::Completion { shell }) => completion(*shell),
        None => Cli::command()
            .print_help()
            .map_err(|e| InfraError::io("print help", e).into()),
    }
}

fn resolve_config_dir(dir: Option<&Path>) -> Option<PathBuf> {
    dir.map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok())
}

#[instrument(skip(settings))]
fn render(
    mut settings: Settings,
    input: &InputArgs,
    glyphs: Option<GlyphStyle>,
) -> CliResult<()> {
    if let Some(style) = glyphs {
        settings.glyphs = style;
    }
    let container = ServiceContainer::new(settings);
    let text = container.input.read(&input.source())?;
    let tree = container.tree.build_tree(&text)?;
    let diagram = container.tree.display_tree(&tree)?;
    output::info(diagram.trim_end_matches('\n'));
    Ok(())
}

#[instrument(skip(settings))]
fn outline(settings: Settings, input: &InputArgs) -> CliResult<()> {
    let container = ServiceContainer::new(settings);
    let text = container.input.read(&input.source())?;
    let outline = container.tree.outline(&text)?;
    output::info(outline.trim_end_matches('\n'));
    Ok(())
}

#[instrument(skip(settings))]
fn nodes(settings: Settings, input: &InputArgs) -> CliResult<()> {
    let container = ServiceContainer::new(settings);
    let text = container.input.read(&input.source())?;
    for line in container.tree.nodes(&text)? {
        output::info(&line);
    }
    Ok(())
}

fn config_command(
    settings: &Settings,
    config_dir: Option<&Path>,
    command: &ConfigCommands,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(settings.to_toml()?.trim_end());
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => show_path("global", &path),
                None => output::warning("no home directory, global config unavailable"),
            }
            if let Some(dir) = config_dir {
                show_path("local", &local_config_path(dir));
            }
            Ok(())
        }
        ConfigCommands::Init { global, force } => {
            let path = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("no home directory, cannot locate global config".to_string())
                })?
            } else {
                let dir = config_dir.ok_or_else(|| {
                    CliError::Usage("cannot determine local config directory".to_string())
                })?;
                local_config_path(dir)
            };
            init_config(&path, *force)
        }
    }
}

fn show_path(label: &str, path: &Path) {
    let state = if path.exists() { "exists" } else { "not found" };
    output::action(label, &format!("{} ({})", path.display(), state));
}

#[instrument]
fn init_config(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| CliError::cant_create(parent.display().to_string(), e))?;
    }
    std::fs::write(path, Settings::template())
        .map_err(|e| CliError::cant_create(path.display().to_string(), e))?;
    output::success(&format!("Created {}", path.display()));
    Ok(())
}

fn completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
