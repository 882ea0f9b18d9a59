//! Command-line interface module.

mod args;
pub mod check;
pub mod emit;
pub mod inspect;

pub use args::{BuildArgs, Cli, Commands};

use crate::config::{StyleConfig, UnknownOptionPolicy, find_config_file};
use crate::log;
use anyhow::Result;
use clap::ColorChoice;

/// Dispatch a parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    crate::logger::set_verbose(cli.verbose);

    let config = load_config(cli)?;

    match &cli.command {
        Commands::Check => check::print_summary(&config),
        Commands::Scan { absolute } => inspect::print_scan(&config, *absolute),
        Commands::Theme { name, pretty } => {
            inspect::print_theme(&config, name.as_deref(), *pretty)
        }
        Commands::Emit { output } => emit::emit_config(&config, output.as_deref()),
        Commands::Build { args } => emit::build_css(&config, args),
    }
}

/// Locate and load the config named by `--config`.
fn load_config(cli: &Cli) -> Result<StyleConfig> {
    let Some(path) = find_config_file(&cli.config) else {
        log!("error"; "config file '{}' not found", cli.config.display());
        anyhow::bail!("no style config");
    };

    let policy = if cli.allow_unknown {
        UnknownOptionPolicy::Warn
    } else {
        UnknownOptionPolicy::Deny
    };

    Ok(StyleConfig::load(&path, policy)?)
}
