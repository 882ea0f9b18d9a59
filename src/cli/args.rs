//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Build-time style configuration for the teleblog front end
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "style.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Warn about unknown options instead of failing
    #[arg(long, global = true)]
    pub allow_unknown: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and validate the config, then print a summary
    #[command(visible_alias = "c")]
    Check,

    /// List the content files the compiler would scan
    #[command(visible_alias = "s")]
    Scan {
        /// Print absolute paths instead of root-relative ones
        #[arg(short, long)]
        absolute: bool,
    },

    /// Print the resolved roles of a theme as JSON
    #[command(visible_alias = "t")]
    Theme {
        /// Registered theme name (default: the configured dark theme)
        name: Option<String>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Render tailwind.config.js
    #[command(visible_alias = "e")]
    Emit {
        /// Write to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Render tailwind.config.js next to the config and run the compiler
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },
}

/// Compiler run arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Input CSS file (with the @tailwind directives)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output CSS file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Minify the generated CSS
    #[arg(short, long)]
    pub minify: bool,

    /// Compiler command (e.g. `tailwindcss` or `npx tailwindcss`)
    #[arg(long, num_args = 1.., value_delimiter = ' ', default_value = crate::tailwind::DEFAULT_COMMAND)]
    pub command: Vec<String>,

    /// Suppress compiler output
    #[arg(short, long)]
    pub quiet: bool,
}
