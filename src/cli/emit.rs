//! `emit` and `build` commands.

use super::BuildArgs;
use crate::config::StyleConfig;
use crate::log;
use crate::tailwind::{self, CompilerHook};
use anyhow::{Context, Result};
use std::path::Path;

/// Render `tailwind.config.js` to a file or stdout.
pub fn emit_config(config: &StyleConfig, output: Option<&Path>) -> Result<()> {
    let js = tailwind::render(config)?;
    match output {
        Some(path) => {
            std::fs::write(path, js)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log!("emit"; "wrote {}", path.display());
        }
        None => print!("{js}"),
    }
    Ok(())
}

/// Render the config next to `style.toml` and run the compiler from there.
pub fn build_css(config: &StyleConfig, args: &BuildArgs) -> Result<()> {
    if config.scanner()?.scan().next().is_none() {
        log!("warning"; "content globs match no files, generated CSS will be empty");
    }

    // The compiler runs from the project root; pin paths given relative to cwd.
    let input = std::path::absolute(&args.input)?;
    let output = std::path::absolute(&args.output)?;
    if !input.is_file() {
        anyhow::bail!("input file not found: {}", input.display());
    }

    let generated = tailwind::write_generated_config(config)?;
    let hook = CompilerHook {
        command: args.command.clone(),
        config: generated,
        input,
        output,
        minify: args.minify,
        quiet: args.quiet,
    };

    hook.run(config.get_root())?;
    log!("build"; "wrote {}", args.output.display());
    Ok(())
}
