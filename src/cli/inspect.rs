//! `scan` and `theme` commands.

use crate::config::StyleConfig;
use crate::log;
use anyhow::{Context, Result, bail};
use std::io::{self, Write};

/// Print every matched content file, one per line.
pub fn print_scan(config: &StyleConfig, absolute: bool) -> Result<()> {
    let scanner = config.scanner()?;
    let mut out = io::stdout().lock();

    let mut count = 0usize;
    for path in scanner.scan() {
        if absolute {
            writeln!(out, "{}", path.display())?;
        } else {
            writeln!(out, "{}", scanner.relative(&path))?;
        }
        count += 1;
    }
    out.flush()?;

    if count == 0 {
        log!("scan"; "no files matched {}", config.content.as_slice().join(", "));
    } else {
        crate::debug!("scan"; "{} files", count);
    }
    Ok(())
}

/// Print a theme's resolved roles as a JSON object.
pub fn print_theme(config: &StyleConfig, name: Option<&str>, pretty: bool) -> Result<()> {
    let Some(name) = name.or(config.plugin_config.effective_dark_theme()) else {
        bail!("no dark theme is registered, pass a theme name");
    };
    let roles = config.resolve_theme(name)?;

    let json = if pretty {
        serde_json::to_string_pretty(&roles)
    } else {
        serde_json::to_string(&roles)
    }
    .context("failed to serialize theme")?;

    println!("{json}");
    Ok(())
}
