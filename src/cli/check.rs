//! `check` command.

use crate::config::StyleConfig;
use crate::log;
use anyhow::Result;
use owo_colors::OwoColorize;

/// Print what the loaded document configures.
///
/// Loading already validated everything; this only reports.
pub fn print_summary(config: &StyleConfig) -> Result<()> {
    let scanner = config.scanner()?;
    let files = scanner.scan().count();

    println!("{} {}", "config".dimmed(), config.config_path.display());
    println!("{} {}", "content".dimmed(), config.content.as_slice().join(", "));
    println!("{} {} files", "matched".dimmed(), files);
    println!("{} {}", "darkMode".dimmed(), config.dark_mode);
    println!(
        "{} {}",
        "preflight".dimmed(),
        if config.core_plugins.preflight { "on" } else { "off" }
    );
    for (token, stack) in &config.theme.extend.font_family {
        println!("{} {} = {}", "font".dimmed(), token, stack.join(", "));
    }
    println!(
        "{} {}",
        "plugins".dimmed(),
        config.plugins.iter().collect::<Vec<_>>().join(", ")
    );
    println!(
        "{} {} (dark: {})",
        "themes".dimmed(),
        config.themes().names().collect::<Vec<_>>().join(", "),
        config.plugin_config.effective_dark_theme().unwrap_or("none").bold()
    );

    if files == 0 {
        log!("warning"; "content globs match no files, generated CSS will be empty");
    }
    log!("check"; "{}", "ok".green());
    Ok(())
}
