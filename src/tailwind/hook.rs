//! Compiler invocation.
//!
//! Tailwind CLI arguments: `command -c config -i input -o output [--minify]`

use crate::config::StyleConfig;
use crate::log;
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default compiler command.
pub const DEFAULT_COMMAND: &str = "tailwindcss";

/// File name of the rendered config, written next to `style.toml`.
pub const GENERATED_CONFIG: &str = "tailwind.config.js";

/// Package runners that fetch the compiler on demand.
const PACKAGE_RUNNERS: &[&str] = &["npx", "bunx", "pnpx", "yarn"];

fn is_package_runner(program: &str) -> bool {
    PACKAGE_RUNNERS.contains(&program)
}

/// One compiler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerHook {
    /// Command prefix, e.g. `["tailwindcss"]` or `["npx", "tailwindcss"]`.
    pub command: Vec<String>,
    /// Rendered `tailwind.config.js`.
    pub config: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub minify: bool,
    /// Suppress compiler stdout.
    pub quiet: bool,
}

impl CompilerHook {
    /// Full argv: command + `-c config -i input -o output [--minify]`.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = self.command.clone();
        argv.extend([
            "-c".into(),
            self.config.display().to_string(),
            "-i".into(),
            self.input.display().to_string(),
            "-o".into(),
            self.output.display().to_string(),
        ]);
        if self.minify {
            argv.push("--minify".into());
        }
        argv
    }

    /// Check the command exists before spawning it.
    ///
    /// Package runners only need to exist themselves; the package they run is
    /// fetched at run time.
    pub fn check_command(&self) -> Result<()> {
        let Some(program) = self.command.first() else {
            bail!("compiler command is empty");
        };

        if which::which(program).is_err() {
            bail!("`{program}` not found, install it or pass --command");
        }

        if is_package_runner(program) && self.command.len() > 1 {
            log!("hint"; "`{}` via `{}`, ensure the package is installed", self.command[1], program);
        }
        Ok(())
    }

    /// Run the compiler in `cwd` (content globs resolve from there).
    pub fn run(&self, cwd: &Path) -> Result<()> {
        self.check_command()?;

        let argv = self.argv();
        if !self.quiet {
            log!("build"; "`{}` running", argv.join(" "));
        }

        let output = Command::new(&argv[0])
            .args(&argv[1..])
            .current_dir(cwd)
            .output()
            .with_context(|| format!("failed to spawn `{}`", argv[0]))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("`{}` failed ({}):\n{}", argv[0], output.status, stderr.trim());
        }

        if !self.quiet {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stdout = stdout.trim();
            if !stdout.is_empty() {
                println!("{stdout}");
            }
        }
        Ok(())
    }
}

/// Render the document next to `style.toml` and return the written path.
pub fn write_generated_config(config: &StyleConfig) -> Result<PathBuf> {
    let path = config.root_join(GENERATED_CONFIG);
    let js = super::render(config)?;
    std::fs::write(&path, js).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hook(command: &[&str], minify: bool) -> CompilerHook {
        CompilerHook {
            command: command.iter().map(|s| s.to_string()).collect(),
            config: PathBuf::from("tailwind.config.js"),
            input: PathBuf::from("assets/main.css"),
            output: PathBuf::from("public/style.css"),
            minify,
            quiet: true,
        }
    }

    #[test]
    fn test_argv() {
        assert_eq!(
            hook(&["tailwindcss"], false).argv(),
            vec![
                "tailwindcss",
                "-c",
                "tailwind.config.js",
                "-i",
                "assets/main.css",
                "-o",
                "public/style.css",
            ]
        );
    }

    #[test]
    fn test_argv_runner_and_minify() {
        let argv = hook(&["npx", "tailwindcss"], true).argv();
        assert_eq!(argv[0], "npx");
        assert_eq!(argv[1], "tailwindcss");
        assert_eq!(argv.last().map(String::as_str), Some("--minify"));
    }

    #[test]
    fn test_package_runners() {
        assert!(is_package_runner("npx"));
        assert!(is_package_runner("yarn"));
        assert!(!is_package_runner("dlx"));
        assert!(!is_package_runner("tailwindcss"));
    }

    #[test]
    fn test_missing_command() {
        assert!(hook(&[], false).check_command().is_err());
        assert!(
            hook(&["definitely-not-a-css-compiler-7c1e"], false)
                .check_command()
                .is_err()
        );
    }

    #[test]
    fn test_write_generated_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("style.toml");
        std::fs::write(&path, "content = [\"pages/**/*.html\"]").unwrap();
        let config =
            StyleConfig::load(&path, crate::config::UnknownOptionPolicy::Deny).unwrap();

        let written = write_generated_config(&config).unwrap();
        assert!(written.ends_with(GENERATED_CONFIG));
        let js = std::fs::read_to_string(written).unwrap();
        assert!(js.contains("content: [\"pages/**/*.html\"],"));
    }
}
