//! Style configuration management for `style.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per option group
//! │   ├── content    # content
//! │   ├── dark_mode  # darkMode
//! │   ├── theme      # [theme.extend]
//! │   ├── core_plugins # [corePlugins]
//! │   ├── plugins    # plugins
//! │   └── daisyui    # [pluginConfig]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # StyleConfig (this file)
//! ```
//!
//! # Loading
//!
//! `load` = parse → unknown-key policy → validate → resolve `darkTheme`.
//! Every step is fatal; a document either loads completely or not at all.

pub mod section;
pub mod types;
mod util;

pub use section::{
    ContentGlobs, CorePlugins, DAISYUI, DarkMode, PluginConfig, PluginList, ThemeDefinition,
    ThemeEntry, ThemeExtend, ThemeSectionConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use crate::scan::{ContentScanner, GlobError};
use crate::theme::{ThemeRegistry, ThemeRoles};
use crate::{debug, log};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "style.toml";

/// What to do with keys outside the recognized option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownOptionPolicy {
    /// Fail with `ConfigError::UnknownOption`.
    #[default]
    Deny,
    /// Log each ignored key and keep going.
    Warn,
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `style.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root: parent of the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Files scanned for class names. Required.
    pub content: ContentGlobs,

    /// Dark variant activation.
    #[serde(default)]
    pub dark_mode: DarkMode,

    /// Token extensions.
    #[serde(default)]
    pub theme: ThemeSectionConfig,

    /// Built-in feature toggles.
    #[serde(default)]
    pub core_plugins: CorePlugins,

    /// Compiler plugins.
    #[serde(default)]
    pub plugins: PluginList,

    /// Theming plugin options.
    #[serde(default)]
    pub plugin_config: PluginConfig,
}

impl StyleConfig {
    /// Load, validate and check a config file.
    ///
    /// The project root becomes the file's parent directory.
    pub fn load(path: &Path, policy: UnknownOptionPolicy) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let mut config = Self::parse(&content, policy)?;
        config.config_path = normalize_path(path);
        config.root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        config.check()?;
        debug!("config"; "loaded {}", config.config_path.display());
        Ok(config)
    }

    /// Load from a string. The root stays empty, so scans resolve against cwd.
    pub fn from_str_with_policy(
        content: &str,
        policy: UnknownOptionPolicy,
    ) -> Result<Self, ConfigError> {
        let config = Self::parse(content, policy)?;
        config.check()?;
        Ok(config)
    }

    fn parse(content: &str, policy: UnknownOptionPolicy) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;

        if !ignored.is_empty() {
            match policy {
                UnknownOptionPolicy::Deny => return Err(ConfigError::UnknownOption(ignored)),
                UnknownOptionPolicy::Warn => Self::print_unknown_fields_warning(&ignored),
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String]) {
        log!("warning"; "unknown options in style config, ignoring:");
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Validation followed by dark theme resolution.
    fn check(&self) -> Result<(), ConfigError> {
        self.validate()?;
        self.resolve_dark_theme()?;
        Ok(())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, collecting all errors before failing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.content.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.plugins.validate(&mut diag);
        self.plugin_config.validate(&mut diag);

        if self.plugin_config.is_customized() && !self.plugins.contains(DAISYUI) {
            diag.warn(
                PluginList::FIELD,
                format!("`pluginConfig` is set but `{DAISYUI}` is not in plugins"),
            );
        }

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    // ========================================================================
    // themes
    // ========================================================================

    pub fn themes(&self) -> ThemeRegistry<'_> {
        ThemeRegistry::new(&self.plugin_config.themes)
    }

    /// Full role mapping of a registered theme, inheritance applied.
    pub fn resolve_theme(&self, name: &str) -> Result<ThemeRoles, ConfigError> {
        self.themes().resolve(name)
    }

    /// Roles of the theme used under the dark strategy.
    ///
    /// `None` when `darkTheme` is unset and no `dark` theme is registered.
    /// An explicit name that isn't registered is `UnknownTheme`.
    pub fn resolve_dark_theme(&self) -> Result<Option<ThemeRoles>, ConfigError> {
        self.plugin_config
            .effective_dark_theme()
            .map(|name| self.resolve_theme(name))
            .transpose()
    }

    // ========================================================================
    // content
    // ========================================================================

    /// Scanner over `content`, rooted at the config file's directory.
    pub fn scanner(&self) -> Result<ContentScanner, GlobError> {
        let root = if self.root.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            self.root.clone()
        };
        ContentScanner::new(root, self.content.as_slice())
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }
}

/// Absolute form of `path`; canonical when it exists.
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `content` entry.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> StyleConfig {
    let config = format!("content = [\"pages/**/*.html\"]\n{extra}");
    let (parsed, ignored) = StyleConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
