//! `[pluginConfig]` options for the daisyUI theming plugin.
//!
//! # Example
//!
//! ```toml
//! [pluginConfig]
//! darkTheme = "bumblebee"
//!
//! [[pluginConfig.themes]]
//! name = "bumblebee"
//! inherits = "bumblebee"
//!
//! [pluginConfig.themes.colors]
//! primary = "#f9d72f"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::theme::{ThemeRoles, preset};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Package name the options belong to.
pub const DAISYUI: &str = "daisyui";

/// Dark theme daisyUI falls back to when `darkTheme` is unset.
pub const DEFAULT_DARK_THEME: &str = "dark";

/// daisyUI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
    /// Registered themes, first one is the default (light) theme.
    pub themes: Vec<ThemeEntry>,
    /// Registered theme applied under the dark strategy. When unset, `dark`
    /// is used if registered and the dark strategy has no theme otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_theme: Option<String>,
    /// Apply background/foreground colors to the root element.
    pub base: bool,
    /// Include daisyUI colors and component design decisions.
    pub styled: bool,
    /// Add responsive and modifier utility classes.
    pub utils: bool,
    /// Prefix for daisyUI class names (components, modifiers, responsive).
    pub prefix: String,
    /// Print daisyUI version and config info while building.
    pub logs: bool,
    /// Element that receives the theme CSS variables.
    pub theme_root: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            themes: vec![
                ThemeEntry::Preset("light".into()),
                ThemeEntry::Preset("dark".into()),
            ],
            dark_theme: None,
            base: true,
            styled: true,
            utils: true,
            prefix: String::new(),
            logs: true,
            theme_root: ":root".into(),
        }
    }
}

/// One element of `pluginConfig.themes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeEntry {
    /// A built-in preset registered as-is (`"light"`).
    Preset(String),
    /// A named custom theme.
    Custom(ThemeDefinition),
}

impl ThemeEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Preset(name) => name,
            Self::Custom(def) => &def.name,
        }
    }
}

/// A custom theme: optional base plus role overrides.
///
/// Unknown keys are rejected here: an untagged entry can't report them
/// through the ignored-key collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeDefinition {
    pub name: String,
    /// Theme whose roles are copied before `colors` is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits: Option<String>,
    /// Role overrides, e.g. `primary = "#f9d72f"`.
    #[serde(default)]
    pub colors: ThemeRoles,
}

pub struct PluginConfigFields {
    pub themes: FieldPath,
    pub dark_theme: FieldPath,
    pub prefix: FieldPath,
    pub theme_root: FieldPath,
}

impl PluginConfig {
    pub const FIELDS: PluginConfigFields = PluginConfigFields {
        themes: FieldPath::new("pluginConfig.themes"),
        dark_theme: FieldPath::new("pluginConfig.darkTheme"),
        prefix: FieldPath::new("pluginConfig.prefix"),
        theme_root: FieldPath::new("pluginConfig.themeRoot"),
    };

    /// Theme used under the dark strategy, if any.
    pub fn effective_dark_theme(&self) -> Option<&str> {
        match &self.dark_theme {
            Some(name) => Some(name.as_str()),
            None => self
                .themes
                .iter()
                .any(|entry| entry.name() == DEFAULT_DARK_THEME)
                .then_some(DEFAULT_DARK_THEME),
        }
    }

    /// `true` when anything differs from daisyUI's defaults.
    pub fn is_customized(&self) -> bool {
        *self != Self::default()
    }

    /// # Checks
    /// - theme names are non-blank and unique
    /// - bare entries name a built-in preset
    /// - role names and values are non-blank
    /// - `prefix` has no whitespace, `themeRoot` is non-blank
    ///
    /// An explicit `darkTheme` is checked by resolution, which reports
    /// `UnknownTheme` rather than a diagnostic.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for entry in &self.themes {
            let name = entry.name();
            if name.trim().is_empty() {
                diag.error(Self::FIELDS.themes, "theme with an empty name");
                continue;
            }
            if !seen.insert(name) {
                diag.error(
                    Self::FIELDS.themes,
                    format!("theme `{name}` is registered twice"),
                );
            }

            match entry {
                ThemeEntry::Preset(name) if preset::find(name).is_none() => {
                    diag.error_with_hint(
                        Self::FIELDS.themes,
                        format!("`{name}` is not a built-in theme"),
                        format!(
                            "use one of {} or define it with a `name` table",
                            preset::names().collect::<Vec<_>>().join(", ")
                        ),
                    );
                }
                ThemeEntry::Preset(_) => {}
                ThemeEntry::Custom(def) => Self::validate_definition(def, diag),
            }
        }

        if self.prefix.chars().any(char::is_whitespace) {
            diag.error(Self::FIELDS.prefix, "prefix must not contain whitespace");
        }
        if self.theme_root.trim().is_empty() {
            diag.error(Self::FIELDS.theme_root, "themeRoot must be a selector");
        }
    }

    fn validate_definition(def: &ThemeDefinition, diag: &mut ConfigDiagnostics) {
        for (role, value) in &def.colors {
            if role.trim().is_empty() || value.trim().is_empty() {
                diag.error(
                    Self::FIELDS.themes,
                    format!("theme `{}` has a blank color role or value", def.name),
                );
            }
        }
        if def.inherits.is_none() && def.colors.is_empty() {
            diag.warn(
                Self::FIELDS.themes,
                format!("theme `{}` defines no colors and inherits nothing", def.name),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let daisy = &config.plugin_config;
        assert_eq!(daisy.dark_theme, None);
        assert_eq!(daisy.effective_dark_theme(), Some(DEFAULT_DARK_THEME));
        assert_eq!(daisy.themes.len(), 2);
        assert!(daisy.base && daisy.styled && daisy.utils && daisy.logs);
        assert_eq!(daisy.prefix, "");
        assert_eq!(daisy.theme_root, ":root");
        assert!(!daisy.is_customized());
    }

    #[test]
    fn test_mixed_theme_entries() {
        let config = test_parse_config(
            r##"
[pluginConfig]
themes = [
    "light",
    { name = "brand", inherits = "cupcake", colors = { primary = "#123456" } },
]
darkTheme = "brand"
"##,
        );
        let themes = &config.plugin_config.themes;
        assert_eq!(themes[0], ThemeEntry::Preset("light".into()));
        match &themes[1] {
            ThemeEntry::Custom(def) => {
                assert_eq!(def.name, "brand");
                assert_eq!(def.inherits.as_deref(), Some("cupcake"));
                assert_eq!(def.colors["primary"], "#123456");
            }
            other => panic!("expected custom theme, got {other:?}"),
        }
        assert!(config.plugin_config.is_customized());
    }

    #[test]
    fn test_array_of_tables_form() {
        let config = test_parse_config(
            r#"
[pluginConfig]
darkTheme = "bumblebee"

[[pluginConfig.themes]]
name = "bumblebee"
inherits = "bumblebee"
"#,
        );
        assert_eq!(config.plugin_config.themes.len(), 1);
        assert_eq!(config.plugin_config.themes[0].name(), "bumblebee");
    }

    #[test]
    fn test_unset_dark_theme_follows_registration() {
        let config = test_parse_config(
            r#"
[pluginConfig]
themes = [{ name = "bumblebee", inherits = "bumblebee" }]
"#,
        );
        assert_eq!(config.plugin_config.dark_theme, None);
        assert_eq!(config.plugin_config.effective_dark_theme(), None);

        let config = test_parse_config("[pluginConfig]\nthemes = [\"bumblebee\", \"dark\"]");
        assert_eq!(config.plugin_config.effective_dark_theme(), Some("dark"));

        let config = test_parse_config("[pluginConfig]\ndarkTheme = \"light\"");
        assert_eq!(config.plugin_config.effective_dark_theme(), Some("light"));
        assert!(config.plugin_config.is_customized());
    }

    #[test]
    fn test_typo_in_theme_table_is_parse_error() {
        let content = r#"
content = ["a/*.html"]
[[pluginConfig.themes]]
name = "x"
inherit = "light"
"#;
        assert!(toml::from_str::<crate::config::StyleConfig>(content).is_err());
    }

    #[test]
    fn test_validate_reports_theme_problems() {
        let daisy = PluginConfig {
            themes: vec![
                ThemeEntry::Preset("light".into()),
                ThemeEntry::Preset("light".into()),
                ThemeEntry::Preset("synthwave-2077".into()),
                ThemeEntry::Custom(ThemeDefinition {
                    name: "blank".into(),
                    inherits: None,
                    colors: [("primary".to_string(), " ".to_string())].into(),
                }),
            ],
            prefix: "d ".into(),
            ..PluginConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        daisy.validate(&mut diag);
        // duplicate, unknown preset, blank value, prefix
        assert_eq!(diag.len(), 4);
    }

    #[test]
    fn test_empty_definition_warns() {
        let daisy = PluginConfig {
            themes: vec![ThemeEntry::Custom(ThemeDefinition {
                name: "empty".into(),
                inherits: None,
                colors: ThemeRoles::new(),
            })],
            ..PluginConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        daisy.validate(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
