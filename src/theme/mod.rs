//! Theme registry and inheritance resolution.
//!
//! A registered theme is either a bare preset name or a custom definition:
//!
//! ```toml
//! [pluginConfig]
//! themes = [
//!     "light",
//!     { name = "bumblebee", inherits = "bumblebee", colors = { primary = "#f9d72f" } },
//! ]
//! ```
//!
//! Resolution merges the base roles with the definition's overrides, and the
//! override wins on a shared role. A definition whose `inherits` equals its own
//! name extends the built-in preset of that name.

pub mod preset;

use crate::config::{ConfigError, ThemeDefinition, ThemeEntry};
use std::collections::BTreeMap;

pub use preset::Preset;

/// Semantic color role → value.
pub type ThemeRoles = BTreeMap<String, String>;

/// Read-only view over the registered themes of a document.
#[derive(Debug, Clone, Copy)]
pub struct ThemeRegistry<'a> {
    entries: &'a [ThemeEntry],
}

impl<'a> ThemeRegistry<'a> {
    pub const fn new(entries: &'a [ThemeEntry]) -> Self {
        Self { entries }
    }

    /// Registered names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> {
        self.entries.iter().map(ThemeEntry::name)
    }

    pub fn find(&self, name: &str) -> Option<&'a ThemeEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Full role mapping of a registered theme.
    pub fn resolve(&self, name: &str) -> Result<ThemeRoles, ConfigError> {
        let entry = self.find(name).ok_or_else(|| unknown(name))?;
        let mut chain = vec![name.to_string()];
        self.resolve_entry(entry, &mut chain)
    }

    fn resolve_entry(
        &self,
        entry: &ThemeEntry,
        chain: &mut Vec<String>,
    ) -> Result<ThemeRoles, ConfigError> {
        match entry {
            ThemeEntry::Preset(name) => resolve_preset(name),
            ThemeEntry::Custom(def) => {
                let mut roles = match &def.inherits {
                    Some(base) => self.resolve_base(def, base, chain)?,
                    None => ThemeRoles::new(),
                };
                merge_overrides(&mut roles, &def.colors);
                Ok(roles)
            }
        }
    }

    fn resolve_base(
        &self,
        def: &ThemeDefinition,
        base: &str,
        chain: &mut Vec<String>,
    ) -> Result<ThemeRoles, ConfigError> {
        // Inheriting your own name means the preset you shadow.
        if base == def.name {
            return resolve_preset(base);
        }

        match self.find(base) {
            Some(entry) if matches!(entry, ThemeEntry::Custom(_)) => {
                if chain.iter().any(|seen| seen == base) {
                    chain.push(base.to_string());
                    return Err(ConfigError::ThemeCycle {
                        path: std::mem::take(chain),
                    });
                }
                chain.push(base.to_string());
                let roles = self.resolve_entry(entry, chain);
                chain.pop();
                roles
            }
            _ => resolve_preset(base),
        }
    }
}

fn resolve_preset(name: &str) -> Result<ThemeRoles, ConfigError> {
    preset::find(name)
        .map(Preset::to_roles)
        .ok_or_else(|| unknown(name))
}

fn unknown(name: &str) -> ConfigError {
    ConfigError::UnknownTheme {
        name: name.to_string(),
    }
}

/// Apply overrides onto base roles. Idempotent for a fixed override set.
pub fn merge_overrides(roles: &mut ThemeRoles, overrides: &ThemeRoles) {
    for (role, value) in overrides {
        roles.insert(role.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(name: &str, inherits: Option<&str>, colors: &[(&str, &str)]) -> ThemeEntry {
        ThemeEntry::Custom(ThemeDefinition {
            name: name.into(),
            inherits: inherits.map(Into::into),
            colors: colors
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        })
    }

    #[test]
    fn test_self_named_inheritance_is_preset() {
        let entries = vec![custom("bumblebee", Some("bumblebee"), &[])];
        let registry = ThemeRegistry::new(&entries);
        let roles = registry.resolve("bumblebee").unwrap();
        assert_eq!(roles, preset::find("bumblebee").unwrap().to_roles());
    }

    #[test]
    fn test_override_wins() {
        let entries = vec![custom(
            "brand",
            Some("light"),
            &[("primary", "#ff0000"), ("info", "#00f")],
        )];
        let roles = ThemeRegistry::new(&entries).resolve("brand").unwrap();
        let light = preset::find("light").unwrap().to_roles();

        assert_eq!(roles["primary"], "#ff0000");
        assert_eq!(roles["info"], "#00f");
        assert_eq!(roles["base-100"], light["base-100"]);
        assert_eq!(roles.len(), light.len() + 1);
    }

    #[test]
    fn test_merge_overrides_is_idempotent() {
        let overrides: ThemeRoles = [("primary".to_string(), "#123".to_string())].into();
        let mut once = preset::find("dark").unwrap().to_roles();
        merge_overrides(&mut once, &overrides);
        let mut twice = once.clone();
        merge_overrides(&mut twice, &overrides);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_chained_custom_themes() {
        let entries = vec![
            custom("base", Some("cupcake"), &[("accent", "#111")]),
            custom("child", Some("base"), &[("neutral", "#222")]),
        ];
        let roles = ThemeRegistry::new(&entries).resolve("child").unwrap();
        assert_eq!(roles["accent"], "#111");
        assert_eq!(roles["neutral"], "#222");
        assert_eq!(roles["primary"], "#65c3c8");
    }

    #[test]
    fn test_preset_entry_resolves_unchanged() {
        let entries = vec![ThemeEntry::Preset("night".into())];
        let registry = ThemeRegistry::new(&entries);
        assert_eq!(
            registry.resolve("night").unwrap(),
            preset::find("night").unwrap().to_roles()
        );
    }

    #[test]
    fn test_unknown_name_and_base() {
        let entries = vec![custom("orphan", Some("missing"), &[])];
        let registry = ThemeRegistry::new(&entries);

        let err = registry.resolve("nonexistent").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTheme { name } if name == "nonexistent"));

        let err = registry.resolve("orphan").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTheme { name } if name == "missing"));
    }

    #[test]
    fn test_unregistered_preset_is_unknown() {
        let entries = vec![ThemeEntry::Preset("light".into())];
        let err = ThemeRegistry::new(&entries).resolve("dark").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTheme { .. }));
    }

    #[test]
    fn test_cycle_detected() {
        let entries = vec![custom("a", Some("b"), &[]), custom("b", Some("a"), &[])];
        let err = ThemeRegistry::new(&entries).resolve("a").unwrap_err();
        match err {
            ConfigError::ThemeCycle { path } => assert_eq!(path, vec!["a", "b", "a"]),
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_no_inheritance_uses_colors_only() {
        let entries = vec![custom("mono", None, &[("primary", "#000")])];
        let roles = ThemeRegistry::new(&entries).resolve("mono").unwrap();
        assert_eq!(roles.len(), 1);
    }
}
