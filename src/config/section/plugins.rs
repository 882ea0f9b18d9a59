//! `plugins` list.
//!
//! ```toml
//! plugins = ["daisyui", "@tailwindcss/typography"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Package names of compiler plugins, loaded in order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginList(pub Vec<String>);

impl PluginList {
    pub const FIELD: FieldPath = FieldPath::new("plugins");

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|p| p == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for plugin in &self.0 {
            if plugin.trim().is_empty() {
                diag.error(Self::FIELD, "empty plugin reference");
            } else if !seen.insert(plugin.as_str()) {
                diag.error(Self::FIELD, format!("plugin `{plugin}` is listed twice"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_plugins() {
        let config = test_parse_config("plugins = [\"daisyui\"]");
        assert!(config.plugins.contains("daisyui"));
        assert!(!config.plugins.contains("typography"));
    }

    #[test]
    fn test_duplicates_and_blanks() {
        let plugins = PluginList(vec!["daisyui".into(), " ".into(), "daisyui".into()]);
        let mut diag = ConfigDiagnostics::new();
        plugins.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
