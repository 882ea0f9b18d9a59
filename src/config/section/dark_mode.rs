//! `darkMode` strategy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How dark variants (`dark:bg-black`) are activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// A `dark` class on an ancestor element toggles dark styles.
    Class,
    /// `prefers-color-scheme: dark` media query.
    #[default]
    Media,
}

impl DarkMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Media => "media",
        }
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    use super::*;

    #[test]
    fn test_default_is_media() {
        assert_eq!(test_parse_config("").dark_mode, DarkMode::Media);
    }

    #[test]
    fn test_class_strategy() {
        let config = test_parse_config("darkMode = \"class\"");
        assert_eq!(config.dark_mode, DarkMode::Class);
        assert_eq!(config.dark_mode.to_string(), "class");
    }
}
