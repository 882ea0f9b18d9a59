//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted path to an option in `style.toml`.
///
/// Each section exposes its paths as `FIELDS` constants so diagnostics never
/// spell a key by hand:
///
/// ```ignore
/// diag.error(PluginConfig::FIELDS.dark_theme, "not registered");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
