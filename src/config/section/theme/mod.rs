//! `[theme]` section configuration.
//!
//! Only additive extensions are supported; the compiler's default scale stays
//! in place underneath.
//!
//! # Example
//!
//! ```toml
//! [theme.extend.fontFamily]
//! mono = ["Courier Prime", "monospace"]
//! ```

mod extend;

pub use extend::ThemeExtend;

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Theme section configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Token extensions merged over the compiler defaults.
    pub extend: ThemeExtend,
}

impl ThemeSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.extend.validate(diag);
    }
}
