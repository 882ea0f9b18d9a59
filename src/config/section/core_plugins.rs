//! `[corePlugins]` toggles.
//!
//! ```toml
//! [corePlugins]
//! preflight = false
//! ```

use serde::{Deserialize, Serialize};

/// Built-in CSS features that can be switched off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorePlugins {
    /// Base normalization layer (modern-normalize plus resets).
    pub preflight: bool,
}

impl Default for CorePlugins {
    fn default() -> Self {
        Self { preflight: true }
    }
}
