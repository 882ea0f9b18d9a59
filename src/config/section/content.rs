//! `content` globs.
//!
//! ```toml
//! content = ["cmd/teleblog/**/*.templ", "!cmd/teleblog/**/*_test.templ"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::scan::Glob;
use serde::{Deserialize, Serialize};

/// Ordered glob patterns, relative to the directory holding `style.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentGlobs(pub Vec<String>);

impl ContentGlobs {
    pub const FIELD: FieldPath = FieldPath::new("content");

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// # Checks
    /// - at least one pattern, and at least one that is not an exclusion
    /// - every pattern compiles
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.0.is_empty() {
            diag.error_with_hint(
                Self::FIELD,
                "no content globs configured",
                "add the template files to scan, e.g. `content = [\"templates/**/*.html\"]`",
            );
            return;
        }

        let mut includes = 0;
        let mut invalid = false;
        for pattern in &self.0 {
            match Glob::new(pattern) {
                Ok(glob) if !glob.is_negated() => includes += 1,
                Ok(_) => {}
                Err(e) => {
                    invalid = true;
                    diag.error(Self::FIELD, format!("invalid glob `{pattern}`: {e}"));
                }
            }
        }

        if includes == 0 && !invalid {
            diag.error(Self::FIELD, "only exclusion globs configured, nothing to scan");
        }
    }
}
