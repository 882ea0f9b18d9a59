//! `[theme.extend]` token extensions.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Token category → token name → fallback stack.
///
/// Duplicate token names inside one category never reach this type: the
/// TOML parser rejects duplicate keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeExtend {
    /// e.g. `mono = ["Courier Prime", "monospace"]` adds/overrides `font-mono`.
    pub font_family: BTreeMap<String, Vec<String>>,
}

pub struct ThemeExtendFields {
    pub font_family: FieldPath,
}

impl ThemeExtend {
    pub const FIELDS: ThemeExtendFields = ThemeExtendFields {
        font_family: FieldPath::new("theme.extend.fontFamily"),
    };

    pub fn is_empty(&self) -> bool {
        self.font_family.is_empty()
    }

    /// Every stack needs at least one non-blank font name.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (token, stack) in &self.font_family {
            if token.trim().is_empty() {
                diag.error(Self::FIELDS.font_family, "empty font token name");
            }
            if stack.is_empty() {
                diag.error_with_hint(
                    Self::FIELDS.font_family,
                    format!("font stack `{token}` is empty"),
                    "list at least one font, ending with a generic family like `monospace`",
                );
            } else if stack.iter().any(|font| font.trim().is_empty()) {
                diag.error(
                    Self::FIELDS.font_family,
                    format!("font stack `{token}` contains a blank entry"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_font_family_stack_order_kept() {
        let config = test_parse_config(
            r#"
[theme.extend.fontFamily]
mono = ["Courier Prime", "monospace"]
"#,
        );
        assert_eq!(
            config.theme.extend.font_family["mono"],
            vec!["Courier Prime", "monospace"]
        );
    }

    #[test]
    fn test_duplicate_token_is_parse_error() {
        let content = r#"
content = ["a/*.html"]
[theme.extend.fontFamily]
mono = ["A"]
mono = ["B"]
"#;
        assert!(toml::from_str::<crate::config::StyleConfig>(content).is_err());
    }

    #[test]
    fn test_empty_stack_rejected() {
        let mut extend = ThemeExtend::default();
        extend.font_family.insert("sans".into(), vec![]);
        extend.font_family.insert("mono".into(), vec!["".into()]);
        let mut diag = ConfigDiagnostics::new();
        extend.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
