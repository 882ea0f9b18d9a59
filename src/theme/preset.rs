//! Built-in daisyUI theme presets.
//!
//! Only the presets a document may inherit from are listed. Values are the
//! role tables daisyUI ships in `daisyui/src/theming/themes`.

use super::ThemeRoles;

/// A named role table shipped with the theming plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub roles: &'static [(&'static str, &'static str)],
}

impl Preset {
    /// Owned copy of the role table.
    pub fn to_roles(&self) -> ThemeRoles {
        self.roles
            .iter()
            .map(|(role, value)| ((*role).to_string(), (*value).to_string()))
            .collect()
    }
}

/// Look up a preset by name.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

/// Names of every built-in preset.
pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|preset| preset.name)
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "light",
        roles: &[
            ("color-scheme", "light"),
            ("primary", "oklch(49.12% 0.3096 275.75)"),
            ("secondary", "oklch(69.71% 0.329 342.55)"),
            ("secondary-content", "oklch(98.71% 0.0106 342.55)"),
            ("accent", "oklch(76.76% 0.184 183.61)"),
            ("neutral", "#2B3440"),
            ("neutral-content", "#D7DDE4"),
            ("base-100", "oklch(100% 0 0)"),
            ("base-200", "#F2F2F2"),
            ("base-300", "#E5E6E6"),
            ("base-content", "#1f2937"),
        ],
    },
    Preset {
        name: "dark",
        roles: &[
            ("color-scheme", "dark"),
            ("primary", "oklch(65.69% 0.196 275.75)"),
            ("secondary", "oklch(74.8% 0.26 342.55)"),
            ("accent", "oklch(74.51% 0.167 183.61)"),
            ("neutral", "#2a323c"),
            ("neutral-content", "#A6ADBB"),
            ("base-100", "#1d232a"),
            ("base-200", "#191e24"),
            ("base-300", "#15191e"),
            ("base-content", "#A6ADBB"),
        ],
    },
    Preset {
        name: "cupcake",
        roles: &[
            ("color-scheme", "light"),
            ("primary", "#65c3c8"),
            ("secondary", "#ef9fbc"),
            ("accent", "#eeaf3a"),
            ("neutral", "#291334"),
            ("base-100", "#faf7f5"),
            ("base-200", "#efeae6"),
            ("base-300", "#e7e2df"),
            ("base-content", "#291334"),
            ("--rounded-btn", "1.9rem"),
            ("--tab-border", "2px"),
            ("--tab-radius", "0.7rem"),
        ],
    },
    Preset {
        name: "bumblebee",
        roles: &[
            ("color-scheme", "light"),
            ("primary", "oklch(89.51% 0.2132 96.61)"),
            ("primary-content", "oklch(38.92% 0.046 96.61)"),
            ("secondary", "oklch(80.39% 0.194 70.76)"),
            ("secondary-content", "oklch(39.38% 0.068 70.76)"),
            ("accent", "oklch(81.27% 0.157 56.52)"),
            ("neutral", "oklch(12.75% 0.075 281.99)"),
            ("base-100", "oklch(100% 0 0)"),
        ],
    },
    Preset {
        name: "corporate",
        roles: &[
            ("color-scheme", "light"),
            ("primary", "oklch(60.39% 0.228 269.1)"),
            ("secondary", "#7b92b2"),
            ("accent", "#67cba0"),
            ("neutral", "#181a2a"),
            ("neutral-content", "#edf2f7"),
            ("base-100", "oklch(100% 0 0)"),
            ("base-content", "#181a2a"),
            ("--rounded-box", "0.25rem"),
            ("--rounded-btn", ".125rem"),
            ("--rounded-badge", ".125rem"),
            ("--tab-radius", "0.25rem"),
            ("--animation-btn", "0"),
            ("--animation-input", "0"),
            ("--btn-focus-scale", "1"),
        ],
    },
    Preset {
        name: "night",
        roles: &[
            ("color-scheme", "dark"),
            ("primary", "#38bdf8"),
            ("secondary", "#818CF8"),
            ("accent", "#F471B5"),
            ("neutral", "#1E293B"),
            ("base-100", "#0F172A"),
            ("info", "#0CA5E9"),
            ("info-content", "#000000"),
            ("success", "#2DD4BF"),
            ("warning", "#F4BF50"),
            ("error", "#FB7085"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_find_known_presets() {
        assert!(find("bumblebee").is_some());
        assert!(find("light").is_some());
        assert!(find("nonexistent").is_none());
    }

    #[test]
    fn test_preset_tables_are_well_formed() {
        let mut names = FxHashSet::default();
        for preset in PRESETS {
            assert!(names.insert(preset.name), "duplicate preset {}", preset.name);

            let mut roles = FxHashSet::default();
            for (role, value) in preset.roles {
                assert!(roles.insert(*role), "{}: duplicate role {role}", preset.name);
                assert!(!value.is_empty());
            }
            assert_eq!(preset.to_roles().len(), preset.roles.len());
        }
    }
}
