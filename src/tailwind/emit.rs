//! Render a [`StyleConfig`] as `tailwind.config.js`.
//!
//! The output is what the compiler reads natively:
//!
//! ```js
//! /** @type {import('tailwindcss').Config} */
//! module.exports = {
//!   content: ["cmd/teleblog/**/*.templ"],
//!   darkMode: "class",
//!   ...
//!   plugins: [require("daisyui")],
//!   daisyui: {
//!     themes: [
//!       {
//!         bumblebee: {
//!           ...require("daisyui/src/theming/themes")["bumblebee"],
//!         },
//!       },
//!     ],
//!     darkTheme: "bumblebee",
//!   },
//! };
//! ```
//!
//! Rendering is deterministic: identical documents give byte-identical output.

use crate::config::{ConfigError, PluginConfig, StyleConfig, ThemeDefinition, ThemeEntry};
use crate::theme::{ThemeRoles, preset};
use std::fmt::Write;

/// Module the plugin exposes its preset tables from.
const PRESET_MODULE: &str = "daisyui/src/theming/themes";

/// Render the full config module.
///
/// Custom themes whose base is a built-in preset are emitted as a spread of
/// that preset plus overrides. Themes built on other custom themes have no
/// compiler-side table to spread from, so their resolved roles are inlined.
pub fn render(config: &StyleConfig) -> Result<String, ConfigError> {
    let mut out = String::new();
    let mut w = Writer::new(&mut out);

    w.line("/** @type {import('tailwindcss').Config} */");
    w.open("module.exports = {");

    w.line(&format!("content: {},", string_array(config.content.iter())));
    w.line(&format!("darkMode: {},", quote(config.dark_mode.as_str())));

    w.open("theme: {");
    w.open("extend: {");
    if !config.theme.extend.is_empty() {
        w.open("fontFamily: {");
        for (token, stack) in &config.theme.extend.font_family {
            w.line(&format!(
                "{}: {},",
                js_key(token),
                string_array(stack.iter().map(String::as_str))
            ));
        }
        w.close("},");
    }
    w.close("},");
    w.close("},");

    w.open("corePlugins: {");
    w.line(&format!("preflight: {},", config.core_plugins.preflight));
    w.close("},");

    let plugins = config
        .plugins
        .iter()
        .map(|p| format!("require({})", quote(p)))
        .collect::<Vec<_>>()
        .join(", ");
    w.line(&format!("plugins: [{plugins}],"));

    render_daisyui(config, &config.plugin_config, &mut w)?;

    w.close("};");
    Ok(out)
}

fn render_daisyui(
    config: &StyleConfig,
    daisy: &PluginConfig,
    w: &mut Writer<'_>,
) -> Result<(), ConfigError> {
    w.open("daisyui: {");

    w.open("themes: [");
    for entry in &daisy.themes {
        match entry {
            ThemeEntry::Preset(name) => w.line(&format!("{},", quote(name))),
            ThemeEntry::Custom(def) => render_custom_theme(config, def, w)?,
        }
    }
    w.close("],");

    if let Some(name) = daisy.effective_dark_theme() {
        w.line(&format!("darkTheme: {},", quote(name)));
    }
    w.line(&format!("base: {},", daisy.base));
    w.line(&format!("styled: {},", daisy.styled));
    w.line(&format!("utils: {},", daisy.utils));
    w.line(&format!("prefix: {},", quote(&daisy.prefix)));
    w.line(&format!("logs: {},", daisy.logs));
    w.line(&format!("themeRoot: {},", quote(&daisy.theme_root)));

    w.close("},");
    Ok(())
}

fn render_custom_theme(
    config: &StyleConfig,
    def: &ThemeDefinition,
    w: &mut Writer<'_>,
) -> Result<(), ConfigError> {
    w.open("{");
    w.open(&format!("{}: {{", js_key(&def.name)));

    match spread_base(config, def) {
        Some(base) => {
            w.line(&format!(
                "...require({})[{}],",
                quote(PRESET_MODULE),
                quote(base)
            ));
            render_roles(&def.colors, w);
        }
        None => render_roles(&config.resolve_theme(&def.name)?, w),
    }

    w.close("},");
    w.close("},");
    Ok(())
}

/// The preset a definition can spread directly, if any.
///
/// `None` also covers definitions without a base, which are rendered
/// from their resolved (override-only) roles.
fn spread_base<'a>(config: &StyleConfig, def: &'a ThemeDefinition) -> Option<&'a str> {
    let base = def.inherits.as_deref()?;
    let shadows_preset = base == def.name;
    let is_custom = matches!(config.themes().find(base), Some(ThemeEntry::Custom(_)));

    ((shadows_preset || !is_custom) && preset::find(base).is_some()).then_some(base)
}

fn render_roles(roles: &ThemeRoles, w: &mut Writer<'_>) {
    for (role, value) in roles {
        w.line(&format!("{}: {},", js_key(role), quote(value)));
    }
}

// ============================================================================
// JS helpers
// ============================================================================

/// JSON string literals are valid JS string literals.
fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("{s:?}"))
}

fn string_array<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let items: Vec<String> = items.map(quote).collect();
    format!("[{}]", items.join(", "))
}

/// Bare identifier when possible (`mono`), quoted otherwise (`"base-100"`).
fn js_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_ident {
        key.to_string()
    } else {
        quote(key)
    }
}

/// Two-space indenting line writer.
struct Writer<'a> {
    out: &'a mut String,
    depth: usize,
}

impl<'a> Writer<'a> {
    fn new(out: &'a mut String) -> Self {
        Self { out, depth: 0 }
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}{}", "  ".repeat(self.depth), text);
    }

    fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }

    fn close(&mut self, text: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnknownOptionPolicy;

    fn parse(content: &str) -> StyleConfig {
        StyleConfig::from_str_with_policy(content, UnknownOptionPolicy::Deny).unwrap()
    }

    const TELEBLOG: &str = r#"
content = ["cmd/teleblog/**/*.templ"]
darkMode = "class"
plugins = ["daisyui"]

[theme.extend.fontFamily]
mono = ["Courier Prime", "monospace"]

[pluginConfig]
themes = [{ name = "bumblebee", inherits = "bumblebee" }]
darkTheme = "bumblebee"
"#;

    #[test]
    fn test_render_teleblog() {
        let js = render(&parse(TELEBLOG)).unwrap();
        assert!(js.starts_with("/** @type {import('tailwindcss').Config} */\nmodule.exports = {\n"));
        assert!(js.contains("  content: [\"cmd/teleblog/**/*.templ\"],\n"));
        assert!(js.contains("  darkMode: \"class\",\n"));
        assert!(js.contains("      fontFamily: {\n        mono: [\"Courier Prime\", \"monospace\"],\n"));
        assert!(js.contains("    preflight: true,\n"));
        assert!(js.contains("  plugins: [require(\"daisyui\")],\n"));
        assert!(js.contains(
            "          ...require(\"daisyui/src/theming/themes\")[\"bumblebee\"],\n"
        ));
        assert!(js.contains("    darkTheme: \"bumblebee\",\n"));
        assert!(js.contains("    themeRoot: \":root\",\n"));
        assert!(js.ends_with("};\n"));
    }

    #[test]
    fn test_preflight_off_is_deterministic() {
        let content = "content = [\"a/**/*.html\"]\n[corePlugins]\npreflight = false";
        let first = render(&parse(content)).unwrap();
        let second = render(&parse(content)).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("  corePlugins: {\n    preflight: false,\n  },\n"));
    }

    #[test]
    fn test_overrides_follow_spread() {
        let content = r##"
content = ["a/*.html"]
plugins = ["daisyui"]
[pluginConfig]
themes = ["light", { name = "brand", inherits = "cupcake", colors = { "base-100" = "#fff", primary = "#000" } }]
darkTheme = "brand"
"##;
        let js = render(&parse(content)).unwrap();
        let spread = js.find("[\"cupcake\"]").unwrap();
        let base = js.find("\"base-100\": \"#fff\",").unwrap();
        let primary = js.find("primary: \"#000\",").unwrap();
        assert!(spread < base && base < primary);
        assert!(js.contains("      \"light\",\n"));
    }

    #[test]
    fn test_custom_chain_is_inlined() {
        let content = r##"
content = ["a/*.html"]
[pluginConfig]
themes = [
    { name = "parent", inherits = "night", colors = { accent = "#111" } },
    { name = "child", inherits = "parent" },
]
darkTheme = "child"
"##;
        let js = render(&parse(content)).unwrap();
        let child = &js[js.find("child: {").unwrap()..];
        assert!(!child.contains("...require"));
        assert!(child.contains("accent: \"#111\","));
        assert!(child.contains("\"base-100\": \"#0F172A\","));
    }

    #[test]
    fn test_unset_dark_theme_is_omitted() {
        let content = r#"
content = ["a/*.html"]
plugins = ["daisyui"]
[pluginConfig]
themes = ["cupcake"]
"#;
        let js = render(&parse(content)).unwrap();
        assert!(!js.contains("darkTheme"));

        let js = render(&parse("content = [\"a/*.html\"]")).unwrap();
        assert!(js.contains("    darkTheme: \"dark\",\n"));
    }

    #[test]
    fn test_js_key() {
        assert_eq!(js_key("mono"), "mono");
        assert_eq!(js_key("base-100"), "\"base-100\"");
        assert_eq!(js_key("--rounded-btn"), "\"--rounded-btn\"");
        assert_eq!(js_key(""), "\"\"");
    }
}
