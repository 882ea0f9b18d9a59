//! Configuration section definitions.
//!
//! Each module corresponds to a key of `style.toml`:
//!
//! | Module         | TOML Key          | Purpose                               |
//! |----------------|-------------------|---------------------------------------|
//! | `content`      | `content`         | Files scanned for class names         |
//! | `dark_mode`    | `darkMode`        | Dark-mode activation strategy         |
//! | `theme`        | `[theme.extend]`  | Token extensions (font families)      |
//! | `core_plugins` | `[corePlugins]`   | Built-in normalization toggles        |
//! | `plugins`      | `plugins`         | Compiler plugins to load              |
//! | `daisyui`      | `[pluginConfig]`  | Theming plugin options and themes     |

mod content;
mod core_plugins;
mod daisyui;
mod dark_mode;
mod plugins;
pub mod theme;

pub use content::ContentGlobs;
pub use core_plugins::CorePlugins;
pub use daisyui::{DAISYUI, PluginConfig, ThemeDefinition, ThemeEntry};
pub use dark_mode::DarkMode;
pub use plugins::PluginList;
pub use theme::{ThemeExtend, ThemeSectionConfig};
