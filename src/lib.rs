//! teleblog-style: build-time style configuration for the teleblog front end.
//!
//! Loads `style.toml` (the Tailwind + daisyUI settings), validates it, resolves
//! theme inheritance, expands the content globs, and renders the
//! `tailwind.config.js` the compiler consumes.
//!
//! ```ignore
//! let config = StyleConfig::load(Path::new("style.toml"), UnknownOptionPolicy::Deny)?;
//! let dark = config.resolve_dark_theme()?;
//! for file in config.scanner()?.scan() {
//!     println!("{}", file.display());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod scan;
pub mod tailwind;
pub mod theme;

pub use config::{ConfigError, StyleConfig, UnknownOptionPolicy};
pub use scan::ContentScanner;
pub use theme::ThemeRoles;
