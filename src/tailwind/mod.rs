//! Tailwind CSS integration.
//!
//! - `emit`: render the document as `tailwind.config.js`
//! - `hook`: build and run the compiler command

pub mod emit;
pub mod hook;

pub use emit::render;
pub use hook::{CompilerHook, DEFAULT_COMMAND, GENERATED_CONFIG, write_generated_config};
