//! Interactive text menu over the product catalog.
//!
//! All raw text handling lives here: prompts, number parsing and rendering.
//! The domain crates only ever receive already-validated values.

pub mod config;
pub mod menu;

pub use config::Cli;
pub use menu::Menu;
