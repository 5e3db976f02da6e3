//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `palette` - Entry classification and class colors
//! - `tree` - Formatter for console and file output

mod config;
mod palette;
mod tree;

pub use config::OutputConfig;
pub use palette::{ColorClass, Palette};
pub use tree::TreeFormatter;
