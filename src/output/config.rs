//! Output configuration types

use crate::tree::RenderConfig;

use super::palette::Palette;

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Append the summary block after the tree
    pub show_stats: bool,
    pub palette: Palette,
}

impl From<&RenderConfig> for OutputConfig {
    fn from(config: &RenderConfig) -> Self {
        Self {
            use_color: config.colorize,
            show_stats: config.show_stats,
            palette: Palette::default(),
        }
    }
}
