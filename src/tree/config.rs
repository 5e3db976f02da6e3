//! Configuration types for the tree walker

/// Resolved display options for one run.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Deepest directory level that is expanded (root = 0). `None` expands everything.
    pub max_depth: Option<usize>,
    /// Append `[<size>]` to file entries
    pub show_size: bool,
    /// Append `[YYYY-MM-DD HH:MM]` to every entry
    pub show_time: bool,
    pub colorize: bool,
    /// Skip the ignore matcher entirely
    pub show_all: bool,
    /// Print the summary block after the tree
    pub show_stats: bool,
}

impl RenderConfig {
    /// Whether a directory at `level` (root = 0) gets its children listed.
    pub fn expands(&self, level: usize) -> bool {
        self.max_depth.is_none_or(|max| level <= max)
    }
}
