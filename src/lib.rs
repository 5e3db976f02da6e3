//! treeprint - render a directory as a text tree

pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::path::Path;

use anyhow::Result;

pub use output::{ColorClass, OutputConfig, Palette, TreeFormatter};
pub use stats::Summary;
pub use tree::{
    DEFAULT_IGNORE_PATTERNS, EntryKind, Matcher, NodeLine, RenderConfig, StreamingOutput,
    StreamingWalker, TreeNode, format_size,
};

/// Render the tree under `root` as plain text and return it with its summary.
///
/// The summary block is part of the text only when `config.show_stats` is set.
pub fn render(root: &Path, config: &RenderConfig, matcher: &Matcher) -> Result<(String, Summary)> {
    let walker = StreamingWalker::new(config.clone(), matcher.clone());
    let mut formatter = TreeFormatter::plain(OutputConfig::from(config));
    let summary = walker.walk_streaming(root, &mut formatter)?;
    Ok((formatter.into_text(), summary))
}
