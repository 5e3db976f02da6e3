//! Directory tree walking logic
//!
//! The walker lists each directory, drops entries the [`Matcher`] rejects,
//! sorts the rest (directories first) and streams one [`NodeLine`] per entry
//! to a [`StreamingOutput`]. Summary counts are accumulated along the way.

mod config;
mod matcher;
mod node;
mod streaming;
mod traversal;
mod utils;

// Re-export public types
pub use config::RenderConfig;
pub use matcher::{DEFAULT_IGNORE_PATTERNS, Matcher, MatcherBuilder, parse_pattern_lines};
pub use node::{EntryKind, NodeError, TreeNode, sibling_order};
pub use streaming::{Annotation, NodeLine, StreamingOutput, StreamingWalker};
pub use utils::{format_mtime, format_size};
