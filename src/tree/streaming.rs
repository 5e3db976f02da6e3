//! StreamingWalker - streams one line per entry to any number of outputs

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crate::output::ColorClass;
use crate::stats::Summary;

use super::config::RenderConfig;
use super::matcher::Matcher;
use super::node::{EntryKind, NodeError, TreeNode};
use super::traversal::BaseTraversal;
use super::utils::{format_mtime, format_size};

/// Extra information shown in brackets after an entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Size(String),
    Time(String),
    Error(String),
}

impl Annotation {
    pub fn text(&self) -> &str {
        match self {
            Annotation::Size(s) | Annotation::Time(s) | Annotation::Error(s) => s,
        }
    }
}

/// Everything a formatter needs to print one entry.
#[derive(Debug, Clone)]
pub struct NodeLine<'a> {
    /// Indentation inherited from ancestors
    pub prefix: &'a str,
    pub is_last: bool,
    pub name: &'a str,
    pub kind: EntryKind,
    pub class: ColorClass,
    pub annotations: Vec<Annotation>,
}

impl NodeLine<'_> {
    pub fn connector(&self) -> &'static str {
        if self.is_last { "└── " } else { "├── " }
    }

    /// Entry name as displayed; directories carry a trailing slash.
    pub fn display_name(&self) -> String {
        if self.kind == EntryKind::Dir {
            format!("{}/", self.name)
        } else {
            self.name.to_string()
        }
    }
}

/// Callback for streaming output - receives node information for display.
pub trait StreamingOutput {
    /// The first line of the tree, without connector.
    fn output_root(&mut self, name: &str) -> io::Result<()>;

    fn output_node(&mut self, line: &NodeLine<'_>) -> io::Result<()>;

    fn finish(&mut self, summary: &Summary) -> io::Result<()>;
}

/// Feeds the same walk to two outputs, e.g. console and file.
impl<A: StreamingOutput, B: StreamingOutput> StreamingOutput for (A, B) {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        self.0.output_root(name)?;
        self.1.output_root(name)
    }

    fn output_node(&mut self, line: &NodeLine<'_>) -> io::Result<()> {
        self.0.output_node(line)?;
        self.1.output_node(line)
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        self.0.finish(summary)?;
        self.1.finish(summary)
    }
}

impl<O: StreamingOutput + ?Sized> StreamingOutput for &mut O {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        (**self).output_root(name)
    }

    fn output_node(&mut self, line: &NodeLine<'_>) -> io::Result<()> {
        (**self).output_node(line)
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        (**self).finish(summary)
    }
}

/// Depth-first tree walker that emits lines as it goes.
/// Memory use is O(depth) plus one directory listing per level.
pub struct StreamingWalker {
    config: RenderConfig,
    matcher: Matcher,
}

impl StreamingWalker {
    pub fn new(config: RenderConfig, matcher: Matcher) -> Self {
        Self { config, matcher }
    }

    /// Walk `root` and stream every listed entry to `output`.
    ///
    /// Fails only if the root itself cannot be listed or the output cannot be
    /// written; problems below the root are reported inline.
    pub fn walk_streaming<O: StreamingOutput>(&self, root: &Path, output: &mut O) -> Result<Summary> {
        let traversal = BaseTraversal::new(&self.config, &self.matcher);
        let entries = traversal
            .read_sorted_entries(root)
            .with_context(|| format!("cannot read directory '{}'", root.display()))?;

        output
            .output_root(&root_name(root))
            .context("error writing output")?;

        let mut summary = Summary::default();
        self.walk_entries(&traversal, entries, 1, "", output, &mut summary)
            .context("error writing output")?;

        output.finish(&summary).context("error writing output")?;
        Ok(summary)
    }

    /// Emit `entries` (all at `level`) and descend into expandable directories.
    fn walk_entries<O: StreamingOutput>(
        &self,
        traversal: &BaseTraversal<'_>,
        entries: Vec<TreeNode>,
        level: usize,
        prefix: &str,
        output: &mut O,
        summary: &mut Summary,
    ) -> io::Result<()> {
        let total = entries.len();

        for (i, node) in entries.into_iter().enumerate() {
            let is_last = i + 1 == total;
            if let Some(ref err) = node.error {
                log::warn!("'{}': {}", node.path.display(), err);
            }
            let mut error = node.error.clone();

            // Children are read before the directory line is written so that a
            // listing failure can be shown on that line.
            let children = if node.is_dir() && error.is_none() && self.config.expands(level) {
                match traversal.read_sorted_entries(&node.path) {
                    Ok(children) => Some(children),
                    Err(err) => {
                        log::warn!("cannot read directory '{}': {}", node.path.display(), err);
                        error = Some(NodeError::from(err));
                        None
                    }
                }
            } else {
                None
            };

            let line = NodeLine {
                prefix,
                is_last,
                name: &node.name,
                kind: node.kind,
                class: ColorClass::classify(&node),
                annotations: self.annotations(&node, error.as_ref()),
            };
            output.output_node(&line)?;
            summary.record(node.kind, node.size, error.is_some());

            if let Some(children) = children {
                let child_prefix = BaseTraversal::child_prefix(prefix, is_last);
                self.walk_entries(traversal, children, level + 1, &child_prefix, output, summary)?;
            }
        }

        Ok(())
    }

    fn annotations(&self, node: &TreeNode, error: Option<&NodeError>) -> Vec<Annotation> {
        let mut annotations = Vec::new();
        if self.config.show_size && !node.is_dir() {
            if let Some(size) = node.size {
                annotations.push(Annotation::Size(format_size(size)));
            }
        }
        if self.config.show_time {
            if let Some(modified) = node.modified {
                annotations.push(Annotation::Time(format_mtime(modified)));
            }
        }
        if let Some(err) = error {
            annotations.push(Annotation::Error(err.to_string()));
        }
        annotations
    }
}

/// Name shown on the first line: the last path component, or the whole path
/// when there is none (e.g. `/`).
fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string())
}
