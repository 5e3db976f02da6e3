//! Directory listing shared by every walk: read, filter, sort.

use std::io;
use std::path::Path;

use super::config::RenderConfig;
use super::matcher::Matcher;
use super::node::{TreeNode, sibling_order};

/// Borrowed view of the immutable state a walk needs.
pub struct BaseTraversal<'a> {
    pub config: &'a RenderConfig,
    pub matcher: &'a Matcher,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(config: &'a RenderConfig, matcher: &'a Matcher) -> Self {
        Self { config, matcher }
    }

    /// Check if an entry name should be left out
    pub fn should_ignore(&self, name: &str) -> bool {
        !self.config.show_all && self.matcher.is_ignored(name)
    }

    /// Read a directory and return its listed entries in display order.
    ///
    /// Entries that vanish between `read_dir` and inspection are skipped.
    pub fn read_sorted_entries(&self, path: &Path) -> io::Result<Vec<TreeNode>> {
        let mut nodes = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    log::warn!("skipping entry in '{}': {}", path.display(), err);
                    continue;
                }
            };
            let name = entry.file_name();
            if self.should_ignore(&name.to_string_lossy()) {
                log::debug!("ignored '{}'", entry.path().display());
                continue;
            }
            nodes.push(TreeNode::from_dir_entry(&entry));
        }
        nodes.sort_by(sibling_order);
        Ok(nodes)
    }

    /// Calculate the prefix for child entries
    pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
        if is_last {
            format!("{}    ", current_prefix)
        } else {
            format!("{}│   ", current_prefix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn test_child_prefix() {
        assert_eq!(BaseTraversal::child_prefix("", false), "│   ");
        assert_eq!(BaseTraversal::child_prefix("", true), "    ");
        assert_eq!(BaseTraversal::child_prefix("│   ", true), "│       ");
    }

    #[test]
    fn test_read_sorted_entries_filters_and_sorts() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("A.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("zdir")).unwrap();
        fs::create_dir(dir.path().join("node_modules")).unwrap();

        let config = RenderConfig::default();
        let matcher = Matcher::builder().with_defaults(true).build().unwrap();
        let traversal = BaseTraversal::new(&config, &matcher);

        let names: Vec<_> = traversal
            .read_sorted_entries(dir.path())
            .unwrap()
            .into_iter()
            .map(|n| n.name)
            .collect();
        assert_eq!(names, vec!["zdir", "A.txt", "b.txt"]);
    }

    #[test]
    fn test_show_all_bypasses_matcher() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let config = RenderConfig {
            show_all: true,
            ..Default::default()
        };
        let matcher = Matcher::builder()
            .with_defaults(true)
            .pattern("git")
            .build()
            .unwrap();
        let traversal = BaseTraversal::new(&config, &matcher);

        let nodes = traversal.read_sorted_entries(dir.path()).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, ".git");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let config = RenderConfig::default();
        let matcher = Matcher::empty();
        let traversal = BaseTraversal::new(&config, &matcher);
        assert!(traversal.read_sorted_entries(Path::new("/no/such/dir")).is_err());
    }
}
