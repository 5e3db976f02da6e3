//! Summary counters accumulated during a walk

use crate::tree::{EntryKind, format_size};

/// Totals over every entry that was listed.
///
/// The root directory itself is not counted, and neither is anything
/// ignored or below the depth limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub directories: usize,
    pub files: usize,
    /// Sum of the sizes of listed file and symlink entries
    pub total_size: u64,
    /// Entries shown with an inline error marker
    pub errors: usize,
}

impl Summary {
    /// Record one listed entry.
    pub fn record(&mut self, kind: EntryKind, size: Option<u64>, failed: bool) {
        match kind {
            EntryKind::Dir => self.directories += 1,
            EntryKind::File | EntryKind::Symlink => {
                self.files += 1;
                self.total_size += size.unwrap_or(0);
            }
        }
        if failed {
            self.errors += 1;
        }
    }

    pub fn entries(&self) -> usize {
        self.directories + self.files
    }

    /// True when something was listed and every listed entry failed.
    pub fn all_failed(&self) -> bool {
        self.errors > 0 && self.errors == self.entries()
    }

    /// The summary block, one line per item, without the heading.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Directories: {}", self.directories),
            format!("Files: {}", self.files),
            format!("Total size: {}", format_size(self.total_size)),
        ];
        if self.errors > 0 {
            lines.push(format!("Errors: {}", self.errors));
        }
        lines
    }
}
