//! Filesystem entries as seen by the walker

use std::cmp::Ordering;
use std::fmt;
use std::fs::{self, DirEntry};
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;

/// What kind of filesystem object an entry is. Symlinks are never followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Symlink,
}

/// A per-entry failure, shown inline instead of aborting the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    PermissionDenied,
    BrokenSymlink,
    Unreadable(String),
}

impl From<io::Error> for NodeError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => NodeError::PermissionDenied,
            _ => NodeError::Unreadable(err.to_string()),
        }
    }
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeError::PermissionDenied => write!(f, "permission denied"),
            NodeError::BrokenSymlink => write!(f, "broken symlink"),
            NodeError::Unreadable(reason) => write!(f, "unreadable: {}", reason),
        }
    }
}

/// One directory entry, created while listing its parent and dropped once rendered.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Size in bytes of the entry itself (the link, for symlinks)
    pub size: Option<u64>,
    pub modified: Option<SystemTime>,
    /// Unix permission bits, when the platform has them
    pub mode: Option<u32>,
    pub error: Option<NodeError>,
}

impl TreeNode {
    /// Build a node from a directory listing entry.
    pub fn from_dir_entry(entry: &DirEntry) -> Self {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        let meta = match fs::symlink_metadata(&path) {
            Ok(meta) => meta,
            Err(err) => {
                let kind = match entry.file_type() {
                    Ok(t) if t.is_dir() => EntryKind::Dir,
                    Ok(t) if t.is_symlink() => EntryKind::Symlink,
                    _ => EntryKind::File,
                };
                return Self {
                    name,
                    path,
                    kind,
                    size: None,
                    modified: None,
                    mode: None,
                    error: Some(err.into()),
                };
            }
        };

        let file_type = meta.file_type();
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        };

        // A symlink whose target is gone still has metadata of its own
        let error = if kind == EntryKind::Symlink && fs::metadata(&path).is_err() {
            Some(NodeError::BrokenSymlink)
        } else {
            None
        };

        Self {
            name,
            path,
            kind,
            size: Some(meta.len()),
            modified: meta.modified().ok(),
            mode: permission_bits(&meta),
            error,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Lowercased extension including the dot, e.g. `.tar` for `Backup.TAR`.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(format!(".{}", ext.to_lowercase()))
    }
}

#[cfg(unix)]
fn permission_bits(meta: &fs::Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(meta.permissions().mode())
}

#[cfg(not(unix))]
fn permission_bits(_meta: &fs::Metadata) -> Option<u32> {
    None
}

/// Sibling order: directories first, then everything else, each group by
/// lowercased name with the exact name as tie-breaker.
pub fn sibling_order(a: &TreeNode, b: &TreeNode) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}
