//! Entry classification and the colors used for each class

use termcolor::{Color, ColorSpec};

use crate::tree::{EntryKind, TreeNode};

/// Display class of an entry, chosen from its kind and extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    Directory,
    Executable,
    Symlink,
    Media,
    Archive,
    /// Configuration and data files
    Special,
    Plain,
}

const EXECUTABLE_EXTENSIONS: &[&str] = &[".exe", ".sh", ".bat", ".cmd", ".ps1", ".py"];

const MEDIA_EXTENSIONS: &[&str] = &[
    ".mp3", ".wav", ".flac", ".m4a", ".ogg", ".mp4", ".avi", ".mkv", ".mov", ".jpg", ".jpeg",
    ".png", ".gif", ".bmp",
];

const ARCHIVE_EXTENSIONS: &[&str] = &[".zip", ".rar", ".7z", ".tar", ".gz"];

const SPECIAL_EXTENSIONS: &[&str] = &[".json", ".xml", ".yaml", ".yml", ".ini", ".conf"];

impl ColorClass {
    pub fn classify(node: &TreeNode) -> Self {
        match node.kind {
            EntryKind::Dir => ColorClass::Directory,
            EntryKind::Symlink => ColorClass::Symlink,
            EntryKind::File => {
                let by_extension = node
                    .extension()
                    .map(|ext| Self::from_extension(&ext))
                    .unwrap_or(ColorClass::Plain);
                if by_extension == ColorClass::Plain && has_exec_bit(node.mode) {
                    ColorClass::Executable
                } else {
                    by_extension
                }
            }
        }
    }

    /// Look up a lowercased, dot-prefixed extension in the fixed table.
    pub fn from_extension(ext: &str) -> Self {
        if EXECUTABLE_EXTENSIONS.contains(&ext) {
            ColorClass::Executable
        } else if MEDIA_EXTENSIONS.contains(&ext) {
            ColorClass::Media
        } else if ARCHIVE_EXTENSIONS.contains(&ext) {
            ColorClass::Archive
        } else if SPECIAL_EXTENSIONS.contains(&ext) {
            ColorClass::Special
        } else {
            ColorClass::Plain
        }
    }
}

fn has_exec_bit(mode: Option<u32>) -> bool {
    mode.is_some_and(|m| m & 0o111 != 0)
}

/// Maps each class to a console color.
#[derive(Debug, Clone)]
pub struct Palette {
    pub directory: Color,
    pub executable: Color,
    pub symlink: Color,
    pub media: Color,
    pub archive: Color,
    pub special: Color,
    pub size: Color,
    pub error: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            directory: Color::Blue,
            executable: Color::Green,
            symlink: Color::Yellow,
            media: Color::Cyan,
            archive: Color::Magenta,
            special: Color::Red,
            size: Color::Green,
            error: Color::Red,
        }
    }
}

impl Palette {
    /// Color spec for an entry name, or `None` for plain entries.
    pub fn spec_for(&self, class: ColorClass) -> Option<ColorSpec> {
        let color = match class {
            ColorClass::Directory => self.directory,
            ColorClass::Executable => self.executable,
            ColorClass::Symlink => self.symlink,
            ColorClass::Media => self.media,
            ColorClass::Archive => self.archive,
            ColorClass::Special => self.special,
            ColorClass::Plain => return None,
        };
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_intense(true);
        if class == ColorClass::Directory {
            spec.set_bold(true);
        }
        Some(spec)
    }

    pub fn fg(color: Color) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color));
        spec
    }
}
