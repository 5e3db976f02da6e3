//! Ignore rules for tree walking
//!
//! A [`Matcher`] is an ordered union of regular expressions tested against the
//! bare name of each entry. It is built once, before traversal, and never
//! changes afterwards.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

/// Names hidden unless `--no-ignore` or `--show-all` is given.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    r"^\.git$",
    r"^\.pytest_cache$",
    r"^\.mypy_cache$",
    r"^__pycache__$",
    r"^node_modules$",
    r"^\.vscode$",
    r"^\.idea$",
    r"^\.vs$",
    r"^\.venv$",
    r"^venv$",
    r"^env$",
    r"^\.env$",
    r"^\.tox$",
    r"^\.coverage$",
    r"^\.sass-cache$",
    r"^\.next$",
    r"^dist$",
    r"^build$",
    r"^.+_cache$",
];

/// Compiled ignore rules.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    rules: Vec<Regex>,
}

impl Matcher {
    /// A matcher that ignores nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> MatcherBuilder {
        MatcherBuilder::default()
    }

    /// Check if an entry with this bare name should be left out of the tree.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(name))
    }

    /// Source text of every rule, in the order they were added.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Regex::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Collects pattern sources and compiles them all at once.
#[derive(Debug, Default)]
pub struct MatcherBuilder {
    defaults: bool,
    patterns: Vec<String>,
}

impl MatcherBuilder {
    /// Include [`DEFAULT_IGNORE_PATTERNS`].
    pub fn with_defaults(mut self, enabled: bool) -> Self {
        self.defaults = enabled;
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    pub fn patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Add every pattern listed in `path`, one per line.
    pub fn pattern_file(self, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read ignore pattern file '{}'", path.display()))?;
        Ok(self.patterns(parse_pattern_lines(&content)))
    }

    /// Compile all collected patterns. Fails on the first invalid regex.
    pub fn build(self) -> Result<Matcher> {
        let defaults: &[&str] = if self.defaults {
            DEFAULT_IGNORE_PATTERNS
        } else {
            &[]
        };

        let mut rules = Vec::new();
        for source in defaults.iter().map(|p| p.to_string()).chain(self.patterns) {
            let rule = Regex::new(&source)
                .with_context(|| format!("invalid ignore pattern '{}'", source))?;
            rules.push(rule);
        }

        let matcher = Matcher { rules };
        log::debug!(
            "compiled {} ignore rules: {:?}",
            matcher.len(),
            matcher.patterns().collect::<Vec<_>>()
        );
        Ok(matcher)
    }
}

/// Extract patterns from pattern-file text.
///
/// A line is a comment only when `#` is its first character; indented `#`
/// text is kept as a pattern. Patterns are trimmed and blank lines skipped.
pub fn parse_pattern_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
