//! Tree formatter shared by console and file output
//!
//! `TreeFormatter` writes the same characters to any `WriteColor` sink; only
//! the color escape codes differ. The file copy uses a `NoColor` buffer, so
//! stripping colors from the console copy yields the file byte-for-byte.

use std::io::{self, Write};

use termcolor::{ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::stats::Summary;
use crate::tree::{Annotation, NodeLine, StreamingOutput};

use super::config::OutputConfig;
use super::palette::Palette;

/// Formatter that streams tree lines to a (possibly colored) writer.
pub struct TreeFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write `text` in `spec` when coloring is on, plain otherwise.
    fn write_styled(&mut self, text: &str, spec: Option<&ColorSpec>) -> io::Result<()> {
        match spec {
            Some(spec) if self.config.use_color => {
                self.out.set_color(spec)?;
                write!(self.out, "{}", text)?;
                self.out.reset()
            }
            _ => write!(self.out, "{}", text),
        }
    }

    fn write_annotation(&mut self, annotation: &Annotation) -> io::Result<()> {
        let spec = match annotation {
            Annotation::Size(_) => Some(Palette::fg(self.config.palette.size)),
            Annotation::Time(_) => None,
            Annotation::Error(_) => Some(Palette::fg(self.config.palette.error)),
        };
        write!(self.out, " ")?;
        self.write_styled(&format!("[{}]", annotation.text()), spec.as_ref())
    }
}

impl TreeFormatter<StandardStream> {
    /// Formatter for the console copy of the tree.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(config, StandardStream::stdout(choice))
    }
}

impl TreeFormatter<NoColor<Vec<u8>>> {
    /// Formatter that buffers uncolored text, used for the output file.
    pub fn plain(mut config: OutputConfig) -> Self {
        config.use_color = false;
        Self::new(config, NoColor::new(Vec::new()))
    }

    pub fn into_text(self) -> String {
        String::from_utf8_lossy(&self.out.into_inner()).into_owned()
    }
}

impl<W: WriteColor> StreamingOutput for TreeFormatter<W> {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        let label = if name.ends_with('/') {
            name.to_string()
        } else {
            format!("{}/", name)
        };
        let mut spec = Palette::fg(self.config.palette.directory);
        spec.set_bold(true);
        self.write_styled(&label, Some(&spec))?;
        writeln!(self.out)
    }

    fn output_node(&mut self, line: &NodeLine<'_>) -> io::Result<()> {
        write!(self.out, "{}{}", line.prefix, line.connector())?;
        let spec = self.config.palette.spec_for(line.class);
        self.write_styled(&line.display_name(), spec.as_ref())?;
        for annotation in &line.annotations {
            self.write_annotation(annotation)?;
        }
        writeln!(self.out)
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        if self.config.show_stats {
            writeln!(self.out)?;
            let mut bold = ColorSpec::new();
            bold.set_bold(true);
            self.write_styled("Summary:", Some(&bold))?;
            writeln!(self.out)?;
            for line in summary.lines() {
                writeln!(self.out, "{}", line)?;
            }
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use termcolor::Buffer;

    use crate::output::ColorClass;
    use crate::tree::EntryKind;

    use super::*;

    fn line<'a>(prefix: &'a str, name: &'a str, kind: EntryKind, is_last: bool) -> NodeLine<'a> {
        NodeLine {
            prefix,
            is_last,
            name,
            kind,
            class: if kind == EntryKind::Dir {
                ColorClass::Directory
            } else {
                ColorClass::Plain
            },
            annotations: Vec::new(),
        }
    }

    fn feed<O: StreamingOutput>(out: &mut O) {
        out.output_root("root").unwrap();
        out.output_node(&line("", "b", EntryKind::Dir, false)).unwrap();
        let mut c = line("│   ", "c.json", EntryKind::File, true);
        c.class = ColorClass::Special;
        c.annotations.push(Annotation::Size("5 bytes".to_string()));
        out.output_node(&c).unwrap();
        let mut a = line("", "a.txt", EntryKind::File, true);
        a.annotations.push(Annotation::Error("permission denied".to_string()));
        out.output_node(&a).unwrap();
        out.finish(&Summary {
            directories: 1,
            files: 2,
            total_size: 15,
            errors: 1,
        })
        .unwrap();
    }

    #[test]
    fn test_plain_output() {
        let mut formatter = TreeFormatter::plain(OutputConfig {
            show_stats: true,
            ..Default::default()
        });
        feed(&mut formatter);
        assert_eq!(
            formatter.into_text(),
            "root/\n\
             ├── b/\n\
             │   └── c.json [5 bytes]\n\
             └── a.txt [permission denied]\n\
             \n\
             Summary:\n\
             Directories: 1\n\
             Files: 2\n\
             Total size: 15 bytes\n\
             Errors: 1\n"
        );
    }

    #[test]
    fn test_summary_omitted_without_stats() {
        let mut formatter = TreeFormatter::plain(OutputConfig::default());
        feed(&mut formatter);
        let text = formatter.into_text();
        assert!(!text.contains("Summary:"));
        assert!(text.ends_with("└── a.txt [permission denied]\n"));
    }

    #[test]
    fn test_plain_ignores_use_color() {
        let mut formatter = TreeFormatter::plain(OutputConfig {
            use_color: true,
            ..Default::default()
        });
        feed(&mut formatter);
        assert!(!formatter.into_text().contains('\x1b'));
    }

    #[test]
    fn test_colored_output_strips_to_plain() {
        let config = OutputConfig {
            use_color: true,
            show_stats: true,
            ..Default::default()
        };
        let mut colored = TreeFormatter::new(config.clone(), Buffer::ansi());
        let mut plain = TreeFormatter::plain(config);
        feed(&mut colored);
        feed(&mut plain);

        let colored = String::from_utf8(colored.into_inner().into_inner()).unwrap();
        assert!(colored.contains("\x1b["), "expected escape codes: {:?}", colored);

        let ansi = regex::Regex::new("\x1b\\[[0-9;]*m").unwrap();
        assert_eq!(ansi.replace_all(&colored, ""), plain.into_text());
    }

    #[test]
    fn test_no_escape_codes_when_color_disabled() {
        let mut formatter = TreeFormatter::new(OutputConfig::default(), Buffer::ansi());
        feed(&mut formatter);
        let text = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
        assert!(!text.contains('\x1b'));
    }
}
