//! CLI entry point for treeprint

use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use treeprint::{Matcher, OutputConfig, RenderConfig, StreamingWalker, TreeFormatter};

#[derive(Parser, Debug)]
#[command(name = "treeprint")]
#[command(about = "Render a directory as a text tree and save it to a file")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Expand directories only N levels below the root (0 lists the root's entries only)
    #[arg(short = 'd', long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// Show file sizes
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Show modification times
    #[arg(short = 't', long = "time")]
    time: bool,

    /// Colorize console output
    #[arg(short = 'c', long = "color")]
    color: bool,

    /// Show summary statistics
    #[arg(long = "stats")]
    stats: bool,

    /// Disable color even if requested and supported
    #[arg(long = "no-color")]
    no_color: bool,

    /// Additional regex to ignore, matched against entry names (can be used multiple times)
    #[arg(short = 'i', long = "ignore-pattern", value_name = "REGEX")]
    ignore_pattern: Vec<String>,

    /// File containing ignore patterns, one regex per line
    #[arg(short = 'I', long = "ignore-patterns", value_name = "FILE")]
    ignore_patterns: Option<PathBuf>,

    /// Disable the default ignore patterns (user patterns still apply)
    #[arg(long = "no-ignore")]
    no_ignore: bool,

    /// Show every entry, disabling all ignore patterns
    #[arg(long = "show-all")]
    show_all: bool,

    /// Output file
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = "tree.txt")]
    output: PathBuf,

    /// Do not print the tree to stdout
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Decide whether console output gets colors.
fn should_use_color(args: &Args) -> bool {
    if !args.color || args.no_color || args.quiet {
        return false;
    }
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn build_matcher(args: &Args) -> Result<Matcher> {
    let mut builder = Matcher::builder()
        .with_defaults(!(args.no_ignore || args.show_all))
        .patterns(args.ignore_pattern.iter().cloned());
    if let Some(ref file) = args.ignore_patterns {
        builder = builder.pattern_file(file)?;
    }
    builder.build()
}

/// Run the program and return its exit code.
fn run(args: &Args) -> Result<i32> {
    // Everything that can be misconfigured is checked before any output
    let matcher = build_matcher(args)?;

    let root = fs::canonicalize(&args.path)
        .with_context(|| format!("cannot access '{}'", args.path.display()))?;
    if !root.is_dir() {
        bail!("'{}' is not a directory", args.path.display());
    }

    let config = RenderConfig {
        max_depth: args.max_depth,
        show_size: args.size,
        show_time: args.time,
        colorize: should_use_color(args),
        show_all: args.show_all,
        show_stats: args.stats,
    };
    log::debug!("rendering '{}' with {:?}", root.display(), config);

    let output_config = OutputConfig::from(&config);
    let walker = StreamingWalker::new(config, matcher);
    let mut plain = TreeFormatter::plain(output_config.clone());

    let summary = if args.quiet {
        walker.walk_streaming(&root, &mut plain)?
    } else {
        let mut console = TreeFormatter::stdout(output_config);
        walker.walk_streaming(&root, &mut (&mut console, &mut plain))?
    };

    fs::write(&args.output, plain.into_text())
        .with_context(|| format!("cannot write '{}'", args.output.display()))?;
    eprintln!(
        "\nTree structure has been written to {}",
        args.output.display()
    );

    if summary.all_failed() {
        log::error!("every entry under '{}' failed to read", root.display());
        return Ok(1);
    }
    Ok(0)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("treeprint: {:#}", e);
            process::exit(1);
        }
    }
}
