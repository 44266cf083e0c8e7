//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Environment variable consulted when no target path is given
pub const TARGET_ENV: &str = "CPS_BUNDLER_TARGET";

/// cps-bundler - move built files back into their source tree
///
/// Moves every file with the configured extension from the current directory
/// into the directory of the target tree where it belongs.
#[derive(Parser, Debug)]
#[command(
    name = "cps-bundler",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Move built files back into their place in a source tree",
    long_about = "Moves every file with the configured extension from the current directory \
                  into the directory of the target tree where it belongs. Destinations are \
                  remembered in ./CpsBundlerCache.txt so later runs skip scanning the tree.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  cps-bundler /src/tree                 \x1b[90m# Move ./*.god into /src/tree\x1b[0m\n   \
                  cps-bundler /src/tree --cache=off     \x1b[90m# Always scan the tree\x1b[0m\n   \
                  cps-bundler /src/tree -E .xml         \x1b[90m# Move ./*.xml instead\x1b[0m\n   \
                  cps-bundler /src/tree --index         \x1b[90m# Print the tree's bundle index\x1b[0m\n"
)]
pub struct Cli {
    /// Target directory where files are moved to
    #[arg(env = TARGET_ENV)]
    pub target: Option<PathBuf>,

    /// Cache destinations in ./CpsBundlerCache.txt
    #[arg(long, short = 'c', value_enum, default_value_t = CacheMode::On)]
    pub cache: CacheMode,

    /// Extension of the files to move
    #[arg(long, short = 'E', default_value = ".god")]
    pub extension: String,

    /// Parse <TARGET>/bundle-index.txt and print its classes instead of moving files
    #[arg(long)]
    pub index: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Whether the destination cache is read and written
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheMode {
    On,
    Off,
}
