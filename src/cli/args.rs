//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::application::services::InputSource;
use crate::domain::GlyphStyle;

/// Parse `parent > child, child; ...` notation and draw it as a tree
#[derive(Parser, Debug)]
#[command(name = "treenote")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding .treenote.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Notation input: inline argument, file, or stdin when neither is given.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Notation, e.g. "A > B, C; B > D"
    #[arg(conflicts_with = "file")]
    pub notation: Option<String>,

    /// Read notation from file (one or more contexts per line)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    pub fn source(&self) -> InputSource {
        match (&self.notation, &self.file) {
            (Some(text), _) => InputSource::Inline(text.clone()),
            (None, Some(path)) => InputSource::File(path.clone()),
            (None, None) => InputSource::Stdin,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw the tree diagram
    Render {
        #[command(flatten)]
        input: InputArgs,
        /// Connector glyphs (overrides config)
        #[arg(short, long, value_enum)]
        glyphs: Option<GlyphStyle>,
    },

    /// Print the depth outline (one '#' per level)
    Outline {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List nodes and their children
    Nodes {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
