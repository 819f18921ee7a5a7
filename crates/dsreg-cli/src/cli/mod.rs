//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

impl PathOrStdin {
    /// Label used in error messages: `"-"` for stdin, otherwise the path.
    pub fn label(&self) -> String {
        match self {
            PathOrStdin::Stdin => "-".to_owned(),
            PathOrStdin::Path(path) => path.display().to_string(),
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one record per line (default).
    Human,
    /// A single JSON object on stdout.
    Json,
}

/// All top-level subcommands exposed by the `dsreg` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Register four nodes, unite them pairwise, and print the parent links.
    Demo {
        /// Integer payload attached to every demo node.
        #[arg(long, default_value = "271828")]
        payload: i64,
    },

    /// Group the elements of an edge list into connected components.
    ///
    /// Each line holds `LEFT RIGHT`, or a single label for an isolated
    /// element. Blank lines and `#` comments are ignored.
    Components {
        /// Path to an edge list, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Maximum number of distinct elements (default: unlimited).
        #[arg(long, env = "DSREG_MAX_NODES")]
        max_nodes: Option<usize>,
    },

    /// Compute a minimum spanning forest of a weighted edge list.
    ///
    /// Each line holds `LEFT RIGHT WEIGHT`, or a single label for an isolated
    /// element. Blank lines and `#` comments are ignored.
    Mst {
        /// Path to a weighted edge list, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

/// Root CLI struct for the `dsreg` binary.
///
/// Global flags are marked `global = true` so that clap propagates them to
/// every subcommand.
#[derive(Parser)]
#[command(
    name = "dsreg",
    version,
    about = "Disjoint-set registry CLI",
    long_about = "Disjoint-set (union-find) registry command-line tool.\n\
                  Runs the registry demonstration and groups or spans\n\
                  edge-list graphs with union-find."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all log output on stderr; error messages are still printed
    /// (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr log verbosity; repeat for debug (`-vv`) and trace
    /// (`-vvv`) output.
    #[arg(
        long,
        short = 'v',
        global = true,
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbose: u8,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `DSREG_MAX_FILE_SIZE` environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "DSREG_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,
}
