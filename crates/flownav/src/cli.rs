//! Command-line interface definitions for flownav.

use std::path::PathBuf;

use clap::Parser;
use flownav_config::NavAction;
use logging::LogArgs;

/// Command-line interface for the `flownav` binary.
#[derive(Parser, Debug)]
#[command(
    name = "flownav",
    about = "Validate and resolve a flow navigation button config",
    version
)]
pub struct Cli {
    /// Logging controls shared across flownav binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Component props as JSON: {"buttonsList": ..., "layoutAlignment": ..., "includeLine": ...}
    #[arg(long, value_name = "PATH", conflicts_with = "buttons")]
    pub props: Option<PathBuf>,

    /// A bare JSON button list. Without this or --props, the built-in default row is used.
    #[arg(long, value_name = "PATH")]
    pub buttons: Option<PathBuf>,

    /// Layout alignment (left|center|right). Overrides the value from --props.
    #[arg(long, value_name = "ALIGN")]
    pub layout: Option<String>,

    /// Draw a separator line above the row.
    #[arg(long)]
    pub include_line: bool,

    /// Navigation action the host currently permits (NEXT|FINISH|BACK). Repeatable.
    #[arg(long = "action", value_name = "ACTION")]
    pub actions: Vec<NavAction>,

    /// Activate the Nth visible button (1-based) and print what the host receives.
    #[arg(long, value_name = "N")]
    pub activate: Option<usize>,

    /// Print single-line JSON.
    #[arg(long)]
    pub compact: bool,
}
