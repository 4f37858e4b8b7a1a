#![warn(missing_docs)]

//! Entry point for the `flownav` binary.

mod cli;
mod error;

use std::{fs, path::Path, process};

use clap::Parser;
use flownav_config::{Activation, AvailableActions, NavAction, NavConfig, NavigationHost};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    cli::Cli,
    error::{Error, Result},
};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and resolve the configured row.
fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log);

    let config = load_config(&cli)?;
    let actions = available_actions(&cli.actions);
    let bar = config.resolve(&actions)?;
    info!(
        visible = bar.len(),
        layout = %bar.layout_alignment,
        "resolved navigation bar"
    );

    match cli.activate {
        None => print_json(&bar, cli.compact),
        Some(n) => {
            let activation = n
                .checked_sub(1)
                .and_then(|index| bar.activate(index, &actions))
                .ok_or(Error::NoSuchButton {
                    index: n,
                    count: bar.len(),
                })?;
            let mut host = HostReport::default();
            activation.dispatch(&mut host);
            print_json(&host.finish(&activation), cli.compact)
        }
    }
}

/// Collect the repeated `--action` flags into the host's action set.
fn available_actions(flags: &[NavAction]) -> AvailableActions {
    let mut actions = AvailableActions::none();
    for &action in flags {
        if !actions.insert(action) {
            debug!(%action, "duplicate --action ignored");
        }
    }
    if actions.is_empty() {
        info!("no navigation actions available; every button resolves disabled");
    }
    actions
}

/// Build the config from `--props`, `--buttons`, or the built-in default, then apply overrides.
fn load_config(cli: &Cli) -> Result<NavConfig> {
    let base = match (&cli.props, &cli.buttons) {
        (Some(path), _) => NavConfig::from_props_json(&read(path)?)?,
        (None, Some(path)) => NavConfig::new(&read(path)?, "right", false)?,
        (None, None) => NavConfig::default(),
    };
    let layout = cli
        .layout
        .clone()
        .unwrap_or_else(|| base.layout_alignment().to_string());
    let include_line = cli.include_line || base.include_line();
    Ok(NavConfig::from_buttons(
        base.buttons().to_vec(),
        &layout,
        include_line,
    ))
}

/// Read a whole input file.
fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Print `value` as JSON on stdout.
fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}

/// Host stand-in that records the notifications an activation delivers.
#[derive(Debug, Default)]
struct HostReport {
    /// Values passed to `value_changed`, in order.
    value_changes: Vec<String>,
    /// Navigation signals, in order.
    navigations: Vec<NavAction>,
}

impl NavigationHost for HostReport {
    fn value_changed(&mut self, output_value: &str) {
        self.value_changes.push(output_value.to_string());
    }

    fn navigate(&mut self, action: NavAction) {
        self.navigations.push(action);
    }
}

/// What the CLI prints for `--activate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ActivationReport<'a> {
    /// The computed activation.
    activation: &'a Activation,
    /// Notifications as the host received them.
    value_changes: Vec<String>,
    /// Navigation signals as the host received them.
    navigations: Vec<NavAction>,
}

impl HostReport {
    /// Pair the recorded notifications with the activation that produced them.
    fn finish(self, activation: &Activation) -> ActivationReport<'_> {
        ActivationReport {
            activation,
            value_changes: self.value_changes,
            navigations: self.navigations,
        }
    }
}
