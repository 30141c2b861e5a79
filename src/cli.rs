//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::settings::Settings;
use crate::runner::TraceOptions;

/// Interactive walkthrough of widget lifecycle, communication and data
/// binding.
///
/// Run without a subcommand to open the terminal UI.
#[derive(Parser, Debug)]
#[command(name = "learnHub", version, about, long_about = None)]
pub struct Cli {
    /// Settings file to read instead of the per-user one.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimum milliseconds between recheck notifications.
    #[arg(long, global = true)]
    pub throttle_ms: Option<u64>,

    /// Route path to open at startup, e.g. `components/lifecycle`.
    #[arg(short, long)]
    pub route: Option<String>,

    /// Color theme: dark or light.
    #[arg(long)]
    pub theme: Option<String>,

    /// Log file used while the terminal UI runs.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Open the terminal UI (default).
    Run,

    /// Run the lifecycle demo headless and print the relay log.
    Trace {
        /// Change-detection passes after mount.
        #[arg(short, long, default_value_t = 5)]
        passes: u32,

        /// Simulated milliseconds between passes.
        #[arg(short, long, default_value_t = 100)]
        interval_ms: u64,

        /// Destroy and recreate the guest halfway through.
        #[arg(short, long)]
        toggle: bool,

        /// One JSON object per line.
        #[arg(long)]
        json: bool,
    },

    /// Manage the settings file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Write default settings.
    Init {
        /// Replace an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the settings file location.
    Path,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(ms) = self.throttle_ms {
            settings.throttle_ms = ms;
        }
        if let Some(r) = &self.route {
            settings.start_route = r.clone();
        }
        if let Some(t) = &self.theme {
            settings.theme = t.clone();
        }
        if let Some(p) = &self.log_file {
            settings.log_file = Some(p.clone());
        }
    }

    /// Options for the `trace` command, if that is what was asked for.
    pub fn trace_options(&self, settings: &Settings) -> Option<TraceOptions> {
        match &self.command {
            Some(Command::Trace { passes, interval_ms, toggle, json }) => Some(TraceOptions {
                passes: *passes,
                interval_ms: *interval_ms,
                throttle_ms: settings.throttle_ms,
                toggle: *toggle,
                json: *json,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::parse_from(["learnHub"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn overrides_replace_loaded_values() {
        let cli = Cli::parse_from([
            "learnHub",
            "--throttle-ms",
            "50",
            "--route",
            "data-binding",
            "--theme",
            "light",
        ]);
        let mut s = Settings::default();
        cli.apply_overrides(&mut s);
        assert_eq!(s.throttle_ms, 50);
        assert_eq!(s.start_route, "data-binding");
        assert_eq!(s.theme, "light");
        assert_eq!(s.tick_ms, Settings::default().tick_ms);
    }

    #[test]
    fn trace_picks_up_settings_throttle() {
        let cli = Cli::parse_from(["learnHub", "trace", "--passes", "3", "--json", "--throttle-ms", "10"]);
        let mut s = Settings::default();
        cli.apply_overrides(&mut s);
        let opts = cli.trace_options(&s).unwrap();
        assert_eq!((opts.passes, opts.throttle_ms, opts.json), (3, 10, true));
    }

    #[test]
    fn config_init_parses() {
        let cli = Cli::parse_from(["learnHub", "config", "init", "--force"]);
        assert_eq!(cli.command, Some(Command::Config(ConfigCommand::Init { force: true })));
    }
}
