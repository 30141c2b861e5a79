use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use learnHub::app::settings::{load_settings_from, save_settings_to, settings_file, Settings};
use learnHub::cli::{Cli, Command, ConfigCommand};
use learnHub::{logging, runner};

fn settings_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(p) => Ok(p.clone()),
        None => settings_file().context("no configuration directory on this platform"),
    }
}

fn load(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(p) => load_settings_from(p)?,
        None => learnHub::app::settings::load_settings()?,
    };
    cli.apply_overrides(&mut settings);
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Command::Config(ConfigCommand::Path)) => {
            println!("{}", settings_path(&cli)?.display());
        }
        Some(Command::Config(ConfigCommand::Init { force })) => {
            let path = settings_path(&cli)?;
            if path.exists() && !force {
                bail!("{} already exists (use --force to replace it)", path.display());
            }
            save_settings_to(&path, &Settings::default())?;
            println!("wrote {}", path.display());
        }
        Some(Command::Trace { .. }) => {
            logging::init_stderr()?;
            let settings = load(&cli)?;
            let opts = cli
                .trace_options(&settings)
                .context("trace options missing")?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let summary = runner::run_trace(&opts, &mut out)?;
            out.flush()?;
            tracing::info!(
                events = summary.events,
                recheck = summary.guest_counters.recheck,
                "trace finished"
            );
        }
        Some(Command::Run) | None => {
            let settings = load(&cli)?;
            let path = logging::log_path(settings.log_file.as_deref())?;
            let _guard = logging::init_file(&path)?;
            tracing::info!(log = %path.display(), "starting terminal UI");
            runner::run_app(settings)?;
        }
    }
    Ok(())
}
