use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use meridian_updater::config::UpdaterConfig;
use meridian_updater::{launch, pipeline, progress::ProgressSlot, status_ui};

#[derive(Parser)]
#[command(name = "meridian-updater")]
#[command(about = "Update the meridian installation and relaunch the GUI", long_about = None)]
struct Cli {
    /// Installation directory to update
    install_dir: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = UpdaterConfig::default();

    let progress = ProgressSlot::new();
    let worker = pipeline::spawn_worker(cfg.clone(), cli.install_dir.clone(), progress.clone());

    // The status surface is a passive sink; it returns once the worker is
    // done, so the installation is settled before the launcher runs.
    status_ui::run(&progress);

    let outcome = match worker.join() {
        Ok(outcome) => outcome,
        Err(_) => {
            tracing::warn!("update worker panicked");
            pipeline::Outcome::Aborted
        }
    };
    tracing::debug!(?outcome, "update finished");

    // The GUI is launched whatever the update outcome: a failed update must not
    // keep the user from running the existing installation.
    launch::launch_app(&cli.install_dir, &cfg.app_executable)
        .context("launch main application")?;
    Ok(())
}
