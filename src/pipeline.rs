use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use anyhow::Result;

use crate::config::UpdaterConfig;
use crate::install::reconcile;
use crate::progress::{FinishOnDrop, ProgressSlot};
use crate::remote::{Platform, RegistryClient};
use crate::stage::{StagingArea, extract_zip};

/// Phases of a run, in the order a successful run visits them. Every entry
/// pushes its label to the progress slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Init,
    Resolving,
    Downloading,
    Extracting,
    Installing,
    CleaningUp,
    Done,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Init => "Initializing",
            Phase::Resolving => "Determining latest release",
            Phase::Downloading => "Downloading latest release",
            Phase::Extracting => "Extracting release",
            Phase::Installing => "Moving files into place",
            Phase::CleaningUp => "Cleaning up",
            Phase::Done => "Done",
        }
    }
}

/// Terminal state of a run. Every variant except `Updated` quit before the
/// installation directory was touched; none is ever retried within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    NoAssetFound,
    DownloadFailed,
    Aborted,
}

/// Run the full update pipeline once: resolve, download, extract into staging,
/// reconcile the installation. Extraction completes entirely in the staging
/// area before the installation directory is mutated.
pub fn run_update(
    cfg: &UpdaterConfig,
    install_dir: &Path,
    progress: &ProgressSlot,
) -> Result<Outcome> {
    progress.set(Phase::Resolving);
    let Some(platform) = Platform::current() else {
        return Ok(Outcome::NoAssetFound);
    };
    let client = RegistryClient::new(cfg.request_timeout)?;
    let Some(asset) = client.resolve_latest_asset(&cfg.registry_url, platform) else {
        return Ok(Outcome::NoAssetFound);
    };

    progress.set(Phase::Downloading);
    let bytes = match client.download_asset(&asset) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("{err:#}");
            return Ok(Outcome::DownloadFailed);
        }
    };

    let stage = StagingArea::create()?;
    progress.set(Phase::Extracting);
    extract_zip(&bytes, stage.path())?;

    progress.set(Phase::Installing);
    let package = stage.package_root()?;
    reconcile(&package, install_dir)?;

    progress.set(Phase::CleaningUp);
    drop(stage);
    progress.set(Phase::Done);
    Ok(Outcome::Updated)
}

/// Start the single background worker. It waits out the configured start delay,
/// runs the pipeline end-to-end, and releases the foreground loop whatever the
/// outcome; the drop guard keeps that true across panics. Unexpected internal
/// errors degrade to a quiet abort.
pub fn spawn_worker(
    cfg: UpdaterConfig,
    install_dir: PathBuf,
    progress: ProgressSlot,
) -> JoinHandle<Outcome> {
    thread::spawn(move || {
        let _finish = FinishOnDrop::new(progress.clone());
        thread::sleep(cfg.start_delay);
        run_update(&cfg, &install_dir, &progress).unwrap_or_else(|err| {
            tracing::warn!("update aborted: {err:#}");
            Outcome::Aborted
        })
    })
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
