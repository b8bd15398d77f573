use std::time::Duration;

use anyhow::{Context, Result};

mod types;
pub use self::types::*;

mod download;
mod resolve;
pub use self::resolve::Platform;

/// Blocking client for the release registry and asset downloads.
pub struct RegistryClient {
    client: reqwest::blocking::Client,
}

impl RegistryClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("meridian-updater")
            .timeout(timeout)
            .build()
            .context("build reqwest client")?;
        Ok(Self { client })
    }
}
