use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Win64,
    Linux64,
}

impl Platform {
    /// Platform the updater is running on, if it is one we publish packages for.
    pub fn current() -> Option<Platform> {
        if cfg!(target_os = "windows") {
            Some(Platform::Win64)
        } else if cfg!(target_os = "linux") {
            Some(Platform::Linux64)
        } else {
            None
        }
    }

    /// Substring that identifies this platform's asset in a release.
    pub fn asset_token(self) -> &'static str {
        match self {
            Platform::Win64 => "meridian-win64",
            Platform::Linux64 => "meridian-linux64",
        }
    }
}

/// First asset whose name carries the platform token, if any.
pub(super) fn select_asset(release: &Release, platform: Platform) -> Option<Asset> {
    release
        .assets
        .iter()
        .find(|a| a.name.contains(platform.asset_token()))
        .cloned()
}

impl RegistryClient {
    /// Latest release asset for `platform`, or `None` when there is nothing to
    /// install: registry unreachable, non-success status, unparseable payload,
    /// or no asset matching the platform token. None of those are errors for
    /// the caller; they all mean "quit cleanly without updating".
    pub fn resolve_latest_asset(&self, registry_url: &str, platform: Platform) -> Option<Asset> {
        let resp = match self.client.get(registry_url).send() {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!("release registry unreachable: {err:#}");
                return None;
            }
        };
        if !resp.status().is_success() {
            tracing::warn!("release registry returned status {}", resp.status());
            return None;
        }
        let release: Release = match resp.json() {
            Ok(release) => release,
            Err(err) => {
                tracing::warn!("unreadable release record: {err:#}");
                return None;
            }
        };
        select_asset(&release, platform)
    }
}

#[cfg(test)]
#[path = "../tests/remote/resolve_tests.rs"]
mod tests;
