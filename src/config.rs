use std::time::Duration;

/// Release registry endpoint for the meridian project.
pub const RELEASES_URL: &str =
    "https://api.github.com/repos/meridian-emu/meridian/releases/latest";

#[cfg(windows)]
pub const APP_EXECUTABLE: &str = "meridian-gui.exe";
#[cfg(not(windows))]
pub const APP_EXECUTABLE: &str = "meridian-gui";

#[derive(Clone, Debug)]
pub struct UpdaterConfig {
    /// URL queried for the latest release record.
    pub registry_url: String,
    /// Name of the main application binary inside the installation directory.
    pub app_executable: String,
    /// Per-request network timeout.
    pub request_timeout: Duration,
    /// Delay before the worker starts, so the status window renders first and a
    /// still-exiting GUI instance releases its files.
    pub start_delay: Duration,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            registry_url: RELEASES_URL.to_string(),
            app_executable: APP_EXECUTABLE.to_string(),
            request_timeout: Duration::from_secs(30),
            start_delay: Duration::from_secs(3),
        }
    }
}
