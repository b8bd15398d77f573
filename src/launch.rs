use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Spawn the main application from the installation directory as a detached
/// process. The child inherits the current environment and outlives the
/// updater; we never wait on it.
pub fn launch_app(install_dir: &Path, executable: &str) -> Result<()> {
    let path = install_dir.join(executable);
    let mut cmd = Command::new(&path);
    cmd.current_dir(install_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const DETACHED_PROCESS: u32 = 0x0000_0008;
        cmd.creation_flags(DETACHED_PROCESS);
    }

    cmd.spawn()
        .with_context(|| format!("launch {}", path.display()))?;
    Ok(())
}
