use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

mod preserve;
pub use self::preserve::PreservePolicy;

/// Bring `install_dir` in line with the staged package: delete everything the
/// preservation policy does not protect, drop now-empty directories, then copy
/// the staged tree over the installation.
///
/// Individual delete and copy failures are warnings, not errors. One locked
/// file must not abort an otherwise successful update.
pub fn reconcile(staged_root: &Path, install_dir: &Path) -> Result<()> {
    let policy = PreservePolicy::standard()?;
    fs::create_dir_all(install_dir)
        .with_context(|| format!("create dir {}", install_dir.display()))?;
    clean_tree(install_dir, install_dir, &policy)?;
    copy_tree(staged_root, install_dir)?;
    Ok(())
}

/// Delete every unprotected file under `dir`, then remove directories that
/// ended up empty. Directories still holding preserved files stay in place.
fn clean_tree(root: &Path, dir: &Path, policy: &PreservePolicy) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            clean_tree(root, &path, policy)?;
            // Expected to fail while preserved files remain inside.
            let _ = fs::remove_dir(&path);
            continue;
        }
        let rel = path.strip_prefix(root).unwrap_or(&path);
        if policy.preserves(rel) {
            continue;
        }
        if let Err(err) = fs::remove_file(&path) {
            tracing::warn!("could not remove {}: {err}", path.display());
        }
    }
    Ok(())
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    for entry in fs::read_dir(src).with_context(|| format!("read dir {}", src.display()))? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&to).with_context(|| format!("create dir {}", to.display()))?;
            copy_tree(&from, &to)?;
            continue;
        }
        if let Err(err) = fs::copy(&from, &to) {
            tracing::warn!("could not install {}: {err}", to.display());
        }
    }
    Ok(())
}
