use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Scratch directory a single update run assembles the new release in. Removed
/// on drop, so every exit path releases it.
pub struct StagingArea {
    dir: tempfile::TempDir,
}

impl StagingArea {
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("meridian-update-")
            .tempdir()
            .context("create staging directory")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Root of the files to install. Packages normally wrap their contents in a
    /// single top-level directory; a package with files at the archive root is
    /// installed from the root instead.
    pub fn package_root(&self) -> Result<PathBuf> {
        let root = self.path();
        let mut entries = Vec::new();
        for entry in fs::read_dir(root).with_context(|| format!("read dir {}", root.display()))? {
            entries.push(entry?);
        }
        match entries.as_slice() {
            [only] if only.file_type()?.is_dir() => Ok(only.path()),
            _ => Ok(root.to_path_buf()),
        }
    }
}

/// Unpack every archive entry under `dest`, preserving relative paths and each
/// entry's stored permission bits. Permission application is best-effort per
/// entry; content extraction is not.
pub fn extract_zip(bytes: &[u8], dest: &Path) -> Result<()> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).context("open release archive")?;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("read archive entry {i}"))?;
        let Some(rel) = entry.enclosed_name() else {
            tracing::warn!("skipping archive entry escaping the staging area: {}", entry.name());
            continue;
        };
        let out_path = dest.join(rel);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)
                .with_context(|| format!("create dir {}", out_path.display()))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let mut out = fs::File::create(&out_path)
            .with_context(|| format!("create file {}", out_path.display()))?;
        io::copy(&mut entry, &mut out)
            .with_context(|| format!("write file {}", out_path.display()))?;

        if let Some(mode) = entry.unix_mode() {
            if let Err(err) = set_file_mode(&out_path, mode) {
                tracing::warn!("{err:#}");
            }
        }
    }
    Ok(())
}

fn set_file_mode(path: &Path, mode: u32) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perm = fs::Permissions::from_mode(mode);
        fs::set_permissions(path, perm)
            .with_context(|| format!("set permissions {}", path.display()))?;
        Ok(())
    }

    #[cfg(not(unix))]
    {
        let _ = (path, mode);
        Ok(())
    }
}
