use std::path::Path;

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Rule identifying user-owned files that must survive any update, even though
/// they never appear in a release package.
pub struct PreservePolicy {
    set: GlobSet,
}

impl PreservePolicy {
    /// Configuration, save data, and screenshots: `.ini`/`.cfg` suffixes plus
    /// any path carrying a `save` or `screenshot` component.
    pub fn standard() -> Result<Self> {
        Self::from_patterns(&[
            "**/*.ini",
            "**/*.cfg",
            "**/*save*",
            "**/*save*/**",
            "**/*screenshot*",
            "**/*screenshot*/**",
        ])
    }

    pub fn from_patterns(patterns: &[&str]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = GlobBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("bad preserve pattern {pattern}"))?;
            builder.add(glob);
        }
        let set = builder.build().context("build preserve matcher")?;
        Ok(Self { set })
    }

    /// `rel` is the file's path relative to the installation root.
    pub fn preserves(&self, rel: &Path) -> bool {
        self.set.is_match(rel)
    }
}

#[cfg(test)]
#[path = "../tests/install/preserve_tests.rs"]
mod tests;
