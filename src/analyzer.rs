use crate::rules::{Node, RuleSet};
use crate::store::PackageStore;
use crate::utils::relative_slash_path;
use anyhow::{Context, Result};
use std::fs::Metadata;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

/// The scanner. Configuration options for a scan are stored here.
#[derive(Debug, Clone, Default)]
pub struct Blamer {
    /// Whether to blame packages for shipping `.jsx` and `.ts` sources.
    pub include_sources: bool,
}

impl Blamer {
    /// Creates a new `Blamer` with the given configuration.
    pub fn new(include_sources: bool) -> Self {
        Self { include_sources }
    }

    /// Creates the empty store a scan accumulates into.
    pub fn store(&self) -> PackageStore {
        PackageStore::with_rules(RuleSet::new(self.include_sources))
    }

    /// Walks the dependency tree rooted at `root` and blames every entry on
    /// its owning package.
    ///
    /// Paths are made relative to `root`, so `root` should be a
    /// `node_modules` directory or a single package. Symlinks are not
    /// followed. The walk stops at the first entry that cannot be read.
    pub fn analyze(&self, root: &Path) -> Result<PackageStore> {
        let mut store = self.store();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let visited = entry.and_then(|entry| {
                let metadata = entry.metadata()?;
                Ok((relative_slash_path(root, entry.path()), metadata))
            });
            match visited {
                Ok((path, metadata)) => store.visit::<walkdir::Error>(Ok(Node {
                    path: &path,
                    is_dir: metadata.is_dir(),
                    mode: mode_bits(&metadata),
                })),
                Err(err) => store.visit(Err(err)),
            }
            .with_context(|| format!("File system traversing error in {}", root.display()))?;
        }

        info!(
            root = %root.display(),
            packages = store.package_count(),
            with_errors = store.packages_with_errors(),
            "scan finished"
        );
        Ok(store)
    }
}

#[cfg(unix)]
fn mode_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(metadata: &Metadata) -> u32 {
    tracing::debug!(
        readonly = metadata.permissions().readonly(),
        "execute bits unavailable on this platform"
    );
    0
}
