use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, WorkspaceLayout};

/// Staging directory name used while seeding the static tree.
const SEEDING_DIR: &str = ".static.seeding";

/// Changes made by [`WorkspaceManager::ensure_workspace`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceReport {
    /// Directories that did not exist before the call.
    pub created: Vec<PathBuf>,
    /// Template bundle copied into the static tree, if seeding happened.
    pub seeded_from: Option<PathBuf>,
}

impl WorkspaceReport {
    pub fn is_unchanged(&self) -> bool {
        self.created.is_empty() && self.seeded_from.is_none()
    }
}

/// Creates, seeds, and clears the per-user workspace tree.
#[derive(Debug, Clone)]
pub struct WorkspaceManager {
    layout: WorkspaceLayout,
    bundle_dir: PathBuf,
}

impl WorkspaceManager {
    /// `bundle_dir` is the read-only template bundle shipped with the installation.
    pub fn new(layout: WorkspaceLayout, bundle_dir: PathBuf) -> Self {
        Self { layout, bundle_dir }
    }

    /// Make sure the workspace root and artifact directories exist.
    ///
    /// The template bundle is copied only when the static tree is absent at the
    /// start of the call. An existing static tree, even a partial one, is never
    /// merged into.
    pub fn ensure_workspace(&self) -> Result<WorkspaceReport, AppError> {
        let mut report = WorkspaceReport::default();
        let root = self.layout.root();
        let static_dir = self.layout.static_dir();
        let first_run = !static_dir.exists();

        if !root.exists() {
            fs::create_dir_all(root)?;
            log::info!("Created directory: {}", root.display());
            report.created.push(root.to_path_buf());
        }

        if first_run && self.bundle_dir.exists() {
            self.seed_static(&static_dir)?;
            log::info!(
                "Copied static files from {} to {}",
                self.bundle_dir.display(),
                static_dir.display()
            );
            report.seeded_from = Some(self.bundle_dir.clone());
        }

        for dir in self.layout.artifact_dirs() {
            if !dir.exists() {
                fs::create_dir_all(&dir)?;
                log::info!("Created directory: {}", dir.display());
                report.created.push(dir);
            }
        }

        Ok(report)
    }

    /// Remove the placeholder marker from each artifact directory.
    ///
    /// Returns the markers that were actually removed.
    pub fn clear_placeholders(&self) -> Result<Vec<PathBuf>, AppError> {
        let mut removed = Vec::new();

        for marker in self.layout.placeholders() {
            match fs::remove_file(&marker) {
                Ok(()) => {
                    log::info!("Removed placeholder {}", marker.display());
                    removed.push(marker);
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }

        Ok(removed)
    }

    /// Delete every entry inside each artifact directory, keeping the directories.
    ///
    /// Returns the wiped directories.
    pub fn wipe_workspace(&self) -> Result<Vec<PathBuf>, AppError> {
        let mut wiped = Vec::new();

        for dir in self.layout.artifact_dirs() {
            fs::create_dir_all(&dir)?;
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                // symlink_metadata so links to directories are unlinked, not followed.
                if fs::symlink_metadata(&path)?.is_dir() {
                    fs::remove_dir_all(&path)?;
                } else {
                    fs::remove_file(&path)?;
                }
            }
            log::info!("Nuked all contents from {}", dir.display());
            wiped.push(dir);
        }

        Ok(wiped)
    }

    /// Copy the bundle into a staging directory, then rename it into place.
    fn seed_static(&self, static_dir: &Path) -> Result<(), AppError> {
        let staging = self.layout.root().join(SEEDING_DIR);
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }

        copy_dir_recursive(&self.bundle_dir, &staging)?;
        fs::rename(&staging, static_dir)?;
        Ok(())
    }
}

fn copy_dir_recursive(source: &Path, target: &Path) -> io::Result<()> {
    fs::create_dir_all(target)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let src = entry.path();
        let dst = target.join(entry.file_name());
        let file_type = entry.file_type()?;
        if file_type.is_symlink() {
            symlink(fs::read_link(&src)?, &dst)?;
        } else if file_type.is_dir() {
            copy_dir_recursive(&src, &dst)?;
        } else {
            fs::copy(&src, &dst)?;
        }
    }
    Ok(())
}
