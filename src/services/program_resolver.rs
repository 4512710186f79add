use std::path::PathBuf;

use crate::domain::{AppError, InstallLayout, Program};

/// Locates sibling programs across the supported installation layouts.
#[derive(Debug, Clone)]
pub struct ProgramResolver {
    install_root: PathBuf,
}

impl ProgramResolver {
    pub fn new(install_root: PathBuf) -> Self {
        Self { install_root }
    }

    pub fn resolve(&self, program: Program) -> Result<PathBuf, AppError> {
        self.resolve_file(program.file_name())
    }

    /// Return the first candidate that exists, probing layouts in priority order.
    ///
    /// Only presence is checked; file type and permissions are left to the launcher.
    pub fn resolve_file(&self, file_name: &str) -> Result<PathBuf, AppError> {
        let mut probed = Vec::with_capacity(InstallLayout::PRIORITY.len());

        for layout in InstallLayout::PRIORITY {
            let candidate = layout.candidate(&self.install_root, file_name);
            log::debug!("Probing {:?} layout: {}", layout, candidate.display());
            if candidate.exists() {
                return Ok(candidate);
            }
            probed.push(candidate);
        }

        Err(AppError::ProgramNotFound { program: file_name.to_string(), probed })
    }
}
