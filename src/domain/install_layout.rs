//! Installation layouts probed when resolving sibling programs.

use std::path::{Path, PathBuf};

/// Name of the package-managed site directory, versioned with the crate.
pub fn site_dir_name() -> String {
    format!("{}-{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Site directory holding package-managed programs and the template bundle.
pub fn site_dir(install_root: &Path) -> PathBuf {
    install_root.join("lib").join(site_dir_name()).join("site")
}

/// Where an installation mechanism places sibling programs relative to the install root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallLayout {
    /// Programs sit one level above the install root.
    Parent,
    /// Programs sit directly inside the install root.
    Flat,
    /// Programs sit in the versioned library site directory.
    PackageManaged,
}

impl InstallLayout {
    /// Probe order. The first layout holding the program wins.
    pub const PRIORITY: [InstallLayout; 3] =
        [InstallLayout::Parent, InstallLayout::Flat, InstallLayout::PackageManaged];

    pub fn candidate(&self, install_root: &Path, file_name: &str) -> PathBuf {
        match self {
            InstallLayout::Parent => install_root.join("..").join(file_name),
            InstallLayout::Flat => install_root.join(file_name),
            InstallLayout::PackageManaged => site_dir(install_root).join(file_name),
        }
    }
}
