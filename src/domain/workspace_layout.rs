//! Fixed directory tree of the per-user workspace.

use std::path::{Path, PathBuf};

/// Workspace root relative to the user's home directory.
pub const WORKSPACE_DIR: &str = ".local/.patronus";

/// Directory under the workspace root holding utility artifacts.
pub const STATIC_DIR: &str = "static";

/// Artifact directories, one per external utility.
pub const ARTIFACT_DIRS: [&str; 3] = ["full", "redacted_full", "splits"];

/// Zero-byte marker keeping distributed artifact directories non-empty.
pub const PLACEHOLDER_FILE: &str = ".gitkeep";

/// Optional launcher overrides inside the workspace root.
pub const CONFIG_FILE: &str = "config.toml";

/// Path accessors over a workspace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    root: PathBuf,
}

impl WorkspaceLayout {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Layout rooted at `<home>/.local/.patronus`.
    pub fn for_home(home: &Path) -> Self {
        Self::new(home.join(WORKSPACE_DIR))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join(STATIC_DIR)
    }

    pub fn artifact_dirs(&self) -> Vec<PathBuf> {
        ARTIFACT_DIRS.iter().map(|name| self.static_dir().join(name)).collect()
    }

    pub fn placeholders(&self) -> Vec<PathBuf> {
        self.artifact_dirs().into_iter().map(|dir| dir.join(PLACEHOLDER_FILE)).collect()
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}
