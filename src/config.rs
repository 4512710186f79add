//! Launcher configuration.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::install_layout::site_dir;
use crate::domain::workspace_layout::STATIC_DIR;
use crate::domain::{AppError, WorkspaceLayout};

/// Overrides the workspace root (defaults to `$HOME/.local/.patronus`).
pub const WORKSPACE_ENV: &str = "PATRONUS_HOME";

/// Overrides the installation root (defaults to the executable's directory).
pub const PREFIX_ENV: &str = "PATRONUS_PREFIX";

const DEFAULT_INTERPRETER: &str = "python3";
const DEFAULT_SESSION_NAME: &str = "flask_server";
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8005";
const DEFAULT_SESSION_TOOL: &str = "tmux";

/// Launcher-wide configuration, constructed once and passed to each component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Per-user workspace tree.
    pub workspace: WorkspaceLayout,
    /// Installation root that sibling programs are resolved against.
    pub install_root: PathBuf,
    /// Interpreter prefixed to non-shell programs.
    pub interpreter: String,
    /// Name of the background server session.
    pub session_name: String,
    /// URL announced once the server session is ensured.
    pub server_url: String,
    /// Session-manager executable.
    pub session_tool: String,
}

/// `[launcher]` table of `config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LauncherOverrides {
    interpreter: Option<String>,
    session_name: Option<String>,
    server_url: Option<String>,
    session_tool: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    launcher: LauncherOverrides,
}

impl LauncherConfig {
    /// Create a configuration with default settings for the given locations.
    pub fn new(workspace_root: PathBuf, install_root: PathBuf) -> Self {
        Self {
            workspace: WorkspaceLayout::new(workspace_root),
            install_root,
            interpreter: DEFAULT_INTERPRETER.to_string(),
            session_name: DEFAULT_SESSION_NAME.to_string(),
            server_url: DEFAULT_SERVER_URL.to_string(),
            session_tool: DEFAULT_SESSION_TOOL.to_string(),
        }
    }

    /// Derive locations from the process environment.
    ///
    /// The workspace root comes from `PATRONUS_HOME` or `$HOME/.local/.patronus`;
    /// the installation root from `PATRONUS_PREFIX` or the running executable's directory.
    pub fn from_env() -> Result<Self, AppError> {
        let workspace_root = match env::var_os(WORKSPACE_ENV) {
            Some(root) => PathBuf::from(root),
            None => {
                let home = env::var_os("HOME")
                    .ok_or_else(|| AppError::config_error("HOME environment variable not set"))?;
                WorkspaceLayout::for_home(&PathBuf::from(home)).root().to_path_buf()
            }
        };

        let install_root = match env::var_os(PREFIX_ENV) {
            Some(prefix) => PathBuf::from(prefix),
            None => {
                let exe = env::current_exe()?;
                exe.parent().map(PathBuf::from).ok_or_else(|| {
                    AppError::config_error(format!(
                        "Cannot determine installation root from {}",
                        exe.display()
                    ))
                })?
            }
        };

        Ok(Self::new(workspace_root, install_root))
    }

    /// Environment-derived configuration with `config.toml` overrides applied.
    pub fn load() -> Result<Self, AppError> {
        Self::from_env()?.with_file_overrides()
    }

    /// Template bundle shipped in the package-managed site directory.
    pub fn bundle_dir(&self) -> PathBuf {
        site_dir(&self.install_root).join(STATIC_DIR)
    }

    /// Apply `[launcher]` overrides from the workspace `config.toml`, if present.
    pub fn with_file_overrides(mut self) -> Result<Self, AppError> {
        let path = self.workspace.config_file();
        if !path.exists() {
            return Ok(self);
        }

        let content = fs::read_to_string(&path)?;
        let file: ConfigFile = toml::from_str(&content)?;
        let overrides = file.launcher;

        if let Some(interpreter) = overrides.interpreter {
            self.interpreter = interpreter;
        }
        if let Some(session_name) = overrides.session_name {
            self.session_name = session_name;
        }
        if let Some(server_url) = overrides.server_url {
            self.server_url = server_url;
        }
        if let Some(session_tool) = overrides.session_tool {
            self.session_tool = session_tool;
        }
        log::debug!("Applied overrides from {}", path.display());

        Ok(self)
    }
}
