use crate::config::LauncherConfig;
use crate::ports::{ProcessRunner, SessionManager};
use crate::services::{ProgramLauncher, ProgramResolver, SessionGuard, WorkspaceManager};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: ProcessRunner, S: SessionManager> {
    config: LauncherConfig,
    workspace: WorkspaceManager,
    launcher: ProgramLauncher<R>,
    sessions: SessionGuard<S>,
}

impl<R: ProcessRunner, S: SessionManager> AppContext<R, S> {
    /// Wire every component from a single configuration value.
    pub fn new(config: LauncherConfig, runner: R, sessions: S) -> Self {
        let workspace = WorkspaceManager::new(config.workspace.clone(), config.bundle_dir());
        let resolver = ProgramResolver::new(config.install_root.clone());
        let launcher = ProgramLauncher::new(resolver, runner, config.interpreter.clone());
        let sessions = SessionGuard::new(sessions, config.session_name.clone());
        Self { config, workspace, launcher, sessions }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn workspace(&self) -> &WorkspaceManager {
        &self.workspace
    }

    pub fn launcher(&self) -> &ProgramLauncher<R> {
        &self.launcher
    }

    pub fn sessions(&self) -> &SessionGuard<S> {
        &self.sessions
    }
}
