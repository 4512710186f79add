use crate::domain::{AppError, Program};
use crate::ports::{ProcessRunner, SessionCreation, SessionManager};

use super::ProgramLauncher;

/// Outcome of [`SessionGuard::ensure_server_running`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerStatus {
    /// A session with the configured name was already running.
    AlreadyActive,
    /// This call created the session.
    Started,
    /// The session appeared between the existence check and creation.
    StartedElsewhere,
}

/// Keeps at most one background server session alive.
pub struct SessionGuard<S: SessionManager> {
    sessions: S,
    session_name: String,
}

impl<S: SessionManager> SessionGuard<S> {
    pub fn new(sessions: S, session_name: impl Into<String>) -> Self {
        Self { sessions, session_name: session_name.into() }
    }

    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    pub fn session_name(&self) -> &str {
        &self.session_name
    }

    /// Start the server in a detached session unless one is already running.
    ///
    /// Check-then-create is not atomic; losing the creation race to another
    /// launcher is reported as [`ServerStatus::StartedElsewhere`], not an error.
    pub fn ensure_server_running<R: ProcessRunner>(
        &self,
        launcher: &ProgramLauncher<R>,
    ) -> Result<ServerStatus, AppError> {
        if self.sessions.has_session(&self.session_name)? {
            log::info!("{} session active", self.session_name);
            return Ok(ServerStatus::AlreadyActive);
        }

        let command = launcher.prepare(Program::Server, &[])?;
        match self.sessions.create_detached(&self.session_name, &command)? {
            SessionCreation::Created => {
                log::info!("Started {} in session {}", command, self.session_name);
                Ok(ServerStatus::Started)
            }
            SessionCreation::AlreadyExists => {
                log::info!("{} session was created concurrently", self.session_name);
                Ok(ServerStatus::StartedElsewhere)
            }
        }
    }
}
