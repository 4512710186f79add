use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::{CommandLine, SessionCreation, SessionManager};

/// Marker tmux prints when `new-session` loses a race for the same name.
const DUPLICATE_SESSION: &str = "duplicate session";

/// Session manager backed by the `tmux` command-line tool.
#[derive(Debug, Clone)]
pub struct TmuxCommandAdapter {
    tool: String,
}

impl TmuxCommandAdapter {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    fn launch_error(&self, session: &str, err: std::io::Error) -> AppError {
        AppError::SessionLaunch {
            session: session.to_string(),
            details: format!("Failed to execute {}: {}", self.tool, err),
        }
    }
}

impl SessionManager for TmuxCommandAdapter {
    fn has_session(&self, name: &str) -> Result<bool, AppError> {
        // `=` requests an exact match; tmux otherwise accepts name prefixes.
        let target = format!("={}", name);
        let status = Command::new(&self.tool)
            .args(["has-session", "-t", &target])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| self.launch_error(name, e))?;

        Ok(status.success())
    }

    fn create_detached(
        &self,
        name: &str,
        command: &CommandLine,
    ) -> Result<SessionCreation, AppError> {
        log::debug!("{} new-session -d -s {} {}", self.tool, name, command);
        let output = Command::new(&self.tool)
            .args(["new-session", "-d", "-s", name])
            .args(command.argv())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.launch_error(name, e))?;

        if output.status.success() {
            return Ok(SessionCreation::Created);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.contains(DUPLICATE_SESSION) {
            return Ok(SessionCreation::AlreadyExists);
        }

        Err(AppError::SessionLaunch {
            session: name.to_string(),
            details: if stderr.is_empty() {
                format!("{} new-session exited with {}", self.tool, output.status)
            } else {
                stderr
            },
        })
    }
}
