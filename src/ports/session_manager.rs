use crate::domain::AppError;

use super::CommandLine;

/// Result of asking the session manager to create a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCreation {
    Created,
    /// Another caller created a session with the same name first.
    AlreadyExists,
}

/// Named, detached background sessions that outlive the launcher.
pub trait SessionManager {
    /// Whether a session with this name currently exists.
    fn has_session(&self, name: &str) -> Result<bool, AppError>;

    /// Create a detached session running `command`.
    fn create_detached(
        &self,
        name: &str,
        command: &CommandLine,
    ) -> Result<SessionCreation, AppError>;
}
