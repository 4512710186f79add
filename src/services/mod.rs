//! Core launcher components.

mod program_launcher;
mod program_resolver;
mod session_guard;
mod workspace_manager;

pub use program_launcher::ProgramLauncher;
pub use program_resolver::ProgramResolver;
pub use session_guard::{ServerStatus, SessionGuard};
pub use workspace_manager::{WorkspaceManager, WorkspaceReport};
