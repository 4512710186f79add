use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, Program};
use crate::ports::{ProcessRunner, SessionManager};
use crate::services::ServerStatus;

/// What the composite default flow did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultFlowOutcome {
    pub removed_placeholders: Vec<PathBuf>,
    pub server: ServerStatus,
    pub ran: Vec<Program>,
}

/// Clear placeholders, ensure the server session, then run each interactive
/// utility in order, waiting for one to exit before starting the next.
pub fn execute<R: ProcessRunner, S: SessionManager>(
    ctx: &AppContext<R, S>,
) -> Result<DefaultFlowOutcome, AppError> {
    let removed_placeholders = ctx.workspace().clear_placeholders()?;
    for marker in &removed_placeholders {
        println!("Removed {}", marker.display());
    }

    let server = ctx.sessions().ensure_server_running(ctx.launcher())?;
    match server {
        ServerStatus::AlreadyActive | ServerStatus::StartedElsewhere => {
            println!("{} session active", ctx.sessions().session_name());
        }
        ServerStatus::Started => println!("✅ Server started: {}", ctx.config().server_url),
    }

    let mut ran = Vec::with_capacity(Program::INTERACTIVE.len());
    for program in Program::INTERACTIVE {
        ctx.launcher().run_program(program, &[])?;
        ran.push(program);
    }

    Ok(DefaultFlowOutcome { removed_placeholders, server, ran })
}
