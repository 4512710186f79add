use crate::app::AppContext;
use crate::domain::{AppError, Subcommand};
use crate::ports::{ProcessRunner, SessionManager};

/// Hand the remaining arguments to one utility's own entry point.
pub fn execute<R: ProcessRunner, S: SessionManager>(
    ctx: &AppContext<R, S>,
    command: Subcommand,
    args: &[String],
) -> Result<(), AppError> {
    ctx.launcher().run_program(command.program(), args)
}
