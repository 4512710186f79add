use crate::app::AppContext;
use crate::domain::{AppError, Program, Toggle};
use crate::ports::{ProcessRunner, SessionManager};

/// Run the configuration utility, with the undo flag when switching off.
pub fn execute<R: ProcessRunner, S: SessionManager>(
    ctx: &AppContext<R, S>,
    toggle: Toggle,
) -> Result<(), AppError> {
    ctx.launcher().run_program(Program::Configure, &toggle.args())
}
