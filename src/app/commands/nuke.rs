use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ProcessRunner, SessionManager};

/// Empty every artifact directory. Irreversible.
pub fn execute<R: ProcessRunner, S: SessionManager>(
    ctx: &AppContext<R, S>,
) -> Result<Vec<PathBuf>, AppError> {
    let wiped = ctx.workspace().wipe_workspace()?;
    for dir in &wiped {
        println!("🧹 Nuked all contents from {}", dir.display());
    }
    Ok(wiped)
}
