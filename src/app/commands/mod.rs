//! Mode handlers and the router sequencing them.

pub mod default_flow;
pub mod dispatch;
pub mod nuke;
pub mod toggle;

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, Mode, Subcommand, Toggle};
use crate::ports::{ProcessRunner, SessionManager};
use crate::services::WorkspaceReport;

pub use default_flow::DefaultFlowOutcome;

/// What the selected mode did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeOutcome {
    Toggled(Toggle),
    Nuked(Vec<PathBuf>),
    Dispatched(Subcommand),
    Default(DefaultFlowOutcome),
}

/// Result of one launcher invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub workspace: WorkspaceReport,
    pub mode: ModeOutcome,
}

/// Initialize the workspace, then run the handler for `mode`.
pub fn launch<R: ProcessRunner, S: SessionManager>(
    ctx: &AppContext<R, S>,
    mode: Mode,
) -> Result<LaunchOutcome, AppError> {
    let workspace = ctx.workspace().ensure_workspace()?;
    for dir in &workspace.created {
        println!("Created directory: {}", dir.display());
    }
    if let Some(bundle) = &workspace.seeded_from {
        println!(
            "Copied static files from {} to {}",
            bundle.display(),
            ctx.config().workspace.static_dir().display()
        );
    }

    let mode = match mode {
        Mode::Toggle(toggle) => {
            toggle::execute(ctx, toggle)?;
            ModeOutcome::Toggled(toggle)
        }
        Mode::Nuke => ModeOutcome::Nuked(nuke::execute(ctx)?),
        Mode::Dispatch { command, args } => {
            dispatch::execute(ctx, command, &args)?;
            ModeOutcome::Dispatched(command)
        }
        Mode::Unknown { token } => {
            return Err(AppError::UnknownCommand { command: token, known: Subcommand::names() });
        }
        Mode::Default => ModeOutcome::Default(default_flow::execute(ctx)?),
    };

    Ok(LaunchOutcome { workspace, mode })
}
