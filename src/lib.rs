//! patronus: launcher for the patronus utility suite.
//!
//! Resolves sibling programs across installation layouts, keeps the per-user
//! workspace under `~/.local/.patronus` initialized, guards the singleton
//! background server session, and routes command-line intent to the editor,
//! redactor, splitter, and server.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;


use adapters::{ProcessCommandAdapter, TmuxCommandAdapter};
use app::AppContext;
use app::commands;

pub use app::commands::{DefaultFlowOutcome, LaunchOutcome, ModeOutcome};
pub use config::LauncherConfig;
pub use domain::{AppError, Invocation, Mode, Program, Subcommand, Toggle};
pub use services::{ServerStatus, WorkspaceReport};

/// Run one launcher invocation against the real environment.
///
/// Configuration comes from `$HOME`, `PATRONUS_HOME`, `PATRONUS_PREFIX`, and the
/// workspace `config.toml`. Programs run as child processes and the server is
/// started in a detached tmux session.
pub fn launch(invocation: Invocation) -> Result<LaunchOutcome, AppError> {
    let config = LauncherConfig::load()?;
    launch_with(config, invocation)
}

/// Run one launcher invocation with an explicit configuration.
pub fn launch_with(
    config: LauncherConfig,
    invocation: Invocation,
) -> Result<LaunchOutcome, AppError> {
    let sessions = TmuxCommandAdapter::new(config.session_tool.clone());
    let ctx = AppContext::new(config, ProcessCommandAdapter::new(), sessions);

    commands::launch(&ctx, invocation.into_mode())
}
