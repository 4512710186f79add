//! Domain types for the patronus launcher.

mod error;
pub mod install_layout;
mod mode;
mod program;
pub mod workspace_layout;

pub use error::AppError;
pub use install_layout::InstallLayout;
pub use mode::{Invocation, Mode, Subcommand, Toggle, UNDO_FLAG};
pub use program::{InvocationKind, Program, invocation_kind_for};
pub use workspace_layout::WorkspaceLayout;
