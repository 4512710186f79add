mod process_runner;
mod session_manager;

pub use process_runner::{CommandLine, ExitOutcome, ProcessRunner};
pub use session_manager::{SessionCreation, SessionManager};
