use std::process::Command;

use crate::domain::AppError;
use crate::ports::{CommandLine, ExitOutcome, ProcessRunner};

/// Runs programs as foreground children sharing the launcher's terminal.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandAdapter;

impl ProcessCommandAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for ProcessCommandAdapter {
    fn run(&self, command: &CommandLine) -> Result<ExitOutcome, AppError> {
        log::debug!("Running {}", command);

        let status = Command::new(&command.program).args(&command.args).status()?;

        Ok(ExitOutcome { code: status.code() })
    }
}
