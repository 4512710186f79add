use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use crate::domain::AppError;

/// A fully resolved child-process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl CommandLine {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Argument vector including the program itself.
    pub fn argv(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone()).chain(self.args.iter().cloned()).collect()
    }
}

impl From<PathBuf> for CommandLine {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = self.argv().iter().map(|a| a.to_string_lossy().into_owned()).collect();
        f.write_str(&parts.join(" "))
    }
}

/// How a waited-on child finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Exit code, or `None` when the child was terminated by a signal.
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs child processes to completion with inherited stdio.
pub trait ProcessRunner {
    /// Spawn the command and block until it exits.
    fn run(&self, command: &CommandLine) -> Result<ExitOutcome, AppError>;
}
