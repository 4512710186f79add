use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for patronus operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Malformed `config.toml`.
    #[error("Failed to parse config.toml: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A sibling program is absent from every installation layout.
    #[error("Program '{program}' not found in {}", format_probed(.probed))]
    ProgramNotFound { program: String, probed: Vec<PathBuf> },

    /// A child process exited unsuccessfully.
    #[error("{program} failed {}", format_exit(.code))]
    ExecutionFailed { program: String, code: Option<i32> },

    /// The background session could not be created.
    #[error("Failed to start session '{session}': {details}")]
    SessionLaunch { session: String, details: String },

    /// Leading token matches no known subcommand.
    #[error("Unknown command '{command}'. Known commands: {}", .known.join(", "))]
    UnknownCommand { command: String, known: Vec<&'static str> },
}

fn format_probed(probed: &[PathBuf]) -> String {
    probed.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

fn format_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("with exit status {}", code),
        None => "after being terminated by a signal".to_string(),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::ConfigParse(_)
            | AppError::UnknownCommand { .. } => io::ErrorKind::InvalidInput,
            AppError::ProgramNotFound { .. } => io::ErrorKind::NotFound,
            AppError::ExecutionFailed { .. } | AppError::SessionLaunch { .. } => {
                io::ErrorKind::Other
            }
        }
    }

    /// Exit status the launcher terminates with when this error reaches `main`.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ExecutionFailed { code: Some(code), .. } if *code != 0 => *code,
            AppError::UnknownCommand { .. } => 2,
            _ => 1,
        }
    }
}
