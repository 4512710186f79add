use std::ffi::CString;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::domain::{AppError, InvocationKind, Program};
use crate::ports::{CommandLine, ProcessRunner};

use super::ProgramResolver;

/// Execute bits for owner, group, and other.
const EXECUTE_BITS: u32 = 0o111;

/// Resolves sibling programs and runs them to completion.
pub struct ProgramLauncher<R: ProcessRunner> {
    resolver: ProgramResolver,
    runner: R,
    interpreter: String,
}

impl<R: ProcessRunner> ProgramLauncher<R> {
    pub fn new(resolver: ProgramResolver, runner: R, interpreter: impl Into<String>) -> Self {
        Self { resolver, runner, interpreter: interpreter.into() }
    }

    pub fn resolver(&self) -> &ProgramResolver {
        &self.resolver
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Build the command line for a program without running it.
    ///
    /// Resolves the program and adds execute bits when the current user cannot execute it.
    pub fn prepare(&self, program: Program, args: &[String]) -> Result<CommandLine, AppError> {
        let path = self.resolver.resolve(program)?;
        ensure_executable(&path)?;

        let command = match program.invocation_kind() {
            InvocationKind::Direct => CommandLine::from(path),
            InvocationKind::Interpreted => CommandLine::new(&self.interpreter).arg(path),
        };
        Ok(command.args(args))
    }

    /// Run a program with `args` forwarded verbatim and wait for it to exit.
    pub fn run_program(&self, program: Program, args: &[String]) -> Result<(), AppError> {
        let command = self.prepare(program, args)?;
        let outcome = self.runner.run(&command)?;

        if !outcome.is_success() {
            return Err(AppError::ExecutionFailed {
                program: program.file_name().to_string(),
                code: outcome.code,
            });
        }
        Ok(())
    }
}

/// Add execute bits to a program the current user cannot execute. Existing bits are never cleared.
fn ensure_executable(path: &Path) -> Result<(), AppError> {
    if can_execute(path)? {
        return Ok(());
    }

    let mut permissions = fs::metadata(path)?.permissions();
    let mode = permissions.mode();
    permissions.set_mode(mode | EXECUTE_BITS);
    fs::set_permissions(path, permissions)?;
    log::debug!("Added execute permission to {}", path.display());
    Ok(())
}

/// Whether the real user may execute `path`, as decided by `access(2)`.
fn can_execute(path: &Path) -> Result<bool, AppError> {
    let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|_| {
        AppError::config_error(format!("Path contains a NUL byte: {}", path.display()))
    })?;
    // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
    let status = unsafe { libc::access(c_path.as_ptr(), libc::X_OK) };
    Ok(status == 0)
}
