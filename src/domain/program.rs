//! Registry of sibling programs the launcher can resolve and run.

use std::fmt;

/// Extension marking programs that declare their own interpreter.
const SHELL_EXTENSION: &str = ".sh";

/// How a resolved program is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationKind {
    /// Executed directly; the file carries its own shebang.
    Direct,
    /// Executed through the configured interpreter.
    Interpreted,
}

/// Sibling programs shipped alongside the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    Configure,
    Edit,
    Redact,
    Split,
    Server,
}

impl Program {
    pub const ALL: [Program; 5] =
        [Program::Configure, Program::Edit, Program::Redact, Program::Split, Program::Server];

    /// Interactive utilities run by the default flow, in execution order.
    pub const INTERACTIVE: [Program; 3] = [Program::Edit, Program::Redact, Program::Split];

    /// File name probed for in each installation layout.
    pub fn file_name(&self) -> &'static str {
        match self {
            Program::Configure => "configure.sh",
            Program::Edit => "edit.py",
            Program::Redact => "redact.py",
            Program::Split => "split.py",
            Program::Server => "server.py",
        }
    }

    pub fn invocation_kind(&self) -> InvocationKind {
        invocation_kind_for(self.file_name())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Classify a program file by its name.
pub fn invocation_kind_for(file_name: &str) -> InvocationKind {
    if file_name.ends_with(SHELL_EXTENSION) {
        InvocationKind::Direct
    } else {
        InvocationKind::Interpreted
    }
}
