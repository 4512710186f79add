//! Invocation modes selected by the command router.

use super::Program;

/// Flag passed to the configuration utility to revert its changes.
pub const UNDO_FLAG: &str = "--undo";

/// Configuration toggle direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    /// Arguments forwarded to the configuration utility.
    pub fn args(&self) -> Vec<String> {
        match self {
            Toggle::On => Vec::new(),
            Toggle::Off => vec![UNDO_FLAG.to_string()],
        }
    }
}

/// Utilities reachable by name from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    Edit,
    Redact,
    Split,
    Server,
}

impl Subcommand {
    pub const ALL: [Subcommand; 4] =
        [Subcommand::Edit, Subcommand::Redact, Subcommand::Split, Subcommand::Server];

    pub fn name(&self) -> &'static str {
        match self {
            Subcommand::Edit => "edit",
            Subcommand::Redact => "redact",
            Subcommand::Split => "split",
            Subcommand::Server => "server",
        }
    }

    pub fn program(&self) -> Program {
        match self {
            Subcommand::Edit => Program::Edit,
            Subcommand::Redact => Program::Redact,
            Subcommand::Split => Program::Split,
            Subcommand::Server => Program::Server,
        }
    }

    /// Case-sensitive lookup by command-line token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == token)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Subcommand::name).collect()
    }
}

/// What a single launcher invocation does, after priority resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Toggle(Toggle),
    Nuke,
    Dispatch { command: Subcommand, args: Vec<String> },
    Unknown { token: String },
    Default,
}

/// Parsed intent before priority resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub toggle: Option<Toggle>,
    pub nuke: bool,
    /// Leading token and the arguments following it.
    pub command: Option<(String, Vec<String>)>,
}

impl Invocation {
    /// Resolve to exactly one mode: toggle, then nuke, then subcommand, then default.
    pub fn into_mode(self) -> Mode {
        if let Some(toggle) = self.toggle {
            return Mode::Toggle(toggle);
        }
        if self.nuke {
            return Mode::Nuke;
        }
        match self.command {
            Some((token, args)) => match Subcommand::from_token(&token) {
                Some(command) => Mode::Dispatch { command, args },
                None => Mode::Unknown { token },
            },
            None => Mode::Default,
        }
    }
}
