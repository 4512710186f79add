mod process_command;
mod tmux_command;

pub use process_command::ProcessCommandAdapter;
pub use tmux_command::TmuxCommandAdapter;
