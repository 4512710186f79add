//! CLI Adapter.

use clap::{Parser, Subcommand as ClapSubcommand};

use crate::domain::{AppError, Invocation, Subcommand, Toggle};

#[derive(Parser)]
#[command(name = "patronus")]
#[command(version)]
#[command(disable_help_subcommand = true)]
#[command(
    about = "Launch the patronus editing, redaction, and splitting utilities",
    long_about = None
)]
struct Cli {
    /// Erase all contents from the static artifact directories
    #[arg(long)]
    nuke: bool,
    /// Log launcher diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(ClapSubcommand)]
enum Commands {
    /// Apply the shell configuration (runs configure.sh)
    On,
    /// Revert the shell configuration (runs configure.sh --undo)
    Off,
    /// Run the editor, forwarding all arguments
    #[command(disable_help_flag = true)]
    Edit {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Run the redactor, forwarding all arguments
    #[command(disable_help_flag = true)]
    Redact {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Run the splitter, forwarding all arguments
    #[command(disable_help_flag = true)]
    Split {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Run the web server in the foreground, forwarding all arguments
    #[command(disable_help_flag = true)]
    Server {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Cli {
    fn into_invocation(self) -> Invocation {
        let mut invocation = Invocation { nuke: self.nuke, ..Default::default() };

        let Some(command) = self.command else {
            return invocation;
        };
        match command {
            Commands::On => invocation.toggle = Some(Toggle::On),
            Commands::Off => invocation.toggle = Some(Toggle::Off),
            Commands::Edit { args } => invocation.command = known(Subcommand::Edit, args),
            Commands::Redact { args } => invocation.command = known(Subcommand::Redact, args),
            Commands::Split { args } => invocation.command = known(Subcommand::Split, args),
            Commands::Server { args } => invocation.command = known(Subcommand::Server, args),
            Commands::External(mut argv) => {
                if !argv.is_empty() {
                    let token = argv.remove(0);
                    invocation.command = Some((token, argv));
                }
            }
        }
        invocation
    }
}

fn known(command: Subcommand, args: Vec<String>) -> Option<(String, Vec<String>)> {
    Some((command.name().to_string(), args))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PATRONUS_LOG", default_level))
        .format_timestamp(None)
        .init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = crate::launch(cli.into_invocation()).map(|_| ());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
