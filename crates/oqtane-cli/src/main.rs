//! oqtane CLI — module scaffolding for Oqtane solutions.
//!
//! Provides the `module create` and `module list` commands. Both locate the
//! solution from `--solution` (or the current directory) and delegate to
//! [`oqtane_core::project`].

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use oqtane_core::config::{DEFAULT_FRAMEWORK, DEFAULT_TEMPLATE};

#[derive(Parser, Debug)]
#[command(
    name = "oqtane",
    about = "Oqtane CLI - Module and theme scaffolding tool",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create and manage Oqtane modules
    Module {
        #[command(subcommand)]
        command: ModuleCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ModuleCommands {
    /// Create a new Oqtane module
    Create {
        /// Owner/company name for namespace
        #[arg(long)]
        owner: String,

        /// Module name
        #[arg(long)]
        name: String,

        /// Template type: internal or external
        #[arg(long, default_value = DEFAULT_TEMPLATE)]
        template: String,

        /// Brief module description
        #[arg(long, default_value = "")]
        description: String,

        /// Path to Oqtane solution directory
        #[arg(long, env = "OQTANE_SOLUTION", default_value = ".")]
        solution: PathBuf,

        /// Target framework version
        #[arg(long, env = "OQTANE_FRAMEWORK", default_value = DEFAULT_FRAMEWORK)]
        framework: String,

        /// Overwrite existing module if it exists
        #[arg(long)]
        force: bool,
    },

    /// List available module templates
    List {
        /// Path to Oqtane solution directory
        #[arg(long, env = "OQTANE_SOLUTION", default_value = ".")]
        solution: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Help and --version are not failures.
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Module { command } => match command {
            ModuleCommands::Create {
                owner,
                name,
                template,
                description,
                solution,
                framework,
                force,
            } => {
                let request = oqtane_core::project::ModuleRequest {
                    owner,
                    module: name,
                    template,
                    description,
                    solution,
                    framework,
                    force,
                };
                commands::create::run(&request)
            }
            ModuleCommands::List { solution } => commands::list::run(&solution),
        },
    }
}
