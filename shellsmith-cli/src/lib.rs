//! smith - generate shell commands from a few structured options
//!
//! Commands:
//! - `smith list [--family <family>]`: List the available tools
//! - `smith fields <tool>`: Show a tool's fields, types and defaults
//! - `smith gen <tool> [-s key=value]...`: Generate a command
//! - `smith completion <shell>`: Print a shell completion script
//!
//! Exit codes:
//! - 0: Success
//! - 1: Rejected input (unknown field, invalid value)
//! - 2: Error (unknown tool, broken configuration)

pub mod cli;
pub mod clipboard;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fields;
pub mod generate;
pub mod list;
pub mod logging;
pub mod table;

pub use cli::{Cli, Commands, OutputFormat};
pub use error::{handle_cli_result, CliError, CliResult};

use clap::CommandFactory;
use context::CliContext;
use generate::GenerateRequest;

/// Run a parsed command line.
pub fn run(cli: Cli) -> CliResult<()> {
    if let Commands::Completion { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "smith", &mut std::io::stdout());
        return Ok(());
    }

    let config = shellsmith_config::load_config()?;
    let context = CliContext::new(config, cli.format);

    match cli.command {
        Commands::List { family } => list::run_list(&context, family),
        Commands::Fields { tool } => fields::run_fields(&context, &tool),
        Commands::Gen {
            tool,
            set,
            copy,
            no_presets,
            explain,
        } => generate::run_generate(
            &context,
            &GenerateRequest {
                tool: &tool,
                assignments: &set,
                copy,
                no_presets,
                explain,
            },
        ),
        Commands::Completion { .. } => Ok(()),
    }
}
