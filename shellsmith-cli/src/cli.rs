//! CLI definition for the `smith` command-line interface.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use shellsmith::ToolFamily;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// smith - generate shell commands from a few structured options.
///
/// Every tool exposes a small set of fields with sensible defaults. Fill in
/// the ones you care about with `-s key=value` and smith prints the command.
/// Nothing is ever executed.
#[derive(Parser, Debug)]
#[command(name = "smith")]
#[command(version)]
#[command(about = "Generate shell commands from a few structured options")]
#[command(
    long_about = "smith turns a handful of options into a ready-to-paste shell command.\n\n\
    Configuration is read from ~/.shellsmith/smith.{toml,yaml,yml,json} and\n\
    ./.shellsmith/smith.{toml,yaml,yml,json}; SMITH_* environment variables\n\
    override both (use __ for nesting, e.g. SMITH_PRESETS__RSYNC__HOST).\n\n\
    Examples:\n  \
    smith gen chmod -s owner=7 -s group=5 -s other=0 -s target=deploy.sh\n  \
    smith gen sed-awk -s pattern=foo -s replacement=bar -s in-place\n  \
    smith fields rsync"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Enable informational logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format, overriding the configured default
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available tools
    List {
        /// Only show tools of this family (e.g. file-ops, networking)
        #[arg(long)]
        family: Option<ToolFamily>,
    },

    /// Show the fields a tool accepts, with their types and defaults
    Fields {
        /// Tool name (see `smith list`)
        tool: String,
    },

    /// Generate a command
    #[command(visible_alias = "generate")]
    Gen {
        /// Tool name (see `smith list`)
        tool: String,

        /// Set a field; a bare boolean field name means true
        #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Copy the command to the clipboard
        #[arg(long)]
        copy: bool,

        /// Ignore presets from configuration
        #[arg(long)]
        no_presets: bool,

        /// Also print derived notes such as symbolic permissions
        #[arg(long)]
        explain: bool,
    },

    /// Print a shell completion script
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_gen_with_assignments() {
        let cli = Cli::parse_from([
            "smith", "gen", "chmod", "-s", "owner=6", "--set", "target=a.sh", "--copy",
        ]);
        match cli.command {
            Commands::Gen {
                tool,
                set,
                copy,
                no_presets,
                explain,
            } => {
                assert_eq!(tool, "chmod");
                assert_eq!(set, vec!["owner=6", "target=a.sh"]);
                assert!(copy);
                assert!(!no_presets);
                assert!(!explain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["smith", "list", "--family", "networking", "--format", "json", "-q"]);
        assert!(cli.quiet);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::List {
                family: Some(ToolFamily::Networking)
            }
        ));
    }

    #[test]
    fn test_unknown_family_is_rejected() {
        assert!(Cli::try_parse_from(["smith", "list", "--family", "gardening"]).is_err());
    }
}
