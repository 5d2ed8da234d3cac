use clap::Parser;

use shellsmith_cli::logging::configure_logging;
use shellsmith_cli::{handle_cli_result, run, Cli};

fn main() {
    let cli = Cli::parse();
    configure_logging(cli.verbose, cli.debug, cli.quiet);
    std::process::exit(handle_cli_result(run(cli)));
}
