use clap::Parser;
use tracing_subscriber::EnvFilter;

use changed_areas::cli::{Cli, Commands};
use changed_areas::commands::{run_evaluate, run_range, run_validate};

fn default_level(cli: &Cli) -> &'static str {
    if cli.debug {
        "debug"
    } else if cli.verbose > 0 {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    }
}

/// Logs go to stderr so stdout stays clean for results.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(cli)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let exit_code = match &cli.command {
        Commands::Validate(args) => run_validate(args, &cli),
        Commands::Evaluate(args) => run_evaluate(args, &cli),
        Commands::Range(args) => run_range(args, &cli),
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
