use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod lookup;
pub mod terminal;

#[cfg(test)]
mod tests;

use self::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // A .env file is optional
    let _ = dotenvy::dotenv();
    init_tracing(cli.verbose);

    let lines = match lookup::run(&cli).await {
        Ok(lines) => lines,
        Err(e) => {
            tracing::debug!("lookup failed: {e:?}");
            eprintln!("{}", lookup::failure_message(&e));
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = lookup::write_lines(&mut io::stdout().lock(), &lines) {
        tracing::error!("failed to write output: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Logs go to stderr so they never mix with rendered output. `RUST_LOG`
/// wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
