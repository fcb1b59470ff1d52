use std::process::ExitCode;

use clap::Parser;
use langsync::cli::{Arguments, ExitStatus};
use tracing_subscriber::EnvFilter;

/// Log to stderr. `RUST_LOG` wins; otherwise only errors, or debug output with `-v`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "langsync=debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match langsync::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
