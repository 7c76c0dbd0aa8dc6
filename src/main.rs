use std::{io::Read, process::ExitCode};

use adjgraph::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr, stdout is reserved for the dumps.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "error".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut src = String::new();
    if let Err(error) = std::io::stdin().read_to_string(&mut src) {
        eprintln!("error: failed to read stdin: {error}");
        return ExitCode::FAILURE;
    }

    let status = cli::execute(&src, &mut std::io::stdout(), &mut std::io::stderr());
    match status {
        Ok(status) => ExitCode::from(status),
        Err(error) => {
            eprintln!("error: failed to write output: {error}");
            ExitCode::FAILURE
        }
    }
}
