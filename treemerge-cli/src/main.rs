//! CLI entrypoint for `treemerge`.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use treemerge_cli::cli::Args;

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let outcome = treemerge_cli::run(&args).and_then(|report| {
        report.write_to(&mut io::stdout().lock(), &mut io::stderr().lock())
    });
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "treemerge failed");
            let _ignored = writeln!(io::stderr().lock(), "treemerge: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
