#![deny(missing_docs)]

//! # IPA CLI
//!
//! Generates a TypeScript type describing every endpoint of an OpenAPI document.
//!
//! ```text
//! ipa https://api.example.com/openapi.json booking-service --out-dir src/api
//! ```

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;
use crate::fetch::AutoSource;

mod error;
mod fetch;
mod generate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI to TypeScript endpoint types")]
struct Cli {
    #[clap(flatten)]
    generate: generate::GenerateArgs,

    /// Log filter directive (e.g. `debug`, `ipa_core=trace`). Overrides `RUST_LOG`.
    #[clap(long, env = "IPA_LOG")]
    log_level: Option<String>,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    generate::execute(&cli.generate, &AutoSource)?;

    Ok(())
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}
