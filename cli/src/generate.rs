#![deny(missing_docs)]

//! # Generate Command
//!
//! Fetches an OpenAPI document and writes `<out-dir>/<domain>.ts`.

use std::fs;
use std::path::PathBuf;

use ipa_core::{generate, kebab_case, DocumentSource, GenerateOptions};

use crate::error::CliResult;

/// Arguments for type generation.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// URL or local path of the OpenAPI document (JSON or YAML).
    pub url: String,

    /// API domain name (e.g. `booking-service`). Names the file and the exported type.
    pub domain: String,

    /// Output directory for the generated file.
    #[clap(long, env = "IPA_OUT_DIR", default_value = "schemas")]
    pub out_dir: PathBuf,

    /// Print the generated module instead of writing it.
    #[clap(long)]
    pub stdout: bool,
}

impl GenerateArgs {
    /// Path of the generated file.
    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}.ts", kebab_case(&self.domain)))
    }
}

/// Executes generation.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `source` - Where the document comes from (HTTP, filesystem).
///
/// # Returns
///
/// The written file, or `None` with `--stdout`.
pub fn execute(args: &GenerateArgs, source: &impl DocumentSource) -> CliResult<Option<PathBuf>> {
    let options = GenerateOptions {
        location: args.url.clone(),
        domain: args.domain.clone(),
    };

    // 1. Fetch and generate
    let code = generate(source, &options)?;

    if args.stdout {
        print!("{}", code);
        return Ok(None);
    }

    // 2. Write file
    let output_path = args.output_path();
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, code)?;

    println!("Generated schema: {}", output_path.display());

    Ok(Some(output_path))
}
