// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! annotate-variants CLI
//!
//! Annotates the HGVS variants listed in a file with Ensembl VEP and writes a
//! tab-separated report.

use annotate_variants::cli::{parse_args, LOG_LEVEL, USAGE, USAGE_EXIT_CODE};
use annotate_variants::{Annotator, TracingReporter, VepClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(args) = parse_args(std::env::args_os()) else {
        println!("{}", USAGE);
        std::process::exit(USAGE_EXIT_CODE);
    };

    init_tracing(LOG_LEVEL)?;

    let client = VepClient::with_defaults()?;
    let annotator = Annotator::new(client, TracingReporter);
    annotator.run(&args.variants_file, &args.output_file)?;

    Ok(())
}

fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_new(level).map_err(|e| format!("Invalid log level '{}': {}", level, e))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}
