mod cli;
mod config;
mod logging;
mod render;

use std::process;

use clap::Parser;
use cv_chain_core::io::load_text;
use cv_chain_core::model::simulation::Simulation;
use log::info;

use crate::cli::{Cli, Format};
use crate::config::DriverConfig;

/// Exit status when a text is rejected by a gate.
const GATE_FAILURE_STATUS: i32 = 1;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Configuration file first, then command-line overrides
    let config = match &cli.config {
        Some(path) => DriverConfig::load(path)?,
        None => DriverConfig::default(),
    }
    .with_overrides(&cli);
    info!("source: {:?}", config.source);

    let loaded = load_text(&config.source)?;

    match cli.format {
        Format::Text => {
            println!("{}", render::banner()?);
            println!("{}", render::source(&loaded));
        }
        // Keep stdout a single JSON document
        Format::Json => eprintln!("{}", render::source(&loaded)),
    }

    // Gating failures are reported, not propagated as errors
    let simulation = match Simulation::run(&loaded.text) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("{}", render::failure(&e));
            process::exit(GATE_FAILURE_STATUS);
        }
    };

    match cli.format {
        Format::Text => println!("{}", render::report(&simulation)?),
        Format::Json => println!("{}", serde_json::to_string_pretty(&simulation)?),
    }

    Ok(())
}
