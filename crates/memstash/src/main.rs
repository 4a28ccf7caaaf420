//! memstash - Entry Point
//!
//! Binary entry point for the memstash operator command line.

// Force-link memstash-providers to ensure linkme inventory registrations are included
extern crate memstash_providers;

use clap::Parser;
use memstash::cli::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli).await?;
    Ok(())
}
