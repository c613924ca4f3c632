//! Tenantry - Entry Point
//!
//! Binary entry point of the `tny` command line tool.

// Force-link tny-providers to ensure linkme registrations are included
extern crate tny_providers;

use clap::Parser;
use tny::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}
