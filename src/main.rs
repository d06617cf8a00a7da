//! # ArgoDash CLI
//!
//! Command-line companion to the dashboard core: generate the demo dataset
//! bundle, inspect and validate bundles, and render any dashboard view from
//! the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Write the demo dataset
//! argodash demo pacific.argodash
//!
//! # Summarize a bundle
//! argodash info pacific.argodash
//!
//! # Render the depth-time view as JSON
//! argodash render pacific.argodash --view depth-time --date 2024-01-01 --json
//!
//! # Check bundle integrity
//! argodash validate pacific.argodash
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
