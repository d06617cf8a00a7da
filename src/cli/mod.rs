use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod demo;
mod info;
mod render;
mod validate;

/// ArgoDash - Ocean Float Profile Dashboard
#[derive(Parser)]
#[command(name = "argodash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in demo dataset as a bundle directory
    Demo {
        /// Output bundle directory
        #[arg(value_name = "OUTPUT", default_value = "demo_pacific.argodash")]
        output: PathBuf,
    },

    /// Display information about a dataset bundle
    Info {
        /// Dataset bundle directory
        #[arg(value_name = "BUNDLE")]
        bundle: PathBuf,
    },

    /// Compute one dashboard view and print its series
    Render {
        /// Dataset bundle directory
        #[arg(value_name = "BUNDLE")]
        bundle: PathBuf,

        /// View to render (trajectories, depth-time, comparison)
        #[arg(long)]
        view: Option<String>,

        /// Float to select (defaults to the first float in the bundle)
        #[arg(short, long)]
        float_id: Option<String>,

        /// Profile reference date to select (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Emit the render payload as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Load render defaults from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Validate dataset bundle integrity
    Validate {
        /// Dataset bundle directory
        #[arg(value_name = "BUNDLE")]
        bundle: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Demo { output } => demo::run(output),
        Commands::Info { bundle } => info::run(bundle),
        Commands::Render {
            bundle,
            view,
            float_id,
            date,
            json,
            config,
        } => render::run(bundle, view, float_id, date, json, config),
        Commands::Validate { bundle } => validate::run(bundle),
    }
}
