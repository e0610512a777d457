//! # till
//!
//! ```text
//! till checkout --payment 20
//! till checkout --payment 100 --price 3.26 --json
//! till drawer
//! till init --force
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use till_register::commands::{self, checkout::CheckoutArgs};
use till_register::{init_tracing, RegisterConfig};

#[derive(Parser)]
#[command(name = "till")]
#[command(about = "Cash register change calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to register.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Settle a cash sale and print the change to hand back
    Checkout {
        /// Cash handed over by the customer (e.g. 20 or 20.00)
        #[arg(short = 'p', long)]
        payment: String,

        /// Item price; defaults to the configured price
        #[arg(long)]
        price: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the drawer contents
    Drawer {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default register.toml
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Init { force } => commands::init::run(cli.config, force)?,
        Commands::Checkout {
            payment,
            price,
            json,
        } => {
            let config = load_config(cli.config)?;
            let args = CheckoutArgs {
                payment,
                price,
                json,
            };
            commands::checkout::run(&config, &args)?
        }
        Commands::Drawer { json } => {
            let config = load_config(cli.config)?;
            commands::drawer::run(&config, json)?
        }
    };

    println!("{output}");
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<RegisterConfig> {
    let config = RegisterConfig::load(path).context("Failed to load register config")?;
    info!(store = %config.store.name, "Register ready");
    Ok(config)
}
