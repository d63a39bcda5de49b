//! AIMS CLI - Rush order checks from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Check a cart fixture for rush delivery and quote the fee
//! aims-cli rush place --cart cart.yaml --expected 2026-10-18T09:00:00Z \
//!     --address "12 Trang Tien, Hanoi" --phone 0123456789 --name "Nguyen Van A"
//!
//! # Validate contact info
//! aims-cli rush info --phone 0123456789 --name "Nguyen Van A"
//!
//! # Price a rush shipping fee
//! aims-cli rush fee --amount 250000 --seed 7
//!
//! # Check whether an address supports rush delivery
//! aims-cli rush address "District 1, HCM"
//! ```
//!
//! # Environment Variables
//!
//! - `AIMS_RUSH_LOCALITIES` - Comma-separated supported localities
//! - `AIMS_RUSH_LOCALITIES_FILE` - YAML file with supported localities
//! - `RUST_LOG` - Log filter (default: `aims_cli=info,aims_rush_order=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "aims-cli")]
#[command(author, version, about = "AIMS CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rush delivery checks
    Rush {
        #[command(subcommand)]
        action: RushAction,
    },
}

#[derive(Subcommand)]
enum RushAction {
    /// Check a cart for rush delivery and quote the shipping fee
    Place {
        /// YAML cart fixture
        #[arg(short, long)]
        cart: String,

        /// Requested delivery time (RFC 3339)
        #[arg(short, long)]
        expected: DateTime<Utc>,

        /// Current time (RFC 3339, default: now)
        #[arg(long)]
        current: Option<DateTime<Utc>>,

        /// Delivery address
        #[arg(short, long)]
        address: String,

        /// Customer phone number
        #[arg(short, long, requires = "name")]
        phone: Option<String>,

        /// Customer name
        #[arg(short, long, requires = "phone")]
        name: Option<String>,

        /// Seed for a reproducible shipping fee
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Validate rush delivery contact info
    Info {
        /// Customer phone number
        #[arg(short, long)]
        phone: String,

        /// Customer name
        #[arg(short, long)]
        name: String,
    },
    /// Price a rush shipping fee
    Fee {
        /// Order amount in minor currency units
        #[arg(short, long)]
        amount: i64,

        /// Seed for a reproducible shipping fee
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check whether an address supports rush delivery
    Address {
        /// Delivery address
        address: String,
    },
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "aims_cli=info,aims_rush_order=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Rush { action } => match action {
            RushAction::Place {
                cart,
                expected,
                current,
                address,
                phone,
                name,
                seed,
            } => {
                let contact = phone.zip(name);
                commands::rush::place(
                    &cart,
                    expected,
                    current.unwrap_or_else(Utc::now),
                    &address,
                    contact,
                    seed,
                )?;
            }
            RushAction::Info { phone, name } => commands::rush::info(&phone, &name)?,
            RushAction::Fee { amount, seed } => commands::rush::fee(amount, seed)?,
            RushAction::Address { address } => commands::rush::address(&address)?,
        },
    }
    Ok(())
}
