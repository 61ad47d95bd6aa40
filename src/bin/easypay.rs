//! EasyPay CLI
//!
//! Command-line front end for generating and checking EasyPay reference numbers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use easypay_reference::error::constants;
use easypay_reference::utils::init_logging;
use easypay_reference::{EasyPayConfig, ReferenceCodec, ReferenceError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "easypay")]
#[command(about = "Generate, validate and inspect EasyPay payment reference numbers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Deployment config file (TOML); falls back to EASYPAY_* env vars
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the EasyPay number for a customer ID
    Generate {
        /// Customer ID (account reference)
        customer_id: String,
    },

    /// Check whether a number is a valid EasyPay number
    Validate {
        /// Number to check
        number: String,
    },

    /// Split a valid EasyPay number into its fields
    Decode {
        /// Number to parse
        number: String,

        /// Print the fields as JSON
        #[arg(long)]
        json: bool,
    },

    /// Group a number in blocks of four for display
    Format {
        /// Text to group
        text: String,
    },

    /// Print an example configuration file
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EasyPayConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EasyPayConfig::from_env()?,
    };
    config
        .validate_strict()
        .context("invalid configuration")?;
    if cli.verbose {
        config.logging.log_level = Level::DEBUG;
    }
    init_logging(&config.logging);

    let codec = ReferenceCodec::new(config.codec).context("invalid deployment configuration")?;

    match cli.command {
        Commands::Generate { customer_id } if customer_id.trim().is_empty() => {
            eprintln!("{}", constants::ERR_EMPTY_CUSTOMER_ID);
            return Ok(ExitCode::FAILURE);
        }
        Commands::Generate { customer_id } => match codec.encode(customer_id.trim()) {
            Ok(number) => {
                println!("{number}");
                println!("{}", number.formatted());
            }
            Err(err @ ReferenceError::LengthExceeded { .. }) => {
                eprintln!("{}", err.user_message());
                return Ok(ExitCode::FAILURE);
            }
            Err(err) => return Err(err.into()),
        },
        Commands::Validate { number } => {
            let valid = codec.validate(number.trim());
            println!("{}", if valid { "valid" } else { "invalid" });
            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Decode { number, json } => {
            let Some(parsed) = codec.decode(number.trim()) else {
                eprintln!("Not a valid EasyPay number");
                return Ok(ExitCode::FAILURE);
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                println!("prefix:         {}", parsed.prefix);
                println!("receiver id:    {}", parsed.receiver_id);
                println!("account number: {}", parsed.account_number);
                println!("check digit:    {}", parsed.check_digit);
            }
        }
        Commands::Format { text } => println!("{}", codec.format(&text)),
        Commands::Config => print!("{}", EasyPayConfig::example_config()),
    }

    Ok(ExitCode::SUCCESS)
}
