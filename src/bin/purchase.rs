//! Runs a single ticket purchase from a JSON request.
//!
//! Reads the request from the file named by the first argument, or from stdin.
//! Payment and seat reservation are logged rather than sent anywhere.

use std::io::Read;
use std::process::ExitCode;
use std::{env, fs, io};

use anyhow::{Context, Result};
use ticket_purchasing::common::simple_types::{AccountId, BillingAmount, SeatCount};
use ticket_purchasing::config::Config;
use ticket_purchasing::purchase_tickets::api;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "Ticket purchase failed");
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let input = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read request from stdin")?;
            buffer
        }
    };

    let request = api::parse_purchase_request(&input)?;
    api::purchase_tickets(request, log_payment, log_seat_reservation, config.policy)?;

    info!("Ticket purchase completed");
    Ok(())
}

fn log_payment(account_id: AccountId, amount: BillingAmount) -> Result<()> {
    info!(account_id = %account_id, amount = %amount, "Charging account");
    Ok(())
}

fn log_seat_reservation(account_id: AccountId, seats: SeatCount) -> Result<()> {
    info!(account_id = %account_id, seats = seats.value(), "Reserving seats");
    Ok(())
}
