//! Configuration for the purchase workflow.
//!
//! Values come from environment variables (a `.env` file is honoured by the
//! binary) and fall back to defaults when unset.

use std::env;
use std::num::ParseIntError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::purchase_tickets::public_types::{PurchasePolicy, DEFAULT_MAX_TICKETS_PER_PURCHASE};

const MAX_TICKETS_VAR: &str = "TICKETS_MAX_PER_PURCHASE";
const LOG_FILTER_VAR: &str = "TICKETS_LOG_FILTER";
const DEFAULT_LOG_FILTER: &str = "ticket_purchasing=info";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a whole number, got {value:?}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rules applied to every purchase
    pub policy: PurchasePolicy,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: PurchasePolicy::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_tickets_per_purchase = match lookup(MAX_TICKETS_VAR) {
            Some(value) => parse_limit(MAX_TICKETS_VAR, value)?,
            None => DEFAULT_MAX_TICKETS_PER_PURCHASE,
        };

        Ok(Self {
            policy: PurchasePolicy {
                max_tickets_per_purchase,
            },
            log_filter: lookup(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

fn parse_limit(name: &'static str, value: String) -> Result<u32, ConfigError> {
    let limit: u32 = value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidNumber {
            name,
            value: value.clone(),
            source,
        })?;
    if limit == 0 {
        return Err(ConfigError::Zero { name });
    }
    Ok(limit)
}
