use anyhow::Context;
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

use crate::modules::transfer_labels::core::record::LabelExtension;
use crate::modules::transfer_labels::use_cases::print_label::composer::BarcodeFailurePolicy;

pub const DEFAULT_LOGO_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/1/16/Brisanet_logo.svg";

/// Upper bound for `PRINT_SETTLE_MS`.
pub const MAX_PRINT_SETTLE_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub logo_url: String,
    pub label_defaults: LabelExtension,
    pub barcode_failure_policy: BarcodeFailurePolicy,
    pub print_settle_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            label_defaults: LabelExtension::default(),
            barcode_failure_policy: BarcodeFailurePolicy::default(),
            print_settle_ms: 0,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Config::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("BIND_ADDR `{raw}` is not a socket address"))?,
            None => defaults.bind_addr,
        };
        let barcode_failure_policy = match lookup("BARCODE_FAILURE_POLICY") {
            Some(raw) => raw.parse()?,
            None => defaults.barcode_failure_policy,
        };
        let print_settle_ms = match lookup("PRINT_SETTLE_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("PRINT_SETTLE_MS `{raw}` is not a number"))?,
            None => defaults.print_settle_ms,
        };
        if print_settle_ms > MAX_PRINT_SETTLE_MS {
            anyhow::bail!("PRINT_SETTLE_MS must not exceed {MAX_PRINT_SETTLE_MS}");
        }

        Ok(Config {
            bind_addr,
            logo_url: lookup("LOGO_URL").unwrap_or(defaults.logo_url),
            label_defaults: LabelExtension::new(
                lookup("DEFAULT_QUANTITY_PIECES").unwrap_or_default(),
                lookup("DEFAULT_INVOICE_NUMBER").unwrap_or_default(),
            ),
            barcode_failure_policy,
            print_settle_ms,
        })
    }
}
