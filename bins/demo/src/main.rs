//! Coinpurse walkthrough
//!
//! Builds a few amounts in the configured currency, runs them through the
//! arithmetic and ordering API, and logs each result. Rejected operations
//! are logged as warnings instead of aborting the run.
//!
//! Usage: cargo run --bin coinpurse

use anyhow::Context;
use coinpurse::{AppConfig, Currency, Money, MoneyResult};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        currency = %config.money.default_currency,
        "Configuration loaded"
    );

    let subtotal = config.money.money(42_50);
    let tip = subtotal.scale(0.15);
    let total = subtotal.checked_add(&tip)?;
    info!(%subtotal, %tip, %total, "Bill totalled");

    let guests = 3.0;
    let share = total.divide(guests)?;
    let remainder = total.checked_sub(&share.scale(guests))?;
    info!(%share, %remainder, guests, "Bill split");

    let refund = -share.clone();
    info!(
        %refund,
        absolute = %refund.absolute(),
        owed = refund.is_truthy(),
        "Refund issued"
    );

    let ordering = share.compare(&subtotal)?;
    info!(?ordering, "Share compared with subtotal");

    let foreign = Money::new(10_00, foreign_currency(&config.money.default_currency));
    report_rejection("add", total.checked_add(&foreign));
    report_rejection("compare", total.compare(&foreign));
    report_rejection("add", total.try_add(&10_00_i64));
    report_rejection("divide", total.divide(0.0));

    Ok(())
}

/// Picks a currency that differs from the configured one.
fn foreign_currency(default: &Currency) -> Currency {
    if *default == Currency::EURO {
        Currency::DOLLAR
    } else {
        Currency::EURO
    }
}

fn report_rejection<T: std::fmt::Debug>(operation: &str, result: MoneyResult<T>) {
    match result {
        Ok(value) => info!(operation, ?value, "Operation accepted"),
        // Mixed operands are expected in the walkthrough; anything else is not
        Err(e) if e.is_operand_error() => {
            warn!(operation, code = e.error_code(), error = %e, "Operation rejected");
        }
        Err(e) => error!(operation, code = e.error_code(), error = %e, "Operation failed"),
    }
}
