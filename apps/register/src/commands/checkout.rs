//! # Checkout Command

use tracing::{debug, info, warn};

use till_core::settle;
use till_core::validation::{parse_amount, validate_payment, validate_price};

use crate::config::RegisterConfig;
use crate::display::{render_json, render_line};
use crate::error::RegisterResult;

/// Options for `till checkout`.
#[derive(Debug, Clone, Default)]
pub struct CheckoutArgs {
    /// Cash handed over, as typed.
    pub payment: String,
    /// Overrides the configured price, as typed.
    pub price: Option<String>,
    pub json: bool,
}

/// Settles one cash sale against the configured drawer.
///
/// ## Flow
/// ```text
/// parse payment / price ──► load ledger + drawer ──► settle() ──► render
/// ```
///
/// The drawer file is not updated; every run starts from the configured
/// inventory.
pub fn run(config: &RegisterConfig, args: &CheckoutArgs) -> RegisterResult<String> {
    debug!(payment = %args.payment, price = ?args.price, "checkout command");

    let payment = parse_amount("payment", &args.payment)?;
    validate_payment(payment)?;

    let price = match &args.price {
        Some(text) => parse_amount("price", text)?,
        None => config.price()?,
    };
    validate_price(price)?;

    let ledger = config.ledger()?;
    let drawer = config.drawer(&ledger)?;

    for entry in ledger.entries_with_partial_units(&drawer) {
        warn!(
            denomination = %entry.name,
            total = %entry.total,
            "Drawer total is not a whole number of units; the remainder cannot be paid out"
        );
    }

    let computation = settle(&ledger, price, payment, &drawer)?;
    let result = &computation.result;

    if result.status.pays_out() {
        let drawer_left = computation.remaining_drawer.total()?;
        info!(
            store = %config.store.name,
            status = ?result.status,
            price = %price,
            payment = %payment,
            change = %result.change_due,
            lines = result.breakdown.len(),
            drawer_left = %drawer_left,
            "Change counted out"
        );
    } else {
        info!(
            store = %config.store.name,
            status = ?result.status,
            price = %price,
            payment = %payment,
            "Sale settled without payout"
        );
    }

    if args.json {
        render_json(result)
    } else {
        Ok(render_line(result, &config.store.currency_symbol))
    }
}
