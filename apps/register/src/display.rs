//! # Display
//!
//! Renders core results for the cashier.
//!
//! ## Status Line Format
//! ```text
//! CHANGE_GIVEN               Status: OPEN TWENTY: $60 TEN: $20 ... PENNY: $0.04
//! DRAWER_CLOSED              Status: CLOSED PENNY: $1.01
//! INSUFFICIENT_DRAWER_FUNDS  Status: INSUFFICIENT_FUNDS
//! EXACT                      No change due - customer paid with exact cash
//! INSUFFICIENT_CUSTOMER_...  Customer does not have enough money to purchase the item
//! ```
//!
//! Amounts in the status line use the shortest decimal form (`$0.5`,
//! `$20`), which is what existing register front ends match against.

use serde::Serialize;
use till_core::{
    ChangeResult, ChangeStatus, DenominationLedger, DrawerEntry, DrawerInventory, Money,
};

use crate::error::RegisterResult;

pub const EXACT_CASH_MESSAGE: &str = "No change due - customer paid with exact cash";
pub const CUSTOMER_SHORT_MESSAGE: &str =
    "Customer does not have enough money to purchase the item";

/// Formats an amount with as few decimals as possible: `$0.5`, `$20`, `$1.01`.
pub fn format_amount(symbol: &str, amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let magnitude = amount.abs();
    let dollars = magnitude.dollars();
    let cents = magnitude.cents_part();

    if cents == 0 {
        format!("{sign}{symbol}{dollars}")
    } else if cents % 10 == 0 {
        format!("{sign}{symbol}{dollars}.{}", cents / 10)
    } else {
        format!("{sign}{symbol}{dollars}.{cents:02}")
    }
}

/// Renders the one-line status shown under the purchase button.
pub fn render_line(result: &ChangeResult, symbol: &str) -> String {
    let label = match result.status {
        ChangeStatus::Exact => return EXACT_CASH_MESSAGE.to_string(),
        ChangeStatus::InsufficientCustomerFunds => {
            return CUSTOMER_SHORT_MESSAGE.to_string();
        }
        ChangeStatus::InsufficientDrawerFunds => {
            return "Status: INSUFFICIENT_FUNDS".to_string();
        }
        ChangeStatus::DrawerClosed => "CLOSED",
        ChangeStatus::ChangeGiven => "OPEN",
    };

    let mut parts = vec![format!("Status: {label}")];
    parts.extend(result.breakdown.iter().map(|change| {
        format!("{}: {}", change.denomination, format_amount(symbol, change.amount))
    }));
    parts.join(" ")
}

/// Renders the structured result as pretty JSON.
pub fn render_json(result: &ChangeResult) -> RegisterResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// JSON shape of the drawer report.
#[derive(Debug, Serialize)]
struct DrawerReport<'a> {
    store: &'a str,
    total: Money,
    entries: Vec<DrawerEntry>,
}

/// Lists the drawer highest denomination first, with its total.
pub fn render_drawer(
    store: &str,
    symbol: &str,
    ledger: &DenominationLedger,
    inventory: &DrawerInventory,
) -> RegisterResult<String> {
    let ordered = ledger.ordered_highest_first(inventory)?;
    let width = ordered.iter().map(|e| e.name.len()).max().unwrap_or(0);

    let total = ledger.total_value(inventory)?;

    let mut out = vec![format!("{store} drawer")];
    for entry in &ordered {
        let amount = format_amount(symbol, entry.total);
        out.push(format!("  {:<width$}  {amount}", entry.name));
    }
    out.push(format!("  {:<width$}  {}", "TOTAL", format_amount(symbol, total)));

    Ok(out.join("\n"))
}

/// Drawer report as pretty JSON (amounts in cents).
pub fn render_drawer_json(
    store: &str,
    ledger: &DenominationLedger,
    inventory: &DrawerInventory,
) -> RegisterResult<String> {
    let report = DrawerReport {
        store,
        total: ledger.total_value(inventory)?,
        entries: ledger.ordered_highest_first(inventory)?,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
