//! # Drawer Command

use tracing::debug;

use crate::config::RegisterConfig;
use crate::display::{render_drawer, render_drawer_json};
use crate::error::RegisterResult;

/// Shows the configured drawer, highest denomination first.
pub fn run(config: &RegisterConfig, json: bool) -> RegisterResult<String> {
    debug!(json, "drawer command");

    let ledger = config.ledger()?;
    let drawer = config.drawer(&ledger)?;

    if json {
        render_drawer_json(&config.store.name, &ledger, &drawer)
    } else {
        render_drawer(
            &config.store.name,
            &config.store.currency_symbol,
            &ledger,
            &drawer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_drawer_report() {
        let out = run(&RegisterConfig::default(), false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 11);
        assert!(lines[1].contains("ONE HUNDRED"));
        assert!(lines[9].contains("PENNY"));
        assert!(lines[10].ends_with("$335.41"));
    }
}
