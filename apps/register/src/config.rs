//! # Register Configuration
//!
//! Price, denomination universe and drawer contents for the register.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TILL_PRICE=3.26                                                    │
//! │     TILL_STORE_NAME="Corner Shop"                                      │
//! │     TILL_CURRENCY_SYMBOL=$                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else TILL_CONFIG, else                            │
//! │     ~/.config/till/register.toml (Linux)                               │
//! │     ~/Library/Application Support/com.titan.till/register.toml (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     price 19.50, US denominations, the classic practice drawer         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Titan Till"
//! currency_symbol = "$"
//!
//! [sale]
//! price = 19.5
//!
//! [[denominations]]
//! name = "PENNY"
//! value = 0.01
//!
//! [[drawer]]
//! name = "PENNY"
//! amount = 1.01
//! ```
//!
//! Drawer amounts are TOTAL VALUES per denomination, not coin counts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use till_core::validation::{parse_amount, validate_denomination_name, validate_price};
use till_core::{Denomination, DenominationLedger, DrawerEntry, DrawerInventory, Money};

use crate::error::{RegisterError, RegisterResult};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "register.toml";

/// The practice drawer every new register starts with, as `(name, dollars)`.
pub const DEFAULT_DRAWER: [(&str, f64); 9] = [
    ("PENNY", 1.01),
    ("NICKEL", 2.05),
    ("DIME", 3.1),
    ("QUARTER", 4.25),
    ("ONE", 90.0),
    ("FIVE", 55.0),
    ("TEN", 20.0),
    ("TWENTY", 60.0),
    ("ONE HUNDRED", 100.0),
];

// =============================================================================
// Sections
// =============================================================================

/// `[store]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Shown in log lines and the drawer report.
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_store_name() -> String {
    "Titan Till".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// `[sale]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleConfig {
    /// Price of the item being sold, in major units.
    #[serde(default = "default_price")]
    pub price: f64,
}

fn default_price() -> f64 {
    19.5
}

impl Default for SaleConfig {
    fn default() -> Self {
        SaleConfig {
            price: default_price(),
        }
    }
}

/// One `[[denominations]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenominationConfig {
    pub name: String,
    /// Face value of one unit, in major units.
    pub value: f64,
}

/// One `[[drawer]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerConfigEntry {
    pub name: String,
    /// Total value held, in major units.
    pub amount: f64,
}

fn default_denominations() -> Vec<DenominationConfig> {
    Denomination::usd()
        .into_iter()
        .map(|d| DenominationConfig {
            name: d.name,
            value: d.unit_value.to_major_f64(),
        })
        .collect()
}

fn default_drawer() -> Vec<DrawerConfigEntry> {
    DEFAULT_DRAWER
        .iter()
        .map(|(name, amount)| DrawerConfigEntry {
            name: (*name).to_string(),
            amount: *amount,
        })
        .collect()
}

// =============================================================================
// Register Configuration
// =============================================================================

/// Complete register configuration.
///
/// Amounts are kept as plain decimals so the file stays hand-editable;
/// [`ledger`](Self::ledger), [`drawer`](Self::drawer) and
/// [`price`](Self::price) convert them to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub sale: SaleConfig,

    #[serde(default = "default_denominations")]
    pub denominations: Vec<DenominationConfig>,

    #[serde(default = "default_drawer")]
    pub drawer: Vec<DrawerConfigEntry>,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        RegisterConfig {
            store: StoreConfig::default(),
            sale: SaleConfig::default(),
            denominations: default_denominations(),
            drawer: default_drawer(),
        }
    }
}

impl RegisterConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> RegisterResult<Self> {
        let mut config = match Self::resolve_path(config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading register config from file");
                let contents = std::fs::read_to_string(&path)?;
                toml::from_str(&contents)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses and validates a TOML document, without environment overrides.
    pub fn from_toml_str(contents: &str) -> RegisterResult<Self> {
        let config: RegisterConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration as TOML.
    ///
    /// Refuses to replace an existing file unless `force` is set.
    pub fn save(&self, path: &Path, force: bool) -> RegisterResult<()> {
        if path.exists() && !force {
            return Err(RegisterError::ConfigExists(path.display().to_string()));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        info!(?path, "Register config saved");
        Ok(())
    }

    /// Picks the config file: explicit path, then `TILL_CONFIG`, then the
    /// platform config directory.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| std::env::var_os("TILL_CONFIG").map(PathBuf::from))
            .or_else(Self::default_config_path)
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "titan", "till")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(price) = std::env::var("TILL_PRICE") {
            match parse_amount("TILL_PRICE", &price) {
                Ok(amount) => {
                    debug!(price = %amount, "Overriding price from environment");
                    self.sale.price = amount.to_major_f64();
                }
                Err(e) => warn!(error = %e, "Ignoring TILL_PRICE"),
            }
        }

        if let Ok(name) = std::env::var("TILL_STORE_NAME") {
            self.store.name = name;
        }

        if let Ok(symbol) = std::env::var("TILL_CURRENCY_SYMBOL") {
            self.store.currency_symbol = symbol;
        }
    }

    /// Validates the configuration.
    ///
    /// Unknown or duplicate drawer denominations are caught here, at load
    /// time, rather than during a sale.
    pub fn validate(&self) -> RegisterResult<()> {
        if self.store.currency_symbol.trim().is_empty() {
            return Err(RegisterError::Config(
                "currency_symbol must not be empty".into(),
            ));
        }

        self.price()?;
        let ledger = self.ledger()?;
        self.drawer(&ledger)?;

        Ok(())
    }

    /// The configured price in cents.
    pub fn price(&self) -> RegisterResult<Money> {
        let price = Money::from_major_f64(self.sale.price)?;
        validate_price(price)?;
        Ok(price)
    }

    /// Builds the denomination ledger.
    pub fn ledger(&self) -> RegisterResult<DenominationLedger> {
        let denominations = self
            .denominations
            .iter()
            .map(|d| -> RegisterResult<Denomination> {
                validate_denomination_name(&d.name)?;
                let value = Money::from_major_f64(d.value)?;
                Ok(Denomination::new(d.name.clone(), value))
            })
            .collect::<RegisterResult<Vec<Denomination>>>()?;

        Ok(DenominationLedger::new(denominations)?)
    }

    /// Builds and validates the drawer inventory against `ledger`.
    pub fn drawer(&self, ledger: &DenominationLedger) -> RegisterResult<DrawerInventory> {
        let inventory = self
            .drawer
            .iter()
            .map(|entry| -> RegisterResult<DrawerEntry> {
                let total = Money::from_major_f64(entry.amount)?;
                Ok(DrawerEntry::new(entry.name.clone(), total))
            })
            .collect::<RegisterResult<DrawerInventory>>()?;

        ledger.validate_inventory(&inventory)?;
        Ok(inventory)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
