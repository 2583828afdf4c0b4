//! Generic account information.

use serde::{Deserialize, Serialize};

/// Balance of a single currency, as an integer-scaled amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    /// Currency code (e.g. `USD`).
    pub currency: String,
    /// Balance in the exchange's integer scale for this currency.
    pub amount_int: i64,
}

impl Wallet {
    /// Create a wallet entry.
    pub fn new(currency: impl Into<String>, amount_int: i64) -> Self {
        Self {
            currency: currency.into(),
            amount_int,
        }
    }
}

/// Account owner and per-currency wallets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Display name of the account.
    pub username: String,
    /// One entry per supported currency.
    pub wallets: Vec<Wallet>,
}

impl AccountInfo {
    /// Find the wallet for a currency.
    pub fn wallet(&self, currency: &str) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.currency == currency)
    }
}
