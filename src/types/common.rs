//! Common domain types shared by the generic exchange model.

use serde::{Deserialize, Serialize};

/// US dollar currency code.
pub const USD: &str = "USD";
/// Bitcoin currency code.
pub const BTC: &str = "BTC";

/// Bid (buy) or ask (sell) side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Bid,
    /// Sell order
    Ask,
}

impl OrderSide {
    /// Map the exchange's native type string onto a side.
    ///
    /// Only `"bid"` (any case) is a bid; every other value, including the
    /// empty string, is treated as an ask.
    pub fn from_native(native: &str) -> Self {
        if native.eq_ignore_ascii_case("bid") {
            OrderSide::Bid
        } else {
            OrderSide::Ask
        }
    }

    /// The literal sent in the `type` field of an order request.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Bid => "bid",
            OrderSide::Ask => "ask",
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the trading pair path segment: amount currency then price currency.
pub fn currency_pair(amount_currency: &str, price_currency: &str) -> String {
    format!("{amount_currency}{price_currency}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_any_case() {
        for native in ["BID", "bid", "Bid", "bId"] {
            assert_eq!(OrderSide::from_native(native), OrderSide::Bid, "{native}");
        }
    }

    #[test]
    fn test_everything_else_is_ask() {
        for native in ["ASK", "ask", "", "bids", " bid", "buy"] {
            assert_eq!(OrderSide::from_native(native), OrderSide::Ask, "{native:?}");
        }
    }

    #[test]
    fn test_side_wire_strings() {
        assert_eq!(OrderSide::Bid.to_string(), "bid");
        assert_eq!(OrderSide::Ask.as_str(), "ask");
        assert_eq!(serde_json::to_string(&OrderSide::Bid).unwrap(), r#""bid""#);
    }

    #[test]
    fn test_currency_pair_order() {
        assert_eq!(currency_pair(BTC, USD), "BTCUSD");
        assert_ne!(currency_pair(BTC, USD), "USDBTC");
    }
}
