//! Types for private REST API endpoints.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, TimestampSeconds, serde_as};
use time::OffsetDateTime;

use crate::types::OrderSide;

/// A currency amount as MtGox reports it.
///
/// `value_int` is the authoritative integer-scaled amount; MtGox sends it as a
/// string, but plain numbers are accepted too.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MtGoxValue {
    /// Decimal amount.
    #[serde(default)]
    pub value: Option<Decimal>,
    /// Integer-scaled amount.
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    pub value_int: i64,
    /// Human readable amount with currency symbol.
    #[serde(default)]
    pub display: Option<String>,
    /// Shortened display string.
    #[serde(default)]
    pub display_short: Option<String>,
    /// Currency code.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Balance and limits for one currency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MtGoxWallet {
    /// Current balance.
    #[serde(rename = "Balance")]
    pub balance: MtGoxValue,
    /// Number of operations on this wallet.
    #[serde(rename = "Operations", default)]
    pub operations: u64,
    /// Amount currently tied up in open orders.
    #[serde(rename = "Open_Orders", default)]
    pub open_orders: Option<MtGoxValue>,
    /// Maximum amount that can be withdrawn now.
    #[serde(rename = "Max_Withdraw", default)]
    pub max_withdraw: Option<MtGoxValue>,
    /// Daily withdrawal limit.
    #[serde(rename = "Daily_Withdraw_Limit", default)]
    pub daily_withdraw_limit: Option<MtGoxValue>,
}

/// Wallets keyed by currency. USD and BTC are always present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MtGoxWallets {
    /// US dollar wallet.
    #[serde(rename = "USD")]
    pub usd: MtGoxWallet,
    /// Bitcoin wallet.
    #[serde(rename = "BTC")]
    pub btc: MtGoxWallet,
    /// Any further currency wallets.
    #[serde(flatten)]
    pub other: BTreeMap<String, MtGoxWallet>,
}

/// Response of `generic/private/info`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MtGoxAccountInfo {
    /// Account login name.
    #[serde(rename = "Login")]
    pub login: String,
    /// Account index.
    #[serde(rename = "Index", default)]
    pub index: Option<String>,
    /// Permissions granted to the API key.
    #[serde(rename = "Rights", default)]
    pub rights: Vec<String>,
    /// Preferred language.
    #[serde(rename = "Language", default)]
    pub language: Option<String>,
    /// Per-currency wallets.
    #[serde(rename = "Wallets")]
    pub wallets: MtGoxWallets,
    /// Trade fee in percent.
    #[serde(rename = "Trade_Fee", default)]
    pub trade_fee: Option<Decimal>,
}

/// One entry of `generic/private/orders`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MtGoxOpenOrder {
    /// Order ID.
    pub oid: String,
    /// Quote currency.
    #[serde(default)]
    pub currency: Option<String>,
    /// Traded item (e.g. `BTC`).
    #[serde(default)]
    pub item: Option<String>,
    /// Native side string, `bid` or `ask`.
    #[serde(rename = "type")]
    pub order_type: String,
    /// Order amount.
    pub amount: MtGoxValue,
    /// Amount that can actually be filled.
    #[serde(default)]
    pub effective_amount: Option<MtGoxValue>,
    /// Limit price.
    pub price: MtGoxValue,
    /// Order status (`open`, `invalid`, ...).
    #[serde(default)]
    pub status: Option<String>,
    /// Creation time.
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub date: Option<OffsetDateTime>,
}

/// Generic `{ "result": ..., "return": ... }` envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MtGoxGenericResponse {
    /// `success` or `error`.
    pub result: String,
    /// Payload on success (the order ID for `order/add`).
    #[serde(rename = "return", default)]
    pub data: Option<serde_json::Value>,
    /// Error text when `result` is not `success`.
    #[serde(default)]
    pub error: Option<String>,
}

impl MtGoxGenericResponse {
    /// True only when `result` is exactly `success`.
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }
}

/// Parameters of `order/add`, serialized after the nonce.
///
/// Field order is the byte order of the signed body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddOrderRequest {
    /// Order side.
    #[serde(rename = "type")]
    pub side: OrderSide,
    /// Integer-scaled amount.
    pub amount_int: i64,
    /// Integer-scaled limit price; absent for market orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_int: Option<i64>,
}

impl AddOrderRequest {
    /// Create a market order request.
    pub fn market(side: OrderSide, amount_int: i64) -> Self {
        Self {
            side,
            amount_int,
            price_int: None,
        }
    }

    /// Create a limit order request.
    pub fn limit(side: OrderSide, amount_int: i64, price_int: i64) -> Self {
        Self {
            side,
            amount_int,
            price_int: Some(price_int),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_int_from_string_or_number() {
        let from_str: MtGoxValue = serde_json::from_str(
            r#"{"value":"1.50000000","value_int":"150000000","display":"1.50000000 BTC","currency":"BTC"}"#,
        )
        .unwrap();
        assert_eq!(from_str.value_int, 150_000_000);
        assert_eq!(from_str.value, Some(Decimal::new(150000000, 8)));

        let from_num: MtGoxValue = serde_json::from_str(r#"{"value_int":42}"#).unwrap();
        assert_eq!(from_num.value_int, 42);
        assert!(from_num.currency.is_none());
    }

    #[test]
    fn test_account_info_extra_wallets() {
        let json = r#"{
            "Login": "trader",
            "Rights": ["get_info", "trade"],
            "Wallets": {
                "USD": {"Balance": {"value_int": "2500000", "currency": "USD"}, "Operations": 3},
                "BTC": {"Balance": {"value_int": "150000000", "currency": "BTC"}},
                "EUR": {"Balance": {"value_int": "0", "currency": "EUR"}}
            },
            "Trade_Fee": 0.6
        }"#;
        let info: MtGoxAccountInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.login, "trader");
        assert_eq!(info.wallets.usd.balance.value_int, 2_500_000);
        assert_eq!(info.wallets.usd.operations, 3);
        assert_eq!(info.wallets.btc.balance.value_int, 150_000_000);
        assert_eq!(info.wallets.other.len(), 1);
        assert!(info.wallets.other.contains_key("EUR"));
        assert_eq!(info.trade_fee.map(|fee| fee.round_dp(4)), Some(Decimal::new(6, 1)));
    }

    #[test]
    fn test_open_order_date() {
        let mut json = serde_json::json!({
            "oid": "abc-1",
            "currency": "USD",
            "item": "BTC",
            "type": "bid",
            "amount": {"value_int": "100000000", "currency": "BTC"},
            "price": {"value_int": "1000000", "currency": "USD"},
            "status": "open",
            "date": 1345482271
        });
        let order: MtGoxOpenOrder = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(order.order_type, "bid");
        assert_eq!(order.date.map(|d| d.unix_timestamp()), Some(1345482271));

        json.as_object_mut().unwrap().remove("date");
        let order: MtGoxOpenOrder = serde_json::from_value(json).unwrap();
        assert!(order.date.is_none());
    }

    #[test]
    fn test_generic_response_success_is_exact() {
        let ok: MtGoxGenericResponse =
            serde_json::from_str(r#"{"result":"success","return":"oid-1"}"#).unwrap();
        assert!(ok.is_success());

        for result in ["error", "Success", "SUCCESS", ""] {
            let resp = MtGoxGenericResponse {
                result: result.to_string(),
                data: None,
                error: None,
            };
            assert!(!resp.is_success(), "{result:?}");
        }
    }

    #[test]
    fn test_add_order_request_layout() {
        let market = serde_urlencoded::to_string(AddOrderRequest::market(OrderSide::Ask, 5)).unwrap();
        assert_eq!(market, "type=ask&amount_int=5");

        let limit = serde_urlencoded::to_string(AddOrderRequest::limit(
            OrderSide::Bid,
            100_000_000,
            1_000_000,
        ))
        .unwrap();
        assert_eq!(limit, "type=bid&amount_int=100000000&price_int=1000000");
    }
}
