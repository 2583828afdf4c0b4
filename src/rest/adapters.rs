//! Conversions from MtGox response types to the generic exchange model.

use crate::rest::private::{MtGoxAccountInfo, MtGoxGenericResponse, MtGoxOpenOrder};
use crate::types::{AccountInfo, BTC, LimitOrder, OpenOrders, OrderSide, USD, Wallet};

/// Map account info: USD wallet, BTC wallet, then any other currencies by code.
///
/// Balances are copied verbatim from `value_int`.
pub fn adapt_account_info(native: &MtGoxAccountInfo) -> AccountInfo {
    let wallets = &native.wallets;
    let mut adapted = vec![
        Wallet::new(USD, wallets.usd.balance.value_int),
        Wallet::new(BTC, wallets.btc.balance.value_int),
    ];
    adapted.extend(
        wallets
            .other
            .iter()
            .map(|(currency, wallet)| Wallet::new(currency.clone(), wallet.balance.value_int)),
    );

    AccountInfo {
        username: native.login.clone(),
        wallets: adapted,
    }
}

/// Map one native open order onto a limit order.
pub fn adapt_open_order(native: &MtGoxOpenOrder) -> LimitOrder {
    LimitOrder {
        side: Some(OrderSide::from_native(&native.order_type)),
        amount_int: Some(native.amount.value_int),
        amount_currency: native.amount.currency.clone(),
        price_int: Some(native.price.value_int),
        price_currency: native.price.currency.clone(),
    }
}

/// Map the open orders list, keeping the exchange's order.
pub fn adapt_open_orders(native: &[MtGoxOpenOrder]) -> OpenOrders {
    OpenOrders {
        open_orders: native.iter().map(adapt_open_order).collect(),
    }
}

/// Map an `order/add` response onto the success flag.
pub fn adapt_order_result(native: &MtGoxGenericResponse) -> bool {
    native.is_success()
}
