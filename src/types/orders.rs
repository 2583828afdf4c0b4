//! Generic order types.
//!
//! Every field is optional so an order can be assembled step by step; the
//! trade client checks the fields an endpoint needs before sending anything.

use serde::{Deserialize, Serialize};

use super::common::OrderSide;
use crate::error::MtGoxError;

/// An order executed at the best available price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketOrder {
    /// Bid or ask.
    pub side: Option<OrderSide>,
    /// Integer-scaled amount of the traded currency.
    pub amount_int: Option<i64>,
    /// Currency being traded (e.g. `BTC`).
    pub amount_currency: Option<String>,
    /// Currency the price is quoted in (e.g. `USD`).
    pub price_currency: Option<String>,
}

impl MarketOrder {
    /// Create a fully specified market order.
    pub fn new(
        side: OrderSide,
        amount_int: i64,
        amount_currency: impl Into<String>,
        price_currency: impl Into<String>,
    ) -> Self {
        Self {
            side: Some(side),
            amount_int: Some(amount_int),
            amount_currency: Some(amount_currency.into()),
            price_currency: Some(price_currency.into()),
        }
    }

    /// Set the side.
    pub fn side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Set the integer-scaled amount.
    pub fn amount_int(mut self, amount_int: i64) -> Self {
        self.amount_int = Some(amount_int);
        self
    }

    /// Set the traded currency.
    pub fn amount_currency(mut self, currency: impl Into<String>) -> Self {
        self.amount_currency = Some(currency.into());
        self
    }

    /// Set the quote currency.
    pub fn price_currency(mut self, currency: impl Into<String>) -> Self {
        self.price_currency = Some(currency.into());
        self
    }

    pub(crate) fn validated(&self) -> Result<OrderParams<'_>, MtGoxError> {
        OrderParams::check(
            self.amount_currency.as_deref(),
            self.price_currency.as_deref(),
            self.side,
            self.amount_int,
        )
    }
}

/// An order resting at a fixed price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrder {
    /// Bid or ask.
    pub side: Option<OrderSide>,
    /// Integer-scaled amount of the traded currency.
    pub amount_int: Option<i64>,
    /// Currency being traded (e.g. `BTC`).
    pub amount_currency: Option<String>,
    /// Integer-scaled limit price.
    pub price_int: Option<i64>,
    /// Currency the price is quoted in (e.g. `USD`).
    pub price_currency: Option<String>,
}

impl LimitOrder {
    /// Create a fully specified limit order.
    pub fn new(
        side: OrderSide,
        amount_int: i64,
        amount_currency: impl Into<String>,
        price_int: i64,
        price_currency: impl Into<String>,
    ) -> Self {
        Self {
            side: Some(side),
            amount_int: Some(amount_int),
            amount_currency: Some(amount_currency.into()),
            price_int: Some(price_int),
            price_currency: Some(price_currency.into()),
        }
    }

    /// Set the side.
    pub fn side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Set the integer-scaled amount.
    pub fn amount_int(mut self, amount_int: i64) -> Self {
        self.amount_int = Some(amount_int);
        self
    }

    /// Set the traded currency.
    pub fn amount_currency(mut self, currency: impl Into<String>) -> Self {
        self.amount_currency = Some(currency.into());
        self
    }

    /// Set the integer-scaled limit price.
    pub fn price_int(mut self, price_int: i64) -> Self {
        self.price_int = Some(price_int);
        self
    }

    /// Set the quote currency.
    pub fn price_currency(mut self, currency: impl Into<String>) -> Self {
        self.price_currency = Some(currency.into());
        self
    }

    pub(crate) fn validated(&self) -> Result<(OrderParams<'_>, i64), MtGoxError> {
        let params = OrderParams::check(
            self.amount_currency.as_deref(),
            self.price_currency.as_deref(),
            self.side,
            self.amount_int,
        )?;
        let price_int = self
            .price_int
            .ok_or(MtGoxError::InvalidOrder { field: "price_int" })?;
        Ok((params, price_int))
    }
}

/// The open orders of an account, in the order the exchange listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOrders {
    /// Resting limit orders.
    pub open_orders: Vec<LimitOrder>,
}

impl OpenOrders {
    /// Number of open orders.
    pub fn len(&self) -> usize {
        self.open_orders.len()
    }

    /// Whether there are no open orders.
    pub fn is_empty(&self) -> bool {
        self.open_orders.is_empty()
    }
}

/// Fields shared by market and limit orders, after presence checks.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OrderParams<'a> {
    pub amount_currency: &'a str,
    pub price_currency: &'a str,
    pub side: OrderSide,
    pub amount_int: i64,
}

impl<'a> OrderParams<'a> {
    fn check(
        amount_currency: Option<&'a str>,
        price_currency: Option<&'a str>,
        side: Option<OrderSide>,
        amount_int: Option<i64>,
    ) -> Result<Self, MtGoxError> {
        Ok(Self {
            amount_currency: amount_currency
                .ok_or(MtGoxError::InvalidOrder { field: "amount_currency" })?,
            price_currency: price_currency
                .ok_or(MtGoxError::InvalidOrder { field: "price_currency" })?,
            side: side.ok_or(MtGoxError::InvalidOrder { field: "side" })?,
            amount_int: amount_int.ok_or(MtGoxError::InvalidOrder { field: "amount_int" })?,
        })
    }
}
