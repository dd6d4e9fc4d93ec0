use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for processed receipts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exact monetary amount carrying two fractional digits.
///
/// Constructed from text via [`Money::parse`]; the amount is normalized with
/// half-up rounding so `"10.999"` becomes `11.00` and `"5"` becomes `5.00`.
/// All arithmetic stays in decimal space. Scoring relies on that: quarter
/// and round-dollar checks must never see binary-float representation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

/// Raised when a price string is not a non-negative decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a non-negative decimal amount")]
pub struct MoneyParseError;

impl Money {
    pub fn parse(raw: &str) -> Result<Self, MoneyParseError> {
        let amount = Decimal::from_str(raw.trim()).map_err(|_| MoneyParseError)?;
        if amount < Decimal::ZERO {
            return Err(MoneyParseError);
        }

        let mut normalized =
            amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        normalized.rescale(2);
        Ok(Self(normalized))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// True when the fractional part is exactly `.00`.
    pub fn is_round_dollar(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// True when the amount is an exact multiple of 0.25.
    pub fn is_quarter_multiple(&self) -> bool {
        (self.0 % dec!(0.25)).is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A single validated line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: Money,
}

/// The validated, immutable receipt produced by intake validation.
///
/// Item order is preserved for breakdown messages; it does not affect the
/// score value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
    pub total: Money,
}

/// Raw line item as submitted over the wire, all leaf values text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSubmission {
    pub short_description: String,
    pub price: String,
}

/// Raw receipt payload as submitted over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ItemSubmission>,
    pub total: String,
}
