use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use tracing::warn;

use super::domain::{Item, ItemSubmission, Money, Receipt, ReceiptSubmission};

/// Validation errors raised while turning a raw submission into a [`Receipt`].
///
/// Every variant signals a client-correctable input problem; the messages are
/// surfaced verbatim at the HTTP boundary.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
    #[error("invalid price format: {raw}")]
    InvalidPrice { raw: String },
    #[error("invalid date format, expected YYYY-MM-DD (got: {raw})")]
    InvalidDate { raw: String },
    #[error("invalid time format, expected HH:MM 24-hour (got: {raw})")]
    InvalidTime { raw: String },
    #[error("invalid item at index {index}: {cause}")]
    InvalidItem {
        index: usize,
        cause: Box<ValidationError>,
    },
}

/// Validate and normalize a raw submission into an immutable [`Receipt`].
///
/// A total that differs from the exact-decimal sum of item prices is logged
/// as a warning but does not fail the receipt.
pub fn validate_receipt(submission: ReceiptSubmission) -> Result<Receipt, ValidationError> {
    let retailer = non_empty(&submission.retailer, "retailer")?;
    let purchase_date = parse_purchase_date(&submission.purchase_date)?;
    let purchase_time = parse_purchase_time(&submission.purchase_time)?;

    let mut items = Vec::with_capacity(submission.items.len());
    for (index, raw) in submission.items.iter().enumerate() {
        let item = validate_item(raw).map_err(|cause| ValidationError::InvalidItem {
            index,
            cause: Box::new(cause),
        })?;
        items.push(item);
    }

    let total = validate_price(&submission.total)?;

    let item_sum: Decimal = items.iter().map(|item| item.price.amount()).sum();
    if item_sum != total.amount() {
        warn!(%total, %item_sum, "receipt total does not match sum of item prices");
    }

    Ok(Receipt {
        retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

/// Parse a textual price into [`Money`], normalized to two fractional digits
/// with half-up rounding.
pub fn validate_price(raw: &str) -> Result<Money, ValidationError> {
    Money::parse(raw).map_err(|_| ValidationError::InvalidPrice {
        raw: raw.trim().to_string(),
    })
}

fn validate_item(raw: &ItemSubmission) -> Result<Item, ValidationError> {
    let short_description = non_empty(&raw.short_description, "shortDescription")?;
    let price = validate_price(&raw.price)?;
    Ok(Item {
        short_description,
        price,
    })
}

fn non_empty(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Dates must match the literal `YYYY-MM-DD` shape and denote a real
/// calendar date. Out-of-range components are rejected, never clamped.
fn parse_purchase_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        raw: raw.to_string(),
    };

    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(position, byte)| match position {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if !shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())
}

/// Times must match `HH:MM` with hour 0-23 and minute 0-59. No seconds,
/// no timezone.
fn parse_purchase_time(raw: &str) -> Result<NaiveTime, ValidationError> {
    let invalid = || ValidationError::InvalidTime {
        raw: raw.to_string(),
    };

    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let shaped = bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b':'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();
    if !shaped {
        return Err(invalid());
    }

    let hour: u32 = trimmed[..2].parse().map_err(|_| invalid())?;
    let minute: u32 = trimmed[3..].parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}
