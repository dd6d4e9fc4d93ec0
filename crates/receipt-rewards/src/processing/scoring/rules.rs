use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use super::super::domain::Receipt;
use super::{RuleKind, ScoreComponent};

// Afternoon window boundaries, inclusive, in minutes since midnight.
const AFTERNOON_START_MINUTE: u32 = 14 * 60;
const AFTERNOON_END_MINUTE: u32 = 16 * 60;

pub(crate) fn score_receipt(receipt: &Receipt) -> (Vec<ScoreComponent>, u64) {
    let mut components = Vec::new();
    let mut total_points: u64 = 0;

    let alphanumerics = receipt
        .retailer
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as u64;
    components.push(ScoreComponent {
        rule: RuleKind::RetailerName,
        points: alphanumerics,
        note: format!("{alphanumerics} points - retailer name has {alphanumerics} alphanumeric chars"),
    });
    total_points += alphanumerics;

    if receipt.total.is_round_dollar() {
        components.push(ScoreComponent {
            rule: RuleKind::RoundDollarTotal,
            points: 50,
            note: "50 points - round dollar amount".to_string(),
        });
        total_points += 50;
    }

    if receipt.total.is_quarter_multiple() {
        components.push(ScoreComponent {
            rule: RuleKind::QuarterMultipleTotal,
            points: 25,
            note: "25 points - multiple of 0.25".to_string(),
        });
        total_points += 25;
    }

    let pairs = (receipt.items.len() / 2) as u64;
    let pair_points = pairs * 5;
    if pair_points > 0 {
        components.push(ScoreComponent {
            rule: RuleKind::ItemPairs,
            points: pair_points,
            note: format!(
                "{pair_points} points - {} items = {pairs} pairs",
                receipt.items.len()
            ),
        });
        total_points += pair_points;
    }

    for item in &receipt.items {
        // Descriptions arrive trimmed and non-empty from validation.
        let length = item.short_description.chars().count();
        if length % 3 == 0 {
            let bonus = (item.price.amount() * dec!(0.2))
                .ceil()
                .to_u64()
                .unwrap_or_default();
            components.push(ScoreComponent {
                rule: RuleKind::DescriptionLength,
                points: bonus,
                note: format!(
                    "{bonus} points - '{}' len({length}) is mult of 3",
                    item.short_description
                ),
            });
            total_points += bonus;
        }
    }

    let day = receipt.purchase_date.day();
    if day % 2 == 1 {
        components.push(ScoreComponent {
            rule: RuleKind::OddPurchaseDay,
            points: 6,
            note: format!("6 points - day {day} is odd"),
        });
        total_points += 6;
    }

    let minute_of_day = receipt.purchase_time.hour() * 60 + receipt.purchase_time.minute();
    if (AFTERNOON_START_MINUTE..=AFTERNOON_END_MINUTE).contains(&minute_of_day) {
        components.push(ScoreComponent {
            rule: RuleKind::AfternoonPurchase,
            points: 10,
            note: "10 points - purchased 2-4 PM".to_string(),
        });
        total_points += 10;
    }

    (components, total_points)
}
