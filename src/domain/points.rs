//! The points rule engine.
//!
//! Seven independent rules each award a non-negative number of points. No rule
//! can fail: a date or time that does not parse simply awards nothing.

use super::receipt::{Item, Money, Receipt};
use chrono::NaiveTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const POINTS_PER_ITEM_PAIR: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

/// Points awarded by each rule for a single receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    pub fn for_receipt(receipt: &Receipt) -> Self {
        Self {
            retailer: retailer_points(&receipt.retailer),
            round_dollar: round_dollar_points(receipt.total),
            quarter_multiple: quarter_multiple_points(receipt.total),
            item_pairs: item_pair_points(receipt.items.len()),
            descriptions: receipt
                .items
                .iter()
                .map(description_points)
                .fold(0, u64::saturating_add),
            odd_day: odd_day_points(&receipt.purchase_date),
            afternoon: afternoon_points(&receipt.purchase_time),
        }
    }

    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Computes the total points for a receipt.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

/// One point per ASCII letter or digit in the retailer name.
fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn round_dollar_points(total: Money) -> u64 {
    if total.value().fract().is_zero() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: Money) -> u64 {
    if (total.value() % dec!(0.25)).is_zero() {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// Awards `ceil(price * 0.2)` when the trimmed description length is a
/// multiple of three. Length is counted in UTF-8 bytes, and an empty
/// description counts.
fn description_points(item: &Item) -> u64 {
    if item.short_description.trim().len() % 3 != 0 {
        return 0;
    }
    (item.price.value() * dec!(0.2))
        .ceil()
        .to_u64()
        .unwrap_or(u64::MAX)
}

/// Reads the day from the third `-`-separated field of the date.
fn odd_day_points(purchase_date: &str) -> u64 {
    match purchase_date.split('-').nth(2).map(str::parse::<i64>) {
        Some(Ok(day)) if day % 2 != 0 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// Both window bounds are exclusive.
fn afternoon_points(purchase_time: &str) -> u64 {
    let Ok(time) = NaiveTime::parse_from_str(purchase_time, "%H:%M") else {
        return 0;
    };
    let window = NaiveTime::from_hms_opt(14, 0, 0).zip(NaiveTime::from_hms_opt(16, 0, 0));
    match window {
        Some((start, end)) if time > start && time < end => AFTERNOON_POINTS,
        _ => 0,
    }
}
