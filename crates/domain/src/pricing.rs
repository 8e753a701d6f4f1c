// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quote calculation for placement bookings.

use time::Date;
use time::macros::format_description;

use crate::error::DomainError;

/// Multiplier applied when a region has no pricing row.
pub const DEFAULT_PRICE_MULTIPLIER: f64 = 1.0;

/// Days per billing month. Durations are billed in 30-day blocks,
/// rounded up, with a one-month minimum.
const DAYS_PER_BILLING_MONTH: i64 = 30;

/// The result of a pricing calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingQuote {
    /// The placement's base monthly price in USD.
    pub base_price: f64,
    /// The regional multiplier that was applied.
    pub price_multiplier: f64,
    /// Effective monthly price: base price times multiplier.
    pub monthly_price: f64,
    /// Calendar days between start and end date.
    pub duration_days: i64,
    /// Billing months: days divided by 30, rounded up, minimum 1.
    pub duration_months: i64,
    /// Total price: monthly price times billing months.
    pub total_price: f64,
}

/// Parses an ISO `[year]-[month]-[day]` date string.
///
/// # Arguments
///
/// * `value` - The date string to parse
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// Calculates a booking quote for a placement over a date range.
///
/// The duration in days is the calendar-day difference between the two
/// dates. Billing months round the duration up to 30-day blocks, with a
/// one-month minimum, so a same-day booking still bills one month.
///
/// # Arguments
///
/// * `base_price` - The placement's base monthly price in USD
/// * `price_multiplier` - The regional multiplier (1.0 when unknown)
/// * `start_date` - Booking start date, ISO `[year]-[month]-[day]`
/// * `end_date` - Booking end date, ISO `[year]-[month]-[day]`
///
/// # Errors
///
/// Returns an error if either date fails to parse, if the end date
/// precedes the start date, if the base price is negative, or if the
/// multiplier is below 1.0.
#[allow(clippy::cast_precision_loss)]
pub fn calculate_quote(
    base_price: f64,
    price_multiplier: f64,
    start_date: &str,
    end_date: &str,
) -> Result<PricingQuote, DomainError> {
    if base_price < 0.0 {
        return Err(DomainError::InvalidBasePrice { value: base_price });
    }
    if price_multiplier < 1.0 {
        return Err(DomainError::InvalidPriceMultiplier {
            value: price_multiplier,
        });
    }

    let start: Date = parse_date(start_date)?;
    let end: Date = parse_date(end_date)?;

    if end < start {
        return Err(DomainError::InvalidDateRange {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        });
    }

    let duration_days: i64 = i64::from(end.to_julian_day() - start.to_julian_day());
    // Round up to whole billing months; duration_days is non-negative
    // after the range check above.
    let duration_months: i64 =
        ((duration_days + DAYS_PER_BILLING_MONTH - 1) / DAYS_PER_BILLING_MONTH).max(1);
    let monthly_price: f64 = base_price * price_multiplier;
    let total_price: f64 = monthly_price * duration_months as f64;

    Ok(PricingQuote {
        base_price,
        price_multiplier,
        monthly_price,
        duration_days,
        duration_months,
        total_price,
    })
}
