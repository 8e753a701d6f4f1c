// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DEFAULT_PRICE_MULTIPLIER, DomainError, PricingQuote, calculate_quote, parse_date};

#[test]
fn test_parse_date_accepts_iso_dates() {
    let date: time::Date = parse_date("2024-01-01").unwrap();
    assert_eq!(date.year(), 2024);
    assert_eq!(date.month(), time::Month::January);
    assert_eq!(date.day(), 1);
}

#[test]
fn test_parse_date_rejects_malformed_input() {
    assert!(parse_date("2024/01/01").is_err());
    assert!(parse_date("01-01-2024").is_err());
    assert!(parse_date("2024-02-30").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn test_leaderboard_quote_in_new_york_metro() {
    // $150 base, 2.0x multiplier, three billing months.
    let quote: PricingQuote =
        calculate_quote(150.0, 2.0, "2024-01-01", "2024-03-31").unwrap();
    assert!((quote.monthly_price - 300.0).abs() < f64::EPSILON);
    assert_eq!(quote.duration_days, 90);
    assert_eq!(quote.duration_months, 3);
    assert!((quote.total_price - 900.0).abs() < f64::EPSILON);
}

#[test]
fn test_skyscraper_quote_in_new_york_metro() {
    let quote: PricingQuote =
        calculate_quote(120.0, 2.0, "2024-01-01", "2024-03-31").unwrap();
    assert!((quote.monthly_price - 240.0).abs() < f64::EPSILON);
    assert_eq!(quote.duration_months, 3);
    assert!((quote.total_price - 720.0).abs() < f64::EPSILON);
}

#[test]
fn test_default_multiplier_for_unknown_region() {
    let quote: PricingQuote = calculate_quote(
        150.0,
        DEFAULT_PRICE_MULTIPLIER,
        "2024-01-01",
        "2024-01-31",
    )
    .unwrap();
    assert!((quote.monthly_price - 150.0).abs() < f64::EPSILON);
    assert_eq!(quote.duration_days, 30);
    assert_eq!(quote.duration_months, 1);
    assert!((quote.total_price - 150.0).abs() < f64::EPSILON);
}

#[test]
fn test_same_day_booking_bills_one_month() {
    let quote: PricingQuote =
        calculate_quote(100.0, 1.0, "2024-06-15", "2024-06-15").unwrap();
    assert_eq!(quote.duration_days, 0);
    assert_eq!(quote.duration_months, 1);
    assert!((quote.total_price - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_partial_month_rounds_up() {
    // 31 days spills into a second billing month.
    let quote: PricingQuote =
        calculate_quote(100.0, 1.5, "2024-01-01", "2024-02-01").unwrap();
    assert_eq!(quote.duration_days, 31);
    assert_eq!(quote.duration_months, 2);
    assert!((quote.total_price - 300.0).abs() < f64::EPSILON);
}

#[test]
fn test_exact_billing_month_boundary_does_not_round_up() {
    // 60 days is exactly two billing months; one more day is three.
    let exact: PricingQuote = calculate_quote(100.0, 1.0, "2024-01-01", "2024-03-01").unwrap();
    assert_eq!(exact.duration_days, 60);
    assert_eq!(exact.duration_months, 2);

    let spill: PricingQuote = calculate_quote(100.0, 1.0, "2024-01-01", "2024-03-02").unwrap();
    assert_eq!(spill.duration_days, 61);
    assert_eq!(spill.duration_months, 3);
}

#[test]
fn test_duration_spans_leap_day() {
    let quote: PricingQuote =
        calculate_quote(100.0, 1.0, "2024-02-01", "2024-03-01").unwrap();
    assert_eq!(quote.duration_days, 29);
    assert_eq!(quote.duration_months, 1);
}

#[test]
fn test_end_before_start_is_rejected() {
    let result = calculate_quote(150.0, 2.0, "2024-03-31", "2024-01-01");
    assert!(matches!(result, Err(DomainError::InvalidDateRange { .. })));
}

#[test]
fn test_negative_base_price_is_rejected() {
    let result = calculate_quote(-1.0, 1.0, "2024-01-01", "2024-01-31");
    assert!(matches!(result, Err(DomainError::InvalidBasePrice { .. })));
}

#[test]
fn test_multiplier_below_one_is_rejected() {
    let result = calculate_quote(150.0, 0.5, "2024-01-01", "2024-01-31");
    assert!(matches!(
        result,
        Err(DomainError::InvalidPriceMultiplier { .. })
    ));
}

#[test]
fn test_malformed_date_is_rejected() {
    let result = calculate_quote(150.0, 2.0, "January 1", "2024-01-31");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));
}
