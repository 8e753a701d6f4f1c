// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Panel-side client library for the AdSlot booking system.
//!
//! This crate provides the typed HTTP client for the REST API plus the
//! pure panel logic: the booking workflow state machine, bookings-list
//! filtering and statistics, and the regional pricing explorer. Only
//! `ApiClient` performs I/O; everything else is plain state that the
//! panel drives and tests drive directly.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod bookings;
mod error;
mod explorer;
mod http;
mod records;
mod workflow;

pub use bookings::{BookingStats, StatusFilter, booking_stats, filter_bookings};
pub use error::ClientError;
pub use explorer::{
    HISTOGRAM_BUCKETS, MultiplierStats, SortDirection, SortKey, filter_by_country,
    multiplier_histogram, multiplier_stats, search_regions, sort_regions,
};
pub use http::{ApiClient, RegionalPricingFilter};
pub use records::{
    ActiveAd, Booking, CalculatePricingRequest, CreateBookingRequest, LoginSession, Placement,
    Platform, PricingQuote, RegionalPricing, RegisteredAccount,
};
pub use workflow::{BookingForm, BookingWorkflow, QuoteRequest, WorkflowStep};
