// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod pricing;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use pricing::{DEFAULT_PRICE_MULTIPLIER, PricingQuote, calculate_quote, parse_date};
pub use status::BookingStatus;
pub use types::{AvailabilityStatus, PlacementType, PopulationDensity};
pub use validation::{validate_booking_fields, validate_date_range};
