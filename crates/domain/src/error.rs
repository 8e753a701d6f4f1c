// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::BookingStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Placement type is not one of the known ad formats.
    InvalidPlacementType(String),
    /// Availability status is not a known value.
    InvalidAvailabilityStatus(String),
    /// Population density is not a known value.
    InvalidPopulationDensity(String),
    /// Booking status is not a known value.
    InvalidBookingStatus(String),
    /// The requested booking status transition is not permitted.
    InvalidStatusTransition {
        /// The current booking status.
        from: BookingStatus,
        /// The requested booking status.
        to: BookingStatus,
    },
    /// Campaign name is empty or invalid.
    InvalidCampaignName(String),
    /// Region name is empty or invalid.
    InvalidRegion(String),
    /// Ad creative image URL is empty or invalid.
    InvalidAdImageUrl(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// The booking end date precedes the start date.
    InvalidDateRange {
        /// The booking start date.
        start_date: String,
        /// The booking end date.
        end_date: String,
    },
    /// Base price must not be negative.
    InvalidBasePrice {
        /// The invalid price value.
        value: f64,
    },
    /// Price multiplier must be at least 1.0.
    InvalidPriceMultiplier {
        /// The invalid multiplier value.
        value: f64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPlacementType(value) => {
                write!(f, "Invalid placement type: '{value}'")
            }
            Self::InvalidAvailabilityStatus(value) => {
                write!(f, "Invalid availability status: '{value}'")
            }
            Self::InvalidPopulationDensity(value) => {
                write!(f, "Invalid population density: '{value}'")
            }
            Self::InvalidBookingStatus(value) => {
                write!(f, "Invalid booking status: '{value}'")
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Cannot transition booking from '{from}' to '{to}'")
            }
            Self::InvalidCampaignName(msg) => write!(f, "Invalid campaign name: {msg}"),
            Self::InvalidRegion(msg) => write!(f, "Invalid region: {msg}"),
            Self::InvalidAdImageUrl(msg) => write!(f, "Invalid ad image URL: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidDateRange {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "End date {end_date} must not be before start date {start_date}"
                )
            }
            Self::InvalidBasePrice { value } => {
                write!(f, "Invalid base price: {value}. Must not be negative")
            }
            Self::InvalidPriceMultiplier { value } => {
                write!(f, "Invalid price multiplier: {value}. Must be at least 1.0")
            }
        }
    }
}

impl std::error::Error for DomainError {}
