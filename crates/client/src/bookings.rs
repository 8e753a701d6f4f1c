// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bookings list filtering and dashboard statistics.

use adslot_domain::BookingStatus;

use crate::records::Booking;

/// Status filter for the bookings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Show every booking.
    #[default]
    All,
    /// Show only bookings in the given status.
    Only(BookingStatus),
}

/// Filters bookings by status, preserving the input order.
#[must_use]
pub fn filter_bookings(bookings: &[Booking], filter: StatusFilter) -> Vec<&Booking> {
    bookings
        .iter()
        .filter(|booking| match filter {
            StatusFilter::All => true,
            StatusFilter::Only(status) => booking.status == status,
        })
        .collect()
}

/// Aggregate dashboard statistics over an advertiser's bookings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingStats {
    /// Total number of bookings.
    pub total: usize,
    /// Bookings awaiting review.
    pub pending: usize,
    /// Approved bookings not yet running.
    pub approved: usize,
    /// Currently running bookings.
    pub active: usize,
    /// Paused bookings.
    pub paused: usize,
    /// Completed bookings.
    pub completed: usize,
    /// Rejected bookings.
    pub rejected: usize,
    /// Total spend in USD, excluding rejected bookings.
    pub total_spent: f64,
    /// Impressions served across all bookings.
    pub total_impressions: i64,
    /// Clicks recorded across all bookings.
    pub total_clicks: i64,
}

impl BookingStats {
    /// Click-through rate as a percentage, 0.0 with no impressions.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ctr(&self) -> f64 {
        if self.total_impressions == 0 {
            return 0.0;
        }
        (self.total_clicks as f64 / self.total_impressions as f64) * 100.0
    }

    /// Cost per click in USD, 0.0 with no clicks.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cost_per_click(&self) -> f64 {
        if self.total_clicks == 0 {
            return 0.0;
        }
        self.total_spent / self.total_clicks as f64
    }
}

/// Computes dashboard statistics over a booking list.
#[must_use]
pub fn booking_stats(bookings: &[Booking]) -> BookingStats {
    let mut stats: BookingStats = BookingStats {
        total: bookings.len(),
        ..BookingStats::default()
    };

    for booking in bookings {
        match booking.status {
            BookingStatus::Pending => stats.pending += 1,
            BookingStatus::Approved => stats.approved += 1,
            BookingStatus::Active => stats.active += 1,
            BookingStatus::Paused => stats.paused += 1,
            BookingStatus::Completed => stats.completed += 1,
            BookingStatus::Rejected => stats.rejected += 1,
        }
        if booking.status != BookingStatus::Rejected {
            stats.total_spent += booking.total_price;
        }
        stats.total_impressions += booking.impressions;
        stats.total_clicks += booking.clicks;
    }

    stats
}
