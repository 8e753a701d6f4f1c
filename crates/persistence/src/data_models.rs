// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain data carriers returned by the persistence layer.
//!
//! These structs mirror database rows. Wire-facing DTOs live in the API
//! layer; the persistence layer only guarantees that stored enum columns
//! are parsed into their domain types.

use adslot_domain::{AvailabilityStatus, BookingStatus, PlacementType, PopulationDensity};

/// An advertiser account row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertiserData {
    /// The canonical numeric identifier.
    pub advertiser_id: i64,
    /// The login email (stored case-insensitively unique).
    pub email: String,
    /// The display name shown in the panel.
    pub display_name: String,
    /// The bcrypt password hash.
    pub password_hash: String,
    /// The account role (`admin` or `advertiser`).
    pub role: String,
    /// Whether the account is disabled.
    pub is_disabled: bool,
    /// Account creation timestamp.
    pub created_at: String,
    /// Most recent login timestamp, if any.
    pub last_login_at: Option<String>,
}

/// A session row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    /// The canonical numeric identifier.
    pub session_id: i64,
    /// The opaque bearer token.
    pub session_token: String,
    /// The advertiser this session belongs to.
    pub advertiser_id: i64,
    /// Session creation timestamp.
    pub created_at: String,
    /// Most recent request timestamp.
    pub last_activity_at: String,
    /// Expiration timestamp (ISO 8601).
    pub expires_at: String,
}

/// A platform with placement availability counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSummaryData {
    /// The canonical numeric identifier.
    pub platform_id: i64,
    /// The platform key (e.g. `facebook`).
    pub name: String,
    /// The human-readable platform name.
    pub display_name: String,
    /// Total placement slots on this platform.
    pub total_placements: i64,
    /// Slots with no occupying booking.
    pub available_placements: i64,
    /// Slots occupied by a non-terminal booking.
    pub booked_placements: i64,
}

/// A placement slot with derived availability.
///
/// When booked, the occupying booking's dates and campaign name are
/// denormalized onto the row.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementData {
    /// The canonical numeric identifier.
    pub placement_id: i64,
    /// The platform key this placement belongs to.
    pub platform_name: String,
    /// The ad format of this slot.
    pub placement_type: PlacementType,
    /// The slot identifier within the platform (e.g. `top_1`).
    pub position_name: String,
    /// Creative width in pixels.
    pub width: i64,
    /// Creative height in pixels.
    pub height: i64,
    /// Base monthly price in USD.
    pub base_price: f64,
    /// Free-text slot description.
    pub description: String,
    /// Derived availability.
    pub availability_status: AvailabilityStatus,
    /// Start date of the occupying booking, when booked.
    pub booked_start: Option<String>,
    /// End date of the occupying booking, when booked.
    pub booked_end: Option<String>,
    /// Campaign name of the occupying booking, when booked.
    pub booked_campaign: Option<String>,
}

/// A placement whose occupying booking is currently active, enriched
/// with campaign and performance data.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveAdData {
    /// The placement identifier.
    pub placement_id: i64,
    /// The ad format of the slot.
    pub placement_type: PlacementType,
    /// The slot identifier within the platform.
    pub position_name: String,
    /// Creative width in pixels.
    pub width: i64,
    /// Creative height in pixels.
    pub height: i64,
    /// The running campaign's name.
    pub campaign_name: String,
    /// The ad creative image URL.
    pub ad_image_url: String,
    /// The click-through link URL, if any.
    pub ad_link_url: Option<String>,
    /// Campaign start date.
    pub start_date: String,
    /// Campaign end date.
    pub end_date: String,
    /// Impressions served so far.
    pub impressions: i64,
    /// Clicks recorded so far.
    pub clicks: i64,
}

/// A regional pricing row.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalPricingData {
    /// The canonical numeric identifier.
    pub region_id: i64,
    /// The region name (e.g. `New York Metro`).
    pub region_name: String,
    /// The region's country.
    pub country: String,
    /// The state or province, where applicable.
    pub state_province: Option<String>,
    /// Multiplier applied to base prices in this region (>= 1.0).
    pub price_multiplier: f64,
    /// Population density classification.
    pub population_density: PopulationDensity,
}

/// A booking row, denormalized with its placement's display fields.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingData {
    /// The canonical numeric identifier.
    pub booking_id: i64,
    /// The booked placement.
    pub placement_id: i64,
    /// The advertiser who made the booking.
    pub advertiser_id: i64,
    /// The placement's platform key.
    pub platform_name: String,
    /// The placement's ad format.
    pub placement_type: PlacementType,
    /// The placement's slot identifier.
    pub position_name: String,
    /// Creative width in pixels.
    pub width: i64,
    /// Creative height in pixels.
    pub height: i64,
    /// The campaign name.
    pub campaign_name: String,
    /// The ad creative image URL.
    pub ad_image_url: String,
    /// The click-through link URL, if any.
    pub ad_link_url: Option<String>,
    /// The targeted region name.
    pub region: String,
    /// Optional postal code for finer targeting.
    pub postal_code: Option<String>,
    /// Booking start date.
    pub start_date: String,
    /// Booking end date.
    pub end_date: String,
    /// Quoted monthly price in USD.
    pub monthly_price: f64,
    /// Quoted total price in USD.
    pub total_price: f64,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Impressions served so far.
    pub impressions: i64,
    /// Clicks recorded so far.
    pub clicks: i64,
    /// Row creation timestamp.
    pub created_at: String,
    /// Last status-change timestamp.
    pub updated_at: String,
}

/// The fields required to insert a booking.
///
/// Prices are the server-computed quote, never client-supplied values.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookingData {
    /// The placement to book.
    pub placement_id: i64,
    /// The advertiser making the booking.
    pub advertiser_id: i64,
    /// The campaign name.
    pub campaign_name: String,
    /// The ad creative image URL.
    pub ad_image_url: String,
    /// The click-through link URL, if any.
    pub ad_link_url: Option<String>,
    /// The targeted region name.
    pub region: String,
    /// Optional postal code for finer targeting.
    pub postal_code: Option<String>,
    /// Booking start date.
    pub start_date: String,
    /// Booking end date.
    pub end_date: String,
    /// Quoted monthly price in USD.
    pub monthly_price: f64,
    /// Quoted total price in USD.
    pub total_price: f64,
}
