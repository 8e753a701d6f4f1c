// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These mirror the panel's wire contract: numeric `id` fields, prices
//! as JSON numbers, dates as ISO `[year]-[month]-[day]` strings, and
//! enum values in snake_case.

use adslot_domain::{AvailabilityStatus, BookingStatus, PlacementType, PopulationDensity};

/// API request to register a new advertiser account.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// The login email.
    pub email: String,
    /// The display name.
    pub display_name: String,
    /// The plaintext password (policy-checked, stored only as a hash).
    pub password: String,
}

/// API response for a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterResponse {
    /// The created account's identifier.
    pub id: i64,
    /// The account email.
    pub email: String,
    /// The account display name.
    pub display_name: String,
    /// A success message.
    pub message: String,
}

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    /// The account email.
    pub email: String,
    /// The plaintext password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    /// The opaque bearer token for subsequent requests.
    pub token: String,
    /// The account identifier.
    pub id: i64,
    /// The account email.
    pub email: String,
    /// The account display name.
    pub display_name: String,
    /// The account role (`admin` or `advertiser`).
    pub role: String,
}

/// A platform with placement availability counts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlatformSummaryResponse {
    /// The platform identifier.
    pub id: i64,
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
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacementResponse {
    /// The placement identifier.
    pub id: i64,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_start: Option<String>,
    /// End date of the occupying booking, when booked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_end: Option<String>,
    /// Campaign name of the occupying booking, when booked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_campaign: Option<String>,
}

/// A currently running ad on a placement.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActiveAdResponse {
    /// The placement identifier.
    pub id: i64,
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
    #[serde(skip_serializing_if = "Option::is_none")]
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
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionalPricingResponse {
    /// The region identifier.
    pub id: i64,
    /// The region name (e.g. `New York Metro`).
    pub region_name: String,
    /// The region's country.
    pub country: String,
    /// The state or province, where applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,
    /// Multiplier applied to base prices in this region.
    pub price_multiplier: f64,
    /// Population density classification.
    pub population_density: PopulationDensity,
}

/// API request to calculate a booking quote.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CalculatePricingRequest {
    /// The placement to price.
    pub placement_id: i64,
    /// The target region name.
    pub region: String,
    /// Booking start date, ISO `[year]-[month]-[day]`.
    pub start_date: String,
    /// Booking end date, ISO `[year]-[month]-[day]`.
    pub end_date: String,
}

/// A booking quote.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PricingQuoteResponse {
    /// The placement's base monthly price in USD.
    pub base_price: f64,
    /// The regional multiplier that was applied (1.0 when the region
    /// has no pricing row).
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

/// API request to book a placement.
///
/// Prices are not accepted from the client; the server recomputes the
/// quote when the booking is created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateBookingRequest {
    /// The placement to book.
    pub placement_id: i64,
    /// The campaign name.
    pub campaign_name: String,
    /// The ad creative image URL.
    pub ad_image_url: String,
    /// The click-through link URL, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_link_url: Option<String>,
    /// The targeted region name.
    pub region: String,
    /// Optional postal code for finer targeting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Booking start date, ISO `[year]-[month]-[day]`.
    pub start_date: String,
    /// Booking end date, ISO `[year]-[month]-[day]`.
    pub end_date: String,
}

/// A booking, denormalized with its placement's display fields.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BookingResponse {
    /// The booking identifier.
    pub id: i64,
    /// The booked placement.
    pub placement_id: i64,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_link_url: Option<String>,
    /// The targeted region name.
    pub region: String,
    /// Optional postal code for finer targeting.
    #[serde(skip_serializing_if = "Option::is_none")]
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

/// API request to change a booking's status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateBookingStatusRequest {
    /// The requested status (snake_case wire value).
    pub status: String,
}
