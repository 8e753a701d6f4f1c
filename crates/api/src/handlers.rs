// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation functions implementing the API contract.
//!
//! Each function validates its input, applies domain rules, and
//! delegates storage to the persistence layer. Authorization is checked
//! here, before any state is touched.

use std::str::FromStr;

use tracing::info;

use adslot_domain::{
    AvailabilityStatus, BookingStatus, DEFAULT_PRICE_MULTIPLIER, DomainError, PricingQuote,
    calculate_quote, validate_booking_fields, validate_date_range,
};
use adslot_persistence::{BookingData, NewBookingData, PlacementData, SqlitePersistence};

use crate::auth::{AuthenticatedActor, AuthenticationService, AuthorizationService};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    ActiveAdResponse, BookingResponse, CalculatePricingRequest, CreateBookingRequest,
    LoginRequest, LoginResponse, PlacementResponse, PlatformSummaryResponse,
    PricingQuoteResponse, RegionalPricingResponse, RegisterRequest, RegisterResponse,
    UpdateBookingStatusRequest,
};

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

fn placement_response(placement: PlacementData) -> PlacementResponse {
    PlacementResponse {
        id: placement.placement_id,
        platform_name: placement.platform_name,
        placement_type: placement.placement_type,
        position_name: placement.position_name,
        width: placement.width,
        height: placement.height,
        base_price: placement.base_price,
        description: placement.description,
        availability_status: placement.availability_status,
        booked_start: placement.booked_start,
        booked_end: placement.booked_end,
        booked_campaign: placement.booked_campaign,
    }
}

fn booking_response(booking: BookingData) -> BookingResponse {
    BookingResponse {
        id: booking.booking_id,
        placement_id: booking.placement_id,
        platform_name: booking.platform_name,
        placement_type: booking.placement_type,
        position_name: booking.position_name,
        width: booking.width,
        height: booking.height,
        campaign_name: booking.campaign_name,
        ad_image_url: booking.ad_image_url,
        ad_link_url: booking.ad_link_url,
        region: booking.region,
        postal_code: booking.postal_code,
        start_date: booking.start_date,
        end_date: booking.end_date,
        monthly_price: booking.monthly_price,
        total_price: booking.total_price,
        status: booking.status,
        impressions: booking.impressions,
        clicks: booking.clicks,
        created_at: booking.created_at,
        updated_at: booking.updated_at,
    }
}

/// Looks up a region's multiplier, defaulting to 1.0 for unknown regions.
fn region_multiplier(
    persistence: &SqlitePersistence,
    region: &str,
) -> Result<f64, ApiError> {
    let multiplier: f64 = persistence
        .get_region_by_name(region)
        .map_err(translate_persistence_error)?
        .map_or(DEFAULT_PRICE_MULTIPLIER, |r| r.price_multiplier);
    Ok(multiplier)
}

/// Registers a new advertiser account.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The registration request
///
/// # Errors
///
/// Returns an error if the email is taken, the password violates
/// policy, or the account cannot be created.
pub fn register_advertiser(
    persistence: &SqlitePersistence,
    request: &RegisterRequest,
) -> ApiResult<RegisterResponse> {
    PasswordPolicy::default().validate(&request.password, &request.email, &request.display_name)?;

    let advertiser = AuthenticationService::register(
        persistence,
        &request.email,
        &request.display_name,
        &request.password,
    )?;

    info!("Registered advertiser: {}", advertiser.email);

    Ok(RegisterResponse {
        id: advertiser.advertiser_id,
        email: advertiser.email,
        display_name: advertiser.display_name,
        message: String::from("Account created"),
    })
}

/// Authenticates an advertiser and opens a session.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The login request
///
/// # Errors
///
/// Returns an error if the credentials are invalid or the account is
/// disabled.
pub fn login(persistence: &SqlitePersistence, request: &LoginRequest) -> ApiResult<LoginResponse> {
    let (token, actor, advertiser) =
        AuthenticationService::login(persistence, &request.email, &request.password)?;

    info!("Login: {}", actor.email);

    Ok(LoginResponse {
        token,
        id: advertiser.advertiser_id,
        email: advertiser.email,
        display_name: advertiser.display_name,
        role: advertiser.role,
    })
}

/// Closes the session identified by the bearer token.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `session_token` - The bearer token to invalidate
///
/// # Errors
///
/// Returns an error if the session cannot be deleted.
pub fn logout(persistence: &SqlitePersistence, session_token: &str) -> ApiResult<()> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

/// Lists all platforms with placement availability counts.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_platforms(
    persistence: &SqlitePersistence,
) -> ApiResult<Vec<PlatformSummaryResponse>> {
    let platforms = persistence
        .list_platforms()
        .map_err(translate_persistence_error)?;

    Ok(platforms
        .into_iter()
        .map(|p| PlatformSummaryResponse {
            id: p.platform_id,
            name: p.name,
            display_name: p.display_name,
            total_placements: p.total_placements,
            available_placements: p.available_placements,
            booked_placements: p.booked_placements,
        })
        .collect())
}

/// Lists a platform's placements with derived availability.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `platform_name` - The platform key (e.g. `facebook`)
///
/// # Errors
///
/// Returns a not-found error for an unknown platform.
pub fn list_placements(
    persistence: &SqlitePersistence,
    platform_name: &str,
) -> ApiResult<Vec<PlacementResponse>> {
    if !persistence
        .platform_exists(platform_name)
        .map_err(translate_persistence_error)?
    {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Platform"),
            message: format!("Platform '{platform_name}' does not exist"),
        });
    }

    let placements = persistence
        .list_placements(platform_name)
        .map_err(translate_persistence_error)?;

    Ok(placements.into_iter().map(placement_response).collect())
}

/// Lists a platform's currently active ads.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `platform_name` - The platform key
///
/// # Errors
///
/// Returns a not-found error for an unknown platform.
pub fn list_active_ads(
    persistence: &SqlitePersistence,
    platform_name: &str,
) -> ApiResult<Vec<ActiveAdResponse>> {
    if !persistence
        .platform_exists(platform_name)
        .map_err(translate_persistence_error)?
    {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Platform"),
            message: format!("Platform '{platform_name}' does not exist"),
        });
    }

    let ads = persistence
        .list_active_ads(platform_name)
        .map_err(translate_persistence_error)?;

    Ok(ads
        .into_iter()
        .map(|ad| ActiveAdResponse {
            id: ad.placement_id,
            placement_type: ad.placement_type,
            position_name: ad.position_name,
            width: ad.width,
            height: ad.height,
            campaign_name: ad.campaign_name,
            ad_image_url: ad.ad_image_url,
            ad_link_url: ad.ad_link_url,
            start_date: ad.start_date,
            end_date: ad.end_date,
            impressions: ad.impressions,
            clicks: ad.clicks,
        })
        .collect())
}

/// Lists regional pricing rows, optionally filtered by region name,
/// country, and state/province.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `region` - Optional region-name filter (exact, case-insensitive)
/// * `country` - Optional country filter (exact)
/// * `state` - Optional state/province filter (exact)
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_regional_pricing(
    persistence: &SqlitePersistence,
    region: Option<&str>,
    country: Option<&str>,
    state: Option<&str>,
) -> ApiResult<Vec<RegionalPricingResponse>> {
    let regions = persistence
        .list_regional_pricing(region, country, state)
        .map_err(translate_persistence_error)?;

    Ok(regions
        .into_iter()
        .map(|r| RegionalPricingResponse {
            id: r.region_id,
            region_name: r.region_name,
            country: r.country,
            state_province: r.state_province,
            price_multiplier: r.price_multiplier,
            population_density: r.population_density,
        })
        .collect())
}

/// Calculates a booking quote for a placement over a date range.
///
/// Unknown regions fall back to the default multiplier of 1.0; an
/// unknown placement is a not-found error.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The pricing request
///
/// # Errors
///
/// Returns an error if the placement does not exist or the date range
/// is invalid.
pub fn calculate_pricing(
    persistence: &SqlitePersistence,
    request: &CalculatePricingRequest,
) -> ApiResult<PricingQuoteResponse> {
    let placement: PlacementData = persistence
        .get_placement(request.placement_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Placement"),
            message: format!("Placement {} does not exist", request.placement_id),
        })?;

    let multiplier: f64 = region_multiplier(persistence, &request.region)?;

    let quote: PricingQuote = calculate_quote(
        placement.base_price,
        multiplier,
        &request.start_date,
        &request.end_date,
    )
    .map_err(translate_domain_error)?;

    Ok(PricingQuoteResponse {
        base_price: quote.base_price,
        price_multiplier: quote.price_multiplier,
        monthly_price: quote.monthly_price,
        duration_days: quote.duration_days,
        duration_months: quote.duration_months,
        total_price: quote.total_price,
    })
}

/// Books a placement for the authenticated advertiser.
///
/// The quote is recomputed server-side from the placement's base price
/// and the region's multiplier; client-supplied prices are never
/// trusted. The booking starts in `pending` status.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `actor` - The authenticated actor
/// * `request` - The booking request
///
/// # Errors
///
/// Returns an error if validation fails, the placement does not exist,
/// or the placement is already booked.
pub fn create_booking(
    persistence: &SqlitePersistence,
    actor: &AuthenticatedActor,
    request: &CreateBookingRequest,
) -> ApiResult<BookingResponse> {
    AuthorizationService::authorize_create_booking(actor)?;

    validate_booking_fields(
        &request.campaign_name,
        &request.region,
        &request.ad_image_url,
    )
    .map_err(translate_domain_error)?;
    validate_date_range(&request.start_date, &request.end_date)
        .map_err(translate_domain_error)?;

    let placement: PlacementData = persistence
        .get_placement(request.placement_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Placement"),
            message: format!("Placement {} does not exist", request.placement_id),
        })?;

    if placement.availability_status == AvailabilityStatus::Booked {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("placement_available"),
            message: format!(
                "Placement {} is already booked",
                request.placement_id
            ),
        });
    }

    let multiplier: f64 = region_multiplier(persistence, &request.region)?;
    let quote: PricingQuote = calculate_quote(
        placement.base_price,
        multiplier,
        &request.start_date,
        &request.end_date,
    )
    .map_err(translate_domain_error)?;

    info!(
        "Creating booking for placement {} by advertiser {} (total: {})",
        request.placement_id, actor.advertiser_id, quote.total_price
    );

    let booking: BookingData = persistence
        .insert_booking(&NewBookingData {
            placement_id: request.placement_id,
            advertiser_id: actor.advertiser_id,
            campaign_name: request.campaign_name.clone(),
            ad_image_url: request.ad_image_url.clone(),
            ad_link_url: request.ad_link_url.clone(),
            region: request.region.clone(),
            postal_code: request.postal_code.clone(),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            monthly_price: quote.monthly_price,
            total_price: quote.total_price,
        })
        .map_err(translate_persistence_error)?;

    Ok(booking_response(booking))
}

/// Lists the authenticated advertiser's bookings, most recent first.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_bookings(
    persistence: &SqlitePersistence,
    actor: &AuthenticatedActor,
) -> ApiResult<Vec<BookingResponse>> {
    let bookings = persistence
        .list_bookings_by_advertiser(actor.advertiser_id)
        .map_err(translate_persistence_error)?;

    Ok(bookings.into_iter().map(booking_response).collect())
}

/// Moves a booking to a new lifecycle status.
///
/// Admin-only. The transition must be permitted by the booking status
/// table; anything else is a domain-rule violation.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `actor` - The authenticated actor
/// * `booking_id` - The booking to update
/// * `request` - The requested status
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the booking does not
/// exist, the status is unknown, or the transition is not permitted.
pub fn update_booking_status(
    persistence: &SqlitePersistence,
    actor: &AuthenticatedActor,
    booking_id: i64,
    request: &UpdateBookingStatusRequest,
) -> ApiResult<BookingResponse> {
    AuthorizationService::authorize_update_booking_status(actor)?;

    let target: BookingStatus =
        BookingStatus::from_str(&request.status).map_err(translate_domain_error)?;

    let booking: BookingData = persistence
        .get_booking(booking_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking {booking_id} does not exist"),
        })?;

    if !booking.status.can_transition_to(target) {
        return Err(translate_domain_error(
            DomainError::InvalidStatusTransition {
                from: booking.status,
                to: target,
            },
        ));
    }

    info!(
        "Booking {} status: {} -> {} (by {})",
        booking_id, booking.status, target, actor.email
    );

    persistence
        .update_booking_status(booking_id, target)
        .map_err(translate_persistence_error)?;

    let updated: BookingData = persistence
        .get_booking(booking_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::Internal {
            message: format!("Booking {booking_id} missing after update"),
        })?;

    Ok(booking_response(updated))
}
