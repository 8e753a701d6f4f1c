// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field validation for booking requests.

use crate::error::DomainError;
use crate::pricing::parse_date;

/// Validates the user-supplied fields of a booking request.
///
/// # Arguments
///
/// * `campaign_name` - The campaign name (must be non-empty)
/// * `region` - The target region name (must be non-empty)
/// * `ad_image_url` - The ad creative image URL (must be non-empty)
///
/// # Errors
///
/// Returns an error describing the first invalid field.
pub fn validate_booking_fields(
    campaign_name: &str,
    region: &str,
    ad_image_url: &str,
) -> Result<(), DomainError> {
    if campaign_name.trim().is_empty() {
        return Err(DomainError::InvalidCampaignName(String::from(
            "Campaign name cannot be empty",
        )));
    }
    if region.trim().is_empty() {
        return Err(DomainError::InvalidRegion(String::from(
            "Region cannot be empty",
        )));
    }
    if ad_image_url.trim().is_empty() {
        return Err(DomainError::InvalidAdImageUrl(String::from(
            "Ad image URL cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that a booking date range is well-formed.
///
/// # Arguments
///
/// * `start_date` - Booking start date, ISO `[year]-[month]-[day]`
/// * `end_date` - Booking end date, ISO `[year]-[month]-[day]`
///
/// # Errors
///
/// Returns an error if either date fails to parse or the end date
/// precedes the start date.
pub fn validate_date_range(start_date: &str, end_date: &str) -> Result<(), DomainError> {
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;
    if end < start {
        return Err(DomainError::InvalidDateRange {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        });
    }
    Ok(())
}
