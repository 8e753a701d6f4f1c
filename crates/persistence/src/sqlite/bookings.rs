// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking persistence functions.

use std::str::FromStr;

use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info};

use adslot_domain::{BookingStatus, PlacementType};

use crate::data_models::{BookingData, NewBookingData};
use crate::error::PersistenceError;

const BOOKING_SELECT: &str = "SELECT b.booking_id, b.placement_id, b.advertiser_id,
       pf.name, pl.placement_type, pl.position_name, pl.width, pl.height,
       b.campaign_name, b.ad_image_url, b.ad_link_url, b.region, b.postal_code,
       b.start_date, b.end_date, b.monthly_price, b.total_price, b.status,
       b.impressions, b.clicks, b.created_at, b.updated_at
 FROM bookings b
 JOIN placements pl ON pl.placement_id = b.placement_id
 JOIN platforms pf ON pf.platform_id = pl.platform_id";

/// Row shape before enum parsing.
struct BookingRaw {
    booking_id: i64,
    placement_id: i64,
    advertiser_id: i64,
    platform_name: String,
    placement_type: String,
    position_name: String,
    width: i64,
    height: i64,
    campaign_name: String,
    ad_image_url: String,
    ad_link_url: Option<String>,
    region: String,
    postal_code: Option<String>,
    start_date: String,
    end_date: String,
    monthly_price: f64,
    total_price: f64,
    status: String,
    impressions: i64,
    clicks: i64,
    created_at: String,
    updated_at: String,
}

fn booking_raw_from_row(row: &Row<'_>) -> rusqlite::Result<BookingRaw> {
    Ok(BookingRaw {
        booking_id: row.get(0)?,
        placement_id: row.get(1)?,
        advertiser_id: row.get(2)?,
        platform_name: row.get(3)?,
        placement_type: row.get(4)?,
        position_name: row.get(5)?,
        width: row.get(6)?,
        height: row.get(7)?,
        campaign_name: row.get(8)?,
        ad_image_url: row.get(9)?,
        ad_link_url: row.get(10)?,
        region: row.get(11)?,
        postal_code: row.get(12)?,
        start_date: row.get(13)?,
        end_date: row.get(14)?,
        monthly_price: row.get(15)?,
        total_price: row.get(16)?,
        status: row.get(17)?,
        impressions: row.get(18)?,
        clicks: row.get(19)?,
        created_at: row.get(20)?,
        updated_at: row.get(21)?,
    })
}

fn booking_from_raw(raw: BookingRaw) -> Result<BookingData, PersistenceError> {
    let placement_type: PlacementType =
        PlacementType::from_str(&raw.placement_type).map_err(|e| {
            PersistenceError::InvalidStoredValue {
                column: String::from("placement_type"),
                message: e.to_string(),
            }
        })?;
    let status: BookingStatus = BookingStatus::from_str(&raw.status).map_err(|e| {
        PersistenceError::InvalidStoredValue {
            column: String::from("status"),
            message: e.to_string(),
        }
    })?;

    Ok(BookingData {
        booking_id: raw.booking_id,
        placement_id: raw.placement_id,
        advertiser_id: raw.advertiser_id,
        platform_name: raw.platform_name,
        placement_type,
        position_name: raw.position_name,
        width: raw.width,
        height: raw.height,
        campaign_name: raw.campaign_name,
        ad_image_url: raw.ad_image_url,
        ad_link_url: raw.ad_link_url,
        region: raw.region,
        postal_code: raw.postal_code,
        start_date: raw.start_date,
        end_date: raw.end_date,
        monthly_price: raw.monthly_price,
        total_price: raw.total_price,
        status,
        impressions: raw.impressions,
        clicks: raw.clicks,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
    })
}

/// Inserts a new booking in `pending` status and returns the stored row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `new_booking` - The booking fields, with server-computed prices
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_booking(
    conn: &Connection,
    new_booking: &NewBookingData,
) -> Result<BookingData, PersistenceError> {
    info!(
        "Inserting booking for placement ID: {} by advertiser ID: {}",
        new_booking.placement_id, new_booking.advertiser_id
    );

    conn.execute(
        "INSERT INTO bookings (placement_id, advertiser_id, campaign_name, ad_image_url,
                               ad_link_url, region, postal_code, start_date, end_date,
                               monthly_price, total_price)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            new_booking.placement_id,
            new_booking.advertiser_id,
            new_booking.campaign_name,
            new_booking.ad_image_url,
            new_booking.ad_link_url,
            new_booking.region,
            new_booking.postal_code,
            new_booking.start_date,
            new_booking.end_date,
            new_booking.monthly_price,
            new_booking.total_price,
        ],
    )?;

    let booking_id: i64 = conn.last_insert_rowid();
    info!("Created booking with ID: {}", booking_id);

    get_booking(conn, booking_id)?.ok_or_else(|| {
        PersistenceError::Other(format!("Booking {booking_id} missing after insert"))
    })
}

/// Retrieves a booking by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking_id` - The booking ID
///
/// # Errors
///
/// Returns an error if the database query fails or a stored enum value
/// cannot be parsed. Returns `Ok(None)` if the booking is not found.
pub fn get_booking(
    conn: &Connection,
    booking_id: i64,
) -> Result<Option<BookingData>, PersistenceError> {
    debug!("Looking up booking by ID: {}", booking_id);

    let raw: Option<BookingRaw> = conn
        .query_row(
            &format!("{BOOKING_SELECT} WHERE b.booking_id = ?1"),
            params![booking_id],
            booking_raw_from_row,
        )
        .optional()?;

    raw.map(booking_from_raw).transpose()
}

/// Lists an advertiser's bookings, most recent first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `advertiser_id` - The advertiser ID
///
/// # Errors
///
/// Returns an error if the database query fails or a stored enum value
/// cannot be parsed.
pub fn list_bookings_by_advertiser(
    conn: &Connection,
    advertiser_id: i64,
) -> Result<Vec<BookingData>, PersistenceError> {
    debug!("Listing bookings for advertiser ID: {}", advertiser_id);

    let mut stmt = conn.prepare(&format!(
        "{BOOKING_SELECT} WHERE b.advertiser_id = ?1
         ORDER BY b.created_at DESC, b.booking_id DESC"
    ))?;

    let raws = stmt.query_map(params![advertiser_id], booking_raw_from_row)?;

    let mut bookings: Vec<BookingData> = Vec::new();
    for raw in raws {
        bookings.push(booking_from_raw(raw?)?);
    }

    Ok(bookings)
}

/// Updates a booking's status and its `updated_at` timestamp.
///
/// Transition validity is enforced by the API layer; this function only
/// stores the new status.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking_id` - The booking ID
/// * `status` - The new status
///
/// # Errors
///
/// Returns an error if the update fails or the booking does not exist.
pub fn update_booking_status(
    conn: &Connection,
    booking_id: i64,
    status: BookingStatus,
) -> Result<(), PersistenceError> {
    info!(
        "Updating booking ID: {} to status: {}",
        booking_id, status
    );

    let updated: usize = conn.execute(
        "UPDATE bookings
         SET status = ?2, updated_at = CURRENT_TIMESTAMP
         WHERE booking_id = ?1",
        params![booking_id, status.as_str()],
    )?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Booking {booking_id} not found"
        )));
    }

    Ok(())
}

/// Sets the performance counters on a booking.
///
/// Used by the demo seed to give active campaigns realistic numbers.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking_id` - The booking ID
/// * `impressions` - Impressions served
/// * `clicks` - Clicks recorded
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn set_booking_performance(
    conn: &Connection,
    booking_id: i64,
    impressions: i64,
    clicks: i64,
) -> Result<(), PersistenceError> {
    conn.execute(
        "UPDATE bookings SET impressions = ?2, clicks = ?3 WHERE booking_id = ?1",
        params![booking_id, impressions, clicks],
    )?;

    Ok(())
}
