// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Platform, placement, and regional-pricing query functions.
//!
//! Placement availability is derived here: a placement is booked while
//! any booking in a non-terminal status references it.

use std::str::FromStr;

use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use adslot_domain::{AvailabilityStatus, PlacementType, PopulationDensity};

use crate::data_models::{ActiveAdData, PlacementData, PlatformSummaryData, RegionalPricingData};
use crate::error::PersistenceError;

/// Row shape shared by the placement queries before enum parsing.
struct PlacementRaw {
    placement_id: i64,
    platform_name: String,
    placement_type: String,
    position_name: String,
    width: i64,
    height: i64,
    base_price: f64,
    description: String,
    booked_start: Option<String>,
    booked_end: Option<String>,
    booked_campaign: Option<String>,
}

fn placement_from_raw(raw: PlacementRaw) -> Result<PlacementData, PersistenceError> {
    let placement_type: PlacementType =
        PlacementType::from_str(&raw.placement_type).map_err(|e| {
            PersistenceError::InvalidStoredValue {
                column: String::from("placement_type"),
                message: e.to_string(),
            }
        })?;
    let availability_status: AvailabilityStatus = if raw.booked_start.is_some() {
        AvailabilityStatus::Booked
    } else {
        AvailabilityStatus::Available
    };

    Ok(PlacementData {
        placement_id: raw.placement_id,
        platform_name: raw.platform_name,
        placement_type,
        position_name: raw.position_name,
        width: raw.width,
        height: raw.height,
        base_price: raw.base_price,
        description: raw.description,
        availability_status,
        booked_start: raw.booked_start,
        booked_end: raw.booked_end,
        booked_campaign: raw.booked_campaign,
    })
}

/// Lists all platforms with placement availability counts.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_platforms(conn: &Connection) -> Result<Vec<PlatformSummaryData>, PersistenceError> {
    debug!("Listing platforms with availability counts");

    let mut stmt = conn.prepare(
        "SELECT pf.platform_id, pf.name, pf.display_name,
                COUNT(pl.placement_id),
                COALESCE(SUM(CASE WHEN EXISTS (
                    SELECT 1 FROM bookings b
                    WHERE b.placement_id = pl.placement_id
                      AND b.status NOT IN ('completed', 'rejected')
                ) THEN 1 ELSE 0 END), 0)
         FROM platforms pf
         LEFT JOIN placements pl ON pl.platform_id = pf.platform_id
         GROUP BY pf.platform_id, pf.name, pf.display_name
         ORDER BY pf.name",
    )?;

    let rows = stmt.query_map([], |row| {
        let total: i64 = row.get(3)?;
        let booked: i64 = row.get(4)?;
        Ok(PlatformSummaryData {
            platform_id: row.get(0)?,
            name: row.get(1)?,
            display_name: row.get(2)?,
            total_placements: total,
            available_placements: total - booked,
            booked_placements: booked,
        })
    })?;

    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Checks whether a platform exists by its key.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `platform_name` - The platform key (e.g. `facebook`)
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn platform_exists(conn: &Connection, platform_name: &str) -> Result<bool, PersistenceError> {
    let result: Option<i64> = conn
        .query_row(
            "SELECT platform_id FROM platforms WHERE name = ?1",
            params![platform_name],
            |row| row.get(0),
        )
        .optional()?;

    Ok(result.is_some())
}

/// Lists a platform's placements with derived availability.
///
/// Booked placements carry the occupying booking's dates and campaign
/// name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `platform_name` - The platform key
///
/// # Errors
///
/// Returns an error if the database query fails or a stored enum value
/// cannot be parsed.
pub fn list_placements(
    conn: &Connection,
    platform_name: &str,
) -> Result<Vec<PlacementData>, PersistenceError> {
    debug!("Listing placements for platform: {}", platform_name);

    let mut stmt = conn.prepare(
        "SELECT pl.placement_id, pf.name, pl.placement_type, pl.position_name,
                pl.width, pl.height, pl.base_price, pl.description,
                b.start_date, b.end_date, b.campaign_name
         FROM placements pl
         JOIN platforms pf ON pf.platform_id = pl.platform_id
         LEFT JOIN bookings b ON b.placement_id = pl.placement_id
              AND b.status NOT IN ('completed', 'rejected')
         WHERE pf.name = ?1
         ORDER BY pl.position_name, pl.placement_id",
    )?;

    let raws = stmt.query_map(params![platform_name], |row| {
        Ok(PlacementRaw {
            placement_id: row.get(0)?,
            platform_name: row.get(1)?,
            placement_type: row.get(2)?,
            position_name: row.get(3)?,
            width: row.get(4)?,
            height: row.get(5)?,
            base_price: row.get(6)?,
            description: row.get(7)?,
            booked_start: row.get(8)?,
            booked_end: row.get(9)?,
            booked_campaign: row.get(10)?,
        })
    })?;

    let mut placements: Vec<PlacementData> = Vec::new();
    for raw in raws {
        placements.push(placement_from_raw(raw?)?);
    }

    Ok(placements)
}

/// Retrieves a single placement by ID with derived availability.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `placement_id` - The placement ID
///
/// # Errors
///
/// Returns an error if the database query fails or a stored enum value
/// cannot be parsed. Returns `Ok(None)` if the placement is not found.
pub fn get_placement(
    conn: &Connection,
    placement_id: i64,
) -> Result<Option<PlacementData>, PersistenceError> {
    debug!("Looking up placement by ID: {}", placement_id);

    let raw: Option<PlacementRaw> = conn
        .query_row(
            "SELECT pl.placement_id, pf.name, pl.placement_type, pl.position_name,
                    pl.width, pl.height, pl.base_price, pl.description,
                    b.start_date, b.end_date, b.campaign_name
             FROM placements pl
             JOIN platforms pf ON pf.platform_id = pl.platform_id
             LEFT JOIN bookings b ON b.placement_id = pl.placement_id
                  AND b.status NOT IN ('completed', 'rejected')
             WHERE pl.placement_id = ?1",
            params![placement_id],
            |row| {
                Ok(PlacementRaw {
                    placement_id: row.get(0)?,
                    platform_name: row.get(1)?,
                    placement_type: row.get(2)?,
                    position_name: row.get(3)?,
                    width: row.get(4)?,
                    height: row.get(5)?,
                    base_price: row.get(6)?,
                    description: row.get(7)?,
                    booked_start: row.get(8)?,
                    booked_end: row.get(9)?,
                    booked_campaign: row.get(10)?,
                })
            },
        )
        .optional()?;

    raw.map(placement_from_raw).transpose()
}

/// Lists a platform's currently active ads.
///
/// An active ad is a placement whose occupying booking has status
/// `active`, enriched with the campaign creative and performance
/// counters.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `platform_name` - The platform key
///
/// # Errors
///
/// Returns an error if the database query fails or a stored enum value
/// cannot be parsed.
pub fn list_active_ads(
    conn: &Connection,
    platform_name: &str,
) -> Result<Vec<ActiveAdData>, PersistenceError> {
    debug!("Listing active ads for platform: {}", platform_name);

    let mut stmt = conn.prepare(
        "SELECT pl.placement_id, pl.placement_type, pl.position_name,
                pl.width, pl.height,
                b.campaign_name, b.ad_image_url, b.ad_link_url,
                b.start_date, b.end_date, b.impressions, b.clicks
         FROM bookings b
         JOIN placements pl ON pl.placement_id = b.placement_id
         JOIN platforms pf ON pf.platform_id = pl.platform_id
         WHERE pf.name = ?1 AND b.status = 'active'
         ORDER BY pl.position_name, pl.placement_id",
    )?;

    let raws = stmt.query_map(params![platform_name], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, i64>(3)?,
            row.get::<_, i64>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, String>(6)?,
            row.get::<_, Option<String>>(7)?,
            row.get::<_, String>(8)?,
            row.get::<_, String>(9)?,
            row.get::<_, i64>(10)?,
            row.get::<_, i64>(11)?,
        ))
    })?;

    let mut ads: Vec<ActiveAdData> = Vec::new();
    for raw in raws {
        let (
            placement_id,
            placement_type,
            position_name,
            width,
            height,
            campaign_name,
            ad_image_url,
            ad_link_url,
            start_date,
            end_date,
            impressions,
            clicks,
        ) = raw?;
        let placement_type: PlacementType =
            PlacementType::from_str(&placement_type).map_err(|e| {
                PersistenceError::InvalidStoredValue {
                    column: String::from("placement_type"),
                    message: e.to_string(),
                }
            })?;
        ads.push(ActiveAdData {
            placement_id,
            placement_type,
            position_name,
            width,
            height,
            campaign_name,
            ad_image_url,
            ad_link_url,
            start_date,
            end_date,
            impressions,
            clicks,
        });
    }

    Ok(ads)
}

fn regional_pricing_from_row(
    region_id: i64,
    region_name: String,
    country: String,
    state_province: Option<String>,
    price_multiplier: f64,
    population_density: &str,
) -> Result<RegionalPricingData, PersistenceError> {
    let population_density: PopulationDensity = PopulationDensity::from_str(population_density)
        .map_err(|e| PersistenceError::InvalidStoredValue {
            column: String::from("population_density"),
            message: e.to_string(),
        })?;

    Ok(RegionalPricingData {
        region_id,
        region_name,
        country,
        state_province,
        price_multiplier,
        population_density,
    })
}

/// Lists regional pricing rows, optionally filtered.
///
/// Filters combine with AND. The region filter is an exact
/// case-insensitive match; country and state are exact matches.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `region` - Optional region-name filter
/// * `country` - Optional country filter
/// * `state` - Optional state/province filter
///
/// # Errors
///
/// Returns an error if the database query fails or a stored enum value
/// cannot be parsed.
pub fn list_regional_pricing(
    conn: &Connection,
    region: Option<&str>,
    country: Option<&str>,
    state: Option<&str>,
) -> Result<Vec<RegionalPricingData>, PersistenceError> {
    debug!(
        "Listing regional pricing (region: {:?}, country: {:?}, state: {:?})",
        region, country, state
    );

    let mut stmt = conn.prepare(
        "SELECT region_id, region_name, country, state_province,
                price_multiplier, population_density
         FROM regional_pricing
         WHERE (?1 IS NULL OR region_name = ?1)
           AND (?2 IS NULL OR country = ?2)
           AND (?3 IS NULL OR state_province = ?3)
         ORDER BY region_name",
    )?;

    let raws = stmt.query_map(params![region, country, state], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?,
            row.get::<_, f64>(4)?,
            row.get::<_, String>(5)?,
        ))
    })?;

    let mut regions: Vec<RegionalPricingData> = Vec::new();
    for raw in raws {
        let (region_id, region_name, country, state_province, multiplier, density) = raw?;
        regions.push(regional_pricing_from_row(
            region_id,
            region_name,
            country,
            state_province,
            multiplier,
            &density,
        )?);
    }

    Ok(regions)
}

/// Retrieves a regional pricing row by exact region name.
///
/// Lookup is case-insensitive.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `region_name` - The region name
///
/// # Errors
///
/// Returns an error if the database query fails or a stored enum value
/// cannot be parsed. Returns `Ok(None)` if the region is not found.
pub fn get_region_by_name(
    conn: &Connection,
    region_name: &str,
) -> Result<Option<RegionalPricingData>, PersistenceError> {
    debug!("Looking up regional pricing for region: {}", region_name);

    let raw: Option<(i64, String, String, Option<String>, f64, String)> = conn
        .query_row(
            "SELECT region_id, region_name, country, state_province,
                    price_multiplier, population_density
             FROM regional_pricing
             WHERE region_name = ?1",
            params![region_name],
            |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                ))
            },
        )
        .optional()?;

    raw.map(|(region_id, region_name, country, state_province, multiplier, density)| {
        regional_pricing_from_row(
            region_id,
            region_name,
            country,
            state_province,
            multiplier,
            &density,
        )
    })
    .transpose()
}
