// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo data seeding.
//!
//! Populates a fresh database with the demo inventory: four social
//! platforms with their placement slots, the regional pricing table,
//! two demo accounts, and one running campaign so the active-ads
//! endpoint has something to show.

use rusqlite::{Connection, params};
use tracing::info;

use adslot_domain::BookingStatus;

use crate::data_models::NewBookingData;
use crate::error::PersistenceError;
use crate::sqlite::advertisers::create_advertiser;
use crate::sqlite::bookings::{insert_booking, set_booking_performance, update_booking_status};

/// Platform key, display name, and placement slots
/// (type, position, width, height, base monthly price).
type PlatformSeed = (
    &'static str,
    &'static str,
    &'static [(&'static str, &'static str, i64, i64, f64)],
);

const PLATFORMS: &[PlatformSeed] = &[
    (
        "facebook",
        "Facebook",
        &[
            ("leaderboard", "top_1", 728, 90, 150.0),
            ("leaderboard", "top_2", 728, 90, 150.0),
            ("skyscraper", "side_1", 160, 600, 120.0),
            ("skyscraper", "side_2", 160, 600, 120.0),
        ],
    ),
    (
        "instagram",
        "Instagram",
        &[
            ("rectangle", "feed_1", 300, 250, 90.0),
            ("rectangle", "feed_2", 300, 250, 90.0),
            ("sidebar", "side_1", 300, 600, 110.0),
        ],
    ),
    (
        "youtube",
        "YouTube",
        &[
            ("leaderboard", "top_1", 728, 90, 160.0),
            ("rectangle", "side_1", 300, 250, 100.0),
        ],
    ),
    (
        "tiktok",
        "TikTok",
        &[
            ("rectangle", "feed_1", 300, 250, 95.0),
            ("sidebar", "side_1", 300, 600, 85.0),
        ],
    ),
];

/// Region name, country, state/province, multiplier, density.
const REGIONS: &[(&str, &str, Option<&str>, f64, &str)] = &[
    ("New York Metro", "USA", Some("NY"), 2.0, "very_high"),
    ("Los Angeles County", "USA", Some("CA"), 1.8, "very_high"),
    ("Chicago Metro", "USA", Some("IL"), 1.5, "high"),
    ("Houston Metro", "USA", Some("TX"), 1.3, "high"),
    ("Phoenix Metro", "USA", Some("AZ"), 1.2, "medium"),
    ("Rural Midwest", "USA", None, 1.0, "low"),
    ("London Metro", "UK", None, 1.7, "very_high"),
    ("Toronto Metro", "Canada", Some("ON"), 1.4, "high"),
];

/// Seeds the demo inventory, pricing table, and accounts.
///
/// Intended for fresh databases only; seeding twice fails on the unique
/// platform and region constraints.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if any insert fails.
#[allow(clippy::too_many_lines)]
pub fn seed_demo_data(conn: &Connection) -> Result<(), PersistenceError> {
    info!("Seeding demo data");

    for (name, display_name, placements) in PLATFORMS {
        conn.execute(
            "INSERT INTO platforms (name, display_name) VALUES (?1, ?2)",
            params![name, display_name],
        )?;
        let platform_id: i64 = conn.last_insert_rowid();

        for (placement_type, position_name, width, height, base_price) in *placements {
            conn.execute(
                "INSERT INTO placements (platform_id, placement_type, position_name,
                                         width, height, base_price, description)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    platform_id,
                    placement_type,
                    position_name,
                    width,
                    height,
                    base_price,
                    format!("{display_name} {placement_type} slot {position_name}"),
                ],
            )?;
        }
    }

    for (region_name, country, state_province, multiplier, density) in REGIONS {
        conn.execute(
            "INSERT INTO regional_pricing (region_name, country, state_province,
                                           price_multiplier, population_density)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![region_name, country, state_province, multiplier, density],
        )?;
    }

    let _admin_id: i64 = create_advertiser(
        conn,
        "admin@adslot.test",
        "Demo Admin",
        "demo-admin-password",
        "admin",
    )?;
    let advertiser_id: i64 = create_advertiser(
        conn,
        "demo@adslot.test",
        "Demo Advertiser",
        "demo-advertiser-password",
        "advertiser",
    )?;

    // One running campaign on the first Facebook leaderboard.
    let placement_id: i64 = conn.query_row(
        "SELECT pl.placement_id
         FROM placements pl
         JOIN platforms pf ON pf.platform_id = pl.platform_id
         WHERE pf.name = 'facebook' AND pl.position_name = 'top_1'",
        [],
        |row| row.get(0),
    )?;

    let booking = insert_booking(
        conn,
        &NewBookingData {
            placement_id,
            advertiser_id,
            campaign_name: String::from("Spring Launch"),
            ad_image_url: String::from("https://cdn.adslot.test/creatives/spring-launch.png"),
            ad_link_url: Some(String::from("https://example.com/spring")),
            region: String::from("New York Metro"),
            postal_code: None,
            start_date: String::from("2024-01-01"),
            end_date: String::from("2024-03-31"),
            monthly_price: 300.0,
            total_price: 900.0,
        },
    )?;
    update_booking_status(conn, booking.booking_id, BookingStatus::Active)?;
    set_booking_performance(conn, booking.booking_id, 45_210, 1_318)?;

    info!("Demo data seeded");

    Ok(())
}
