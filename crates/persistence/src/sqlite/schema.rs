// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rusqlite::Connection;
use tracing::info;

use crate::error::PersistenceError;

/// Initializes the database schema.
///
/// # Arguments
///
/// * `conn` - The database connection to initialize
///
/// # Errors
///
/// Returns an error if schema creation fails.
pub fn initialize_schema(conn: &Connection) -> Result<(), PersistenceError> {
    info!("Initializing database schema");

    // Enable foreign key enforcement
    conn.execute("PRAGMA foreign_keys = ON", [])?;

    conn.execute_batch(
        "
        -- Advertiser accounts and sessions
        CREATE TABLE IF NOT EXISTS advertisers (
            advertiser_id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE COLLATE NOCASE,
            display_name TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'advertiser'
                CHECK(role IN ('admin', 'advertiser')),
            is_disabled INTEGER NOT NULL DEFAULT 0 CHECK(is_disabled IN (0, 1)),
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            last_login_at DATETIME
        );

        CREATE TABLE IF NOT EXISTS sessions (
            session_id INTEGER PRIMARY KEY AUTOINCREMENT,
            session_token TEXT NOT NULL UNIQUE,
            advertiser_id INTEGER NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            last_activity_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            expires_at DATETIME NOT NULL,
            FOREIGN KEY(advertiser_id) REFERENCES advertisers(advertiser_id)
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_token
            ON sessions(session_token);

        CREATE INDEX IF NOT EXISTS idx_sessions_advertiser
            ON sessions(advertiser_id);

        -- Ad inventory
        CREATE TABLE IF NOT EXISTS platforms (
            platform_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            display_name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS placements (
            placement_id INTEGER PRIMARY KEY AUTOINCREMENT,
            platform_id INTEGER NOT NULL,
            placement_type TEXT NOT NULL
                CHECK(placement_type IN ('leaderboard', 'skyscraper', 'rectangle', 'sidebar')),
            position_name TEXT NOT NULL,
            width INTEGER NOT NULL CHECK(width > 0),
            height INTEGER NOT NULL CHECK(height > 0),
            base_price REAL NOT NULL CHECK(base_price >= 0),
            description TEXT NOT NULL DEFAULT '',
            UNIQUE(platform_id, position_name),
            FOREIGN KEY(platform_id) REFERENCES platforms(platform_id)
        );

        CREATE INDEX IF NOT EXISTS idx_placements_by_platform
            ON placements(platform_id);

        -- Regional pricing multipliers
        CREATE TABLE IF NOT EXISTS regional_pricing (
            region_id INTEGER PRIMARY KEY AUTOINCREMENT,
            region_name TEXT NOT NULL UNIQUE COLLATE NOCASE,
            country TEXT NOT NULL,
            state_province TEXT,
            price_multiplier REAL NOT NULL CHECK(price_multiplier >= 1.0),
            population_density TEXT NOT NULL
                CHECK(population_density IN ('low', 'medium', 'high', 'very_high'))
        );

        -- Bookings; availability is derived from non-terminal rows
        CREATE TABLE IF NOT EXISTS bookings (
            booking_id INTEGER PRIMARY KEY AUTOINCREMENT,
            placement_id INTEGER NOT NULL,
            advertiser_id INTEGER NOT NULL,
            campaign_name TEXT NOT NULL,
            ad_image_url TEXT NOT NULL,
            ad_link_url TEXT,
            region TEXT NOT NULL,
            postal_code TEXT,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            monthly_price REAL NOT NULL CHECK(monthly_price >= 0),
            total_price REAL NOT NULL CHECK(total_price >= 0),
            status TEXT NOT NULL DEFAULT 'pending'
                CHECK(status IN ('pending', 'approved', 'active', 'paused', 'completed', 'rejected')),
            impressions INTEGER NOT NULL DEFAULT 0 CHECK(impressions >= 0),
            clicks INTEGER NOT NULL DEFAULT 0 CHECK(clicks >= 0),
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(placement_id) REFERENCES placements(placement_id),
            FOREIGN KEY(advertiser_id) REFERENCES advertisers(advertiser_id)
        );

        CREATE INDEX IF NOT EXISTS idx_bookings_by_advertiser
            ON bookings(advertiser_id);

        CREATE INDEX IF NOT EXISTS idx_bookings_by_placement_status
            ON bookings(placement_id, status);
        ",
    )?;

    Ok(())
}
