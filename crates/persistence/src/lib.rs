// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the AdSlot booking system.
//!
//! This crate provides `SQLite` persistence for the ad inventory
//! (platforms and placement slots), regional pricing multipliers,
//! advertiser accounts with sessions, and bookings. It is built
//! directly on `rusqlite`; the schema is created at connection time.
//!
//! Placement availability is never stored. A placement counts as booked
//! exactly while a booking in a non-terminal status (anything other
//! than `completed` or `rejected`) references it, and every query that
//! reports availability derives it from the bookings table.
//!
//! Tests run against in-memory databases (`new_in_memory`), which are
//! fully isolated per connection.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use rusqlite::Connection;

use adslot_domain::BookingStatus;

mod data_models;
mod error;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{
    ActiveAdData, AdvertiserData, BookingData, NewBookingData, PlacementData,
    PlatformSummaryData, RegionalPricingData, SessionData,
};
pub use error::PersistenceError;
pub use sqlite::initialize_schema;

/// `SQLite` persistence adapter.
///
/// Owns the database connection. Callers that share an instance across
/// threads wrap it in a mutex; `rusqlite` connections are not `Sync`.
pub struct SqlitePersistence {
    conn: Connection,
}

impl SqlitePersistence {
    /// Creates a persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a private database instance, ensuring test
    /// isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open_in_memory()
            .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;
        sqlite::initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Creates a persistence adapter with a file-based `SQLite` database.
    ///
    /// Enables WAL mode for better read concurrency.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open(path)
            .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;
        let _mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        sqlite::initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Seeds the demo inventory, pricing table, and accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if seeding fails (e.g. the database already
    /// holds the demo rows).
    pub fn seed_demo_data(&self) -> Result<(), PersistenceError> {
        sqlite::seed::seed_demo_data(&self.conn)
    }

    // ========================================================================
    // Advertiser accounts & sessions
    // ========================================================================

    /// Creates a new advertiser account. The password is bcrypt-hashed.
    ///
    /// # Errors
    ///
    /// Returns an error if the account cannot be created or the email
    /// already exists.
    pub fn create_advertiser(
        &self,
        email: &str,
        display_name: &str,
        password: &str,
        role: &str,
    ) -> Result<i64, PersistenceError> {
        sqlite::advertisers::create_advertiser(&self.conn, email, display_name, password, role)
    }

    /// Retrieves an advertiser by email (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_advertiser_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdvertiserData>, PersistenceError> {
        sqlite::advertisers::get_advertiser_by_email(&self.conn, email)
    }

    /// Retrieves an advertiser by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_advertiser_by_id(
        &self,
        advertiser_id: i64,
    ) -> Result<Option<AdvertiserData>, PersistenceError> {
        sqlite::advertisers::get_advertiser_by_id(&self.conn, advertiser_id)
    }

    /// Updates the last login timestamp for an advertiser.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_last_login(&self, advertiser_id: i64) -> Result<(), PersistenceError> {
        sqlite::advertisers::update_last_login(&self.conn, advertiser_id)
    }

    /// Creates a new session for an advertiser.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn create_session(
        &self,
        session_token: &str,
        advertiser_id: i64,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        sqlite::advertisers::create_session(&self.conn, session_token, advertiser_id, expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_session_by_token(
        &self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        sqlite::advertisers::get_session_by_token(&self.conn, session_token)
    }

    /// Updates the last activity timestamp for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_session_activity(&self, session_id: i64) -> Result<(), PersistenceError> {
        sqlite::advertisers::update_session_activity(&self.conn, session_id)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_session(&self, session_token: &str) -> Result<(), PersistenceError> {
        sqlite::advertisers::delete_session(&self.conn, session_token)
    }

    // ========================================================================
    // Ad inventory & regional pricing
    // ========================================================================

    /// Lists all platforms with placement availability counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_platforms(&self) -> Result<Vec<PlatformSummaryData>, PersistenceError> {
        sqlite::catalog::list_platforms(&self.conn)
    }

    /// Checks whether a platform exists by its key.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn platform_exists(&self, platform_name: &str) -> Result<bool, PersistenceError> {
        sqlite::catalog::platform_exists(&self.conn, platform_name)
    }

    /// Lists a platform's placements with derived availability.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or stored data is invalid.
    pub fn list_placements(
        &self,
        platform_name: &str,
    ) -> Result<Vec<PlacementData>, PersistenceError> {
        sqlite::catalog::list_placements(&self.conn, platform_name)
    }

    /// Retrieves a single placement by ID with derived availability.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or stored data is invalid.
    pub fn get_placement(
        &self,
        placement_id: i64,
    ) -> Result<Option<PlacementData>, PersistenceError> {
        sqlite::catalog::get_placement(&self.conn, placement_id)
    }

    /// Lists a platform's currently active ads.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or stored data is invalid.
    pub fn list_active_ads(
        &self,
        platform_name: &str,
    ) -> Result<Vec<ActiveAdData>, PersistenceError> {
        sqlite::catalog::list_active_ads(&self.conn, platform_name)
    }

    /// Lists regional pricing rows, optionally filtered by region name,
    /// country, and state/province.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or stored data is invalid.
    pub fn list_regional_pricing(
        &self,
        region: Option<&str>,
        country: Option<&str>,
        state: Option<&str>,
    ) -> Result<Vec<RegionalPricingData>, PersistenceError> {
        sqlite::catalog::list_regional_pricing(&self.conn, region, country, state)
    }

    /// Retrieves a regional pricing row by exact region name
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or stored data is invalid.
    pub fn get_region_by_name(
        &self,
        region_name: &str,
    ) -> Result<Option<RegionalPricingData>, PersistenceError> {
        sqlite::catalog::get_region_by_name(&self.conn, region_name)
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Inserts a new booking in `pending` status and returns the stored
    /// row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_booking(
        &self,
        new_booking: &NewBookingData,
    ) -> Result<BookingData, PersistenceError> {
        sqlite::bookings::insert_booking(&self.conn, new_booking)
    }

    /// Retrieves a booking by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or stored data is invalid.
    pub fn get_booking(&self, booking_id: i64) -> Result<Option<BookingData>, PersistenceError> {
        sqlite::bookings::get_booking(&self.conn, booking_id)
    }

    /// Lists an advertiser's bookings, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or stored data is invalid.
    pub fn list_bookings_by_advertiser(
        &self,
        advertiser_id: i64,
    ) -> Result<Vec<BookingData>, PersistenceError> {
        sqlite::bookings::list_bookings_by_advertiser(&self.conn, advertiser_id)
    }

    /// Updates a booking's status. Transition validity is enforced by
    /// the API layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails or the booking does not
    /// exist.
    pub fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<(), PersistenceError> {
        sqlite::bookings::update_booking_status(&self.conn, booking_id, status)
    }

    /// Sets the performance counters on a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn set_booking_performance(
        &self,
        booking_id: i64,
        impressions: i64,
        clicks: i64,
    ) -> Result<(), PersistenceError> {
        sqlite::bookings::set_booking_performance(&self.conn, booking_id, impressions, clicks)
    }
}
