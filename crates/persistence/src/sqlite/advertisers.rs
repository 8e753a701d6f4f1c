// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Advertiser account and session persistence functions.

use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use crate::data_models::{AdvertiserData, SessionData};
use crate::error::PersistenceError;

/// Creates a new advertiser account.
///
/// The password is hashed with bcrypt before storage. Emails are stored
/// case-insensitively unique.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `email` - The login email
/// * `display_name` - The display name
/// * `password` - The plaintext password (hashed here, never stored)
/// * `role` - The role (`admin` or `advertiser`)
///
/// # Errors
///
/// Returns an error if the account cannot be created or if the email
/// already exists.
pub fn create_advertiser(
    conn: &Connection,
    email: &str,
    display_name: &str,
    password: &str,
    role: &str,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating advertiser with email: {}, display_name: {}, role: {}",
        email, display_name, role
    );

    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    conn.execute(
        "INSERT INTO advertisers (email, display_name, password_hash, role)
         VALUES (?1, ?2, ?3, ?4)",
        params![email, display_name, password_hash, role],
    )?;

    let advertiser_id: i64 = conn.last_insert_rowid();
    info!("Created advertiser with ID: {}", advertiser_id);

    Ok(advertiser_id)
}

/// Retrieves an advertiser by email.
///
/// Lookup is case-insensitive.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `email` - The email to search for
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the advertiser is not found.
pub fn get_advertiser_by_email(
    conn: &Connection,
    email: &str,
) -> Result<Option<AdvertiserData>, PersistenceError> {
    debug!("Looking up advertiser by email: {}", email);

    let result: Option<AdvertiserData> = conn
        .query_row(
            "SELECT advertiser_id, email, display_name, password_hash, role, is_disabled,
                    created_at, last_login_at
             FROM advertisers
             WHERE email = ?1",
            params![email],
            |row| {
                Ok(AdvertiserData {
                    advertiser_id: row.get(0)?,
                    email: row.get(1)?,
                    display_name: row.get(2)?,
                    password_hash: row.get(3)?,
                    role: row.get(4)?,
                    is_disabled: row.get::<_, i32>(5)? != 0,
                    created_at: row.get(6)?,
                    last_login_at: row.get(7)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}

/// Retrieves an advertiser by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `advertiser_id` - The advertiser ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the advertiser is not found.
pub fn get_advertiser_by_id(
    conn: &Connection,
    advertiser_id: i64,
) -> Result<Option<AdvertiserData>, PersistenceError> {
    debug!("Looking up advertiser by ID: {}", advertiser_id);

    let result: Option<AdvertiserData> = conn
        .query_row(
            "SELECT advertiser_id, email, display_name, password_hash, role, is_disabled,
                    created_at, last_login_at
             FROM advertisers
             WHERE advertiser_id = ?1",
            params![advertiser_id],
            |row| {
                Ok(AdvertiserData {
                    advertiser_id: row.get(0)?,
                    email: row.get(1)?,
                    display_name: row.get(2)?,
                    password_hash: row.get(3)?,
                    role: row.get(4)?,
                    is_disabled: row.get::<_, i32>(5)? != 0,
                    created_at: row.get(6)?,
                    last_login_at: row.get(7)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}

/// Updates the last login timestamp for an advertiser.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `advertiser_id` - The advertiser ID
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_last_login(conn: &Connection, advertiser_id: i64) -> Result<(), PersistenceError> {
    debug!("Updating last_login_at for advertiser ID: {}", advertiser_id);

    conn.execute(
        "UPDATE advertisers SET last_login_at = CURRENT_TIMESTAMP WHERE advertiser_id = ?1",
        params![advertiser_id],
    )?;

    Ok(())
}

/// Creates a new session for an advertiser.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The unique session token
/// * `advertiser_id` - The advertiser ID
/// * `expires_at` - The expiration timestamp (ISO 8601 format)
///
/// # Errors
///
/// Returns an error if the session cannot be created.
pub fn create_session(
    conn: &Connection,
    session_token: &str,
    advertiser_id: i64,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    debug!(
        "Creating session for advertiser ID: {} with expiration: {}",
        advertiser_id, expires_at
    );

    conn.execute(
        "INSERT INTO sessions (session_token, advertiser_id, expires_at)
         VALUES (?1, ?2, ?3)",
        params![session_token, advertiser_id, expires_at],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Retrieves a session by token.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The session token
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the session is not found.
pub fn get_session_by_token(
    conn: &Connection,
    session_token: &str,
) -> Result<Option<SessionData>, PersistenceError> {
    debug!("Looking up session by token");

    let result: Option<SessionData> = conn
        .query_row(
            "SELECT session_id, session_token, advertiser_id, created_at,
                    last_activity_at, expires_at
             FROM sessions
             WHERE session_token = ?1",
            params![session_token],
            |row| {
                Ok(SessionData {
                    session_id: row.get(0)?,
                    session_token: row.get(1)?,
                    advertiser_id: row.get(2)?,
                    created_at: row.get(3)?,
                    last_activity_at: row.get(4)?,
                    expires_at: row.get(5)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}

/// Updates the last activity timestamp for a session.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_id` - The session ID
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_session_activity(conn: &Connection, session_id: i64) -> Result<(), PersistenceError> {
    conn.execute(
        "UPDATE sessions SET last_activity_at = CURRENT_TIMESTAMP WHERE session_id = ?1",
        params![session_id],
    )?;

    Ok(())
}

/// Deletes a session by token.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The session token to delete
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_session(conn: &Connection, session_token: &str) -> Result<(), PersistenceError> {
    debug!("Deleting session");

    conn.execute(
        "DELETE FROM sessions WHERE session_token = ?1",
        params![session_token],
    )?;

    Ok(())
}
