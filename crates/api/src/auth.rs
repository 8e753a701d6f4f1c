// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use time::{Duration, OffsetDateTime};

use adslot_persistence::{AdvertiserData, PersistenceError, SessionData, SqlitePersistence};

use crate::error::AuthError;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Admin role: reviews bookings and moves them through the status
    /// lifecycle.
    Admin,
    /// Advertiser role: browses inventory, requests quotes, and books
    /// placements. May only see their own bookings.
    Advertiser,
}

impl Role {
    /// Parses a stored role column value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a known role.
    pub fn from_db_value(value: &str) -> Result<Self, AuthError> {
        match value {
            "admin" => Ok(Self::Admin),
            "advertiser" => Ok(Self::Advertiser),
            _ => Err(AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {value}"),
            }),
        }
    }

    /// Converts this role to its stored representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Advertiser => "advertiser",
        }
    }
}

/// An authenticated actor with an associated role.
///
/// This represents an account holder who has presented a valid session
/// token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The account's canonical numeric identifier.
    pub advertiser_id: i64,
    /// The account email.
    pub email: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `advertiser_id` - The account identifier
    /// * `email` - The account email
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(advertiser_id: i64, email: String, role: Role) -> Self {
        Self {
            advertiser_id,
            email,
            role,
        }
    }
}

/// Authorization service for enforcing role-based access control.
///
/// This service determines whether an authenticated actor has permission
/// to perform a specific action based on their role.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor is authorized to create a booking.
    ///
    /// Both Admin and Advertiser actors may create bookings.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have permission.
    pub const fn authorize_create_booking(_actor: &AuthenticatedActor) -> Result<(), AuthError> {
        // Any authenticated account may book placements
        Ok(())
    }

    /// Checks if an actor is authorized to change a booking's status.
    ///
    /// Only Admin actors may move bookings through the lifecycle.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_update_booking_status(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Advertiser => Err(AuthError::Unauthorized {
                action: String::from("update_booking_status"),
                required_role: String::from("admin"),
            }),
        }
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Registers a new advertiser account.
    ///
    /// Password policy is the caller's responsibility; this service
    /// only checks basic field shape and email uniqueness.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `email` - The login email
    /// * `display_name` - The display name
    /// * `password` - The plaintext password
    ///
    /// # Returns
    ///
    /// The created account's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is taken, the password violates
    /// policy, or the account cannot be created.
    pub fn register(
        persistence: &SqlitePersistence,
        email: &str,
        display_name: &str,
        password: &str,
    ) -> Result<AdvertiserData, AuthError> {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("A valid email address is required"),
            });
        }
        if display_name.trim().is_empty() {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Display name cannot be empty"),
            });
        }

        if persistence
            .get_advertiser_by_email(email)
            .map_err(Self::map_persistence_error)?
            .is_some()
        {
            return Err(AuthError::AuthenticationFailed {
                reason: format!("An account already exists for {email}"),
            });
        }

        let advertiser_id: i64 = persistence
            .create_advertiser(email, display_name, password, Role::Advertiser.as_str())
            .map_err(Self::map_persistence_error)?;

        persistence
            .get_advertiser_by_id(advertiser_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Account missing after registration"),
            })
    }

    /// Authenticates an advertiser and creates a session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `email` - The account email
    /// * `password` - The plaintext password
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_actor`, `advertiser_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if authentication fails.
    pub fn login(
        persistence: &SqlitePersistence,
        email: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedActor, AdvertiserData), AuthError> {
        let advertiser: AdvertiserData = persistence
            .get_advertiser_by_email(email)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid email or password"),
            })?;

        if advertiser.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Account is disabled"),
            });
        }

        let password_matches: bool = bcrypt::verify(password, &advertiser.password_hash)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to verify password: {e}"),
            })?;
        if !password_matches {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Invalid email or password"),
            });
        }

        let role: Role = Role::from_db_value(&advertiser.role)?;

        let session_token: String = Self::generate_session_token();

        let expires_at: OffsetDateTime =
            OffsetDateTime::now_utc() + Self::DEFAULT_SESSION_EXPIRATION;
        let expires_at_str: String = expires_at
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            })?;

        persistence
            .create_session(&session_token, advertiser.advertiser_id, &expires_at_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        persistence
            .update_last_login(advertiser.advertiser_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update last login: {e}"),
            })?;

        let authenticated_actor: AuthenticatedActor =
            AuthenticatedActor::new(advertiser.advertiser_id, advertiser.email.clone(), role);

        Ok((session_token, authenticated_actor, advertiser))
    }

    /// Validates a session token and returns the authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to validate
    ///
    /// # Returns
    ///
    /// A tuple of (`authenticated_actor`, `advertiser_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the session is invalid or expired.
    pub fn validate_session(
        persistence: &SqlitePersistence,
        session_token: &str,
    ) -> Result<(AuthenticatedActor, AdvertiserData), AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Iso8601::DEFAULT,
        )
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to parse session expiration: {e}"),
        })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let advertiser: AdvertiserData = persistence
            .get_advertiser_by_id(session.advertiser_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Account not found"),
            })?;

        if advertiser.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Account is disabled"),
            });
        }

        let role: Role = Role::from_db_value(&advertiser.role)?;

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        let authenticated_actor: AuthenticatedActor =
            AuthenticatedActor::new(advertiser.advertiser_id, advertiser.email.clone(), role);

        Ok((authenticated_actor, advertiser))
    }

    /// Logs out by deleting the session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to delete
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(
        persistence: &SqlitePersistence,
        session_token: &str,
    ) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;

        Ok(())
    }

    /// Generates a session token.
    ///
    /// Combines a nanosecond timestamp with random bits so tokens are
    /// unique and not guessable from the clock alone.
    fn generate_session_token() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp: u128 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: PersistenceError) -> AuthError {
        match err {
            PersistenceError::SessionExpired(msg) | PersistenceError::SessionNotFound(msg) => {
                AuthError::AuthenticationFailed { reason: msg }
            }
            _ => AuthError::AuthenticationFailed {
                reason: format!("Database error: {err}"),
            },
        }
    }
}
