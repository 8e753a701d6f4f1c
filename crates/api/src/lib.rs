// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the AdSlot booking system.
//!
//! This crate owns the wire contract: request/response DTOs, the
//! authentication and authorization services, and the operation
//! functions that validate input, apply domain rules, and talk to the
//! persistence layer. Lower-layer errors are translated explicitly and
//! never leak across the boundary.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, Role};
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    ApiResult, calculate_pricing, create_booking, list_active_ads, list_bookings,
    list_placements, list_platforms, list_regional_pricing, login, logout, register_advertiser,
    update_booking_status,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    ActiveAdResponse, BookingResponse, CalculatePricingRequest, CreateBookingRequest,
    LoginRequest, LoginResponse, PlacementResponse, PlatformSummaryResponse,
    PricingQuoteResponse, RegionalPricingResponse, RegisterRequest, RegisterResponse,
    UpdateBookingStatusRequest,
};
