// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use adslot_api::{
    ApiError, AuthenticatedActor, AuthenticationService, BookingResponse,
    CalculatePricingRequest, CreateBookingRequest, LoginRequest, LoginResponse,
    RegisterRequest, RegisterResponse, UpdateBookingStatusRequest, calculate_pricing,
    create_booking, list_active_ads, list_bookings, list_placements, list_platforms,
    list_regional_pricing, login, logout, register_advertiser,
};
use adslot_persistence::SqlitePersistence;

/// AdSlot Server - HTTP server for the ad placement booking panel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Seed the demo inventory, pricing table, and accounts on startup
    #[arg(long, default_value_t = false)]
    seed_demo: bool,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for inventory, accounts, and bookings.
    persistence: Arc<Mutex<SqlitePersistence>>,
}

/// Query parameters for the regional pricing endpoint.
#[derive(Debug, Deserialize)]
struct RegionalPricingQuery {
    /// Exact region-name filter.
    region: Option<String>,
    /// Exact country filter.
    country: Option<String>,
    /// Exact state/province filter.
    state: Option<String>,
    /// When true, ignore the other filters and return every row.
    all: Option<bool>,
}

/// API response for logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MessageResponse {
    /// A success message.
    message: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error message.
    error: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Extracts the bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, HttpError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: String::from("Missing or malformed Authorization header"),
        })
}

/// Validates the bearer token and returns the authenticated actor.
fn authenticate(
    persistence: &SqlitePersistence,
    headers: &HeaderMap,
) -> Result<AuthenticatedActor, HttpError> {
    let token: &str = bearer_token(headers)?;
    let (actor, _advertiser) =
        AuthenticationService::validate_session(persistence, token).map_err(|e| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: e.to_string(),
        })?;
    Ok(actor)
}

/// Handler for POST `/api/auth/register` endpoint.
async fn handle_register(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, HttpError> {
    info!(email = %req.email, "Handling register request");

    let persistence = app_state.persistence.lock().await;
    let response: RegisterResponse = register_advertiser(&persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/auth/login` endpoint.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(email = %req.email, "Handling login request");

    let persistence = app_state.persistence.lock().await;
    let response: LoginResponse = login(&persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/auth/logout` endpoint.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, HttpError> {
    let token: &str = bearer_token(&headers)?;

    let persistence = app_state.persistence.lock().await;
    logout(&persistence, token)?;
    drop(persistence);

    Ok(Json(MessageResponse {
        message: String::from("Logged out"),
    }))
}

/// Handler for GET `/api/ad-placements/platforms` endpoint.
async fn handle_list_platforms(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Response, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let platforms = list_platforms(&persistence)?;
    drop(persistence);

    Ok(Json(platforms).into_response())
}

/// Handler for GET `/api/ad-placements/platforms/{platform}/placements` endpoint.
async fn handle_list_placements(
    AxumState(app_state): AxumState<AppState>,
    Path(platform): Path<String>,
) -> Result<Response, HttpError> {
    info!(platform = %platform, "Handling list_placements request");

    let persistence = app_state.persistence.lock().await;
    let placements = list_placements(&persistence, &platform)?;
    drop(persistence);

    Ok(Json(placements).into_response())
}

/// Handler for GET `/api/ad-placements/platforms/{platform}/active-ads` endpoint.
async fn handle_list_active_ads(
    AxumState(app_state): AxumState<AppState>,
    Path(platform): Path<String>,
) -> Result<Response, HttpError> {
    info!(platform = %platform, "Handling list_active_ads request");

    let persistence = app_state.persistence.lock().await;
    let ads = list_active_ads(&persistence, &platform)?;
    drop(persistence);

    Ok(Json(ads).into_response())
}

/// Handler for GET `/api/ad-placements/regional-pricing` endpoint.
async fn handle_regional_pricing(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<RegionalPricingQuery>,
) -> Result<Response, HttpError> {
    let (region, country, state) = if query.all == Some(true) {
        (None, None, None)
    } else {
        (query.region, query.country, query.state)
    };

    let persistence = app_state.persistence.lock().await;
    let regions = list_regional_pricing(
        &persistence,
        region.as_deref(),
        country.as_deref(),
        state.as_deref(),
    )?;
    drop(persistence);

    Ok(Json(regions).into_response())
}

/// Handler for POST `/api/ad-placements/calculate-pricing` endpoint.
async fn handle_calculate_pricing(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CalculatePricingRequest>,
) -> Result<Response, HttpError> {
    info!(
        placement_id = req.placement_id,
        region = %req.region,
        "Handling calculate_pricing request"
    );

    let persistence = app_state.persistence.lock().await;
    let quote = calculate_pricing(&persistence, &req)?;
    drop(persistence);

    Ok(Json(quote).into_response())
}

/// Handler for POST `/api/ad-placements/bookings` endpoint.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&persistence, &headers)?;

    info!(
        placement_id = req.placement_id,
        advertiser_id = actor.advertiser_id,
        "Handling create_booking request"
    );

    let booking: BookingResponse = create_booking(&persistence, &actor, &req)?;
    drop(persistence);

    Ok(Json(booking))
}

/// Handler for GET `/api/ad-placements/bookings` endpoint.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&persistence, &headers)?;
    let bookings = list_bookings(&persistence, &actor)?;
    drop(persistence);

    Ok(Json(bookings).into_response())
}

/// Handler for PUT `/api/ad-placements/bookings/{id}/status` endpoint.
async fn handle_update_booking_status(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(&persistence, &headers)?;

    info!(
        booking_id = booking_id,
        status = %req.status,
        actor = %actor.email,
        "Handling update_booking_status request"
    );

    let booking: BookingResponse =
        adslot_api::update_booking_status(&persistence, &actor, booking_id, &req)?;
    drop(persistence);

    Ok(Json(booking))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/auth/register", post(handle_register))
        .route("/api/auth/login", post(handle_login))
        .route("/api/auth/logout", post(handle_logout))
        .route("/api/ad-placements/platforms", get(handle_list_platforms))
        .route(
            "/api/ad-placements/platforms/{platform}/placements",
            get(handle_list_placements),
        )
        .route(
            "/api/ad-placements/platforms/{platform}/active-ads",
            get(handle_list_active_ads),
        )
        .route(
            "/api/ad-placements/regional-pricing",
            get(handle_regional_pricing),
        )
        .route(
            "/api/ad-placements/calculate-pricing",
            post(handle_calculate_pricing),
        )
        .route(
            "/api/ad-placements/bookings",
            post(handle_create_booking).get(handle_list_bookings),
        )
        .route(
            "/api/ad-placements/bookings/{booking_id}/status",
            put(handle_update_booking_status),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing AdSlot Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    if args.seed_demo {
        persistence.seed_demo_data()?;
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adslot_api::{PlatformSummaryResponse, PricingQuoteResponse, RegionalPricingResponse};
    use adslot_domain::BookingStatus;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with seeded in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: SqlitePersistence =
            SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence");
        persistence
            .seed_demo_data()
            .expect("Failed to seed demo data");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    /// Helper to log in and return the session token.
    async fn login_for_token(app: &Router, email: &str, password: &str) -> String {
        let req_body: LoginRequest = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/login")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&req_body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let login_response: LoginResponse = serde_json::from_slice(&body_bytes).unwrap();
        login_response.token
    }

    /// Helper to create a test booking request body.
    fn create_test_booking_request(placement_id: i64) -> CreateBookingRequest {
        CreateBookingRequest {
            placement_id,
            campaign_name: String::from("Test Campaign"),
            ad_image_url: String::from("https://cdn.adslot.test/creatives/test.png"),
            ad_link_url: None,
            region: String::from("Chicago Metro"),
            postal_code: None,
            start_date: String::from("2024-05-01"),
            end_date: String::from("2024-06-30"),
        }
    }

    #[tokio::test]
    async fn test_list_platforms_returns_seeded_inventory() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/ad-placements/platforms")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let platforms: Vec<PlatformSummaryResponse> =
            serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(platforms.len(), 4);
        let facebook = platforms.iter().find(|p| p.name == "facebook").unwrap();
        assert_eq!(facebook.total_placements, 4);
        assert_eq!(facebook.booked_placements, 1);
    }

    #[tokio::test]
    async fn test_unknown_platform_returns_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/ad-placements/platforms/myspace/placements")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert!(error_response.error.contains("myspace"));
    }

    #[tokio::test]
    async fn test_regional_pricing_country_filter() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/ad-placements/regional-pricing?country=USA")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let regions: Vec<RegionalPricingResponse> = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(regions.len(), 6);
    }

    #[tokio::test]
    async fn test_regional_pricing_all_overrides_filters() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/ad-placements/regional-pricing?country=USA&all=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let regions: Vec<RegionalPricingResponse> = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(regions.len(), 8);
    }

    #[tokio::test]
    async fn test_calculate_pricing_endpoint() {
        let app: Router = build_router(create_test_app_state());

        let req_body: CalculatePricingRequest = CalculatePricingRequest {
            placement_id: 2,
            region: String::from("New York Metro"),
            start_date: String::from("2024-01-01"),
            end_date: String::from("2024-03-31"),
        };

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ad-placements/calculate-pricing")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&req_body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let quote: PricingQuoteResponse = serde_json::from_slice(&body_bytes).unwrap();

        assert!((quote.monthly_price - 300.0).abs() < f64::EPSILON);
        assert_eq!(quote.duration_months, 3);
        assert!((quote.total_price - 900.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_create_booking_requires_token() {
        let app: Router = build_router(create_test_app_state());

        let req_body: CreateBookingRequest = create_test_booking_request(2);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ad-placements/bookings")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&req_body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_and_create_booking_flow() {
        let app: Router = build_router(create_test_app_state());
        let token: String =
            login_for_token(&app, "demo@adslot.test", "demo-advertiser-password").await;

        let req_body: CreateBookingRequest = create_test_booking_request(2);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ad-placements/bookings")
                    .header("content-type", "application/json")
                    .header("authorization", format!("Bearer {token}"))
                    .body(Body::from(serde_json::to_string(&req_body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let booking: BookingResponse = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert!((booking.monthly_price - 225.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_booked_placement_returns_unprocessable() {
        let app: Router = build_router(create_test_app_state());
        let token: String =
            login_for_token(&app, "demo@adslot.test", "demo-advertiser-password").await;

        // Placement 1 carries the seeded active campaign.
        let req_body: CreateBookingRequest = create_test_booking_request(1);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ad-placements/bookings")
                    .header("content-type", "application/json")
                    .header("authorization", format!("Bearer {token}"))
                    .body(Body::from(serde_json::to_string(&req_body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_booking_status_requires_admin() {
        let app: Router = build_router(create_test_app_state());
        let token: String =
            login_for_token(&app, "demo@adslot.test", "demo-advertiser-password").await;

        // Seeded booking 1 belongs to the demo advertiser.
        let req_body: UpdateBookingStatusRequest = UpdateBookingStatusRequest {
            status: String::from("paused"),
        };

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/ad-placements/bookings/1/status")
                    .header("content-type", "application/json")
                    .header("authorization", format!("Bearer {token}"))
                    .body(Body::from(serde_json::to_string(&req_body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_can_approve_booking() {
        let app: Router = build_router(create_test_app_state());
        let advertiser_token: String =
            login_for_token(&app, "demo@adslot.test", "demo-advertiser-password").await;
        let admin_token: String =
            login_for_token(&app, "admin@adslot.test", "demo-admin-password").await;

        // Create a pending booking as the advertiser.
        let create_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ad-placements/bookings")
                    .header("content-type", "application/json")
                    .header("authorization", format!("Bearer {advertiser_token}"))
                    .body(Body::from(
                        serde_json::to_string(&create_test_booking_request(2)).unwrap(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(create_response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(create_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let booking: BookingResponse = serde_json::from_slice(&body_bytes).unwrap();

        // Approve it as the admin.
        let req_body: UpdateBookingStatusRequest = UpdateBookingStatusRequest {
            status: String::from("approved"),
        };
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/ad-placements/bookings/{}/status", booking.id))
                    .header("content-type", "application/json")
                    .header("authorization", format!("Bearer {admin_token}"))
                    .body(Body::from(serde_json::to_string(&req_body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let updated: BookingResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(updated.status, BookingStatus::Approved);
    }

    #[tokio::test]
    async fn test_list_bookings_requires_token() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/ad-placements/bookings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_list_bookings_returns_own_bookings() {
        let app: Router = build_router(create_test_app_state());
        let token: String =
            login_for_token(&app, "demo@adslot.test", "demo-advertiser-password").await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/ad-placements/bookings")
                    .header("authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let bookings: Vec<BookingResponse> = serde_json::from_slice(&body_bytes).unwrap();

        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].campaign_name, "Spring Launch");
    }

    #[tokio::test]
    async fn test_register_weak_password_returns_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let req_body: RegisterRequest = RegisterRequest {
            email: String::from("weak@adslot.test"),
            display_name: String::from("Weak Password"),
            password: String::from("short"),
        };

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/register")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&req_body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_logout_invalidates_token() {
        let app: Router = build_router(create_test_app_state());
        let token: String =
            login_for_token(&app, "demo@adslot.test", "demo-advertiser-password").await;

        let logout_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/logout")
                    .header("authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(logout_response.status(), HttpStatusCode::OK);

        // The token no longer works.
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/ad-placements/bookings")
                    .header("authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }
}
