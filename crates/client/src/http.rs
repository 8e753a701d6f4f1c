// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP client wrapper and typed endpoint methods.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use adslot_domain::BookingStatus;

use crate::error::ClientError;
use crate::records::{
    ActiveAd, Booking, CalculatePricingRequest, CreateBookingRequest, LoginSession, Placement,
    Platform, PricingQuote, RegionalPricing, RegisteredAccount,
};

/// Error body shape for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Optional filters for the regional-pricing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionalPricingFilter {
    /// Exact region-name filter.
    pub region: Option<String>,
    /// Exact country filter.
    pub country: Option<String>,
    /// Exact state/province filter.
    pub state: Option<String>,
}

/// Builds the query pairs for a regional-pricing filter. The values go
/// through reqwest's query serializer, which percent-encodes them.
fn regional_pricing_query(filter: &RegionalPricingFilter) -> Vec<(&'static str, &str)> {
    let mut params: Vec<(&'static str, &str)> = Vec::new();
    if let Some(region) = &filter.region {
        params.push(("region", region));
    }
    if let Some(country) = &filter.country {
        params.push(("country", country));
    }
    if let Some(state) = &filter.state {
        params.push(("state", state));
    }
    params
}

/// Typed client for the AdSlot REST API.
///
/// Holds the base URL and, after login, the bearer token that is
/// attached to every request.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client for the given base URL (e.g.
    /// `http://127.0.0.1:3000/api`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Sets the bearer token attached to subsequent requests.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Clears the bearer token.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Whether a bearer token is currently set.
    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status: reqwest::StatusCode = response.status();
        if status.is_success() {
            let parsed: T = response
                .json()
                .await
                .map_err(|e| ClientError::UnexpectedResponse(e.to_string()))?;
            return Ok(parsed);
        }

        let message: String = response.json::<ErrorBody>().await.map_or_else(
            |_| String::from("Request failed"),
            |body| body.error,
        );
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        debug!(path = %path, "GET");
        let response: reqwest::Response =
            self.authorize(self.http.get(self.url(path))).send().await?;
        Self::handle_response(response).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        debug!(path = %path, "GET");
        let response: reqwest::Response = self
            .authorize(self.http.get(self.url(path)).query(query))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn post<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        debug!(path = %path, "POST");
        let response: reqwest::Response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn put<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        debug!(path = %path, "PUT");
        let response: reqwest::Response = self
            .authorize(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Registers a new advertiser account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the
    /// registration.
    pub async fn register(
        &self,
        email: &str,
        display_name: &str,
        password: &str,
    ) -> Result<RegisteredAccount, ClientError> {
        self.post(
            "/auth/register",
            &serde_json::json!({
                "email": email,
                "display_name": display_name,
                "password": password,
            }),
        )
        .await
    }

    /// Logs in and stores the returned bearer token on this client.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are
    /// rejected.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<LoginSession, ClientError> {
        let session: LoginSession = self
            .post(
                "/auth/login",
                &serde_json::json!({
                    "email": email,
                    "password": password,
                }),
            )
            .await?;
        self.set_token(session.token.clone());
        Ok(session)
    }

    /// Logs out and clears the stored token.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is set or the request fails.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        if self.token.is_none() {
            return Err(ClientError::NotAuthenticated);
        }
        let _ack: serde_json::Value = self.post("/auth/logout", &serde_json::json!({})).await?;
        self.clear_token();
        Ok(())
    }

    /// Lists all platforms with availability counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_platforms(&self) -> Result<Vec<Platform>, ClientError> {
        self.get("/ad-placements/platforms").await
    }

    /// Lists a platform's placements.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform is
    /// unknown.
    pub async fn list_placements(&self, platform: &str) -> Result<Vec<Placement>, ClientError> {
        self.get(&format!("/ad-placements/platforms/{platform}/placements"))
            .await
    }

    /// Lists a platform's currently running ads.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the platform is
    /// unknown.
    pub async fn list_active_ads(&self, platform: &str) -> Result<Vec<ActiveAd>, ClientError> {
        self.get(&format!("/ad-placements/platforms/{platform}/active-ads"))
            .await
    }

    /// Fetches the complete regional pricing table.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn all_regional_pricing(&self) -> Result<Vec<RegionalPricing>, ClientError> {
        self.get_with_query("/ad-placements/regional-pricing", &[("all", "true")])
            .await
    }

    /// Fetches regional pricing rows matching the given filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn regional_pricing(
        &self,
        filter: &RegionalPricingFilter,
    ) -> Result<Vec<RegionalPricing>, ClientError> {
        let params: Vec<(&str, &str)> = regional_pricing_query(filter);
        self.get_with_query("/ad-placements/regional-pricing", &params)
            .await
    }

    /// Requests a quote for a placement over a date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the input is rejected.
    pub async fn calculate_pricing(
        &self,
        request: &CalculatePricingRequest,
    ) -> Result<PricingQuote, ClientError> {
        self.post("/ad-placements/calculate-pricing", request).await
    }

    /// Books a placement. Requires a session token.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is set, the request fails, or the
    /// server rejects the booking.
    pub async fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<Booking, ClientError> {
        if self.token.is_none() {
            return Err(ClientError::NotAuthenticated);
        }
        self.post("/ad-placements/bookings", request).await
    }

    /// Lists the authenticated advertiser's bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is set or the request fails.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ClientError> {
        if self.token.is_none() {
            return Err(ClientError::NotAuthenticated);
        }
        self.get("/ad-placements/bookings").await
    }

    /// Moves a booking to a new status. Requires an admin session.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is set, the request fails, or the
    /// transition is rejected.
    pub async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<Booking, ClientError> {
        if self.token.is_none() {
            return Err(ClientError::NotAuthenticated);
        }
        self.put(
            &format!("/ad-placements/bookings/{booking_id}/status"),
            &serde_json::json!({ "status": status.as_str() }),
        )
        .await
    }
}
