//! Reservation API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::api::{AuthApi, ReservationsApi, RoomsApi};
use super::models::{
    AccessToken, Credentials, NewReservation, NewRoom, Reservation, Room, UserProfile,
};
use crate::error::{ApiError, Result};

/// HTTP client for the reservation backend.
///
/// Holds no session state; protected calls take the bearer token explicitly
/// so the session store stays the single owner of it.
pub struct ReservationClient {
    http: HttpClient,
    base_url: String,
}

impl ReservationClient {
    /// Create a client for the API at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    fn authed(&self, method: reqwest::Method, path: &str, token: &str) -> RequestBuilder {
        self.request(method, path).bearer_auth(token)
    }

    /// Send a request and decode a JSON body
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = Self::send(request).await?;
        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }

    /// Send a request, discarding the body of a successful response
    async fn send_unit(&self, request: RequestBuilder) -> Result<()> {
        Self::send(request).await?;
        Ok(())
    }

    async fn send(request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = error_detail(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected status")
                .to_string()
        });
        log::debug!("API responded {}: {}", status, detail);

        Err(status_error(status, detail).into())
    }
}

/// Map a non-success status to an [`ApiError`]
fn status_error(status: StatusCode, detail: String) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized(detail),
        StatusCode::FORBIDDEN => ApiError::Forbidden(detail),
        StatusCode::NOT_FOUND => ApiError::NotFound(detail),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::BadRequest(detail),
        status if status.is_server_error() => ApiError::ServerError(detail),
        status => ApiError::InvalidResponse(format!("Unexpected status code {}: {}", status, detail)),
    }
}

/// Extract the human-readable message from an error body.
///
/// The backend answers `{"detail": "..."}` for handled errors and
/// `{"detail": [{"msg": "...", ...}]}` for validation failures.
fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return Some(body.to_string()),
    };

    match value.get("detail") {
        Some(serde_json::Value::String(msg)) => Some(msg.clone()),
        Some(serde_json::Value::Array(items)) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() {
                Some(body.to_string())
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => Some(body.to_string()),
    }
}

#[async_trait]
impl AuthApi for ReservationClient {
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken> {
        let request = self
            .request(reqwest::Method::POST, "/auth/login")
            .json(credentials);
        self.send_json(request).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<()> {
        let request = self
            .request(reqwest::Method::POST, "/auth/register")
            .json(credentials);
        self.send_unit(request).await
    }

    async fn current_user(&self, token: &str) -> Result<UserProfile> {
        let request = self.authed(reqwest::Method::GET, "/auth/me", token);
        self.send_json(request).await
    }
}

#[async_trait]
impl RoomsApi for ReservationClient {
    async fn list_rooms(&self) -> Result<Vec<Room>> {
        self.send_json(self.request(reqwest::Method::GET, "/rooms"))
            .await
    }

    async fn my_rooms(&self, token: &str) -> Result<Vec<Room>> {
        self.send_json(self.authed(reqwest::Method::GET, "/rooms/my", token))
            .await
    }

    async fn get_room(&self, room_id: i64) -> Result<Room> {
        let path = format!("/rooms/{}", room_id);
        self.send_json(self.request(reqwest::Method::GET, &path))
            .await
    }

    async fn create_room(&self, token: &str, room: &NewRoom) -> Result<Room> {
        let request = self
            .authed(reqwest::Method::POST, "/rooms", token)
            .json(room);
        self.send_json(request).await
    }

    async fn delete_room(&self, token: &str, room_id: i64) -> Result<()> {
        let path = format!("/rooms/{}", room_id);
        self.send_unit(self.authed(reqwest::Method::DELETE, &path, token))
            .await
    }
}

#[async_trait]
impl ReservationsApi for ReservationClient {
    async fn room_reservations(&self, room_id: i64) -> Result<Vec<Reservation>> {
        let path = format!("/reservations/room/{}", room_id);
        self.send_json(self.request(reqwest::Method::GET, &path))
            .await
    }

    async fn my_reservations(&self, token: &str) -> Result<Vec<Reservation>> {
        self.send_json(self.authed(reqwest::Method::GET, "/reservations/my", token))
            .await
    }

    async fn create_reservation(&self, reservation: &NewReservation) -> Result<Reservation> {
        reservation.validate()?;
        let request = self
            .request(reqwest::Method::POST, "/reservations")
            .json(reservation);
        self.send_json(request).await
    }
}
