/// External API clients module
use crate::config::Coordinates;
use crate::domain::{ApodResponse, RsttResponse};
use crate::errors::{ApiError, ApiResult};
use reqwest::Client;

/// HTTP client wrapper with common configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> ApiResult<Self> {
        let client = Client::builder()
            .user_agent("moon-phase-service/1.0")
            .build()
            .map_err(|e| ApiError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// USNO astronomical applications client
pub struct UsnoClient {
    http_client: HttpClient,
    base_url: String,
}

impl UsnoClient {
    pub fn new(http_client: HttpClient, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Fetch one day of sun and moon data for a location
    pub async fn fetch_one_day(&self, date: &str, coords: Coordinates) -> ApiResult<RsttResponse> {
        let resp = self
            .http_client
            .get_client()
            .get(&self.base_url)
            .query(&[("date", date.to_string()), ("coords", coords.to_string())])
            .send()
            .await?
            .error_for_status()?;

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidPayload(e.to_string()))
    }
}

/// NASA APOD client
pub struct NasaClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl NasaClient {
    pub fn new(http_client: HttpClient, base_url: String, api_key: String) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    /// Fetch Astronomy Picture of the Day
    pub async fn fetch_apod(&self) -> ApiResult<ApodResponse> {
        let mut req = self.http_client.get_client().get(&self.base_url);

        if !self.api_key.is_empty() {
            req = req.query(&[("api_key", &self.api_key)]);
        }

        let json = req.send().await?.error_for_status()?.json().await?;
        Ok(json)
    }
}
