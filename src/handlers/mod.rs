/// HTTP request handlers
use crate::clients::{HttpClient, NasaClient, UsnoClient};
use crate::config::AppConfig;
use crate::domain::{Health, MoonPhaseQuery, MoonPhaseResponse};
use crate::errors::{ApiError, ApiResult};
use crate::services::MoonPhaseService;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub moon_phase_service: Arc<MoonPhaseService>,
}

impl AppState {
    /// Wire the clients and service from configuration
    pub fn from_config(config: AppConfig) -> ApiResult<Self> {
        let http_client = HttpClient::new()?;
        let usno_client = UsnoClient::new(http_client.clone(), config.usno_api_url.clone());
        let nasa_client = NasaClient::new(
            http_client,
            config.apod_api_url.clone(),
            config.nasa_api_key.clone(),
        );

        Ok(Self {
            moon_phase_service: Arc::new(MoonPhaseService::new(config, usno_client, nasa_client)),
        })
    }
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Get moon phase, event times and picture for a day
pub async fn get_moon_phase(
    Query(pairs): Query<Vec<(String, String)>>,
    State(state): State<AppState>,
) -> Result<Json<MoonPhaseResponse>, ApiError> {
    let params = MoonPhaseQuery::from_pairs(pairs);
    let moon_phase = state
        .moon_phase_service
        .moon_phase(params.date.as_deref())
        .await?;
    Ok(Json(moon_phase))
}
