//! Shared helpers for the HTTP integration tests.
//!
//! Upstream services are replaced by small axum apps bound to an ephemeral
//! local port; each one records the query strings it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{Request, Response, StatusCode};
use axum::routing;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use moon_phase::config::{AppConfig, OBSERVER_LOCATION, OBSERVER_TIMEZONE};
use moon_phase::handlers::AppState;
use moon_phase::routes::build_router;

pub type SeenQueries = Arc<Mutex<Vec<HashMap<String, String>>>>;

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: Value,
    seen: SeenQueries,
}

async fn respond(
    State(stub): State<Stub>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    stub.seen.lock().unwrap().push(query);
    (stub.status, Json(stub.body))
}

/// Start a stub upstream answering every GET with `status` and `body`.
///
/// Returns its base URL and the queries it has seen.
pub async fn spawn_stub(status: StatusCode, body: Value) -> (String, SeenQueries) {
    let seen = SeenQueries::default();
    let stub = Stub {
        status,
        body,
        seen: seen.clone(),
    };
    let app = Router::new().route("/", routing::get(respond)).with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/"), seen)
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn test_config(usno_api_url: String, apod_api_url: String) -> AppConfig {
    AppConfig {
        nasa_api_key: "test-key".to_string(),
        usno_api_url,
        apod_api_url,
        location: OBSERVER_LOCATION,
        timezone: OBSERVER_TIMEZONE,
        static_dir: static_dir(),
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
    }
}

/// Build the application router exactly as `main` does.
pub fn build_test_app(config: AppConfig) -> Router {
    let static_dir = config.static_dir.clone();
    let state = AppState::from_config(config).unwrap();
    build_router(state, &static_dir)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// A USNO `oneday` payload listing the given moon events.
pub fn usno_payload(date: Option<(i32, u32, u32)>, moondata: &[(&str, &str)]) -> Value {
    let moondata: Vec<Value> = moondata
        .iter()
        .map(|(phen, time)| serde_json::json!({ "phen": phen, "time": time }))
        .collect();

    let mut data = serde_json::json!({
        "closestphase": { "phase": "Full Moon", "time": "17:54" },
        "curphase": "Waxing Gibbous",
        "fracillum": "79%",
        "isdst": false,
        "moondata": moondata,
        "tz": 0.0
    });
    if let Some((year, month, day)) = date {
        data["year"] = year.into();
        data["month"] = month.into();
        data["day"] = day.into();
    }

    serde_json::json!({
        "apiversion": "4.0.1",
        "geometry": { "coordinates": [-118.1445, 34.1478], "type": "Point" },
        "properties": { "data": data },
        "type": "Feature"
    })
}

pub fn apod_payload(url: &str) -> Value {
    serde_json::json!({
        "date": "2024-01-15",
        "media_type": "image",
        "title": "Moon over Pasadena",
        "url": url
    })
}
