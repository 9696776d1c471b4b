//! Integration tests for the time service client.
//!
//! These tests run the client against an in-process fake of the time
//! service bound to a random local port.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Client;
use serde_json::json;
use url::Url;

use worldclock_application::ports::{TimeSource, TimeSourceError};
use worldclock_domain::TimezoneId;
use worldclock_infrastructure::{ClockConfig, WorldTimeApiClient};

async fn timezones() -> Json<Vec<&'static str>> {
    Json(vec!["America/Sao_Paulo", "Asia/Kolkata", "Europe/London"])
}

async fn snapshot(Path(name): Path<String>) -> Response {
    match name.as_str() {
        "America/Sao_Paulo" => Json(json!({
            "abbreviation": "-03",
            "datetime": "2024-05-10T14:30:00.123456-03:00",
            "dst": false,
            "timezone": "America/Sao_Paulo",
            "utc_offset": "-03:00"
        }))
        .into_response(),
        "Asia/Kolkata" => Json(json!({
            "datetime": "2024-05-10T23:00:00+05:30",
            "timezone": "Asia/Kolkata",
            "utc_offset": "+05:30"
        }))
        .into_response(),
        "Broken/Datetime" => Json(json!({
            "datetime": "tomorrow",
            "timezone": "Broken/Datetime",
            "utc_offset": "+00:00"
        }))
        .into_response(),
        "Broken/Body" => (StatusCode::OK, "<html>oops</html>").into_response(),
        "Slow/Zone" => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            StatusCode::NO_CONTENT.into_response()
        }
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "unknown location"}))).into_response(),
    }
}

async fn spawn_fake_service() -> SocketAddr {
    let app = Router::new()
        .route("/api/timezone", get(timezones))
        .route("/api/timezone/{*name}", get(snapshot));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake service");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> WorldTimeApiClient {
    let config = ClockConfig::from_vars([(
        "WORLDCLOCK_API_BASE_URL".to_string(),
        format!("http://{addr}/api"),
    )])
    .unwrap();
    WorldTimeApiClient::new(&config).unwrap()
}

fn tz(id: &str) -> TimezoneId {
    TimezoneId::new(id).unwrap()
}

#[tokio::test]
async fn test_list_timezones_in_service_order() {
    let addr = spawn_fake_service().await;
    let client = client_for(addr);

    let zones = client.list_timezones().await.unwrap();

    assert_eq!(
        zones,
        vec![tz("America/Sao_Paulo"), tz("Asia/Kolkata"), tz("Europe/London")]
    );
}

#[tokio::test]
async fn test_fetch_snapshot_consumes_first_19_chars() {
    let addr = spawn_fake_service().await;
    let client = client_for(addr);

    let snapshot = client.fetch_snapshot(&tz("America/Sao_Paulo")).await.unwrap();
    assert_eq!(snapshot.timezone().display_label(), "America/Sao Paulo");
    assert_eq!(snapshot.utc_offset_label(), "UTC -03:00");
    assert_eq!(snapshot.server_time().to_string(), "14:30:00");

    let snapshot = client.fetch_snapshot(&tz("Asia/Kolkata")).await.unwrap();
    assert_eq!(snapshot.utc_offset_label(), "UTC +05:30");
    assert_eq!(snapshot.server_time().to_string(), "23:00:00");
}

#[tokio::test]
async fn test_unknown_timezone_is_status_error() {
    let addr = spawn_fake_service().await;
    let client = client_for(addr);

    let result = client.fetch_snapshot(&tz("Atlantis/Capital")).await;

    match result {
        Err(TimeSourceError::Status { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/api/timezone/Atlantis/Capital"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_bodies_are_rejected() {
    let addr = spawn_fake_service().await;
    let client = client_for(addr);

    assert!(matches!(
        client.fetch_snapshot(&tz("Broken/Body")).await,
        Err(TimeSourceError::Decode(_))
    ));
    assert!(matches!(
        client.fetch_snapshot(&tz("Broken/Datetime")).await,
        Err(TimeSourceError::InvalidSnapshot(_))
    ));
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let addr = spawn_fake_service().await;
    let http = Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let base = Url::parse(&format!("http://{addr}/api")).unwrap();
    let client = WorldTimeApiClient::with_client(http, &base);

    let result = client.fetch_snapshot(&tz("Slow/Zone")).await;

    assert!(matches!(result, Err(TimeSourceError::Timeout)));
}

#[tokio::test]
async fn test_unreachable_service_is_http_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client_for(addr);

    let result = client.list_timezones().await;

    assert!(matches!(result, Err(TimeSourceError::Http(_))));
}
