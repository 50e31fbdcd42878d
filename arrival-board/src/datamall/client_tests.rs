//! Client tests against a local stand-in for DataMall.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use super::*;
use crate::domain::{ServiceNo, StopCode};

const KEY: &str = "test-key";

fn stop(s: &str) -> StopCode {
    StopCode::parse(s).unwrap()
}

fn service(s: &str) -> ServiceNo {
    ServiceNo::parse(s).unwrap()
}

/// Mimics `BusArrivalv2` for a handful of fixed stops.
async fn bus_arrival(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Response {
    let key = headers.get("accountkey").and_then(|v| v.to_str().ok());
    if key != Some(KEY) {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }

    let accepts_json = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    if !accepts_json {
        return (StatusCode::NOT_ACCEPTABLE, "json only").into_response();
    }

    let stop = q.get("BusStopCode").cloned().unwrap_or_default();
    let service = q.get("ServiceNo").cloned().unwrap_or_default();

    match (stop.as_str(), service.as_str()) {
        ("58271", "859") => Json(json!({
            "odata.metadata": "http://datamall2.mytransport.sg/ltaodataservice/$metadata#BusArrivalv2/@Element",
            "BusStopCode": "58271",
            "Services": [{
                "ServiceNo": "859",
                "Operator": "SMRT",
                "NextBus": { "EstimatedArrival": "2024-05-01T08:15:00+08:00", "Load": "SEA" },
                "NextBus2": { "EstimatedArrival": "2024-05-01T08:27:00+08:00", "Load": "SDA" },
                "NextBus3": { "EstimatedArrival": "", "Load": "" }
            }]
        }))
        .into_response(),
        ("58271", _) => Json(json!({ "BusStopCode": "58271", "Services": [] })).into_response(),
        ("11111", _) => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        ("22222", _) => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "BusStopCode": "22222", "Services": [] })).into_response()
        }
        _ => Json(json!({ "BusStopCode": "", "Services": [] })).into_response(),
    }
}

async fn spawn_upstream() -> String {
    let app = Router::new().route("/ltaodataservice/BusArrivalv2", get(bus_arrival));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/ltaodataservice/BusArrivalv2")
}

async fn client(key: &str) -> DatamallClient {
    let url = spawn_upstream().await;
    DatamallClient::new(DatamallConfig::new(key).with_base_url(url).with_timeout(1)).unwrap()
}

#[tokio::test]
async fn fetches_timings_in_order() {
    let client = client(KEY).await;

    let timings = client
        .fetch_arrivals(&stop("58271"), &service("859"))
        .await
        .unwrap();

    let rendered: Vec<String> = timings.iter().map(|t| t.to_rfc3339()).collect();
    assert_eq!(
        rendered,
        ["2024-05-01T08:15:00+08:00", "2024-05-01T08:27:00+08:00"]
    );
}

#[tokio::test]
async fn unknown_stop_is_not_found() {
    let client = client(KEY).await;

    let err = client
        .fetch_arrivals(&stop("99999"), &service("859"))
        .await
        .unwrap_err();

    assert!(matches!(err, ArrivalError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn unknown_service_is_no_service() {
    let client = client(KEY).await;

    let err = client
        .fetch_arrivals(&stop("58271"), &service("1"))
        .await
        .unwrap_err();

    assert!(matches!(err, ArrivalError::NoService { .. }), "got {err:?}");
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let client = client(KEY).await;

    let err = client
        .fetch_arrivals(&stop("11111"), &service("859"))
        .await
        .unwrap_err();

    match err {
        ArrivalError::Decode { body, .. } => {
            assert_eq!(body.as_deref(), Some("<html>maintenance</html>"));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn wrong_key_is_status_error() {
    let client = client("wrong-key").await;

    let err = client
        .fetch_arrivals(&stop("58271"), &service("859"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ArrivalError::Status { status: 401, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn slow_upstream_times_out_as_transport_error() {
    let client = client(KEY).await;

    let err = client
        .fetch_arrivals(&stop("22222"), &service("859"))
        .await
        .unwrap_err();

    match err {
        ArrivalError::Transport(e) => assert!(e.is_timeout()),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_upstream_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = DatamallClient::new(
        DatamallConfig::new(KEY).with_base_url(format!("http://{addr}/BusArrivalv2")),
    )
    .unwrap();

    let err = client
        .fetch_arrivals(&stop("58271"), &service("859"))
        .await
        .unwrap_err();

    assert!(matches!(err, ArrivalError::Transport(_)), "got {err:?}");
}
