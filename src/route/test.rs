use std::collections::HashMap;

use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use saferoute_fixtures::{
    DELHI_DETOUR, EQUATOR_ROUTE, HTML_ERROR_PAGE, INDIA_GATE, MISSING_AVG_RISK,
    OUT_OF_RANGE_ROUTE, QUTUB_MINAR,
};
use serde_json::json;

use crate::geo::Coordinate;
use crate::route::{HttpRouteClient, RouteError, RouteResponse, RouteResult, RouteService};
use crate::testing::serve;

fn pair(pair: (f64, f64)) -> Coordinate {
    Coordinate::try_from(pair).expect("fixture coordinates are valid")
}

#[test]
fn parses_equator_route() {
    let route = RouteResult::from_json(EQUATOR_ROUTE).expect("fixture parses");

    assert_eq!(route.original_route().len(), 2);
    assert_eq!(route.safe_path()[1], Coordinate::new(0.0, 1.0).unwrap());
    assert_eq!(route.segments(), 1);
    assert_eq!(route.nodes(), 2);
    assert_eq!(route.distance_meters(), 111319.49);
    assert_eq!(route.avg_risk(), 0.25);
    assert!(route.segment_risks().is_empty());
    assert_eq!(route.points().count(), 4);
}

#[test]
fn keeps_segment_risks_when_present() {
    let route = RouteResult::from_json(DELHI_DETOUR).expect("fixture parses");
    assert_eq!(route.segment_risks(), &[0.12, 0.30]);
}

#[test]
fn missing_field_is_parse_error() {
    let err = RouteResult::from_json(MISSING_AVG_RISK).expect_err("avg_risk is required");
    assert!(matches!(err, RouteError::Parse(ref reason) if reason.contains("avg_risk")));
}

#[test]
fn non_json_is_parse_error() {
    let err = RouteResult::from_json(HTML_ERROR_PAGE).expect_err("html is not json");
    assert!(matches!(err, RouteError::Parse(_)));
}

#[test]
fn invalid_coordinate_is_parse_error() {
    let err = RouteResult::from_json(OUT_OF_RANGE_ROUTE).expect_err("lat 91.5 is invalid");
    assert!(matches!(err, RouteError::Parse(ref reason) if reason.contains("Latitude")));
}

#[test]
fn negative_counts_and_distances_are_rejected() {
    let negative_nodes = EQUATOR_ROUTE.replace("\"nodes\": 2", "\"nodes\": -2");
    assert!(matches!(
        RouteResult::from_json(&negative_nodes),
        Err(RouteError::Parse(_))
    ));

    let response = RouteResponse {
        original_route: vec![],
        safe_path: vec![],
        segments: 0,
        nodes: 0,
        distance_meters: -1.0,
        avg_risk: 0.0,
        segment_risks: vec![],
    };
    assert!(matches!(
        RouteResult::try_from(response),
        Err(RouteError::Parse(_))
    ));
}

#[test]
fn http_error_display_carries_code() {
    assert_eq!(RouteError::Http(503).to_string(), "Server error 503");
}

fn backend() -> Router {
    Router::new()
        .route(
            "/api/safe-route/",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], EQUATOR_ROUTE) }),
        )
        .route(
            "/echo/",
            get(|Query(params): Query<HashMap<String, f64>>| async move {
                let point = |lat: &str, lon: &str| [params[lat], params[lon]];
                let route = [point("start_lat", "start_lon"), point("end_lat", "end_lon")];

                Json(json!({
                    "original_route": route,
                    "safe_path": route,
                    "segments": 1,
                    "nodes": params.len(),
                    "distance_meters": 0.0,
                    "avg_risk": 0.0
                }))
            }),
        )
        .route(
            "/broken/",
            get(|| async { (StatusCode::BAD_GATEWAY, HTML_ERROR_PAGE) }),
        )
        .route("/garbage/", get(|| async { HTML_ERROR_PAGE }))
}

#[test_log::test(tokio::test)]
async fn fetches_route_over_http() {
    let base = serve(backend()).await;
    let client = HttpRouteClient::new(format!("{base}/api/safe-route/"));

    let route = client
        .fetch_route(pair(INDIA_GATE), pair(QUTUB_MINAR))
        .await
        .expect("backend returns the fixture");

    assert_eq!(route, RouteResult::from_json(EQUATOR_ROUTE).unwrap());
}

#[test_log::test(tokio::test)]
async fn sends_all_four_query_parameters() {
    let base = serve(backend()).await;
    let client = HttpRouteClient::new(format!("{base}/echo/"));

    let route = client
        .fetch_route(pair(INDIA_GATE), pair(QUTUB_MINAR))
        .await
        .expect("echo backend answers");

    assert_eq!(route.nodes(), 4, "expected exactly four query parameters");
    assert_eq!(route.original_route(), &[pair(INDIA_GATE), pair(QUTUB_MINAR)]);
}

#[test_log::test(tokio::test)]
async fn non_success_status_is_http_error() {
    let base = serve(backend()).await;
    let client = HttpRouteClient::new(format!("{base}/broken/"));

    let err = client
        .fetch_route(pair(INDIA_GATE), pair(QUTUB_MINAR))
        .await
        .expect_err("502 must fail");

    assert!(matches!(err, RouteError::Http(502)), "got {err:?}");
}

#[test_log::test(tokio::test)]
async fn unknown_endpoint_is_http_error() {
    let base = serve(backend()).await;
    let client = HttpRouteClient::new(format!("{base}/nowhere/"));

    let err = client
        .fetch_route(pair(INDIA_GATE), pair(QUTUB_MINAR))
        .await
        .expect_err("404 must fail");

    assert!(matches!(err, RouteError::Http(404)));
}

#[test_log::test(tokio::test)]
async fn malformed_body_is_parse_error() {
    let base = serve(backend()).await;
    let client = HttpRouteClient::new(format!("{base}/garbage/"));

    let err = client
        .fetch_route(pair(INDIA_GATE), pair(QUTUB_MINAR))
        .await
        .expect_err("html body must fail");

    assert!(matches!(err, RouteError::Parse(_)));
}

#[test_log::test(tokio::test)]
async fn unreachable_backend_is_network_error() {
    let client = HttpRouteClient::new("http://127.0.0.1:1/api/safe-route/");

    let err = client
        .fetch_route(pair(INDIA_GATE), pair(QUTUB_MINAR))
        .await
        .expect_err("nothing listens on port 1");

    assert!(matches!(err, RouteError::Network(_)));
}
