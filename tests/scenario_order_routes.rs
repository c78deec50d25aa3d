//! In-process scenarios for the emulator HTTP routes.
//!
//! The router is driven through `tower::ServiceExt::oneshot`; no socket is
//! bound. The delay is pinned to zero except in the timing scenarios, which
//! run on a paused clock.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // oneshot

use cpn_emulator::catalog::StaticCatalog;
use cpn_emulator::domain::{Coupon, Offer};
use cpn_emulator::engine::DelayConfig;
use cpn_emulator::server::{build_router, AppState};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn scenario_coupon() -> Coupon {
    Coupon {
        id: 1,
        omni_id: "100".into(),
        usage: "use".into(),
        conditions: "conditions".into(),
        partner_omni_id: 201,
        partner_crm_id: "crm-201".into(),
        offers: vec![Offer {
            id: 9,
            omni_id: "9".into(),
            price: 10,
        }],
    }
}

fn make_router(coupons: Vec<Coupon>) -> axum::Router {
    make_delayed_router(coupons, 0)
}

fn make_delayed_router(coupons: Vec<Coupon>, delay_ms: i64) -> axum::Router {
    let delay = DelayConfig::new(delay_ms, delay_ms).unwrap();
    let state = AppState::new(StaticCatalog::new(coupons), delay);
    build_router(Arc::new(state))
}

async fn call(router: axum::Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = router.oneshot(req).await.expect("oneshot failed");
    let status = resp.status();
    let body = resp
        .into_body()
        .collect()
        .await
        .expect("body collect failed")
        .to_bytes();
    (status, String::from_utf8(body.to_vec()).expect("body is not utf-8"))
}

fn orders_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/back/v1/cpn/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .header("X-Request-Id", "3f2c8a8e-0000-4000-8000-000000000001")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn order_numbers(json: &Value) -> Vec<i64> {
    json["data"]["orders"]
        .as_array()
        .expect("orders array")
        .iter()
        .map(|o| o["order_number"].as_i64().expect("numeric order_number"))
        .collect()
}

// ---------------------------------------------------------------------------
// POST /api/back/v1/cpn/orders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn start_id_and_limit_produce_sequential_orders() {
    let router = make_router(vec![scenario_coupon()]);
    let req = orders_request(json!({
        "filters": { "limit": 2, "product_type": "coupon", "order_id_from": 5 },
        "stats": { "coupon": 1 }
    }));

    let (status, body) = call(router, req).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["messages"], json!([]));
    assert_eq!(order_numbers(&json), vec![5, 6]);

    let filters = &json["data"]["filters"];
    assert_eq!(filters["order_id_from"], 5);
    assert!(filters["order_ids"].is_null());
    assert_eq!(filters["limit"], 2);
    assert_eq!(filters["product_type"], "coupon");

    let last_order = &json["data"]["stats"]["coupon"]["lastOrder"];
    assert_eq!(last_order["order_id"], 15);
    assert_eq!(last_order["date_created"], json["data"]["timestamp"]);
    assert!(json["data"]["timestamp"]
        .as_str()
        .unwrap()
        .ends_with("+03:00"));
}

#[tokio::test]
async fn explicit_order_ids_override_limit() {
    let router = make_router(vec![scenario_coupon()]);
    let req = orders_request(json!({
        "filters": { "limit": 5, "order_ids": [42, 77] }
    }));

    let (status, body) = call(router, req).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(order_numbers(&json), vec![42, 77]);
    assert!(json["data"]["filters"]["order_id_from"].is_null());
    assert_eq!(json["data"]["filters"]["order_ids"], json!([42, 77]));
    assert!(json["data"]["stats"]["coupon"]["lastOrder"]["order_id"].is_null());
}

#[tokio::test]
async fn order_shape_matches_upstream() {
    let router = make_router(vec![scenario_coupon()]);
    let req = orders_request(json!({ "filters": { "order_id_from": 1, "limit": 1 } }));

    let (status, body) = call(router, req).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    let order = &json["data"]["orders"][0];
    assert!(order["order_id"].is_null());
    assert!(order["order_id_sbol"].is_null());
    assert!(order["clientOS"].is_null());
    assert_eq!(order["status"], "success");
    assert_eq!(order["rules"], "https://rules.pdf");
    assert_eq!(order["channel"], "web");
    assert_eq!(order["agreement"], true);
    assert_eq!(order["payment_type"], "spsBonuses");
    assert_eq!(order["promocodes_count"], 1);
    assert_eq!(order["total_amount"], json!({ "BON": null, "RUB": 100 }));
    assert_eq!(order["product_type"], "coupon");
    assert_eq!(order["combined_pdf_url"], "https://combined.pdf");
    assert_eq!(order["pay_datetime"], order["date_created"]);
    assert!(uuid::Uuid::parse_str(order["reserve_key"].as_str().unwrap()).is_ok());
    assert!(order["client_id"].as_str().unwrap().parse::<u32>().unwrap() < 1_000_000);

    let product = &order["product"];
    assert_eq!(product["id"], 100);
    assert_eq!(product["cpn_id"], 1);
    assert_eq!(product["use"], "use");
    assert_eq!(product["partner"], json!({ "id": "201", "crm_id": "crm-201" }));
    assert_eq!(product["offer"]["id"], 9);
    assert_eq!(product["offer"]["price"], 10);
    let promo = &product["offer"]["promocodes"][0];
    assert_eq!(promo["text_code"], "CODE123");
    assert_eq!(promo["type"], 0);
    assert_eq!(promo["pin"], 1234);
}

#[tokio::test]
async fn response_keys_keep_wire_order_and_indent() {
    let router = make_router(vec![scenario_coupon()]);
    let req = orders_request(json!({ "filters": { "limit": 1 } }));

    let (_, body) = call(router, req).await;
    let status_at = body.find("\"status\"").unwrap();
    let messages_at = body.find("\"messages\"").unwrap();
    let data_at = body.find("\"data\"").unwrap();
    assert!(status_at < messages_at && messages_at < data_at);
    assert!(body.contains("\n    \"status\": \"success\""));
}

#[tokio::test]
async fn oversized_limit_is_a_client_error() {
    let router = make_router(vec![scenario_coupon()]);
    let req = orders_request(json!({
        "filters": { "order_id_from": 5, "limit": i32::MAX }
    }));

    let (status, body) = call(router, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "error");
    assert!(json.get("data").is_none());
}

#[tokio::test(start_paused = true)]
async fn orders_wait_for_the_sampled_delay() {
    let router = make_delayed_router(vec![scenario_coupon()], 250);
    let req = orders_request(json!({ "filters": { "limit": 1 } }));

    let started = tokio::time::Instant::now();
    let (status, _) = call(router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn failed_orders_are_not_delayed() {
    let router = make_delayed_router(Vec::new(), 250);
    let req = orders_request(json!({ "filters": { "limit": 1 } }));

    let started = tokio::time::Instant::now();
    let (status, _) = call(router, req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(started.elapsed() < Duration::from_millis(250));
}

#[tokio::test]
async fn missing_request_id_is_rejected() {
    let router = make_router(vec![scenario_coupon()]);
    let req = Request::builder()
        .method("POST")
        .uri("/api/back/v1/cpn/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "filters": {} }).to_string()))
        .unwrap();

    let (status, _) = call(router, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_catalog_is_a_server_error() {
    let router = make_router(Vec::new());
    let req = orders_request(json!({ "filters": { "limit": 3 } }));

    let (status, body) = call(router, req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "error");
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn coupon_without_offers_is_a_server_error() {
    let mut broken = scenario_coupon();
    broken.offers.clear();
    let router = make_router(vec![broken]);
    let req = orders_request(json!({ "filters": { "limit": 1 } }));

    let (status, body) = call(router, req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("no offers"));
}

// ---------------------------------------------------------------------------
// Other routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cpns_lists_the_catalog() {
    let router = make_router(vec![scenario_coupon()]);
    let req = Request::builder()
        .uri("/api/back/v1/cpns")
        .body(Body::empty())
        .unwrap();

    let (status, body) = call(router, req).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json[0]["id"], 1);
    assert_eq!(json[0]["omni_id"], "100");
    assert_eq!(json[0]["use"], "use");
    assert_eq!(json[0]["offers"][0]["omni_id"], "9");
}

#[tokio::test]
async fn emulate_returns_generic_success() {
    let router = make_router(vec![scenario_coupon()]);
    let req = Request::builder()
        .uri("/api/back/v1/emulate")
        .body(Body::empty())
        .unwrap();

    let (status, body) = call(router, req).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "success");
    assert!(json["timestamp"].as_i64().unwrap() > 0);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .starts_with("Response generated at: "));
}

#[tokio::test(start_paused = true)]
async fn emulate_waits_for_the_sampled_delay() {
    let router = make_delayed_router(Vec::new(), 400);
    let req = Request::builder()
        .uri("/api/back/v1/emulate")
        .body(Body::empty())
        .unwrap();

    let started = tokio::time::Instant::now();
    let (status, _) = call(router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(400));
}

#[tokio::test]
async fn health_is_ok() {
    let router = make_router(Vec::new());
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = call(router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["status"], "ok");
}
