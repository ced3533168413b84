//! Integration tests for the Fracbond Server API endpoints.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use fracbond_server::routes::{pricing_router, recommendation_router};
use fracbond_server::{Server, ServerConfig, Service};

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    (status, json)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

fn assert_close(value: &Value, expected: f64) {
    let got = value.as_f64().unwrap_or_else(|| panic!("not a number: {value}"));
    assert!((got - expected).abs() < 1e-9, "expected {expected}, got {got}");
}

fn pricing_app() -> axum::Router {
    pricing_router(ServerConfig::pricing_default())
}

// =============================================================================
// HEALTH CHECK TESTS
// =============================================================================

#[tokio::test]
async fn test_pricing_root() {
    let (status, json) = get_json(pricing_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"status": "API is running"}));
}

#[tokio::test]
async fn test_recommendation_health() {
    let (status, json) = get_json(recommendation_router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_versioned_health() {
    for app in [pricing_app(), recommendation_router()] {
        let (status, json) = get_json(app, "/api/v1/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}

#[tokio::test]
async fn test_server_router_applies_layers() {
    let mut config = ServerConfig::recommendation_default();
    config.cors_enabled = false;
    let app = Server::new(Service::Recommendation, config).router();

    let (status, _) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// PRICING TESTS
// =============================================================================

#[tokio::test]
async fn test_price_bond_default_mode() {
    let body = json!({
        "bond_name": "Sovereign 2028",
        "face_value": 1000,
        "coupon_rate": 0.08,
        "rating": "AAA",
        "purchase_amount": 500,
        "maturity_years": 3
    });
    let (status, json) = post_json(pricing_app(), "/price_bond", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["fraction_price"], 10.16);
    assert_close(&json["seller_total"], 1015.63);
    assert_close(&json["buyer_cost"], 1016.0);
    assert_close(&json["buyer_expected_yield_%"], 7.87);
    assert_close(&json["used_yield"], 0.074);
    assert_eq!(json["pricing_mode"], "pv_forward");
    assert_eq!(json["rating_class"], "high");

    assert_eq!(json["bond_name"], "Sovereign 2028");
    assert_eq!(json["rating"], "AAA");
    assert_close(&json["maturity_years"], 3.0);

    let projection = &json["buyer_interest_projection"];
    assert_close(&projection["1_year"]["absolute_interest"], 80.0);
    assert_close(&projection["3_year"]["absolute_interest"], 240.0);
    assert_close(&projection["5_year"]["absolute_interest"], 240.0);
}

#[tokio::test]
async fn test_price_bond_force_seller() {
    let body = json!({
        "face_value": 1000,
        "coupon_rate": 0.08,
        "rating": "AAA",
        "maturity_years": 3,
        "pricing_mode": "force_seller"
    });
    let (status, json) = post_json(pricing_app(), "/price_bond", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["fraction_price"], 10.71);
    assert_close(&json["seller_total"], 1071.36);
    assert_close(&json["used_yield"], 0.053618);
    assert_eq!(json["pricing_mode"], "force_seller");
    assert!(json["bond_name"].is_null());
}

#[tokio::test]
async fn test_price_bond_low_and_unknown_ratings() {
    let low = json!({"face_value": 1000, "coupon_rate": 0.08, "rating": "CCC", "maturity_years": 3});
    let (status, json) = post_json(pricing_app(), "/price_bond", low).await;
    assert_eq!(status, StatusCode::OK);
    assert_close(&json["fraction_price"], 10.6);
    assert_eq!(json["rating_class"], "low");

    let unknown = json!({"face_value": 1000, "coupon_rate": 0.08, "rating": "NR", "maturity_years": 3});
    let (status, json) = post_json(pricing_app(), "/price_bond", unknown).await;
    assert_eq!(status, StatusCode::OK);
    assert_close(&json["fraction_price"], 10.0);
    assert_close(&json["buyer_expected_yield_%"], 8.0);
    assert_eq!(json["rating_class"], "unclassified");
}

#[tokio::test]
async fn test_price_bond_half_cent_fraction() {
    let body = json!({"face_value": 1000, "coupon_rate": 0.03, "rating": "BB", "maturity_years": 3});
    let (status, json) = post_json(pricing_app(), "/price_bond", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["seller_total"], 1022.5);
    assert_close(&json["fraction_price"], 10.22);
    assert_close(&json["buyer_cost"], 1022.0);
}

#[tokio::test]
async fn test_price_bond_custom_fractions() {
    let body = json!({
        "face_value": 5000,
        "coupon_rate": 0.07,
        "rating": "AA+",
        "maturity_years": 5,
        "fractions": 50
    });
    let (status, json) = post_json(pricing_app(), "/price_bond", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["fraction_price"], 104.21);
    assert_close(&json["seller_total"], 5210.62);
    assert_close(&json["used_yield"], 0.06);
}

#[tokio::test]
async fn test_price_bond_config_fractions() {
    let mut config = ServerConfig::pricing_default();
    config.default_fractions = 10;
    let body = json!({"face_value": 1000, "coupon_rate": 0.08, "rating": "NR", "maturity_years": 3});

    let (status, json) = post_json(pricing_router(config), "/price_bond", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["fraction_price"], 100.0);
}

#[tokio::test]
async fn test_price_bond_missing_field() {
    let body = json!({"face_value": 1000, "rating": "AAA"});
    let (status, json) = post_json(pricing_app(), "/price_bond", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "Missing required field: coupon_rate");
}

#[tokio::test]
async fn test_price_bond_unknown_mode() {
    let body = json!({"face_value": 1000, "coupon_rate": 0.08, "rating": "AAA", "pricing_mode": "greedy"});
    let (status, json) = post_json(pricing_app(), "/price_bond", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("greedy"));
}

#[tokio::test]
async fn test_price_bond_zero_fractions() {
    let body = json!({"face_value": 1000, "coupon_rate": 0.08, "rating": "AAA", "fractions": 0});
    let (status, json) = post_json(pricing_app(), "/price_bond", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].as_str().unwrap().contains("fractions"));
}

// =============================================================================
// PORTFOLIO TESTS
// =============================================================================

#[tokio::test]
async fn test_score_demo_portfolio() {
    let (status, json) = post_json(recommendation_router(), "/score", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["total_value"], 120000.0);
    assert_close(&json["overall_risk_score"], 60.2083);
    assert_eq!(json["breakdown"].as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn test_score_without_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/score")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(recommendation_router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["overall_risk_score"], 60.2083);
}

#[tokio::test]
async fn test_score_posted_assets() {
    let body = json!({"assets": [
        {"asset_id": "S", "type": "stock", "risk_label": "medium", "market_value": 300},
        {"asset_id": "F", "type": "bank_fd", "market_value": 100}
    ]});
    let (status, json) = post_json(recommendation_router(), "/score", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["total_value"], 400.0);
    assert_close(&json["overall_risk_score"], 46.25);
    assert_eq!(json["breakdown"][1]["type"], "bank_fd");
}

#[tokio::test]
async fn test_recommend_demo_portfolio() {
    let (status, json) = post_json(recommendation_router(), "/recommend", json!({"assets": []})).await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&json["pre_rebalance"]["overall_risk_score"], 60.2083);
    assert_close(&json["post_rebalance"]["overall_risk_score"], 50.0);
    assert_close(&json["post_rebalance"]["total_value"], 120000.0);

    let recs = json["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0]["recommended_bond"], "B_HY_1");
    assert_eq!(recs[1]["reason"], "mf_lowcagr");
    assert_eq!(recs[2]["bond_credit"], "AAA & AA");

    let post_ids: Vec<&str> = json["post_rebalance"]["breakdown"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["asset_id"].as_str())
        .collect();
    assert!(post_ids.contains(&"B_SHORT_SAFE (50%) + B_SAFE_2 (50%)"));
    assert!(!post_ids.contains(&"FD_1"));
}

#[tokio::test]
async fn test_recommend_fd_ladder() {
    let body = json!({"assets": [
        {"asset_id": "FD_9", "type": "bank_fd", "market_value": 1000, "fd_rate": 0.07}
    ]});
    let (status, json) = post_json(recommendation_router(), "/recommend", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["recommendations"][0]["reason"], "fd_suggest_ladder");
    assert_eq!(json["recommendations"][0]["bond_yield"], "0.045 & 0.060");
    assert_close(&json["pre_rebalance"]["overall_risk_score"], 5.0);
    assert_close(&json["post_rebalance"]["overall_risk_score"], 50.0);
}
