//! Request handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use fracbond_portfolio::prelude::*;
use fracbond_pricing::prelude::*;
use fracbond_pricing::rounding::{round_dp, SCORE_DP};

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Application state.
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Liveness response of the service root.
#[derive(Serialize)]
pub struct StatusResponse {
    status: &'static str,
}

/// `GET /` on the pricing service.
pub async fn pricing_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "API is running",
    })
}

/// `GET /health` on the recommendation service.
pub async fn recommendation_status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}

// =============================================================================
// Pricing
// =============================================================================

/// Body of `POST /price_bond`.
///
/// Clients may also send `purchase_amount`; it does not affect pricing and
/// is ignored.
#[derive(Debug, Deserialize)]
pub struct PriceBondRequest {
    /// Display name, echoed back.
    pub bond_name: Option<String>,
    /// Face value.
    pub face_value: Option<f64>,
    /// Annual coupon rate as a fraction.
    pub coupon_rate: Option<f64>,
    /// Credit rating, e.g. "AA+".
    pub rating: Option<String>,
    /// Years to maturity.
    #[serde(default = "default_maturity")]
    pub maturity_years: f64,
    /// Fractions to split the bond into; the server default if absent.
    pub fractions: Option<u32>,
    /// `pv_forward`, `force_seller` or `fallback`; `pv_forward` if absent.
    pub pricing_mode: Option<String>,
}

fn default_maturity() -> f64 {
    1.0
}

/// Response of `POST /price_bond`.
#[derive(Debug, Serialize)]
pub struct PriceBondResponse {
    /// Engine output.
    #[serde(flatten)]
    pub pricing: PricingResult,
    /// Echoed bond name.
    pub bond_name: Option<String>,
    /// Echoed rating.
    pub rating: String,
    /// Echoed maturity.
    pub maturity_years: f64,
}

/// Prices one fraction of a bond.
pub async fn price_bond(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PriceBondRequest>,
) -> Result<Json<PriceBondResponse>, ServerError> {
    let face_value = request.face_value.ok_or(ServerError::MissingField("face_value"))?;
    let coupon_rate = request.coupon_rate.ok_or(ServerError::MissingField("coupon_rate"))?;
    let rating = request.rating.ok_or(ServerError::MissingField("rating"))?;

    let mode = match request.pricing_mode.as_deref() {
        Some(name) => name
            .parse::<PricingMode>()
            .map_err(|_| ServerError::Validation(format!("unknown pricing mode '{name}'")))?,
        None => PricingMode::default(),
    };
    let fractions = request.fractions.unwrap_or(state.config.default_fractions);

    let terms = BondTerms::new(face_value, coupon_rate, request.maturity_years);
    let pricing = FractionPricer::new()
        .with_fractions(fractions)
        .try_price(&terms, &rating, mode)?;

    info!(
        "priced {:?} ({}, {}) at {} per fraction",
        request.bond_name, rating, pricing.rating_class, pricing.fraction_price
    );

    Ok(Json(PriceBondResponse {
        pricing,
        bond_name: request.bond_name,
        rating,
        maturity_years: request.maturity_years,
    }))
}

// =============================================================================
// Portfolio
// =============================================================================

fn round_score(score: f64) -> f64 {
    round_dp(score, SCORE_DP)
}

/// Scores the posted portfolio, or the demo portfolio.
pub async fn score(payload: Option<Json<Value>>) -> Json<PortfolioRisk> {
    let assets = assets_or_demo(payload.as_ref().map(|Json(body)| body));

    let mut risk = score_portfolio(&assets);
    risk.overall_risk_score = round_score(risk.overall_risk_score);
    debug!("scored {} holdings: {}", assets.len(), risk.overall_risk_score);

    Json(risk)
}

/// Recommends replacements for the posted portfolio, or the demo portfolio.
pub async fn recommend(payload: Option<Json<Value>>) -> Result<Json<RebalanceReport>, ServerError> {
    let assets = assets_or_demo(payload.as_ref().map(|Json(body)| body));

    let mut report = recommend_rebalance(&assets, bond_universe(), &RecommendationRules::default())?;
    report.pre_rebalance.overall_risk_score = round_score(report.pre_rebalance.overall_risk_score);
    report.post_rebalance.overall_risk_score = round_score(report.post_rebalance.overall_risk_score);

    info!(
        "{} recommendations, risk {} -> {}",
        report.recommendations.len(),
        report.pre_rebalance.overall_risk_score,
        report.post_rebalance.overall_risk_score
    );

    Ok(Json(report))
}
