// Axum API Server Module
//
// Purpose: REST API + HTML dashboard over the surge scorer.
// Evaluations are microseconds; only full-grid sweeps go to the blocking pool.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

use crate::error::SurgeError;
use crate::explanation::{Explanation, ExplanationGenerator};
use crate::scenario::{InputDomain, ScenarioInput, VenueKind};
use crate::scorer::{SurgeEstimate, SurgeScorer};
use crate::sweep::SweepSummary;
use crate::utils::SurgeCalibration;
use crate::web::handlers::pages;

/// Total serialized size the response cache may hold (bytes)
const CACHE_MAX_BYTES: u64 = 64 * 1024 * 1024;
const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<SurgeScorer>,
    pub domain: Arc<InputDomain>,
    pub cache: Cache<String, serde_json::Value>,
}

impl AppState {
    pub fn new(calibration: SurgeCalibration) -> anyhow::Result<Self> {
        calibration.validate()?;

        tracing::info!("Initializing surge scorer...");
        let scorer = Arc::new(SurgeScorer::new(calibration));

        // Keyed by endpoint + scenario, bounded by serialized size
        let cache = Cache::builder()
            .weigher(cache_weight)
            .max_capacity(CACHE_MAX_BYTES)
            .time_to_live(CACHE_TTL)
            .build();

        Ok(Self {
            scorer,
            domain: Arc::new(InputDomain::default()),
            cache,
        })
    }

    /// Current cache weight in bytes (after pending maintenance runs)
    pub async fn cache_weight_bytes(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.weighted_size()
    }

    /// Validate against the control domain, logging rejections
    pub(crate) fn check_input(&self, input: &ScenarioInput) -> Result<(), AppError> {
        input.validate(&self.domain).map_err(|e| {
            tracing::warn!("Rejected scenario {:?}: {}", input, e);
            AppError::from(e)
        })
    }

    pub(crate) fn explain(&self, input: &ScenarioInput) -> Explanation {
        let breakdown = self.scorer.evaluate_with_breakdown(input);
        ExplanationGenerator::generate(input, &breakdown, self.scorer.calibration())
    }
}

/// Serialized size of a cached response plus its key
fn cache_weight(key: &String, value: &serde_json::Value) -> u32 {
    let body = serde_json::to_vec(value).map_or(usize::MAX, |bytes| bytes.len());
    u32::try_from(body.saturating_add(key.len())).unwrap_or(u32::MAX)
}

// ============================================================================
// Extractors
// ============================================================================

/// JSON body whose decode failures answer 422 with an `{error}` body
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ScenarioJson<T>(pub T);

/// Query string whose decode failures answer 422 with an `{error}` body
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ScenarioQuery<T>(pub T);

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Dashboard (HTML)
        .route("/", get(pages::dashboard_page))

        // Surge endpoints (JSON API)
        .route("/api/surge/estimate", post(estimate_surge))
        .route("/api/surge/explain", post(explain_surge))
        .route("/api/surge/sweep", get(sweep_surge))
        .route("/api/surge/domain", get(get_domain))

        // Outermost layer last
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Slider bounds, steps and defaults
async fn get_domain(State(state): State<AppState>) -> Json<InputDomain> {
    Json((*state.domain).clone())
}

/// Score one scenario
async fn estimate_surge(
    State(state): State<AppState>,
    ScenarioJson(input): ScenarioJson<ScenarioInput>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.check_input(&input)?;

    let cache_key = format!("estimate:{}", input.cache_key());
    if let Some(cached) = state.cache.get(&cache_key).await {
        return Ok(Json(cached));
    }

    let estimate: SurgeEstimate = state.scorer.evaluate(&input);
    tracing::info!(
        "Estimated {} patients, NEDOCS {} ({})",
        estimate.total_patients,
        estimate.nedocs_score_capped,
        estimate.tier
    );

    let result = serde_json::to_value(estimate)
        .map_err(|e| AppError::Internal(format!("Serialization error: {}", e)))?;
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

/// Full explanation with banner, chart specs and advisories
async fn explain_surge(
    State(state): State<AppState>,
    ScenarioJson(input): ScenarioJson<ScenarioInput>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.check_input(&input)?;

    let cache_key = format!("explain:{}", input.cache_key());
    if let Some(cached) = state.cache.get(&cache_key).await {
        return Ok(Json(cached));
    }

    let explanation = state.explain(&input);
    let result = serde_json::to_value(explanation)
        .map_err(|e| AppError::Internal(format!("Serialization error: {}", e)))?;
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

/// Sweep the full slider grid for one venue kind
async fn sweep_surge(
    State(state): State<AppState>,
    ScenarioQuery(query): ScenarioQuery<SweepQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let venue = match query.venue.as_deref() {
        Some(v) => v.parse::<VenueKind>()?,
        None => state.domain.default_venue,
    };

    let cache_key = format!("sweep:{}", venue.as_str());
    if let Some(cached) = state.cache.get(&cache_key).await {
        return Ok(Json(cached));
    }

    // ~33k evaluations; keep them off the async workers
    let scorer = state.scorer.clone();
    let domain = state.domain.clone();
    let summary: SweepSummary = tokio::task::spawn_blocking(move || scorer.sweep(&domain, venue))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    let result = serde_json::to_value(summary)
        .map_err(|e| AppError::Internal(format!("Serialization error: {}", e)))?;
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

#[derive(serde::Deserialize, Debug)]
struct SweepQuery {
    venue: Option<String>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Unprocessable(String),
    Internal(String),
}

impl From<SurgeError> for AppError {
    fn from(err: SurgeError) -> Self {
        match err {
            SurgeError::InvalidCalibration(msg) => AppError::Internal(msg),
            other => AppError::Unprocessable(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Unprocessable(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
