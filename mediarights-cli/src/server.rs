use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;

use mediarights_core::client::RightsClient;
use mediarights_core::rights::LeaseChangePlan;

use crate::handlers::*;

/// The client is read-only once built, so handlers share it without locking.
pub type AppState = Arc<RightsClient>;

const MAX_IN_FLIGHT_REQUESTS: usize = 256;

pub async fn run(host: &str, port: u16, client: RightsClient) -> Result<(), String> {
    let state: AppState = Arc::new(client);

    let app = Router::new()
        // Health is always open (no auth)
        .route("/health", get(health))
        // Protected routes
        .route("/query", post(rewrite_query))
        .route("/search", post(search_params))
        .route("/leases", post(derive_leases))
        .route("/plan", post(plan_rights_change))
        .layer(middleware::from_fn(auth_middleware))
        .layer(ConcurrencyLimitLayer::new(MAX_IN_FLIGHT_REQUESTS))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("{}:{}", host, port);

    if std::env::var("MEDIARIGHTS_API_KEY").is_ok() {
        tracing::info!("API key authentication enabled");
    } else {
        tracing::warn!("No MEDIARIGHTS_API_KEY set, service is open (dev mode)");
    }

    tracing::info!("mediarights service starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))
}

// ─── Auth Middleware ────────────────────────────────────────────────────────

async fn auth_middleware(
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // If no API key is configured, allow all requests (dev mode)
    let expected_key = match std::env::var("MEDIARIGHTS_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => return Ok(next.run(request).await),
    };

    if request.uri().path() == "/health" {
        return Ok(next.run(request).await);
    }

    let auth_header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth_header.strip_prefix("Bearer ").unwrap_or("");

    if token == expected_key {
        Ok(next.run(request).await)
    } else {
        tracing::warn!("Unauthorized request to {}", request.uri().path());
        Err(StatusCode::UNAUTHORIZED)
    }
}

// ─── Handlers ───────────────────────────────────────────────────────────────

async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        aliases: state.config().field_aliases.len(),
        categories: state.categories().len(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

async fn rewrite_query(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Json<ApiResponse<QueryResponse>> {
    let query = state.rewrite_query(&req.query);
    tracing::debug!(input = %req.query, output = %query, "Query rewritten");
    Json(ApiResponse::ok(QueryResponse { query }))
}

async fn search_params(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Json<ApiResponse<Vec<SearchParam>>> {
    let params = state
        .search_params(&req.query, &req.params)
        .into_iter()
        .map(|(name, value)| SearchParam {
            name: name.to_string(),
            value,
        })
        .collect();
    Json(ApiResponse::ok(params))
}

async fn derive_leases(
    State(state): State<AppState>,
    Json(req): Json<LeasesRequest>,
) -> (StatusCode, Json<ApiResponse<LeasesResponse>>) {
    if let Err(e) = req.validate() {
        return (StatusCode::BAD_REQUEST, Json(ApiResponse::err(e)));
    }

    match state.derive_leases(&req.category, &req.image) {
        Some(leases) => {
            tracing::info!(
                media_id = %req.image.id,
                category = %req.category,
                leases = leases.len(),
                "Leases derived"
            );
            (
                StatusCode::OK,
                Json(ApiResponse::ok(LeasesResponse {
                    media_id: req.image.id,
                    category: req.category,
                    leases,
                })),
            )
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err(format!(
                "Rights category '{}' not found",
                req.category
            ))),
        ),
    }
}

async fn plan_rights_change(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> (StatusCode, Json<ApiResponse<LeaseChangePlan>>) {
    if let Err(e) = req.validate() {
        return (StatusCode::BAD_REQUEST, Json(ApiResponse::err(e)));
    }

    let plan = state.plan_rights_change(&req.image, &req.category, &req.previous);
    tracing::info!(
        media_id = %plan.media_id,
        category = %req.category,
        previous = %req.previous,
        add = plan.add.len(),
        remove = plan.remove.len(),
        unchanged = plan.is_empty(),
        "Lease changes planned"
    );
    (StatusCode::OK, Json(ApiResponse::ok(plan)))
}
