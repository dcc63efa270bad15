use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::care::rules::summarize;
use crate::catalog::store::ProductCatalog;
use crate::cli::{load_catalog, ServeArgs};
use crate::core::candidate::CandidateSpecies;
use crate::core::product::CatalogEntry;
use crate::resolution::{IdentificationOutcome, Resolver};
use crate::utils::validation::validate_candidate_count;

/// Security configuration constants to prevent `DoS` attacks
pub const MAX_REQUEST_BODY_SIZE: usize = 16 * 1024 * 1024; // 16MB
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Shared application state
pub struct AppState {
    pub catalog: ProductCatalog,
    pub resolver: Resolver,
}

impl AppState {
    pub fn new(catalog: ProductCatalog) -> Self {
        Self {
            catalog,
            resolver: Resolver::default(),
        }
    }
}

/// Body of `POST /api/resolve`
#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    pub candidates: Vec<CandidateSpecies>,

    /// Catalog snapshot for this request; the server catalog is used when absent
    #[serde(default)]
    pub catalog: Option<Vec<CatalogEntry>>,
}

/// Enhanced error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None, // Never expose internal details to prevent information disclosure
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Routes and middleware, without per-IP rate limiting.
///
/// Rate limiting needs the peer address, which only exists when served
/// through `into_make_service_with_connect_info`; see [`create_router`].
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/resolve", post(resolve_handler))
        .route("/api/catalog", get(catalog_handler))
        .route("/api/rules", get(rules_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    REQUEST_TIMEOUT,
                ))
                // Limit concurrent requests to prevent DOS
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
                .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE)),
        )
}

/// Create the application router with all routes and middleware configured.
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
pub fn create_router(state: Arc<AppState>) -> Router {
    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .unwrap();

    routes(state).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    })
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    tracing::info!("Serving catalog with {} products", catalog.len());
    let app = create_router(Arc::new(AppState::new(catalog)));

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting plant-resolver web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn index_handler() -> Html<&'static str> {
    Html(
        "<!doctype html><html><head><title>plant-resolver</title></head><body>\
         <h1>plant-resolver</h1><ul>\
         <li><code>POST /api/resolve</code> resolve identification candidates</li>\
         <li><code>GET /api/catalog</code> list catalog products</li>\
         <li><code>GET /api/rules</code> list care rules</li>\
         </ul></body></html>",
    )
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// API endpoint for resolving an identification
async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ResolveRequest>, JsonRejection>,
) -> Response {
    let start_time = std::time::Instant::now();

    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            let error = create_safe_error_response(
                "invalid_request",
                "Request body must be JSON with a 'candidates' array",
                Some(&rejection.body_text()),
            );
            return (rejection.status(), Json(error)).into_response();
        }
    };

    match resolve_request(&state, request) {
        Ok(outcome) => {
            tracing::info!(
                "Resolved identification in {} ms",
                start_time.elapsed().as_millis()
            );
            Json(outcome).into_response()
        }
        Err(error) => (StatusCode::BAD_REQUEST, Json(error)).into_response(),
    }
}

/// Validate a request and run it through the resolver
///
/// # Errors
///
/// Returns an `ErrorResponse` when the request exceeds limits or carries an invalid catalog.
pub fn resolve_request(
    state: &AppState,
    request: ResolveRequest,
) -> Result<IdentificationOutcome, ErrorResponse> {
    if let Err(e) = validate_candidate_count(request.candidates.len()) {
        return Err(rejected("too_many_candidates", &e));
    }

    match request.catalog {
        Some(entries) => {
            let catalog = match ProductCatalog::validated(entries) {
                Ok(catalog) => catalog,
                Err(e) => return Err(rejected("invalid_catalog", &e)),
            };
            Ok(state.resolver.resolve(&request.candidates, &catalog))
        }
        None => Ok(state.resolver.resolve(&request.candidates, &state.catalog)),
    }
}

/// Client-caused failure; the message is safe to echo back
fn rejected(error_type: &str, error: &impl std::fmt::Display) -> ErrorResponse {
    create_safe_error_response(error_type, &error.to_string(), None)
}

async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "count": state.catalog.len(),
        "products": state.catalog.products(),
    }))
}

async fn rules_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(summarize(state.resolver.care_engine().rules()))
}
