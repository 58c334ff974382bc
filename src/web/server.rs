use axum::http::header;
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
use tracing::{debug, info, warn};

use crate::cli::ServeArgs;
use crate::core::analysis::{analyze, AnalysisOptions};
use crate::core::error::AnalysisError;
use crate::core::types::Frame;
use crate::core::motif::IUPAC_CODES;
use crate::parsing::fasta::extract_sequence_text;
use crate::utils::validation::{check_input_limits, DEFAULT_MAX_SEQUENCE_LENGTH};

/// Security configuration constants to prevent `DoS` attacks
pub const MAX_REQUEST_BODY_SIZE: usize = 2 * 1024 * 1024; // 2MB
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Maximum number of bases accepted per request
    pub max_sequence_length: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            max_sequence_length: DEFAULT_MAX_SEQUENCE_LENGTH,
        }
    }
}

impl AppState {
    /// Request body limit large enough for the configured sequence length
    #[must_use]
    pub fn body_limit(&self) -> usize {
        MAX_REQUEST_BODY_SIZE.max(self.max_sequence_length.saturating_add(64 * 1024))
    }
}

/// Body of `POST /api/analyze`
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw sequence text; pasted FASTA is accepted
    pub sequence: String,
    /// Any JSON value; only the integers 1, 2 and 3 pass [`AnalyzeRequest::options`]
    #[serde(default)]
    pub frame: Option<serde_json::Value>,
    #[serde(default)]
    pub reverse_complement: bool,
    #[serde(default)]
    pub stop_at_stop: bool,
    #[serde(default)]
    pub motif: Option<String>,
}

impl AnalyzeRequest {
    /// Convert to analysis options.
    ///
    /// A missing or `null` frame means frame 1.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidFrame` unless `frame` is 1, 2 or 3.
    pub fn options(&self) -> Result<AnalysisOptions, AnalysisError> {
        let frame = match &self.frame {
            None | Some(serde_json::Value::Null) => AnalysisOptions::default().frame,
            Some(serde_json::Value::Number(n)) => n
                .as_i64()
                .ok_or_else(|| AnalysisError::InvalidFrame(n.to_string()))?,
            Some(other) => return Err(AnalysisError::InvalidFrame(other.to_string())),
        };
        Frame::new(frame)?;

        Ok(AnalysisOptions {
            frame,
            reverse_complement: self.reverse_complement,
            stop_at_stop: self.stop_at_stop,
            motif: self.motif.clone(),
        })
    }
}

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub detail: String,
}

/// Build an error response, logging any internal detail server-side only
pub fn error_response(
    status: StatusCode,
    error_type: &str,
    detail: &str,
    internal_error: Option<&str>,
) -> Response {
    if let Some(internal_msg) = internal_error {
        warn!("Request rejected ({}): {}", error_type, internal_msg);
    } else {
        debug!("Request rejected ({}): {}", error_type, detail);
    }

    (
        status,
        Json(ErrorResponse {
            error_type: error_type.to_string(),
            detail: detail.to_string(),
        }),
    )
        .into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Build the application routes with security headers, timeout, concurrency
/// and body limits, but without per-IP rate limiting.
///
/// The rate limiter needs the peer address from `ConnectInfo`, which only
/// exists when served through [`create_router`].
pub fn build_app(state: AppState) -> Router {
    let body_limit = state.body_limit();
    let state = Arc::new(state);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/iupac", get(iupac_handler))
        .route("/api/health", get(health_handler))
        // Static file routes
        .route("/static/css/styles.css", get(styles_css_handler))
        .route("/static/js/main.js", get(main_js_handler))
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
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("content-security-policy"),
                    HeaderValue::from_static("default-src 'self'"),
                ))
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    REQUEST_TIMEOUT,
                ))
                // Limit concurrent requests to prevent DOS
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
                .layer(DefaultBodyLimit::max(body_limit)),
        )
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router(state: AppState) -> anyhow::Result<Router> {
    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?;

    Ok(build_app(state).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    }))
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let app = create_router(AppState {
        max_sequence_length: args.max_sequence_length,
    })?;

    let addr = format!("{}:{}", args.address, args.port);
    let listener = TcpListener::bind(&addr).await?;
    println!("Starting dna-motif-finder web server at http://{addr}");
    info!(
        "Listening on {addr} (max sequence length {})",
        args.max_sequence_length
    );

    if args.open {
        if let Err(e) = open::that(format!("http://{addr}")) {
            warn!("Could not open browser: {e}");
        }
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

/// Static CSS handler
async fn styles_css_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("static/css/styles.css"),
    )
}

async fn main_js_handler() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        include_str!("static/js/main.js"),
    )
}

/// API endpoint for analyzing a sequence
async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                "input_too_large",
                "Request body exceeds size limit",
                None,
            );
        }
        Err(rejection) => {
            let detail = rejection.body_text();
            return error_response(
                StatusCode::BAD_REQUEST,
                "invalid_request",
                &detail,
                Some(&detail),
            );
        }
    };

    let options = match request.options() {
        Ok(options) => options,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.kind(), &e.to_string(), None),
    };

    let input = match extract_sequence_text(&request.sequence) {
        Ok(input) => input,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, "invalid_fasta", &e.to_string(), None);
        }
    };

    // Only sequence bases count toward the limit, not a pasted FASTA header
    if let Err(e) = check_input_limits(
        &input.sequence,
        options.motif.as_deref(),
        state.max_sequence_length,
    ) {
        return error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            "input_too_large",
            &e.to_string(),
            None,
        );
    }

    match analyze(&input.sequence, &options) {
        Ok(result) => Json(result).into_response(),
        Err(e) => error_response(StatusCode::BAD_REQUEST, e.kind(), &e.to_string(), None),
    }
}

/// Return the IUPAC codes accepted in motifs
async fn iupac_handler() -> Json<serde_json::Value> {
    let codes: Vec<serde_json::Value> = IUPAC_CODES
        .iter()
        .map(|(code, bases)| {
            serde_json::json!({
                "code": char::from(*code).to_string(),
                "bases": bases,
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": codes.len(),
        "codes": codes,
    }))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
