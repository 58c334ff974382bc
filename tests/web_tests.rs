//! HTTP API tests
//!
//! Requests are sent straight into the router with `oneshot`, so no socket
//! is bound. The per-IP rate limiter is left out because it needs the peer
//! address that only a real listener provides.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use dna_motif_finder::web::server::{build_app, create_router, AppState, ErrorResponse};

fn app() -> Router {
    build_app(AppState::default())
}

async fn post_json(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn analyze(body: Value) -> (StatusCode, Value) {
    post_json(app(), body.to_string()).await
}

async fn get(uri: &str) -> axum::response::Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_analyze_success() {
    let (status, body) = analyze(json!({
        "sequence": "atg aaa tga",
        "frame": 1,
        "reverse_complement": false,
        "stop_at_stop": true,
        "motif": "aar"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dna"], "ATGAAATGA");
    assert_eq!(body["protein"], "MK*");
    assert_eq!(body["frame"], 1);
    assert_eq!(body["stop_at_stop"], true);
    assert_eq!(body["motif"], "AAR");
    assert_eq!(body["motif_positions"], json!([3]));
}

#[tokio::test]
async fn test_analyze_defaults_only_sequence() {
    let (status, body) = analyze(json!({ "sequence": "ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["protein"], "MAIVMGR*KGAR*");
    assert_eq!(body["frame"], 1);
    assert_eq!(body["reverse_complement"], false);
    assert!(body.get("motif").is_none());
    assert!(body.get("motif_positions").is_none());
}

#[tokio::test]
async fn test_analyze_null_motif_skips_search() {
    let (status, body) = analyze(json!({ "sequence": "ATG", "motif": null })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("motif_positions").is_none());
}

#[tokio::test]
async fn test_analyze_reverse_complement() {
    let (status, body) = analyze(json!({
        "sequence": "TCATTTCAT",
        "reverse_complement": true
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["protein"], "MK*");
    // motif search and the echoed sequence stay on the forward strand
    assert_eq!(body["dna"], "TCATTTCAT");
}

#[tokio::test]
async fn test_analyze_pasted_fasta() {
    let (status, body) = analyze(json!({
        "sequence": ">orf1 pasted\nATGAAA\nTGA\n",
        "stop_at_stop": true
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dna"], "ATGAAATGA");
    assert_eq!(body["protein"], "MK*");
}

#[tokio::test]
async fn test_analysis_errors_map_to_bad_request() {
    let cases = [
        (json!({ "sequence": "   " }), "empty_sequence"),
        (json!({ "sequence": "ATGU" }), "invalid_character"),
        (json!({ "sequence": "ATG", "frame": 0 }), "invalid_frame"),
        (json!({ "sequence": "ATG", "frame": 4 }), "invalid_frame"),
        (json!({ "sequence": "ATG", "motif": "  " }), "empty_motif"),
        (json!({ "sequence": "ATG", "motif": "AX" }), "invalid_motif"),
    ];

    for (request, expected_type) in cases {
        let (status, body) = analyze(request.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "request {request}");

        let error: ErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(error.error_type, expected_type, "request {request}");
        assert!(!error.detail.is_empty());
    }
}

#[tokio::test]
async fn test_invalid_character_detail() {
    let (_, body) = analyze(json!({ "sequence": "AC GX" })).await;
    assert_eq!(
        body["detail"],
        "DNA contains invalid base 'X' at position 3 (allowed: A, C, G, T, N)"
    );
}

#[tokio::test]
async fn test_frame_checked_before_sequence() {
    let (status, body) = analyze(json!({ "sequence": "", "frame": 7 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "invalid_frame");
}

#[tokio::test]
async fn test_non_integer_frames_are_invalid_frame() {
    let cases = [
        (r#"{"sequence": "ATG", "frame": 18446744073709551615}"#, "18446744073709551615"),
        (r#"{"sequence": "ATG", "frame": 2.5}"#, "2.5"),
        (r#"{"sequence": "ATG", "frame": "2"}"#, "\"2\""),
        (r#"{"sequence": "", "frame": true}"#, "true"),
    ];

    for (request, shown) in cases {
        let (status, body) = post_json(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "request {request}");
        assert_eq!(body["error_type"], "invalid_frame", "request {request}");
        assert!(
            body["detail"].as_str().unwrap().contains(shown),
            "request {request}: {body}"
        );
    }
}

#[tokio::test]
async fn test_null_frame_means_first_frame() {
    let (status, body) = analyze(json!({ "sequence": "ATGAAA", "frame": null })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["frame"], 1);
    assert_eq!(body["protein"], "MK");
}

#[tokio::test]
async fn test_frame_checked_before_fasta() {
    let (status, body) = analyze(json!({ "sequence": ">empty\n", "frame": 4 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "invalid_frame");
}

#[tokio::test]
async fn test_malformed_json_is_invalid_request() {
    let (status, body) = post_json(app(), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "invalid_request");
}

#[tokio::test]
async fn test_missing_sequence_is_invalid_request() {
    let (status, body) = analyze(json!({ "frame": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "invalid_request");
    assert!(body["detail"].as_str().unwrap().contains("sequence"));
}

#[tokio::test]
async fn test_wrong_field_type_detail_names_the_problem() {
    let (status, body) = analyze(json!({ "sequence": "ATG", "stop_at_stop": "yes" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "invalid_request");
    assert!(!body["detail"].as_str().unwrap().contains("'sequence' field"));
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/analyze")
        .body(Body::from(json!({ "sequence": "ATG" }).to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sequence_over_configured_limit() {
    let app = build_app(AppState {
        max_sequence_length: 10,
    });
    let body = json!({ "sequence": "ACGTACGTACGT" }).to_string();
    let (status, body) = post_json(app, body).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error_type"], "input_too_large");
}

#[tokio::test]
async fn test_fasta_header_not_counted_toward_limit() {
    let app = build_app(AppState {
        max_sequence_length: 10,
    });
    let body = json!({
        "sequence": ">a header much longer than ten characters\nATGAAATGA\n"
    })
    .to_string();
    let (status, body) = post_json(app, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dna"], "ATGAAATGA");
}

#[tokio::test]
async fn test_body_over_limit() {
    let state = AppState::default();
    let oversized = "A".repeat(state.body_limit() + 1);
    let body = json!({ "sequence": oversized }).to_string();
    let (status, body) = post_json(build_app(state), body).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error_type"], "input_too_large");
}

#[tokio::test]
async fn test_security_headers_present() {
    let response = get("/api/health").await;
    let headers = response.headers();

    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
    assert_eq!(headers["content-security-policy"], "default-src 'self'");
}

#[tokio::test]
async fn test_index_page() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("id=\"sequence\""));
    assert!(html.contains("id=\"motif\""));
    assert!(html.contains("/static/js/main.js"));
}

#[tokio::test]
async fn test_static_assets() {
    let css = get("/static/css/styles.css").await;
    assert_eq!(css.status(), StatusCode::OK);
    assert_eq!(css.headers()[header::CONTENT_TYPE], "text/css; charset=utf-8");

    let js = get("/static/js/main.js").await;
    assert_eq!(js.status(), StatusCode::OK);
    assert_eq!(
        js.headers()[header::CONTENT_TYPE],
        "application/javascript; charset=utf-8"
    );
}

#[tokio::test]
async fn test_iupac_endpoint() {
    let response = get("/api/iupac").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["count"], 15);

    let codes = body["codes"].as_array().unwrap();
    let r = codes.iter().find(|c| c["code"] == "R").unwrap();
    assert_eq!(r["bases"], "AG");
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = get("/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = get("/api/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_create_router_with_rate_limiting() {
    assert!(create_router(AppState::default()).is_ok());
}
