mod stores;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thriftmap_core::AppConfig;
use thriftmap_osm::{NominatimClient, OsmError, OverpassClient};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id;

/// Outbound clients shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub nominatim: NominatimClient,
    pub overpass: OverpassClient,
}

impl AppState {
    /// Builds both clients from the configured URLs, timeouts and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`OsmError`] if a base URL is invalid or a client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, OsmError> {
        let nominatim = NominatimClient::new(
            &config.nominatim_url,
            &config.user_agent,
            config.geocode_timeout_secs,
        )?;
        let overpass = OverpassClient::new(
            &config.overpass_url,
            &config.user_agent,
            config.overpass_timeout_secs,
        )?;
        Ok(Self {
            nominatim,
            overpass,
        })
    }
}

/// Error response rendered as `{"error": <message>}`.
#[derive(Debug)]
pub struct ApiError {
    code: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code {
            "not_found" => StatusCode::NOT_FOUND,
            "validation_error" => StatusCode::UNPROCESSABLE_ENTITY,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorBody {
                error: &self.message,
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct FaviconData {
    message: &'static str,
}

/// Any origin, method and header, with credentials. Origin and headers are
/// mirrored because `*` is not allowed alongside credentials.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/stores/{city}", get(stores::search_stores))
        .route("/api/stores/{city}/summary", get(stores::store_summary))
        .route("/favicon.ico", get(favicon))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}

async fn favicon() -> impl IntoResponse {
    Json(FaviconData {
        message: "No favicon available",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use tower::ServiceExt;

    /// State whose clients point at an unroutable address; routes under test
    /// here never reach them.
    fn offline_state() -> AppState {
        AppState {
            nominatim: NominatimClient::new("http://127.0.0.1:9/search", "thriftmap-test/0.1", 1)
                .expect("nominatim client"),
            overpass: OverpassClient::new(
                "http://127.0.0.1:9/api/interpreter",
                "thriftmap-test/0.1",
                1,
            )
            .expect("overpass client"),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&body).expect("json parse")
    }

    #[test]
    fn api_error_codes_map_to_statuses() {
        let cases = [
            ("not_found", StatusCode::NOT_FOUND),
            ("validation_error", StatusCode::UNPROCESSABLE_ENTITY),
            ("upstream_error", StatusCode::BAD_GATEWAY),
            ("anything_else", StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, expected) in cases {
            let response = ApiError::new(code, "boom").into_response();
            assert_eq!(response.status(), expected, "code {code}");
        }
    }

    #[tokio::test]
    async fn api_error_body_is_flat_error_object() {
        let response = ApiError::new("not_found", "City not found or API failed").into_response();
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "City not found or API failed"})
        );
    }

    #[tokio::test]
    async fn favicon_returns_placeholder_message() {
        let response = build_app(offline_state())
            .oneshot(
                Request::builder()
                    .uri("/favicon.ico")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "No favicon available"})
        );
    }

    #[tokio::test]
    async fn health_returns_ok_without_upstreams() {
        let response = build_app(offline_state())
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(body_json(response).await, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn cors_preflight_allows_any_origin_with_credentials() {
        let response = build_app(offline_state())
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/stores/Gothenburg")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-header")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "x-custom-header"
        );
    }
}
