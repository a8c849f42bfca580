//! Route Handlers
//!
//! The describe, invoke, and preflight handlers for the action route.
//! Each request is an independent, stateless transform of its input.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::api::cors_headers;
use crate::api::errors::ApiError;
use crate::metadata;
use crate::transaction;
use crate::types::ServiceConfig;

/// Query parameters accepted by the invoke route.
#[derive(Debug, Deserialize)]
pub struct InvokeParams {
    pub message: Option<String>,
}

/// GET: return the validated action descriptor for this host.
pub async fn describe_action(
    State(config): State<Arc<ServiceConfig>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let base_url = resolve_base_url(&headers, &config);
    let metadata = metadata::describe(&base_url)?;
    Ok((cors_headers(), Json(metadata)))
}

/// POST: build and serialize the `storeMessage` transaction for the
/// `message` query parameter.
pub async fn invoke_action(
    State(config): State<Arc<ServiceConfig>>,
    Query(params): Query<InvokeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let message = params
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .ok_or(ApiError::MissingParameter)?;

    let now_secs = chrono::Utc::now().timestamp() as u64;
    let response = transaction::build_and_serialize(message, now_secs, &config.builder)?;

    tracing::debug!(message_len = message.len(), "built storeMessage transaction");
    Ok((cors_headers(), Json(response)))
}

/// OPTIONS: empty 204 advertising the accepted methods and the extended
/// header list browsers may ask about.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                "GET, POST, PUT, DELETE, OPTIONS",
            ),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                "Content-Type, Authorization, X-CSRF-Token, X-Requested-With, Accept, \
                 Accept-Version, Content-Length, Content-MD5, Date, X-Api-Version",
            ),
        ],
    )
}

/// Base URL the descriptor advertises: the configured override when set,
/// otherwise derived from forwarded-proto/host headers with a localhost
/// fallback.
fn resolve_base_url(headers: &HeaderMap, config: &ServiceConfig) -> String {
    if let Some(base) = &config.base_url {
        return base.trim_end_matches('/').to_string();
    }

    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    match headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
        Some(host) => format!("{}://{}", proto, host),
        None => format!("http://localhost:{}", config.port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn test_resolve_base_url_prefers_configured_override() {
        let mut cfg = config::default_config();
        cfg.base_url = Some("https://actions.example.com/".to_string());

        let headers = HeaderMap::new();
        assert_eq!(
            resolve_base_url(&headers, &cfg),
            "https://actions.example.com"
        );
    }

    #[test]
    fn test_resolve_base_url_from_host_headers() {
        let cfg = config::default_config();

        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, "actions.example.com".parse().unwrap());
        headers.insert("x-forwarded-proto", "https".parse().unwrap());

        assert_eq!(
            resolve_base_url(&headers, &cfg),
            "https://actions.example.com"
        );
    }

    #[test]
    fn test_resolve_base_url_falls_back_to_localhost() {
        let cfg = config::default_config();
        let headers = HeaderMap::new();
        assert_eq!(resolve_base_url(&headers, &cfg), "http://localhost:3000");
    }
}
