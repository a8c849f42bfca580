//! HTTP API
//!
//! Axum router exposing the action route: GET describes the action,
//! POST builds the transaction, OPTIONS answers preflight. Every response
//! on the route, errors included, carries `Access-Control-Allow-Origin: *`
//! so browser callers can always read the body.

pub mod errors;
pub mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderName};
use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::metadata::ACTION_PATH;
use crate::types::ServiceConfig;

/// CORS headers attached to every action-route response, success or error.
pub(crate) fn cors_headers() -> [(HeaderName, &'static str); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            "GET, POST, PUT, DELETE, OPTIONS",
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            "Content-Type, Authorization",
        ),
    ]
}

/// Build the service router. The action route is mounted at the same path
/// the descriptor advertises.
pub fn create_router(config: Arc<ServiceConfig>) -> Router {
    Router::new()
        .route(
            ACTION_PATH,
            get(routes::describe_action)
                .post(routes::invoke_action)
                .options(routes::preflight),
        )
        .with_state(config)
}

/// Bind the listener and serve requests until the process is shut down.
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let app = create_router(Arc::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::chain::fuji;
    use crate::config;
    use crate::transaction::IMessageStore;
    use alloy::primitives::TxKind;
    use alloy::rpc::types::TransactionRequest;
    use alloy::sol_types::SolCall;

    fn test_router() -> Router {
        let mut cfg = config::default_config();
        cfg.base_url = Some("https://actions.example.com".to_string());
        create_router(Arc::new(cfg))
    }

    fn request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ORIGIN, "https://wallet.example.com")
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_describe_returns_descriptor_with_cors() {
        let response = test_router()
            .oneshot(request("GET", "/api/action"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );

        let json = body_json(response).await;
        assert_eq!(json["baseUrl"], "https://actions.example.com");
        assert_eq!(json["url"], "https://actions.example.com/api/action");
        assert_eq!(json["actions"][0]["path"], "/api/action");
        assert_eq!(json["actions"][0]["params"][0]["name"], "message");
        assert_eq!(json["actions"][0]["params"][0]["required"], true);
    }

    #[tokio::test]
    async fn test_invoke_builds_decodable_transaction() {
        let response = test_router()
            .oneshot(request("POST", "/api/action?message=hello"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );

        let json = body_json(response).await;
        assert_eq!(json["chainId"], "Avalanche Fuji");

        let serialized = json["serializedTransaction"].as_str().unwrap();
        let tx: TransactionRequest = serde_json::from_str(serialized).unwrap();
        assert_eq!(tx.to, Some(TxKind::Call(fuji::MESSAGE_STORE)));
        assert_eq!(tx.chain_id, Some(fuji::CHAIN_ID));

        let calldata = tx.input.input().unwrap();
        let call = IMessageStore::storeMessageCall::abi_decode(calldata).unwrap();
        assert_eq!(call.message, "hello");
    }

    #[tokio::test]
    async fn test_invoke_decodes_url_encoded_message() {
        let response = test_router()
            .oneshot(request("POST", "/api/action?message=hello%20world"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let serialized = json["serializedTransaction"].as_str().unwrap();
        let tx: TransactionRequest = serde_json::from_str(serialized).unwrap();
        let call =
            IMessageStore::storeMessageCall::abi_decode(tx.input.input().unwrap()).unwrap();
        assert_eq!(call.message, "hello world");
    }

    #[tokio::test]
    async fn test_invoke_without_message_is_rejected() {
        let response = test_router()
            .oneshot(request("POST", "/api/action"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );

        let json = body_json(response).await;
        assert_eq!(json["error"], "Message parameter is required");
    }

    #[tokio::test]
    async fn test_invoke_with_empty_message_is_rejected() {
        let response = test_router()
            .oneshot(request("POST", "/api/action?message="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Message parameter is required");
    }

    #[tokio::test]
    async fn test_preflight_returns_no_content() {
        let response = test_router()
            .oneshot(request("OPTIONS", "/api/action"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }
}
