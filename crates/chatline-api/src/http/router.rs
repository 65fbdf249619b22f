//! Axum router configuration with middleware.
//!
//! Routes live under `/api/`; `/health` sits at the root.
//! Middleware: panic containment, CORS, tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::error::{history_panic_response, panic_response};
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/chat", post(handlers::chat::post_chat))
        .route(
            "/conversations",
            get(handlers::conversation::list_conversations)
                .layer(CatchPanicLayer::custom(history_panic_response)),
        );

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple liveness check.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Json;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use chatline_types::config::AppConfig;
    use chatline_types::llm::FALLBACK_BACKEND_ERROR;

    use crate::http::error::{GENERIC_FAILURE_REPLY, HISTORY_FAILURE, NO_MESSAGE_REPLY};

    /// Stub Ollama server that echoes the last prompt line and counts calls.
    async fn spawn_backend(calls: Arc<AtomicUsize>) -> String {
        let router = Router::new().route(
            "/api/generate",
            post(move |Json(body): Json<Value>| {
                let calls = Arc::clone(&calls);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    let prompt = body["prompt"].as_str().unwrap_or_default();
                    let asked = prompt
                        .lines()
                        .rev()
                        .find_map(|l| l.strip_prefix("User: "))
                        .unwrap_or_default()
                        .to_string();
                    Json(json!({ "response": format!("you said {asked}") }))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn test_state(base_url: String) -> (AppState, TempDir) {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.inference.base_url = base_url;
        let state = AppState::from_config(dir.path(), config).await.unwrap();
        (state, dir)
    }

    fn chat_request(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn history_request() -> Request<Body> {
        Request::builder()
            .uri("/api/conversations")
            .body(Body::empty())
            .unwrap()
    }

    async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _dir) = test_state("http://127.0.0.1:9".to_string()).await;
        let router = build_router(state);

        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(&router, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_chat_then_history() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (state, _dir) = test_state(spawn_backend(Arc::clone(&calls)).await).await;
        let router = build_router(state);

        let (status, body) = send(
            &router,
            chat_request(json!({
                "message": "hello",
                "history": [{"role": "user", "text": "before"}, {"role": "bot", "text": "ok"}]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "reply": "you said hello" }));

        let (status, body) = send(&router, chat_request(json!({ "message": "again" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], "you said again");

        let (status, body) = send(&router, history_request()).await;
        assert_eq!(status, StatusCode::OK);
        let turns = body.as_array().unwrap();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0]["user"], "hello");
        assert_eq!(turns[0]["bot"], "you said hello");
        assert_eq!(turns[1]["user"], "again");
        assert!(turns[1]["timestamp"].is_string());
        assert!(turns[0].get("id").is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_missing_message_is_rejected_before_backend() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (state, _dir) = test_state(spawn_backend(Arc::clone(&calls)).await).await;
        let router = build_router(state);

        for body in [json!({}), json!({ "message": "" }), json!({ "message": null })] {
            let (status, resp) = send(&router, chat_request(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(resp, json!({ "reply": NO_MESSAGE_REPLY }));
        }

        let (status, resp) = send(
            &router,
            Request::builder()
                .method(Method::POST)
                .uri("/api/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["reply"], NO_MESSAGE_REPLY);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        let (_, history) = send(&router, history_request()).await;
        assert_eq!(history, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_history_does_not_reject_message() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (state, _dir) = test_state(spawn_backend(Arc::clone(&calls)).await).await;
        let router = build_router(state);

        for history in [
            json!([{ "text": "no role" }]),
            json!([{ "role": "user", "text": null }]),
            json!([42, "junk", { "role": 7 }]),
            json!("not a list"),
        ] {
            let (status, body) = send(
                &router,
                chat_request(json!({ "message": "hello", "history": history })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({ "reply": "you said hello" }));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 4);
        let (_, history) = send(&router, history_request()).await;
        assert_eq!(history.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_unreachable_backend_still_saves_fallback() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let (state, _dir) = test_state(format!("http://{addr}")).await;
        let router = build_router(state);

        let (status, body) = send(&router, chat_request(json!({ "message": "hi" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], FALLBACK_BACKEND_ERROR);

        let (_, history) = send(&router, history_request()).await;
        assert_eq!(history[0]["bot"], FALLBACK_BACKEND_ERROR);
    }

    #[tokio::test]
    async fn test_storage_failure_maps_to_500() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (state, _dir) = test_state(spawn_backend(Arc::clone(&calls)).await).await;
        state.shutdown().await;
        let router = build_router(state);

        let (status, body) = send(&router, chat_request(json!({ "message": "hi" }))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "reply": GENERIC_FAILURE_REPLY }));

        let (status, body) = send(&router, history_request()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": HISTORY_FAILURE }));
    }

    #[tokio::test]
    async fn test_concurrent_chats_all_saved() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (state, _dir) = test_state(spawn_backend(Arc::clone(&calls)).await).await;
        let router = build_router(state);
        let n = 12;

        let mut handles = Vec::with_capacity(n);
        for i in 0..n {
            let router = router.clone();
            handles.push(tokio::spawn(async move {
                let req = chat_request(json!({ "message": format!("msg {i}") }));
                router.oneshot(req).await.unwrap().status()
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), StatusCode::OK);
        }

        let (_, history) = send(&router, history_request()).await;
        assert_eq!(history.as_array().unwrap().len(), n);
        assert_eq!(calls.load(Ordering::SeqCst), n);
    }
}
