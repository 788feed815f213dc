//! # Dev server
//!
//! Serves the built front end (`trunk build` output) so the page can be
//! opened over HTTP next to the tracker API. Every response is marked
//! uncacheable and carries permissive CORS headers. The CORS layer answers
//! every `OPTIONS` request itself with an empty `200`.

use std::path::Path;
use std::time::Duration;

use axum::{
    extract::{MatchedPath, Request},
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

pub const NO_CACHE: &str = "no-store, no-cache";

/// Build the router serving the files under `dir`
pub fn build_router(dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();
            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        .on_failure(());

    Router::new()
        .fallback_service(ServeDir::new(dir.as_ref()))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(NO_CACHE),
        ))
        .layer(tracing_layer)
}

/// Resolves once Ctrl+C or SIGTERM arrives
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::debug!("Received ctrl+c signal."),
        _ = terminate => tracing::debug!("Received terminate signal."),
    }
    // Let in-flight file responses drain
    tokio::time::sleep(Duration::from_millis(100)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    fn site() -> Result<tempfile::TempDir, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("index.html"), "<html>tracker</html>")?;
        std::fs::write(dir.path().join("app.js"), "console.log('hi');")?;
        Ok(dir)
    }

    async fn body_text(response: Response) -> Result<String, Box<dyn std::error::Error>> {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok(String::from_utf8(body.to_vec())?)
    }

    #[tokio::test]
    async fn test_root_serves_index() -> Result<(), Box<dyn std::error::Error>> {
        let dir = site()?;
        let app = build_router(dir.path());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CACHE_CONTROL], NO_CACHE);
        assert_eq!(body_text(response).await?, "<html>tracker</html>");
        Ok(())
    }

    #[tokio::test]
    async fn test_serves_files_with_cors() -> Result<(), Box<dyn std::error::Error>> {
        let dir = site()?;
        let app = build_router(dir.path());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/app.js")
                    .header("origin", "http://127.0.0.1:8000")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(body_text(response).await?, "console.log('hi');");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
        let dir = site()?;
        let app = build_router(dir.path());

        let response = app
            .oneshot(Request::builder().uri("/nope.css").body(Body::empty())?)
            .await?;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[CACHE_CONTROL], NO_CACHE);
        Ok(())
    }

    #[tokio::test]
    async fn test_plain_options_is_ok() -> Result<(), Box<dyn std::error::Error>> {
        let dir = site()?;
        let app = build_router(dir.path());

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/anything")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CACHE_CONTROL], NO_CACHE);
        assert!(body_text(response).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_preflight_allows_post() -> Result<(), Box<dyn std::error::Error>> {
        let dir = site()?;
        let app = build_router(dir.path());

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/index.html")
                    .header("origin", "http://localhost:3000")
                    .header("access-control-request-method", "POST")
                    .header("access-control-request-headers", "content-type")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let methods = response.headers()[ACCESS_CONTROL_ALLOW_METHODS].to_str()?;
        assert!(methods.contains("POST"));
        Ok(())
    }
}
