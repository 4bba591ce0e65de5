//! Shared HTTP plumbing for both services.
//!
//! Binding, graceful serving, request logging and the JSON error body used
//! by every failing route.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::net::SocketAddr;
use std::time::Instant;
use tokio::net::TcpListener;

/// Error types for running a service
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServerError {
    /// The listen address could not be bound
    #[error("Failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },
    /// The server stopped with an I/O error
    #[error("Server error: {0}")]
    Serve(String),
}

/// JSON body returned by failing routes: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// JSON body of the `/health` routes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthBody {
    /// "ok", or "shutting_down" once shutdown has been signaled
    pub status: String,
    /// Word count, reported by the dictionary service only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<usize>,
}

/// Health response: 200 while serving, 503 once shutdown has been signaled
pub fn health_response(words: Option<usize>) -> (StatusCode, Json<HealthBody>) {
    if crate::shutdown::is_shutting_down() {
        let body = HealthBody {
            status: "shutting_down".to_string(),
            words,
        };
        return (StatusCode::SERVICE_UNAVAILABLE, Json(body));
    }
    let body = HealthBody {
        status: "ok".to_string(),
        words,
    };
    (StatusCode::OK, Json(body))
}

/// Bind a TCP listener. Port 0 picks an ephemeral port.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr).await.map_err(|e| ServerError::Bind {
        addr: addr.to_string(),
        message: e.to_string(),
    })
}

/// Serve `router` on `listener` until `shutdown` resolves, then drain in-flight requests
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        crate::info!("Listening on http://{}", addr);
    }

    let app = router.layer(middleware::from_fn(log_request));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))?;

    crate::info!("Server stopped");
    Ok(())
}

/// Log method, path, status and latency of every request
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    if response.status().is_server_error() {
        crate::warn!("{} {} -> {} ({:.1}ms)", method, uri, response.status(), elapsed_ms);
    } else {
        crate::debug!("{} {} -> {} ({:.1}ms)", method, uri, response.status(), elapsed_ms);
    }
    response
}

#[cfg(test)]
#[path = "server_test.rs"]
mod tests;
