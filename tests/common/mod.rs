//! Shared mock backends for integration tests.

use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

pub const RESET_PATH: &str = "/api/v1/auth/forgot-password";

/// What the mock backend saw.
#[derive(Debug)]
pub struct CapturedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct BackendState {
    status: StatusCode,
    content_type: &'static str,
    body: &'static str,
    captured: mpsc::UnboundedSender<CapturedRequest>,
}

async fn forgot_password(
    State(state): State<BackendState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let _ = state.captured.send(CapturedRequest { content_type, body });

    (
        state.status,
        [(header::CONTENT_TYPE, state.content_type)],
        state.body,
    )
}

/// Start a forgot-password backend that answers every request with the given
/// status, content type and body. Returns the full endpoint URL and a channel
/// of received requests.
pub async fn start_reset_backend(
    status: u16,
    content_type: &'static str,
    body: &'static str,
) -> (String, mpsc::UnboundedReceiver<CapturedRequest>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let state = BackendState {
        status: StatusCode::from_u16(status).unwrap(),
        content_type,
        body,
        captured: tx,
    };
    let app = Router::new()
        .route(RESET_PATH, post(forgot_password))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{}{}", addr, RESET_PATH), rx)
}

/// Start a backend that promises more body bytes than it sends, then hangs up.
pub async fn start_truncating_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 64\r\nConnection: close\r\n\r\n{\"message\":";
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
                tokio::time::sleep(Duration::from_millis(10)).await;
            });
        }
    });

    format!("http://{}{}", addr, RESET_PATH)
}

/// An endpoint on a privileged port nothing listens on.
pub fn refused_endpoint() -> String {
    format!("http://127.0.0.1:1{}", RESET_PATH)
}
