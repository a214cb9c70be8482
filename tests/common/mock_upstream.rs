//! Throwaway prediction backend bound to an ephemeral local port

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use tokio::net::TcpListener;

/// One request as the upstream saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub headers: HeaderMap,
    pub body: Bytes,
}

pub struct MockUpstream {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockUpstream {
    /// Answer every `/predict` call with a fixed status and body
    pub async fn respond(status: StatusCode, response_body: &'static str) -> Self {
        Self::start(status, response_body, None).await
    }

    /// Answer only after `delay`
    pub async fn stall(delay: Duration) -> Self {
        Self::start(StatusCode::OK, "{}", Some(delay)).await
    }

    async fn start(status: StatusCode, response_body: &'static str, delay: Option<Duration>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        let app = Router::new().route(
            "/predict",
            post(move |headers: HeaderMap, body: Bytes| {
                let recorded = Arc::clone(&recorded);
                async move {
                    recorded.lock().unwrap().push(RecordedRequest { headers, body });
                    if let Some(delay) = delay {
                        tokio::time::sleep(delay).await;
                    }
                    (status, [(CONTENT_TYPE, "application/json")], response_body)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Base URL of a local port nothing listens on
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
