//! Router fixture pointed at a given upstream

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use roadrisk_relay::{config::Config, create_router, AppState};

pub const VALID_ASSESSMENT: &str = r#"{"road_type":6,"weather_conditions":"Rain","speed_limit":60,"time_of_day":"Night","junction_detail":"T Junction"}"#;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub struct TestApp {
    pub config: Config,
    pub router: Router,
}

impl TestApp {
    pub fn new(upstream_base_url: &str) -> Self {
        Self::with_config(Config {
            prediction_api_url: upstream_base_url.to_string(),
            ..Default::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(config.clone()).expect("Failed to build app state");
        Self {
            config,
            router: create_router(state),
        }
    }

    pub async fn post(&self, uri: &str, body: impl Into<Body>) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse { status, headers, body }
    }
}
