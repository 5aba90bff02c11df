#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::{Value, json};
use tower::ServiceExt;

use hello_rust_gate::app::{build_router, build_state};
use hello_rust_gate::config::Config;
use hello_rust_gate::services::auth::NoopSink;

pub const SECRET: &str = "integration-test-secret";

pub fn config() -> Config {
    Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(SECRET.to_string()),
        _ => None,
    })
    .unwrap()
}

pub fn app() -> Router {
    let config = config();
    let state = build_state(&config, Arc::new(NoopSink)).unwrap();
    build_router(state, &config)
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn sign_with(alg: Algorithm, secret: &str, claims: &Value) -> String {
    jsonwebtoken::encode(
        &Header::new(alg),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// Valid HS256 token for `{user_id, role}` expiring in ten minutes.
pub fn token(user_id: i32, role: &str) -> String {
    sign_with(
        Algorithm::HS256,
        SECRET,
        &json!({
            "user_id": user_id,
            "role": role,
            "iat": now(),
            "exp": now() + 600,
        }),
    )
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn call(app: Router, uri: &str, authorization: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn error_code(res: &TestResponse) -> &str {
    res.body["error"]["code"].as_str().unwrap_or_default()
}

pub fn error_message(res: &TestResponse) -> &str {
    res.body["error"]["message"].as_str().unwrap_or_default()
}
