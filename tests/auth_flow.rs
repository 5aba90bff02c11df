//! End-to-end tests for the auth gate: router + middleware + handlers.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::Algorithm;
use serde_json::json;

use common::{SECRET, app, call, error_code, error_message, now, send, sign_with, token};
use hello_rust_gate::api::v1::extractors::CurrentUser;
use hello_rust_gate::middleware::auth::{protected, role};
use hello_rust_gate::services::auth::{Authenticator, Authorizer, TokenVerifier};

// -- Public routes ------------------------------------------------------------

#[tokio::test]
async fn health_needs_no_token() {
    for uri in ["/health", "/api/v1/health"] {
        let res = call(app(), uri, None).await;
        assert_eq!(res.status, StatusCode::OK, "{uri}");
        assert_eq!(res.body["status"], "ok");
    }
}

#[tokio::test]
async fn unknown_protected_path_is_not_found() {
    let res = call(app(), "/api/v1/users/nope", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

// -- Authentication -----------------------------------------------------------

#[tokio::test]
async fn valid_token_reaches_handler_with_identity() {
    let header = format!("Bearer {}", token(42, "admin"));
    let res = call(app(), "/api/v1/users/me", Some(&header)).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({"id": 42, "role": "admin"}));
}

#[tokio::test]
async fn same_token_works_twice() {
    let header = format!("Bearer {}", token(5, "user"));
    let first = call(app(), "/api/v1/users/me", Some(&header)).await;
    let second = call(app(), "/api/v1/users/me", Some(&header)).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn missing_header_is_unauthorized() {
    let res = call(app(), "/api/v1/users/me", None).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&res), "UNAUTHORIZED");
    assert_eq!(error_message(&res), "Missing authorization header");
}

#[tokio::test]
async fn scheme_without_token_is_missing_token() {
    let res = call(app(), "/api/v1/users/me", Some("bearer ")).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&res), "UNAUTHORIZED");
    assert_eq!(error_message(&res), "Token is required");
}

#[tokio::test]
async fn wrong_scheme_is_invalid_format() {
    for header in ["Token xyz", "Basic dXNlcjpwYXNz", "Bearertoken"] {
        let res = call(app(), "/api/v1/users/me", Some(header)).await;

        assert_eq!(res.status, StatusCode::UNAUTHORIZED, "{header}");
        assert_eq!(error_code(&res), "UNAUTHORIZED");
        assert_eq!(
            error_message(&res),
            "Invalid authorization header format. Expected: Bearer <token>"
        );
    }
}

#[tokio::test]
async fn lowercase_scheme_is_accepted() {
    let header = format!("bearer {}", token(8, "user"));
    let res = call(app(), "/api/v1/users/me", Some(&header)).await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn bad_tokens_are_invalid_token() {
    let claims = json!({"user_id": 1, "role": "admin", "exp": now() + 600});
    let forged = |alg: &str| {
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(json!({"alg": alg, "typ": "JWT"}).to_string()),
            URL_SAFE_NO_PAD.encode(claims.to_string()),
            URL_SAFE_NO_PAD.encode(b"sig"),
        )
    };

    let tokens = [
        // other secret
        sign_with(Algorithm::HS256, "not-the-secret", &claims),
        // expired
        sign_with(
            Algorithm::HS256,
            SECRET,
            &json!({"user_id": 1, "role": "admin", "exp": now() - 3600}),
        ),
        // not yet valid
        sign_with(
            Algorithm::HS256,
            SECRET,
            &json!({"user_id": 1, "role": "admin", "exp": now() + 7200, "nbf": now() + 3600}),
        ),
        // asymmetric / none headers
        forged("RS256"),
        forged("ES256"),
        forged("none"),
        // structurally malformed
        "abc.def.ghi".to_string(),
        "definitely-not-a-jwt".to_string(),
    ];

    for t in tokens {
        let res = call(app(), "/api/v1/users/me", Some(&format!("Bearer {t}"))).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED, "{t}");
        assert_eq!(error_code(&res), "INVALID_TOKEN", "{t}");
        assert_eq!(error_message(&res), "Invalid or expired token");
    }
}

#[tokio::test]
async fn wrong_claim_shape_is_invalid_token() {
    let t = sign_with(
        Algorithm::HS256,
        SECRET,
        &json!({"sub": "42", "exp": now() + 600}),
    );
    let res = call(app(), "/api/v1/users/me", Some(&format!("Bearer {t}"))).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&res), "INVALID_TOKEN");
    assert_eq!(error_message(&res), "Invalid token claims");
}

#[tokio::test]
async fn rejected_request_never_reaches_handler() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    let authenticator = Arc::new(Authenticator::new(
        TokenVerifier::new(SECRET.as_bytes(), 0).unwrap(),
    ));
    let router: Router = protected(
        Router::new().route(
            "/thing",
            get(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    "ok"
                }
            }),
        ),
        authenticator,
    );

    for header in [None, Some("Token xyz"), Some("Bearer abc.def.ghi")] {
        let res = call(router.clone(), "/thing", header).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    let ok = format!("Bearer {}", token(1, "user"));
    let res = call(router, "/thing", Some(&ok)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

// -- Authorization ------------------------------------------------------------

#[tokio::test]
async fn admin_role_passes_admin_group() {
    let header = format!("Bearer {}", token(42, "admin"));
    let res = call(app(), "/api/v1/admin/me", Some(&header)).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({"id": 42, "role": "admin", "allowed_roles": ["admin"]})
    );
}

#[tokio::test]
async fn other_roles_are_forbidden() {
    for role in ["user", "Admin", "ADMIN", "admin ", ""] {
        let header = format!("Bearer {}", token(7, role));
        let res = call(app(), "/api/v1/admin/me", Some(&header)).await;

        assert_eq!(res.status, StatusCode::FORBIDDEN, "{role:?}");
        assert_eq!(error_code(&res), "INSUFFICIENT_PERMISSIONS");
        assert_eq!(error_message(&res), "Forbidden: insufficient permissions");
    }
}

#[tokio::test]
async fn admin_group_authenticates_before_role_check() {
    let res = call(app(), "/api/v1/admin/me", None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&res), "UNAUTHORIZED");

    let res = call(app(), "/api/v1/admin/me", Some("Bearer abc.def.ghi")).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&res), "INVALID_TOKEN");
}

#[tokio::test]
async fn same_identity_against_different_allow_lists() {
    let authenticator = Arc::new(Authenticator::new(
        TokenVerifier::new(SECRET.as_bytes(), 0).unwrap(),
    ));
    let gated = |roles: &[&str]| -> Router {
        hello_rust_gate::middleware::auth::role_gated(
            Router::new().route("/r", get(|| async { "ok" })),
            authenticator.clone(),
            Arc::new(Authorizer::new(roles.iter().copied())),
        )
    };
    let header = format!("Bearer {}", token(42, "admin"));

    let res = call(gated(&["admin"]), "/r", Some(&header)).await;
    assert_eq!(res.status, StatusCode::OK);

    let res = call(gated(&["user"]), "/r", Some(&header)).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(error_code(&res), "INSUFFICIENT_PERMISSIONS");
}

#[tokio::test]
async fn role_gate_without_authentication_is_unauthorized() {
    for roles in [vec![], vec!["admin"], vec!["admin", "user"]] {
        let router: Router = role::apply(
            Router::new().route("/r", get(|| async { "ok" })),
            Arc::new(Authorizer::new(roles)),
        );
        let header = format!("Bearer {}", token(1, "admin"));
        let res = call(router, "/r", Some(&header)).await;

        assert_eq!(res.status, StatusCode::UNAUTHORIZED);
        assert_eq!(error_code(&res), "UNAUTHORIZED");
        assert_eq!(error_message(&res), "Unauthorized");
    }
}

#[tokio::test]
async fn current_user_extractor_without_middleware_is_unauthorized() {
    async fn whoami(CurrentUser(user): CurrentUser) -> String {
        user.role
    }
    let router = Router::new().route("/whoami", get(whoami));

    let res = call(router, "/whoami", None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&res), "UNAUTHORIZED");
}

// -- Request id ---------------------------------------------------------------

#[tokio::test]
async fn error_body_carries_generated_request_id() {
    let res = call(app(), "/api/v1/users/me", None).await;

    let header_id = res
        .headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(uuid::Uuid::parse_str(&header_id).is_ok());
    assert_eq!(res.body["error"]["request_id"], header_id);
}

#[tokio::test]
async fn error_body_keeps_client_request_id() {
    let request = Request::builder()
        .uri("/api/v1/admin/me")
        .header("authorization", format!("Bearer {}", token(3, "user")))
        .header("x-request-id", "client-req-123")
        .body(Body::empty())
        .unwrap();
    let res = send(app(), request).await;

    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.body["error"]["request_id"], "client-req-123");
    assert_eq!(res.headers["x-request-id"], "client-req-123");
}
