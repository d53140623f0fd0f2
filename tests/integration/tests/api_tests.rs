//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::Duration;

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use timble_cache::{KeyFormatter, RedisPool, RedisPoolConfig};
use timble_core::UserId;

/// Register a fresh user and return (token, profile)
async fn register_user(server: &TestServer) -> (String, UserResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/users", &request).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/v1/users/@me", &token.token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    (token.token, user)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["counter"], "healthy");
}

#[tokio::test]
async fn test_request_id_header() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(!token.token.is_empty());
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/v1/users", &request).await.unwrap();

    let mut duplicate = RegisterRequest::unique();
    duplicate.username = request.username.clone();
    let response = server.post("/api/v1/users", &duplicate).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();

    assert_eq!(body.error.code, "DUPLICATE_USER");
    assert_eq!(body.error.field.as_deref(), Some("username"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/v1/users", &request).await.unwrap();

    let mut duplicate = RegisterRequest::unique();
    duplicate.email = request.email.clone();
    let response = server.post("/api/v1/users", &duplicate).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();

    assert_eq!(body.error.field.as_deref(), Some("email"));
}

#[tokio::test]
async fn test_register_short_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "short".to_string();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert_eq!(body.error.field.as_deref(), Some("password"));
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/users", &register_req).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/v1/users/@me", &token.token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.username, register_req.username);
    assert!(!user.premium);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/users", &register_req).await.unwrap();

    let wrong_password = LoginRequest {
        username: register_req.username.clone(),
        password: "WrongPassword123!".to_string(),
    };
    let unknown_user = LoginRequest {
        username: format!("missing_{}", unique_suffix()),
        password: register_req.password.clone(),
    };

    for request in [wrong_password, unknown_user] {
        let response = server.post("/api/v1/auth/login", &request).await.unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
        assert_eq!(body.error.code, "INVALID_CREDENTIALS");
    }
}

#[tokio::test]
async fn test_unauthorized_access() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me", "invalid_token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_react_to_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _) = register_user(&server).await;
    let (_, target) = register_user(&server).await;

    let response = server
        .post_auth("/api/v1/users/@me/reactions", &token, &ReactRequest::like(target.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Changing one's mind overwrites the same record
    let pass = ReactRequest {
        target_id: target.id,
        reaction_type: 1,
    };
    let response = server
        .post_auth("/api/v1/users/@me/reactions", &token, &pass)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_react_to_self_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, me) = register_user(&server).await;

    let response = server
        .post_auth("/api/v1/users/@me/reactions", &token, &ReactRequest::like(me.id))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.field.as_deref(), Some("target_id"));
}

#[tokio::test]
async fn test_react_unknown_type_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _) = register_user(&server).await;
    let (_, target) = register_user(&server).await;

    let request = ReactRequest {
        target_id: target.id,
        reaction_type: 7,
    };
    let response = server
        .post_auth("/api/v1/users/@me/reactions", &token, &request)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.field.as_deref(), Some("type"));
}

#[tokio::test]
async fn test_react_unknown_target_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/v1/users/@me/reactions",
            &token,
            &ReactRequest::like(u64::from(u32::MAX)),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_USER");
}

#[tokio::test]
async fn test_daily_limit_enforced() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _) = register_user(&server).await;

    let mut targets = Vec::new();
    for _ in 0..11 {
        targets.push(register_user(&server).await.1.id);
    }

    for target in &targets[..10] {
        let response = server
            .post_auth("/api/v1/users/@me/reactions", &token, &ReactRequest::like(*target))
            .await
            .unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    let response = server
        .post_auth(
            "/api/v1/users/@me/reactions",
            &token,
            &ReactRequest::like(targets[10]),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::TOO_MANY_REQUESTS)
        .await
        .unwrap();
    assert_eq!(body.error.code, "REACTION_LIMIT_EXCEEDED");
}

// ============================================================================
// Premium Tests
// ============================================================================

#[tokio::test]
async fn test_premium_grant_and_revoke() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _) = register_user(&server).await;

    let response = server
        .post_empty_auth("/api/v1/users/@me/premium", &token)
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, "Premium granted");

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(user.premium);

    let response = server
        .delete_auth("/api/v1/users/@me/premium", &token)
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, "Unsubscribed from premium");

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!user.premium);
}

#[tokio::test]
async fn test_premium_user_bypasses_limit() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _) = register_user(&server).await;
    server
        .post_empty_auth("/api/v1/users/@me/premium", &token)
        .await
        .unwrap();

    for _ in 0..12 {
        let (_, target) = register_user(&server).await;
        let response = server
            .post_auth("/api/v1/users/@me/reactions", &token, &ReactRequest::like(target.id))
            .await
            .unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }
}

#[tokio::test]
async fn test_premium_eligibility_gate() {
    if !check_test_env() {
        return;
    }

    let mut config = test_config().unwrap();
    config.entitlement.require_premium_eligibility = true;
    let counter = RedisPool::new(RedisPoolConfig::counter(&config.redis)).unwrap();
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    let (token, user) = register_user(&server).await;

    let response = server
        .post_empty_auth("/api/v1/users/@me/premium", &token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_ELIGIBLE_FOR_PREMIUM");

    let flag = KeyFormatter::premium_eligibility(UserId::new(user.id));
    counter
        .set_bytes(&flag, b"true", Duration::from_secs(300))
        .await
        .unwrap();

    let response = server
        .post_empty_auth("/api/v1/users/@me/premium", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert!(counter.get_string(&flag).await.unwrap().is_none());
}
