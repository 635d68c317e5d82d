use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use tower::ServiceExt;

use backend::AppState;
use backend::cache::CacheStore;
use backend::config::Config;
use backend::routes::create_router;
use backend::utils::Claims;

const SECRET: &str = "integration-test-secret";

fn test_config() -> Config {
    Config {
        redis_url: "redis://127.0.0.1:6379".to_string(),
        jwt_secret: SECRET.to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        api_base_uri: "/api".to_string(),
        cache_timeout_ms: 50,
    }
}

// 存储不可用的状态下组装路由，认证必须照常工作
fn test_router() -> Router {
    let state = AppState {
        config: test_config(),
        cache: CacheStore::disconnected(),
    };
    create_router(state)
}

fn make_token(sub: &str, exp_offset_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: Some(sub.to_string()),
        name: Some("测试用户".to_string()),
        email: Some(format!("{}@example.com", sub)),
        picture: Some("https://example.com/avatar.png".to_string()),
        iat: Some(now),
        exp: Some(now + exp_offset_secs),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_is_public() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["resp_data"]["status"], "ok");
}

#[tokio::test]
async fn test_missing_authorization_header_rejected() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], 401);
}

#[tokio::test]
async fn test_non_bearer_scheme_rejected() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/me")
                .header("Authorization", "Basic dXNlcjpwYXNz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/me")
                .header("Authorization", "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    // 拒绝响应不携带具体的验证失败原因
    let body = body_json(response).await;
    assert_eq!(body["error_message"], "令牌无效");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = test_router();
    let token = make_token("u1", -10);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/me")
                .header("Authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_returns_profile_with_store_down() {
    let app = test_router();
    let token = make_token("u1", 3600);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/me")
                .header("Authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["resp_data"]["sub"], "u1");
    assert_eq!(body["resp_data"]["email"], "u1@example.com");
    assert_eq!(body["resp_data"]["name"], "测试用户");
}

#[tokio::test]
async fn test_logout_reports_failed_invalidation_without_error() {
    let app = test_router();
    let token = make_token("u1", 3600);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users/logout")
                .header("Authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // 存储不可用时删除失败，但登出本身不报错
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["resp_data"]["invalidated"], false);
}

#[tokio::test]
async fn test_logout_requires_authentication() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
