use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    middleware::{auth_middleware, log_errors},
};

pub mod health;
pub mod user;

/// 组装完整路由：公开路由与需认证路由统一挂在 API 前缀下
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new().route("/health", get(health::health_check));

    let protected_routes = Router::new()
        .route("/users/me", get(user::get_profile))
        .route("/users/logout", post(user::logout))
        // 应用认证中间件
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let router = Router::new().nest(
        &state.config.api_base_uri.clone(),
        Router::new().merge(public_routes).merge(protected_routes),
    );

    // 添加日志中间件
    let router = router.layer(axum::middleware::from_fn(log_errors));

    // 根据编译模式决定是否添加CORS
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    router.with_state(state)
}
