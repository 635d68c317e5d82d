use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
    typed_header::TypedHeaderRejection,
};

use crate::{AppState, cache::UserCacheOperations, error::AppError};

/// 认证中间件
///
/// 受保护路由的唯一入口：提取 Bearer 凭证，交给缓存层解析身份，
/// 成功后把身份记录挂到请求扩展上供下游处理器读取。
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // 缺失或非 Bearer 格式的凭证一律按未提供处理
    let TypedHeader(Authorization(bearer)) = bearer.map_err(|_| AppError::MissingCredential)?;

    match UserCacheOperations::resolve(&state.cache, bearer.token(), &state.config.jwt_secret)
        .await
    {
        Some(user) => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        None => Err(AppError::InvalidCredential),
    }
}
