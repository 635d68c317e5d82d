use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    cache::{CachedUser, UserCacheOperations},
    utils::success_to_api_response,
};

use super::model::{LogoutResponse, ProfileResponse};

/// 返回当前请求的认证身份，由认证中间件挂到请求扩展上
#[axum::debug_handler]
pub async fn get_profile(Extension(user): Extension<CachedUser>) -> impl IntoResponse {
    (
        StatusCode::OK,
        success_to_api_response(ProfileResponse::from(user)),
    )
}

/// 登出：删除该用户的身份缓存
///
/// 删除失败不算错误，记录会在TTL到期或下次解析时被覆盖
#[axum::debug_handler]
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<CachedUser>,
) -> impl IntoResponse {
    let invalidated = UserCacheOperations::invalidate_by_subject(&state.cache, &user.sub).await;

    (
        StatusCode::OK,
        success_to_api_response(LogoutResponse { invalidated }),
    )
}
