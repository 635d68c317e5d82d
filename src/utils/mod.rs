use axum::Json;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::api::schema::common::ApiResponse;

/// 登录网关签发的身份令牌声明
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>, // 用户ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>, // 显示名称
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>, // 头像地址
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>, // 签发时间
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>, // 过期时间，可缺省
}

/// 校验令牌签名与有效期，返回原始声明
///
/// 纯函数，缓存层在未命中解码和按令牌失效两条路径上复用同一套校验。
/// `exp` 缺失的令牌视为合法，过期策略由缓存层的TTL计算兜底。
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    // exp 存在时严格校验（不留余量），缺失时放行
    validation.leeway = 0;
    validation.required_spec_claims.clear();

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

pub fn success_to_api_response<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        code: 0,
        msg: "success".into(),
        resp_data: Some(data),
    })
}
