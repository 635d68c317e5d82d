use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    MissingCredential,
    InvalidCredential,
    InternalServerError,
}

#[derive(Serialize)]
struct ErrorResponse {
    code: i32,
    error_message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 具体的验证失败原因只记录在日志里，不回传给调用方
        let (status, error_message) = match self {
            AppError::MissingCredential => (StatusCode::UNAUTHORIZED, "未提供令牌".to_string()),
            AppError::InvalidCredential => (StatusCode::UNAUTHORIZED, "令牌无效".to_string()),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "内部服务器错误".to_string(),
            ),
        };

        let body = Json(ErrorResponse {
            code: status.as_u16() as i32,
            error_message,
        });

        (status, body).into_response()
    }
}
