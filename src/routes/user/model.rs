use serde::Serialize;

use crate::cache::CachedUser;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl From<CachedUser> for ProfileResponse {
    fn from(user: CachedUser) -> Self {
        Self {
            sub: user.sub,
            name: user.name,
            email: user.email,
            picture: user.picture,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub invalidated: bool,
}
