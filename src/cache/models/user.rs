use serde::{Deserialize, Serialize};

use crate::utils::Claims;

/// 已认证用户的缓存数据模型
///
/// 一次性从验证通过的声明构建，之后不可变。`sub` 是缓存主体标识：
/// 取 sub 声明，缺失时退回 email。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CachedUser {
    pub sub: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

impl CachedUser {
    /// 从声明构建身份记录；sub 与 email 都缺失时无法形成稳定身份
    pub fn from_claims(claims: &Claims) -> Option<Self> {
        let subject = claims.sub.as_deref().or(claims.email.as_deref())?;

        Some(Self {
            sub: subject.to_string(),
            name: claims.name.clone(),
            email: claims.email.clone(),
            picture: claims.picture.clone(),
        })
    }
}
