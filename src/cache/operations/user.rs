use crate::cache::keys::user_keys;
use crate::cache::models::user::CachedUser;
use crate::cache::store::CacheStore;
use crate::utils::{Claims, verify_token};

/// 无 exp 声明时的缓存时长（15分钟）
const DEFAULT_TTL_SECS: u64 = 900;

/// 缓存时长上限（30天）
const MAX_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// 用户身份缓存操作
///
/// 旁路缓存：先查缓存，未命中时用验证通过的声明重建并回写。
/// 缓存只是加速手段，存储不可用时所有操作退化为直接验证，不报错。
pub struct UserCacheOperations;

impl UserCacheOperations {
    /// 解析令牌对应的用户身份
    ///
    /// 验证失败返回 None 且不触碰缓存；命中时原样返回缓存记录，
    /// 不再与当前令牌的声明做比对（接受TTL窗口内的陈旧数据）。
    pub async fn resolve(store: &CacheStore, token: &str, secret: &str) -> Option<CachedUser> {
        let claims = match verify_token(token, secret) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!("JWT verification failed: {}", e);
                return None;
            }
        };

        let user = CachedUser::from_claims(&claims)?;
        let key = user_keys::user_identity_key(&user.sub);

        if let Some(json) = store.get(&key).await {
            match serde_json::from_str::<CachedUser>(&json) {
                Ok(cached) => {
                    tracing::debug!("User cache hit: {}", key);
                    return Some(cached);
                }
                // 损坏的缓存记录按未命中处理，随后用新数据覆盖
                Err(e) => tracing::warn!("Failed to deserialize cached user {}: {}", key, e),
            }
        }

        let ttl = Self::calculate_ttl(&claims);
        match serde_json::to_string(&user) {
            Ok(json) => {
                // 写入失败不影响本次请求，身份已经由声明重建出来了
                if store.set(&key, &json, ttl).await {
                    tracing::debug!("User cached for {} seconds: {}", ttl, key);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize user for cache: {}", e),
        }

        Some(user)
    }

    /// 按主体标识删除缓存记录，登出时调用
    pub async fn invalidate_by_subject(store: &CacheStore, subject: &str) -> bool {
        let key = user_keys::user_identity_key(subject);
        let deleted = store.delete(&key).await;
        tracing::debug!("Invalidated user cache {}: {}", key, deleted);
        deleted
    }

    /// 重新验证令牌找回主体标识，再删除对应缓存
    pub async fn invalidate_by_token(store: &CacheStore, token: &str, secret: &str) -> bool {
        match verify_token(token, secret) {
            Ok(claims) => match CachedUser::from_claims(&claims) {
                Some(user) => Self::invalidate_by_subject(store, &user.sub).await,
                None => false,
            },
            Err(e) => {
                tracing::debug!("Failed to invalidate by token: {}", e);
                false
            }
        }
    }

    /// TTL 与令牌剩余有效期同步，上限30天；无 exp 时用固定默认值
    fn calculate_ttl(claims: &Claims) -> u64 {
        match claims.exp {
            Some(exp) => {
                let now = chrono::Utc::now().timestamp();
                (exp - now).clamp(0, MAX_TTL_SECS as i64) as u64
            }
            None => DEFAULT_TTL_SECS,
        }
    }
}
