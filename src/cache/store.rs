use std::time::Duration;

use redis::{AsyncCommands, aio::MultiplexedConnection};

/// 建立连接的最长等待时间，超过后直接以无缓存模式启动
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Redis 缓存适配器
///
/// 进程启动时建立一条共享的多路复用连接，失败不致命：所有操作在
/// 不可用时返回未命中/失败，调用方退化为直接验证令牌。任何传输层
/// 错误（超时、断连）都不会越过本层边界。
#[derive(Clone)]
pub struct CacheStore {
    conn: Option<MultiplexedConnection>,
    timeout: Duration,
}

impl CacheStore {
    /// 连接 Redis，只在启动时调用一次；失败时返回不可用的实例
    pub async fn connect(redis_url: &str, timeout: Duration) -> Self {
        let client = match redis::Client::open(redis_url) {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!("Failed to create Redis client: {}, cache disabled", e);
                return Self {
                    conn: None,
                    timeout,
                };
            }
        };

        match tokio::time::timeout(CONNECT_TIMEOUT, client.get_multiplexed_async_connection())
            .await
        {
            Ok(Ok(conn)) => {
                tracing::info!("Connected to Redis");
                Self {
                    conn: Some(conn),
                    timeout,
                }
            }
            Ok(Err(e)) => {
                tracing::warn!("Failed to connect to Redis: {}, serving without cache", e);
                Self {
                    conn: None,
                    timeout,
                }
            }
            Err(_) => {
                tracing::warn!("Redis connection timed out, serving without cache");
                Self {
                    conn: None,
                    timeout,
                }
            }
        }
    }

    /// 无后端存储的实例，服务以纯验证模式运行
    pub fn disconnected() -> Self {
        Self {
            conn: None,
            timeout: Duration::ZERO,
        }
    }

    pub fn is_available(&self) -> bool {
        self.conn.is_some()
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        let mut conn = self.conn.clone()?;

        match tokio::time::timeout(self.timeout, conn.get::<_, Option<String>>(key)).await {
            Ok(Ok(value)) => value,
            Ok(Err(e)) => {
                tracing::warn!("Redis GET error: {}", e);
                None
            }
            Err(_) => {
                tracing::warn!("Redis GET timed out after {:?}", self.timeout);
                None
            }
        }
    }

    pub async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> bool {
        let Some(mut conn) = self.conn.clone() else {
            return false;
        };

        match tokio::time::timeout(self.timeout, conn.set_ex::<_, _, ()>(key, value, ttl_secs))
            .await
        {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                tracing::warn!("Redis SET error: {}", e);
                false
            }
            Err(_) => {
                tracing::warn!("Redis SET timed out after {:?}", self.timeout);
                false
            }
        }
    }

    pub async fn delete(&self, key: &str) -> bool {
        let Some(mut conn) = self.conn.clone() else {
            return false;
        };

        match tokio::time::timeout(self.timeout, conn.del::<_, i64>(key)).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                tracing::warn!("Redis DEL error: {}", e);
                false
            }
            Err(_) => {
                tracing::warn!("Redis DEL timed out after {:?}", self.timeout);
                false
            }
        }
    }
}
