/// 缓存操作
/// 提供缓存操作的功能实现

// 用户缓存操作
pub mod user;

// 重新导出常用操作
pub use user::UserCacheOperations;
