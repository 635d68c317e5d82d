/// 用户身份缓存键前缀
const USER_IDENTITY_PREFIX: &str = "user:";

/// 生成用户身份缓存键，主体标识为 sub 声明，缺失时为 email
pub fn user_identity_key(subject: &str) -> String {
    format!("{}{}", USER_IDENTITY_PREFIX, subject)
}
