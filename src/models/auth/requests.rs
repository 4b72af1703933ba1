use crate::models::users::entities::{UserProfile, UserRole};
use serde::Deserialize;
use ts_rs::TS;

// 用户注册请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/auth.ts")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// 仅允许 student / tutor，管理员由部署时种子账号产生
    pub role: UserRole,
    pub profile: Option<UserProfile>,
}

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 用户名或邮箱
    pub username: String,
    /// 密码
    pub password: String,
}

// 刷新令牌请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/auth.ts")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}
