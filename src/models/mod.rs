//! 数据模型定义
//!
//! 按资源分为 requests（入参）/ responses（出参）/ entities（业务实体），
//! 与 entity 模块中的数据库实体分离。

pub mod auth;
pub mod class_requests;
pub mod classes;
pub mod common;
pub mod notifications;
pub mod users;

pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 业务错误码
///
/// 0 表示成功；1xxx 通用；2xxx 用户；3xxx 课程；4xxx 开课申请；5xxx 通知。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 通用
    InternalServerError = 1000,
    BadRequest = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,

    // 用户
    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    UserCreationFailed = 2003,
    InvalidCredentials = 2004,
    TutorNotApproved = 2005,
    TutorNotFound = 2006,

    // 课程
    ClassNotFound = 3001,
    ClassCreationFailed = 3002,
    ClassPermissionDenied = 3003,

    // 开课申请
    RequestNotFound = 4001,
    RequestAlreadyReviewed = 4002,
    RequestValidationFailed = 4003,
    RequestSubmitFailed = 4004,

    // 通知
    NotificationNotFound = 5001,
    NotificationSendFailed = 5002,
}

/// 程序启动时间，用于日志与启动耗时统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
