use super::entities::NotificationCategory;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 创建通知（内部使用，审核流程与广播共用）
#[derive(Debug, Clone)]
pub struct CreateNotificationRequest {
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
}

// 通知查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/notification.ts")]
pub struct NotificationQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub unread_only: Option<bool>,
}

// 广播目标
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../mobile/src/types/generated/notification.ts")]
pub enum BroadcastTarget {
    All,
    Students,
    Tutors,
}

// 管理员广播通知请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/notification.ts")]
pub struct SendNotificationRequest {
    pub title: String,
    pub message: String,
    pub target: BroadcastTarget,
}

// 通知列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct NotificationListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub unread_only: bool,
}
