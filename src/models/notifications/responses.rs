use super::entities::Notification;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 通知列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/notification.ts")]
pub struct NotificationListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Notification>,
}

// 未读计数响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/notification.ts")]
pub struct UnreadCountResponse {
    pub unread_count: u64,
}

// 全部已读响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/notification.ts")]
pub struct MarkAllReadResponse {
    pub marked_count: u64,
}

// 广播响应：实际写入的通知条数
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/notification.ts")]
pub struct SendNotificationResponse {
    pub count: u64,
}
