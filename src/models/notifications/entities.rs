use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 通知分类
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../mobile/src/types/generated/notification.ts")]
pub enum NotificationCategory {
    Review,
    System,
}

impl NotificationCategory {
    pub const REVIEW: &'static str = "review";
    pub const SYSTEM: &'static str = "system";
}

impl<'de> Deserialize<'de> for NotificationCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            NotificationCategory::REVIEW => Ok(NotificationCategory::Review),
            NotificationCategory::SYSTEM => Ok(NotificationCategory::System),
            _ => Err(serde::de::Error::custom(format!(
                "无效的通知分类: '{s}'. 支持的分类: review, system"
            ))),
        }
    }
}

impl std::fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationCategory::Review => write!(f, "{}", NotificationCategory::REVIEW),
            NotificationCategory::System => write!(f, "{}", NotificationCategory::SYSTEM),
        }
    }
}

impl std::str::FromStr for NotificationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "review" => Ok(NotificationCategory::Review),
            "system" => Ok(NotificationCategory::System),
            _ => Err(format!("Invalid notification category: {s}")),
        }
    }
}

// 站内通知实体
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
