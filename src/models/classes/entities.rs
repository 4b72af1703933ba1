use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程实体
//
// 课程只通过开课申请的批准产生，或由管理员直接创建；
// promoted 为付费推广位标记（推广流程本身不在本服务内）。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/class.ts")]
pub struct Class {
    pub id: i64,
    pub tutor_id: i64,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub grade: String,
    pub location: String,
    pub schedule: String,
    pub price: f64,
    pub promoted: bool,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
