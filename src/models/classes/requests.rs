use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 课程查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/class.ts")]
pub struct ClassQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub subject: Option<String>,
    pub grade: Option<String>,
    pub location: Option<String>,
    pub tutor_id: Option<i64>,
}

// 创建课程请求（仅管理员直接建课，绕过审核工作流）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub tutor_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub subject: String,
    pub grade: String,
    pub location: String,
    pub schedule: String,
    pub price: Option<f64>,
}

impl CreateClassRequest {
    /// 校验必填字段，返回第一个缺失/空白的字段名
    pub fn validate(&self) -> Result<(), &'static str> {
        crate::utils::validate::validate_class_fields(
            &self.title,
            &self.subject,
            &self.grade,
            &self.location,
            &self.schedule,
            self.price,
        )
    }
}

// 更新课程请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub grade: Option<String>,
    pub location: Option<String>,
    pub schedule: Option<String>,
    pub price: Option<f64>,
    pub promoted: Option<bool>,
    pub is_active: Option<bool>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ClassListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub subject: Option<String>,
    pub grade: Option<String>,
    pub location: Option<String>,
    pub tutor_id: Option<i64>,
    pub active_only: bool,
}
