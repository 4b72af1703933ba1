use super::entities::RequestStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 提交开课申请（家教）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/class_request.ts")]
pub struct SubmitClassRequest {
    pub title: String,
    pub description: Option<String>,
    pub subject: String,
    pub grade: String,
    pub location: String,
    pub schedule: String,
    pub price: Option<f64>,
}

impl SubmitClassRequest {
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

// 驳回申请（管理员），备注可选
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/class_request.ts")]
pub struct RejectClassRequest {
    pub note: Option<String>,
}

// 申请查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/class_request.ts")]
pub struct ClassRequestQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<RequestStatus>,
}

// 申请列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ClassRequestListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub tutor_id: Option<i64>,
    pub status: Option<RequestStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_validate_reports_first_missing_field() {
        let req = SubmitClassRequest {
            title: "  ".to_string(),
            description: None,
            subject: String::new(),
            grade: "P5".to_string(),
            location: "Tampines".to_string(),
            schedule: "Sat 10am".to_string(),
            price: Some(40.0),
        };
        assert_eq!(req.validate(), Err("title"));
    }

    #[test]
    fn test_submit_validate_accepts_complete_request() {
        let req = SubmitClassRequest {
            title: "Sec 3 Physics".to_string(),
            description: Some("Pure physics".to_string()),
            subject: "Physics".to_string(),
            grade: "Sec 3".to_string(),
            location: "Bishan".to_string(),
            schedule: "Sun 2pm".to_string(),
            price: None,
        };
        assert!(req.validate().is_ok());
    }
}
