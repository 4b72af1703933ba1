use super::entities::{ClassRequest, RequestStatus, ReviewState};
use crate::models::classes::entities::Class;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 开课申请响应（扁平化的线格式）
//
// approved 时 class_id 非空；已审核时 reviewed_by / reviewed_at 非空；
// review_note 仅 rejected 可能携带。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/class_request.ts")]
pub struct ClassRequestResponse {
    pub id: i64,
    pub tutor_id: i64,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub grade: String,
    pub location: String,
    pub schedule: String,
    pub price: f64,
    pub status: RequestStatus,
    pub review_note: Option<String>,
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub class_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ClassRequest> for ClassRequestResponse {
    fn from(request: ClassRequest) -> Self {
        let status = request.review.status();
        let (review_note, reviewed_by, reviewed_at, class_id) = match request.review {
            ReviewState::Pending => (None, None, None, None),
            ReviewState::Approved {
                reviewed_by,
                reviewed_at,
                class_id,
            } => (None, Some(reviewed_by), Some(reviewed_at), Some(class_id)),
            ReviewState::Rejected {
                reviewed_by,
                reviewed_at,
                note,
            } => (note, Some(reviewed_by), Some(reviewed_at), None),
        };
        Self {
            id: request.id,
            tutor_id: request.tutor_id,
            title: request.title,
            description: request.description,
            subject: request.subject,
            grade: request.grade,
            location: request.location,
            schedule: request.schedule,
            price: request.price,
            status,
            review_note,
            reviewed_by,
            reviewed_at,
            class_id,
            created_at: request.created_at,
        }
    }
}

// 申请列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/class_request.ts")]
pub struct ClassRequestListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<ClassRequestResponse>,
}

// 批准响应：返回定稿的申请与新生成的课程
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/class_request.ts")]
pub struct ApproveResponse {
    pub request: ClassRequestResponse,
    pub class: Class,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request(review: ReviewState) -> ClassRequest {
        ClassRequest {
            id: 3,
            tutor_id: 9,
            title: "P6 Math".to_string(),
            description: String::new(),
            subject: "Math".to_string(),
            grade: "P6".to_string(),
            location: "Jurong".to_string(),
            schedule: "Wed 7pm".to_string(),
            price: 35.0,
            review,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_pending_flattens_to_all_null_review_fields() {
        let resp = ClassRequestResponse::from(sample_request(ReviewState::Pending));
        assert_eq!(resp.status, RequestStatus::Pending);
        assert!(resp.reviewed_by.is_none());
        assert!(resp.reviewed_at.is_none());
        assert!(resp.class_id.is_none());
        assert!(resp.review_note.is_none());
    }

    #[test]
    fn test_approved_carries_class_id() {
        let now = chrono::Utc::now();
        let resp = ClassRequestResponse::from(sample_request(ReviewState::Approved {
            reviewed_by: 1,
            reviewed_at: now,
            class_id: 42,
        }));
        assert_eq!(resp.status, RequestStatus::Approved);
        assert_eq!(resp.class_id, Some(42));
        assert_eq!(resp.reviewed_by, Some(1));
        assert!(resp.review_note.is_none());
    }

    #[test]
    fn test_rejected_carries_note_without_class_id() {
        let resp = ClassRequestResponse::from(sample_request(ReviewState::Rejected {
            reviewed_by: 1,
            reviewed_at: chrono::Utc::now(),
            note: Some("Duplicate listing".to_string()),
        }));
        assert_eq!(resp.status, RequestStatus::Rejected);
        assert!(resp.class_id.is_none());
        assert_eq!(resp.review_note.as_deref(), Some("Duplicate listing"));
    }
}
