//! 开课申请实体

use sea_orm::entity::prelude::*;

use crate::errors::TutorLinkError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub tutor_id: i64,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub grade: String,
    pub location: String,
    pub schedule: String,
    pub price: f64,
    pub status: String,
    pub review_note: Option<String>,
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<i64>,
    pub class_id: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TutorId",
        to = "super::users::Column::Id"
    )]
    Tutor,
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tutor.def()
    }
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
//
// status 与可空列之间的约束（approved ⇔ class_id 非空，已审核 ⇔ reviewed_by/
// reviewed_at 非空）在业务模型里用封闭的 ReviewState 枚举表达，
// 不一致的行视为存储层错误。
impl Model {
    pub fn into_class_request(
        self,
    ) -> crate::errors::Result<crate::models::class_requests::entities::ClassRequest> {
        use crate::models::class_requests::entities::{ClassRequest, RequestStatus, ReviewState};
        use chrono::{DateTime, Utc};
        use std::str::FromStr;

        let status = RequestStatus::from_str(&self.status)
            .map_err(|e| TutorLinkError::database_operation(format!("开课申请状态非法: {e}")))?;

        let review = match status {
            RequestStatus::Pending => ReviewState::Pending,
            RequestStatus::Approved => ReviewState::Approved {
                reviewed_by: self.reviewed_by.ok_or_else(|| {
                    TutorLinkError::database_operation(format!(
                        "已批准的申请 {} 缺少 reviewed_by",
                        self.id
                    ))
                })?,
                reviewed_at: self
                    .reviewed_at
                    .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
                    .ok_or_else(|| {
                        TutorLinkError::database_operation(format!(
                            "已批准的申请 {} 缺少 reviewed_at",
                            self.id
                        ))
                    })?,
                class_id: self.class_id.ok_or_else(|| {
                    TutorLinkError::database_operation(format!(
                        "已批准的申请 {} 缺少 class_id",
                        self.id
                    ))
                })?,
            },
            RequestStatus::Rejected => ReviewState::Rejected {
                reviewed_by: self.reviewed_by.ok_or_else(|| {
                    TutorLinkError::database_operation(format!(
                        "已驳回的申请 {} 缺少 reviewed_by",
                        self.id
                    ))
                })?,
                reviewed_at: self
                    .reviewed_at
                    .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
                    .ok_or_else(|| {
                        TutorLinkError::database_operation(format!(
                            "已驳回的申请 {} 缺少 reviewed_at",
                            self.id
                        ))
                    })?,
                note: self.review_note,
            },
        };

        Ok(ClassRequest {
            id: self.id,
            tutor_id: self.tutor_id,
            title: self.title,
            description: self.description,
            subject: self.subject,
            grade: self.grade,
            location: self.location,
            schedule: self.schedule,
            price: self.price,
            review,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::class_requests::entities::ReviewState;

    fn sample_model() -> Model {
        Model {
            id: 1,
            tutor_id: 7,
            title: "P6 Math".to_string(),
            description: "Weekly session".to_string(),
            subject: "Math".to_string(),
            grade: "P6".to_string(),
            location: "Tampines".to_string(),
            schedule: "Sat 10am".to_string(),
            price: 45.0,
            status: "pending".to_string(),
            review_note: None,
            reviewed_by: None,
            reviewed_at: None,
            class_id: None,
            created_at: 1_754_000_000,
        }
    }

    #[test]
    fn test_pending_model_converts() {
        let request = sample_model().into_class_request().unwrap();
        assert!(matches!(request.review, ReviewState::Pending));
        assert_eq!(request.tutor_id, 7);
        assert_eq!(request.price, 45.0);
    }

    #[test]
    fn test_approved_model_carries_review_fields() {
        let mut model = sample_model();
        model.status = "approved".to_string();
        model.reviewed_by = Some(2);
        model.reviewed_at = Some(1_754_000_100);
        model.class_id = Some(11);

        let request = model.into_class_request().unwrap();
        match request.review {
            ReviewState::Approved {
                reviewed_by,
                class_id,
                ..
            } => {
                assert_eq!(reviewed_by, 2);
                assert_eq!(class_id, 11);
            }
            other => panic!("expected approved review state, got {other:?}"),
        }
    }

    #[test]
    fn test_inconsistent_approved_row_is_storage_error() {
        // approved 行缺少 class_id 属于存储层数据损坏，必须报错而不是静默补默认值
        let mut model = sample_model();
        model.status = "approved".to_string();
        model.reviewed_by = Some(2);
        model.reviewed_at = Some(1_754_000_100);
        model.class_id = None;

        assert!(model.into_class_request().is_err());
    }

    #[test]
    fn test_unknown_status_is_storage_error() {
        let mut model = sample_model();
        model.status = "archived".to_string();
        assert!(model.into_class_request().is_err());
    }
}
