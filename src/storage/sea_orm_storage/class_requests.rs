//! 开课申请存储操作
//!
//! 审核是本模块的核心：批准/驳回必须恰好定稿一次。定稿采用条件更新
//! （`WHERE id = ? AND status = 'pending'`）作为乐观并发控制，
//! 与建课、写通知放在同一事务里，并发竞争的败者观察到 0 行受影响后回滚。

use super::SeaOrmStorage;
use crate::entity::class_requests::{ActiveModel, Column, Entity as ClassRequests};
use crate::entity::classes::ActiveModel as ClassActiveModel;
use crate::errors::{Result, TutorLinkError};
use crate::models::{
    PaginationInfo,
    class_requests::{
        entities::{ApproveOutcome, ClassRequest, RejectOutcome, RequestStatus, ReviewState},
        requests::{ClassRequestListQuery, SubmitClassRequest},
        responses::{ClassRequestListResponse, ClassRequestResponse},
    },
    notifications::entities::NotificationCategory,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait, sea_query::Expr,
};

impl SeaOrmStorage {
    /// 提交开课申请，初始状态 pending
    pub async fn create_class_request_impl(
        &self,
        tutor_id: i64,
        req: SubmitClassRequest,
    ) -> Result<ClassRequest> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            tutor_id: Set(tutor_id),
            title: Set(req.title),
            description: Set(req.description.unwrap_or_default()),
            subject: Set(req.subject),
            grade: Set(req.grade),
            location: Set(req.location),
            schedule: Set(req.schedule),
            price: Set(req.price.unwrap_or(0.0)),
            status: Set(RequestStatus::PENDING.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("创建开课申请失败: {e}")))?;

        result.into_class_request()
    }

    /// 通过 ID 获取申请
    pub async fn get_class_request_by_id_impl(
        &self,
        request_id: i64,
    ) -> Result<Option<ClassRequest>> {
        let result = ClassRequests::find_by_id(request_id)
            .one(&self.db)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("查询开课申请失败: {e}")))?;

        result.map(|m| m.into_class_request()).transpose()
    }

    /// 分页列出申请
    pub async fn list_class_requests_with_pagination_impl(
        &self,
        query: ClassRequestListQuery,
    ) -> Result<ClassRequestListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = ClassRequests::find();

        // 家教视角只看自己的申请
        if let Some(tutor_id) = query.tutor_id {
            select = select.filter(Column::TutorId.eq(tutor_id));
        }

        // 状态筛选（管理员审核队列用 pending）
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("查询申请总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("查询申请页数失败: {e}")))?;

        let requests = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("查询申请列表失败: {e}")))?;

        let items = requests
            .into_iter()
            .map(|m| m.into_class_request().map(ClassRequestResponse::from))
            .collect::<Result<Vec<_>>>()?;

        Ok(ClassRequestListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 批准申请
    ///
    /// 同一事务内：建课 → 条件更新定稿申请 → 写入家教通知。
    /// 条件更新没有命中任何行说明在本事务读取后被并发定稿，整体回滚。
    pub async fn approve_class_request_impl(
        &self,
        request_id: i64,
        reviewer_id: i64,
    ) -> Result<ApproveOutcome> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = ClassRequests::find_by_id(request_id)
            .one(&txn)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("查询开课申请失败: {e}")))?
        else {
            txn.rollback()
                .await
                .map_err(|e| TutorLinkError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(ApproveOutcome::NotFound);
        };

        if existing.status != RequestStatus::PENDING {
            txn.rollback()
                .await
                .map_err(|e| TutorLinkError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(ApproveOutcome::AlreadyReviewed);
        }

        let now_ts = chrono::Utc::now().timestamp();

        // 申请字段原样落到课程上
        let class_model = ClassActiveModel {
            tutor_id: Set(existing.tutor_id),
            title: Set(existing.title.clone()),
            description: Set(existing.description.clone()),
            subject: Set(existing.subject.clone()),
            grade: Set(existing.grade.clone()),
            location: Set(existing.location.clone()),
            schedule: Set(existing.schedule.clone()),
            price: Set(existing.price),
            promoted: Set(false),
            is_active: Set(true),
            created_at: Set(now_ts),
            updated_at: Set(now_ts),
            ..Default::default()
        };

        let class = class_model
            .insert(&txn)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("批准建课失败: {e}")))?;

        // 条件更新定稿：status 仍为 pending 才生效
        let stamped = ClassRequests::update_many()
            .col_expr(Column::Status, Expr::value(RequestStatus::APPROVED))
            .col_expr(Column::ReviewedBy, Expr::value(reviewer_id))
            .col_expr(Column::ReviewedAt, Expr::value(now_ts))
            .col_expr(Column::ClassId, Expr::value(class.id))
            .filter(Column::Id.eq(request_id))
            .filter(Column::Status.eq(RequestStatus::PENDING))
            .exec(&txn)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("定稿开课申请失败: {e}")))?;

        if stamped.rows_affected == 0 {
            txn.rollback()
                .await
                .map_err(|e| TutorLinkError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(ApproveOutcome::AlreadyReviewed);
        }

        // 家教通知与定稿同事务，保证已定稿必有通知
        let notification = crate::entity::notifications::ActiveModel {
            user_id: Set(existing.tutor_id),
            title: Set("Class request approved".to_string()),
            message: Set(format!(
                "Your class request '{}' has been approved. The class is now listed.",
                existing.title
            )),
            category: Set(NotificationCategory::Review.to_string()),
            is_read: Set(false),
            created_at: Set(now_ts),
            ..Default::default()
        };
        notification
            .insert(&txn)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("写入审核通知失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("提交事务失败: {e}")))?;

        let request = ClassRequest {
            id: existing.id,
            tutor_id: existing.tutor_id,
            title: existing.title,
            description: existing.description,
            subject: existing.subject,
            grade: existing.grade,
            location: existing.location,
            schedule: existing.schedule,
            price: existing.price,
            review: ReviewState::Approved {
                reviewed_by: reviewer_id,
                reviewed_at: chrono::DateTime::from_timestamp(now_ts, 0).unwrap_or_default(),
                class_id: class.id,
            },
            created_at: chrono::DateTime::from_timestamp(existing.created_at, 0)
                .unwrap_or_default(),
        };

        Ok(ApproveOutcome::Approved {
            request,
            class: class.into_class(),
        })
    }

    /// 驳回申请
    ///
    /// 与批准同样的条件更新定稿，但不建课；备注可选。
    pub async fn reject_class_request_impl(
        &self,
        request_id: i64,
        reviewer_id: i64,
        note: Option<String>,
    ) -> Result<RejectOutcome> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = ClassRequests::find_by_id(request_id)
            .one(&txn)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("查询开课申请失败: {e}")))?
        else {
            txn.rollback()
                .await
                .map_err(|e| TutorLinkError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(RejectOutcome::NotFound);
        };

        if existing.status != RequestStatus::PENDING {
            txn.rollback()
                .await
                .map_err(|e| TutorLinkError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(RejectOutcome::AlreadyReviewed);
        }

        let now_ts = chrono::Utc::now().timestamp();

        let stamped = ClassRequests::update_many()
            .col_expr(Column::Status, Expr::value(RequestStatus::REJECTED))
            .col_expr(Column::ReviewedBy, Expr::value(reviewer_id))
            .col_expr(Column::ReviewedAt, Expr::value(now_ts))
            .col_expr(Column::ReviewNote, Expr::value(note.clone()))
            .filter(Column::Id.eq(request_id))
            .filter(Column::Status.eq(RequestStatus::PENDING))
            .exec(&txn)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("定稿开课申请失败: {e}")))?;

        if stamped.rows_affected == 0 {
            txn.rollback()
                .await
                .map_err(|e| TutorLinkError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(RejectOutcome::AlreadyReviewed);
        }

        let message = match note.as_deref() {
            Some(reason) if !reason.trim().is_empty() => format!(
                "Your class request '{}' has been rejected. Reason: {}",
                existing.title, reason
            ),
            _ => format!("Your class request '{}' has been rejected.", existing.title),
        };

        let notification = crate::entity::notifications::ActiveModel {
            user_id: Set(existing.tutor_id),
            title: Set("Class request rejected".to_string()),
            message: Set(message),
            category: Set(NotificationCategory::Review.to_string()),
            is_read: Set(false),
            created_at: Set(now_ts),
            ..Default::default()
        };
        notification
            .insert(&txn)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("写入审核通知失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("提交事务失败: {e}")))?;

        let request = ClassRequest {
            id: existing.id,
            tutor_id: existing.tutor_id,
            title: existing.title,
            description: existing.description,
            subject: existing.subject,
            grade: existing.grade,
            location: existing.location,
            schedule: existing.schedule,
            price: existing.price,
            review: ReviewState::Rejected {
                reviewed_by: reviewer_id,
                reviewed_at: chrono::DateTime::from_timestamp(now_ts, 0).unwrap_or_default(),
                note,
            },
            created_at: chrono::DateTime::from_timestamp(existing.created_at, 0)
                .unwrap_or_default(),
        };

        Ok(RejectOutcome::Rejected { request })
    }

    /// 家教撤回自己的 pending 申请
    ///
    /// 条件删除一次完成归属与状态校验，已定稿的申请不可撤回。
    pub async fn withdraw_class_request_impl(
        &self,
        request_id: i64,
        tutor_id: i64,
    ) -> Result<bool> {
        let result = ClassRequests::delete_many()
            .filter(Column::Id.eq(request_id))
            .filter(Column::TutorId.eq(tutor_id))
            .filter(Column::Status.eq(RequestStatus::PENDING))
            .exec(&self.db)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("撤回开课申请失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::class_requests::requests::ClassRequestListQuery;
    use crate::models::classes::requests::ClassListQuery;
    use crate::models::notifications::requests::NotificationListQuery;
    use crate::models::users::{
        entities::{UserProfile, UserRole},
        requests::CreateUserRequest,
    };
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    async fn setup_storage() -> SeaOrmStorage {
        // 内存 SQLite 每个连接是独立数据库，池必须限制为单连接
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.expect("connect sqlite memory");
        Migrator::up(&db, None).await.expect("run migrations");
        SeaOrmStorage::from_connection(db)
    }

    async fn create_user(storage: &SeaOrmStorage, username: &str, role: UserRole) -> i64 {
        storage
            .create_user_impl(CreateUserRequest {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password: "hashed".to_string(),
                role,
                approved: Some(true),
                profile: UserProfile {
                    display_name: None,
                    contact_no: None,
                    grade: None,
                },
            })
            .await
            .expect("create user")
            .id
    }

    fn sample_submit(title: &str) -> SubmitClassRequest {
        SubmitClassRequest {
            title: title.to_string(),
            description: Some("Weekly small group session".to_string()),
            subject: "Math".to_string(),
            grade: "P6".to_string(),
            location: "Tampines".to_string(),
            schedule: "Sat 10am".to_string(),
            price: Some(45.0),
        }
    }

    #[tokio::test]
    async fn submitted_request_starts_pending() {
        let storage = setup_storage().await;
        let tutor = create_user(&storage, "tutor_one", UserRole::Tutor).await;

        let request = storage
            .create_class_request_impl(tutor, sample_submit("P6 Math"))
            .await
            .unwrap();

        assert!(request.review.is_pending());
        assert_eq!(request.tutor_id, tutor);
        assert_eq!(request.price, 45.0);

        let fetched = storage
            .get_class_request_by_id_impl(request.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched, request);
    }

    #[tokio::test]
    async fn approve_creates_class_and_notifies_tutor() {
        let storage = setup_storage().await;
        let tutor = create_user(&storage, "tutor_one", UserRole::Tutor).await;
        let admin = create_user(&storage, "admin_one", UserRole::Admin).await;

        let request = storage
            .create_class_request_impl(tutor, sample_submit("P6 Math"))
            .await
            .unwrap();

        let outcome = storage
            .approve_class_request_impl(request.id, admin)
            .await
            .unwrap();

        let ApproveOutcome::Approved { request, class } = outcome else {
            panic!("expected approval to succeed");
        };

        // 课程字段与申请一致
        assert_eq!(class.tutor_id, tutor);
        assert_eq!(class.title, "P6 Math");
        assert_eq!(class.subject, "Math");
        assert_eq!(class.price, 45.0);
        assert!(class.is_active);
        assert!(!class.promoted);

        // 申请定稿并指向新课程
        match request.review {
            ReviewState::Approved {
                reviewed_by,
                class_id,
                ..
            } => {
                assert_eq!(reviewed_by, admin);
                assert_eq!(class_id, class.id);
            }
            other => panic!("expected approved review state, got {other:?}"),
        }

        // 课程确实落库
        assert!(
            storage
                .get_class_by_id_impl(class.id)
                .await
                .unwrap()
                .is_some()
        );

        // 恰好一条审核通知发给家教
        let notifications = storage
            .list_notifications_with_pagination_impl(tutor, NotificationListQuery::default())
            .await
            .unwrap();
        assert_eq!(notifications.items.len(), 1);
        assert_eq!(notifications.items[0].title, "Class request approved");
        assert!(!notifications.items[0].is_read);
    }

    #[tokio::test]
    async fn second_approve_is_conflict_and_creates_no_second_class() {
        let storage = setup_storage().await;
        let tutor = create_user(&storage, "tutor_one", UserRole::Tutor).await;
        let admin = create_user(&storage, "admin_one", UserRole::Admin).await;

        let request = storage
            .create_class_request_impl(tutor, sample_submit("P6 Math"))
            .await
            .unwrap();

        let first = storage
            .approve_class_request_impl(request.id, admin)
            .await
            .unwrap();
        assert!(matches!(first, ApproveOutcome::Approved { .. }));

        let second = storage
            .approve_class_request_impl(request.id, admin)
            .await
            .unwrap();
        assert!(matches!(second, ApproveOutcome::AlreadyReviewed));

        let classes = storage
            .list_classes_with_pagination_impl(ClassListQuery::default())
            .await
            .unwrap();
        assert_eq!(classes.pagination.total, 1);

        // 重复批准不再追加通知
        let notifications = storage
            .list_notifications_with_pagination_impl(tutor, NotificationListQuery::default())
            .await
            .unwrap();
        assert_eq!(notifications.items.len(), 1);
    }

    #[tokio::test]
    async fn reject_finalizes_with_note_and_blocks_later_approve() {
        let storage = setup_storage().await;
        let tutor = create_user(&storage, "tutor_one", UserRole::Tutor).await;
        let admin = create_user(&storage, "admin_one", UserRole::Admin).await;

        let request = storage
            .create_class_request_impl(tutor, sample_submit("P6 Math"))
            .await
            .unwrap();

        let outcome = storage
            .reject_class_request_impl(request.id, admin, Some("Duplicate listing".to_string()))
            .await
            .unwrap();

        let RejectOutcome::Rejected { request: rejected } = outcome else {
            panic!("expected rejection to succeed");
        };
        match rejected.review {
            ReviewState::Rejected {
                reviewed_by, note, ..
            } => {
                assert_eq!(reviewed_by, admin);
                assert_eq!(note.as_deref(), Some("Duplicate listing"));
            }
            other => panic!("expected rejected review state, got {other:?}"),
        }

        // 驳回后不可再批准
        let approve = storage
            .approve_class_request_impl(request.id, admin)
            .await
            .unwrap();
        assert!(matches!(approve, ApproveOutcome::AlreadyReviewed));

        // 没有课程产生
        let classes = storage
            .list_classes_with_pagination_impl(ClassListQuery::default())
            .await
            .unwrap();
        assert_eq!(classes.pagination.total, 0);

        let notifications = storage
            .list_notifications_with_pagination_impl(tutor, NotificationListQuery::default())
            .await
            .unwrap();
        assert_eq!(notifications.items.len(), 1);
        assert_eq!(notifications.items[0].title, "Class request rejected");
        assert!(notifications.items[0].message.contains("Duplicate listing"));
    }

    #[tokio::test]
    async fn review_unknown_request_is_not_found() {
        let storage = setup_storage().await;
        let admin = create_user(&storage, "admin_one", UserRole::Admin).await;

        let approve = storage.approve_class_request_impl(999, admin).await.unwrap();
        assert!(matches!(approve, ApproveOutcome::NotFound));

        let reject = storage
            .reject_class_request_impl(999, admin, None)
            .await
            .unwrap();
        assert!(matches!(reject, RejectOutcome::NotFound));
    }

    #[tokio::test]
    async fn withdraw_requires_ownership_and_pending_status() {
        let storage = setup_storage().await;
        let tutor = create_user(&storage, "tutor_one", UserRole::Tutor).await;
        let other = create_user(&storage, "tutor_two", UserRole::Tutor).await;
        let admin = create_user(&storage, "admin_one", UserRole::Admin).await;

        let request = storage
            .create_class_request_impl(tutor, sample_submit("P6 Math"))
            .await
            .unwrap();

        // 他人不能撤回
        assert!(
            !storage
                .withdraw_class_request_impl(request.id, other)
                .await
                .unwrap()
        );

        // 本人可撤回 pending 申请
        assert!(
            storage
                .withdraw_class_request_impl(request.id, tutor)
                .await
                .unwrap()
        );
        assert!(
            storage
                .get_class_request_by_id_impl(request.id)
                .await
                .unwrap()
                .is_none()
        );

        // 已定稿的申请不可撤回
        let reviewed = storage
            .create_class_request_impl(tutor, sample_submit("Sec 1 Science"))
            .await
            .unwrap();
        storage
            .approve_class_request_impl(reviewed.id, admin)
            .await
            .unwrap();
        assert!(
            !storage
                .withdraw_class_request_impl(reviewed.id, tutor)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn list_filters_by_tutor_and_status() {
        let storage = setup_storage().await;
        let tutor_a = create_user(&storage, "tutor_one", UserRole::Tutor).await;
        let tutor_b = create_user(&storage, "tutor_two", UserRole::Tutor).await;
        let admin = create_user(&storage, "admin_one", UserRole::Admin).await;

        let a1 = storage
            .create_class_request_impl(tutor_a, sample_submit("P6 Math"))
            .await
            .unwrap();
        storage
            .create_class_request_impl(tutor_a, sample_submit("Sec 2 English"))
            .await
            .unwrap();
        storage
            .create_class_request_impl(tutor_b, sample_submit("JC Chemistry"))
            .await
            .unwrap();

        storage
            .approve_class_request_impl(a1.id, admin)
            .await
            .unwrap();

        let mine = storage
            .list_class_requests_with_pagination_impl(ClassRequestListQuery {
                tutor_id: Some(tutor_a),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(mine.pagination.total, 2);

        let pending = storage
            .list_class_requests_with_pagination_impl(ClassRequestListQuery {
                status: Some(RequestStatus::Pending),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(pending.pagination.total, 2);

        let approved_of_a = storage
            .list_class_requests_with_pagination_impl(ClassRequestListQuery {
                tutor_id: Some(tutor_a),
                status: Some(RequestStatus::Approved),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(approved_of_a.pagination.total, 1);
        assert_eq!(approved_of_a.items[0].title, "P6 Math");
    }

    #[tokio::test]
    async fn concurrent_review_finalizes_exactly_once() {
        let storage = setup_storage().await;
        let tutor = create_user(&storage, "tutor_one", UserRole::Tutor).await;
        let admin_a = create_user(&storage, "admin_one", UserRole::Admin).await;
        let admin_b = create_user(&storage, "admin_two", UserRole::Admin).await;

        let request = storage
            .create_class_request_impl(tutor, sample_submit("P6 Math"))
            .await
            .unwrap();

        let (approve, reject) = tokio::join!(
            storage.approve_class_request_impl(request.id, admin_a),
            storage.reject_class_request_impl(request.id, admin_b, None),
        );

        let approve_won = matches!(approve.unwrap(), ApproveOutcome::Approved { .. });
        let reject_won = matches!(reject.unwrap(), RejectOutcome::Rejected { .. });
        assert!(
            approve_won ^ reject_won,
            "exactly one reviewer must win the race"
        );

        // 败者没有留下半成品：课程数量与最终状态一致
        let classes = storage
            .list_classes_with_pagination_impl(ClassListQuery::default())
            .await
            .unwrap();
        let final_request = storage
            .get_class_request_by_id_impl(request.id)
            .await
            .unwrap()
            .unwrap();
        if approve_won {
            assert_eq!(classes.pagination.total, 1);
            assert!(matches!(final_request.review, ReviewState::Approved { .. }));
        } else {
            assert_eq!(classes.pagination.total, 0);
            assert!(matches!(final_request.review, ReviewState::Rejected { .. }));
        }

        // 恰好一条审核通知
        let notifications = storage
            .list_notifications_with_pagination_impl(tutor, NotificationListQuery::default())
            .await
            .unwrap();
        assert_eq!(notifications.items.len(), 1);
    }

    #[tokio::test]
    async fn mark_notification_read_checks_ownership() {
        let storage = setup_storage().await;
        let tutor = create_user(&storage, "tutor_one", UserRole::Tutor).await;
        let other = create_user(&storage, "tutor_two", UserRole::Tutor).await;
        let admin = create_user(&storage, "admin_one", UserRole::Admin).await;

        let request = storage
            .create_class_request_impl(tutor, sample_submit("P6 Math"))
            .await
            .unwrap();
        storage
            .approve_class_request_impl(request.id, admin)
            .await
            .unwrap();

        let notifications = storage
            .list_notifications_with_pagination_impl(tutor, NotificationListQuery::default())
            .await
            .unwrap();
        let notification_id = notifications.items[0].id;

        assert!(
            !storage
                .mark_notification_as_read_impl(notification_id, other)
                .await
                .unwrap()
        );
        assert_eq!(storage.get_unread_notification_count_impl(tutor).await.unwrap(), 1);

        assert!(
            storage
                .mark_notification_as_read_impl(notification_id, tutor)
                .await
                .unwrap()
        );
        assert_eq!(storage.get_unread_notification_count_impl(tutor).await.unwrap(), 0);
    }
}
