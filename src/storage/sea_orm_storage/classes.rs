//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{Result, TutorLinkError};
use crate::models::{
    PaginationInfo,
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 直接创建课程（管理员入口，审核工作流之外）
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            tutor_id: Set(req.tutor_id),
            title: Set(req.title),
            description: Set(req.description.unwrap_or_default()),
            subject: Set(req.subject),
            grade: Set(req.grade),
            location: Set(req.location),
            schedule: Set(req.schedule),
            price: Set(req.price.unwrap_or(0.0)),
            promoted: Set(false),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取课程
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 分页列出课程
    ///
    /// 推广位课程排在前面，其余按创建时间倒序。
    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Classes::find();

        if query.active_only {
            select = select.filter(Column::IsActive.eq(true));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Description.contains(&escaped))
                    .add(Column::Subject.contains(&escaped)),
            );
        }

        if let Some(ref subject) = query.subject {
            select = select.filter(Column::Subject.eq(subject));
        }

        if let Some(ref grade) = query.grade {
            select = select.filter(Column::Grade.eq(grade));
        }

        if let Some(ref location) = query.location {
            select = select.filter(Column::Location.eq(location));
        }

        if let Some(tutor_id) = query.tutor_id {
            select = select.filter(Column::TutorId.eq(tutor_id));
        }

        // 排序
        select = select
            .order_by_desc(Column::Promoted)
            .order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("查询课程页数失败: {e}")))?;

        let classes = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(ClassListResponse {
            items: classes.into_iter().map(|m| m.into_class()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let existing = self.get_class_by_id_impl(class_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(class_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(subject) = update.subject {
            model.subject = Set(subject);
        }
        if let Some(grade) = update.grade {
            model.grade = Set(grade);
        }
        if let Some(location) = update.location {
            model.location = Set(location);
        }
        if let Some(schedule) = update.schedule {
            model.schedule = Set(schedule);
        }
        if let Some(price) = update.price {
            model.price = Set(price);
        }
        if let Some(promoted) = update.promoted {
            model.promoted = Set(promoted);
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 删除课程
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| TutorLinkError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
