use std::sync::Arc;

use crate::models::{
    class_requests::{
        entities::{ApproveOutcome, ClassRequest, RejectOutcome},
        requests::{ClassRequestListQuery, SubmitClassRequest},
        responses::ClassRequestListResponse,
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    notifications::{
        entities::Notification,
        requests::{CreateNotificationRequest, NotificationListQuery},
        responses::NotificationListResponse,
    },
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段须为已哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 列出某角色全部用户 ID（广播通知用）
    async fn list_user_ids_by_role(&self, role: Option<UserRole>) -> Result<Vec<i64>>;

    /// 课程管理方法
    // 直接创建课程（管理员，绕过审核工作流）
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取课程信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出课程
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    // 更新课程信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除课程
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 开课申请审核方法
    // 家教提交开课申请，初始状态 pending
    async fn create_class_request(
        &self,
        tutor_id: i64,
        request: SubmitClassRequest,
    ) -> Result<ClassRequest>;
    // 通过ID获取申请
    async fn get_class_request_by_id(&self, request_id: i64) -> Result<Option<ClassRequest>>;
    // 列出申请（管理员看全部，家教只看自己的）
    async fn list_class_requests_with_pagination(
        &self,
        query: ClassRequestListQuery,
    ) -> Result<ClassRequestListResponse>;
    // 批准申请：建课、定稿申请、写入通知，三者同一事务
    async fn approve_class_request(
        &self,
        request_id: i64,
        reviewer_id: i64,
    ) -> Result<ApproveOutcome>;
    // 驳回申请：定稿申请、写入通知，同一事务
    async fn reject_class_request(
        &self,
        request_id: i64,
        reviewer_id: i64,
        note: Option<String>,
    ) -> Result<RejectOutcome>;
    // 家教撤回自己的 pending 申请，已审核或他人的申请不可撤回
    async fn withdraw_class_request(&self, request_id: i64, tutor_id: i64) -> Result<bool>;

    /// 通知管理方法
    // 创建通知
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification>;
    // 批量创建通知，返回写入条数
    async fn create_notifications_batch(
        &self,
        reqs: Vec<CreateNotificationRequest>,
    ) -> Result<u64>;
    // 列出用户通知
    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse>;
    // 用户未读通知数量
    async fn get_unread_notification_count(&self, user_id: i64) -> Result<u64>;
    // 标记通知已读，只能操作属于自己的通知
    async fn mark_notification_as_read(&self, notification_id: i64, user_id: i64) -> Result<bool>;
    // 标记用户全部通知已读，返回影响条数
    async fn mark_all_notifications_as_read(&self, user_id: i64) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
