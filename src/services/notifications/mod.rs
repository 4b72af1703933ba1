pub mod count;
pub mod list;
pub mod mark_read;
pub mod send;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notifications::requests::{NotificationQueryParams, SendNotificationRequest};
use crate::services::push::PushGateway;
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_push(&self, request: &HttpRequest) -> Arc<dyn PushGateway> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn PushGateway>>>()
            .expect("Push gateway not found in app data")
            .get_ref()
            .clone()
    }

    // 当前用户的通知列表
    pub async fn list_notifications(
        &self,
        query: NotificationQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_notifications(self, query, request).await
    }

    // 未读数量
    pub async fn unread_count(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        count::unread_count(self, request).await
    }

    // 单条已读
    pub async fn mark_read(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark_read::mark_read(self, notification_id, request).await
    }

    // 全部已读
    pub async fn mark_all_read(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        mark_read::mark_all_read(self, request).await
    }

    // 管理员广播
    pub async fn send_notification(
        &self,
        send_data: SendNotificationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        send::send_notification(self, send_data, request).await
    }
}
