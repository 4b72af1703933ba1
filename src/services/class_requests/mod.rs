pub mod approve;
pub mod get;
pub mod list;
pub mod reject;
pub mod submit;
pub mod withdraw;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::class_requests::requests::{ClassRequestQueryParams, SubmitClassRequest};
use crate::models::class_requests::requests::RejectClassRequest;
use crate::services::push::PushGateway;
use crate::storage::Storage;

pub struct ClassRequestService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassRequestService {
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

    // 家教提交开课申请
    pub async fn submit_request(
        &self,
        submit_data: SubmitClassRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_request(self, submit_data, request).await
    }

    // 列出申请（管理员全量/按状态，家教仅自己的）
    pub async fn list_requests(
        &self,
        query: ClassRequestQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_requests(self, query, request).await
    }

    // 查看单个申请
    pub async fn get_request(
        &self,
        request_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_request(self, request_id, request).await
    }

    // 管理员批准申请
    pub async fn approve_request(
        &self,
        request_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        approve::approve_request(self, request_id, request).await
    }

    // 管理员驳回申请
    pub async fn reject_request(
        &self,
        request_id: i64,
        reject_data: RejectClassRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        reject::reject_request(self, request_id, reject_data, request).await
    }

    // 家教撤回申请
    pub async fn withdraw_request(
        &self,
        request_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        withdraw::withdraw_request(self, request_id, request).await
    }
}
