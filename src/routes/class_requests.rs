use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::class_requests::requests::{
    ClassRequestQueryParams, RejectClassRequest, SubmitClassRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ClassRequestService;
use crate::utils::SafeRequestIdI64;

// 懒加载的全局 ClassRequestService 实例
static CLASS_REQUEST_SERVICE: Lazy<ClassRequestService> = Lazy::new(ClassRequestService::new_lazy);

pub async fn submit_request(
    req: HttpRequest,
    submit_data: web::Json<SubmitClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_REQUEST_SERVICE
        .submit_request(submit_data.into_inner(), &req)
        .await
}

pub async fn list_requests(
    req: HttpRequest,
    query: web::Query<ClassRequestQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASS_REQUEST_SERVICE
        .list_requests(query.into_inner(), &req)
        .await
}

pub async fn get_request(
    req: HttpRequest,
    request_id: SafeRequestIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_REQUEST_SERVICE.get_request(request_id.0, &req).await
}

pub async fn approve_request(
    req: HttpRequest,
    request_id: SafeRequestIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_REQUEST_SERVICE
        .approve_request(request_id.0, &req)
        .await
}

pub async fn reject_request(
    req: HttpRequest,
    request_id: SafeRequestIdI64,
    reject_data: web::Json<RejectClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_REQUEST_SERVICE
        .reject_request(request_id.0, reject_data.into_inner(), &req)
        .await
}

pub async fn withdraw_request(
    req: HttpRequest,
    request_id: SafeRequestIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_REQUEST_SERVICE
        .withdraw_request(request_id.0, &req)
        .await
}

// 配置路由
pub fn configure_class_request_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/class-requests")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 管理员看全量，导师只看自己的
                    .route(web::get().to(list_requests))
                    .route(
                        // 仅导师可提交开课申请
                        web::post()
                            .to(submit_request)
                            .wrap(middlewares::RequireRole::new(&UserRole::Tutor)),
                    ),
            )
            .service(
                web::resource("/{request_id}")
                    .route(web::get().to(get_request))
                    .route(
                        // 导师撤回自己待审的申请
                        web::delete()
                            .to(withdraw_request)
                            .wrap(middlewares::RequireRole::new(&UserRole::Tutor)),
                    ),
            )
            .route(
                "/{request_id}/approve",
                web::post()
                    .to(approve_request)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .route(
                "/{request_id}/reject",
                web::post()
                    .to(reject_request)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    );
}
