use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassRequestService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, class_requests::responses::ClassRequestResponse,
    users::entities::UserRole,
};

pub async fn get_request(
    service: &ClassRequestService,
    request_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage.get_class_request_by_id(request_id).await {
        // 他人的申请对非管理员不可见，归属错误折叠为 404
        Ok(Some(found)) if user.role == UserRole::Admin || found.tutor_id == user.id => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ClassRequestResponse::from(found),
                "Class request retrieved",
            )))
        }
        Ok(_) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RequestNotFound,
            "Class request not found",
        ))),
        Err(e) => {
            error!("Failed to get class request {}: {}", request_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get class request: {e}"),
                )),
            )
        }
    }
}
