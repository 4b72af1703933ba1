use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassRequestService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn withdraw_request(
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

    // 条件删除覆盖三种失败：不存在、不是本人的、已定稿，统一折叠为 404
    match storage.withdraw_class_request(request_id, user.id).await {
        Ok(true) => {
            tracing::info!(
                request_id = request_id,
                tutor_id = user.id,
                "Class request withdrawn"
            );
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Class request withdrawn")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RequestNotFound,
            "Class request not found or no longer pending",
        ))),
        Err(e) => {
            error!("Failed to withdraw class request {}: {}", request_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to withdraw class request: {e}"),
                )),
            )
        }
    }
}
