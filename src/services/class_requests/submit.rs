use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassRequestService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    class_requests::{requests::SubmitClassRequest, responses::ClassRequestResponse},
};

pub async fn submit_request(
    service: &ClassRequestService,
    submit_data: SubmitClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    // 未经管理员批准的导师不能提交申请
    if !user.approved {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::TutorNotApproved,
            "Tutor account is not approved yet",
        )));
    }

    // 字段校验：报告第一个缺失/非法的字段
    if let Err(field) = submit_data.validate() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::RequestValidationFailed,
            format!("Field '{field}' is required or invalid"),
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_class_request(user.id, submit_data).await {
        Ok(created) => {
            tracing::info!(
                request_id = created.id,
                tutor_id = user.id,
                "Class request submitted"
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ClassRequestResponse::from(created),
                "Class request submitted",
            )))
        }
        Err(e) => {
            error!("Class request submission failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RequestSubmitFailed,
                    format!("Class request submission failed: {e}"),
                )),
            )
        }
    }
}
