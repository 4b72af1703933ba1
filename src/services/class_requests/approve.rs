use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassRequestService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    class_requests::{
        entities::ApproveOutcome,
        responses::{ApproveResponse, ClassRequestResponse},
    },
};
use crate::services::push;

pub async fn approve_request(
    service: &ClassRequestService,
    request_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(reviewer) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage.approve_class_request(request_id, reviewer.id).await {
        Ok(ApproveOutcome::Approved {
            request: approved,
            class,
        }) => {
            tracing::info!(
                request_id = approved.id,
                class_id = class.id,
                reviewer_id = reviewer.id,
                "Class request approved"
            );

            // 站内通知已随事务落库，外推是尽力而为
            push::dispatch(
                service.get_push(request),
                approved.tutor_id,
                "Class request approved".to_string(),
                format!("Your class '{}' is now listed.", class.title),
            );

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ApproveResponse {
                    request: ClassRequestResponse::from(approved),
                    class,
                },
                "Class request approved",
            )))
        }
        Ok(ApproveOutcome::NotFound) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::RequestNotFound, "Class request not found"),
        )),
        Ok(ApproveOutcome::AlreadyReviewed) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::RequestAlreadyReviewed,
                "Class request has already been reviewed",
            ),
        )),
        Err(e) => {
            error!("Failed to approve class request {}: {}", request_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to approve class request: {e}"),
                )),
            )
        }
    }
}
