use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassRequestService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    class_requests::{
        entities::RejectOutcome,
        requests::RejectClassRequest,
        responses::ClassRequestResponse,
    },
};
use crate::services::push;

pub async fn reject_request(
    service: &ClassRequestService,
    request_id: i64,
    reject_data: RejectClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(reviewer) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    match storage
        .reject_class_request(request_id, reviewer.id, reject_data.note)
        .await
    {
        Ok(RejectOutcome::Rejected { request: rejected }) => {
            tracing::info!(
                request_id = rejected.id,
                reviewer_id = reviewer.id,
                "Class request rejected"
            );

            push::dispatch(
                service.get_push(request),
                rejected.tutor_id,
                "Class request rejected".to_string(),
                format!("Your class request '{}' was not approved.", rejected.title),
            );

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ClassRequestResponse::from(rejected),
                "Class request rejected",
            )))
        }
        Ok(RejectOutcome::NotFound) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::RequestNotFound, "Class request not found"),
        )),
        Ok(RejectOutcome::AlreadyReviewed) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::RequestAlreadyReviewed,
                "Class request has already been reviewed",
            ),
        )),
        Err(e) => {
            error!("Failed to reject class request {}: {}", request_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to reject class request: {e}"),
                )),
            )
        }
    }
}
