use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassRequestService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    class_requests::requests::{ClassRequestListQuery, ClassRequestQueryParams},
    users::entities::UserRole,
};

pub async fn list_requests(
    service: &ClassRequestService,
    query: ClassRequestQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    // 管理员看全量审核队列，家教只看自己的申请
    let tutor_id = match user.role {
        UserRole::Admin => None,
        _ => Some(user.id),
    };

    let storage = service.get_storage(request);

    let list_query = ClassRequestListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        tutor_id,
        status: query.status,
    };

    match storage.list_class_requests_with_pagination(list_query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Class requests retrieved")))
        }
        Err(e) => {
            error!("Failed to list class requests: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list class requests: {e}"),
                )),
            )
        }
    }
}
