use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NotificationService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    notifications::requests::{NotificationListQuery, NotificationQueryParams},
};

pub async fn list_notifications(
    service: &NotificationService,
    query: NotificationQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    let list_query = NotificationListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        unread_only: query.unread_only.unwrap_or(false),
    };

    match storage
        .list_notifications_with_pagination(user.id, list_query)
        .await
    {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Notifications retrieved")))
        }
        Err(e) => {
            error!("Failed to list notifications for user {}: {}", user.id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list notifications: {e}"),
                )),
            )
        }
    }
}
