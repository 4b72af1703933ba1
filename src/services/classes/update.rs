use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    classes::{requests::UpdateClassRequest, responses::ClassResponse},
    users::entities::UserRole,
};

pub async fn update_class(
    service: &ClassService,
    class_id: i64,
    update_data: UpdateClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    // 导师只能改自己的课程；推广位标记只有管理员能动
    if user.role != UserRole::Admin {
        match storage.get_class_by_id(class_id).await {
            Ok(Some(class)) if class.tutor_id == user.id => {
                if update_data.promoted.is_some() {
                    return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::ClassPermissionDenied,
                        "Only admins can change promotion status",
                    )));
                }
            }
            Ok(_) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ClassNotFound,
                    "Class not found",
                )));
            }
            Err(e) => {
                error!("Failed to load class {}: {}", class_id, e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to load class: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(ClassResponse { class }, "Class updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::ClassNotFound, "Class not found"))),
        Err(e) => {
            error!("Failed to update class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update class: {e}"),
                )),
            )
        }
    }
}
