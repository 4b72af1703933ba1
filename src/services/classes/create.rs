use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{
    ApiResponse, ErrorCode,
    classes::{requests::CreateClassRequest, responses::ClassResponse},
    users::entities::UserRole,
};

/// 管理员直接建课，不经过申请审核
pub async fn create_class(
    service: &ClassService,
    class_data: CreateClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(field) = class_data.validate() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Field '{field}' is required or invalid"),
        )));
    }

    let storage = service.get_storage(request);

    // 课程必须挂在真实存在的导师名下
    match storage.get_user_by_id(class_data.tutor_id).await {
        Ok(Some(user)) if user.role == UserRole::Tutor => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::TutorNotFound,
                "Tutor not found",
            )));
        }
        Err(e) => {
            error!("Failed to load tutor {}: {}", class_data.tutor_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load tutor: {e}"),
                )),
            );
        }
    }

    match storage.create_class(class_data).await {
        Ok(class) => {
            tracing::info!(class_id = class.id, "Class created directly by admin");
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(ClassResponse { class }, "Class created")))
        }
        Err(e) => {
            error!("Class creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassCreationFailed,
                    format!("Class creation failed: {e}"),
                )),
            )
        }
    }
}
