use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, classes::responses::ClassResponse};

pub async fn get_class(
    service: &ClassService,
    class_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) if class.is_active => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(ClassResponse { class }, "Class retrieved")))
        }
        // 下架课程对外不可见
        Ok(_) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::ClassNotFound, "Class not found"))),
        Err(e) => {
            error!("Failed to get class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get class: {e}"),
                )),
            )
        }
    }
}
