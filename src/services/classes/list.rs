use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::{
    ApiResponse, ErrorCode,
    classes::requests::{ClassListQuery, ClassQueryParams},
};

pub async fn list_classes(
    service: &ClassService,
    query: ClassQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 公开目录只展示上架课程
    let list_query = ClassListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        subject: query.subject,
        grade: query.grade,
        location: query.location,
        tutor_id: query.tutor_id,
        active_only: true,
    };

    match storage.list_classes_with_pagination(list_query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Classes retrieved")))
        }
        Err(e) => {
            error!("Failed to list classes: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list classes: {e}"),
                )),
            )
        }
    }
}
