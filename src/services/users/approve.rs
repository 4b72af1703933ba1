use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    notifications::{entities::NotificationCategory, requests::CreateNotificationRequest},
    users::{
        entities::UserRole,
        requests::UpdateUserRequest,
        responses::UserResponse,
    },
};
use crate::services::push;

/// 管理员批准导师账号，批准后导师才能提交开课申请
pub async fn approve_tutor(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let tutor = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.role == UserRole::Tutor => user,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TutorNotFound,
                "Tutor not found",
            )));
        }
        Err(e) => {
            error!("Failed to load tutor {}: {}", user_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load tutor: {e}"),
                )),
            );
        }
    };

    if tutor.approved {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { user: tutor },
            "Tutor already approved",
        )));
    }

    let update = UpdateUserRequest {
        email: None,
        password: None,
        status: None,
        approved: Some(true),
        profile: None,
    };

    match storage.update_user(user_id, update).await {
        Ok(Some(user)) => {
            tracing::info!(tutor_id = user.id, "Tutor account approved");

            let _ = storage
                .create_notification(CreateNotificationRequest {
                    user_id: user.id,
                    title: "Account approved".to_string(),
                    message: "Your tutor account has been approved. You can now submit class requests."
                        .to_string(),
                    category: NotificationCategory::System,
                })
                .await
                .map_err(|e| error!("Failed to write tutor approval notification: {e}"));

            push::dispatch(
                service.get_push(request),
                user.id,
                "Account approved".to_string(),
                "Your tutor account has been approved.".to_string(),
            );

            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(UserResponse { user }, "Tutor approved")))
        }
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::TutorNotFound, "Tutor not found"))),
        Err(e) => {
            error!("Failed to approve tutor {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to approve tutor: {e}"),
                )),
            )
        }
    }
}

/// 管理员驳回导师账号：账号保持未批准，仅通知导师结果
pub async fn reject_tutor(
    service: &UserService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let tutor = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.role == UserRole::Tutor => user,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TutorNotFound,
                "Tutor not found",
            )));
        }
        Err(e) => {
            error!("Failed to load tutor {}: {}", user_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load tutor: {e}"),
                )),
            );
        }
    };

    tracing::info!(tutor_id = tutor.id, "Tutor account rejected");

    let _ = storage
        .create_notification(CreateNotificationRequest {
            user_id: tutor.id,
            title: "Account not approved".to_string(),
            message: "Your tutor account application was not approved. Please contact support for details."
                .to_string(),
            category: NotificationCategory::System,
        })
        .await
        .map_err(|e| error!("Failed to write tutor rejection notification: {e}"));

    push::dispatch(
        service.get_push(request),
        tutor.id,
        "Account not approved".to_string(),
        "Your tutor account application was not approved.".to_string(),
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse { user: tutor }, "Tutor rejected")))
}
