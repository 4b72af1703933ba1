use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NotificationService;
use crate::models::{
    ApiResponse, ErrorCode,
    notifications::{
        entities::NotificationCategory,
        requests::{BroadcastTarget, CreateNotificationRequest, SendNotificationRequest},
        responses::SendNotificationResponse,
    },
    users::entities::UserRole,
};
use crate::services::push;

/// 管理员向全体/学生/导师广播系统通知
pub async fn send_notification(
    service: &NotificationService,
    send_data: SendNotificationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if send_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Field 'title' is required or invalid",
        )));
    }
    if send_data.message.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Field 'message' is required or invalid",
        )));
    }

    let storage = service.get_storage(request);

    let role = match send_data.target {
        BroadcastTarget::All => None,
        BroadcastTarget::Students => Some(UserRole::Student),
        BroadcastTarget::Tutors => Some(UserRole::Tutor),
    };

    let user_ids = match storage.list_user_ids_by_role(role).await {
        Ok(ids) => ids,
        Err(e) => {
            error!("Failed to resolve broadcast recipients: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::NotificationSendFailed,
                    format!("Failed to resolve broadcast recipients: {e}"),
                )),
            );
        }
    };

    let requests: Vec<CreateNotificationRequest> = user_ids
        .iter()
        .map(|&user_id| CreateNotificationRequest {
            user_id,
            title: send_data.title.clone(),
            message: send_data.message.clone(),
            category: NotificationCategory::System,
        })
        .collect();

    match storage.create_notifications_batch(requests).await {
        Ok(count) => {
            tracing::info!(count = count, "Broadcast notification sent");

            let gateway = service.get_push(request);
            for user_id in user_ids {
                push::dispatch(
                    gateway.clone(),
                    user_id,
                    send_data.title.clone(),
                    send_data.message.clone(),
                );
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SendNotificationResponse { count },
                "Notification sent",
            )))
        }
        Err(e) => {
            error!("Failed to send broadcast notification: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::NotificationSendFailed,
                    format!("Failed to send notification: {e}"),
                )),
            )
        }
    }
}
