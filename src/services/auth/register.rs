use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::RegisterRequest, responses::LoginResponse},
    users::entities::{UserProfile, UserRole},
    users::requests::CreateUserRequest,
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 注册只开放学生与导师，管理员走部署时种子账号
    if register_request.role == UserRole::Admin {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Cannot register as admin",
        )));
    }

    // 验证用户名
    if let Err(msg) = validate_username(&register_request.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 验证密码强度
    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    let storage = service.get_storage(request);
    let config = service.get_config();

    let create_request = CreateUserRequest {
        username: register_request.username,
        email: register_request.email,
        password: password_hash,
        role: register_request.role,
        // 导师默认未批准，由存储层决定
        approved: None,
        profile: register_request.profile.unwrap_or(UserProfile {
            display_name: None,
            contact_no: None,
            grade: None,
        }),
    };

    match storage.create_user(create_request).await {
        Ok(user) => match user.generate_token_pair() {
            Ok(token_pair) => {
                tracing::info!("User {} registered successfully", user.username);
                let response = LoginResponse {
                    access_token: token_pair.access_token,
                    refresh_token: token_pair.refresh_token,
                    expires_in: config.jwt.access_token_expiry * 60,
                    user,
                };
                Ok(HttpResponse::Created()
                    .json(ApiResponse::success(response, "Registration successful")))
            }
            Err(e) => {
                error!("Failed to generate JWT token after registration: {}", e);
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Registration succeeded but token generation failed, please login",
                    )),
                )
            }
        },
        Err(e) => {
            let msg = format!("User creation failed: {e}");
            error!("{}", msg);
            // 判断是否唯一约束冲突
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Username or email already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::UserCreationFailed, msg)))
            }
        }
    }
}
