use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn invalid_id_error(param: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid path parameter: {param}"),
    ));
    actix_web::error::InternalError::from_response("invalid path parameter", response).into()
}

// 从路径中提取并校验正整数 ID，非法值直接以 400 响应短路
macro_rules! define_safe_id_i64 {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);
                ready(match parsed {
                    Some(id) => Ok(Self(id)),
                    None => Err(invalid_id_error($param)),
                })
            }
        }
    };
}

define_safe_id_i64!(SafeIDI64, "user_id");
define_safe_id_i64!(SafeClassIdI64, "class_id");
define_safe_id_i64!(SafeRequestIdI64, "request_id");
define_safe_id_i64!(SafeNotificationIdI64, "notification_id");
