//! 推送网关
//!
//! 站内通知落库后再尝试外推（App 推送等）。外推是尽力而为的旁路：
//! 失败只记日志，绝不影响审核事务的结果。

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::errors::{Result, TutorLinkError};

/// 通知外推通道
#[async_trait]
pub trait PushGateway: Send + Sync {
    async fn send(&self, user_id: i64, title: &str, message: &str) -> Result<()>;
}

/// 仅记日志的网关，未接入真实推送服务时的默认实现
pub struct LogOnlyPushGateway;

#[async_trait]
impl PushGateway for LogOnlyPushGateway {
    async fn send(&self, user_id: i64, title: &str, message: &str) -> Result<()> {
        // 空标题/正文的推送任何真实通道都会拒收，在这里统一挡下
        if user_id <= 0 || title.trim().is_empty() || message.trim().is_empty() {
            return Err(TutorLinkError::push_delivery(format!(
                "推送负载非法 (user_id: {user_id})"
            )));
        }

        info!(
            user_id = user_id,
            title = title,
            message = message,
            "Push notification dispatched (log-only gateway)"
        );
        Ok(())
    }
}

pub fn create_push_gateway() -> Arc<dyn PushGateway> {
    Arc::new(LogOnlyPushGateway)
}

/// 异步派发推送，调用方不等待结果
pub fn dispatch(gateway: Arc<dyn PushGateway>, user_id: i64, title: String, message: String) {
    tokio::spawn(async move {
        if let Err(e) = gateway.send(user_id, &title, &message).await {
            warn!(user_id = user_id, "Push delivery failed: {e}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_only_gateway_accepts_valid_payload() {
        let gateway = LogOnlyPushGateway;
        assert!(gateway.send(1, "Class request approved", "Details").await.is_ok());
    }

    #[tokio::test]
    async fn test_log_only_gateway_rejects_invalid_payload() {
        let gateway = LogOnlyPushGateway;

        let err = gateway.send(1, "", "Details").await.unwrap_err();
        assert_eq!(err.code(), "E011");

        assert!(gateway.send(1, "Title", "   ").await.is_err());
        assert!(gateway.send(0, "Title", "Details").await.is_err());
    }
}
