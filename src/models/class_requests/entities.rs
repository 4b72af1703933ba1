use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::classes::entities::Class;

// 开课申请状态
//
// pending 是唯一的非终态；只允许 pending→approved 和 pending→rejected，
// 终态之间不可转换，也不可回到 pending。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../mobile/src/types/generated/class_request.ts")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const PENDING: &'static str = "pending";
    pub const APPROVED: &'static str = "approved";
    pub const REJECTED: &'static str = "rejected";
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            RequestStatus::PENDING => Ok(RequestStatus::Pending),
            RequestStatus::APPROVED => Ok(RequestStatus::Approved),
            RequestStatus::REJECTED => Ok(RequestStatus::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "无效的申请状态: '{s}'. 支持的状态: pending, approved, rejected"
            ))),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "{}", RequestStatus::PENDING),
            RequestStatus::Approved => write!(f, "{}", RequestStatus::APPROVED),
            RequestStatus::Rejected => write!(f, "{}", RequestStatus::REJECTED),
        }
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            _ => Err(format!("Invalid request status: {s}")),
        }
    }
}

// 审核结果
//
// 用封闭的枚举表达"approved 必有 class_id、已审核必有审核人/时间"这组约束，
// 而不是靠可空字段的约定。
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewState {
    Pending,
    Approved {
        reviewed_by: i64,
        reviewed_at: chrono::DateTime<chrono::Utc>,
        class_id: i64,
    },
    Rejected {
        reviewed_by: i64,
        reviewed_at: chrono::DateTime<chrono::Utc>,
        note: Option<String>,
    },
}

impl ReviewState {
    pub fn status(&self) -> RequestStatus {
        match self {
            ReviewState::Pending => RequestStatus::Pending,
            ReviewState::Approved { .. } => RequestStatus::Approved,
            ReviewState::Rejected { .. } => RequestStatus::Rejected,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ReviewState::Pending)
    }
}

// 开课申请实体
#[derive(Debug, Clone, PartialEq)]
pub struct ClassRequest {
    pub id: i64,
    pub tutor_id: i64,
    pub title: String,
    pub description: String,
    pub subject: String,
    pub grade: String,
    pub location: String,
    pub schedule: String,
    pub price: f64,
    pub review: ReviewState,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 批准操作的结果
//
// NotFound / AlreadyReviewed 是业务结果而非存储错误：
// 并发竞争的败者也会观察到 AlreadyReviewed。
#[derive(Debug)]
pub enum ApproveOutcome {
    Approved { request: ClassRequest, class: Class },
    NotFound,
    AlreadyReviewed,
}

// 驳回操作的结果
#[derive(Debug)]
pub enum RejectOutcome {
    Rejected { request: ClassRequest },
    NotFound,
    AlreadyReviewed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_round_trip() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
        ] {
            assert_eq!(RequestStatus::from_str(&status.to_string()).unwrap(), status);
        }
    }

    #[test]
    fn test_invalid_status_rejected() {
        assert!(RequestStatus::from_str("cancelled").is_err());
        assert!(serde_json::from_str::<RequestStatus>("\"withdrawn\"").is_err());
    }

    #[test]
    fn test_review_state_status() {
        assert_eq!(ReviewState::Pending.status(), RequestStatus::Pending);
        let approved = ReviewState::Approved {
            reviewed_by: 1,
            reviewed_at: chrono::Utc::now(),
            class_id: 7,
        };
        assert_eq!(approved.status(), RequestStatus::Approved);
        assert!(!approved.is_pending());
    }
}
