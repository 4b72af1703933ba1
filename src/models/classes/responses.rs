use super::entities::Class;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 单个课程响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/class.ts")]
pub struct ClassResponse {
    pub class: Class,
}

// 课程列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../mobile/src/types/generated/class.ts")]
pub struct ClassListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Class>,
}
