use super::entities::TeacherProfile;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 教师资料响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherProfileResponse {
    pub profile: TeacherProfile,
}

// 教师列表响应（管理员）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListResponse {
    pub items: Vec<TeacherProfile>,
    pub pagination: PaginationInfo,
}
