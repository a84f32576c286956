use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 教师建立自己的资料
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherProfileRequest {
    pub full_name: String,
    pub expertise: Option<String>,
    #[serde(default)]
    pub experience_years: i32,
    pub qualification: Option<String>,
    pub bio: Option<String>,
}

// 教师更新自己的资料
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherProfileRequest {
    pub full_name: Option<String>,
    pub expertise: Option<String>,
    pub experience_years: Option<i32>,
    pub qualification: Option<String>,
    pub bio: Option<String>,
}

// 教师列表查询参数（管理员）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub is_verified: Option<bool>,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub is_verified: Option<bool>,
}
