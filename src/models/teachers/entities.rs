use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师资料实体，一个用户至多一份
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherProfile {
    pub id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub expertise: Option<String>,
    pub experience_years: i32,
    pub qualification: Option<String>,
    pub bio: Option<String>,
    pub profile_completed: bool,
    pub is_verified: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
