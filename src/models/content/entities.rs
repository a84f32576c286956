use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 视频课
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/content.ts")]
pub struct VideoLecture {
    pub id: i64,
    pub chapter_id: i64,
    pub title: String,
    pub video_url: String,
    pub duration_seconds: Option<i32>,
    pub sort_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 章节讲义（管理员维护，所有选课学生可见）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/content.ts")]
pub struct AdminNote {
    pub id: i64,
    pub chapter_id: i64,
    pub title: String,
    pub content: String,
    pub sort_order: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 学生私人笔记
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/content.ts")]
pub struct StudentNote {
    pub id: i64,
    pub student_id: i64,
    pub chapter_id: i64,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
