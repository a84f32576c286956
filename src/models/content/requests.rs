use serde::Deserialize;
use ts_rs::TS;

// 视频课创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/content.ts")]
pub struct CreateLectureRequest {
    pub title: String,
    pub video_url: String,
    pub duration_seconds: Option<i32>,
    pub sort_order: i32,
}

// 视频课更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/content.ts")]
pub struct UpdateLectureRequest {
    pub title: Option<String>,
    pub video_url: Option<String>,
    pub duration_seconds: Option<i32>,
    pub sort_order: Option<i32>,
}

// 章节讲义创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/content.ts")]
pub struct CreateAdminNoteRequest {
    pub title: String,
    pub content: String,
    pub sort_order: i32,
}

// 章节讲义更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/content.ts")]
pub struct UpdateAdminNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub sort_order: Option<i32>,
}

// 学生笔记创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/content.ts")]
pub struct CreateStudentNoteRequest {
    pub chapter_id: i64,
    pub content: String,
}

// 学生笔记更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/content.ts")]
pub struct UpdateStudentNoteRequest {
    pub content: String,
}
