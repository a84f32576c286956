use super::entities::{AdminNote, StudentNote, VideoLecture};
use serde::Serialize;
use ts_rs::TS;

// 视频课列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/content.ts")]
pub struct LectureListResponse {
    pub items: Vec<VideoLecture>,
}

// 章节讲义列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/content.ts")]
pub struct AdminNoteListResponse {
    pub items: Vec<AdminNote>,
}

// 学生笔记列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/content.ts")]
pub struct StudentNoteListResponse {
    pub items: Vec<StudentNote>,
}
