use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 测验查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub course_id: Option<i64>,
    pub is_published: Option<bool>,
}

// 测验列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub course_id: Option<i64>,
    pub is_published: Option<bool>,
}

// 分配列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

// 测验创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct CreateTestRequest {
    pub course_id: i64,
    pub chapter_id: Option<i64>,
    pub title: String,
}

// 测验更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct UpdateTestRequest {
    pub title: Option<String>,
    pub chapter_id: Option<i64>,
    pub is_active: Option<bool>,
}

// 新建题目时附带的选项
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct NewOptionItem {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

// 题目创建请求，可一并提交选项
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct CreateQuestionRequest {
    pub text: String,
    #[serde(default = "default_marks")]
    pub marks: i32,
    #[serde(default)]
    pub options: Vec<NewOptionItem>,
}

fn default_marks() -> i32 {
    1
}

// 题目更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct UpdateQuestionRequest {
    pub text: Option<String>,
    pub marks: Option<i32>,
}

// 选项创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct CreateOptionRequest {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

// 选项更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct UpdateOptionRequest {
    pub text: Option<String>,
    pub is_correct: Option<bool>,
}

// 按学生列表分配测验
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct AssignTestRequest {
    pub student_ids: Vec<i64>,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 分配给某课程的全部在读学生
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct AssignCourseRequest {
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 单题作答
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct AnswerItem {
    pub question_id: i64,
    pub selected_option_id: i64,
}

// 交卷请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct SubmitTestRequest {
    pub answers: Vec<AnswerItem>,
}
