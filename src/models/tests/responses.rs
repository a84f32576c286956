use super::entities::{AnswerOption, Question, Test, TestAssignment};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 测验响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestResponse {
    pub test: Test,
}

// 测验列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestListResponse {
    pub items: Vec<Test>,
    pub pagination: PaginationInfo,
}

// 题目及其全部选项（管理端视图，包含正确答案）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct QuestionWithOptions {
    pub question: Question,
    pub options: Vec<AnswerOption>,
}

// 测验详情（管理端）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestDetailResponse {
    pub test: Test,
    pub questions: Vec<QuestionWithOptions>,
}

// 学生视角的选项，不暴露 is_correct
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct OptionView {
    pub id: i64,
    pub text: String,
}

impl From<AnswerOption> for OptionView {
    fn from(option: AnswerOption) -> Self {
        Self {
            id: option.id,
            text: option.text,
        }
    }
}

// 学生视角的题目
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct QuestionView {
    pub id: i64,
    pub text: String,
    pub marks: i32,
    pub options: Vec<OptionView>,
}

// 开始作答后下发的试卷
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestPaperResponse {
    pub assignment: TestAssignment,
    pub test: Test,
    pub questions: Vec<QuestionView>,
}

// 交卷结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct SubmitResultResponse {
    pub assignment_id: i64,
    pub obtained_marks: i32,
    pub total_marks: i32,
    /// 重复交卷时返回首次判分结果
    pub already_graded: bool,
}

// 分配结果摘要
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct AssignSummaryResponse {
    pub assigned_count: u64,
    pub skipped_count: u64,
}

// 分配响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct AssignmentResponse {
    pub assignment: TestAssignment,
}

// 分配列表（管理端按测验查看）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<TestAssignment>,
    pub pagination: PaginationInfo,
}

// 学生待办测验条目
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct MyTestItem {
    pub assignment: TestAssignment,
    pub test: Test,
}

// 学生待办测验列表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct MyTestsResponse {
    pub items: Vec<MyTestItem>,
}

// 成绩回顾中的单题条目
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct AnswerReviewItem {
    pub question: Question,
    pub selected_option_id: Option<i64>,
    pub correct_option_id: Option<i64>,
    pub is_correct: bool,
    pub marks_obtained: i32,
}

// 成绩详情
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestResultResponse {
    pub assignment: TestAssignment,
    pub answers: Vec<AnswerReviewItem>,
}

// 历次尝试
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct AttemptHistoryResponse {
    pub items: Vec<TestAssignment>,
}
