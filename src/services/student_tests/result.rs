use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentTestService, current_user};
use crate::models::tests::{
    entities::AssignmentStatus,
    responses::{AnswerReviewItem, TestResultResponse},
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_result(
    service: &StudentTestService,
    test_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    let assignment = match storage.get_latest_assignment(user.id, test_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TestNotAssigned,
                "该测验未指派给你",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询指派记录失败: {e}"),
                )),
            );
        }
    };

    if assignment.status != AssignmentStatus::Evaluated {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "该测验尚未判分",
        )));
    }

    let answers = match storage.get_assignment_answers(assignment.id).await {
        Ok(answers) => answers,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询答题记录失败: {e}"),
                )),
            );
        }
    };

    let questions = match storage.list_questions_with_options(test_id).await {
        Ok(questions) => questions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    };

    // 逐题回顾：未作答的题目也列出，得 0 分
    let review = questions
        .into_iter()
        .map(|q| {
            let answer = answers.iter().find(|a| a.question_id == q.question.id);
            let correct_option_id = q.options.iter().find(|o| o.is_correct).map(|o| o.id);

            AnswerReviewItem {
                question: q.question,
                selected_option_id: answer.map(|a| a.selected_option_id),
                correct_option_id,
                is_correct: answer.is_some_and(|a| a.is_correct),
                marks_obtained: answer.map(|a| a.marks_obtained).unwrap_or(0),
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TestResultResponse {
            assignment,
            answers: review,
        },
        "获取成绩成功",
    )))
}
