use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StudentTestService, current_user};
use crate::models::tests::responses::{OptionView, QuestionView, TestPaperResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_start(
    service: &StudentTestService,
    test_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    // 档案不完整不能参加测验
    if !user.is_profile_completed {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ProfileIncomplete,
            "档案不完整，请先补全姓名和年龄",
        )));
    }

    // 最近一次指派必须处于待作答状态
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

    if !assignment.status.can_start() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AttemptNotStartable,
            format!("当前状态为 {}，不能开始作答", assignment.status),
        )));
    }

    if assignment.is_overdue(chrono::Utc::now()) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AttemptOverdue,
            "该测验已过截止时间",
        )));
    }

    // 测验必须处于可作答状态
    let test = match storage.get_test_by_id(test_id).await {
        Ok(Some(test)) => test,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TestNotFound,
                "测验不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测验失败: {e}"),
                )),
            );
        }
    };

    if !test.is_assignable() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TestInactive,
            "测验未发布或已停用",
        )));
    }

    let assignment = match storage.start_assignment(assignment.id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "指派记录不存在",
            )));
        }
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AttemptNotStartable,
                format!("开始作答失败: {e}"),
            )));
        }
    };

    // 给学生的试卷不携带正确答案
    let questions = match storage.list_questions_with_options(test_id).await {
        Ok(rows) => rows
            .into_iter()
            .map(|q| QuestionView {
                id: q.question.id,
                text: q.question.text,
                marks: q.question.marks,
                options: q.options.into_iter().map(OptionView::from).collect(),
            })
            .collect(),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    };

    info!(
        "Student {} started test {} (attempt {})",
        user.id, test_id, assignment.attempt_number
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TestPaperResponse {
            assignment,
            test,
            questions,
        },
        "开始作答",
    )))
}
