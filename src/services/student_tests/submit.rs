use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StudentTestService, current_user};
use crate::models::tests::{entities::AssignmentStatus, requests::SubmitTestRequest};
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_submit(
    service: &StudentTestService,
    test_id: i64,
    data: SubmitTestRequest,
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

    // 已完成的指派重复交卷：返回已有成绩（判分层保证幂等）
    if !assignment.status.can_submit() && !assignment.status.is_completed() {
        let message = if assignment.status == AssignmentStatus::Cancelled {
            "该指派已被撤销"
        } else {
            "请先开始作答再交卷"
        };
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AttemptNotStartable,
            message,
        )));
    }

    match storage.submit_assignment(assignment.id, &data.answers).await {
        Ok(result) => {
            if !result.already_graded {
                info!(
                    "Student {} submitted test {}: {}/{}",
                    user.id, test_id, result.obtained_marks, result.total_marks
                );
            }
            let message = if result.already_graded {
                "该试卷已判分"
            } else {
                "交卷成功"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(result, message)))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("交卷失败: {e}"),
        ))),
    }
}
