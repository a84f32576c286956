use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StudentTestService, current_user};
use crate::models::tests::{entities::AssignmentStatus, responses::AssignmentResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_retake(
    service: &StudentTestService,
    test_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    let latest = match storage.get_latest_assignment(user.id, test_id).await {
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

    // 上一次尝试已判分或已撤销才能重考
    if !matches!(
        latest.status,
        AssignmentStatus::Evaluated | AssignmentStatus::Cancelled
    ) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::RetakeNotAllowed,
            "当前尝试尚未结束，不能重考",
        )));
    }

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
            "测验当前不可作答",
        )));
    }

    match storage.create_retake(user.id, test_id, None).await {
        Ok(assignment) => {
            info!(
                "Retake created: student={} test={} attempt={}",
                user.id, test_id, assignment.attempt_number
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AssignmentResponse { assignment },
                "重考指派创建成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建重考指派失败: {e}"),
            )),
        ),
    }
}
