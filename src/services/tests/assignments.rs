use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TestService, load_test};
use crate::models::tests::{requests::AssignmentListQuery, responses::AssignmentResponse};
use crate::models::{ApiResponse, ErrorCode, PaginationQuery};

pub async fn list_assignments(
    service: &TestService,
    test_id: i64,
    query: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = load_test(&storage, test_id).await {
        return Ok(response);
    }

    let list_query = AssignmentListQuery {
        page: Some(query.page),
        size: Some(query.size),
    };

    match storage.list_test_assignments(test_id, list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取指派列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取指派列表失败: {e}"),
            )),
        ),
    }
}

pub async fn cancel_assignment(
    service: &TestService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "指派记录不存在",
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

    // 已交卷或已撤销的指派不能再撤销
    if !assignment.status.is_unfinished() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "只有未完成的指派可以撤销",
        )));
    }

    match storage.cancel_assignment(assignment_id).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssignmentResponse { assignment },
            "指派已撤销",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "指派记录不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("撤销指派失败: {e}"),
            )),
        ),
    }
}
