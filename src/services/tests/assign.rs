use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{TestService, load_test};
use crate::models::tests::{
    requests::{AssignCourseRequest, AssignTestRequest},
    responses::AssignSummaryResponse,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn assign_students(
    service: &TestService,
    test_id: i64,
    data: AssignTestRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if data.student_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "学生列表不能为空",
        )));
    }

    let test = match load_test(&storage, test_id).await {
        Ok(test) => test,
        Err(response) => return Ok(response),
    };

    if !test.is_assignable() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TestNotPublished,
            "测验未发布或已停用，不能指派",
        )));
    }

    // 只能指派给学生账号
    for &student_id in &data.student_ids {
        match storage.get_user_by_id(student_id).await {
            Ok(Some(user)) if user.role == UserRole::Student => {}
            Ok(Some(_)) | Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    format!("用户 {student_id} 不是学生"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询用户失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage
        .create_assignments(test_id, &data.student_ids, data.due_at)
        .await
    {
        Ok((assigned_count, skipped_count)) => {
            info!(
                "Test {} assigned to {} students ({} skipped)",
                test_id, assigned_count, skipped_count
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AssignSummaryResponse {
                    assigned_count,
                    skipped_count,
                },
                "测验指派完成",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("指派测验失败: {e}"),
            )),
        ),
    }
}

pub async fn assign_course(
    service: &TestService,
    test_id: i64,
    data: AssignCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let test = match load_test(&storage, test_id).await {
        Ok(test) => test,
        Err(response) => return Ok(response),
    };

    if !test.is_assignable() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TestNotPublished,
            "测验未发布或已停用，不能指派",
        )));
    }

    // 指派给测验所属课程的全部在读学生
    let student_ids = match storage.list_course_active_student_ids(test.course_id).await {
        Ok(ids) => ids,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程学生失败: {e}"),
                )),
            );
        }
    };

    if student_ids.is_empty() {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssignSummaryResponse {
                assigned_count: 0,
                skipped_count: 0,
            },
            "该课程当前没有在读学生",
        )));
    }

    match storage
        .create_assignments(test_id, &student_ids, data.due_at)
        .await
    {
        Ok((assigned_count, skipped_count)) => {
            info!(
                "Test {} assigned to course {} enrollees: {} assigned, {} skipped",
                test_id, test.course_id, assigned_count, skipped_count
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AssignSummaryResponse {
                    assigned_count,
                    skipped_count,
                },
                "测验指派完成",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("指派测验失败: {e}"),
            )),
        ),
    }
}
