use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::{requests::EnrollRequest, responses::EnrollmentResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_enroll(
    service: &EnrollmentService,
    enroll_request: EnrollRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 1. 档案必须完整（含年龄要求）
    if !current_user.is_profile_completed {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ProfileIncomplete,
            format!(
                "档案不完整，请先补全姓名和年龄（需大于 {} 岁）后再报名",
                config.enrollment.min_age
            ),
        )));
    }

    // 2. 课程必须存在且可报名
    let course = match storage.get_course_by_id(enroll_request.course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            );
        }
    };

    if !course.is_enrollable() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CourseArchived,
            "课程已停用或归档，不能报名",
        )));
    }

    // 3. 不能重复报名
    match storage
        .get_enrollment(current_user.id, course.id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AlreadyEnrolled,
                "已报名该课程",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询报名记录失败: {e}"),
                )),
            );
        }
    }

    // 4. 同时进行的报名数量上限
    match storage.count_active_enrollments(current_user.id).await {
        Ok(count) if count >= config.enrollment.max_active => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentLimitReached,
                format!("最多同时报名 {} 门课程", config.enrollment.max_active),
            )));
        }
        Ok(_) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("统计报名数量失败: {e}"),
                )),
            );
        }
    }

    match storage.create_enrollment(current_user.id, course.id).await {
        Ok(enrollment) => {
            info!(
                "Student {} enrolled in course {}",
                current_user.id, course.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                EnrollmentResponse { enrollment },
                "报名成功",
            )))
        }
        Err(e) => {
            let msg = format!("报名失败: {e}");
            // 并发下可能撞唯一索引
            if msg.contains("UNIQUE constraint failed") || msg.contains("Duplicate entry") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::AlreadyEnrolled,
                    "已报名该课程",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
