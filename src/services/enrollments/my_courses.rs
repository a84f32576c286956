use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::{
    entities::EnrollmentStatus,
    responses::{EnrolledCourseItem, MyCoursesResponse},
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_my_courses(
    service: &EnrollmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    match storage.list_student_enrollments(current_user.id).await {
        Ok(rows) => {
            let items = rows
                .into_iter()
                .filter(|(enrollment, _)| enrollment.status == EnrollmentStatus::Active)
                .map(|(enrollment, course)| EnrolledCourseItem { enrollment, course })
                .collect();

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MyCoursesResponse { items },
                "获取我的课程成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取我的课程失败: {e}"),
            )),
        ),
    }
}
