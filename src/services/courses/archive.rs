use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::responses::CourseResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn set_archived(
    service: &CourseService,
    course_id: i64,
    archived: bool,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.set_course_archived(course_id, archived).await {
        Ok(Some(course)) => {
            let message = if archived {
                "课程已归档"
            } else {
                "课程已取消归档"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(CourseResponse { course }, message)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "课程不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新课程归档状态失败: {e}"),
            )),
        ),
    }
}
