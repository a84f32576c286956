use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, ensure_course_access};
use crate::middlewares::RequireJWT;
use crate::models::courses::{
    requests::CreateChapterRequest,
    responses::ChapterListResponse,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_chapter(
    service: &CourseService,
    course_id: i64,
    chapter_data: CreateChapterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if chapter_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "章节标题不能为空",
        )));
    }

    // 课程必须存在
    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
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
    }

    match storage.create_chapter(course_id, chapter_data).await {
        Ok(chapter) => Ok(HttpResponse::Created().json(ApiResponse::success(chapter, "章节创建成功"))),
        Err(e) => {
            let msg = format!("创建章节失败: {e}");
            if msg.contains("UNIQUE constraint failed") || msg.contains("Duplicate entry") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "该排序号在本课程中已被占用",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

pub async fn list_chapters(
    service: &CourseService,
    course_id: i64,
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

    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
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
    }

    if let Err(response) = ensure_course_access(&storage, &current_user, course_id).await {
        return Ok(response);
    }

    match storage.list_chapters(course_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ChapterListResponse { items },
            "获取章节列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取章节列表失败: {e}"),
            )),
        ),
    }
}
