use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ContentService, load_chapter_checked};
use crate::middlewares::RequireJWT;
use crate::models::content::{
    requests::{CreateLectureRequest, UpdateLectureRequest},
    responses::LectureListResponse,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_lecture(
    service: &ContentService,
    chapter_id: i64,
    data: CreateLectureRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if data.title.trim().is_empty() || data.video_url.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "课时标题和视频地址不能为空",
        )));
    }

    match storage.get_chapter_by_id(chapter_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ChapterNotFound,
                "章节不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询章节失败: {e}"),
                )),
            );
        }
    }

    match storage.create_lecture(chapter_id, data).await {
        Ok(lecture) => Ok(HttpResponse::Created().json(ApiResponse::success(lecture, "课时创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建课时失败: {e}"),
            )),
        ),
    }
}

pub async fn list_lectures(
    service: &ContentService,
    chapter_id: i64,
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

    if let Err(response) = load_chapter_checked(&storage, &current_user, chapter_id).await {
        return Ok(response);
    }

    match storage.list_lectures(chapter_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            LectureListResponse { items },
            "获取课时列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取课时列表失败: {e}"),
            )),
        ),
    }
}

pub async fn update_lecture(
    service: &ContentService,
    lecture_id: i64,
    data: UpdateLectureRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_lecture(lecture_id, data).await {
        Ok(Some(lecture)) => Ok(HttpResponse::Ok().json(ApiResponse::success(lecture, "课时更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LectureNotFound,
            "课时不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新课时失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_lecture(
    service: &ContentService,
    lecture_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_lecture(lecture_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("课时删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LectureNotFound,
            "课时不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除课时失败: {e}"),
            )),
        ),
    }
}
