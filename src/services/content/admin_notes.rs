use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ContentService, load_chapter_checked};
use crate::middlewares::RequireJWT;
use crate::models::content::{
    requests::{CreateAdminNoteRequest, UpdateAdminNoteRequest},
    responses::AdminNoteListResponse,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_admin_note(
    service: &ContentService,
    chapter_id: i64,
    data: CreateAdminNoteRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if data.title.trim().is_empty() || data.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "讲义标题和内容不能为空",
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

    match storage.create_admin_note(chapter_id, data).await {
        Ok(note) => Ok(HttpResponse::Created().json(ApiResponse::success(note, "讲义创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建讲义失败: {e}"),
            )),
        ),
    }
}

pub async fn list_admin_notes(
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

    match storage.list_admin_notes(chapter_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AdminNoteListResponse { items },
            "获取讲义列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取讲义列表失败: {e}"),
            )),
        ),
    }
}

pub async fn update_admin_note(
    service: &ContentService,
    note_id: i64,
    data: UpdateAdminNoteRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_admin_note(note_id, data).await {
        Ok(Some(note)) => Ok(HttpResponse::Ok().json(ApiResponse::success(note, "讲义更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NoteNotFound,
            "讲义不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新讲义失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_admin_note(
    service: &ContentService,
    note_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_admin_note(note_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("讲义删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NoteNotFound,
            "讲义不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除讲义失败: {e}"),
            )),
        ),
    }
}
