use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ContentService, load_chapter_checked};
use crate::middlewares::RequireJWT;
use crate::models::content::{
    entities::StudentNote,
    requests::{CreateStudentNoteRequest, UpdateStudentNoteRequest},
    responses::StudentNoteListResponse,
};
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};

/// 笔记只能由其作者读写
fn ensure_note_owner(note: &StudentNote, user: &User) -> Result<(), HttpResponse> {
    if note.student_id == user.id {
        Ok(())
    } else {
        Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能操作自己的笔记",
        )))
    }
}

pub async fn create_student_note(
    service: &ContentService,
    data: CreateStudentNoteRequest,
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

    if data.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "笔记内容不能为空",
        )));
    }

    // 章节必须存在且学生有课程访问权
    if let Err(response) = load_chapter_checked(&storage, &current_user, data.chapter_id).await {
        return Ok(response);
    }

    match storage.create_student_note(current_user.id, data).await {
        Ok(note) => Ok(HttpResponse::Created().json(ApiResponse::success(note, "笔记创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建笔记失败: {e}"),
            )),
        ),
    }
}

pub async fn list_student_notes(
    service: &ContentService,
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

    match storage.list_student_notes(current_user.id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentNoteListResponse { items },
            "获取笔记列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取笔记列表失败: {e}"),
            )),
        ),
    }
}

pub async fn update_student_note(
    service: &ContentService,
    note_id: i64,
    data: UpdateStudentNoteRequest,
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

    if data.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "笔记内容不能为空",
        )));
    }

    let note = match storage.get_student_note_by_id(note_id).await {
        Ok(Some(note)) => note,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NoteNotFound,
                "笔记不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询笔记失败: {e}"),
                )),
            );
        }
    };

    if let Err(response) = ensure_note_owner(&note, &current_user) {
        return Ok(response);
    }

    match storage.update_student_note(note_id, data.content).await {
        Ok(Some(note)) => Ok(HttpResponse::Ok().json(ApiResponse::success(note, "笔记更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NoteNotFound,
            "笔记不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新笔记失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_student_note(
    service: &ContentService,
    note_id: i64,
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

    let note = match storage.get_student_note_by_id(note_id).await {
        Ok(Some(note)) => note,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NoteNotFound,
                "笔记不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询笔记失败: {e}"),
                )),
            );
        }
    };

    if let Err(response) = ensure_note_owner(&note, &current_user) {
        return Ok(response);
    }

    match storage.delete_student_note(note_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("笔记删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NoteNotFound,
            "笔记不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除笔记失败: {e}"),
            )),
        ),
    }
}
