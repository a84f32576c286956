pub mod admin_notes;
pub mod lectures;
pub mod student_notes;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::content::requests::{
    CreateAdminNoteRequest, CreateLectureRequest, CreateStudentNoteRequest,
    UpdateAdminNoteRequest, UpdateLectureRequest, UpdateStudentNoteRequest,
};
use crate::models::courses::entities::Chapter;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct ContentService {
    storage: Option<Arc<dyn Storage>>,
}

/// 取出章节并校验学生对所属课程的访问权
pub(crate) async fn load_chapter_checked(
    storage: &Arc<dyn Storage>,
    user: &User,
    chapter_id: i64,
) -> Result<Chapter, HttpResponse> {
    let chapter = match storage.get_chapter_by_id(chapter_id).await {
        Ok(Some(chapter)) => chapter,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ChapterNotFound,
                "章节不存在",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询章节失败: {e}"),
                )),
            );
        }
    };

    crate::services::courses::ensure_course_access(storage, user, chapter.course_id).await?;

    Ok(chapter)
}

impl ContentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 视频课时
    pub async fn create_lecture(
        &self,
        chapter_id: i64,
        data: CreateLectureRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lectures::create_lecture(self, chapter_id, data, request).await
    }

    pub async fn list_lectures(
        &self,
        chapter_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lectures::list_lectures(self, chapter_id, request).await
    }

    pub async fn update_lecture(
        &self,
        lecture_id: i64,
        data: UpdateLectureRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lectures::update_lecture(self, lecture_id, data, request).await
    }

    pub async fn delete_lecture(
        &self,
        lecture_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lectures::delete_lecture(self, lecture_id, request).await
    }

    // 章节讲义
    pub async fn create_admin_note(
        &self,
        chapter_id: i64,
        data: CreateAdminNoteRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        admin_notes::create_admin_note(self, chapter_id, data, request).await
    }

    pub async fn list_admin_notes(
        &self,
        chapter_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        admin_notes::list_admin_notes(self, chapter_id, request).await
    }

    pub async fn update_admin_note(
        &self,
        note_id: i64,
        data: UpdateAdminNoteRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        admin_notes::update_admin_note(self, note_id, data, request).await
    }

    pub async fn delete_admin_note(
        &self,
        note_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        admin_notes::delete_admin_note(self, note_id, request).await
    }

    // 学生笔记
    pub async fn create_student_note(
        &self,
        data: CreateStudentNoteRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student_notes::create_student_note(self, data, request).await
    }

    pub async fn list_student_notes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        student_notes::list_student_notes(self, request).await
    }

    pub async fn update_student_note(
        &self,
        note_id: i64,
        data: UpdateStudentNoteRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student_notes::update_student_note(self, note_id, data, request).await
    }

    pub async fn delete_student_note(
        &self,
        note_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        student_notes::delete_student_note(self, note_id, request).await
    }
}
