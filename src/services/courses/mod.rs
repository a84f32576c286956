pub mod archive;
pub mod chapters;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::requests::{
    CourseListParams, CreateChapterRequest, CreateCourseRequest, UpdateCourseRequest,
};
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

/// 学生必须持有该课程的进行中报名才能访问课程内容；教师和管理员不受限
pub(crate) async fn ensure_course_access(
    storage: &Arc<dyn Storage>,
    user: &User,
    course_id: i64,
) -> Result<(), HttpResponse> {
    if user.role != UserRole::Student {
        return Ok(());
    }

    match storage.get_enrollment(user.id, course_id).await {
        Ok(Some(enrollment)) if enrollment.status == EnrollmentStatus::Active => Ok(()),
        Ok(_) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::NotEnrolled,
            "未报名该课程",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询报名记录失败: {e}"),
            )),
        ),
    }
}

impl CourseService {
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

    // 课程列表（学生只看到自己报名的课程）
    pub async fn list_courses(
        &self,
        query: CourseListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, query, request).await
    }

    // 创建课程
    pub async fn create_course(
        &self,
        course_data: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, course_data, request).await
    }

    // 课程详情
    pub async fn get_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_course(self, course_id, request).await
    }

    // 更新课程
    pub async fn update_course(
        &self,
        course_id: i64,
        update_data: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, course_id, update_data, request).await
    }

    // 删除课程
    pub async fn delete_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, course_id, request).await
    }

    // 归档 / 取消归档
    pub async fn set_archived(
        &self,
        course_id: i64,
        archived: bool,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        archive::set_archived(self, course_id, archived, request).await
    }

    // 创建章节
    pub async fn create_chapter(
        &self,
        course_id: i64,
        chapter_data: CreateChapterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        chapters::create_chapter(self, course_id, chapter_data, request).await
    }

    // 课程章节列表
    pub async fn list_chapters(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        chapters::list_chapters(self, course_id, request).await
    }
}
