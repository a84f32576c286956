use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::content::requests::{
    CreateAdminNoteRequest, CreateLectureRequest, UpdateAdminNoteRequest, UpdateLectureRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ContentService;
use crate::utils::{SafeChapterIdI64, SafeLectureIdI64, SafeNoteIdI64};

// 懒加载的全局 ContentService 实例
static CONTENT_SERVICE: Lazy<ContentService> = Lazy::new(ContentService::new_lazy);

// 视频课时
pub async fn create_lecture(
    req: HttpRequest,
    chapter_id: SafeChapterIdI64,
    data: web::Json<CreateLectureRequest>,
) -> ActixResult<HttpResponse> {
    CONTENT_SERVICE
        .create_lecture(chapter_id.0, data.into_inner(), &req)
        .await
}

pub async fn list_lectures(
    req: HttpRequest,
    chapter_id: SafeChapterIdI64,
) -> ActixResult<HttpResponse> {
    CONTENT_SERVICE.list_lectures(chapter_id.0, &req).await
}

pub async fn update_lecture(
    req: HttpRequest,
    lecture_id: SafeLectureIdI64,
    data: web::Json<UpdateLectureRequest>,
) -> ActixResult<HttpResponse> {
    CONTENT_SERVICE
        .update_lecture(lecture_id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_lecture(
    req: HttpRequest,
    lecture_id: SafeLectureIdI64,
) -> ActixResult<HttpResponse> {
    CONTENT_SERVICE.delete_lecture(lecture_id.0, &req).await
}

// 章节讲义
pub async fn create_admin_note(
    req: HttpRequest,
    chapter_id: SafeChapterIdI64,
    data: web::Json<CreateAdminNoteRequest>,
) -> ActixResult<HttpResponse> {
    CONTENT_SERVICE
        .create_admin_note(chapter_id.0, data.into_inner(), &req)
        .await
}

pub async fn list_admin_notes(
    req: HttpRequest,
    chapter_id: SafeChapterIdI64,
) -> ActixResult<HttpResponse> {
    CONTENT_SERVICE.list_admin_notes(chapter_id.0, &req).await
}

pub async fn update_admin_note(
    req: HttpRequest,
    note_id: SafeNoteIdI64,
    data: web::Json<UpdateAdminNoteRequest>,
) -> ActixResult<HttpResponse> {
    CONTENT_SERVICE
        .update_admin_note(note_id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_admin_note(
    req: HttpRequest,
    note_id: SafeNoteIdI64,
) -> ActixResult<HttpResponse> {
    CONTENT_SERVICE.delete_admin_note(note_id.0, &req).await
}

// 配置路由
pub fn configure_content_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/chapters")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{chapter_id}/lectures")
                    // 学生要求在读课程，服务层校验
                    .route(web::get().to(list_lectures))
                    .route(
                        web::post()
                            .to(create_lecture)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/{chapter_id}/admin-notes")
                    .route(web::get().to(list_admin_notes))
                    .route(
                        web::post()
                            .to(create_admin_note)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            ),
    );

    cfg.service(
        web::scope("/api/v1/lectures")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("/{lecture_id}", web::put().to(update_lecture))
                    .route("/{lecture_id}", web::delete().to(delete_lecture)),
            ),
    );

    cfg.service(
        web::scope("/api/v1/admin-notes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("/{note_id}", web::put().to(update_admin_note))
                    .route("/{note_id}", web::delete().to(delete_admin_note)),
            ),
    );
}
