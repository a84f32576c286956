use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::content::requests::{CreateStudentNoteRequest, UpdateStudentNoteRequest};
use crate::models::users::entities::UserRole;
use crate::services::ContentService;
use crate::utils::SafeNoteIdI64;

// 学生笔记复用 ContentService
static NOTE_SERVICE: Lazy<ContentService> = Lazy::new(ContentService::new_lazy);

pub async fn create_note(
    req: HttpRequest,
    data: web::Json<CreateStudentNoteRequest>,
) -> ActixResult<HttpResponse> {
    NOTE_SERVICE
        .create_student_note(data.into_inner(), &req)
        .await
}

pub async fn list_notes(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTE_SERVICE.list_student_notes(&req).await
}

pub async fn update_note(
    req: HttpRequest,
    note_id: SafeNoteIdI64,
    data: web::Json<UpdateStudentNoteRequest>,
) -> ActixResult<HttpResponse> {
    NOTE_SERVICE
        .update_student_note(note_id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_note(req: HttpRequest, note_id: SafeNoteIdI64) -> ActixResult<HttpResponse> {
    NOTE_SERVICE.delete_student_note(note_id.0, &req).await
}

// 配置路由
pub fn configure_note_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route("", web::post().to(create_note))
                    .route("", web::get().to(list_notes))
                    .route("/{note_id}", web::put().to(update_note))
                    .route("/{note_id}", web::delete().to(delete_note)),
            ),
    );
}
