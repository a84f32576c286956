use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::teachers::responses::TeacherProfileResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_verify(
    service: &TeacherService,
    profile_id: i64,
    verified: bool,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.set_teacher_verified(profile_id, verified).await {
        Ok(Some(profile)) => {
            info!("Teacher profile {} verified={}", profile_id, verified);
            let message = if verified {
                "教师资质审核通过"
            } else {
                "教师资质审核已撤销"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                TeacherProfileResponse { profile },
                message,
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherProfileNotFound,
            "教师资料不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("审核教师资料失败: {e}"),
            )),
        ),
    }
}
