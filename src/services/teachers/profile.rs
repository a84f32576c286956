use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::middlewares::RequireJWT;
use crate::models::teachers::{
    requests::{CreateTeacherProfileRequest, UpdateTeacherProfileRequest},
    responses::TeacherProfileResponse,
};
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};

// 只有教师角色可以维护教师资料
fn require_teacher(request: &HttpRequest) -> Result<User, HttpResponse> {
    let user = RequireJWT::extract_user_claims(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录"))
    })?;

    if user.role != UserRole::Teacher {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只有教师可以维护教师资料",
        )));
    }

    Ok(user)
}

pub async fn handle_create_profile(
    service: &TeacherService,
    data: CreateTeacherProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match require_teacher(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    if data.full_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "姓名不能为空",
        )));
    }

    if data.experience_years < 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "教龄不能为负数",
        )));
    }

    match storage.get_teacher_profile_by_user_id(current_user.id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::TeacherProfileAlreadyExists,
                "教师资料已存在",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询教师资料失败: {e}"),
                )),
            );
        }
    }

    match storage.create_teacher_profile(current_user.id, data).await {
        Ok(profile) => {
            info!("Teacher profile created: user={}", current_user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                TeacherProfileResponse { profile },
                "教师资料创建成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建教师资料失败: {e}"),
            )),
        ),
    }
}

pub async fn handle_get_my_profile(
    service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match require_teacher(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    match storage.get_teacher_profile_by_user_id(current_user.id).await {
        Ok(Some(profile)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherProfileResponse { profile },
            "获取教师资料成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherProfileNotFound,
            "教师资料不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询教师资料失败: {e}"),
            )),
        ),
    }
}

pub async fn handle_update_profile(
    service: &TeacherService,
    data: UpdateTeacherProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match require_teacher(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    if let Some(full_name) = &data.full_name
        && full_name.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "姓名不能为空",
        )));
    }

    if let Some(years) = data.experience_years
        && years < 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "教龄不能为负数",
        )));
    }

    match storage.update_teacher_profile(current_user.id, data).await {
        Ok(Some(profile)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherProfileResponse { profile },
            "教师资料更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherProfileNotFound,
            "教师资料不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新教师资料失败: {e}"),
            )),
        ),
    }
}
