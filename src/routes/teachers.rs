use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::teachers::requests::{
    CreateTeacherProfileRequest, TeacherListParams, UpdateTeacherProfileRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::TeacherService;
use crate::utils::SafeIDI64;

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn create_profile(
    req: HttpRequest,
    data: web::Json<CreateTeacherProfileRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.create_profile(data.into_inner(), &req).await
}

pub async fn get_my_profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_my_profile(&req).await
}

pub async fn update_profile(
    req: HttpRequest,
    data: web::Json<UpdateTeacherProfileRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.update_profile(data.into_inner(), &req).await
}

pub async fn list_teachers(
    req: HttpRequest,
    query: web::Query<TeacherListParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(query.into_inner(), &req).await
}

pub async fn verify_teacher(req: HttpRequest, profile_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.verify_teacher(profile_id.0, true, &req).await
}

pub async fn unverify_teacher(
    req: HttpRequest,
    profile_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .verify_teacher(profile_id.0, false, &req)
        .await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .wrap(middlewares::RequireJWT)
            // 角色校验在服务层（只有教师能维护自己的资料）
            .service(
                web::resource("/me")
                    .route(web::get().to(get_my_profile))
                    .route(web::post().to(create_profile))
                    .route(web::put().to(update_profile)),
            )
            .service(
                web::resource("").route(
                    web::get()
                        .to(list_teachers)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}/verify").route(
                    web::post()
                        .to(verify_teacher)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}/unverify").route(
                    web::post()
                        .to(unverify_teacher)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            ),
    );
}
