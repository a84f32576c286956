use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::courses::requests::{CourseListParams, CourseListQuery};
use crate::models::courses::responses::CourseListResponse;
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode, PaginationInfo};

pub async fn list_courses(
    service: &CourseService,
    query: CourseListParams,
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

    // 学生只能看到自己报名中的课程
    if current_user.role == UserRole::Student {
        return match storage.list_student_enrollments(current_user.id).await {
            Ok(rows) => {
                let items: Vec<_> = rows
                    .into_iter()
                    .filter(|(enrollment, _)| enrollment.status == EnrollmentStatus::Active)
                    .map(|(_, course)| course)
                    .collect();
                let total = items.len() as i64;

                let response = CourseListResponse {
                    items,
                    pagination: PaginationInfo {
                        page: 1,
                        page_size: total.max(1),
                        total,
                        total_pages: 1,
                    },
                };

                Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取课程列表成功")))
            }
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("获取课程列表失败: {e}"),
                )),
            ),
        };
    }

    let list_query = CourseListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        enrollable_only: false,
        include_archived: query.include_archived,
        search: query.search,
    };

    match storage.list_courses_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取课程列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取课程列表失败: {e}"),
            )),
        ),
    }
}
