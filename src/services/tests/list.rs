use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestService;
use crate::models::tests::requests::{TestListParams, TestListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_tests(
    service: &TestService,
    query: TestListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = TestListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        course_id: query.course_id,
        is_published: query.is_published,
    };

    match storage.list_tests_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取测验列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取测验列表失败: {e}"),
            )),
        ),
    }
}
