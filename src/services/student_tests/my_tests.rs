use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentTestService, current_user};
use crate::models::tests::responses::{MyTestItem, MyTestsResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_my_tests(
    service: &StudentTestService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    match storage.list_student_assignments(user.id).await {
        Ok(rows) => {
            let items = rows
                .into_iter()
                .map(|(assignment, test)| MyTestItem { assignment, test })
                .collect();

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MyTestsResponse { items },
                "获取我的测验成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取我的测验失败: {e}"),
            )),
        ),
    }
}
