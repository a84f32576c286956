use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TestService, load_test};
use crate::models::tests::responses::TestDetailResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_test_detail(
    service: &TestService,
    test_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let test = match load_test(&storage, test_id).await {
        Ok(test) => test,
        Err(response) => return Ok(response),
    };

    match storage.list_questions_with_options(test_id).await {
        Ok(questions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TestDetailResponse { test, questions },
            "获取测验详情成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取测验详情失败: {e}"),
            )),
        ),
    }
}
