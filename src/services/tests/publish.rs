use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestService;
use crate::models::tests::responses::TestResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn set_published(
    service: &TestService,
    test_id: i64,
    published: bool,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 没有题目的测验不允许发布
    if published {
        match storage.list_questions_with_options(test_id).await {
            Ok(questions) if questions.is_empty() => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "测验还没有题目，不能发布",
                )));
            }
            Ok(_) => {}
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询题目失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.set_test_published(test_id, published).await {
        Ok(Some(test)) => {
            let message = if published {
                "测验已发布"
            } else {
                "测验已取消发布"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(TestResponse { test }, message)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TestNotFound,
            "测验不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新测验发布状态失败: {e}"),
            )),
        ),
    }
}
