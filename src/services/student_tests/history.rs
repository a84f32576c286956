use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentTestService, current_user};
use crate::models::tests::responses::AttemptHistoryResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_history(
    service: &StudentTestService,
    test_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    match storage.list_attempts(user.id, test_id).await {
        Ok(attempts) => {
            // 最新的尝试排在最前
            let items = attempts.into_iter().rev().collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AttemptHistoryResponse { items },
                "获取答题历史成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询答题历史失败: {e}"),
            )),
        ),
    }
}
