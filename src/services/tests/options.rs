use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestService;
use crate::models::tests::requests::{CreateOptionRequest, UpdateOptionRequest};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_option(
    service: &TestService,
    question_id: i64,
    data: CreateOptionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if data.text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "选项内容不能为空",
        )));
    }

    match storage.get_question_by_id(question_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "题目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    }

    match storage.create_option(question_id, data).await {
        Ok(option) => Ok(HttpResponse::Created().json(ApiResponse::success(option, "选项创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建选项失败: {e}"),
            )),
        ),
    }
}

pub async fn update_option(
    service: &TestService,
    option_id: i64,
    data: UpdateOptionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref text) = data.text
        && text.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "选项内容不能为空",
        )));
    }

    match storage.update_option(option_id, data).await {
        Ok(Some(option)) => Ok(HttpResponse::Ok().json(ApiResponse::success(option, "选项更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::OptionNotFound,
            "选项不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新选项失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_option(
    service: &TestService,
    option_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_option(option_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("选项删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::OptionNotFound,
            "选项不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除选项失败: {e}"),
            )),
        ),
    }
}
