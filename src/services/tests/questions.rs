use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TestService, load_test};
use crate::models::tests::requests::{CreateQuestionRequest, UpdateQuestionRequest};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_question(
    service: &TestService,
    test_id: i64,
    data: CreateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if data.text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "题目内容不能为空",
        )));
    }

    if data.marks <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "题目分值必须大于 0",
        )));
    }

    if data.options.len() < 2 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "每道题至少需要两个选项",
        )));
    }

    if let Err(response) = load_test(&storage, test_id).await {
        return Ok(response);
    }

    match storage.create_question(test_id, data).await {
        Ok(question) => Ok(HttpResponse::Created().json(ApiResponse::success(question, "题目创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建题目失败: {e}"),
            )),
        ),
    }
}

pub async fn update_question(
    service: &TestService,
    question_id: i64,
    data: UpdateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref text) = data.text
        && text.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "题目内容不能为空",
        )));
    }

    if let Some(marks) = data.marks
        && marks <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "题目分值必须大于 0",
        )));
    }

    match storage.update_question(question_id, data).await {
        Ok(Some(question)) => Ok(HttpResponse::Ok().json(ApiResponse::success(question, "题目更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "题目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新题目失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_question(
    service: &TestService,
    question_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_question(question_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("题目删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "题目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除题目失败: {e}"),
            )),
        ),
    }
}
