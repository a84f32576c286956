use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TestService, load_test};
use crate::models::tests::{requests::UpdateTestRequest, responses::TestResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_test(
    service: &TestService,
    test_id: i64,
    update_data: UpdateTestRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref title) = update_data.title
        && title.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "测验标题不能为空",
        )));
    }

    // 改挂的章节必须属于测验所在课程
    if let Some(chapter_id) = update_data.chapter_id {
        let test = match load_test(&storage, test_id).await {
            Ok(test) => test,
            Err(response) => return Ok(response),
        };

        match storage.get_chapter_by_id(chapter_id).await {
            Ok(Some(chapter)) if chapter.course_id == test.course_id => {}
            Ok(Some(_)) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "章节不属于该课程",
                )));
            }
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ChapterNotFound,
                    "章节不存在",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询章节失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_test(test_id, update_data).await {
        Ok(Some(test)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(TestResponse { test }, "测验更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TestNotFound,
            "测验不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新测验失败: {e}"),
            )),
        ),
    }
}
