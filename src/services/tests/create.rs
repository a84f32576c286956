use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestService;
use crate::models::tests::{requests::CreateTestRequest, responses::TestResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_test(
    service: &TestService,
    test_data: CreateTestRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if test_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "测验标题不能为空",
        )));
    }

    // 课程必须存在
    match storage.get_course_by_id(test_data.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            );
        }
    }

    // 章节（如果指定）必须属于同一课程
    if let Some(chapter_id) = test_data.chapter_id {
        match storage.get_chapter_by_id(chapter_id).await {
            Ok(Some(chapter)) if chapter.course_id == test_data.course_id => {}
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

    match storage.create_test(test_data).await {
        Ok(test) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(TestResponse { test }, "测验创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建测验失败: {e}"),
            )),
        ),
    }
}
