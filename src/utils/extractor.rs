//! 路径参数安全提取器
//!
//! 将路径中的 ID 解析为 i64，格式不合法时直接返回统一的 400 响应，
//! 避免在每个 handler 里重复解析逻辑。

use actix_web::{FromRequest, HttpRequest, ResponseError, dev::Payload, http::StatusCode};
use std::fmt;
use std::future::{Ready, ready};
use std::ops::Deref;

use crate::models::{ApiResponse, ErrorCode};

// 参数解析失败错误，渲染为统一响应结构
#[derive(Debug)]
pub struct PathParamError {
    param: &'static str,
}

impl fmt::Display for PathParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid path parameter: {}", self.param)
    }
}

impl ResponseError for PathParamError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Invalid path parameter: {}", self.param),
        ))
    }
}

fn extract_i64(req: &HttpRequest, param: &'static str) -> Result<i64, PathParamError> {
    req.match_info()
        .get(param)
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|id| *id > 0)
        .ok_or(PathParamError { param })
}

macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        /// 路径参数提取器，保证得到正整数 ID
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl Deref for $name {
            type Target = i64;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl FromRequest for $name {
            type Error = PathParamError;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                ready(extract_i64(req, $param).map($name))
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeUserIdI64, "user_id");
define_safe_i64_extractor!(SafeCourseIdI64, "course_id");
define_safe_i64_extractor!(SafeChapterIdI64, "chapter_id");
define_safe_i64_extractor!(SafeLectureIdI64, "lecture_id");
define_safe_i64_extractor!(SafeNoteIdI64, "note_id");
define_safe_i64_extractor!(SafeTestIdI64, "test_id");
define_safe_i64_extractor!(SafeQuestionIdI64, "question_id");
define_safe_i64_extractor!(SafeOptionIdI64, "option_id");
define_safe_i64_extractor!(SafeAssignmentIdI64, "assignment_id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_positive_id() {
        let req = TestRequest::default()
            .param("id", "42")
            .to_http_request();
        let id = SafeIDI64::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(*id, 42);
    }

    #[actix_web::test]
    async fn test_rejects_non_numeric_and_non_positive() {
        for raw in ["abc", "0", "-5", ""] {
            let req = TestRequest::default().param("id", raw).to_http_request();
            assert!(
                SafeIDI64::from_request(&req, &mut Payload::None)
                    .await
                    .is_err(),
                "should reject {raw:?}"
            );
        }
    }
}
