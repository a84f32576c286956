pub mod history;
pub mod my_tests;
pub mod result;
pub mod retake;
pub mod start;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::tests::requests::SubmitTestRequest;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct StudentTestService {
    storage: Option<Arc<dyn Storage>>,
}

/// 学生接口统一从请求扩展取当前用户
pub(crate) fn current_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user_claims(request).ok_or_else(|| {
        HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录"))
    })
}

impl StudentTestService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 我的测验
    pub async fn my_tests(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        my_tests::handle_my_tests(self, request).await
    }

    // 开始作答
    pub async fn start_test(
        &self,
        test_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        start::handle_start(self, test_id, request).await
    }

    // 交卷
    pub async fn submit_test(
        &self,
        test_id: i64,
        data: SubmitTestRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit(self, test_id, data, request).await
    }

    // 成绩与逐题回顾
    pub async fn test_result(
        &self,
        test_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        result::handle_result(self, test_id, request).await
    }

    // 历次作答
    pub async fn attempt_history(
        &self,
        test_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        history::handle_history(self, test_id, request).await
    }

    // 申请重考
    pub async fn retake_test(
        &self,
        test_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        retake::handle_retake(self, test_id, request).await
    }
}
