pub mod assign;
pub mod assignments;
pub mod create;
pub mod detail;
pub mod list;
pub mod options;
pub mod publish;
pub mod questions;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::tests::requests::{
    AssignCourseRequest, AssignTestRequest, CreateOptionRequest, CreateQuestionRequest,
    CreateTestRequest, TestListParams, UpdateOptionRequest, UpdateQuestionRequest,
    UpdateTestRequest,
};
use crate::models::{ApiResponse, ErrorCode, PaginationQuery};
use crate::storage::Storage;

pub struct TestService {
    storage: Option<Arc<dyn Storage>>,
}

/// 取出测验，不存在时给出 404 响应
pub(crate) async fn load_test(
    storage: &Arc<dyn Storage>,
    test_id: i64,
) -> Result<crate::models::tests::entities::Test, HttpResponse> {
    match storage.get_test_by_id(test_id).await {
        Ok(Some(test)) => Ok(test),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TestNotFound,
            "测验不存在",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询测验失败: {e}"),
            )),
        ),
    }
}

impl TestService {
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

    // 测验列表
    pub async fn list_tests(
        &self,
        query: TestListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_tests(self, query, request).await
    }

    // 创建测验
    pub async fn create_test(
        &self,
        test_data: CreateTestRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_test(self, test_data, request).await
    }

    // 测验详情（含题目与选项）
    pub async fn get_test_detail(
        &self,
        test_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::get_test_detail(self, test_id, request).await
    }

    // 更新测验
    pub async fn update_test(
        &self,
        test_id: i64,
        update_data: UpdateTestRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_test(self, test_id, update_data, request).await
    }

    // 删除测验
    pub async fn delete_test(
        &self,
        test_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_test(self, test_id, request).await
    }

    // 发布 / 取消发布
    pub async fn set_published(
        &self,
        test_id: i64,
        published: bool,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        publish::set_published(self, test_id, published, request).await
    }

    // 题目
    pub async fn create_question(
        &self,
        test_id: i64,
        data: CreateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::create_question(self, test_id, data, request).await
    }

    pub async fn update_question(
        &self,
        question_id: i64,
        data: UpdateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::update_question(self, question_id, data, request).await
    }

    pub async fn delete_question(
        &self,
        question_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::delete_question(self, question_id, request).await
    }

    // 选项
    pub async fn create_option(
        &self,
        question_id: i64,
        data: CreateOptionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        options::create_option(self, question_id, data, request).await
    }

    pub async fn update_option(
        &self,
        option_id: i64,
        data: UpdateOptionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        options::update_option(self, option_id, data, request).await
    }

    pub async fn delete_option(
        &self,
        option_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        options::delete_option(self, option_id, request).await
    }

    // 指派给指定学生
    pub async fn assign_students(
        &self,
        test_id: i64,
        data: AssignTestRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_students(self, test_id, data, request).await
    }

    // 指派给整个课程的在读学生
    pub async fn assign_course(
        &self,
        test_id: i64,
        data: AssignCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_course(self, test_id, data, request).await
    }

    // 某测验的指派列表
    pub async fn list_assignments(
        &self,
        test_id: i64,
        query: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assignments::list_assignments(self, test_id, query, request).await
    }

    // 撤销指派
    pub async fn cancel_assignment(
        &self,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assignments::cancel_assignment(self, assignment_id, request).await
    }
}
