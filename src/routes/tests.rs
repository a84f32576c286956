use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::common::PaginationQuery;
use crate::models::tests::requests::{
    AssignCourseRequest, AssignTestRequest, CreateOptionRequest, CreateQuestionRequest,
    CreateTestRequest, SubmitTestRequest, TestListParams, UpdateOptionRequest,
    UpdateQuestionRequest, UpdateTestRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{StudentTestService, TestService};
use crate::utils::{SafeAssignmentIdI64, SafeOptionIdI64, SafeQuestionIdI64, SafeTestIdI64};

// 懒加载的全局服务实例
static TEST_SERVICE: Lazy<TestService> = Lazy::new(TestService::new_lazy);
static STUDENT_TEST_SERVICE: Lazy<StudentTestService> = Lazy::new(StudentTestService::new_lazy);

// 管理端处理程序
pub async fn list_tests(
    req: HttpRequest,
    query: web::Query<TestListParams>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE.list_tests(query.into_inner(), &req).await
}

pub async fn create_test(
    req: HttpRequest,
    test_data: web::Json<CreateTestRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE.create_test(test_data.into_inner(), &req).await
}

pub async fn get_test_detail(
    req: HttpRequest,
    test_id: SafeTestIdI64,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE.get_test_detail(test_id.0, &req).await
}

pub async fn update_test(
    req: HttpRequest,
    test_id: SafeTestIdI64,
    update_data: web::Json<UpdateTestRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .update_test(test_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_test(req: HttpRequest, test_id: SafeTestIdI64) -> ActixResult<HttpResponse> {
    TEST_SERVICE.delete_test(test_id.0, &req).await
}

pub async fn publish_test(req: HttpRequest, test_id: SafeTestIdI64) -> ActixResult<HttpResponse> {
    TEST_SERVICE.set_published(test_id.0, true, &req).await
}

pub async fn unpublish_test(req: HttpRequest, test_id: SafeTestIdI64) -> ActixResult<HttpResponse> {
    TEST_SERVICE.set_published(test_id.0, false, &req).await
}

pub async fn create_question(
    req: HttpRequest,
    test_id: SafeTestIdI64,
    data: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .create_question(test_id.0, data.into_inner(), &req)
        .await
}

pub async fn update_question(
    req: HttpRequest,
    question_id: SafeQuestionIdI64,
    data: web::Json<UpdateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .update_question(question_id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_question(
    req: HttpRequest,
    question_id: SafeQuestionIdI64,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE.delete_question(question_id.0, &req).await
}

pub async fn create_option(
    req: HttpRequest,
    question_id: SafeQuestionIdI64,
    data: web::Json<CreateOptionRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .create_option(question_id.0, data.into_inner(), &req)
        .await
}

pub async fn update_option(
    req: HttpRequest,
    option_id: SafeOptionIdI64,
    data: web::Json<UpdateOptionRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .update_option(option_id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_option(
    req: HttpRequest,
    option_id: SafeOptionIdI64,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE.delete_option(option_id.0, &req).await
}

pub async fn assign_students(
    req: HttpRequest,
    test_id: SafeTestIdI64,
    data: web::Json<AssignTestRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .assign_students(test_id.0, data.into_inner(), &req)
        .await
}

pub async fn assign_course(
    req: HttpRequest,
    test_id: SafeTestIdI64,
    data: web::Json<AssignCourseRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .assign_course(test_id.0, data.into_inner(), &req)
        .await
}

pub async fn list_assignments(
    req: HttpRequest,
    test_id: SafeTestIdI64,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .list_assignments(test_id.0, query.into_inner(), &req)
        .await
}

pub async fn cancel_assignment(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE.cancel_assignment(assignment_id.0, &req).await
}

// 学生端处理程序
pub async fn my_tests(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_TEST_SERVICE.my_tests(&req).await
}

pub async fn start_test(req: HttpRequest, test_id: SafeTestIdI64) -> ActixResult<HttpResponse> {
    STUDENT_TEST_SERVICE.start_test(test_id.0, &req).await
}

pub async fn submit_test(
    req: HttpRequest,
    test_id: SafeTestIdI64,
    data: web::Json<SubmitTestRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_TEST_SERVICE
        .submit_test(test_id.0, data.into_inner(), &req)
        .await
}

pub async fn test_result(req: HttpRequest, test_id: SafeTestIdI64) -> ActixResult<HttpResponse> {
    STUDENT_TEST_SERVICE.test_result(test_id.0, &req).await
}

pub async fn attempt_history(
    req: HttpRequest,
    test_id: SafeTestIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_TEST_SERVICE.attempt_history(test_id.0, &req).await
}

pub async fn retake_test(req: HttpRequest, test_id: SafeTestIdI64) -> ActixResult<HttpResponse> {
    STUDENT_TEST_SERVICE.retake_test(test_id.0, &req).await
}

// 配置路由
pub fn configure_test_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tests")
            .wrap(middlewares::RequireJWT)
            // 字面量路径要先于 {test_id} 注册
            .service(
                web::resource("/my").route(
                    web::get()
                        .to(my_tests)
                        .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                ),
            )
            .service(
                web::resource("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route(web::get().to(list_tests))
                    .route(web::post().to(create_test)),
            )
            .service(
                web::resource("/{test_id}")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route(web::get().to(get_test_detail))
                    .route(web::put().to(update_test))
                    .route(web::delete().to(delete_test)),
            )
            .service(
                web::scope("/{test_id}")
                    // 管理端
                    .service(web::resource("/publish").route(
                        web::post()
                            .to(publish_test)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ))
                    .service(web::resource("/unpublish").route(
                        web::post()
                            .to(unpublish_test)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ))
                    .service(web::resource("/questions").route(
                        web::post()
                            .to(create_question)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ))
                    .service(web::resource("/assign").route(
                        web::post()
                            .to(assign_students)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ))
                    .service(web::resource("/assign-course").route(
                        web::post()
                            .to(assign_course)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ))
                    .service(web::resource("/assignments").route(
                        web::get()
                            .to(list_assignments)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ))
                    // 学生端
                    .service(web::resource("/start").route(
                        web::post()
                            .to(start_test)
                            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                    ))
                    .service(
                        web::resource("/submit")
                            .wrap(middlewares::RateLimit::submit_test())
                            .route(
                                web::post().to(submit_test).wrap(
                                    middlewares::RequireRole::new_any(UserRole::student_roles()),
                                ),
                            ),
                    )
                    .service(web::resource("/result").route(
                        web::get()
                            .to(test_result)
                            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                    ))
                    .service(web::resource("/history").route(
                        web::get()
                            .to(attempt_history)
                            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                    ))
                    .service(web::resource("/retake").route(
                        web::post()
                            .to(retake_test)
                            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                    )),
            ),
    );

    cfg.service(
        web::scope("/api/v1/questions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("/{question_id}", web::put().to(update_question))
                    .route("/{question_id}", web::delete().to(delete_question))
                    .route("/{question_id}/options", web::post().to(create_option)),
            ),
    );

    cfg.service(
        web::scope("/api/v1/options")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("/{option_id}", web::put().to(update_option))
                    .route("/{option_id}", web::delete().to(delete_option)),
            ),
    );

    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("/{assignment_id}/cancel", web::post().to(cancel_assignment)),
            ),
    );
}
