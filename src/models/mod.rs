//! 业务模型定义

pub mod auth;
pub mod common;
pub mod content;
pub mod courses;
pub mod enrollments;
pub mod teachers;
pub mod tests;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

// 程序启动时间，用于统计启动耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

// 业务错误码，随 ApiResponse.code 返回给前端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    ValidationFailed = 1001,
    RateLimitExceeded = 1002,
    Unauthorized = 1100,
    AuthFailed = 1101,
    TokenExpired = 1102,
    Forbidden = 1200,
    ProfileIncomplete = 1201,
    NotFound = 1300,
    InternalServerError = 1500,

    // 用户 2xxx
    UserNotFound = 2001,
    UserEmailInvalid = 2002,
    UserEmailAlreadyExists = 2003,
    RegisterFailed = 2004,
    UserNameInvalid = 2005,
    UserPasswordInvalid = 2006,

    // 课程与内容 3xxx
    CourseNotFound = 3001,
    CourseAlreadyExists = 3002,
    CourseArchived = 3003,
    ChapterNotFound = 3004,
    LectureNotFound = 3005,
    NoteNotFound = 3006,

    // 选课 4xxx
    EnrollmentNotFound = 4001,
    AlreadyEnrolled = 4002,
    EnrollmentLimitReached = 4003,
    NotEnrolled = 4004,

    // 测验 5xxx
    TestNotFound = 5001,
    TestNotPublished = 5002,
    TestInactive = 5003,
    QuestionNotFound = 5004,
    OptionNotFound = 5005,
    AssignmentNotFound = 5101,
    TestNotAssigned = 5102,
    AttemptNotStartable = 5103,
    AttemptAlreadyCompleted = 5104,
    AttemptOverdue = 5105,
    RetakeNotAllowed = 5106,

    // 教师资料 6xxx
    TeacherProfileNotFound = 6001,
    TeacherProfileAlreadyExists = 6002,
}
