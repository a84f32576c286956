pub mod auth;
pub mod content;
pub mod courses;
pub mod enrollments;
pub mod student_tests;
pub mod teachers;
pub mod tests;
pub mod users;

pub use auth::AuthService;
pub use content::ContentService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use student_tests::StudentTestService;
pub use teachers::TeacherService;
pub use tests::TestService;
pub use users::UserService;
