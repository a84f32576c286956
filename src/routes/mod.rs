pub mod auth;

pub mod users;

pub mod courses;

pub mod content;

pub mod notes;

pub mod enrollments;

pub mod tests;

pub mod teachers;

pub use auth::configure_auth_routes;
pub use content::configure_content_routes;
pub use courses::configure_course_routes;
pub use enrollments::configure_enrollment_routes;
pub use notes::configure_note_routes;
pub use teachers::configure_teacher_routes;
pub use tests::configure_test_routes;
pub use users::configure_user_routes;
