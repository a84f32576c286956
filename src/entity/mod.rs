//! SeaORM 数据库实体定义

pub mod admin_notes;
pub mod answer_options;
pub mod chapters;
pub mod courses;
pub mod enrollments;
pub mod prelude;
pub mod questions;
pub mod student_answers;
pub mod student_notes;
pub mod teacher_profiles;
pub mod test_assignments;
pub mod tests;
pub mod users;
pub mod video_lectures;
