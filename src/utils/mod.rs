pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeAssignmentIdI64, SafeChapterIdI64, SafeCourseIdI64, SafeIDI64, SafeLectureIdI64,
    SafeNoteIdI64, SafeOptionIdI64, SafeQuestionIdI64, SafeTestIdI64, SafeUserIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
