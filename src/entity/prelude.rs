//! 预导入模块，方便使用

pub use super::admin_notes::{
    ActiveModel as AdminNoteActiveModel, Entity as AdminNotes, Model as AdminNoteModel,
};
pub use super::answer_options::{
    ActiveModel as AnswerOptionActiveModel, Entity as AnswerOptions, Model as AnswerOptionModel,
};
pub use super::chapters::{
    ActiveModel as ChapterActiveModel, Entity as Chapters, Model as ChapterModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::student_answers::{
    ActiveModel as StudentAnswerActiveModel, Entity as StudentAnswers, Model as StudentAnswerModel,
};
pub use super::student_notes::{
    ActiveModel as StudentNoteActiveModel, Entity as StudentNotes, Model as StudentNoteModel,
};
pub use super::teacher_profiles::{
    ActiveModel as TeacherProfileActiveModel, Entity as TeacherProfiles,
    Model as TeacherProfileModel,
};
pub use super::test_assignments::{
    ActiveModel as TestAssignmentActiveModel, Entity as TestAssignments,
    Model as TestAssignmentModel,
};
pub use super::tests::{ActiveModel as TestActiveModel, Entity as Tests, Model as TestModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
pub use super::video_lectures::{
    ActiveModel as VideoLectureActiveModel, Entity as VideoLectures, Model as VideoLectureModel,
};
