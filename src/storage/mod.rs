use std::sync::Arc;

use crate::models::{
    content::{
        entities::{AdminNote, StudentNote, VideoLecture},
        requests::{
            CreateAdminNoteRequest, CreateLectureRequest, CreateStudentNoteRequest,
            UpdateAdminNoteRequest, UpdateLectureRequest,
        },
    },
    courses::{
        entities::{Chapter, Course},
        requests::{CourseListQuery, CreateChapterRequest, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::entities::{Enrollment, EnrollmentStatus},
    teachers::{
        entities::TeacherProfile,
        requests::{CreateTeacherProfileRequest, TeacherListQuery, UpdateTeacherProfileRequest},
        responses::TeacherListResponse,
    },
    tests::{
        entities::{AnswerOption, Question, StudentAnswer, Test, TestAssignment},
        requests::{
            AnswerItem, AssignmentListQuery, CreateOptionRequest, CreateQuestionRequest,
            CreateTestRequest, TestListQuery, UpdateOptionRequest, UpdateQuestionRequest,
            UpdateTestRequest,
        },
        responses::{
            AssignmentListResponse, QuestionWithOptions, SubmitResultResponse, TestListResponse,
        },
    },
    users::{
        entities::{User, UserProfile},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（密码应已哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息（管理员）
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 用户总数（启动时判断是否需要种子管理员）
    async fn count_users(&self) -> Result<u64>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 用户更新自己的资料，并重算档案完整标记
    async fn update_user_profile(
        &self,
        id: i64,
        name: Option<String>,
        password_hash: Option<String>,
        profile: Option<UserProfile>,
    ) -> Result<Option<User>>;

    /// 教师资料方法
    async fn create_teacher_profile(
        &self,
        user_id: i64,
        req: CreateTeacherProfileRequest,
    ) -> Result<TeacherProfile>;
    async fn get_teacher_profile_by_user_id(&self, user_id: i64) -> Result<Option<TeacherProfile>>;
    async fn update_teacher_profile(
        &self,
        user_id: i64,
        update: UpdateTeacherProfileRequest,
    ) -> Result<Option<TeacherProfile>>;
    // 管理员核验教师资料
    async fn set_teacher_verified(&self, profile_id: i64, verified: bool)
    -> Result<Option<TeacherProfile>>;
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;

    /// 课程管理方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn get_course_by_title(&self, title: &str) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 归档/恢复课程
    async fn set_course_archived(&self, id: i64, archived: bool) -> Result<Option<Course>>;

    /// 章节方法
    async fn create_chapter(&self, course_id: i64, req: CreateChapterRequest) -> Result<Chapter>;
    async fn get_chapter_by_id(&self, id: i64) -> Result<Option<Chapter>>;
    // 按 sort_order 排序
    async fn list_chapters(&self, course_id: i64) -> Result<Vec<Chapter>>;

    /// 章节内容方法
    async fn create_lecture(&self, chapter_id: i64, req: CreateLectureRequest)
    -> Result<VideoLecture>;
    async fn list_lectures(&self, chapter_id: i64) -> Result<Vec<VideoLecture>>;
    async fn update_lecture(
        &self,
        id: i64,
        update: UpdateLectureRequest,
    ) -> Result<Option<VideoLecture>>;
    async fn delete_lecture(&self, id: i64) -> Result<bool>;

    async fn create_admin_note(
        &self,
        chapter_id: i64,
        req: CreateAdminNoteRequest,
    ) -> Result<AdminNote>;
    async fn list_admin_notes(&self, chapter_id: i64) -> Result<Vec<AdminNote>>;
    async fn update_admin_note(
        &self,
        id: i64,
        update: UpdateAdminNoteRequest,
    ) -> Result<Option<AdminNote>>;
    async fn delete_admin_note(&self, id: i64) -> Result<bool>;

    async fn create_student_note(
        &self,
        student_id: i64,
        req: CreateStudentNoteRequest,
    ) -> Result<StudentNote>;
    async fn get_student_note_by_id(&self, id: i64) -> Result<Option<StudentNote>>;
    async fn list_student_notes(&self, student_id: i64) -> Result<Vec<StudentNote>>;
    async fn update_student_note(&self, id: i64, content: String) -> Result<Option<StudentNote>>;
    async fn delete_student_note(&self, id: i64) -> Result<bool>;

    /// 选课方法
    async fn create_enrollment(&self, student_id: i64, course_id: i64) -> Result<Enrollment>;
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    async fn get_enrollment(&self, student_id: i64, course_id: i64) -> Result<Option<Enrollment>>;
    // 在读选课数量，用于并发选课上限
    async fn count_active_enrollments(&self, student_id: i64) -> Result<u64>;
    async fn list_student_enrollments(&self, student_id: i64)
    -> Result<Vec<(Enrollment, Course)>>;
    // 退课/结课
    async fn set_enrollment_status(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>>;
    // 某课程全部在读学生，用于整课分配测验
    async fn list_course_active_student_ids(&self, course_id: i64) -> Result<Vec<i64>>;

    /// 测验管理方法
    async fn create_test(&self, test: CreateTestRequest) -> Result<Test>;
    async fn get_test_by_id(&self, id: i64) -> Result<Option<Test>>;
    async fn list_tests_with_pagination(&self, query: TestListQuery) -> Result<TestListResponse>;
    async fn update_test(&self, id: i64, update: UpdateTestRequest) -> Result<Option<Test>>;
    async fn delete_test(&self, id: i64) -> Result<bool>;
    // 发布/下架
    async fn set_test_published(&self, id: i64, published: bool) -> Result<Option<Test>>;

    /// 题目与选项方法
    // 创建题目（可附带选项），并重算测验总分
    async fn create_question(
        &self,
        test_id: i64,
        req: CreateQuestionRequest,
    ) -> Result<QuestionWithOptions>;
    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>>;
    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>>;
    async fn delete_question(&self, id: i64) -> Result<bool>;
    async fn create_option(&self, question_id: i64, req: CreateOptionRequest)
    -> Result<AnswerOption>;
    async fn update_option(
        &self,
        id: i64,
        update: UpdateOptionRequest,
    ) -> Result<Option<AnswerOption>>;
    async fn delete_option(&self, id: i64) -> Result<bool>;
    // 测验全部题目及选项，按 ID 排序
    async fn list_questions_with_options(&self, test_id: i64) -> Result<Vec<QuestionWithOptions>>;

    /// 测验分配与作答方法
    // 批量分配，已有未取消尝试的学生跳过；返回 (新建数, 跳过数)
    async fn create_assignments(
        &self,
        test_id: i64,
        student_ids: &[i64],
        due_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<(u64, u64)>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<TestAssignment>>;
    // 学生对某测验的最新一次尝试
    async fn get_latest_assignment(
        &self,
        student_id: i64,
        test_id: i64,
    ) -> Result<Option<TestAssignment>>;
    async fn list_student_assignments(
        &self,
        student_id: i64,
    ) -> Result<Vec<(TestAssignment, Test)>>;
    async fn list_test_assignments(
        &self,
        test_id: i64,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    async fn cancel_assignment(&self, id: i64) -> Result<Option<TestAssignment>>;
    // 进入作答（assigned -> started）
    async fn start_assignment(&self, id: i64) -> Result<Option<TestAssignment>>;
    // 交卷并判分；重复提交幂等，返回首次判分结果
    async fn submit_assignment(
        &self,
        assignment_id: i64,
        answers: &[AnswerItem],
    ) -> Result<SubmitResultResponse>;
    async fn get_assignment_answers(&self, assignment_id: i64) -> Result<Vec<StudentAnswer>>;
    // 学生对某测验的全部尝试，按 attempt_number 排序
    async fn list_attempts(&self, student_id: i64, test_id: i64) -> Result<Vec<TestAssignment>>;
    // 重考：新建 attempt_number + 1 的尝试
    async fn create_retake(
        &self,
        student_id: i64,
        test_id: i64,
        due_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<TestAssignment>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
