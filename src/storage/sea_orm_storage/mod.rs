//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod content;
mod courses;
mod enrollments;
mod teachers;
mod tests;
mod users;

use crate::config::AppConfig;
use crate::errors::{LmsError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LmsError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LmsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LmsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn update_user_profile(
        &self,
        id: i64,
        name: Option<String>,
        password_hash: Option<String>,
        profile: Option<UserProfile>,
    ) -> Result<Option<User>> {
        self.update_user_profile_impl(id, name, password_hash, profile)
            .await
    }

    // 教师资料模块
    async fn create_teacher_profile(
        &self,
        user_id: i64,
        req: CreateTeacherProfileRequest,
    ) -> Result<TeacherProfile> {
        self.create_teacher_profile_impl(user_id, req).await
    }

    async fn get_teacher_profile_by_user_id(&self, user_id: i64) -> Result<Option<TeacherProfile>> {
        self.get_teacher_profile_by_user_id_impl(user_id).await
    }

    async fn update_teacher_profile(
        &self,
        user_id: i64,
        update: UpdateTeacherProfileRequest,
    ) -> Result<Option<TeacherProfile>> {
        self.update_teacher_profile_impl(user_id, update).await
    }

    async fn set_teacher_verified(
        &self,
        profile_id: i64,
        verified: bool,
    ) -> Result<Option<TeacherProfile>> {
        self.set_teacher_verified_impl(profile_id, verified).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_title(&self, title: &str) -> Result<Option<Course>> {
        self.get_course_by_title_impl(title).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn set_course_archived(&self, id: i64, archived: bool) -> Result<Option<Course>> {
        self.set_course_archived_impl(id, archived).await
    }

    // 章节模块
    async fn create_chapter(&self, course_id: i64, req: CreateChapterRequest) -> Result<Chapter> {
        self.create_chapter_impl(course_id, req).await
    }

    async fn get_chapter_by_id(&self, id: i64) -> Result<Option<Chapter>> {
        self.get_chapter_by_id_impl(id).await
    }

    async fn list_chapters(&self, course_id: i64) -> Result<Vec<Chapter>> {
        self.list_chapters_impl(course_id).await
    }

    // 内容模块
    async fn create_lecture(
        &self,
        chapter_id: i64,
        req: CreateLectureRequest,
    ) -> Result<VideoLecture> {
        self.create_lecture_impl(chapter_id, req).await
    }

    async fn list_lectures(&self, chapter_id: i64) -> Result<Vec<VideoLecture>> {
        self.list_lectures_impl(chapter_id).await
    }

    async fn update_lecture(
        &self,
        id: i64,
        update: UpdateLectureRequest,
    ) -> Result<Option<VideoLecture>> {
        self.update_lecture_impl(id, update).await
    }

    async fn delete_lecture(&self, id: i64) -> Result<bool> {
        self.delete_lecture_impl(id).await
    }

    async fn create_admin_note(
        &self,
        chapter_id: i64,
        req: CreateAdminNoteRequest,
    ) -> Result<AdminNote> {
        self.create_admin_note_impl(chapter_id, req).await
    }

    async fn list_admin_notes(&self, chapter_id: i64) -> Result<Vec<AdminNote>> {
        self.list_admin_notes_impl(chapter_id).await
    }

    async fn update_admin_note(
        &self,
        id: i64,
        update: UpdateAdminNoteRequest,
    ) -> Result<Option<AdminNote>> {
        self.update_admin_note_impl(id, update).await
    }

    async fn delete_admin_note(&self, id: i64) -> Result<bool> {
        self.delete_admin_note_impl(id).await
    }

    async fn create_student_note(
        &self,
        student_id: i64,
        req: CreateStudentNoteRequest,
    ) -> Result<StudentNote> {
        self.create_student_note_impl(student_id, req).await
    }

    async fn get_student_note_by_id(&self, id: i64) -> Result<Option<StudentNote>> {
        self.get_student_note_by_id_impl(id).await
    }

    async fn list_student_notes(&self, student_id: i64) -> Result<Vec<StudentNote>> {
        self.list_student_notes_impl(student_id).await
    }

    async fn update_student_note(&self, id: i64, content: String) -> Result<Option<StudentNote>> {
        self.update_student_note_impl(id, content).await
    }

    async fn delete_student_note(&self, id: i64) -> Result<bool> {
        self.delete_student_note_impl(id).await
    }

    // 选课模块
    async fn create_enrollment(&self, student_id: i64, course_id: i64) -> Result<Enrollment> {
        self.create_enrollment_impl(student_id, course_id).await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn get_enrollment(&self, student_id: i64, course_id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(student_id, course_id).await
    }

    async fn count_active_enrollments(&self, student_id: i64) -> Result<u64> {
        self.count_active_enrollments_impl(student_id).await
    }

    async fn list_student_enrollments(
        &self,
        student_id: i64,
    ) -> Result<Vec<(Enrollment, Course)>> {
        self.list_student_enrollments_impl(student_id).await
    }

    async fn set_enrollment_status(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>> {
        self.set_enrollment_status_impl(id, status).await
    }

    async fn list_course_active_student_ids(&self, course_id: i64) -> Result<Vec<i64>> {
        self.list_course_active_student_ids_impl(course_id).await
    }

    // 测验模块
    async fn create_test(&self, test: CreateTestRequest) -> Result<Test> {
        self.create_test_impl(test).await
    }

    async fn get_test_by_id(&self, id: i64) -> Result<Option<Test>> {
        self.get_test_by_id_impl(id).await
    }

    async fn list_tests_with_pagination(&self, query: TestListQuery) -> Result<TestListResponse> {
        self.list_tests_with_pagination_impl(query).await
    }

    async fn update_test(&self, id: i64, update: UpdateTestRequest) -> Result<Option<Test>> {
        self.update_test_impl(id, update).await
    }

    async fn delete_test(&self, id: i64) -> Result<bool> {
        self.delete_test_impl(id).await
    }

    async fn set_test_published(&self, id: i64, published: bool) -> Result<Option<Test>> {
        self.set_test_published_impl(id, published).await
    }

    // 题目与选项模块
    async fn create_question(
        &self,
        test_id: i64,
        req: CreateQuestionRequest,
    ) -> Result<QuestionWithOptions> {
        self.create_question_impl(test_id, req).await
    }

    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(id).await
    }

    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        self.update_question_impl(id, update).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.delete_question_impl(id).await
    }

    async fn create_option(
        &self,
        question_id: i64,
        req: CreateOptionRequest,
    ) -> Result<AnswerOption> {
        self.create_option_impl(question_id, req).await
    }

    async fn update_option(
        &self,
        id: i64,
        update: UpdateOptionRequest,
    ) -> Result<Option<AnswerOption>> {
        self.update_option_impl(id, update).await
    }

    async fn delete_option(&self, id: i64) -> Result<bool> {
        self.delete_option_impl(id).await
    }

    async fn list_questions_with_options(&self, test_id: i64) -> Result<Vec<QuestionWithOptions>> {
        self.list_questions_with_options_impl(test_id).await
    }

    // 分配与作答模块
    async fn create_assignments(
        &self,
        test_id: i64,
        student_ids: &[i64],
        due_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<(u64, u64)> {
        self.create_assignments_impl(test_id, student_ids, due_at)
            .await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<TestAssignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn get_latest_assignment(
        &self,
        student_id: i64,
        test_id: i64,
    ) -> Result<Option<TestAssignment>> {
        self.get_latest_assignment_impl(student_id, test_id).await
    }

    async fn list_student_assignments(
        &self,
        student_id: i64,
    ) -> Result<Vec<(TestAssignment, Test)>> {
        self.list_student_assignments_impl(student_id).await
    }

    async fn list_test_assignments(
        &self,
        test_id: i64,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_test_assignments_impl(test_id, query).await
    }

    async fn cancel_assignment(&self, id: i64) -> Result<Option<TestAssignment>> {
        self.cancel_assignment_impl(id).await
    }

    async fn start_assignment(&self, id: i64) -> Result<Option<TestAssignment>> {
        self.start_assignment_impl(id).await
    }

    async fn submit_assignment(
        &self,
        assignment_id: i64,
        answers: &[AnswerItem],
    ) -> Result<SubmitResultResponse> {
        self.submit_assignment_impl(assignment_id, answers).await
    }

    async fn get_assignment_answers(&self, assignment_id: i64) -> Result<Vec<StudentAnswer>> {
        self.get_assignment_answers_impl(assignment_id).await
    }

    async fn list_attempts(&self, student_id: i64, test_id: i64) -> Result<Vec<TestAssignment>> {
        self.list_attempts_impl(student_id, test_id).await
    }

    async fn create_retake(
        &self,
        student_id: i64,
        test_id: i64,
        due_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<TestAssignment> {
        self.create_retake_impl(student_id, test_id, due_at).await
    }
}
