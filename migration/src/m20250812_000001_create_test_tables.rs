use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 测验表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Tests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tests::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Tests::ChapterId).big_integer().null())
                    .col(ColumnDef::new(Tests::Title).string().not_null())
                    .col(
                        ColumnDef::new(Tests::TotalMarks)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Tests::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Tests::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Tests::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tests::Table, Tests::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tests::Table, Tests::ChapterId)
                            .to(Chapters::Table, Chapters::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 题目表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::TestId).big_integer().not_null())
                    .col(ColumnDef::new(Questions::Text).text().not_null())
                    .col(
                        ColumnDef::new(Questions::Marks)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Questions::Table, Questions::TestId)
                            .to(Tests::Table, Tests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 选项表 ====================
        manager
            .create_table(
                Table::create()
                    .table(AnswerOptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AnswerOptions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AnswerOptions::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AnswerOptions::Text).string().not_null())
                    .col(
                        ColumnDef::new(AnswerOptions::IsCorrect)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AnswerOptions::Table, AnswerOptions::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 测验分配表 ====================
        manager
            .create_table(
                Table::create()
                    .table(TestAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestAssignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TestAssignments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestAssignments::TestId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestAssignments::AttemptNumber)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(TestAssignments::Status).string().not_null())
                    .col(
                        ColumnDef::new(TestAssignments::ObtainedMarks)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(TestAssignments::TotalMarks).integer().null())
                    .col(ColumnDef::new(TestAssignments::DueAt).big_integer().null())
                    .col(
                        ColumnDef::new(TestAssignments::AssignedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestAssignments::StartedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TestAssignments::SubmittedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TestAssignments::EvaluatedAt)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TestAssignments::Table, TestAssignments::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TestAssignments::Table, TestAssignments::TestId)
                            .to(Tests::Table, Tests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个学生对同一测验的尝试按序号唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_test_assignments_attempt")
                    .table(TestAssignments::Table)
                    .col(TestAssignments::StudentId)
                    .col(TestAssignments::TestId)
                    .col(TestAssignments::AttemptNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ==================== 学生答题表 ====================
        manager
            .create_table(
                Table::create()
                    .table(StudentAnswers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentAnswers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentAnswers::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAnswers::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAnswers::SelectedOptionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAnswers::IsCorrect)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(StudentAnswers::MarksObtained)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(StudentAnswers::AnsweredAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentAnswers::Table, StudentAnswers::AssignmentId)
                            .to(TestAssignments::Table, TestAssignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentAnswers::Table, StudentAnswers::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentAnswers::Table, StudentAnswers::SelectedOptionId)
                            .to(AnswerOptions::Table, AnswerOptions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一次尝试中每道题只保留一条作答
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_answers_assignment_question")
                    .table(StudentAnswers::Table)
                    .col(StudentAnswers::AssignmentId)
                    .col(StudentAnswers::QuestionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 常用查询索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tests_course_id")
                    .table(Tests::Table)
                    .col(Tests::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_questions_test_id")
                    .table(Questions::Table)
                    .col(Questions::TestId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_test_assignments_student_id")
                    .table(TestAssignments::Table)
                    .col(TestAssignments::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentAnswers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TestAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AnswerOptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tests::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Chapters {
    #[sea_orm(iden = "chapters")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Tests {
    #[sea_orm(iden = "tests")]
    Table,
    Id,
    CourseId,
    ChapterId,
    Title,
    TotalMarks,
    IsActive,
    IsPublished,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    TestId,
    Text,
    Marks,
}

#[derive(DeriveIden)]
enum AnswerOptions {
    #[sea_orm(iden = "answer_options")]
    Table,
    Id,
    QuestionId,
    Text,
    IsCorrect,
}

#[derive(DeriveIden)]
enum TestAssignments {
    #[sea_orm(iden = "test_assignments")]
    Table,
    Id,
    StudentId,
    TestId,
    AttemptNumber,
    Status,
    ObtainedMarks,
    TotalMarks,
    DueAt,
    AssignedAt,
    StartedAt,
    SubmittedAt,
    EvaluatedAt,
}

#[derive(DeriveIden)]
enum StudentAnswers {
    #[sea_orm(iden = "student_answers")]
    Table,
    Id,
    AssignmentId,
    QuestionId,
    SelectedOptionId,
    IsCorrect,
    MarksObtained,
    AnsweredAt,
}
