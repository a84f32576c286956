use super::SeaOrmStorage;
use crate::entity::answer_options::{
    ActiveModel as OptionActiveModel, Column as OptionColumn, Entity as AnswerOptions,
};
use crate::entity::questions::{
    ActiveModel as QuestionActiveModel, Column as QuestionColumn, Entity as Questions,
};
use crate::entity::tests::{ActiveModel, Column, Entity as Tests};
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginationInfo,
    tests::{
        entities::{AnswerOption, Question, Test},
        requests::{
            CreateOptionRequest, CreateQuestionRequest, CreateTestRequest, TestListQuery,
            UpdateOptionRequest, UpdateQuestionRequest, UpdateTestRequest,
        },
        responses::{QuestionWithOptions, TestListResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait, sea_query::Expr,
};

impl SeaOrmStorage {
    /// 创建测验
    pub async fn create_test_impl(&self, req: CreateTestRequest) -> Result<Test> {
        let model = ActiveModel {
            course_id: Set(req.course_id),
            chapter_id: Set(req.chapter_id),
            title: Set(req.title),
            total_marks: Set(0),
            is_active: Set(true),
            is_published: Set(false),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建测验失败: {e}")))?;

        Ok(result.into_test())
    }

    /// 按 ID 获取测验
    pub async fn get_test_by_id_impl(&self, id: i64) -> Result<Option<Test>> {
        let result = Tests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(result.map(|m| m.into_test()))
    }

    /// 分页列出测验
    pub async fn list_tests_with_pagination_impl(
        &self,
        query: TestListQuery,
    ) -> Result<TestListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Tests::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(published) = query.is_published {
            select = select.filter(Column::IsPublished.eq(published));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验页数失败: {e}")))?;

        let tests = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(TestListResponse {
            items: tests.into_iter().map(|m| m.into_test()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新测验
    pub async fn update_test_impl(&self, id: i64, update: UpdateTestRequest) -> Result<Option<Test>> {
        let existing = Tests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if update.chapter_id.is_some() {
            model.chapter_id = Set(update.chapter_id);
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新测验失败: {e}")))?;

        Ok(Some(result.into_test()))
    }

    /// 删除测验
    pub async fn delete_test_impl(&self, id: i64) -> Result<bool> {
        let result = Tests::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除测验失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 设置测验发布状态
    pub async fn set_test_published_impl(&self, id: i64, published: bool) -> Result<Option<Test>> {
        let existing = Tests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            is_published: Set(published),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新测验发布状态失败: {e}")))?;

        Ok(Some(result.into_test()))
    }

    /// 在事务内按题目重新累计测验总分
    async fn recompute_total_marks<C: ConnectionTrait>(&self, txn: &C, test_id: i64) -> Result<()> {
        let questions = Questions::find()
            .filter(QuestionColumn::TestId.eq(test_id))
            .all(txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询题目失败: {e}")))?;

        let total: i32 = questions.iter().map(|q| q.marks).sum();

        Tests::update_many()
            .col_expr(Column::TotalMarks, Expr::value(total))
            .filter(Column::Id.eq(test_id))
            .exec(txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新测验总分失败: {e}")))?;

        Ok(())
    }

    /// 创建题目及其选项（单事务，保证唯一正确选项与总分一致）
    pub async fn create_question_impl(
        &self,
        test_id: i64,
        req: CreateQuestionRequest,
    ) -> Result<QuestionWithOptions> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let question = QuestionActiveModel {
            test_id: Set(test_id),
            text: Set(req.text),
            marks: Set(req.marks),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| LmsError::database_operation(format!("创建题目失败: {e}")))?;

        // 多个选项标记为正确时只保留第一个
        let mut correct_seen = false;
        let mut options = Vec::with_capacity(req.options.len());
        for item in req.options {
            let is_correct = item.is_correct && !correct_seen;
            if is_correct {
                correct_seen = true;
            }

            let option = OptionActiveModel {
                question_id: Set(question.id),
                text: Set(item.text),
                is_correct: Set(is_correct),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建选项失败: {e}")))?;

            options.push(option.into_answer_option());
        }

        self.recompute_total_marks(&txn, test_id).await?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(QuestionWithOptions {
            question: question.into_question(),
            options,
        })
    }

    /// 按 ID 获取题目
    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 更新题目
    pub async fn update_question_impl(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        let existing = match Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询题目失败: {e}")))?
        {
            Some(q) => q,
            None => return Ok(None),
        };

        let marks_changed = update.marks.is_some_and(|m| m != existing.marks);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let mut model = QuestionActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(text) = update.text {
            model.text = Set(text);
        }

        if let Some(marks) = update.marks {
            model.marks = Set(marks);
        }

        let result = model
            .update(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新题目失败: {e}")))?;

        if marks_changed {
            self.recompute_total_marks(&txn, existing.test_id).await?;
        }

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(result.into_question()))
    }

    /// 删除题目并回算总分
    pub async fn delete_question_impl(&self, id: i64) -> Result<bool> {
        let existing = match Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询题目失败: {e}")))?
        {
            Some(q) => q,
            None => return Ok(false),
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let result = Questions::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除题目失败: {e}")))?;

        self.recompute_total_marks(&txn, existing.test_id).await?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建选项（若标记正确则先清除同题其它选项的正确标记）
    pub async fn create_option_impl(
        &self,
        question_id: i64,
        req: CreateOptionRequest,
    ) -> Result<AnswerOption> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        if req.is_correct {
            AnswerOptions::update_many()
                .col_expr(OptionColumn::IsCorrect, Expr::value(false))
                .filter(OptionColumn::QuestionId.eq(question_id))
                .exec(&txn)
                .await
                .map_err(|e| LmsError::database_operation(format!("清除正确选项失败: {e}")))?;
        }

        let result = OptionActiveModel {
            question_id: Set(question_id),
            text: Set(req.text),
            is_correct: Set(req.is_correct),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| LmsError::database_operation(format!("创建选项失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_answer_option())
    }

    /// 更新选项
    pub async fn update_option_impl(
        &self,
        id: i64,
        update: UpdateOptionRequest,
    ) -> Result<Option<AnswerOption>> {
        let existing = match AnswerOptions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选项失败: {e}")))?
        {
            Some(o) => o,
            None => return Ok(None),
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        if update.is_correct == Some(true) {
            AnswerOptions::update_many()
                .col_expr(OptionColumn::IsCorrect, Expr::value(false))
                .filter(OptionColumn::QuestionId.eq(existing.question_id))
                .filter(OptionColumn::Id.ne(id))
                .exec(&txn)
                .await
                .map_err(|e| LmsError::database_operation(format!("清除正确选项失败: {e}")))?;
        }

        let mut model = OptionActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(text) = update.text {
            model.text = Set(text);
        }

        if let Some(is_correct) = update.is_correct {
            model.is_correct = Set(is_correct);
        }

        let result = model
            .update(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新选项失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(result.into_answer_option()))
    }

    /// 删除选项
    pub async fn delete_option_impl(&self, id: i64) -> Result<bool> {
        let result = AnswerOptions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除选项失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出测验的全部题目及选项
    pub async fn list_questions_with_options_impl(
        &self,
        test_id: i64,
    ) -> Result<Vec<QuestionWithOptions>> {
        let rows = Questions::find()
            .filter(QuestionColumn::TestId.eq(test_id))
            .order_by_asc(QuestionColumn::Id)
            .find_with_related(AnswerOptions)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询题目及选项失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(question, options)| QuestionWithOptions {
                question: question.into_question(),
                options: options
                    .into_iter()
                    .map(|o| o.into_answer_option())
                    .collect(),
            })
            .collect())
    }
}
