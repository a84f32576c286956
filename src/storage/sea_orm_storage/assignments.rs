use super::SeaOrmStorage;
use crate::entity::student_answers::{
    ActiveModel as AnswerActiveModel, Column as AnswerColumn, Entity as StudentAnswers,
};
use crate::entity::test_assignments::{ActiveModel, Column, Entity as TestAssignments};
use crate::entity::tests::Entity as Tests;
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginationInfo,
    tests::{
        entities::{AssignmentStatus, StudentAnswer, Test, TestAssignment},
        requests::{AnswerItem, AssignmentListQuery},
        responses::{AssignmentListResponse, QuestionWithOptions, SubmitResultResponse},
    },
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbBackend, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

/// 单题判卷结果
#[derive(Debug, Clone)]
pub(crate) struct GradedAnswer {
    pub question_id: i64,
    pub selected_option_id: i64,
    pub is_correct: bool,
    pub marks_obtained: i32,
}

/// 纯判卷逻辑：只统计属于本测验的题目与属于该题的选项，
/// 未知条目与重复作答直接跳过。
pub(crate) fn grade_answers(
    questions: &[QuestionWithOptions],
    answers: &[AnswerItem],
) -> (Vec<GradedAnswer>, i32) {
    let mut graded = Vec::new();
    let mut obtained = 0;

    for item in answers {
        let Some(question) = questions.iter().find(|q| q.question.id == item.question_id) else {
            continue;
        };

        // 同一题只记第一次作答
        if graded
            .iter()
            .any(|g: &GradedAnswer| g.question_id == item.question_id)
        {
            continue;
        }

        let Some(option) = question
            .options
            .iter()
            .find(|o| o.id == item.selected_option_id)
        else {
            continue;
        };

        let marks = if option.is_correct {
            question.question.marks
        } else {
            0
        };
        obtained += marks;

        graded.push(GradedAnswer {
            question_id: item.question_id,
            selected_option_id: item.selected_option_id,
            is_correct: option.is_correct,
            marks_obtained: marks,
        });
    }

    (graded, obtained)
}

/// 新尝试的编号顺延历史最大值，没有历史从 1 开始
pub(crate) fn next_attempt_number(max_attempt: Option<i32>) -> i32 {
    max_attempt.unwrap_or(0) + 1
}

impl SeaOrmStorage {
    /// 批量指派测验；仍有未了结尝试的学生跳过，返回 (指派数, 跳过数)
    pub async fn create_assignments_impl(
        &self,
        test_id: i64,
        student_ids: &[i64],
        due_at: Option<DateTime<Utc>>,
    ) -> Result<(u64, u64)> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let now = Utc::now().timestamp();
        let due_ts = due_at.map(|d| d.timestamp());
        let mut assigned = 0u64;
        let mut skipped = 0u64;

        for &student_id in student_ids {
            let unfinished = TestAssignments::find()
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::TestId.eq(test_id))
                .filter(Column::Status.is_in([
                    AssignmentStatus::Assigned.to_string(),
                    AssignmentStatus::Started.to_string(),
                ]))
                .count(&txn)
                .await
                .map_err(|e| LmsError::database_operation(format!("查询指派记录失败: {e}")))?;

            if unfinished > 0 {
                skipped += 1;
                continue;
            }

            // 同一学生可能有历史尝试（已判分、已撤销），编号必须顺延
            let max_attempt: Option<i32> = TestAssignments::find()
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::TestId.eq(test_id))
                .select_only()
                .column_as(Column::AttemptNumber.max(), "max_attempt")
                .into_tuple()
                .one(&txn)
                .await
                .map_err(|e| LmsError::database_operation(format!("查询作答次数失败: {e}")))?
                .flatten();

            let model = ActiveModel {
                student_id: Set(student_id),
                test_id: Set(test_id),
                attempt_number: Set(next_attempt_number(max_attempt)),
                status: Set(AssignmentStatus::Assigned.to_string()),
                due_at: Set(due_ts),
                assigned_at: Set(now),
                ..Default::default()
            };

            model
                .insert(&txn)
                .await
                .map_err(|e| LmsError::database_operation(format!("创建指派记录失败: {e}")))?;

            assigned += 1;
        }

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((assigned, skipped))
    }

    /// 按 ID 获取指派记录
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<TestAssignment>> {
        let result = TestAssignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询指派记录失败: {e}")))?;

        Ok(result.map(|m| m.into_test_assignment()))
    }

    /// 获取学生在某测验的最新一次指派（按次数倒序）
    pub async fn get_latest_assignment_impl(
        &self,
        student_id: i64,
        test_id: i64,
    ) -> Result<Option<TestAssignment>> {
        let result = TestAssignments::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::TestId.eq(test_id))
            .order_by_desc(Column::AttemptNumber)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询指派记录失败: {e}")))?;

        Ok(result.map(|m| m.into_test_assignment()))
    }

    /// 列出学生的全部指派及对应测验
    pub async fn list_student_assignments_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<(TestAssignment, Test)>> {
        let rows = TestAssignments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::AssignedAt)
            .find_also_related(Tests)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询指派列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(assignment, test)| {
                test.map(|t| (assignment.into_test_assignment(), t.into_test()))
            })
            .collect())
    }

    /// 分页列出测验的指派记录
    pub async fn list_test_assignments_impl(
        &self,
        test_id: i64,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let select = TestAssignments::find()
            .filter(Column::TestId.eq(test_id))
            .order_by_desc(Column::AssignedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询指派总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询指派页数失败: {e}")))?;

        let assignments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询指派列表失败: {e}")))?;

        Ok(AssignmentListResponse {
            items: assignments
                .into_iter()
                .map(|m| m.into_test_assignment())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 撤销指派
    pub async fn cancel_assignment_impl(&self, id: i64) -> Result<Option<TestAssignment>> {
        let existing = TestAssignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询指派记录失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            status: Set(AssignmentStatus::Cancelled.to_string()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("撤销指派失败: {e}")))?;

        Ok(Some(result.into_test_assignment()))
    }

    /// 开始作答：assigned -> started
    pub async fn start_assignment_impl(&self, id: i64) -> Result<Option<TestAssignment>> {
        let existing = match TestAssignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询指派记录失败: {e}")))?
        {
            Some(a) => a,
            None => return Ok(None),
        };

        let status = existing
            .status
            .parse::<AssignmentStatus>()
            .unwrap_or(AssignmentStatus::Assigned);
        if !status.can_start() {
            return Err(LmsError::invalid_state(format!(
                "指派 {id} 当前状态为 {status}，不能开始作答"
            )));
        }

        let model = ActiveModel {
            id: Set(id),
            status: Set(AssignmentStatus::Started.to_string()),
            started_at: Set(Some(Utc::now().timestamp())),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新指派状态失败: {e}")))?;

        Ok(Some(result.into_test_assignment()))
    }

    /// 交卷并即时判分（单事务）
    ///
    /// 已完成的指派重复提交时直接返回已存分数，保证幂等。
    pub async fn submit_assignment_impl(
        &self,
        assignment_id: i64,
        answers: &[AnswerItem],
    ) -> Result<SubmitResultResponse> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        // SQLite 不支持行锁，依赖其单写事务语义
        let mut select = TestAssignments::find_by_id(assignment_id);
        if self.db.get_database_backend() != DbBackend::Sqlite {
            select = select.lock_exclusive();
        }

        let assignment = select
            .one(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询指派记录失败: {e}")))?
            .ok_or_else(|| LmsError::not_found(format!("指派 {assignment_id} 不存在")))?;

        let status = assignment
            .status
            .parse::<AssignmentStatus>()
            .unwrap_or(AssignmentStatus::Assigned);

        if status.is_completed() {
            txn.rollback()
                .await
                .map_err(|e| LmsError::database_operation(format!("回滚事务失败: {e}")))?;

            return Ok(SubmitResultResponse {
                assignment_id,
                obtained_marks: assignment.obtained_marks.unwrap_or(0),
                total_marks: assignment.total_marks.unwrap_or(0),
                already_graded: true,
            });
        }

        if !status.can_submit() {
            return Err(LmsError::invalid_state(format!(
                "指派 {assignment_id} 当前状态为 {status}，不能交卷"
            )));
        }

        let test = Tests::find_by_id(assignment.test_id)
            .one(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验失败: {e}")))?
            .ok_or_else(|| LmsError::not_found(format!("测验 {} 不存在", assignment.test_id)))?;

        let questions = {
            use crate::entity::answer_options::Entity as AnswerOptions;
            use crate::entity::questions::{Column as QuestionColumn, Entity as Questions};

            let rows = Questions::find()
                .filter(QuestionColumn::TestId.eq(assignment.test_id))
                .order_by_asc(QuestionColumn::Id)
                .find_with_related(AnswerOptions)
                .all(&txn)
                .await
                .map_err(|e| LmsError::database_operation(format!("查询题目及选项失败: {e}")))?;

            rows.into_iter()
                .map(|(question, options)| QuestionWithOptions {
                    question: question.into_question(),
                    options: options
                        .into_iter()
                        .map(|o| o.into_answer_option())
                        .collect(),
                })
                .collect::<Vec<_>>()
        };

        let (graded, obtained) = grade_answers(&questions, answers);
        let now = Utc::now().timestamp();

        for g in &graded {
            AnswerActiveModel {
                assignment_id: Set(assignment_id),
                question_id: Set(g.question_id),
                selected_option_id: Set(g.selected_option_id),
                is_correct: Set(g.is_correct),
                marks_obtained: Set(g.marks_obtained),
                answered_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("保存答题记录失败: {e}")))?;
        }

        ActiveModel {
            id: Set(assignment_id),
            status: Set(AssignmentStatus::Evaluated.to_string()),
            obtained_marks: Set(Some(obtained)),
            total_marks: Set(Some(test.total_marks)),
            submitted_at: Set(Some(now)),
            evaluated_at: Set(Some(now)),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| LmsError::database_operation(format!("更新指派结果失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(SubmitResultResponse {
            assignment_id,
            obtained_marks: obtained,
            total_marks: test.total_marks,
            already_graded: false,
        })
    }

    /// 获取指派的答题记录
    pub async fn get_assignment_answers_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<StudentAnswer>> {
        let result = StudentAnswers::find()
            .filter(AnswerColumn::AssignmentId.eq(assignment_id))
            .order_by_asc(AnswerColumn::QuestionId)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询答题记录失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student_answer()).collect())
    }

    /// 列出学生在某测验的全部作答记录（按次数升序）
    pub async fn list_attempts_impl(
        &self,
        student_id: i64,
        test_id: i64,
    ) -> Result<Vec<TestAssignment>> {
        let result = TestAssignments::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::TestId.eq(test_id))
            .order_by_asc(Column::AttemptNumber)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作答记录失败: {e}")))?;

        Ok(result
            .into_iter()
            .map(|m| m.into_test_assignment())
            .collect())
    }

    /// 为学生创建重考指派，次数顺延
    pub async fn create_retake_impl(
        &self,
        student_id: i64,
        test_id: i64,
        due_at: Option<DateTime<Utc>>,
    ) -> Result<TestAssignment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let max_attempt: Option<i32> = TestAssignments::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::TestId.eq(test_id))
            .select_only()
            .column_as(Column::AttemptNumber.max(), "max_attempt")
            .into_tuple()
            .one(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作答次数失败: {e}")))?
            .flatten();

        let model = ActiveModel {
            student_id: Set(student_id),
            test_id: Set(test_id),
            attempt_number: Set(next_attempt_number(max_attempt)),
            status: Set(AssignmentStatus::Assigned.to_string()),
            due_at: Set(due_at.map(|d| d.timestamp())),
            assigned_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建重考指派失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_test_assignment())
    }
}

#[cfg(test)]
mod grading_tests {
    use super::*;
    use crate::models::tests::entities::{AnswerOption, Question};

    fn sample_questions() -> Vec<QuestionWithOptions> {
        let make_option = |id, question_id, correct| AnswerOption {
            id,
            question_id,
            text: format!("选项 {id}"),
            is_correct: correct,
        };

        vec![
            QuestionWithOptions {
                question: Question {
                    id: 1,
                    test_id: 10,
                    text: "第一题".to_string(),
                    marks: 2,
                },
                options: vec![make_option(11, 1, true), make_option(12, 1, false)],
            },
            QuestionWithOptions {
                question: Question {
                    id: 2,
                    test_id: 10,
                    text: "第二题".to_string(),
                    marks: 3,
                },
                options: vec![make_option(21, 2, false), make_option(22, 2, true)],
            },
        ]
    }

    #[test]
    fn test_grade_all_correct() {
        let questions = sample_questions();
        let answers = vec![
            AnswerItem {
                question_id: 1,
                selected_option_id: 11,
            },
            AnswerItem {
                question_id: 2,
                selected_option_id: 22,
            },
        ];

        let (graded, obtained) = grade_answers(&questions, &answers);
        assert_eq!(graded.len(), 2);
        assert_eq!(obtained, 5);
        assert!(graded.iter().all(|g| g.is_correct));
    }

    #[test]
    fn test_grade_partial() {
        let questions = sample_questions();
        let answers = vec![
            AnswerItem {
                question_id: 1,
                selected_option_id: 12,
            },
            AnswerItem {
                question_id: 2,
                selected_option_id: 22,
            },
        ];

        let (graded, obtained) = grade_answers(&questions, &answers);
        assert_eq!(obtained, 3);
        assert!(!graded[0].is_correct);
        assert_eq!(graded[0].marks_obtained, 0);
        assert_eq!(graded[1].marks_obtained, 3);
    }

    #[test]
    fn test_grade_skips_unknown_entries() {
        let questions = sample_questions();
        let answers = vec![
            // 不属于本测验的题目
            AnswerItem {
                question_id: 99,
                selected_option_id: 11,
            },
            // 选项不属于该题
            AnswerItem {
                question_id: 1,
                selected_option_id: 22,
            },
            AnswerItem {
                question_id: 2,
                selected_option_id: 22,
            },
        ];

        let (graded, obtained) = grade_answers(&questions, &answers);
        assert_eq!(graded.len(), 1);
        assert_eq!(obtained, 3);
    }

    #[test]
    fn test_grade_duplicate_answer_first_wins() {
        let questions = sample_questions();
        let answers = vec![
            AnswerItem {
                question_id: 1,
                selected_option_id: 12,
            },
            AnswerItem {
                question_id: 1,
                selected_option_id: 11,
            },
        ];

        let (graded, obtained) = grade_answers(&questions, &answers);
        assert_eq!(graded.len(), 1);
        assert_eq!(obtained, 0);
        assert_eq!(graded[0].selected_option_id, 12);
    }

    #[test]
    fn test_grade_empty_answers() {
        let questions = sample_questions();
        let (graded, obtained) = grade_answers(&questions, &[]);
        assert!(graded.is_empty());
        assert_eq!(obtained, 0);
    }

    #[test]
    fn test_attempt_number_continues_after_finished_attempts() {
        // 首次指派从 1 开始
        assert_eq!(next_attempt_number(None), 1);
        // 撤销或判分后再指派，编号顺延而不是回到 1
        assert_eq!(next_attempt_number(Some(1)), 2);
        assert_eq!(next_attempt_number(Some(4)), 5);
    }
}
