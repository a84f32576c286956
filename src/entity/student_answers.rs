//! 学生作答实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub question_id: i64,
    pub selected_option_id: i64,
    pub is_correct: bool,
    pub marks_obtained: i32,
    pub answered_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test_assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::test_assignments::Column::Id"
    )]
    Assignment,
    #[sea_orm(
        belongs_to = "super::questions::Entity",
        from = "Column::QuestionId",
        to = "super::questions::Column::Id"
    )]
    Question,
    #[sea_orm(
        belongs_to = "super::answer_options::Entity",
        from = "Column::SelectedOptionId",
        to = "super::answer_options::Column::Id"
    )]
    SelectedOption,
}

impl Related<super::test_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl Related<super::answer_options::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SelectedOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student_answer(self) -> crate::models::tests::entities::StudentAnswer {
        use chrono::{DateTime, Utc};
        use crate::models::tests::entities::StudentAnswer;

        StudentAnswer {
            id: self.id,
            assignment_id: self.assignment_id,
            question_id: self.question_id,
            selected_option_id: self.selected_option_id,
            is_correct: self.is_correct,
            marks_obtained: self.marks_obtained,
            answered_at: DateTime::<Utc>::from_timestamp(self.answered_at, 0).unwrap_or_default(),
        }
    }
}
