//! 测验分配实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub test_id: i64,
    pub attempt_number: i32,
    pub status: String,
    pub obtained_marks: Option<i32>,
    pub total_marks: Option<i32>,
    pub due_at: Option<i64>,
    pub assigned_at: i64,
    pub started_at: Option<i64>,
    pub submitted_at: Option<i64>,
    pub evaluated_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::tests::Entity",
        from = "Column::TestId",
        to = "super::tests::Column::Id"
    )]
    Test,
    #[sea_orm(has_many = "super::student_answers::Entity")]
    StudentAnswers,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::tests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Test.def()
    }
}

impl Related<super::student_answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentAnswers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_test_assignment(self) -> crate::models::tests::entities::TestAssignment {
        use chrono::{DateTime, Utc};
        use crate::models::tests::entities::{AssignmentStatus, TestAssignment};

        let to_time = |ts: i64| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default();

        TestAssignment {
            id: self.id,
            student_id: self.student_id,
            test_id: self.test_id,
            attempt_number: self.attempt_number,
            status: self
                .status
                .parse::<AssignmentStatus>()
                .unwrap_or(AssignmentStatus::Assigned),
            obtained_marks: self.obtained_marks,
            total_marks: self.total_marks,
            due_at: self.due_at.map(to_time),
            assigned_at: to_time(self.assigned_at),
            started_at: self.started_at.map(to_time),
            submitted_at: self.submitted_at.map(to_time),
            evaluated_at: self.evaluated_at.map(to_time),
        }
    }
}
