//! 题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub test_id: i64,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub marks: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tests::Entity",
        from = "Column::TestId",
        to = "super::tests::Column::Id"
    )]
    Test,
    #[sea_orm(has_many = "super::answer_options::Entity")]
    AnswerOptions,
}

impl Related<super::tests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Test.def()
    }
}

impl Related<super::answer_options::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnswerOptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_question(self) -> crate::models::tests::entities::Question {
        use crate::models::tests::entities::Question;

        Question {
            id: self.id,
            test_id: self.test_id,
            text: self.text,
            marks: self.marks,
        }
    }
}
