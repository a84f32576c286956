//! 章节实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "chapters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub sort_order: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::video_lectures::Entity")]
    VideoLectures,
    #[sea_orm(has_many = "super::admin_notes::Entity")]
    AdminNotes,
    #[sea_orm(has_many = "super::student_notes::Entity")]
    StudentNotes,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::video_lectures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VideoLectures.def()
    }
}

impl Related<super::admin_notes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdminNotes.def()
    }
}

impl Related<super::student_notes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentNotes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_chapter(self) -> crate::models::courses::entities::Chapter {
        use chrono::{DateTime, Utc};
        use crate::models::courses::entities::Chapter;

        Chapter {
            id: self.id,
            course_id: self.course_id,
            title: self.title,
            sort_order: self.sort_order,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
