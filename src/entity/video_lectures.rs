//! 视频课实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "video_lectures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub chapter_id: i64,
    pub title: String,
    pub video_url: String,
    pub duration_seconds: Option<i32>,
    pub sort_order: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::chapters::Entity",
        from = "Column::ChapterId",
        to = "super::chapters::Column::Id"
    )]
    Chapter,
}

impl Related<super::chapters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chapter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_video_lecture(self) -> crate::models::content::entities::VideoLecture {
        use chrono::{DateTime, Utc};
        use crate::models::content::entities::VideoLecture;

        VideoLecture {
            id: self.id,
            chapter_id: self.chapter_id,
            title: self.title,
            video_url: self.video_url,
            duration_seconds: self.duration_seconds,
            sort_order: self.sort_order,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
